//! @ai:module:intent Turn a loaded dataset table into a full analysis
//! @ai:module:layer application
//! @ai:module:public_api DatasetAnalyzer
//! @ai:module:stateless true

use crate::dataset::DatasetTable;
use crate::metrics::ranking::rank_dimension;
use crate::metrics::types::{DatasetAnalysis, ScoreSummary};
use crate::schema::Dimension;

/// @ai:intent Trait for dataset analysis
pub trait DatasetAnalyzerTrait: Send + Sync {
    /// @ai:intent Sort a table by score and derive its statistics and rankings
    fn analyze(&self, table: DatasetTable) -> DatasetAnalysis;
}

/// @ai:intent Computes best/worst rows, score summary and category rankings
pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    /// @ai:intent Create a new dataset analyzer
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetAnalyzerTrait for DatasetAnalyzer {
    /// @ai:effects pure
    fn analyze(&self, mut table: DatasetTable) -> DatasetAnalysis {
        table.sort_by_score();

        let summary = ScoreSummary::from_sorted(&table.scores());
        let rankings = Dimension::ALL
            .iter()
            .map(|dimension| rank_dimension(table.rows(), *dimension))
            .collect();

        tracing::debug!(
            "Dataset {}: {} rows, best {}, worst {}",
            table.name(),
            table.len(),
            table.last().score,
            table.first().score
        );

        DatasetAnalysis {
            dataset: table.name().to_string(),
            best: table.last().clone(),
            worst: table.first().clone(),
            summary,
            rankings,
        }
    }
}
