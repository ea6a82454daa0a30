//! @ai:module:intent JSON summary document: per-dataset scores, best-row gaps and rankings
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, SummaryDocument
//! @ai:module:stateless true

use crate::dataset::ResultRow;
use crate::metrics::{BestComparison, CategoryRanking, DatasetAnalysis, ScoreSummary};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// @ai:intent Top-level shape of `summary.json`
#[derive(Debug, Serialize)]
pub struct SummaryDocument<'a> {
    pub datasets: Vec<DatasetEntry<'a>>,
}

/// @ai:intent One dataset as it appears in the summary, with the best-row gaps resolved
#[derive(Debug, Serialize)]
pub struct DatasetEntry<'a> {
    pub dataset: &'a str,
    pub best: &'a ResultRow,
    pub worst: &'a ResultRow,
    pub summary: ScoreSummary,
    pub best_vs: BestComparison,
    pub rankings: &'a [CategoryRanking],
}

impl<'a> SummaryDocument<'a> {
    /// @ai:intent Borrow analyses into the summary layout, keeping their order
    /// @ai:effects pure
    pub fn from_analyses(analyses: &'a [DatasetAnalysis]) -> Self {
        let datasets = analyses
            .iter()
            .map(|a| DatasetEntry {
                dataset: &a.dataset,
                best: &a.best,
                worst: &a.worst,
                summary: a.summary,
                best_vs: a.best_comparison(),
                rankings: &a.rankings,
            })
            .collect();

        Self { datasets }
    }
}

/// @ai:intent Trait for JSON summary generation
pub trait JsonReporterTrait: Send + Sync {
    fn generate(&self, analyses: &[DatasetAnalysis], output_path: &Path) -> Result<()>;
}

/// @ai:intent Writes `summary.json`
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:effects fs:write
    fn generate(&self, analyses: &[DatasetAnalysis], output_path: &Path) -> Result<()> {
        let file = File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        let mut out = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut out, &SummaryDocument::from_analyses(analyses))?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::table::row;
    use crate::dataset::DatasetTable;
    use crate::metrics::{DatasetAnalyzer, DatasetAnalyzerTrait};
    use tempfile::TempDir;

    fn wine() -> DatasetAnalysis {
        let table = DatasetTable::new(
            "wine",
            vec![
                row("wine", "SDAE", "50", "SMOTE", "CNN", 0.8),
                row("wine", "FCBF", "10", "NearMiss", "MLP", 0.4),
            ],
        )
        .unwrap();
        DatasetAnalyzer::new().analyze(table)
    }

    #[test]
    fn test_document_keeps_order_and_resolves_gaps() {
        let iris =
            DatasetTable::new("iris", vec![row("iris", "SDAE", "10", "SMOTE", "MLP", 0.5)])
                .unwrap();
        let analyses = [wine(), DatasetAnalyzer::new().analyze(iris)];

        let doc = SummaryDocument::from_analyses(&analyses);

        assert_eq!(doc.datasets.len(), 2);
        assert_eq!(doc.datasets[0].dataset, "wine");
        assert_eq!(doc.datasets[1].dataset, "iris");
        assert_eq!(doc.datasets[0].best_vs, analyses[0].best_comparison());
        assert_eq!(doc.datasets[1].best_vs.vs_worst, 0.0);
    }

    #[test]
    fn test_generate_summary_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("summary.json");

        JsonReporter::new().generate(&[wine()], &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.ends_with("}\n"));

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let entry = &value["datasets"][0];

        assert_eq!(entry["dataset"], "wine");
        assert_eq!(entry["best"]["score"], 0.8);
        assert_eq!(entry["worst"]["classifier"], "MLP");
        assert_eq!(entry["best_vs"]["vs_worst"], 66.6667);
        assert_eq!(entry["rankings"][0]["dimension"], "feature_selection");
        // ReliefF has no rows: undefined mean and diff
        let selection = &entry["rankings"][0];
        assert!(selection["means"][0]["mean"].is_null());
        assert!(selection["diff_max_min"].is_null());
    }
}
