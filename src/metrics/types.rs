//! @ai:module:intent Metric types for per-dataset analysis
//! @ai:module:layer domain
//! @ai:module:public_api ScoreSummary, CategoryMean, CategoryRanking, BestComparison, DatasetAnalysis
//! @ai:module:stateless true

use crate::dataset::ResultRow;
use crate::metrics::stats::{diff_percent, mean, median, quantile};
use crate::schema::Dimension;
use serde::Serialize;

/// @ai:intent Summary statistics of a dataset's score column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub mean: f64,
    pub median: f64,
    pub first_quartile: f64,
    pub third_quartile: f64,
}

impl ScoreSummary {
    /// @ai:intent Compute summary from scores sorted ascending
    /// @ai:pre sorted is ascending and non-empty
    /// @ai:effects pure
    pub fn from_sorted(sorted: &[f64]) -> Self {
        Self {
            mean: mean(sorted).unwrap_or(f64::NAN),
            median: median(sorted).unwrap_or(f64::NAN),
            first_quartile: quantile(sorted, 0.25).unwrap_or(f64::NAN),
            third_quartile: quantile(sorted, 0.75).unwrap_or(f64::NAN),
        }
    }
}

/// @ai:intent Mean score of the rows holding one known category value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMean {
    pub value: &'static str,
    /// `None` when no row holds the value
    pub mean: Option<f64>,
}

/// @ai:intent Known values of one dimension ranked by mean score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRanking {
    pub dimension: Dimension,
    /// Means in declared value order
    pub means: Vec<CategoryMean>,
    pub max: &'static str,
    pub med: &'static str,
    pub min: &'static str,
    pub diff_max_med: f64,
    pub diff_max_min: f64,
}

/// @ai:intent Percentage gaps between the best score and other reference points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestComparison {
    pub vs_worst: f64,
    pub vs_first_quartile: f64,
    pub vs_median: f64,
    pub vs_mean: f64,
    pub vs_third_quartile: f64,
}

/// @ai:intent Complete analysis of one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetAnalysis {
    pub dataset: String,
    pub best: ResultRow,
    pub worst: ResultRow,
    pub summary: ScoreSummary,
    /// One ranking per dimension in `Dimension::ALL` order
    pub rankings: Vec<CategoryRanking>,
}

impl DatasetAnalysis {
    /// @ai:intent Compare the best score against worst, quartiles, median and mean
    /// @ai:effects pure
    pub fn best_comparison(&self) -> BestComparison {
        let best = self.best.score;

        BestComparison {
            vs_worst: diff_percent(best, self.worst.score),
            vs_first_quartile: diff_percent(best, self.summary.first_quartile),
            vs_median: diff_percent(best, self.summary.median),
            vs_mean: diff_percent(best, self.summary.mean),
            vs_third_quartile: diff_percent(best, self.summary.third_quartile),
        }
    }

    /// @ai:intent Ranking for one dimension
    /// @ai:effects pure
    pub fn ranking(&self, dimension: Dimension) -> Option<&CategoryRanking> {
        self.rankings.iter().find(|r| r.dimension == dimension)
    }
}
