//! @ai:module:intent Per-dataset statistics and category rankings
//! @ai:module:layer application
//! @ai:module:public_api DatasetAnalyzer, DatasetAnalysis, ScoreSummary, CategoryRanking, BestComparison

pub mod aggregator;
pub mod ranking;
pub mod stats;
pub mod types;

pub use aggregator::{DatasetAnalyzer, DatasetAnalyzerTrait};
pub use ranking::rank_dimension;
pub use types::{BestComparison, CategoryMean, CategoryRanking, DatasetAnalysis, ScoreSummary};
