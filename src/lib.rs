//! @ai:module:intent G-Mean experiment report library
//! @ai:module:layer application
//! @ai:module:public_api config, dataset, error, metrics, pipeline, report, schema

pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod schema;

pub use config::ReportConfig;
pub use dataset::{DatasetTable, ResultRow, ResultsLoader};
pub use error::ReportError;
pub use metrics::{CategoryRanking, DatasetAnalysis, DatasetAnalyzer, ScoreSummary};
pub use pipeline::{ReportPipeline, RunSummary};
pub use report::ReportGenerator;
pub use schema::Dimension;
