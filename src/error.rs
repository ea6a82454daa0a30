//! @ai:module:intent Define error types for result loading and report generation
//! @ai:module:layer domain
//! @ai:module:public_api ReportError, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all report operations
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No results files found in {dir}")]
    NoResultFiles { dir: PathBuf },

    #[error("Dataset {dataset} has no result rows")]
    EmptyTable { dataset: String },

    #[error("Column '{column}' not found in {file}")]
    MissingColumn { file: PathBuf, column: String },

    #[error("Invalid G-Mean '{value}' at {file}:{row}")]
    InvalidScore {
        file: PathBuf,
        row: usize,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
