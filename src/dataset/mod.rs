//! @ai:module:intent Experiment result tables and their loading
//! @ai:module:layer domain
//! @ai:module:public_api ResultRow, DatasetTable, ResultFile, ResultsLoader

pub mod loader;
pub mod table;

pub use loader::{ResultFile, ResultsLoader, ResultsLoaderTrait};
pub use table::{DatasetTable, ResultRow};
