//! @ai:module:intent CSV loader for per-dataset experiment results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ResultsLoader, ResultFile
//! @ai:module:stateless true

use crate::dataset::table::{DatasetTable, ResultRow};
use crate::error::{ReportError, Result};
use crate::metrics::stats::round_to;
use crate::schema::{Dimension, SCORE_COLUMN};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Decimal places scores are rounded to right after loading.
pub const SCORE_DECIMALS: i32 = 4;

/// @ai:intent A discovered results file and the dataset it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFile {
    pub dataset: String,
    pub path: PathBuf,
}

/// @ai:intent Trait for locating and loading results files
pub trait ResultsLoaderTrait: Send + Sync {
    /// @ai:intent List results files, failing when there are none
    fn discover(&self, results_dir: &Path) -> Result<Vec<ResultFile>>;

    /// @ai:intent Load one results file into a rounded table
    fn load(&self, file: &ResultFile) -> Result<DatasetTable>;
}

/// @ai:intent Loads experiment results from CSV files
/// @ai:effects pure (stateless)
pub struct ResultsLoader;

impl ResultsLoader {
    /// @ai:intent Create a new results loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Find all CSV files directly inside a directory, sorted by path
    /// @ai:effects fs:read
    fn find_result_files(results_dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(results_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "csv")
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// @ai:intent Locate a header by exact name
    /// @ai:effects pure
    fn column_index(headers: &csv::StringRecord, column: &str, path: &Path) -> Result<usize> {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ReportError::MissingColumn {
                file: path.to_path_buf(),
                column: column.to_string(),
            })
    }
}

impl Default for ResultsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsLoaderTrait for ResultsLoader {
    /// @ai:effects fs:read
    fn discover(&self, results_dir: &Path) -> Result<Vec<ResultFile>> {
        let files: Vec<ResultFile> = Self::find_result_files(results_dir)
            .into_iter()
            .map(|path| ResultFile {
                dataset: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path,
            })
            .collect();

        if files.is_empty() {
            return Err(ReportError::NoResultFiles {
                dir: results_dir.to_path_buf(),
            });
        }

        tracing::info!(
            "Found {} results files in {}",
            files.len(),
            results_dir.display()
        );
        Ok(files)
    }

    /// @ai:effects fs:read
    fn load(&self, file: &ResultFile) -> Result<DatasetTable> {
        let mut reader = csv::Reader::from_path(&file.path)?;
        let headers = reader.headers()?.clone();

        let score_idx = Self::column_index(&headers, SCORE_COLUMN, &file.path)?;
        let mut dim_idx = [0usize; 4];
        for (slot, dimension) in dim_idx.iter_mut().zip(Dimension::ALL) {
            *slot = Self::column_index(&headers, dimension.column(), &file.path)?;
        }

        let mut rows = Vec::new();

        for (row_no, record) in reader.records().enumerate() {
            let record = record?;
            let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();

            let raw_score = cell(score_idx);
            let score: f64 = raw_score
                .trim()
                .parse()
                .map_err(|_| ReportError::InvalidScore {
                    file: file.path.clone(),
                    // header is line 1
                    row: row_no + 2,
                    value: raw_score.clone(),
                })?;

            rows.push(ResultRow {
                dataset: file.dataset.clone(),
                feature_selection: cell(dim_idx[0]),
                feature_count: cell(dim_idx[1]),
                balancing: cell(dim_idx[2]),
                classifier: cell(dim_idx[3]),
                score: round_to(score, SCORE_DECIMALS),
            });
        }

        tracing::debug!("Loaded {} rows for dataset {}", rows.len(), file.dataset);
        DatasetTable::new(file.dataset.clone(), rows)
    }
}

#[cfg(test)]
pub(crate) const TEST_HEADER: &str = "G-Mean,Algoritmo de seleção de atributos,Número de atributos selecionados,Método de Balanceamento,Classificador";

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_results_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);

        let mut file = std::fs::File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_discover_sorted_csv_only() {
        let temp = TempDir::new().unwrap();
        create_results_file(temp.path(), "b.csv", TEST_HEADER);
        create_results_file(temp.path(), "a.csv", TEST_HEADER);
        create_results_file(temp.path(), "notes.txt", "ignored");
        std::fs::create_dir(temp.path().join("nested")).unwrap();
        create_results_file(&temp.path().join("nested"), "c.csv", TEST_HEADER);

        let files = ResultsLoader::new().discover(temp.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.dataset.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_discover_empty_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = ResultsLoader::new().discover(temp.path()).unwrap_err();
        assert!(matches!(err, ReportError::NoResultFiles { .. }));
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = ResultsLoader::new()
            .discover(&temp.path().join("absent"))
            .unwrap_err();
        assert!(matches!(err, ReportError::NoResultFiles { .. }));
    }

    #[test]
    fn test_load_rounds_scores() {
        let temp = TempDir::new().unwrap();
        let content = format!(
            "{TEST_HEADER}\n0.123456,ReliefF,10,SMOTE,MLP\n0.98766,SDAE,50,NearMiss,CNN\n"
        );
        create_results_file(temp.path(), "A.csv", &content);

        let loader = ResultsLoader::new();
        let files = loader.discover(temp.path()).unwrap();
        let table = loader.load(&files[0]).unwrap();

        assert_eq!(table.name(), "A");
        assert_eq!(table.scores(), vec![0.1235, 0.9877]);
        assert_eq!(table.rows()[1].balancing, "NearMiss");
        assert_eq!(table.rows()[1].feature_count, "50");
    }

    #[test]
    fn test_load_ignores_extra_columns_and_order() {
        let temp = TempDir::new().unwrap();
        let content = "Classificador,Extra,Método de Balanceamento,G-Mean,Número de atributos selecionados,Algoritmo de seleção de atributos\nMLP,x,SMOTE,0.5,100,FCBF\n";
        create_results_file(temp.path(), "B.csv", content);

        let loader = ResultsLoader::new();
        let files = loader.discover(temp.path()).unwrap();
        let table = loader.load(&files[0]).unwrap();

        let row = table.first();
        assert_eq!(row.feature_selection, "FCBF");
        assert_eq!(row.feature_count, "100");
        assert_eq!(row.classifier, "MLP");
        assert_eq!(row.score, 0.5);
    }

    #[test]
    fn test_load_missing_column() {
        let temp = TempDir::new().unwrap();
        let content = "G-Mean,Classificador\n0.5,MLP\n";
        create_results_file(temp.path(), "C.csv", content);

        let loader = ResultsLoader::new();
        let files = loader.discover(temp.path()).unwrap();
        let err = loader.load(&files[0]).unwrap_err();

        assert!(matches!(
            err,
            ReportError::MissingColumn { column, .. } if column == "Algoritmo de seleção de atributos"
        ));
    }

    #[test]
    fn test_load_invalid_score() {
        let temp = TempDir::new().unwrap();
        let content = format!("{TEST_HEADER}\n0.5,ReliefF,10,SMOTE,MLP\nabc,SDAE,10,SMOTE,MLP\n");
        create_results_file(temp.path(), "D.csv", &content);

        let loader = ResultsLoader::new();
        let files = loader.discover(temp.path()).unwrap();
        let err = loader.load(&files[0]).unwrap_err();

        assert!(matches!(err, ReportError::InvalidScore { row: 3, .. }));
    }

    #[test]
    fn test_load_header_only_is_empty_table() {
        let temp = TempDir::new().unwrap();
        create_results_file(temp.path(), "E.csv", &format!("{TEST_HEADER}\n"));

        let loader = ResultsLoader::new();
        let files = loader.discover(temp.path()).unwrap();
        let err = loader.load(&files[0]).unwrap_err();

        assert!(matches!(err, ReportError::EmptyTable { .. }));
    }
}
