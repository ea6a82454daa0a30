//! @ai:module:intent Result rows and per-dataset tables
//! @ai:module:layer domain
//! @ai:module:public_api ResultRow, DatasetTable
//! @ai:module:stateless true

use crate::error::{ReportError, Result};
use crate::schema::Dimension;
use serde::Serialize;

/// @ai:intent Outcome of a single classification pipeline run
///
/// Category cells keep the raw text from the file; values outside the known
/// sets are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub dataset: String,
    pub feature_selection: String,
    pub feature_count: String,
    pub balancing: String,
    pub classifier: String,
    pub score: f64,
}

impl ResultRow {
    /// @ai:intent Raw cell for one categorical dimension
    /// @ai:effects pure
    pub fn value(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::FeatureSelection => &self.feature_selection,
            Dimension::FeatureCount => &self.feature_count,
            Dimension::Balancing => &self.balancing,
            Dimension::Classifier => &self.classifier,
        }
    }
}

/// @ai:intent All result rows of one dataset, never empty
#[derive(Debug, Clone)]
pub struct DatasetTable {
    name: String,
    rows: Vec<ResultRow>,
}

impl DatasetTable {
    /// @ai:intent Build a table, rejecting an empty row set
    /// @ai:effects pure
    pub fn new(name: impl Into<String>, rows: Vec<ResultRow>) -> Result<Self> {
        let name = name.into();

        if rows.is_empty() {
            return Err(ReportError::EmptyTable { dataset: name });
        }

        Ok(Self { name, rows })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// @ai:intent Score column in current row order
    /// @ai:effects pure
    pub fn scores(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.score).collect()
    }

    /// @ai:intent Stable ascending sort by score
    /// @ai:effects mutates self
    pub fn sort_by_score(&mut self) {
        self.rows.sort_by(|a, b| a.score.total_cmp(&b.score));
    }

    /// First row; the lowest score once sorted.
    pub fn first(&self) -> &ResultRow {
        &self.rows[0]
    }

    /// Last row; the highest score once sorted.
    pub fn last(&self) -> &ResultRow {
        &self.rows[self.rows.len() - 1]
    }
}

#[cfg(test)]
pub(crate) fn row(dataset: &str, selector: &str, count: &str, balancer: &str, classifier: &str, score: f64) -> ResultRow {
    ResultRow {
        dataset: dataset.to_string(),
        feature_selection: selector.to_string(),
        feature_count: count.to_string(),
        balancing: balancer.to_string(),
        classifier: classifier.to_string(),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_rejected() {
        let err = DatasetTable::new("empty", vec![]).unwrap_err();
        assert!(matches!(err, ReportError::EmptyTable { dataset } if dataset == "empty"));
    }

    #[test]
    fn test_sort_is_stable_for_equal_scores() {
        let mut table = DatasetTable::new(
            "A",
            vec![
                row("A", "SDAE", "10", "SMOTE", "MLP", 0.7),
                row("A", "ReliefF", "10", "SMOTE", "MLP", 0.5),
                row("A", "FCBF", "10", "SMOTE", "MLP", 0.7),
            ],
        )
        .unwrap();

        table.sort_by_score();

        assert_eq!(table.first().feature_selection, "ReliefF");
        assert_eq!(table.rows()[1].feature_selection, "SDAE");
        assert_eq!(table.last().feature_selection, "FCBF");
    }

    #[test]
    fn test_value_by_dimension() {
        let r = row("A", "FCBF", "50", "NearMiss", "CNN", 0.4);
        assert_eq!(r.value(Dimension::FeatureSelection), "FCBF");
        assert_eq!(r.value(Dimension::FeatureCount), "50");
        assert_eq!(r.value(Dimension::Balancing), "NearMiss");
        assert_eq!(r.value(Dimension::Classifier), "CNN");
    }
}
