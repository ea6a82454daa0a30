//! @ai:module:intent Rank the known values of a categorical dimension by mean score
//! @ai:module:layer domain
//! @ai:module:public_api rank_dimension
//! @ai:module:stateless true

use crate::dataset::ResultRow;
use crate::metrics::stats::{diff_percent, mean};
use crate::metrics::types::{CategoryMean, CategoryRanking};
use crate::schema::Dimension;
use std::cmp::Ordering;

/// @ai:intent Mean score per known value of a dimension, in declared order
/// @ai:effects pure
///
/// Rows whose cell is not one of the known values do not count towards any mean.
pub fn category_means(rows: &[ResultRow], dimension: Dimension) -> Vec<CategoryMean> {
    dimension
        .values()
        .into_iter()
        .map(|value| {
            let scores: Vec<f64> = rows
                .iter()
                .filter(|r| dimension.matches(r.value(dimension), value))
                .map(|r| r.score)
                .collect();

            CategoryMean {
                value,
                mean: mean(&scores),
            }
        })
        .collect()
}

/// @ai:intent Rank a dimension's values ascending by mean score
/// @ai:effects pure
pub fn rank_dimension(rows: &[ResultRow], dimension: Dimension) -> CategoryRanking {
    let means = category_means(rows, dimension);

    for missing in means.iter().filter(|m| m.mean.is_none()) {
        tracing::warn!(
            "No rows with {} = {}; ranking it lowest",
            dimension.column(),
            missing.value
        );
    }

    let mut ranked: Vec<&CategoryMean> = means.iter().collect();
    // stable: equal means keep declared order
    ranked.sort_by(|a, b| compare_means(a.mean, b.mean));

    let (min, med, max) = (ranked[0], ranked[1], ranked[2]);
    let diff_max_med = optional_diff(max.mean, med.mean);
    let diff_max_min = optional_diff(max.mean, min.mean);
    let (max, med, min) = (max.value, med.value, min.value);

    CategoryRanking {
        dimension,
        means,
        max,
        med,
        min,
        diff_max_med,
        diff_max_min,
    }
}

/// Undefined means order before every defined one.
fn compare_means(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

fn optional_diff(a: Option<f64>, b: Option<f64>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => diff_percent(a, b),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::table::row;

    fn selector_rows() -> Vec<ResultRow> {
        let mut rows = Vec::new();
        for (selector, scores) in [
            ("ReliefF", [0.6, 0.7, 0.8]),
            ("SDAE", [0.7, 0.8, 0.9]),
            ("FCBF", [0.5, 0.6, 0.7]),
        ] {
            for score in scores {
                rows.push(row("A", selector, "10", "SMOTE", "MLP", score));
            }
        }
        rows
    }

    #[test]
    fn test_rank_selectors_by_mean() {
        let ranking = rank_dimension(&selector_rows(), Dimension::FeatureSelection);

        assert_eq!(ranking.max, "SDAE");
        assert_eq!(ranking.med, "ReliefF");
        assert_eq!(ranking.min, "FCBF");
        assert_eq!(ranking.diff_max_med, 13.3333);
        assert_eq!(ranking.diff_max_min, 28.5714);
    }

    #[test]
    fn test_ties_keep_declared_order() {
        let rows = vec![
            row("A", "ReliefF", "10", "SMOTE", "MLP", 0.5),
            row("A", "ReliefF", "10", "SMOTETomek", "MLP", 0.5),
            row("A", "ReliefF", "10", "NearMiss", "MLP", 0.5),
        ];

        let ranking = rank_dimension(&rows, Dimension::Balancing);

        assert_eq!(ranking.min, "SMOTE");
        assert_eq!(ranking.med, "SMOTETomek");
        assert_eq!(ranking.max, "NearMiss");
        assert_eq!(ranking.diff_max_med, 0.0);
        assert_eq!(ranking.diff_max_min, 0.0);
    }

    #[test]
    fn test_unknown_values_are_excluded() {
        let mut rows = selector_rows();
        rows.push(row("A", "PCA", "10", "SMOTE", "MLP", 1.0));
        rows.push(row("A", "relieff", "10", "SMOTE", "MLP", 0.0));

        let ranking = rank_dimension(&rows, Dimension::FeatureSelection);

        assert_eq!(ranking.max, "SDAE");
        assert_eq!(ranking.diff_max_min, 28.5714);
        let relieff = &ranking.means[0];
        assert_eq!(relieff.value, "ReliefF");
        assert!((relieff.mean.unwrap() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_feature_count_matches_float_cells() {
        let rows = vec![
            row("A", "SDAE", "10.0", "SMOTE", "MLP", 0.9),
            row("A", "SDAE", "50", "SMOTE", "MLP", 0.5),
            row("A", "SDAE", "100", "SMOTE", "MLP", 0.7),
        ];

        let ranking = rank_dimension(&rows, Dimension::FeatureCount);

        assert_eq!(ranking.max, "10");
        assert_eq!(ranking.med, "100");
        assert_eq!(ranking.min, "50");
    }

    #[test]
    fn test_missing_value_ranks_lowest_with_undefined_diff() {
        let rows = vec![
            row("A", "SDAE", "10", "SMOTE", "MLP", 0.4),
            row("A", "SDAE", "10", "SMOTE", "CNN", 0.8),
        ];

        let ranking = rank_dimension(&rows, Dimension::Classifier);

        assert_eq!(ranking.min, "DecisionTree");
        assert_eq!(ranking.med, "MLP");
        assert_eq!(ranking.max, "CNN");
        assert_eq!(ranking.diff_max_med, diff_percent(0.8, 0.4));
        assert!(ranking.diff_max_min.is_nan());
    }
}
