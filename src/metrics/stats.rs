//! @ai:module:intent Descriptive statistics over score columns
//! @ai:module:layer domain
//! @ai:module:public_api round_to, mean, median, quantile, diff_percent
//! @ai:module:stateless true

/// Decimal places for every percentage difference.
pub const DIFF_DECIMALS: i32 = 4;

/// @ai:intent Round to a number of decimals, ties to even
/// @ai:effects pure
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// @ai:intent Arithmetic mean, undefined for no values
/// @ai:effects pure
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// @ai:intent Median of values already sorted ascending
/// @ai:pre sorted is ascending
/// @ai:effects pure
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();

    match n {
        0 => None,
        _ if n % 2 == 1 => Some(sorted[n / 2]),
        _ => Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0),
    }
}

/// @ai:intent Quantile by linear interpolation between closest ranks
/// @ai:pre sorted is ascending, 0 <= q <= 1
/// @ai:effects pure
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let last = sorted.len() - 1;
    let position = q * last as f64;
    let lower = (position.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let gamma = position - lower as f64;

    Some(lerp(sorted[lower], sorted[upper], gamma))
}

/// Interpolates from the nearer end so `t == 1` returns `b` exactly.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;

    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// @ai:intent Symmetric percentage difference |a-b| / mean(a,b) * 100
/// @ai:effects pure
pub fn diff_percent(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() / ((a + b) / 2.0) * 100.0;
    round_to(diff, DIFF_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_four_decimals() {
        assert_eq!(round_to(0.666_666_6, 4), 0.6667);
        assert_eq!(round_to(0.12344, 4), 0.1234);
        assert_eq!(round_to(1.0, 4), 1.0);
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert!((mean(&[0.5, 0.6, 0.9]).unwrap() - 0.666_666).abs() < 1e-5);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[0.5, 0.6, 0.9]), Some(0.6));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_quantiles_linear() {
        let sorted = [0.5, 0.6, 0.9];
        assert_eq!(round_to(quantile(&sorted, 0.25).unwrap(), 4), 0.55);
        assert_eq!(round_to(quantile(&sorted, 0.75).unwrap(), 4), 0.75);
        assert_eq!(quantile(&sorted, 0.0), Some(0.5));
        assert_eq!(quantile(&sorted, 1.0), Some(0.9));
    }

    #[test]
    fn test_quantiles_between_ranks() {
        // Q1 at position 0.75, Q3 at 2.25
        let sorted = [0.1, 0.2, 0.4, 0.8];
        assert_eq!(quantile(&sorted, 0.25), Some(0.17500000000000002));
        assert_eq!(quantile(&sorted, 0.75), Some(0.5));

        // Q1 at position 1.75, Q3 at 5.25
        let sorted = [0.31, 0.42, 0.47, 0.55, 0.6, 0.68, 0.73, 0.9];
        assert_eq!(quantile(&sorted, 0.25), Some(0.45749999999999996));
        assert_eq!(quantile(&sorted, 0.75), Some(0.6925));
    }

    #[test]
    fn test_quantile_upper_weight_interpolates_from_upper_rank() {
        // from the lower rank this would be 0.024999999999999998
        let sorted = [0.01, 0.03, 0.95, 0.97];
        assert_eq!(quantile(&sorted, 0.25), Some(0.025));
        assert_eq!(quantile(&sorted, 0.75), Some(0.955));
        assert_eq!(lerp(0.01, 0.03, 0.75), 0.025);
        assert_eq!(lerp(0.01, 0.03, 0.25), 0.01 + (0.03 - 0.01) * 0.25);
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile(&[0.42], 0.25), Some(0.42));
        assert_eq!(quantile(&[0.42], 0.75), Some(0.42));
    }

    #[test]
    fn test_diff_percent_symmetric() {
        assert_eq!(diff_percent(0.8, 0.7), diff_percent(0.7, 0.8));
        assert_eq!(diff_percent(0.9, 0.3), diff_percent(0.3, 0.9));
    }

    #[test]
    fn test_diff_percent_identity() {
        assert_eq!(diff_percent(0.61, 0.61), 0.0);
    }

    #[test]
    fn test_diff_percent_values() {
        assert_eq!(diff_percent(0.8, 0.7), 13.3333);
        assert_eq!(diff_percent(0.8, 0.6), 28.5714);
    }
}
