//! Numeric statistics used by the profiler

use std::cmp::Ordering;

/// Multiplier applied to the interquartile range for outlier fences
pub const IQR_FENCE: f64 = 1.5;

/// Quantile of sorted values using linear interpolation between closest ranks
pub fn quantile_linear(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Sort a copy of the values in ascending order
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Fences `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`
pub fn iqr_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let sorted = sorted(values);
    let q1 = quantile_linear(&sorted, 0.25)?;
    let q3 = quantile_linear(&sorted, 0.75)?;
    let iqr = q3 - q1;
    Some((q1 - IQR_FENCE * iqr, q3 + IQR_FENCE * iqr))
}

/// Number of values strictly outside the IQR fences
pub fn count_iqr_outliers(values: &[f64]) -> usize {
    match iqr_bounds(values) {
        Some((lower, upper)) => values.iter().filter(|&&v| v < lower || v > upper).count(),
        None => 0,
    }
}

/// True when every value is identical (or there are none)
pub fn is_constant(values: &[f64]) -> bool {
    match values.first() {
        Some(first) => values.iter().all(|v| v == first),
        None => true,
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Adjusted Fisher-Pearson skewness (G1).
///
/// Undefined for fewer than three values or zero spread.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 || is_constant(values) {
        return None;
    }

    let n_f = n as f64;
    let mean = mean(values);
    let (m2, m3) = values.iter().fold((0.0, 0.0), |(m2, m3), v| {
        let d = v - mean;
        (m2 + d * d, m3 + d * d * d)
    });
    let m2 = m2 / n_f;
    let m3 = m3 / n_f;
    if m2 <= 0.0 {
        return None;
    }

    let g1 = m3 / m2.powf(1.5);
    let adjusted = g1 * (n_f * (n_f - 1.0)).sqrt() / (n_f - 2.0);
    adjusted.is_finite().then_some(adjusted)
}

/// Pearson correlation over rows where both sides are present.
///
/// `None` when fewer than two paired rows remain or either side is constant.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .unzip();

    if xs.len() < 2 || is_constant(&xs) || is_constant(&ys) {
        return None;
    }

    let mean_x = mean(&xs);
    let mean_y = mean(&ys);
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in xs.iter().zip(ys.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom <= 0.0 || !denom.is_finite() {
        return None;
    }
    Some((sxy / denom).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_linear_interpolation() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_linear(&values, 0.25), Some(1.75));
        assert_eq!(quantile_linear(&values, 0.5), Some(2.5));
        assert_eq!(quantile_linear(&values, 0.75), Some(3.25));
        assert_eq!(quantile_linear(&[7.0], 0.25), Some(7.0));
        assert_eq!(quantile_linear(&[], 0.5), None);
    }

    #[test]
    fn test_count_iqr_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        assert_eq!(count_iqr_outliers(&values), 1);
        assert_eq!(count_iqr_outliers(&[5.0, 5.0, 5.0]), 0);
        assert_eq!(count_iqr_outliers(&[]), 0);
    }

    #[test]
    fn test_skewness() {
        assert_eq!(skewness(&[1.0, 2.0]), None);
        assert_eq!(skewness(&[3.0, 3.0, 3.0, 3.0]), None);

        let symmetric = skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(symmetric.abs() < 1e-12);

        let right = skewness(&[1.0, 1.0, 1.0, 2.0, 10.0]).unwrap();
        assert!(right > 0.0);
    }

    #[test]
    fn test_skewness_matches_adjusted_estimator() {
        // G1 for [1, 2, 3, 10]: m2 = 12.5, m3 = 45, g1 = 1.01823, adj = g1 * sqrt(12) / 2
        let g = skewness(&[1.0, 2.0, 3.0, 10.0]).unwrap();
        let expected = (45.0 / 12.5f64.powf(1.5)) * 12f64.sqrt() / 2.0;
        assert!((g - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = [Some(1.0), Some(2.0), Some(3.0)];
        let y = [Some(3.0), Some(2.0), Some(1.0)];
        assert_eq!(pearson(&x, &y), Some(-1.0));
    }

    #[test]
    fn test_pearson_degenerate() {
        let x = [Some(1.0), Some(2.0), Some(3.0)];
        let constant = [Some(4.0), Some(4.0), Some(4.0)];
        assert_eq!(pearson(&x, &constant), None);

        let sparse = [Some(1.0), None, None];
        assert_eq!(pearson(&x, &sparse), None);
    }

    #[test]
    fn test_pearson_pairwise_complete() {
        let x = [Some(1.0), Some(2.0), None, Some(4.0)];
        let y = [Some(2.0), Some(4.0), Some(100.0), Some(8.0)];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }
}
