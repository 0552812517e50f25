//! Statistical utility functions.

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Weighted arithmetic mean of `values`.
///
/// Returns NaN when the slices are empty, have different lengths, or the
/// weights sum to zero.
///
/// # Example
/// ```
/// use weather_forecast::utils::weighted_mean;
///
/// let m = weighted_mean(&[-3.0, -5.0], &[0.8, 1.0]);
/// assert!((m - (-7.4 / 1.8)).abs() < 1e-12);
/// ```
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> f64 {
    if values.is_empty() || values.len() != weights.len() {
        return f64::NAN;
    }
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return f64::NAN;
    }
    values
        .iter()
        .zip(weights)
        .map(|(v, w)| v * w)
        .sum::<f64>()
        / total
}

/// Geometric weights favouring the most recent entry, oldest first.
///
/// Entry `i` of `count` gets `factor^(count - 1 - i)`: the newest weight is 1
/// and each step back in time multiplies by `factor`.
pub fn recency_weights(count: usize, factor: f64) -> Vec<f64> {
    let mut weights = Vec::with_capacity(count);
    let mut w = 1.0;
    for _ in 0..count {
        weights.push(w);
        w *= factor;
    }
    weights.reverse();
    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn weighted_mean_calculates_correctly() {
        assert_relative_eq!(
            weighted_mean(&[1.0, 3.0], &[1.0, 1.0]),
            2.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            weighted_mean(&[1.0, 3.0], &[3.0, 1.0]),
            1.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(weighted_mean(&[7.0], &[0.25]), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn weighted_mean_rejects_bad_input() {
        assert!(weighted_mean(&[], &[]).is_nan());
        assert!(weighted_mean(&[1.0, 2.0], &[1.0]).is_nan());
        assert!(weighted_mean(&[1.0], &[0.0]).is_nan());
    }

    #[test]
    fn recency_weights_are_oldest_first() {
        let w = recency_weights(3, 0.5);
        assert_eq!(w.len(), 3);
        assert_relative_eq!(w[0], 0.25, epsilon = 1e-12);
        assert_relative_eq!(w[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(w[2], 1.0, epsilon = 1e-12);

        assert!(recency_weights(0, 0.8).is_empty());
        assert_eq!(recency_weights(4, 1.0), vec![1.0; 4]);
    }
}
