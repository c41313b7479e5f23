//! Scoring metrics used by the search engine and the evaluators.

/// Mean of a slice; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean squared error.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() || actual.len() != predicted.len() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64
}

/// Mean absolute error.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() || actual.len() != predicted.len() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Misclassification rate for discrete labels (0-1 loss).
pub fn error_rate(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() || actual.len() != predicted.len() {
        return f64::NAN;
    }
    let wrong = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, p)| (*a - *p).abs() > f64::EPSILON)
        .count();
    wrong as f64 / actual.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mse_perfect() {
        assert_eq!(mse(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_mse_known_value() {
        // errors of 1 and 3 -> (1 + 9) / 2 = 5
        assert_eq!(mse(&[0.0, 0.0], &[1.0, 3.0]), 5.0);
    }

    #[test]
    fn test_mae_known_value() {
        assert_eq!(mae(&[0.0, 0.0], &[1.0, 3.0]), 2.0);
    }

    #[test]
    fn test_mismatched_lengths_are_nan() {
        assert!(mse(&[1.0], &[1.0, 2.0]).is_nan());
        assert!(mae(&[1.0], &[]).is_nan());
        assert!(error_rate(&[], &[]).is_nan());
    }

    #[test]
    fn test_error_rate() {
        assert_eq!(error_rate(&[1.0, 0.0, 1.0, 1.0], &[1.0, 1.0, 1.0, 0.0]), 0.5);
        assert_eq!(error_rate(&[1.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}
