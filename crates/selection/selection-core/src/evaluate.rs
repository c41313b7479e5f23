//! Fit/predict evaluation of the candidate set.

use selection_spi::{Candidate, Fittable, Prediction, Result, Role, SelectionError};

/// Clip predictions elementwise at zero (the predicted quantity cannot be
/// negative for estimator runs).
pub fn clip_non_negative(values: &mut [f64]) {
    for value in values.iter_mut() {
        if *value < 0.0 {
            *value = 0.0;
        }
    }
}

/// Fit every candidate on the identical training partition and predict the
/// held-out partition.
///
/// Failures are isolated per candidate: each slot of the returned vector is
/// either the candidate's prediction or its [`SelectionError::Fit`] failure,
/// aligned with the candidate order. Surviving candidates are unaffected by
/// a neighbour's failure.
pub fn evaluate_candidates<M: Fittable>(
    candidates: &mut [Candidate<M>],
    x_train: &[Vec<f64>],
    y_train: &[f64],
    x_test: &[Vec<f64>],
    role: Role,
) -> Vec<Result<Prediction>> {
    log::info!("fitting and predicting {} candidates", candidates.len());

    candidates
        .iter_mut()
        .map(|candidate| {
            let attempt = candidate
                .unit
                .fit(x_train, y_train)
                .and_then(|_| candidate.unit.predict(x_test));
            match attempt {
                Ok(mut values) => {
                    if role == Role::Estimator {
                        clip_non_negative(&mut values);
                    }
                    Ok(Prediction::new(&candidate.label, values))
                }
                Err(error) => {
                    log::warn!("candidate '{}' failed: {}", candidate.label, error);
                    Err(SelectionError::Fit {
                        candidate: candidate.label.clone(),
                        reason: error.to_string(),
                    })
                }
            }
        })
        .collect()
}
