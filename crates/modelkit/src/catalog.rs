//! Descriptor constructors for the reference units.

use selection_spi::{CandidateDescriptor, ParamValue, Result, Role, SearchSpace};

use crate::classifier::RidgeClassifier;
use crate::knn::KnnRegressor;
use crate::ridge::RidgeRegressor;
use crate::unit::ModelUnit;

fn alpha_domain() -> Vec<ParamValue> {
    [0.001, 0.01, 0.1, 1.0, 10.0, 100.0]
        .into_iter()
        .map(ParamValue::Float)
        .collect()
}

/// Ridge regressor descriptor ("RR") with a log-spaced alpha grid and both
/// intercept modes.
pub fn ridge_regressor() -> Result<CandidateDescriptor<ModelUnit>> {
    let space = SearchSpace::new()
        .dim("alpha", alpha_domain())
        .dim(
            "fit_intercept",
            vec![ParamValue::Flag(true), ParamValue::Flag(false)],
        );
    CandidateDescriptor::new(
        "RR",
        "Ridge Regressor",
        Role::Estimator,
        space,
        ModelUnit::ridge(RidgeRegressor::default()),
    )
}

/// K-nearest-neighbours regressor descriptor ("KNR") with an odd-k domain.
pub fn knn_regressor() -> Result<CandidateDescriptor<ModelUnit>> {
    let space = SearchSpace::new().dim(
        "k",
        [1, 3, 5, 7, 9, 11, 15, 19]
            .into_iter()
            .map(ParamValue::Int)
            .collect(),
    );
    CandidateDescriptor::new(
        "KNR",
        "K-Nearest Neighbours Regressor",
        Role::Estimator,
        space,
        ModelUnit::knn(KnnRegressor::default()),
    )
}

/// Ridge classifier descriptor ("RC") with the shared alpha grid.
pub fn ridge_classifier() -> Result<CandidateDescriptor<ModelUnit>> {
    let space = SearchSpace::new().dim("alpha", alpha_domain());
    CandidateDescriptor::new(
        "RC",
        "Ridge Classifier",
        Role::Classifier,
        space,
        ModelUnit::ridge_classifier(RidgeClassifier::default()),
    )
}
