//! Contracts consumed and exposed by the comparison core.

mod dataset_provider;
mod fittable;
mod model_store;
mod reporter;

pub use dataset_provider::{DatasetProvider, SplitData};
pub use fittable::Fittable;
pub use model_store::ModelStore;
pub use reporter::Reporter;
