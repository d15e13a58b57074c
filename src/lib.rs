pub mod classifiers;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::classifiers::{Algorithm, Classifier, classify};
pub use crate::core::{Dataset, Example, Label};
pub use crate::error::ClassifierError;
