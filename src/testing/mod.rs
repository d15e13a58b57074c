mod dummies;
pub mod fixtures;
mod spies;
mod stubs;

pub use dummies::FailingClassifier;
pub use spies::{TrainSpyClassifier, TrainSpyHandle};
pub use stubs::{ContrarianClassifier, OracleClassifier};
