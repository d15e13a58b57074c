pub mod dataset_reader;
mod error;
pub mod fold_file;

pub use dataset_reader::{parse_test_set, parse_training_set, read_test_set, read_training_set};
pub use error::DataError;
pub use fold_file::{parse_folds, read_folds, write_folds, write_folds_to};
