mod cross_validation;
mod report;
mod stratified_folds;

pub use cross_validation::CrossValidator;
pub use report::{CrossValidationReport, FoldResult, ReportFormat};
pub use stratified_folds::Folds;
