pub mod dataset;
pub mod estimators;
pub mod example;
pub mod label;

pub use dataset::Dataset;
pub use example::Example;
pub use label::Label;
