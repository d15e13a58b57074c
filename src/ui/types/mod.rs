pub mod params;

pub use params::{EvaluationParams, KeyValue, parse_key_value};
