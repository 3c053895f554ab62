use thiserror::Error;

/// Configuration-integrity errors raised when an engine is constructed
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("{set} weights must sum to 1.0, got {sum}")]
    WeightSum { set: &'static str, sum: f64 },

    #[error("weight {name} must lie in [0, 1], got {value}")]
    WeightOutOfRange { name: &'static str, value: f64 },

    #[error("{table} entry {key:?} must lie in [0, 1], got {value}")]
    TableEntryOutOfRange {
        table: &'static str,
        key: String,
        value: f64,
    },
}
