//! Engine errors

use thiserror::Error;

/// Input rejected before any scoring happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("expected {expected} feature values, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("feature '{feature}' at position {index} is not a finite number: {value}")]
    NotNumeric {
        index: usize,
        feature: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Fatal for the single request that hit it
    #[error("internal engine failure: {0}")]
    Internal(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
