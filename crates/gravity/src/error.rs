use thiserror::Error;

use crate::body::BodyId;

/// Errors raised when a configuration or a hand-built world would be invalid.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("body count must be at least 1")]
    NoBodies,
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("position and velocity must be finite")]
    NonFiniteState,
    #[error("world already has an anchor ({0:?})")]
    AnchorExists(BodyId),
}
