//! Engine error types

use std::fmt;
use hyperspin_math::MathError;

/// Error type for engine construction and updates
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Invalid settings or an out-of-range request (dimension, period, time step)
    Configuration(String),
    /// Vector/matrix size mismatch inside a transform
    Math(MathError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            EngineError::Math(err) => write!(f, "Math error: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Configuration(_) => None,
            EngineError::Math(err) => Some(err),
        }
    }
}

impl From<MathError> for EngineError {
    fn from(err: MathError) -> Self {
        EngineError::Math(err)
    }
}

impl EngineError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        EngineError::Configuration(msg.into())
    }
}
