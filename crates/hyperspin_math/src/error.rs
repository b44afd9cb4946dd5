//! Math error types

use std::fmt;

/// Error type for vector and matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Operand sizes do not line up (vector lengths, inner matrix dimensions)
    DimensionMismatch {
        /// Size the operation required
        expected: usize,
        /// Size it was given
        actual: usize,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for MathError {}

impl MathError {
    /// Return `Ok(())` when the sizes agree, otherwise a mismatch error
    #[inline]
    pub fn check(expected: usize, actual: usize) -> Result<(), MathError> {
        if expected == actual {
            Ok(())
        } else {
            Err(MathError::DimensionMismatch { expected, actual })
        }
    }
}
