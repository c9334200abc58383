use std::time::Duration;
use thiserror::Error;

// Unified error type for simmath

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("vector length mismatch: expected {0}, found {1}")]
    LengthMismatch(usize, usize),
    #[error("matrix size mismatch: expected {expected:?}, found {found:?}")]
    SizeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("inverse requires a square matrix, found {0}x{1}")]
    NonSquare(usize, usize),
    #[error("zero pivot at row {0}: matrix is singular")]
    Singular(usize),
    #[error("vector construction expected {expected} components, found {found}")]
    VectorArity { expected: usize, found: usize },
    #[error("queue pull timed out after {0:?}")]
    QueueTimeout(Duration),
}
