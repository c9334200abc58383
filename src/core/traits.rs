//! Core arithmetic traits for simmath.

use std::cmp::Ordering;

use num_traits::Float;

use crate::error::MathError;

/// Right-hand operand of an element-wise operation: either a scalar that is
/// broadcast to every component, or a reference to a same-type container
/// combined pairwise.
///
/// Shape checks happen inside each operation; operand *kind* is settled here,
/// exhaustively, at compile time.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, C, T> {
    Scalar(T),
    Container(&'a C),
}

/// Element-wise arithmetic over a container of floats.
///
/// Every operation allocates and returns a fresh container; operands are
/// never mutated. Combining two containers of different shape fails with
/// the container's shape error.
pub trait ElementWise<T: Float>: Sized {
    fn add(&self, rhs: Operand<'_, Self, T>) -> Result<Self, MathError>;
    fn subtract(&self, rhs: Operand<'_, Self, T>) -> Result<Self, MathError>;
    fn multiply(&self, rhs: Operand<'_, Self, T>) -> Result<Self, MathError>;
    fn divide(&self, rhs: Operand<'_, Self, T>) -> Result<Self, MathError>;
}

/// Euclidean magnitude and magnitude-based ordering.
///
/// Ordering here is by magnitude, not component-wise: two distinct vectors
/// of equal length compare `Equal`. It is deliberately kept out of
/// `PartialOrd` so component-wise expectations are never silently violated.
pub trait Magnitude<T: Float> {
    /// Euclidean norm: `sqrt(Σ cᵢ²)`. Never negative; zero only for the
    /// all-zero value.
    fn magnitude(&self) -> T;

    /// Compare two values by Euclidean magnitude.
    fn compare_by_magnitude(&self, other: &Self) -> Ordering {
        self.magnitude()
            .partial_cmp(&other.magnitude())
            .unwrap_or(Ordering::Equal)
    }

    /// Compare this value's magnitude against a bare scalar.
    fn magnitude_cmp(&self, scalar: T) -> Ordering {
        self.magnitude()
            .partial_cmp(&scalar)
            .unwrap_or(Ordering::Equal)
    }
}
