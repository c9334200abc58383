//! N-dimensional dense vector.
//!
//! `Vector<T>` is an owned, fixed-length sequence of float components. All
//! arithmetic allocates a fresh vector; combining two vectors of different
//! length fails with `MathError::LengthMismatch`. Index assignment through
//! `IndexMut` is permitted, so the container itself is mutable even though
//! the arithmetic API never mutates its operands.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use num_traits::Float;

use crate::core::traits::{ElementWise, Magnitude, Operand};
use crate::error::MathError;

#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    components: Vec<T>,
}

impl<T: Float> Vector<T> {
    /// Wrap a component list into a vector. Length is fixed from here on.
    pub fn new(components: Vec<T>) -> Self {
        Vector { components }
    }

    /// All-ones vector of the given length.
    pub fn one(len: usize) -> Self {
        Vector {
            components: vec![T::one(); len],
        }
    }

    /// All-zeros vector of the given length.
    pub fn zero(len: usize) -> Self {
        Vector {
            components: vec![T::zero(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[T] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    /// New vector with each nonzero component divided by the magnitude.
    ///
    /// Zero components stay exactly zero, so the all-zero vector normalizes
    /// to itself and no division by zero can occur (a nonzero component
    /// implies a nonzero magnitude).
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        self.map(|c| if c == T::zero() { T::zero() } else { c / mag })
    }

    /// In-place variant of [`normalized`](Self::normalized).
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Dot product: `Σ selfᵢ · otherᵢ`. Lengths must match.
    pub fn dot(&self, other: &Self) -> Result<T, MathError> {
        self.check_len(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Euclidean distance between two equal-length vectors.
    pub fn distance(&self, other: &Self) -> Result<T, MathError> {
        self.check_len(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
            .sqrt())
    }

    /// Pick whichever of the two vectors has the larger magnitude; `self`
    /// wins ties.
    pub fn longest(self, other: Self) -> Self {
        if other.magnitude() > self.magnitude() {
            other
        } else {
            self
        }
    }

    fn check_len(&self, other: &Self) -> Result<(), MathError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(MathError::LengthMismatch(self.len(), other.len()))
        }
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Vector {
            components: self.iter().map(|&c| f(c)).collect(),
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self, MathError> {
        self.check_len(other)?;
        Ok(Vector {
            components: self
                .iter()
                .zip(other.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }
}

impl<T: Float> Magnitude<T> for Vector<T> {
    fn magnitude(&self) -> T {
        self.iter().fold(T::zero(), |acc, &c| acc + c * c).sqrt()
    }
}

impl<T: Float> ElementWise<T> for Vector<T> {
    fn add(&self, rhs: Operand<'_, Self, T>) -> Result<Self, MathError> {
        match rhs {
            Operand::Scalar(s) => Ok(self.map(|c| c + s)),
            Operand::Container(o) => self.zip_with(o, |a, b| a + b),
        }
    }

    fn subtract(&self, rhs: Operand<'_, Self, T>) -> Result<Self, MathError> {
        match rhs {
            Operand::Scalar(s) => Ok(self.map(|c| c - s)),
            Operand::Container(o) => self.zip_with(o, |a, b| a - b),
        }
    }

    fn multiply(&self, rhs: Operand<'_, Self, T>) -> Result<Self, MathError> {
        match rhs {
            Operand::Scalar(s) => Ok(self.map(|c| c * s)),
            Operand::Container(o) => self.zip_with(o, |a, b| a * b),
        }
    }

    fn divide(&self, rhs: Operand<'_, Self, T>) -> Result<Self, MathError> {
        match rhs {
            Operand::Scalar(s) => Ok(self.map(|c| c / s)),
            Operand::Container(o) => self.zip_with(o, |a, b| a / b),
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<T: Float> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.map(|c| -c)
    }
}

// Scalar broadcast sugar. Vector-vector combination can fail on a length
// mismatch, so it stays behind the Result-returning ElementWise methods;
// scalar broadcast never fails and gets the operators.

impl<T: Float> Add<T> for Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: T) -> Vector<T> {
        self.map(|c| c + rhs)
    }
}

impl<T: Float> Sub<T> for Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: T) -> Vector<T> {
        self.map(|c| c - rhs)
    }
}

impl<T: Float> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.map(|c| c * rhs)
    }
}

impl<T: Float> Div<T> for Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Vector<T> {
        self.map(|c| c / rhs)
    }
}

impl<T: Float> From<Vec<T>> for Vector<T> {
    fn from(components: Vec<T>) -> Self {
        Vector { components }
    }
}

impl<T: Float> From<&[T]> for Vector<T> {
    fn from(components: &[T]) -> Self {
        Vector {
            components: components.to_vec(),
        }
    }
}

impl<T: Float> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector {
            components: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
