//! Dense rectangular matrix.
//!
//! `Matrix<T>` stores its cells in one flat row-major arena rather than as
//! nested per-row allocations; rows are handed out as slice views, which
//! keeps the `m[i][j]` access contract (`Index` yields `&[T]`, so the second
//! `[j]` is ordinary slice indexing, and `IndexMut` permits cell writes).
//!
//! Element-wise arithmetic, matrix multiplication, and inversion all return
//! fresh matrices and never mutate their operands. Shape violations surface
//! as `MathError` values at the point of detection.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use num_traits::{Float, FromPrimitive};
use rand::Rng;

use crate::core::traits::{ElementWise, Operand};
use crate::error::MathError;
use crate::vector::nd::Vector;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Dimension argument for the square constructors.
///
/// A plain `usize` is used as-is; a pair takes the larger of the two
/// dimensions.
#[derive(Debug, Clone, Copy)]
pub enum SquareDim {
    Size(usize),
    Dims(usize, usize),
}

impl SquareDim {
    fn resolve(self) -> usize {
        match self {
            SquareDim::Size(n) => n,
            SquareDim::Dims(r, c) => r.max(c),
        }
    }
}

impl From<usize> for SquareDim {
    fn from(n: usize) -> Self {
        SquareDim::Size(n)
    }
}

impl From<(usize, usize)> for SquareDim {
    fn from((r, c): (usize, usize)) -> Self {
        SquareDim::Dims(r, c)
    }
}

impl From<[usize; 2]> for SquareDim {
    fn from([r, c]: [usize; 2]) -> Self {
        SquareDim::Dims(r, c)
    }
}

impl<T: Float> Matrix<T> {
    /// `rows` x `cols` matrix with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// All-ones matrix.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Matrix::filled(rows, cols, T::one())
    }

    /// All-zeros matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::filled(rows, cols, T::zero())
    }

    /// Build from a rectangular nested list, row by row.
    ///
    /// Every row must have the same length as the first; a ragged input
    /// fails with `SizeMismatch`, carrying the offending row index and its
    /// length in the `found` slot.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, MathError> {
        let cols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MathError::SizeMismatch {
                    expected: (rows.len(), cols),
                    found: (i, row.len()),
                });
            }
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            data: rows.iter().flatten().copied().collect(),
        })
    }

    /// `n` x `n` identity: zeros with a unit main diagonal.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::filled(n, n, T::zero());
        for i in 0..n {
            m[i][i] = T::one();
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total cell count, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            Some(&self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice view into the arena.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows, each a slice view.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Row `i` copied out as an owned [`Vector`].
    pub fn row_vector(&self, i: usize) -> Vector<T> {
        Vector::from(self.row(i))
    }

    /// Matrix multiplication: requires `self.cols == other.rows`; the result
    /// has shape `(self.rows, other.cols)`.
    pub fn matmul(&self, other: &Self) -> Result<Self, MathError> {
        if self.cols != other.rows {
            return Err(MathError::SizeMismatch {
                expected: (self.cols, other.cols),
                found: (other.rows, other.cols),
            });
        }
        let mut out = Matrix::filled(self.rows, other.cols, T::zero());
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self[i][k] * other[k][j];
                }
                out[i][j] = sum;
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `A · x`; `x.len()` must equal `self.cols`.
    pub fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>, MathError> {
        if x.len() != self.cols {
            return Err(MathError::LengthMismatch(self.cols, x.len()));
        }
        Ok((0..self.rows)
            .map(|i| {
                (0..self.cols).fold(T::zero(), |acc, j| acc + self[i][j] * x[j])
            })
            .collect())
    }

    /// Transpose: `out[j][i] = self[i][j]`.
    pub fn transpose(&self) -> Self {
        let mut out = Matrix::filled(self.cols, self.rows, T::zero());
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[j][i] = self[i][j];
            }
        }
        out
    }

    /// Inverse via Gauss-Jordan elimination, without pivot reordering.
    ///
    /// A reduction copy and an identity accumulator are eliminated in
    /// lockstep: the pivot row is scaled by the reciprocal pivot, then every
    /// other row has `factor * pivot_row` subtracted, where `factor` is read
    /// from the current working copy. A zero pivot fails fast with
    /// [`MathError::Singular`] instead of letting `inf`/`NaN` propagate into
    /// the result; non-square input fails with [`MathError::NonSquare`].
    pub fn inverse(&self) -> Result<Self, MathError> {
        if !self.is_square() {
            return Err(MathError::NonSquare(self.rows, self.cols));
        }
        let n = self.rows;
        let mut work = self.clone();
        let mut inv = Matrix::identity(n);
        for fd in 0..n {
            let pivot = work[fd][fd];
            if pivot == T::zero() {
                return Err(MathError::Singular(fd));
            }
            let scale = T::one() / pivot;
            for j in 0..n {
                work[fd][j] = work[fd][j] * scale;
                inv[fd][j] = inv[fd][j] * scale;
            }
            for x in (0..n).filter(|&x| x != fd) {
                let factor = work[x][fd];
                for j in 0..n {
                    work[x][j] = work[x][j] - factor * work[fd][j];
                    inv[x][j] = inv[x][j] - factor * inv[fd][j];
                }
            }
        }
        Ok(inv)
    }

    fn check_size(&self, other: &Self) -> Result<(), MathError> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(MathError::SizeMismatch {
                expected: self.size(),
                found: other.size(),
            })
        }
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&c| f(c)).collect(),
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self, MathError> {
        self.check_size(other)?;
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }
}

impl<T: Float + FromPrimitive> Matrix<T> {
    /// Square matrix of independent uniform integer draws from the inclusive
    /// range `[minimum, maximum]`, stored as `T`.
    pub fn random(dim: impl Into<SquareDim>, minimum: i64, maximum: i64) -> Self {
        let n = dim.into().resolve();
        let mut rng = rand::thread_rng();
        Matrix {
            rows: n,
            cols: n,
            data: (0..n * n)
                .map(|_| {
                    T::from_i64(rng.gen_range(minimum..=maximum)).unwrap_or_else(T::zero)
                })
                .collect(),
        }
    }
}

impl<T: Float> ElementWise<T> for Matrix<T> {
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

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }
}

impl<T: Float> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|c| -c)
    }
}

// Scalar broadcast sugar; matrix-matrix combination stays behind the
// Result-returning ElementWise methods because it can shape-fail.

impl<T: Float> Add<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: T) -> Matrix<T> {
        self.map(|c| c + rhs)
    }
}

impl<T: Float> Sub<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: T) -> Matrix<T> {
        self.map(|c| c - rhs)
    }
}

impl<T: Float> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|c| c * rhs)
    }
}

impl<T: Float> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        self.map(|c| c / rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// One row per line, each row a bracketed component list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks_exact(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", c)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
