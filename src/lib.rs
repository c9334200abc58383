//! simmath: dense vector, matrix, and color math for graphics & simulation
//!
//! This crate provides small, reference-quality linear-algebra building
//! blocks: N-dimensional and fixed-arity vectors, a dense row-major matrix
//! with Gauss-Jordan inversion, angle helpers, and two side utilities (a
//! clamped RGBA color and a FIFO queue). It is deliberately not a BLAS
//! replacement: storage is dense, algorithms are the textbook ones, and no
//! claim is made about conditioning of ill-behaved systems.

pub mod color;
pub mod core;
pub mod error;
pub mod matrix;
pub mod queue;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use color::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use queue::*;
pub use utils::*;
pub use vector::*;
