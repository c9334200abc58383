//! Vector module: N-dimensional and fixed-arity vector types.

pub mod fixed;
pub mod nd;

pub use fixed::{Vector2, Vector3};
pub use nd::Vector;
