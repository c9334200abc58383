//! Core module: crate-wide arithmetic traits and operand dispatch.

pub mod traits;
pub use traits::{ElementWise, Magnitude, Operand};
