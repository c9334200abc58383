//! Utility module: free-function helpers.

pub mod angle;
pub use angle::{degrees_to_radians, look_towards, radians_to_degrees, rotate};
