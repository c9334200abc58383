//! Angle helpers for 2D work: unit conversion, rotation, look-towards.

use num_traits::Float;

use crate::vector::fixed::Vector2;

/// Radians to degrees: `r * 180 / π`.
pub fn radians_to_degrees<T: Float>(radians: T) -> T {
    radians.to_degrees()
}

/// Degrees to radians: `d * π / 180`.
pub fn degrees_to_radians<T: Float>(degrees: T) -> T {
    degrees.to_radians()
}

/// Rotate `v` counter-clockwise about the origin by `angle` radians.
pub fn rotate<T: Float>(v: Vector2<T>, angle: T) -> Vector2<T> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Angle (radians) of the direction pointing from `from` to `to`, measured
/// with `atan2` of the difference vector.
pub fn look_towards<T: Float>(from: Vector2<T>, to: Vector2<T>) -> T {
    let direction = to - from;
    direction.y.atan2(direction.x)
}
