//! Tests for the fixed-arity vectors and the 2D angle helpers: cross
//! product, lerp clamping, direction constants, rotation, and look-towards.

use approx::assert_abs_diff_eq;
use simmath::core::traits::Magnitude;
use simmath::error::MathError;
use simmath::utils::angle::{degrees_to_radians, look_towards, radians_to_degrees, rotate};
use simmath::vector::{Vector, Vector2, Vector3};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[test]
fn cross_product_follows_the_right_hand_rule() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
}

#[test]
fn cross_of_parallel_vectors_is_zero() {
    let a = Vector3::new(2.0, -1.0, 3.0);
    assert_eq!(a.cross(a * 2.5), Vector3::zero());
}

#[test]
fn cross_result_is_orthogonal_to_both_inputs() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-2.0, 0.5, 4.0);
    let c = a.cross(b);
    assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-12);
}

#[test]
fn lerp_interpolates_and_clamps_percent() {
    let a = Vector3::new(0.0, 0.0, 0.0);
    let b = Vector3::new(10.0, -10.0, 4.0);
    assert_eq!(a.lerp(b, 0.5), Vector3::new(5.0, -5.0, 2.0));
    // Out-of-range percents clamp silently.
    assert_eq!(a.lerp(b, 2.0), b);
    assert_eq!(a.lerp(b, -1.0), a);

    let p = Vector2::new(2.0, 2.0);
    let q = Vector2::new(4.0, 6.0);
    assert_eq!(p.lerp(q, 0.25), Vector2::new(2.5, 3.0));
}

#[test]
fn direction_constants_oppose_each_other() {
    assert_eq!(Vector2::<f64>::up(), Vector2::new(0.0, -1.0));
    assert_eq!(Vector2::<f64>::down(), -Vector2::up());
    assert_eq!(Vector2::<f64>::right(), Vector2::new(1.0, 0.0));

    assert_eq!(Vector3::<f64>::up(), Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(Vector3::<f64>::forward(), Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(Vector3::<f64>::back(), -Vector3::forward());
    assert_eq!(Vector3::<f64>::right(), -Vector3::left());
    assert_eq!(Vector3::<f64>::one(), Vector3::new(1.0, 1.0, 1.0));
    assert_abs_diff_eq!(Vector3::<f64>::up().magnitude(), 1.0, epsilon = 1e-12);
}

#[test]
fn construction_from_slices_checks_arity() {
    assert_eq!(
        Vector2::from_slice(&[1.0, 2.0]),
        Ok(Vector2::new(1.0, 2.0))
    );
    assert_eq!(
        Vector2::from_slice(&[1.0, 2.0, 3.0]),
        Err(MathError::VectorArity {
            expected: 2,
            found: 3,
        })
    );
    assert_eq!(
        Vector3::from_slice(&[1.0]),
        Err(MathError::VectorArity {
            expected: 3,
            found: 1,
        })
    );
    assert_eq!(Vector3::from([1.0, 2.0, 3.0]), Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn conversions_to_and_from_nd_vectors() {
    let v3 = Vector3::new(1.0, 2.0, 3.0);
    let nd: Vector<f64> = v3.into();
    assert_eq!(nd, Vector::new(vec![1.0, 2.0, 3.0]));
    assert_eq!(Vector3::try_from(&nd), Ok(v3));
    assert_eq!(
        Vector2::try_from(&nd),
        Err(MathError::VectorArity {
            expected: 2,
            found: 3,
        })
    );
}

#[test]
fn fixed_arity_operators_are_element_wise() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, 5.0);
    assert_eq!(a + b, Vector2::new(4.0, 7.0));
    assert_eq!(b - a, Vector2::new(2.0, 3.0));
    assert_eq!(a * b, Vector2::new(3.0, 10.0));
    assert_eq!(b / a, Vector2::new(3.0, 2.5));
    assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(b + 1.0, Vector2::new(4.0, 6.0));
}

#[test]
fn normalized_keeps_zero_components() {
    let v = Vector3::new(3.0, 0.0, 4.0);
    let n = v.normalized();
    assert_eq!(n.y, 0.0);
    assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
    assert_eq!(Vector2::<f64>::zero().normalized(), Vector2::zero());
}

#[test]
fn rotate_quarter_turn_counter_clockwise() {
    let v = rotate(Vector2::new(1.0, 0.0), FRAC_PI_2);
    assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);

    // A full turn is the identity.
    let w = rotate(Vector2::new(3.0, -2.0), 2.0 * PI);
    assert_abs_diff_eq!(w.x, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(w.y, -2.0, epsilon = 1e-12);
}

#[test]
fn look_towards_gives_the_direction_angle() {
    let origin = Vector2::new(0.0, 0.0);
    assert_abs_diff_eq!(
        look_towards(origin, Vector2::new(1.0, 1.0)),
        FRAC_PI_4,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        look_towards(Vector2::new(2.0, 2.0), Vector2::new(1.0, 2.0)),
        PI,
        epsilon = 1e-12
    );
}

#[test]
fn degree_radian_conversions_are_inverses() {
    assert_abs_diff_eq!(degrees_to_radians(180.0), PI, epsilon = 1e-12);
    assert_abs_diff_eq!(radians_to_degrees(FRAC_PI_2), 90.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        radians_to_degrees(degrees_to_radians(37.5)),
        37.5,
        epsilon = 1e-12
    );
}
