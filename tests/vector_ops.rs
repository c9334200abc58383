//! Tests for the N-dimensional vector: norms, normalization, dot product,
//! distance, and element-wise arithmetic with scalar broadcast.

use approx::assert_abs_diff_eq;
use rand::Rng;
use simmath::core::traits::{ElementWise, Magnitude, Operand};
use simmath::error::MathError;
use simmath::vector::Vector;
use std::cmp::Ordering;

#[test]
fn magnitude_of_3_4_triangle_is_5() {
    let v = Vector::new(vec![3.0, 4.0]);
    assert_abs_diff_eq!(v.magnitude(), 5.0, epsilon = 1e-12);
}

/// Any nonzero vector normalizes to unit magnitude; the zero vector comes
/// back unchanged, and zero components stay exactly zero.
#[test]
fn normalized_has_unit_magnitude() {
    let mut rng = rand::thread_rng();
    for len in 1..6 {
        let v: Vector<f64> = (0..len).map(|_| rng.gen_range(0.1..10.0)).collect();
        assert_abs_diff_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-12);
    }

    let zero = Vector::<f64>::zero(4);
    assert_eq!(zero.normalized(), zero);

    let sparse = Vector::new(vec![3.0, 0.0, 4.0]);
    let n = sparse.normalized();
    assert_eq!(n[1], 0.0);
    assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
}

#[test]
fn normalize_in_place_matches_normalized() {
    let v = Vector::new(vec![1.0, 2.0, 2.0]);
    let mut w = v.clone();
    w.normalize();
    assert_eq!(w, v.normalized());
}

#[test]
fn dot_is_commutative() {
    let mut rng = rand::thread_rng();
    let a: Vector<f64> = (0..5).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let b: Vector<f64> = (0..5).map(|_| rng.gen_range(-5.0..5.0)).collect();
    assert_abs_diff_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap(), epsilon = 1e-12);
}

#[test]
fn dot_and_distance_reject_mismatched_lengths() {
    let a = Vector::new(vec![1.0, 2.0]);
    let b = Vector::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(a.dot(&b), Err(MathError::LengthMismatch(2, 3)));
    assert_eq!(a.distance(&b), Err(MathError::LengthMismatch(2, 3)));
}

#[test]
fn distance_is_euclidean() {
    let a = Vector::new(vec![0.0, 0.0]);
    let b = Vector::new(vec![3.0, 4.0]);
    assert_abs_diff_eq!(a.distance(&b).unwrap(), 5.0, epsilon = 1e-12);
}

#[test]
fn element_wise_arithmetic_pairs_components() {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::new(vec![4.0, 5.0, 6.0]);

    assert_eq!(
        a.add(Operand::Container(&b)).unwrap(),
        Vector::new(vec![5.0, 7.0, 9.0])
    );
    assert_eq!(
        b.subtract(Operand::Container(&a)).unwrap(),
        Vector::new(vec![3.0, 3.0, 3.0])
    );
    assert_eq!(
        a.multiply(Operand::Container(&b)).unwrap(),
        Vector::new(vec![4.0, 10.0, 18.0])
    );
    assert_eq!(
        b.divide(Operand::Container(&a)).unwrap(),
        Vector::new(vec![4.0, 2.5, 2.0])
    );

    // Operands must be untouched.
    assert_eq!(a, Vector::new(vec![1.0, 2.0, 3.0]));
}

#[test]
fn scalar_operand_broadcasts() {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(
        a.add(Operand::Scalar(1.0)).unwrap(),
        Vector::new(vec![2.0, 3.0, 4.0])
    );
    assert_eq!(
        a.multiply(Operand::Scalar(2.0)).unwrap(),
        Vector::new(vec![2.0, 4.0, 6.0])
    );
    // Operator sugar covers the infallible scalar case.
    assert_eq!(a.clone() * 2.0, Vector::new(vec![2.0, 4.0, 6.0]));
    assert_eq!(a.clone() - 1.0, Vector::new(vec![0.0, 1.0, 2.0]));
    assert_eq!(-a, Vector::new(vec![-1.0, -2.0, -3.0]));
}

#[test]
fn element_wise_arithmetic_rejects_mismatched_lengths() {
    let a = Vector::new(vec![1.0, 2.0]);
    let b = Vector::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(
        a.add(Operand::Container(&b)),
        Err(MathError::LengthMismatch(2, 3))
    );
    assert_eq!(
        a.divide(Operand::Container(&b)),
        Err(MathError::LengthMismatch(2, 3))
    );
}

/// Magnitude-based ordering is opt-in through named methods; `PartialEq`
/// stays component-wise, so equal-magnitude vectors are not `==`.
#[test]
fn magnitude_ordering_is_explicit() {
    let a = Vector::new(vec![3.0, 4.0]);
    let b = Vector::new(vec![5.0, 0.0]);
    let c = Vector::new(vec![6.0, 0.0]);

    assert_eq!(a.compare_by_magnitude(&b), Ordering::Equal);
    assert_ne!(a, b);
    assert_eq!(a.compare_by_magnitude(&c), Ordering::Less);
    assert_eq!(a.magnitude_cmp(4.0), Ordering::Greater);
    assert_eq!(a.clone().longest(c.clone()), c);
    assert_eq!(a.clone().longest(b), a);
}

#[test]
fn one_and_zero_constructors() {
    assert_eq!(Vector::<f64>::one(3), Vector::new(vec![1.0, 1.0, 1.0]));
    assert_eq!(Vector::<f64>::zero(3), Vector::new(vec![0.0, 0.0, 0.0]));
}

#[test]
fn iteration_is_ordered_and_restartable() {
    let v = Vector::new(vec![1.0, 2.0, 3.0]);
    let first: Vec<f64> = v.iter().copied().collect();
    let second: Vec<f64> = v.iter().copied().collect();
    assert_eq!(first, vec![1.0, 2.0, 3.0]);
    assert_eq!(first, second);
}

#[test]
fn index_assignment_is_permitted() {
    let mut v = Vector::new(vec![1.0, 2.0]);
    v[1] = 9.0;
    assert_eq!(v[1], 9.0);
}

#[test]
fn display_renders_bracketed_components() {
    let v = Vector::new(vec![1.0, 2.5]);
    assert_eq!(v.to_string(), "[1, 2.5]");
}
