//! Fixed-arity vectors with named axes.
//!
//! `Vector2<T>` and `Vector3<T>` are `Copy` values with public `x`/`y`(/`z`)
//! fields. Arity is enforced by the type, so element-wise arithmetic between
//! two values of the same type can never shape-fail and gets the full
//! operator set; only construction from a runtime-length slice is fallible.
//!
//! Direction constants use screen-style y-down in 2D (`up = (0, -1)`) and a
//! y-forward / z-down convention in 3D (`forward = (0, 1, 0)`,
//! `up = (0, 0, -1)`).

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;

use crate::core::traits::Magnitude;
use crate::error::MathError;
use crate::vector::nd::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Float> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Build from a slice of exactly two components.
    pub fn from_slice(components: &[T]) -> Result<Self, MathError> {
        match components {
            &[x, y] => Ok(Vector2 { x, y }),
            _ => Err(MathError::VectorArity {
                expected: 2,
                found: components.len(),
            }),
        }
    }

    pub fn one() -> Self {
        Vector2::new(T::one(), T::one())
    }

    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    pub fn up() -> Self {
        Vector2::new(T::zero(), -T::one())
    }

    pub fn down() -> Self {
        -Vector2::up()
    }

    pub fn left() -> Self {
        Vector2::new(-T::one(), T::zero())
    }

    pub fn right() -> Self {
        -Vector2::left()
    }

    pub fn dot(&self, other: Vector2<T>) -> T {
        self.x * other.x + self.y * other.y
    }

    /// See [`Vector::normalized`] for the zero-component policy.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        let norm = |c: T| if c == T::zero() { T::zero() } else { c / mag };
        Vector2::new(norm(self.x), norm(self.y))
    }

    /// Linear interpolation from `self` towards `other`.
    ///
    /// `percent` is clamped into `[0, 1]`; out-of-range values are never an
    /// error.
    pub fn lerp(&self, other: Vector2<T>, percent: T) -> Self {
        let t = percent.max(T::zero()).min(T::one());
        *self + (other - *self) * t
    }
}

impl<T: Float> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }

    /// Build from a slice of exactly three components.
    pub fn from_slice(components: &[T]) -> Result<Self, MathError> {
        match components {
            &[x, y, z] => Ok(Vector3 { x, y, z }),
            _ => Err(MathError::VectorArity {
                expected: 3,
                found: components.len(),
            }),
        }
    }

    pub fn one() -> Self {
        Vector3::new(T::one(), T::one(), T::one())
    }

    pub fn zero() -> Self {
        Vector3::new(T::zero(), T::zero(), T::zero())
    }

    pub fn up() -> Self {
        Vector3::new(T::zero(), T::zero(), -T::one())
    }

    pub fn down() -> Self {
        -Vector3::up()
    }

    pub fn left() -> Self {
        Vector3::new(-T::one(), T::zero(), T::zero())
    }

    pub fn right() -> Self {
        -Vector3::left()
    }

    pub fn forward() -> Self {
        Vector3::new(T::zero(), T::one(), T::zero())
    }

    pub fn back() -> Self {
        -Vector3::forward()
    }

    pub fn dot(&self, other: Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-hand cross product. Orthogonal to both inputs; the zero vector
    /// when the inputs are parallel.
    pub fn cross(&self, other: Vector3<T>) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// See [`Vector::normalized`] for the zero-component policy.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        let norm = |c: T| if c == T::zero() { T::zero() } else { c / mag };
        Vector3::new(norm(self.x), norm(self.y), norm(self.z))
    }

    /// Linear interpolation from `self` towards `other`, `percent` clamped
    /// into `[0, 1]`.
    pub fn lerp(&self, other: Vector3<T>, percent: T) -> Self {
        let t = percent.max(T::zero()).min(T::one());
        *self + (other - *self) * t
    }
}

impl<T: Float> Magnitude<T> for Vector2<T> {
    fn magnitude(&self) -> T {
        self.dot(*self).sqrt()
    }
}

impl<T: Float> Magnitude<T> for Vector3<T> {
    fn magnitude(&self) -> T {
        self.dot(*self).sqrt()
    }
}

macro_rules! fixed_vector_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl<T: Float> Add for $name<T> {
            type Output = $name<T>;
            fn add(self, rhs: $name<T>) -> $name<T> {
                $name { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Float> Sub for $name<T> {
            type Output = $name<T>;
            fn sub(self, rhs: $name<T>) -> $name<T> {
                $name { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Float> Mul for $name<T> {
            type Output = $name<T>;
            fn mul(self, rhs: $name<T>) -> $name<T> {
                $name { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl<T: Float> Div for $name<T> {
            type Output = $name<T>;
            fn div(self, rhs: $name<T>) -> $name<T> {
                $name { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl<T: Float> Add<T> for $name<T> {
            type Output = $name<T>;
            fn add(self, rhs: T) -> $name<T> {
                $name { $($field: self.$field + rhs),+ }
            }
        }

        impl<T: Float> Sub<T> for $name<T> {
            type Output = $name<T>;
            fn sub(self, rhs: T) -> $name<T> {
                $name { $($field: self.$field - rhs),+ }
            }
        }

        impl<T: Float> Mul<T> for $name<T> {
            type Output = $name<T>;
            fn mul(self, rhs: T) -> $name<T> {
                $name { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Float> Div<T> for $name<T> {
            type Output = $name<T>;
            fn div(self, rhs: T) -> $name<T> {
                $name { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Float> Neg for $name<T> {
            type Output = $name<T>;
            fn neg(self) -> $name<T> {
                $name { $($field: -self.$field),+ }
            }
        }
    };
}

fixed_vector_ops!(Vector2 { x, y });
fixed_vector_ops!(Vector3 { x, y, z });

impl<T: Float> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Vector2 { x, y }
    }
}

impl<T: Float> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Vector3 { x, y, z }
    }
}

impl<T: Float> From<Vector2<T>> for Vector<T> {
    fn from(v: Vector2<T>) -> Self {
        Vector::new(vec![v.x, v.y])
    }
}

impl<T: Float> From<Vector3<T>> for Vector<T> {
    fn from(v: Vector3<T>) -> Self {
        Vector::new(vec![v.x, v.y, v.z])
    }
}

impl<T: Float> TryFrom<&Vector<T>> for Vector2<T> {
    type Error = MathError;

    fn try_from(v: &Vector<T>) -> Result<Self, MathError> {
        Vector2::from_slice(v.components())
    }
}

impl<T: Float> TryFrom<&Vector<T>> for Vector3<T> {
    type Error = MathError;

    fn try_from(v: &Vector<T>) -> Result<Self, MathError> {
        Vector3::from_slice(v.components())
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
