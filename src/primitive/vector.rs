use nalgebra::{Point2, Vector2};
use std::ops::Sub;

/// A 2D vector, used by the circle/segment projection math.
///
/// Non-finite components are not guarded against; NaN and infinities propagate
/// through every operation as IEEE-754 arithmetic dictates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D(Vector2<f64>);

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    /// The vector from the origin to `point`.
    pub fn from_point(point: Point2<f64>) -> Self {
        Self(point.coords)
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn minus(&self, other: &Vector2D) -> Vector2D {
        Self(self.0 - other.0)
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.0.dot(&other.0)
    }

    /// The Euclidean length of the vector.
    pub fn modulus(&self) -> f64 {
        self.modulus_squared().sqrt()
    }

    pub fn modulus_squared(&self) -> f64 {
        self.0.x * self.0.x + self.0.y * self.0.y
    }

    pub fn times(&self, scalar: f64) -> Vector2D {
        Self(self.0 * scalar)
    }
}

impl From<Vector2<f64>> for Vector2D {
    fn from(v: Vector2<f64>) -> Self {
        Self(v)
    }
}

impl From<Vector2D> for Vector2<f64> {
    fn from(v: Vector2D) -> Self {
        v.0
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        self.minus(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proptest::arbitrary_vector;
    use proptest::prelude::*;

    #[test]
    fn pythagorean_modulus() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.modulus_squared(), 25.0);
        assert_eq!(v.modulus(), 5.0);
    }

    #[test]
    fn minus_and_times() {
        let a = Vector2D::new(5.0, 3.0);
        let b = Vector2D::new(1.0, 1.0);
        assert_eq!(a.minus(&b), Vector2D::new(4.0, 2.0));
        assert_eq!(a - b, Vector2D::new(4.0, 2.0));
        assert_eq!(a.times(0.5), Vector2D::new(2.5, 1.5));
        assert_eq!(a.dot(&b), 8.0);
    }

    #[test]
    fn nan_propagates() {
        let v = Vector2D::new(f64::NAN, 1.0);
        assert!(v.modulus().is_nan());
        assert!(v.dot(&Vector2D::new(1.0, 1.0)).is_nan());
    }

    proptest! {
        #[test]
        fn modulus_squared_matches_self_dot(v in arbitrary_vector()) {
            let v = Vector2D::from(v);
            prop_assert!((v.modulus_squared() - v.dot(&v)).abs() <= 1e-9 * v.modulus_squared().max(1.0));
            prop_assert!(v.modulus() >= 0.0);
        }

        #[test]
        fn times_scales_modulus(v in arbitrary_vector(), k in -10.0..10.0f64) {
            let v = Vector2D::from(v);
            let scaled = v.times(k).modulus();
            prop_assert!((scaled - v.modulus() * k.abs()).abs() < 1e-9 * (1.0 + scaled));
        }
    }
}
