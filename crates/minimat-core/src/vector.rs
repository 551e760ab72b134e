use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 3-component vector of `f64`.
///
/// Arithmetic follows IEEE-754 without special-casing: overflow yields
/// infinity and NaN propagates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        self.scale(s)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

/// Display form used by every vector-producing command: three components
/// with 3 decimals, separated by three spaces.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}   {:.3}   {:.3}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Vector3 = Vector3::new(1.0, 2.0, 3.0);

    #[test]
    fn test_from_array() {
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), A);
        assert_eq!(Vector3::from(A.to_array()), A);
    }
    const B: Vector3 = Vector3::new(4.0, 5.0, 6.0);

    #[test]
    fn test_add_and_sub() {
        assert_eq!(A + B, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(B - A, Vector3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_add_commutes() {
        assert_eq!(A + B, B + A);
    }

    #[test]
    fn test_sub_anticommutes() {
        assert_eq!(A - B, (B - A).scale(-1.0));
        assert_eq!(A - B, -(B - A));
    }

    #[test]
    fn test_scale() {
        assert_eq!(A.scale(2.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(A * 2.0, A.scale(2.0));
    }

    #[test]
    fn test_dot() {
        assert!((A.dot(B) - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cross_unit_axes() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_cross_anticommutes() {
        assert_eq!(A.cross(B), B.cross(A).scale(-1.0));
        assert_eq!(A.cross(B), Vector3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let samples = [
            (A, B),
            (Vector3::new(-1.5, 0.25, 8.0), Vector3::new(3.0, -7.0, 0.5)),
            (Vector3::new(1e3, 2e-3, -4.0), Vector3::new(0.1, 0.2, 0.3)),
        ];
        for (a, b) in samples {
            let c = a.cross(b);
            assert!(a.dot(c).abs() < 1e-9, "a . (a x b) = {}", a.dot(c));
            assert!(b.dot(c).abs() < 1e-9, "b . (a x b) = {}", b.dot(c));
        }
    }

    #[test]
    fn test_overflow_is_infinite() {
        let big = Vector3::new(f64::MAX, 0.0, 0.0);
        assert!((big + big).x.is_infinite());
    }

    #[test]
    fn test_display() {
        assert_eq!(A.to_string(), "1.000   2.000   3.000");
        assert_eq!(Vector3::new(-0.5, 1.0 / 3.0, 2.0).to_string(), "-0.500   0.333   2.000");
    }
}
