use crate::utils::number::Number;
use crate::utils::round::round_to_i64;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T: Number> {
    pub x: T,
    pub y: T,
}

/// Fixed-point vertex.
pub type IntPoint = Point<i64>;

/// Floating point vector, used for unit normals.
pub type DoublePoint = Point<f64>;

pub type Path = Vec<IntPoint>;

pub type Paths = Vec<Path>;

impl<T: Number> Point<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[inline(always)]
    pub fn reverse(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    #[inline(always)]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// z-component of `other × self`, matching the offset engine's sinA.
    #[inline(always)]
    pub fn cross(&self, other: &Self) -> T {
        other.x * self.y - self.x * other.y
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    #[inline(always)]
    pub fn to_f64(&self) -> DoublePoint {
        DoublePoint::new(self.x.as_f64(), self.y.as_f64())
    }
}

impl Eq for Point<i64> {}

impl DoublePoint {
    /// Unit normal of the directed segment `pt1 -> pt2` (rotated clockwise in
    /// y-down space). Coincident points give a zero vector.
    pub fn unit_normal(pt1: &IntPoint, pt2: &IntPoint) -> Self {
        let dx = (pt2.x - pt1.x) as f64;
        let dy = (pt2.y - pt1.y) as f64;

        if dx == 0.0 && dy == 0.0 {
            return Self::default();
        }

        let f = 1.0 / (dx * dx + dy * dy).sqrt();

        Self::new(dy * f, -dx * f)
    }

    /// `origin + self * scale`, rounded half away from zero.
    #[inline(always)]
    pub fn offset_from(&self, origin: &IntPoint, scale: f64) -> IntPoint {
        IntPoint::new(
            round_to_i64(origin.x as f64 + self.x * scale),
            round_to_i64(origin.y as f64 + self.y * scale),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_int_point_arithmetic() {
        let a = IntPoint::new(3, 4);
        let b = IntPoint::new(1, -2);

        assert_eq!(a.add(&b), IntPoint::new(4, 2));
        assert_eq!(a.sub(&b), IntPoint::new(2, 6));
        assert_eq!(a.reverse(), IntPoint::new(-3, -4));
        assert_eq!(a.to_f64(), DoublePoint::new(3.0, 4.0));
        assert_eq!(a.dot(&b), -5);
        assert!(IntPoint::default().is_empty());
    }

    #[test]
    fn test_unit_normal() {
        let normal = DoublePoint::unit_normal(&IntPoint::new(0, 0), &IntPoint::new(10, 0));

        assert_relative_eq!(normal.x, 0.0);
        assert_relative_eq!(normal.y, -1.0);
        assert!(DoublePoint::unit_normal(&IntPoint::new(5, 5), &IntPoint::new(5, 5)).is_empty());
    }

    #[test]
    fn test_offset_from_rounds() {
        let normal = DoublePoint::new(0.5, -0.25);

        assert_eq!(normal.offset_from(&IntPoint::new(10, 10), 3.0), IntPoint::new(12, 9));
    }
}
