use num_traits::{FromPrimitive, Num, Signed, ToPrimitive};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar type usable as a point coordinate: `i64` for fixed-point vertices,
/// `f64` for unit normals and other intermediate values.
pub trait Number:
    Num
    + Copy
    + Debug
    + Default
    + PartialOrd
    + FromPrimitive
    + ToPrimitive
    + Signed
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    #[inline(always)]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }
}

impl Number for f64 {
    #[inline(always)]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Number for i64 {
    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
