/// Largest coordinate magnitude for which 64-bit slope products cannot overflow.
pub const LO_RANGE: i64 = 0x3FFF_FFFF;

/// Largest accepted coordinate magnitude.
pub const HI_RANGE: i64 = 0x3FFF_FFFF_FFFF_FFFF;

/// Inverse slope marker for horizontal edges.
pub const HORIZONTAL: f64 = -3.4e38;

pub const TOLERANCE: f64 = 1.0e-20;

pub const TWO_PI: f64 = std::f64::consts::PI * 2.0;

pub const DEF_ARC_TOLERANCE: f64 = 0.25;

pub const DEF_MITER_LIMIT: f64 = 2.0;

/// Margin around the bounds of a negatively offset set; the enclosing
/// rectangle is discarded from the result.
pub const OUTER_RECT_MARGIN: i64 = 10;

pub const REVERSE_SOLUTION_BIT: u8 = 0;

pub const STRICTLY_SIMPLE_BIT: u8 = 1;

pub const PRESERVE_COLLINEAR_BIT: u8 = 2;
