use crate::clipper::constants::{
    LO_RANGE, PRESERVE_COLLINEAR_BIT, REVERSE_SOLUTION_BIT, STRICTLY_SIMPLE_BIT,
};
use crate::utils::bit_ops::{get_flag, set_flag};

/// Options of a clipping session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipperConfig {
    /// Output orientation is flipped: outers clockwise, holes counter-clockwise.
    pub reverse_solution: bool,
    /// Touching vertices are split so no output contour self-touches.
    pub strictly_simple: bool,
    /// Collinear input vertices are kept.
    pub preserve_collinear: bool,
    /// Coordinate magnitude above which slope tests use 128-bit products.
    pub lo_range: i64,
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            reverse_solution: false,
            strictly_simple: false,
            preserve_collinear: false,
            lo_range: LO_RANGE,
        }
    }
}

impl ClipperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bits(bits: u32) -> Self {
        Self {
            reverse_solution: get_flag(bits, REVERSE_SOLUTION_BIT),
            strictly_simple: get_flag(bits, STRICTLY_SIMPLE_BIT),
            preserve_collinear: get_flag(bits, PRESERVE_COLLINEAR_BIT),
            lo_range: LO_RANGE,
        }
    }

    pub fn bits(&self) -> u32 {
        let mut result = set_flag(0, REVERSE_SOLUTION_BIT, self.reverse_solution);
        result = set_flag(result, STRICTLY_SIMPLE_BIT, self.strictly_simple);

        set_flag(result, PRESERVE_COLLINEAR_BIT, self.preserve_collinear)
    }

    pub fn with_lo_range(mut self, lo_range: i64) -> Self {
        self.lo_range = lo_range.clamp(0, LO_RANGE);
        self
    }
}
