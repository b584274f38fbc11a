use crate::geometry::point::{IntPoint, Path};

/// Axis aligned bounds in y-down orientation: `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl BoundRect {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds of every vertex of every path; empty input gives a zero rect.
    pub fn from_paths(paths: &[Path]) -> Self {
        let mut points = paths.iter().flat_map(|path| path.iter());

        let first = match points.next() {
            Some(point) => point,
            None => return Self::default(),
        };

        let mut result = Self::new(first.x, first.y, first.x, first.y);

        for point in points {
            result.left = result.left.min(point.x);
            result.right = result.right.max(point.x);
            result.top = result.top.min(point.y);
            result.bottom = result.bottom.max(point.y);
        }

        result
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Closed rectangle path grown by `margin` on every side.
    pub fn outer_path(&self, margin: i64) -> Path {
        vec![
            IntPoint::new(self.left - margin, self.bottom + margin),
            IntPoint::new(self.right + margin, self.bottom + margin),
            IntPoint::new(self.right + margin, self.top - margin),
            IntPoint::new(self.left - margin, self.top - margin),
        ]
    }
}
