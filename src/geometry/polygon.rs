use crate::geometry::point::{IntPoint, Path};

/// Where a point sits relative to a closed ring.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PointLocation {
    Outside,
    Inside,
    OnBoundary,
}

/// Signed area; positive for counter-clockwise rings in y-up space
/// (clockwise on screen).
pub fn area(path: &[IntPoint]) -> f64 {
    let point_count = path.len();

    if point_count < 3 {
        return 0.0;
    }

    let mut result = 0.0;
    let mut prev = &path[point_count - 1];

    for point in path.iter() {
        result += (prev.x as f64 + point.x as f64) * (prev.y as f64 - point.y as f64);
        prev = point;
    }

    -result * 0.5
}

/// `true` when the signed area is non-negative.
pub fn orientation(path: &[IntPoint]) -> bool {
    area(path) >= 0.0
}

pub fn reverse_paths(paths: &mut [Path]) {
    for path in paths.iter_mut() {
        path.reverse();
    }
}

pub fn point_in_polygon(point: &IntPoint, path: &[IntPoint]) -> PointLocation {
    if path.len() < 3 {
        return PointLocation::Outside;
    }

    point_in_ring(point, path.iter().copied())
}

/// Crossing-number test over a closed ring given as a vertex iterator.
/// ie Hormann & Agathos, "The point in polygon problem for arbitrary polygons".
pub fn point_in_ring<I>(point: &IntPoint, ring: I) -> PointLocation
where
    I: IntoIterator<Item = IntPoint>,
{
    let mut iter = ring.into_iter();

    let first = match iter.next() {
        Some(first) => first,
        None => return PointLocation::Outside,
    };

    let mut inside = false;
    let mut curr = first;

    for next in iter.chain(std::iter::once(first)) {
        if next.y == point.y
            && (next.x == point.x || (curr.y == point.y && (next.x > point.x) == (curr.x < point.x)))
        {
            return PointLocation::OnBoundary;
        }

        if (curr.y < point.y) != (next.y < point.y) {
            if curr.x >= point.x && next.x > point.x {
                inside = !inside;
            } else if curr.x >= point.x || next.x > point.x {
                let d = (curr.x - point.x) as f64 * (next.y - point.y) as f64
                    - (next.x - point.x) as f64 * (curr.y - point.y) as f64;

                if d == 0.0 {
                    return PointLocation::OnBoundary;
                }

                if (d > 0.0) == (next.y > curr.y) {
                    inside = !inside;
                }
            }
        }

        curr = next;
    }

    if inside {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}
