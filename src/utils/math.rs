use crate::geometry::point::IntPoint;

/// Compares `a * b` with `c * d`, widening to 128 bits when the operands may
/// exceed the 64-bit safe range.
#[inline(always)]
pub fn products_equal(a: i64, b: i64, c: i64, d: i64, use_full_range: bool) -> bool {
    if use_full_range {
        (a as i128) * (b as i128) == (c as i128) * (d as i128)
    } else {
        a * b == c * d
    }
}

/// True when the segments `pt1-pt2` and `pt2-pt3` share a slope.
#[inline(always)]
pub fn slopes_equal3(pt1: &IntPoint, pt2: &IntPoint, pt3: &IntPoint, use_full_range: bool) -> bool {
    products_equal(
        pt1.y - pt2.y,
        pt2.x - pt3.x,
        pt1.x - pt2.x,
        pt2.y - pt3.y,
        use_full_range,
    )
}

/// True when the segments `pt1-pt2` and `pt3-pt4` share a slope.
#[inline(always)]
pub fn slopes_equal4(
    pt1: &IntPoint,
    pt2: &IntPoint,
    pt3: &IntPoint,
    pt4: &IntPoint,
    use_full_range: bool,
) -> bool {
    products_equal(
        pt1.y - pt2.y,
        pt3.x - pt4.x,
        pt1.x - pt2.x,
        pt3.y - pt4.y,
        use_full_range,
    )
}

pub fn pt2_is_between_pt1_and_pt3(pt1: &IntPoint, pt2: &IntPoint, pt3: &IntPoint) -> bool {
    if pt1 == pt3 || pt1 == pt2 || pt3 == pt2 {
        false
    } else if pt1.x != pt3.x {
        (pt2.x > pt1.x) == (pt2.x < pt3.x)
    } else {
        (pt2.y > pt1.y) == (pt2.y < pt3.y)
    }
}

pub fn horz_segments_overlap(seg1a: i64, seg1b: i64, seg2a: i64, seg2b: i64) -> bool {
    let (seg1a, seg1b) = if seg1a > seg1b { (seg1b, seg1a) } else { (seg1a, seg1b) };
    let (seg2a, seg2b) = if seg2a > seg2b { (seg2b, seg2a) } else { (seg2a, seg2b) };

    seg1a < seg2b && seg2a < seg1b
}

/// Returns the overlapping interval of `[a1, a2]` and `[b1, b2]` (either
/// order), or `None` when they only touch or are disjoint.
pub fn get_overlap(a1: i64, a2: i64, b1: i64, b2: i64) -> Option<(i64, i64)> {
    let (left, right) = if a1 < a2 {
        if b1 < b2 {
            (a1.max(b1), a2.min(b2))
        } else {
            (a1.max(b2), a2.min(b1))
        }
    } else if b1 < b2 {
        (a2.max(b1), a1.min(b2))
    } else {
        (a2.max(b2), a1.min(b1))
    };

    if left < right {
        Some((left, right))
    } else {
        None
    }
}

pub fn get_dx(pt1: &IntPoint, pt2: &IntPoint) -> f64 {
    if pt1.y == pt2.y {
        crate::clipper::constants::HORIZONTAL
    } else {
        (pt2.x - pt1.x) as f64 / (pt2.y - pt1.y) as f64
    }
}

pub fn distance_sqrd(pt1: &IntPoint, pt2: &IntPoint) -> f64 {
    let dx = pt1.x as f64 - pt2.x as f64;
    let dy = pt1.y as f64 - pt2.y as f64;

    dx * dx + dy * dy
}

fn distance_from_line_sqrd(pt: &IntPoint, ln1: &IntPoint, ln2: &IntPoint) -> f64 {
    //perpendicular distance of pt from the line through ln1 and ln2,
    //using the general form Ax + By + C = 0
    let a = (ln1.y - ln2.y) as f64;
    let b = (ln2.x - ln1.x) as f64;
    let c = a * ln1.x as f64 + b * ln1.y as f64;
    let c = a * pt.x as f64 + b * pt.y as f64 - c;

    c * c / (a * a + b * b)
}

/// Tests the geometrically middle point of the three against the line through
/// the other two.
pub fn slopes_near_collinear(pt1: &IntPoint, pt2: &IntPoint, pt3: &IntPoint, dist_sqrd: f64) -> bool {
    let distance = if (pt1.x - pt2.x).abs() > (pt1.y - pt2.y).abs() {
        if (pt1.x > pt2.x) == (pt1.x < pt3.x) {
            distance_from_line_sqrd(pt1, pt2, pt3)
        } else if (pt2.x > pt1.x) == (pt2.x < pt3.x) {
            distance_from_line_sqrd(pt2, pt1, pt3)
        } else {
            distance_from_line_sqrd(pt3, pt1, pt2)
        }
    } else if (pt1.y > pt2.y) == (pt1.y < pt3.y) {
        distance_from_line_sqrd(pt1, pt2, pt3)
    } else if (pt2.y > pt1.y) == (pt2.y < pt3.y) {
        distance_from_line_sqrd(pt2, pt1, pt3)
    } else {
        distance_from_line_sqrd(pt3, pt1, pt2)
    };

    distance < dist_sqrd
}

pub fn points_are_close(pt1: &IntPoint, pt2: &IntPoint, dist_sqrd: f64) -> bool {
    distance_sqrd(pt1, pt2) <= dist_sqrd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slopes_equal_wide_and_narrow_agree() {
        let a = IntPoint::new(0, 0);
        let b = IntPoint::new(10, 10);
        let c = IntPoint::new(25, 25);
        let d = IntPoint::new(25, 26);

        assert!(slopes_equal3(&a, &b, &c, false));
        assert!(slopes_equal3(&a, &b, &c, true));
        assert!(!slopes_equal3(&a, &b, &d, false));
        assert!(!slopes_equal3(&a, &b, &d, true));
    }

    #[test]
    fn test_slopes_equal_needs_wide_products_for_large_coords() {
        let big = 0x3FFF_FFFF_FFFF_FFFFi64;
        let a = IntPoint::new(-big, -big);
        let b = IntPoint::new(0, 0);
        let c = IntPoint::new(big, big);

        assert!(slopes_equal3(&a, &b, &c, true));
    }

    #[test]
    fn test_between() {
        let a = IntPoint::new(0, 0);
        let b = IntPoint::new(5, 0);
        let c = IntPoint::new(10, 0);

        assert!(pt2_is_between_pt1_and_pt3(&a, &b, &c));
        assert!(!pt2_is_between_pt1_and_pt3(&a, &c, &b));
        assert!(!pt2_is_between_pt1_and_pt3(&a, &a, &c));
    }

    #[test]
    fn test_overlap() {
        assert_eq!(get_overlap(0, 10, 5, 20), Some((5, 10)));
        assert_eq!(get_overlap(10, 0, 20, 5), Some((5, 10)));
        assert_eq!(get_overlap(0, 10, 10, 20), None);
        assert!(horz_segments_overlap(0, 10, 9, 3));
        assert!(!horz_segments_overlap(0, 10, 10, 30));
    }

    #[test]
    fn test_near_collinear() {
        let a = IntPoint::new(0, 0);
        let b = IntPoint::new(50, 1);
        let c = IntPoint::new(100, 0);

        assert!(slopes_near_collinear(&a, &b, &c, 2.0));
        assert!(!slopes_near_collinear(&a, &b, &c, 0.5));
    }
}
