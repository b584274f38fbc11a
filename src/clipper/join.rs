use crate::clipper::out_pt::OutPtList;
use crate::geometry::point::IntPoint;
use crate::utils::math::{get_overlap, slopes_equal3};

/// Deferred request to splice two output rings once the sweep has finished.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub out_pt1: usize,
    pub out_pt2: usize,
    pub off_pt: IntPoint,
}

/// Horizontal output segment remembered for one scanbeam.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostJoin {
    pub out_pt: usize,
    pub off_pt: IntPoint,
}

impl Join {
    pub fn new(out_pt1: usize, out_pt2: usize, off_pt: IntPoint) -> Self {
        Self {
            out_pt1,
            out_pt2,
            off_pt,
        }
    }

    fn apply(&mut self, points: &mut OutPtList, op1: usize, op2: usize, is_reverse: bool) {
        let op1b = points.duplicate(op1, !is_reverse);
        let op2b = points.duplicate(op2, is_reverse);

        if is_reverse {
            points.push(op2, op1);
            points.push(op1b, op2b);
        } else {
            points.push(op1, op2);
            points.push(op2b, op1b);
        }

        self.out_pt1 = op1;
        self.out_pt2 = op1b;
    }

    // first vertex after op that differs from it, and whether the ring must be
    // walked backwards to follow the join direction
    fn is_reversed(&self, points: &OutPtList, op: usize, use_full_range: bool) -> Option<bool> {
        let pt = points.pt(op);
        let mut op_b = points.next(op);

        while points.pt(op_b) == pt && op_b != op {
            op_b = points.next(op_b);
        }

        let is_diverging =
            |op_b: usize| points.pt(op_b).y > pt.y || !slopes_equal3(&pt, &points.pt(op_b), &self.off_pt, use_full_range);

        if !is_diverging(op_b) {
            return (op_b != op).then_some(false);
        }

        op_b = points.prev(op);

        while points.pt(op_b) == pt && op_b != op {
            op_b = points.prev(op_b);
        }

        if is_diverging(op_b) || op_b == op {
            None
        } else {
            Some(true)
        }
    }

    /// Splices the rings at the join. Three kinds are handled:
    /// 1. Horizontal joins where out_pt1 and out_pt2 are anywhere along
    ///    collinear horizontal edges and off_pt shares their y.
    /// 2. Non-horizontal joins where out_pt1 and out_pt2 share the bottom of
    ///    an overlapping segment and off_pt lies above.
    /// 3. Strictly simple joins where edges touch without being collinear and
    ///    all three points coincide.
    pub fn join_points(&mut self, points: &mut OutPtList, is_records_same: bool, use_full_range: bool) -> bool {
        let mut op1 = self.out_pt1;
        let mut op2 = self.out_pt2;
        let off_pt = self.off_pt;
        let is_horizontal = points.pt(op1).y == off_pt.y;

        if is_horizontal && off_pt == points.pt(op1) && off_pt == points.pt(op2) {
            if !is_records_same {
                return false;
            }

            let is_reverse1 = Self::strictly_simple_direction(points, op1, &off_pt);
            let is_reverse2 = Self::strictly_simple_direction(points, op2, &off_pt);

            if is_reverse1 == is_reverse2 {
                return false;
            }

            self.apply(points, op1, op2, is_reverse1);

            return true;
        }

        if is_horizontal {
            //the overlap of horizontal joins is not known yet, out_pt1 and
            //out_pt2 may be anywhere along the horizontal edge
            let mut op1b = op1;

            while points.pt(points.prev(op1)).y == points.pt(op1).y
                && points.prev(op1) != op1b
                && points.prev(op1) != op2
            {
                op1 = points.prev(op1);
            }

            while points.pt(points.next(op1b)).y == points.pt(op1b).y
                && points.next(op1b) != op1
                && points.next(op1b) != op2
            {
                op1b = points.next(op1b);
            }

            //a flat 'polygon'
            if points.next(op1b) == op1 || points.next(op1b) == op2 {
                return false;
            }

            let mut op2b = op2;

            while points.pt(points.prev(op2)).y == points.pt(op2).y
                && points.prev(op2) != op2b
                && points.prev(op2) != op1b
            {
                op2 = points.prev(op2);
            }

            while points.pt(points.next(op2b)).y == points.pt(op2b).y
                && points.next(op2b) != op2
                && points.next(op2b) != op1
            {
                op2b = points.next(op2b);
            }

            if points.next(op2b) == op2 || points.next(op2b) == op1 {
                return false;
            }

            //op1 -> op1b and op2 -> op2b are the extremities of the horizontal edges
            let (left, right) = match get_overlap(
                points.pt(op1).x,
                points.pt(op1b).x,
                points.pt(op2).x,
                points.pt(op2b).x,
            ) {
                Some(overlap) => overlap,
                None => return false,
            };

            //joining overlapping edges leaves a spike to discard; op1 and op2
            //must stay off the discarded side since other joins may need them
            let in_range = |op: usize| (left..=right).contains(&points.pt(op).x);
            let (pt, is_discard_left) = if in_range(op1) {
                (points.pt(op1), points.pt(op1).x > points.pt(op1b).x)
            } else if in_range(op2) {
                (points.pt(op2), points.pt(op2).x > points.pt(op2b).x)
            } else if in_range(op1b) {
                (points.pt(op1b), points.pt(op1b).x > points.pt(op1).x)
            } else {
                (points.pt(op2b), points.pt(op2b).x > points.pt(op2).x)
            };

            self.out_pt1 = op1;
            self.out_pt2 = op2;

            return points.join_horz(op1, op1b, op2, op2b, &pt, is_discard_left);
        }

        //non-horizontal: out_pt1 and out_pt2 share y and lie below off_pt
        let is_reverse1 = match self.is_reversed(points, op1, use_full_range) {
            Some(is_reverse) => is_reverse,
            None => return false,
        };
        let is_reverse2 = match self.is_reversed(points, op2, use_full_range) {
            Some(is_reverse) => is_reverse,
            None => return false,
        };

        if (is_records_same && is_reverse1 == is_reverse2)
            || Self::unique_neighbor(points, op1, is_reverse1) == Self::unique_neighbor(points, op2, is_reverse2)
        {
            return false;
        }

        self.apply(points, op1, op2, is_reverse1);

        true
    }

    fn unique_neighbor(points: &OutPtList, op: usize, is_reverse: bool) -> usize {
        let pt = points.pt(op);
        let mut result = if is_reverse { points.prev(op) } else { points.next(op) };

        while points.pt(result) == pt && result != op {
            result = if is_reverse { points.prev(result) } else { points.next(result) };
        }

        result
    }

    fn strictly_simple_direction(points: &OutPtList, op: usize, off_pt: &IntPoint) -> bool {
        let mut op_b = points.next(op);

        while op_b != op && points.pt(op_b) == *off_pt {
            op_b = points.next(op_b);
        }

        points.pt(op_b).y > off_pt.y
    }
}

#[derive(Debug, Default)]
pub struct JoinList {
    joins: Vec<Join>,
    ghosts: Vec<GhostJoin>,
}

impl JoinList {
    pub fn new() -> Self {
        Self {
            joins: Vec::new(),
            ghosts: Vec::new(),
        }
    }

    pub fn add(&mut self, out_pt1: usize, out_pt2: usize, off_pt: IntPoint) {
        self.joins.push(Join::new(out_pt1, out_pt2, off_pt));
    }

    pub fn add_ghost(&mut self, out_pt: usize, off_pt: IntPoint) {
        self.ghosts.push(GhostJoin { out_pt, off_pt });
    }

    pub fn ghosts(&self) -> &[GhostJoin] {
        &self.ghosts
    }

    pub fn clear_ghosts(&mut self) {
        self.ghosts.clear();
    }

    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    /// Hands the pending joins over for resolution.
    pub fn take(&mut self) -> Vec<Join> {
        std::mem::take(&mut self.joins)
    }

    pub fn clear(&mut self) {
        self.joins.clear();
        self.ghosts.clear();
    }
}
