use crate::clipper::enums::Direction;
use crate::geometry::point::{IntPoint, Path};
use crate::geometry::polygon::{point_in_ring, PointLocation};
use crate::utils::math::get_dx;
use std::ops::{Index, IndexMut};

/// Vertex of an output contour, member of a circular doubly linked ring.
#[derive(Debug, Clone)]
pub struct OutPt {
    /// Index of the owning OutRec.
    pub idx: usize,
    pub pt: IntPoint,
    pub next: usize,
    pub prev: usize,
}

/// Arena holding every output ring of a run.
#[derive(Debug, Default)]
pub struct OutPtList {
    points: Vec<OutPt>,
}

impl Index<usize> for OutPtList {
    type Output = OutPt;

    fn index(&self, index: usize) -> &OutPt {
        &self.points[index]
    }
}

impl IndexMut<usize> for OutPtList {
    fn index_mut(&mut self, index: usize) -> &mut OutPt {
        &mut self.points[index]
    }
}

impl OutPtList {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline(always)]
    pub fn pt(&self, index: usize) -> IntPoint {
        self.points[index].pt
    }

    #[inline(always)]
    pub fn next(&self, index: usize) -> usize {
        self.points[index].next
    }

    #[inline(always)]
    pub fn prev(&self, index: usize) -> usize {
        self.points[index].prev
    }

    /// Creates a single-point ring.
    pub fn create(&mut self, rec_index: usize, pt: IntPoint) -> usize {
        let index = self.points.len();

        self.points.push(OutPt {
            idx: rec_index,
            pt,
            next: index,
            prev: index,
        });

        index
    }

    /// Links `next` right after `prev`.
    pub fn push(&mut self, prev: usize, next: usize) {
        self.points[prev].next = next;
        self.points[next].prev = prev;
    }

    /// Inserts a new point between `index.prev` and `index`.
    pub fn insert_before(&mut self, index: usize, pt: IntPoint) -> usize {
        let prev = self.prev(index);
        let result = self.create(self.points[index].idx, pt);

        self.push(prev, result);
        self.push(result, index);

        result
    }

    pub fn duplicate(&mut self, index: usize, is_insert_after: bool) -> usize {
        let result = self.create(self.points[index].idx, self.points[index].pt);

        if is_insert_after {
            let next = self.next(index);
            self.push(result, next);
            self.push(index, result);
        } else {
            let prev = self.prev(index);
            self.push(prev, result);
            self.push(result, index);
        }

        result
    }

    /// Unlinks a point from its ring, returning its predecessor.
    pub fn exclude(&mut self, index: usize) -> usize {
        let prev = self.prev(index);
        let next = self.next(index);

        self.push(prev, next);

        prev
    }

    pub fn reverse_links(&mut self, index: usize) {
        let mut pp1 = index;

        loop {
            let pp2 = self.next(pp1);
            self.points[pp1].next = self.prev(pp1);
            self.points[pp1].prev = pp2;
            pp1 = pp2;

            if pp1 == index {
                break;
            }
        }
    }

    /// Indexes of a ring in `next` order starting at `start`.
    pub fn ring(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(start), move |&index| {
            let next = self.next(index);
            (next != start).then_some(next)
        })
    }

    pub fn ring_points(&self, start: usize) -> impl Iterator<Item = IntPoint> + '_ {
        self.ring(start).map(move |index| self.points[index].pt)
    }

    pub fn point_count(&self, start: Option<usize>) -> usize {
        start.map_or(0, |start| self.ring(start).count())
    }

    pub fn update_idxs(&mut self, start: usize, rec_index: usize) {
        let mut index = start;

        loop {
            self.points[index].idx = rec_index;
            index = self.prev(index);

            if index == start {
                break;
            }
        }
    }

    /// Signed area; positive for clockwise rings in a y-down frame.
    pub fn area(&self, start: usize) -> f64 {
        let result: f64 = self
            .ring(start)
            .map(|index| {
                let curr = self.points[index].pt;
                let prev = self.points[self.prev(index)].pt;

                (prev.x + curr.x) as f64 * (prev.y - curr.y) as f64
            })
            .sum();

        result * 0.5
    }

    /// Reads a ring backwards from the predecessor of `start`.
    pub fn export(&self, start: usize) -> Path {
        let last = self.prev(start);
        let mut result = Vec::new();
        let mut index = last;

        loop {
            result.push(self.points[index].pt);
            index = self.prev(index);

            if index == last {
                break;
            }
        }

        result
    }

    pub fn point_location(&self, pt: &IntPoint, ring: usize) -> PointLocation {
        point_in_ring(pt, self.ring_points(ring))
    }

    /// True when the first vertex of `inner` that is not on the boundary of
    /// `outer` lies inside it.
    pub fn contains_poly(&self, outer: usize, inner: usize) -> bool {
        for index in self.ring(inner) {
            match self.point_location(&self.points[index].pt, outer) {
                PointLocation::OnBoundary => continue,
                location => return location == PointLocation::Inside,
            }
        }

        true
    }

    fn unique_neighbor(&self, index: usize, is_next: bool) -> usize {
        let pt = self.points[index].pt;
        let mut result = if is_next { self.next(index) } else { self.prev(index) };

        while self.points[result].pt == pt && result != index {
            result = if is_next { self.next(result) } else { self.prev(result) };
        }

        result
    }

    fn neighbor_dx(&self, index: usize, is_next: bool) -> f64 {
        let neighbor = self.unique_neighbor(index, is_next);

        get_dx(&self.points[index].pt, &self.points[neighbor].pt).abs()
    }

    /// Decides which of two rings meeting at the same bottom vertex is the outer one.
    pub fn first_is_bottom_pt(&self, btm_pt1: usize, btm_pt2: usize) -> bool {
        let dx1p = self.neighbor_dx(btm_pt1, false);
        let dx1n = self.neighbor_dx(btm_pt1, true);
        let dx2p = self.neighbor_dx(btm_pt2, false);
        let dx2n = self.neighbor_dx(btm_pt2, true);

        if dx1p.max(dx1n) == dx2p.max(dx2n) && dx1p.min(dx1n) == dx2p.min(dx2n) {
            //if otherwise identical use orientation
            self.area(btm_pt1) > 0.0
        } else {
            (dx1p >= dx2p && dx1p >= dx2n) || (dx1n >= dx2p && dx1n >= dx2n)
        }
    }

    pub fn bottom_pt(&self, start: usize) -> usize {
        let mut result = start;
        let mut dups: Option<usize> = None;
        let mut index = self.next(start);

        while index != result {
            let pt = self.points[index].pt;
            let bottom = self.points[result].pt;

            if pt.y > bottom.y {
                result = index;
                dups = None;
            } else if pt.y == bottom.y && pt.x <= bottom.x {
                if pt.x < bottom.x {
                    dups = None;
                    result = index;
                } else if self.next(index) != result && self.prev(index) != result {
                    dups = Some(index);
                }
            }

            index = self.next(index);
        }

        if let Some(mut dup) = dups {
            //there appears to be at least 2 vertices at bottom_pt so ...
            while dup != index {
                if !self.first_is_bottom_pt(index, dup) {
                    result = dup;
                }

                dup = self.next(dup);

                while self.points[dup].pt != self.points[result].pt {
                    dup = self.next(dup);
                }
            }
        }

        result
    }

    fn horz_direction(&self, index1: usize, index2: usize) -> Direction {
        if self.points[index1].pt.x > self.points[index2].pt.x {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    // walks along a horizontal run towards pt and splits it there
    fn split_horz(&mut self, index: usize, direction: Direction, pt: &IntPoint, is_discard_left: bool) -> (usize, usize) {
        let mut op = index;
        let is_left_to_right = direction == Direction::LeftToRight;

        loop {
            let curr = self.points[op].pt;
            let next = self.points[self.next(op)].pt;
            let is_walkable = if is_left_to_right {
                next.x <= pt.x && next.x >= curr.x
            } else {
                next.x >= pt.x && next.x <= curr.x
            };

            if !is_walkable || next.y != pt.y {
                break;
            }

            op = self.next(op);
        }

        if is_discard_left == is_left_to_right && self.points[op].pt.x != pt.x {
            op = self.next(op);
        }

        let is_insert_after = is_discard_left != is_left_to_right;
        let mut op_b = self.duplicate(op, is_insert_after);

        if self.points[op_b].pt != *pt {
            op = op_b;
            self.points[op].pt = *pt;
            op_b = self.duplicate(op, is_insert_after);
        }

        (op, op_b)
    }

    /// Splices two overlapping horizontal runs at `pt`.
    pub fn join_horz(
        &mut self,
        op1: usize,
        op1b: usize,
        op2: usize,
        op2b: usize,
        pt: &IntPoint,
        is_discard_left: bool,
    ) -> bool {
        let direction1 = self.horz_direction(op1, op1b);
        let direction2 = self.horz_direction(op2, op2b);

        if direction1 == direction2 {
            return false;
        }

        //When is_discard_left, op1b goes on the left of op1, otherwise on the right.
        //The same holds for op2 and op2b.
        let (op1, op1b) = self.split_horz(op1, direction1, pt, is_discard_left);
        let (op2, op2b) = self.split_horz(op2, direction2, pt, is_discard_left);

        if (direction1 == Direction::LeftToRight) == is_discard_left {
            self.push(op2, op1);
            self.push(op1b, op2b);
        } else {
            self.push(op1, op2);
            self.push(op2b, op1b);
        }

        true
    }
}
