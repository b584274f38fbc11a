use crate::clipper::out_pt::OutPtList;
use std::ops::{Index, IndexMut};

/// One output contour. `pts` is the leftmost point of the ring and its
/// predecessor the rightmost one.
#[derive(Debug, Clone, Default)]
pub struct OutRec {
    /// Own index, or the index of the record it was merged into.
    pub idx: usize,
    pub is_hole: bool,
    pub is_open: bool,
    /// Nearest record to the left that may contain this one.
    pub first_left: Option<usize>,
    pub pts: Option<usize>,
    pub bottom_pt: Option<usize>,
    pub poly_node: Option<usize>,
}

#[derive(Debug, Default)]
pub struct OutRecList {
    recs: Vec<OutRec>,
}

impl Index<usize> for OutRecList {
    type Output = OutRec;

    fn index(&self, index: usize) -> &OutRec {
        &self.recs[index]
    }
}

impl IndexMut<usize> for OutRecList {
    fn index_mut(&mut self, index: usize) -> &mut OutRec {
        &mut self.recs[index]
    }
}

impl OutRecList {
    pub fn new() -> Self {
        Self { recs: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.recs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recs.is_empty()
    }

    pub fn clear(&mut self) {
        self.recs.clear();
    }

    pub fn create(&mut self) -> usize {
        let idx = self.recs.len();

        self.recs.push(OutRec {
            idx,
            ..OutRec::default()
        });

        idx
    }

    /// Follows merge redirections to the record that owns the ring now.
    pub fn get_out_rec(&self, index: usize) -> usize {
        let mut result = index;

        while result != self.recs[result].idx {
            result = self.recs[result].idx;
        }

        result
    }

    /// Skips first-left records that were merged away.
    pub fn parse_first_left(&self, first_left: Option<usize>) -> Option<usize> {
        let mut result = first_left;

        while let Some(index) = result {
            if self.recs[index].pts.is_some() {
                break;
            }
            result = self.recs[index].first_left;
        }

        result
    }

    /// True when `rec2` is somewhere on the first-left chain of `rec1`.
    pub fn is_right_of(&self, rec1: usize, rec2: usize) -> bool {
        let mut index = self.recs[rec1].first_left;

        while let Some(curr) = index {
            if curr == rec2 {
                return true;
            }
            index = self.recs[curr].first_left;
        }

        false
    }

    /// Record whose bottom vertex is lowest, ie the fragment with the correct hole state.
    pub fn lowermost_rec(&mut self, rec1: usize, rec2: usize, points: &OutPtList) -> usize {
        let btm_pt1 = self.bottom_pt(rec1, points);
        let btm_pt2 = self.bottom_pt(rec2, points);
        let pt1 = points.pt(btm_pt1);
        let pt2 = points.pt(btm_pt2);

        if pt1.y > pt2.y {
            rec1
        } else if pt1.y < pt2.y {
            rec2
        } else if pt1.x < pt2.x {
            rec1
        } else if pt1.x > pt2.x {
            rec2
        } else if points.next(btm_pt1) == btm_pt1 {
            rec2
        } else if points.next(btm_pt2) == btm_pt2 || points.first_is_bottom_pt(btm_pt1, btm_pt2) {
            rec1
        } else {
            rec2
        }
    }

    fn bottom_pt(&mut self, index: usize, points: &OutPtList) -> usize {
        if let Some(bottom_pt) = self.recs[index].bottom_pt {
            return bottom_pt;
        }

        // callers only compare records that still own a ring
        let pts = self.recs[index].pts.unwrap_or_default();
        let result = points.bottom_pt(pts);
        self.recs[index].bottom_pt = Some(result);

        result
    }

    /// Points a record at the nearest ancestor of opposite hole state.
    pub fn fix_hole_linkage(&mut self, index: usize) {
        let first_left = match self.recs[index].first_left {
            Some(first_left) => first_left,
            None => return,
        };
        let is_hole = self.recs[index].is_hole;

        //already points to the correct first_left
        if is_hole != self.recs[first_left].is_hole && self.recs[first_left].pts.is_some() {
            return;
        }

        let mut result = Some(first_left);

        while let Some(curr) = result {
            let rec = &self.recs[curr];
            if rec.is_hole != is_hole && rec.pts.is_some() {
                break;
            }
            result = rec.first_left;
        }

        self.recs[index].first_left = result;
    }

    fn contains(&self, outer: usize, inner: usize, points: &OutPtList) -> bool {
        match (self.recs[outer].pts, self.recs[inner].pts) {
            (Some(outer), Some(inner)) => points.contains_poly(outer, inner),
            _ => false,
        }
    }

    /// After a split, moves records that now sit inside `new_rec` under it.
    pub fn fixup_first_lefts1(&mut self, old_rec: usize, new_rec: usize, points: &OutPtList) {
        for index in 0..self.recs.len() {
            let first_left = self.parse_first_left(self.recs[index].first_left);

            if self.recs[index].pts.is_some()
                && first_left == Some(old_rec)
                && self.contains(new_rec, index, points)
            {
                self.recs[index].first_left = Some(new_rec);
            }
        }
    }

    /// A contour split so that `inner_rec` is now nested in `outer_rec`; every
    /// record sharing their container may have to move under either of them.
    pub fn fixup_first_lefts2(&mut self, inner_rec: usize, outer_rec: usize, points: &OutPtList) {
        let orfl = self.recs[outer_rec].first_left;

        for index in 0..self.recs.len() {
            if self.recs[index].pts.is_none() || index == outer_rec || index == inner_rec {
                continue;
            }

            let first_left = self.parse_first_left(self.recs[index].first_left);

            if first_left != orfl && first_left != Some(inner_rec) && first_left != Some(outer_rec) {
                continue;
            }

            if self.contains(inner_rec, index, points) {
                self.recs[index].first_left = Some(inner_rec);
            } else if self.contains(outer_rec, index, points) {
                self.recs[index].first_left = Some(outer_rec);
            } else if self.recs[index].first_left == Some(inner_rec)
                || self.recs[index].first_left == Some(outer_rec)
            {
                self.recs[index].first_left = orfl;
            }
        }
    }

    /// After a merge, redirects records that pointed at the merged-away one.
    pub fn fixup_first_lefts3(&mut self, old_rec: usize, new_rec: usize) {
        for index in 0..self.recs.len() {
            let first_left = self.parse_first_left(self.recs[index].first_left);

            if self.recs[index].pts.is_some() && first_left == Some(old_rec) {
                self.recs[index].first_left = Some(new_rec);
            }
        }
    }
}
