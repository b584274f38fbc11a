use crate::clipper::constants::HORIZONTAL;
use crate::clipper::enums::{ClipType, Direction, EdgeSide, PolyFillType, PolyType};
use crate::clipper::error::{ClipperError, ClipperResult};
use crate::geometry::point::IntPoint;
use crate::utils::math::products_equal;
use crate::utils::round::round_to_i64;
use std::ops::{Index, IndexMut};

/// Output contour an edge currently feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutIdx {
    Unassigned,
    /// Last edge of an open path; never becomes part of a bound.
    Skip,
    Assigned(usize),
}

#[derive(Debug, Clone)]
pub struct TEdge {
    pub bot: IntPoint,
    /// Current position, updated for every new scanbeam.
    pub curr: IntPoint,
    pub top: IntPoint,
    pub delta: IntPoint,
    pub dx: f64,
    pub poly_typ: PolyType,
    /// Side of the output contour, only meaningful while contributing.
    pub side: EdgeSide,
    /// 1 or -1 depending on winding direction, 0 for open paths.
    pub wind_delta: i32,
    pub wind_cnt: i32,
    /// Winding count of the opposite polytype.
    pub wind_cnt2: i32,
    pub out_idx: OutIdx,
    pub next: usize,
    pub prev: usize,
    pub next_in_lml: Option<usize>,
    pub next_in_ael: Option<usize>,
    pub prev_in_ael: Option<usize>,
    pub next_in_sel: Option<usize>,
    pub prev_in_sel: Option<usize>,
}

impl TEdge {
    pub fn new(curr: IntPoint, next: usize, prev: usize) -> Self {
        Self {
            bot: IntPoint::default(),
            curr,
            top: IntPoint::default(),
            delta: IntPoint::default(),
            dx: 0.0,
            poly_typ: PolyType::Subject,
            side: EdgeSide::Left,
            wind_delta: 0,
            wind_cnt: 0,
            wind_cnt2: 0,
            out_idx: OutIdx::Unassigned,
            next,
            prev,
            next_in_lml: None,
            next_in_ael: None,
            prev_in_ael: None,
            next_in_sel: None,
            prev_in_sel: None,
        }
    }

    pub fn init_from_poly_type(&mut self, next_curr: IntPoint, poly_type: PolyType) {
        if self.curr.y >= next_curr.y {
            self.bot = self.curr;
            self.top = next_curr;
        } else {
            self.top = self.curr;
            self.bot = next_curr;
        }

        self.set_dx();
        self.poly_typ = poly_type;
    }

    pub fn set_dx(&mut self) {
        self.delta = self.top.sub(&self.bot);
        self.dx = if self.delta.y == 0 {
            HORIZONTAL
        } else {
            self.delta.x as f64 / self.delta.y as f64
        };
    }

    //swap horizontal edges' top and bottom x's so they follow the natural
    //progression of the bounds, ie so their xbots align with the adjoining lower edge
    pub fn reverse_horizontal(&mut self) {
        std::mem::swap(&mut self.top.x, &mut self.bot.x);
    }

    #[inline(always)]
    pub fn is_horizontal(&self) -> bool {
        self.delta.y == 0
    }

    #[inline(always)]
    pub fn is_dx_horizontal(&self) -> bool {
        self.dx == HORIZONTAL
    }

    #[inline(always)]
    pub fn is_assigned(&self) -> bool {
        matches!(self.out_idx, OutIdx::Assigned(_))
    }

    #[inline(always)]
    pub fn rec_index(&self) -> Option<usize> {
        match self.out_idx {
            OutIdx::Assigned(index) => Some(index),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn unassign(&mut self) {
        self.out_idx = OutIdx::Unassigned;
    }

    pub fn is_maxima(&self, y: i64) -> bool {
        self.top.y == y && self.next_in_lml.is_none()
    }

    pub fn is_intermediate(&self, y: i64) -> bool {
        self.top.y == y && self.next_in_lml.is_some()
    }

    pub fn top_x(&self, y: i64) -> i64 {
        if y == self.top.y {
            self.top.x
        } else {
            self.bot.x + round_to_i64(self.dx * (y - self.bot.y) as f64)
        }
    }

    /// Direction of travel along a horizontal edge with its left and right x.
    pub fn horz_direction(&self) -> (Direction, i64, i64) {
        if self.bot.x < self.top.x {
            (Direction::LeftToRight, self.bot.x, self.top.x)
        } else {
            (Direction::RightToLeft, self.top.x, self.bot.x)
        }
    }
}

/// Weight of a winding count under a fill rule; contributing values are 0 and 1.
pub fn filled_count(count: i32, fill_type: PolyFillType) -> i32 {
    match fill_type {
        PolyFillType::Positive => count,
        PolyFillType::Negative => -count,
        _ => count.abs(),
    }
}

/// Edge arena with the active (AEL) and sorted (SEL) edge lists threaded
/// through it.
#[derive(Debug)]
pub struct TEdgeList {
    edges: Vec<TEdge>,
    pub active: Option<usize>,
    pub sorted: Option<usize>,
    clip_type: ClipType,
    subj_fill_type: PolyFillType,
    clip_fill_type: PolyFillType,
    use_full_range: bool,
}

impl Index<usize> for TEdgeList {
    type Output = TEdge;

    fn index(&self, index: usize) -> &TEdge {
        &self.edges[index]
    }
}

impl IndexMut<usize> for TEdgeList {
    fn index_mut(&mut self, index: usize) -> &mut TEdge {
        &mut self.edges[index]
    }
}

impl Default for TEdgeList {
    fn default() -> Self {
        Self::new()
    }
}

impl TEdgeList {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            active: None,
            sorted: None,
            clip_type: ClipType::Intersection,
            subj_fill_type: PolyFillType::EvenOdd,
            clip_fill_type: PolyFillType::EvenOdd,
            use_full_range: false,
        }
    }

    pub fn init(&mut self, clip_type: ClipType, subj_fill_type: PolyFillType, clip_fill_type: PolyFillType) {
        self.clip_type = clip_type;
        self.subj_fill_type = subj_fill_type;
        self.clip_fill_type = clip_fill_type;
    }

    pub fn clear(&mut self) {
        self.edges.clear();
        self.active = None;
        self.sorted = None;
        self.use_full_range = false;
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Appends a chain of edges, returning the index of its first edge.
    pub fn extend(&mut self, edges: Vec<TEdge>) -> usize {
        let result = self.edges.len();
        self.edges.extend(edges);
        result
    }

    /// Drops a rejected chain appended last.
    pub fn truncate(&mut self, len: usize) {
        self.edges.truncate(len);
    }

    pub fn use_full_range(&self) -> bool {
        self.use_full_range
    }

    pub fn set_use_full_range(&mut self, value: bool) {
        self.use_full_range = value;
    }

    pub fn clip_type(&self) -> ClipType {
        self.clip_type
    }

    /// Own and opposite fill rules of an edge.
    pub fn fill_types(&self, index: usize) -> (PolyFillType, PolyFillType) {
        if self.edges[index].poly_typ == PolyType::Subject {
            (self.subj_fill_type, self.clip_fill_type)
        } else {
            (self.clip_fill_type, self.subj_fill_type)
        }
    }

    pub fn is_even_odd_fill_type(&self, index: usize) -> bool {
        self.fill_types(index).0 == PolyFillType::EvenOdd
    }

    pub fn is_even_odd_alt_fill_type(&self, index: usize) -> bool {
        self.fill_types(index).1 == PolyFillType::EvenOdd
    }

    pub fn slopes_equal(&self, index1: usize, index2: usize) -> bool {
        let e1 = &self.edges[index1];
        let e2 = &self.edges[index2];

        products_equal(
            e1.delta.y,
            e2.delta.x,
            e1.delta.x,
            e2.delta.y,
            self.use_full_range,
        )
    }

    pub fn get_next_in_ael(&self, index: usize, direction: Direction) -> Option<usize> {
        match direction {
            Direction::LeftToRight => self.edges[index].next_in_ael,
            Direction::RightToLeft => self.edges[index].prev_in_ael,
        }
    }

    fn get_next(&self, index: usize, is_ael: bool) -> Option<usize> {
        if is_ael {
            self.edges[index].next_in_ael
        } else {
            self.edges[index].next_in_sel
        }
    }

    fn get_prev(&self, index: usize, is_ael: bool) -> Option<usize> {
        if is_ael {
            self.edges[index].prev_in_ael
        } else {
            self.edges[index].prev_in_sel
        }
    }

    fn set_next(&mut self, index: usize, is_ael: bool, value: Option<usize>) {
        if is_ael {
            self.edges[index].next_in_ael = value;
        } else {
            self.edges[index].next_in_sel = value;
        }
    }

    fn set_prev(&mut self, index: usize, is_ael: bool, value: Option<usize>) {
        if is_ael {
            self.edges[index].prev_in_ael = value;
        } else {
            self.edges[index].prev_in_sel = value;
        }
    }

    fn head(&self, is_ael: bool) -> Option<usize> {
        if is_ael {
            self.active
        } else {
            self.sorted
        }
    }

    fn set_head(&mut self, is_ael: bool, value: Option<usize>) {
        if is_ael {
            self.active = value;
        } else {
            self.sorted = value;
        }
    }

    /// e2 goes left of e1 on the current row.
    fn e2_inserts_before_e1(&self, index1: usize, index2: usize) -> bool {
        let e1 = &self.edges[index1];
        let e2 = &self.edges[index2];

        if e2.curr.x == e1.curr.x {
            if e2.top.y > e1.top.y {
                e2.top.x < e1.top_x(e2.top.y)
            } else {
                e1.top.x > e2.top_x(e1.top.y)
            }
        } else {
            e2.curr.x < e1.curr.x
        }
    }

    pub fn insert_edge_into_ael(&mut self, index: usize, start: Option<usize>) {
        let active = match self.active {
            Some(active) => active,
            None => {
                self.edges[index].prev_in_ael = None;
                self.edges[index].next_in_ael = None;
                self.active = Some(index);
                return;
            }
        };

        if start.is_none() && self.e2_inserts_before_e1(active, index) {
            self.edges[index].prev_in_ael = None;
            self.edges[index].next_in_ael = Some(active);
            self.edges[active].prev_in_ael = Some(index);
            self.active = Some(index);
            return;
        }

        let mut start = start.unwrap_or(active);

        while let Some(next) = self.edges[start].next_in_ael {
            if self.e2_inserts_before_e1(next, index) {
                break;
            }
            start = next;
        }

        let next = self.edges[start].next_in_ael;

        self.edges[index].next_in_ael = next;
        if let Some(next) = next {
            self.edges[next].prev_in_ael = Some(index);
        }
        self.edges[index].prev_in_ael = Some(start);
        self.edges[start].next_in_ael = Some(index);
    }

    pub fn delete_from_list(&mut self, index: usize, is_ael: bool) {
        let prev = self.get_prev(index, is_ael);
        let next = self.get_next(index, is_ael);

        //already deleted
        if prev.is_none() && next.is_none() && self.head(is_ael) != Some(index) {
            return;
        }

        match prev {
            Some(prev) => self.set_next(prev, is_ael, next),
            None => self.set_head(is_ael, next),
        }

        if let Some(next) = next {
            self.set_prev(next, is_ael, prev);
        }

        self.set_next(index, is_ael, None);
        self.set_prev(index, is_ael, None);
    }

    pub fn delete_from_ael(&mut self, index: usize) {
        self.delete_from_list(index, true);
    }

    pub fn swap_positions_in_list(&mut self, index1: usize, index2: usize, is_ael: bool) {
        //check that one or other edge hasn't already been removed from the list
        if self.get_next(index1, is_ael) == self.get_prev(index1, is_ael)
            || self.get_next(index2, is_ael) == self.get_prev(index2, is_ael)
        {
            return;
        }

        if self.get_next(index1, is_ael) == Some(index2) {
            let next = self.get_next(index2, is_ael);
            let prev = self.get_prev(index1, is_ael);

            if let Some(next) = next {
                self.set_prev(next, is_ael, Some(index1));
            }
            if let Some(prev) = prev {
                self.set_next(prev, is_ael, Some(index2));
            }

            self.set_prev(index2, is_ael, prev);
            self.set_next(index2, is_ael, Some(index1));
            self.set_prev(index1, is_ael, Some(index2));
            self.set_next(index1, is_ael, next);
        } else if self.get_next(index2, is_ael) == Some(index1) {
            let next = self.get_next(index1, is_ael);
            let prev = self.get_prev(index2, is_ael);

            if let Some(next) = next {
                self.set_prev(next, is_ael, Some(index2));
            }
            if let Some(prev) = prev {
                self.set_next(prev, is_ael, Some(index1));
            }

            self.set_prev(index1, is_ael, prev);
            self.set_next(index1, is_ael, Some(index2));
            self.set_prev(index2, is_ael, Some(index1));
            self.set_next(index2, is_ael, next);
        } else {
            let next = self.get_next(index1, is_ael);
            let prev = self.get_prev(index1, is_ael);
            let next2 = self.get_next(index2, is_ael);
            let prev2 = self.get_prev(index2, is_ael);

            self.set_next(index1, is_ael, next2);
            if let Some(next2) = next2 {
                self.set_prev(next2, is_ael, Some(index1));
            }
            self.set_prev(index1, is_ael, prev2);
            if let Some(prev2) = prev2 {
                self.set_next(prev2, is_ael, Some(index1));
            }
            self.set_next(index2, is_ael, next);
            if let Some(next) = next {
                self.set_prev(next, is_ael, Some(index2));
            }
            self.set_prev(index2, is_ael, prev);
            if let Some(prev) = prev {
                self.set_next(prev, is_ael, Some(index2));
            }
        }

        if self.get_prev(index1, is_ael).is_none() {
            self.set_head(is_ael, Some(index1));
        } else if self.get_prev(index2, is_ael).is_none() {
            self.set_head(is_ael, Some(index2));
        }
    }

    /// Pushes to the front; the SEL is used as a stack for horizontals.
    pub fn add_edge_to_sel(&mut self, index: usize) {
        self.edges[index].prev_in_sel = None;
        self.edges[index].next_in_sel = self.sorted;

        if let Some(sorted) = self.sorted {
            self.edges[sorted].prev_in_sel = Some(index);
        }

        self.sorted = Some(index);
    }

    pub fn pop_edge_from_sel(&mut self) -> Option<usize> {
        let result = self.sorted?;

        self.sorted = self.edges[result].next_in_sel;
        if let Some(sorted) = self.sorted {
            self.edges[sorted].prev_in_sel = None;
        }
        self.edges[result].next_in_sel = None;
        self.edges[result].prev_in_sel = None;

        Some(result)
    }

    pub fn copy_ael_to_sel(&mut self) {
        let mut edge = self.active;
        self.sorted = edge;

        while let Some(index) = edge {
            self.edges[index].prev_in_sel = self.edges[index].prev_in_ael;
            self.edges[index].next_in_sel = self.edges[index].next_in_ael;
            edge = self.edges[index].next_in_ael;
        }
    }

    /// Copies the AEL into the SEL and moves every edge to its x at `top_y`.
    pub fn prepare_for_intersections(&mut self, top_y: i64) {
        self.copy_ael_to_sel();

        let mut edge = self.active;
        while let Some(index) = edge {
            self.edges[index].curr.x = self.edges[index].top_x(top_y);
            edge = self.edges[index].next_in_ael;
        }
    }

    pub fn edges_adjacent_in_sel(&self, index1: usize, index2: usize) -> bool {
        self.edges[index1].next_in_sel == Some(index2) || self.edges[index1].prev_in_sel == Some(index2)
    }

    /// Replaces an edge in the AEL with the next edge of its bound.
    pub fn update_edge_into_ael(&mut self, index: usize) -> ClipperResult<usize> {
        let next = self.edges[index]
            .next_in_lml
            .ok_or(ClipperError::InvalidEdgeUpdate)?;
        let edge = self.edges[index].clone();

        match edge.prev_in_ael {
            Some(prev) => self.edges[prev].next_in_ael = Some(next),
            None => self.active = Some(next),
        }
        if let Some(ael_next) = edge.next_in_ael {
            self.edges[ael_next].prev_in_ael = Some(next);
        }

        let result = &mut self.edges[next];
        result.out_idx = edge.out_idx;
        result.side = edge.side;
        result.wind_delta = edge.wind_delta;
        result.wind_cnt = edge.wind_cnt;
        result.wind_cnt2 = edge.wind_cnt2;
        result.curr = result.bot;
        result.prev_in_ael = edge.prev_in_ael;
        result.next_in_ael = edge.next_in_ael;

        Ok(next)
    }

    pub fn swap_sides(&mut self, index1: usize, index2: usize) {
        let side = self.edges[index1].side;
        self.edges[index1].side = self.edges[index2].side;
        self.edges[index2].side = side;
    }

    pub fn swap_poly_indexes(&mut self, index1: usize, index2: usize) {
        let out_idx = self.edges[index1].out_idx;
        self.edges[index1].out_idx = self.edges[index2].out_idx;
        self.edges[index2].out_idx = out_idx;
    }

    pub fn swap_sides_and_indexes(&mut self, index1: usize, index2: usize) {
        self.swap_sides(index1, index2);
        self.swap_poly_indexes(index1, index2);
    }

    pub fn maxima_pair(&self, index: usize) -> Option<usize> {
        let edge = &self.edges[index];
        let next = &self.edges[edge.next];
        let prev = &self.edges[edge.prev];

        if next.top == edge.top && next.next_in_lml.is_none() {
            Some(edge.next)
        } else if prev.top == edge.top && prev.next_in_lml.is_none() {
            Some(edge.prev)
        } else {
            None
        }
    }

    /// As `maxima_pair`, but `None` when the pair is not in the AEL (unless
    /// it is horizontal).
    pub fn maxima_pair_ex(&self, index: usize) -> Option<usize> {
        let result = self.maxima_pair(index)?;
        let pair = &self.edges[result];

        if pair.out_idx == OutIdx::Skip
            || (pair.next_in_ael == pair.prev_in_ael && !pair.is_horizontal())
        {
            None
        } else {
            Some(result)
        }
    }

    pub fn find_next_loc_min(&self, index: usize) -> usize {
        let mut e = index;

        loop {
            while self.edges[e].bot != self.edges[self.edges[e].prev].bot
                || self.edges[e].curr == self.edges[e].top
            {
                e = self.edges[e].next;
            }

            if !self.edges[e].is_dx_horizontal() && !self.edges[self.edges[e].prev].is_dx_horizontal() {
                break;
            }

            while self.edges[self.edges[e].prev].is_dx_horizontal() {
                e = self.edges[e].prev;
            }

            let e2 = e;

            while self.edges[e].is_dx_horizontal() {
                e = self.edges[e].next;
            }

            //ie just an intermediate horz.
            if self.edges[e].top.y == self.edges[self.edges[e].prev].bot.y {
                continue;
            }

            if self.edges[self.edges[e2].prev].bot.x < self.edges[e].bot.x {
                e = e2;
            }

            break;
        }

        e
    }

    pub fn is_contributing(&self, index: usize) -> bool {
        let edge = &self.edges[index];
        let (pft, pft2) = self.fill_types(index);

        let own_filled = match pft {
            //a subject line flagged as inside a subject polygon
            PolyFillType::EvenOdd => edge.wind_delta != 0 || edge.wind_cnt == 1,
            PolyFillType::NonZero => edge.wind_cnt.abs() == 1,
            PolyFillType::Positive => edge.wind_cnt == 1,
            PolyFillType::Negative => edge.wind_cnt == -1,
        };

        if !own_filled {
            return false;
        }

        let wind_cnt2 = edge.wind_cnt2;
        let outside_other = match pft2 {
            PolyFillType::EvenOdd | PolyFillType::NonZero => wind_cnt2 == 0,
            PolyFillType::Positive => wind_cnt2 <= 0,
            PolyFillType::Negative => wind_cnt2 >= 0,
        };
        let inside_other = match pft2 {
            PolyFillType::EvenOdd | PolyFillType::NonZero => wind_cnt2 != 0,
            PolyFillType::Positive => wind_cnt2 > 0,
            PolyFillType::Negative => wind_cnt2 < 0,
        };

        match self.clip_type {
            ClipType::Intersection => inside_other,
            ClipType::Union => outside_other,
            ClipType::Difference => {
                if edge.poly_typ == PolyType::Subject {
                    outside_other
                } else {
                    inside_other
                }
            }
            ClipType::Xor => edge.wind_delta != 0 || outside_other,
        }
    }

    pub fn set_winding_count(&mut self, index: usize) {
        let poly_typ = self.edges[index].poly_typ;
        let wind_delta = self.edges[index].wind_delta;
        let mut prev = self.edges[index].prev_in_ael;

        //find the edge of the same polytype that immediately precedes 'edge' in AEL
        while let Some(prev_index) = prev {
            let edge = &self.edges[prev_index];
            if edge.poly_typ == poly_typ && edge.wind_delta != 0 {
                break;
            }
            prev = edge.prev_in_ael;
        }

        let (wind_cnt, wind_cnt2, mut cursor) = match prev {
            None => {
                let wind_cnt = if wind_delta != 0 {
                    wind_delta
                } else if self.fill_types(index).0 == PolyFillType::Negative {
                    -1
                } else {
                    1
                };

                (wind_cnt, 0, self.active)
            }
            Some(prev) if wind_delta == 0 && self.clip_type != ClipType::Union => {
                (1, self.edges[prev].wind_cnt2, self.edges[prev].next_in_ael)
            }
            Some(prev) if self.is_even_odd_fill_type(index) => {
                let wind_cnt = if wind_delta == 0 {
                    //are we inside a subj polygon ...
                    let prev_typ = self.edges[prev].poly_typ;
                    let mut inside = true;
                    let mut e2 = self.edges[prev].prev_in_ael;

                    while let Some(e2_index) = e2 {
                        if self.edges[e2_index].poly_typ == prev_typ && self.edges[e2_index].wind_delta != 0 {
                            inside = !inside;
                        }
                        e2 = self.edges[e2_index].prev_in_ael;
                    }

                    if inside {
                        0
                    } else {
                        1
                    }
                } else {
                    wind_delta
                };

                (wind_cnt, self.edges[prev].wind_cnt2, self.edges[prev].next_in_ael)
            }
            Some(prev) => {
                let e = &self.edges[prev];
                let wind_cnt = if e.wind_cnt * e.wind_delta < 0 {
                    //prev edge is 'decreasing' the count toward zero, so we're
                    //outside the previous polygon
                    if e.wind_cnt.abs() > 1 {
                        //outside prev poly but still inside another
                        if e.wind_delta * wind_delta < 0 {
                            e.wind_cnt
                        } else {
                            e.wind_cnt + wind_delta
                        }
                    } else if wind_delta == 0 {
                        1
                    } else {
                        wind_delta
                    }
                } else if wind_delta == 0 {
                    //inside the previous polygon
                    if e.wind_cnt < 0 {
                        e.wind_cnt - 1
                    } else {
                        e.wind_cnt + 1
                    }
                } else if e.wind_delta * wind_delta < 0 {
                    e.wind_cnt
                } else {
                    e.wind_cnt + wind_delta
                };

                (wind_cnt, e.wind_cnt2, e.next_in_ael)
            }
        };

        let mut wind_cnt2 = wind_cnt2;
        let is_alt_even_odd = self.is_even_odd_alt_fill_type(index);

        while let Some(cursor_index) = cursor {
            if cursor_index == index {
                break;
            }

            let delta = self.edges[cursor_index].wind_delta;

            if is_alt_even_odd {
                if delta != 0 {
                    wind_cnt2 = if wind_cnt2 == 0 { 1 } else { 0 };
                }
            } else {
                wind_cnt2 += delta;
            }

            cursor = self.edges[cursor_index].next_in_ael;
        }

        self.edges[index].wind_cnt = wind_cnt;
        self.edges[index].wind_cnt2 = wind_cnt2;
    }

    /// Crossing of two edges, clamped into the current scanbeam.
    pub fn intersect_point(&self, index1: usize, index2: usize) -> IntPoint {
        let e1 = &self.edges[index1];
        let e2 = &self.edges[index2];

        //with very large coordinates dx may match even though slopes differ
        if e1.dx == e2.dx {
            let y = e1.curr.y;
            return IntPoint::new(e1.top_x(y), y);
        }

        let mut result = if e1.delta.x == 0 {
            let x = e1.bot.x;
            let y = if e2.is_horizontal() {
                e2.bot.y
            } else {
                let b2 = e2.bot.y as f64 - e2.bot.x as f64 / e2.dx;
                round_to_i64(x as f64 / e2.dx + b2)
            };

            IntPoint::new(x, y)
        } else if e2.delta.x == 0 {
            let x = e2.bot.x;
            let y = if e1.is_horizontal() {
                e1.bot.y
            } else {
                let b1 = e1.bot.y as f64 - e1.bot.x as f64 / e1.dx;
                round_to_i64(x as f64 / e1.dx + b1)
            };

            IntPoint::new(x, y)
        } else {
            let b1 = e1.bot.x as f64 - e1.bot.y as f64 * e1.dx;
            let b2 = e2.bot.x as f64 - e2.bot.y as f64 * e2.dx;
            let q = (b2 - b1) / (e1.dx - e2.dx);
            let x = if e1.dx.abs() < e2.dx.abs() {
                round_to_i64(e1.dx * q + b1)
            } else {
                round_to_i64(e2.dx * q + b2)
            };

            IntPoint::new(x, round_to_i64(q))
        };

        if result.y < e1.top.y || result.y < e2.top.y {
            result.y = e1.top.y.max(e2.top.y);
            result.x = if e1.dx.abs() < e2.dx.abs() {
                e1.top_x(result.y)
            } else {
                e2.top_x(result.y)
            };
        }

        //don't allow the point below curr.y (ie bottom of scanbeam)
        if result.y > e1.curr.y {
            result.y = e1.curr.y;
            //better to use the more vertical edge to derive x
            result.x = if e1.dx.abs() > e2.dx.abs() {
                e2.top_x(result.y)
            } else {
                e1.top_x(result.y)
            };
        }

        result
    }
}
