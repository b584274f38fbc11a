use crate::clipper::clipper::Clipper;
use crate::clipper::constants::HI_RANGE;
use crate::clipper::enums::{EdgeSide, PolyType};
use crate::clipper::error::{ClipperError, ClipperResult};
use crate::clipper::t_edge::{OutIdx, TEdge};
use crate::geometry::point::{IntPoint, Path};
use crate::utils::math::{pt2_is_between_pt1_and_pt3, slopes_equal3};
use log::trace;

impl Clipper {
    /// Adds one path as subject or clip operand. Returns `Ok(false)` when the
    /// path degenerates to nothing once duplicate and collinear vertices are
    /// removed.
    pub fn add_path(&mut self, path: &[IntPoint], poly_type: PolyType, is_closed: bool) -> ClipperResult<bool> {
        if !is_closed && poly_type == PolyType::Clip {
            return Err(ClipperError::OpenClipPath);
        }

        if path.is_empty() {
            return Ok(false);
        }

        let mut high_i = path.len() - 1;

        if is_closed {
            while high_i > 0 && path[high_i] == path[0] {
                high_i -= 1;
            }
        }

        while high_i > 0 && path[high_i] == path[high_i - 1] {
            high_i -= 1;
        }

        if (is_closed && high_i < 2) || (!is_closed && high_i < 1) {
            return Ok(false);
        }

        for pt in &path[..=high_i] {
            self.range_test(pt)?;
        }

        //1. basic edge initialization, next/prev linking the ring
        let count = high_i + 1;
        let base = self.t_edge.len();
        let edges = path[..count]
            .iter()
            .enumerate()
            .map(|(i, pt)| TEdge::new(*pt, base + (i + 1) % count, base + (i + count - 1) % count))
            .collect();

        self.t_edge.extend(edges);

        if self.build_bounds(base, poly_type, is_closed) {
            Ok(true)
        } else {
            self.t_edge.truncate(base);
            Ok(false)
        }
    }

    pub fn add_paths(&mut self, paths: &[Path], poly_type: PolyType, is_closed: bool) -> ClipperResult<bool> {
        let mut result = false;

        for path in paths {
            if self.add_path(path, poly_type, is_closed)? {
                result = true;
            }
        }

        Ok(result)
    }

    /// Drops every added path.
    pub fn clear(&mut self) {
        self.local_minima.clean();
        self.scanbeam.clean();
        self.t_edge.clear();
        self.has_open_paths = false;
    }

    fn range_test(&mut self, pt: &IntPoint) -> ClipperResult<()> {
        let magnitude = pt.x.unsigned_abs().max(pt.y.unsigned_abs());

        if magnitude > HI_RANGE.unsigned_abs() {
            return Err(ClipperError::CoordinateOutOfRange { x: pt.x, y: pt.y });
        }

        if magnitude > self.config.lo_range.unsigned_abs() {
            self.t_edge.set_use_full_range(true);
        }

        Ok(())
    }

    fn remove_edge(&mut self, index: usize) -> usize {
        let prev = self.t_edge[index].prev;
        let next = self.t_edge[index].next;

        self.t_edge[prev].next = next;
        self.t_edge[next].prev = prev;

        next
    }

    fn build_bounds(&mut self, base: usize, poly_type: PolyType, is_closed: bool) -> bool {
        let mut start = base;
        let mut e = start;
        let mut loop_stop = start;

        //2. remove duplicate vertices, and (when closed) collinear edges
        loop {
            let next = self.t_edge[e].next;
            let prev = self.t_edge[e].prev;

            //nb: allows matching start and end points when not closed
            if self.t_edge[e].curr == self.t_edge[next].curr && (is_closed || next != start) {
                if e == next {
                    break;
                }
                if e == start {
                    start = next;
                }
                e = self.remove_edge(e);
                loop_stop = e;
                continue;
            }

            //only two vertices
            if prev == next {
                break;
            }

            let prev_pt = self.t_edge[prev].curr;
            let curr_pt = self.t_edge[e].curr;
            let next_pt = self.t_edge[next].curr;

            //closed paths merge collinear edges; with preserve_collinear only spikes go
            if is_closed
                && slopes_equal3(&prev_pt, &curr_pt, &next_pt, self.t_edge.use_full_range())
                && (!self.config.preserve_collinear || !pt2_is_between_pt1_and_pt3(&prev_pt, &curr_pt, &next_pt))
            {
                if e == start {
                    start = next;
                }
                e = self.remove_edge(e);
                e = self.t_edge[e].prev;
                loop_stop = e;
                continue;
            }

            e = next;

            if e == loop_stop || (!is_closed && self.t_edge[e].next == start) {
                break;
            }
        }

        if (!is_closed && e == self.t_edge[e].next) || (is_closed && self.t_edge[e].prev == self.t_edge[e].next) {
            return false;
        }

        if !is_closed {
            self.has_open_paths = true;
            let last = self.t_edge[start].prev;
            self.t_edge[last].out_idx = OutIdx::Skip;
        }

        //3. second stage of edge initialization
        let start_y = self.t_edge[start].curr.y;
        let mut is_flat = true;
        e = start;

        loop {
            let next = self.t_edge[e].next;
            let next_curr = self.t_edge[next].curr;

            self.t_edge[e].init_from_poly_type(next_curr, poly_type);
            e = next;

            if is_flat && self.t_edge[e].curr.y != start_y {
                is_flat = false;
            }

            if e == start {
                break;
            }
        }

        //4. add edge bounds to the local minima list;
        //totally flat paths get a single bound
        if is_flat {
            if is_closed {
                return false;
            }

            self.add_flat_bound(e);

            return true;
        }

        //avoids an endless loop when open paths have matching start and end points
        let prev = self.t_edge[e].prev;
        if self.t_edge[prev].bot == self.t_edge[prev].top {
            e = self.t_edge[e].next;
        }

        let mut e_min: Option<usize> = None;

        loop {
            e = self.t_edge.find_next_loc_min(e);

            if Some(e) == e_min {
                break;
            }

            if e_min.is_none() {
                e_min = Some(e);
            }

            //e and e.prev share a local minimum (left aligned if horizontal);
            //their slopes decide which starts which bound
            let prev = self.t_edge[e].prev;
            let y = self.t_edge[e].bot.y;
            let (left, right, is_left_forward) = if self.t_edge[e].dx < self.t_edge[prev].dx {
                (prev, e, false)
            } else {
                (e, prev, true)
            };

            let wind_delta = if !is_closed {
                0
            } else if self.t_edge[left].next == right {
                -1
            } else {
                1
            };

            self.t_edge[left].wind_delta = wind_delta;
            self.t_edge[right].wind_delta = -wind_delta;

            e = self.process_bound(left, is_left_forward);
            if self.t_edge[e].out_idx == OutIdx::Skip {
                e = self.process_bound(e, is_left_forward);
            }

            let mut e2 = self.process_bound(right, !is_left_forward);
            if self.t_edge[e2].out_idx == OutIdx::Skip {
                e2 = self.process_bound(e2, !is_left_forward);
            }

            let (left_bound, right_bound) = if self.t_edge[left].out_idx == OutIdx::Skip {
                (None, Some(right))
            } else if self.t_edge[right].out_idx == OutIdx::Skip {
                (Some(left), None)
            } else {
                (Some(left), Some(right))
            };

            self.local_minima.insert(y, left_bound, right_bound);

            if !is_left_forward {
                e = e2;
            }
        }

        true
    }

    fn add_flat_bound(&mut self, start: usize) {
        let mut e = start;
        let prev = self.t_edge[e].prev;

        self.t_edge[prev].out_idx = OutIdx::Skip;
        self.t_edge[e].side = EdgeSide::Right;
        self.t_edge[e].wind_delta = 0;

        loop {
            let prev = self.t_edge[e].prev;
            if self.t_edge[e].bot.x != self.t_edge[prev].top.x {
                self.t_edge[e].reverse_horizontal();
            }

            let next = self.t_edge[e].next;
            if self.t_edge[next].out_idx == OutIdx::Skip {
                break;
            }

            self.t_edge[e].next_in_lml = Some(next);
            e = next;
        }

        let y = self.t_edge[start].bot.y;
        self.local_minima.insert(y, None, Some(start));
    }

    #[inline(always)]
    fn step(&self, index: usize, is_forward: bool) -> usize {
        if is_forward {
            self.t_edge[index].next
        } else {
            self.t_edge[index].prev
        }
    }

    // reverses horizontals so their bottom x meets the top of the previous bound edge
    fn align_horizontal(&mut self, index: usize, start: usize, is_forward: bool) {
        let behind = self.step(index, !is_forward);

        if self.t_edge[index].is_horizontal() && index != start && self.t_edge[index].bot.x != self.t_edge[behind].top.x {
            self.t_edge[index].reverse_horizontal();
        }
    }

    /// Links one bound through `next_in_lml` and returns the edge just beyond it.
    fn process_bound(&mut self, edge: usize, is_forward: bool) -> usize {
        let mut e = edge;
        let mut result = edge;

        if self.t_edge[e].out_idx == OutIdx::Skip {
            //if edges still remain in the bound beyond the skip edge, another
            //minimum is added and the bound processed once more
            loop {
                let ahead = self.step(e, is_forward);
                if self.t_edge[e].top.y != self.t_edge[ahead].bot.y {
                    break;
                }
                e = ahead;
            }

            //top horizontals belong to the opposite bound on a second pass
            while e != result && self.t_edge[e].is_horizontal() {
                e = self.step(e, !is_forward);
            }

            if e == result {
                return self.step(e, is_forward);
            }

            e = self.step(result, is_forward);

            let y = self.t_edge[e].bot.y;
            self.t_edge[e].wind_delta = 0;
            let result = self.process_bound(e, is_forward);
            self.local_minima.insert(y, None, Some(e));

            trace!("open bound split at y = {}", y);

            return result;
        }

        if self.t_edge[e].is_horizontal() {
            //e may follow a skip edge rather than sit on a true minimum, and
            //consecutive horizontals may head left before going right
            let e_start = self.step(e, !is_forward);
            let bot_x = self.t_edge[e].bot.x;
            let start_edge = &self.t_edge[e_start];
            let is_reversed = if start_edge.is_horizontal() {
                start_edge.bot.x != bot_x && start_edge.top.x != bot_x
            } else {
                start_edge.bot.x != bot_x
            };

            if is_reversed {
                self.t_edge[e].reverse_horizontal();
            }
        }

        let e_start = e;

        loop {
            let ahead = self.step(result, is_forward);
            if self.t_edge[result].top.y != self.t_edge[ahead].bot.y || self.t_edge[ahead].out_idx == OutIdx::Skip {
                break;
            }
            result = ahead;
        }

        let ahead = self.step(result, is_forward);

        //at the top of a bound, horizontals join it only when the preceding edge
        //attaches to their left vertex, unless a skip edge divides the top
        if self.t_edge[result].is_horizontal() && self.t_edge[ahead].out_idx != OutIdx::Skip {
            let mut horz = result;

            while self.t_edge[self.step(horz, !is_forward)].is_horizontal() {
                horz = self.step(horz, !is_forward);
            }

            let behind = self.step(horz, !is_forward);
            let (behind_x, ahead_x) = (self.t_edge[behind].top.x, self.t_edge[ahead].top.x);

            if behind_x > ahead_x || (!is_forward && behind_x == ahead_x) {
                result = behind;
            }
        }

        while e != result {
            self.t_edge[e].next_in_lml = Some(self.step(e, is_forward));
            self.align_horizontal(e, e_start, is_forward);
            e = self.step(e, is_forward);
        }

        self.align_horizontal(e, e_start, is_forward);

        self.step(result, is_forward)
    }

    /// Rewinds the minima and every bound before a sweep.
    pub(crate) fn reset(&mut self) {
        self.local_minima.reset();
        self.scanbeam.clean();

        for local_minimum in self.local_minima.iter() {
            self.scanbeam.insert(local_minimum.y);

            let bounds = [
                (local_minimum.left_bound, EdgeSide::Left),
                (local_minimum.right_bound, EdgeSide::Right),
            ];

            for (bound, side) in bounds {
                if let Some(index) = bound {
                    let edge = &mut self.t_edge[index];
                    edge.curr = edge.bot;
                    edge.side = side;
                    edge.out_idx = OutIdx::Unassigned;
                }
            }
        }

        self.t_edge.active = None;
    }
}
