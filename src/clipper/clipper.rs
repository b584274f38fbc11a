use crate::{
    clipper::{
        config::ClipperConfig,
        enums::{ClipType, Direction, EdgeSide, PolyFillType, PolyType},
        error::{ClipperError, ClipperResult},
        intersect_node::IntersectList,
        join::JoinList,
        local_minima::LocalMinima,
        maxima::Maxima,
        out_pt::OutPtList,
        out_rec::OutRecList,
        poly_tree::PolyTree,
        scanbeam::Scanbeam,
        t_edge::{filled_count, OutIdx, TEdgeList},
    },
    geometry::point::{IntPoint, Paths},
    utils::math::{horz_segments_overlap, slopes_equal4},
};
use log::{debug, trace, warn};

/// Boolean clipping session. Paths are added as subject or clip operands and
/// every `execute*` call sweeps them from the bottom row upwards.
pub struct Clipper {
    pub(crate) t_edge: TEdgeList,
    pub(crate) local_minima: LocalMinima,
    pub(crate) scanbeam: Scanbeam,
    pub(crate) maxima: Maxima,
    pub(crate) intersections: IntersectList,
    pub(crate) join: JoinList,
    pub(crate) out_pts: OutPtList,
    pub(crate) out_recs: OutRecList,
    pub(crate) config: ClipperConfig,
    pub(crate) has_open_paths: bool,
    pub(crate) is_using_poly_tree: bool,
    pub(crate) is_execute_locked: bool,
}

impl Default for Clipper {
    fn default() -> Self {
        Self::new(ClipperConfig::default())
    }
}

impl Clipper {
    pub fn new(config: ClipperConfig) -> Self {
        Self {
            t_edge: TEdgeList::new(),
            local_minima: LocalMinima::new(),
            scanbeam: Scanbeam::new(),
            maxima: Maxima::new(),
            intersections: IntersectList::new(),
            join: JoinList::new(),
            out_pts: OutPtList::new(),
            out_recs: OutRecList::new(),
            config,
            has_open_paths: false,
            is_using_poly_tree: false,
            is_execute_locked: false,
        }
    }

    pub fn config(&self) -> &ClipperConfig {
        &self.config
    }

    pub fn execute(&mut self, clip_type: ClipType, fill_type: PolyFillType) -> ClipperResult<Paths> {
        self.execute_with_fill_types(clip_type, fill_type, fill_type)
    }

    /// Closed solution contours. Fails when open paths were added, since
    /// those can only be returned through `execute_tree`.
    pub fn execute_with_fill_types(
        &mut self,
        clip_type: ClipType,
        subj_fill_type: PolyFillType,
        clip_fill_type: PolyFillType,
    ) -> ClipperResult<Paths> {
        if self.is_execute_locked {
            return Err(ClipperError::ExecuteLocked);
        }

        if self.has_open_paths {
            return Err(ClipperError::OpenPathsRequirePolyTree);
        }

        self.is_execute_locked = true;
        self.is_using_poly_tree = false;
        self.t_edge.init(clip_type, subj_fill_type, clip_fill_type);

        let result = self
            .execute_internal()
            .map(|is_swept| if is_swept { self.build_result() } else { Vec::new() });

        self.dispose_output();
        self.is_execute_locked = false;

        if let Ok(paths) = &result {
            debug!("{:?} produced {} paths", clip_type, paths.len());
        }

        result
    }

    pub fn execute_tree(&mut self, clip_type: ClipType, fill_type: PolyFillType) -> ClipperResult<PolyTree> {
        self.execute_tree_with_fill_types(clip_type, fill_type, fill_type)
    }

    /// Solution as a containment tree, including clipped open paths.
    pub fn execute_tree_with_fill_types(
        &mut self,
        clip_type: ClipType,
        subj_fill_type: PolyFillType,
        clip_fill_type: PolyFillType,
    ) -> ClipperResult<PolyTree> {
        if self.is_execute_locked {
            return Err(ClipperError::ExecuteLocked);
        }

        self.is_execute_locked = true;
        self.is_using_poly_tree = true;
        self.t_edge.init(clip_type, subj_fill_type, clip_fill_type);

        let result = self.execute_internal().map(|is_swept| {
            if is_swept {
                self.build_result2()
            } else {
                PolyTree::new()
            }
        });

        self.dispose_output();
        self.is_execute_locked = false;

        if let Ok(tree) = &result {
            debug!("{:?} produced a tree of {} nodes", clip_type, tree.total());
        }

        result
    }

    fn execute_internal(&mut self) -> ClipperResult<bool> {
        let result = self.sweep().map(|is_swept| {
            if is_swept {
                self.build_output();
            }
            is_swept
        });

        self.join.clear();

        result
    }

    fn dispose_output(&mut self) {
        self.out_recs.clear();
        self.out_pts.clear();
        self.intersections.clean();
        self.maxima.clean();
    }

    fn sweep(&mut self) -> ClipperResult<bool> {
        self.reset();
        self.t_edge.sorted = None;
        self.maxima.clean();

        let mut bot_y = match self.scanbeam.pop() {
            Some(y) => y,
            None => return Ok(false),
        };

        self.insert_local_minima_into_ael(bot_y);

        loop {
            let top_y = match self.scanbeam.pop() {
                Some(y) => y,
                None if self.local_minima.min_y().is_some() => bot_y,
                None => break,
            };

            self.process_horizontals()?;
            self.join.clear_ghosts();
            self.process_intersections(top_y)?;
            self.process_edges_at_top_of_scanbeam(top_y)?;
            bot_y = top_y;
            self.insert_local_minima_into_ael(bot_y);
        }

        trace!("sweep finished with {} output records", self.out_recs.len());

        Ok(true)
    }

    /// Replaces an edge with its successor in the bound, scheduling the successor's top.
    pub(crate) fn update_edge_into_ael(&mut self, index: usize) -> ClipperResult<usize> {
        let result = self.t_edge.update_edge_into_ael(index)?;

        if !self.t_edge[result].is_horizontal() {
            self.scanbeam.insert(self.t_edge[result].top.y);
        }

        Ok(result)
    }

    fn insert_local_minima_into_ael(&mut self, bot_y: i64) {
        while let Some(local_minimum) = self.local_minima.pop(bot_y) {
            let lb = local_minimum.left_bound;
            let rb = local_minimum.right_bound;
            let mut op1: Option<usize> = None;

            match (lb, rb) {
                (None, Some(rb)) => {
                    self.t_edge.insert_edge_into_ael(rb, None);
                    self.t_edge.set_winding_count(rb);
                    if self.t_edge.is_contributing(rb) {
                        op1 = Some(self.add_out_pt(rb, self.t_edge[rb].bot));
                    }
                }
                (Some(lb), None) => {
                    self.t_edge.insert_edge_into_ael(lb, None);
                    self.t_edge.set_winding_count(lb);
                    if self.t_edge.is_contributing(lb) {
                        op1 = Some(self.add_out_pt(lb, self.t_edge[lb].bot));
                    }
                    self.scanbeam.insert(self.t_edge[lb].top.y);
                }
                (Some(lb), Some(rb)) => {
                    self.t_edge.insert_edge_into_ael(lb, None);
                    self.t_edge.insert_edge_into_ael(rb, Some(lb));
                    self.t_edge.set_winding_count(lb);
                    self.t_edge[rb].wind_cnt = self.t_edge[lb].wind_cnt;
                    self.t_edge[rb].wind_cnt2 = self.t_edge[lb].wind_cnt2;
                    if self.t_edge.is_contributing(lb) {
                        op1 = Some(self.add_local_min_poly(lb, rb, self.t_edge[lb].bot));
                    }
                    self.scanbeam.insert(self.t_edge[lb].top.y);
                }
                (None, None) => continue,
            }

            if let Some(rb) = rb {
                if self.t_edge[rb].is_horizontal() {
                    if let Some(next) = self.t_edge[rb].next_in_lml {
                        self.scanbeam.insert(self.t_edge[next].top.y);
                    }
                    self.t_edge.add_edge_to_sel(rb);
                } else {
                    self.scanbeam.insert(self.t_edge[rb].top.y);
                }
            }

            let (lb, rb, op1) = match (lb, rb, op1) {
                (Some(lb), Some(rb), Some(op1)) => (lb, rb, op1),
                (Some(lb), Some(rb), None) => {
                    self.intersect_inner_edges(lb, rb);
                    continue;
                }
                _ => continue,
            };

            //output polygons sharing an edge with a horizontal rb need joining later
            if self.t_edge[rb].is_horizontal() && self.t_edge[rb].wind_delta != 0 {
                let (rb_bot_x, rb_top_x) = (self.t_edge[rb].bot.x, self.t_edge[rb].top.x);
                let ghosts: Vec<_> = self
                    .join
                    .ghosts()
                    .iter()
                    .filter(|ghost| {
                        horz_segments_overlap(self.out_pts.pt(ghost.out_pt).x, ghost.off_pt.x, rb_bot_x, rb_top_x)
                    })
                    .cloned()
                    .collect();

                for ghost in ghosts {
                    self.join.add(ghost.out_pt, op1, ghost.off_pt);
                }
            }

            if let Some(prev) = self.t_edge[lb].prev_in_ael {
                let use_full_range = self.t_edge.use_full_range();
                let (lb_edge, prev_edge) = (&self.t_edge[lb], &self.t_edge[prev]);

                if lb_edge.is_assigned()
                    && prev_edge.curr.x == lb_edge.bot.x
                    && prev_edge.is_assigned()
                    && slopes_equal4(&prev_edge.curr, &prev_edge.top, &lb_edge.curr, &lb_edge.top, use_full_range)
                    && lb_edge.wind_delta != 0
                    && prev_edge.wind_delta != 0
                {
                    let (bot, top) = (lb_edge.bot, lb_edge.top);
                    let op2 = self.add_out_pt(prev, bot);
                    self.join.add(op1, op2, top);
                }
            }

            if self.t_edge[lb].next_in_ael != Some(rb) {
                if let Some(prev) = self.t_edge[rb].prev_in_ael {
                    let use_full_range = self.t_edge.use_full_range();
                    let (rb_edge, prev_edge) = (&self.t_edge[rb], &self.t_edge[prev]);

                    if rb_edge.is_assigned()
                        && prev_edge.is_assigned()
                        && slopes_equal4(&prev_edge.curr, &prev_edge.top, &rb_edge.curr, &rb_edge.top, use_full_range)
                        && rb_edge.wind_delta != 0
                        && prev_edge.wind_delta != 0
                    {
                        let (bot, top) = (rb_edge.bot, rb_edge.top);
                        let op2 = self.add_out_pt(prev, bot);
                        self.join.add(op1, op2, top);
                    }
                }

                self.intersect_inner_edges(lb, rb);
            }
        }
    }

    // edges between a freshly inserted bound pair cross the right bound at its bottom
    fn intersect_inner_edges(&mut self, lb: usize, rb: usize) {
        if self.t_edge[lb].next_in_ael == Some(rb) {
            return;
        }

        let pt = self.t_edge[lb].curr;
        let mut e = self.t_edge[lb].next_in_ael;

        while let Some(index) = e {
            if index == rb {
                break;
            }
            //intersect_edges assumes param1 is right of param2 above the intersection
            self.intersect_edges(rb, index, pt);
            e = self.t_edge[index].next_in_ael;
        }
    }

    pub(crate) fn add_out_pt(&mut self, edge: usize, pt: IntPoint) -> usize {
        let rec_index = match self.t_edge[edge].rec_index() {
            Some(rec_index) => rec_index,
            None => {
                let rec_index = self.out_recs.create();
                let is_open = self.t_edge[edge].wind_delta == 0;
                let result = self.out_pts.create(rec_index, pt);

                self.out_recs[rec_index].is_open = is_open;
                self.out_recs[rec_index].pts = Some(result);

                if !is_open {
                    self.set_hole_state(edge, rec_index);
                }

                self.t_edge[edge].out_idx = OutIdx::Assigned(rec_index);

                return result;
            }
        };

        //pts is the leftmost point and pts.prev the rightmost one
        let op = match self.out_recs[rec_index].pts {
            Some(op) => op,
            None => return self.out_pts.create(rec_index, pt),
        };
        let is_to_front = self.t_edge[edge].side == EdgeSide::Left;

        if is_to_front && pt == self.out_pts.pt(op) {
            return op;
        }

        let last = self.out_pts.prev(op);

        if !is_to_front && pt == self.out_pts.pt(last) {
            return last;
        }

        let result = self.out_pts.insert_before(op, pt);

        if is_to_front {
            self.out_recs[rec_index].pts = Some(result);
        }

        result
    }

    fn last_out_pt(&self, edge: usize) -> Option<usize> {
        let rec_index = self.t_edge[edge].rec_index()?;
        let pts = self.out_recs[rec_index].pts?;

        if self.t_edge[edge].side == EdgeSide::Left {
            Some(pts)
        } else {
            Some(self.out_pts.prev(pts))
        }
    }

    fn set_hole_state(&mut self, edge: usize, rec_index: usize) {
        let mut e2 = self.t_edge[edge].prev_in_ael;
        let mut e_tmp: Option<usize> = None;

        while let Some(index) = e2 {
            let e = &self.t_edge[index];

            if e.is_assigned() && e.wind_delta != 0 {
                match e_tmp {
                    None => e_tmp = Some(index),
                    //paired
                    Some(tmp) if self.t_edge[tmp].out_idx == e.out_idx => e_tmp = None,
                    _ => {}
                }
            }

            e2 = e.prev_in_ael;
        }

        match e_tmp.and_then(|tmp| self.t_edge[tmp].rec_index()) {
            None => {
                self.out_recs[rec_index].first_left = None;
                self.out_recs[rec_index].is_hole = false;
            }
            Some(first_left) => {
                self.out_recs[rec_index].first_left = Some(first_left);
                self.out_recs[rec_index].is_hole = !self.out_recs[first_left].is_hole;
            }
        }
    }

    fn add_local_min_poly(&mut self, e1: usize, e2: usize, pt: IntPoint) -> usize {
        let (result, e, prev_e) = if self.t_edge[e2].is_horizontal() || self.t_edge[e1].dx > self.t_edge[e2].dx {
            let result = self.add_out_pt(e1, pt);
            self.t_edge[e2].out_idx = self.t_edge[e1].out_idx;
            self.t_edge[e1].side = EdgeSide::Left;
            self.t_edge[e2].side = EdgeSide::Right;

            let prev_e = if self.t_edge[e1].prev_in_ael == Some(e2) {
                self.t_edge[e2].prev_in_ael
            } else {
                self.t_edge[e1].prev_in_ael
            };

            (result, e1, prev_e)
        } else {
            let result = self.add_out_pt(e2, pt);
            self.t_edge[e1].out_idx = self.t_edge[e2].out_idx;
            self.t_edge[e1].side = EdgeSide::Right;
            self.t_edge[e2].side = EdgeSide::Left;

            let prev_e = if self.t_edge[e2].prev_in_ael == Some(e1) {
                self.t_edge[e1].prev_in_ael
            } else {
                self.t_edge[e2].prev_in_ael
            };

            (result, e2, prev_e)
        };

        if let Some(prev_e) = prev_e {
            let (prev_edge, edge) = (&self.t_edge[prev_e], &self.t_edge[e]);

            if prev_edge.is_assigned() && prev_edge.top.y < pt.y && edge.top.y < pt.y {
                let x_prev = prev_edge.top_x(pt.y);
                let x_e = edge.top_x(pt.y);

                if x_prev == x_e
                    && edge.wind_delta != 0
                    && prev_edge.wind_delta != 0
                    && slopes_equal4(
                        &IntPoint::new(x_prev, pt.y),
                        &prev_edge.top,
                        &IntPoint::new(x_e, pt.y),
                        &edge.top,
                        self.t_edge.use_full_range(),
                    )
                {
                    let top = edge.top;
                    let out_pt = self.add_out_pt(prev_e, pt);
                    self.join.add(result, out_pt, top);
                }
            }
        }

        result
    }

    fn add_local_max_poly(&mut self, e1: usize, e2: usize, pt: IntPoint) {
        self.add_out_pt(e1, pt);

        if self.t_edge[e2].wind_delta == 0 {
            self.add_out_pt(e2, pt);
        }

        match (self.t_edge[e1].rec_index(), self.t_edge[e2].rec_index()) {
            (Some(rec1), Some(rec2)) if rec1 < rec2 => self.append_polygon(e1, e2),
            (Some(rec1), Some(rec2)) if rec1 > rec2 => self.append_polygon(e2, e1),
            _ => {
                self.t_edge[e1].unassign();
                self.t_edge[e2].unassign();
            }
        }
    }

    /// Joins the ring of `e2` onto the ring of `e1` at a local maximum.
    fn append_polygon(&mut self, e1: usize, e2: usize) {
        let (rec1, rec2) = match (self.t_edge[e1].rec_index(), self.t_edge[e2].rec_index()) {
            (Some(rec1), Some(rec2)) => (rec1, rec2),
            _ => return,
        };
        let (p1_lft, p2_lft) = match (self.out_recs[rec1].pts, self.out_recs[rec2].pts) {
            (Some(p1_lft), Some(p2_lft)) => (p1_lft, p2_lft),
            _ => return,
        };

        let hole_state_rec = if self.out_recs.is_right_of(rec1, rec2) {
            rec2
        } else if self.out_recs.is_right_of(rec2, rec1) {
            rec1
        } else {
            self.out_recs.lowermost_rec(rec1, rec2, &self.out_pts)
        };

        let p1_rt = self.out_pts.prev(p1_lft);
        let p2_rt = self.out_pts.prev(p2_lft);
        let side1 = self.t_edge[e1].side;
        let side2 = self.t_edge[e2].side;

        match (side1, side2) {
            (EdgeSide::Left, EdgeSide::Left) => {
                //z y x a b c
                self.out_pts.reverse_links(p2_lft);
                self.out_pts.push(p2_lft, p1_lft);
                self.out_pts.push(p1_rt, p2_rt);
                self.out_recs[rec1].pts = Some(p2_rt);
            }
            (EdgeSide::Left, EdgeSide::Right) => {
                //x y z a b c
                self.out_pts.push(p2_rt, p1_lft);
                self.out_pts.push(p1_rt, p2_lft);
                self.out_recs[rec1].pts = Some(p2_lft);
            }
            (EdgeSide::Right, EdgeSide::Right) => {
                //a b c z y x
                self.out_pts.reverse_links(p2_lft);
                self.out_pts.push(p1_rt, p2_rt);
                self.out_pts.push(p2_lft, p1_lft);
            }
            (EdgeSide::Right, EdgeSide::Left) => {
                //a b c x y z
                self.out_pts.push(p1_rt, p2_lft);
                self.out_pts.push(p2_rt, p1_lft);
            }
        }

        self.out_recs[rec1].bottom_pt = None;

        if hole_state_rec == rec2 {
            let first_left = self.out_recs[rec2].first_left;
            if first_left != Some(rec1) {
                self.out_recs[rec1].first_left = first_left;
            }
            self.out_recs[rec1].is_hole = self.out_recs[rec2].is_hole;
        }

        self.out_recs[rec2].pts = None;
        self.out_recs[rec2].bottom_pt = None;
        self.out_recs[rec2].first_left = Some(rec1);

        //safe because only reached through add_local_max_poly
        self.t_edge[e1].unassign();
        self.t_edge[e2].unassign();

        let mut e = self.t_edge.active;

        while let Some(index) = e {
            if self.t_edge[index].out_idx == OutIdx::Assigned(rec2) {
                self.t_edge[index].out_idx = OutIdx::Assigned(rec1);
                self.t_edge[index].side = side1;
                break;
            }
            e = self.t_edge[index].next_in_ael;
        }

        self.out_recs[rec2].idx = self.out_recs[rec1].idx;
    }

    /// e1 is left of e2 below the crossing and right of it above.
    fn intersect_edges(&mut self, e1: usize, e2: usize, pt: IntPoint) {
        let is_e1_contributing = self.t_edge[e1].is_assigned();
        let is_e2_contributing = self.t_edge[e2].is_assigned();
        let clip_type = self.t_edge.clip_type();

        let (wind_delta1, wind_delta2) = (self.t_edge[e1].wind_delta, self.t_edge[e2].wind_delta);
        let (poly_typ1, poly_typ2) = (self.t_edge[e1].poly_typ, self.t_edge[e2].poly_typ);

        //either edge is on an open path
        if wind_delta1 == 0 || wind_delta2 == 0 {
            //open paths never intersect each other
            if wind_delta1 == 0 && wind_delta2 == 0 {
                return;
            }

            if poly_typ1 == poly_typ2 && wind_delta1 != wind_delta2 && clip_type == ClipType::Union {
                //a subject line crossing a subject polygon
                if wind_delta1 == 0 {
                    if is_e2_contributing {
                        self.add_out_pt(e1, pt);
                        if is_e1_contributing {
                            self.t_edge[e1].unassign();
                        }
                    }
                } else if is_e1_contributing {
                    self.add_out_pt(e2, pt);
                    if is_e2_contributing {
                        self.t_edge[e2].unassign();
                    }
                }
            } else if poly_typ1 != poly_typ2 {
                let (edge1, edge2) = (&self.t_edge[e1], &self.t_edge[e2]);

                if wind_delta1 == 0
                    && edge2.wind_cnt.abs() == 1
                    && (clip_type != ClipType::Union || edge2.wind_cnt2 == 0)
                {
                    self.add_out_pt(e1, pt);
                    if is_e1_contributing {
                        self.t_edge[e1].unassign();
                    }
                } else if wind_delta2 == 0
                    && edge1.wind_cnt.abs() == 1
                    && (clip_type != ClipType::Union || edge1.wind_cnt2 == 0)
                {
                    self.add_out_pt(e2, pt);
                    if is_e2_contributing {
                        self.t_edge[e2].unassign();
                    }
                }
            }

            return;
        }

        //update winding counts, e1 being right of e2 above the intersection
        if poly_typ1 == poly_typ2 {
            if self.t_edge.is_even_odd_fill_type(e1) {
                let wind_cnt = self.t_edge[e1].wind_cnt;
                self.t_edge[e1].wind_cnt = self.t_edge[e2].wind_cnt;
                self.t_edge[e2].wind_cnt = wind_cnt;
            } else {
                let wind_cnt1 = self.t_edge[e1].wind_cnt;
                self.t_edge[e1].wind_cnt = if wind_cnt1 + wind_delta2 == 0 {
                    -wind_cnt1
                } else {
                    wind_cnt1 + wind_delta2
                };

                let wind_cnt2 = self.t_edge[e2].wind_cnt;
                self.t_edge[e2].wind_cnt = if wind_cnt2 - wind_delta1 == 0 {
                    -wind_cnt2
                } else {
                    wind_cnt2 - wind_delta1
                };
            }
        } else {
            if self.t_edge.is_even_odd_fill_type(e2) {
                self.t_edge[e1].wind_cnt2 = if self.t_edge[e1].wind_cnt2 == 0 { 1 } else { 0 };
            } else {
                self.t_edge[e1].wind_cnt2 += wind_delta2;
            }

            if self.t_edge.is_even_odd_fill_type(e1) {
                self.t_edge[e2].wind_cnt2 = if self.t_edge[e2].wind_cnt2 == 0 { 1 } else { 0 };
            } else {
                self.t_edge[e2].wind_cnt2 -= wind_delta1;
            }
        }

        let (fill_type1, fill_type1_alt) = self.t_edge.fill_types(e1);
        let (fill_type2, fill_type2_alt) = self.t_edge.fill_types(e2);
        let e1_wc = filled_count(self.t_edge[e1].wind_cnt, fill_type1);
        let e2_wc = filled_count(self.t_edge[e2].wind_cnt, fill_type2);
        let is_e1_unit = e1_wc == 0 || e1_wc == 1;
        let is_e2_unit = e2_wc == 0 || e2_wc == 1;

        if is_e1_contributing && is_e2_contributing {
            if !is_e1_unit || !is_e2_unit || (poly_typ1 != poly_typ2 && clip_type != ClipType::Xor) {
                self.add_local_max_poly(e1, e2, pt);
            } else {
                self.add_out_pt(e1, pt);
                self.add_out_pt(e2, pt);
                self.t_edge.swap_sides_and_indexes(e1, e2);
            }
        } else if is_e1_contributing {
            if is_e2_unit {
                self.add_out_pt(e1, pt);
                self.t_edge.swap_sides_and_indexes(e1, e2);
            }
        } else if is_e2_contributing {
            if is_e1_unit {
                self.add_out_pt(e2, pt);
                self.t_edge.swap_sides_and_indexes(e1, e2);
            }
        } else if is_e1_unit && is_e2_unit {
            //neither edge is currently contributing
            let e1_wc2 = filled_count(self.t_edge[e1].wind_cnt2, fill_type1_alt);
            let e2_wc2 = filled_count(self.t_edge[e2].wind_cnt2, fill_type2_alt);

            if poly_typ1 != poly_typ2 {
                self.add_local_min_poly(e1, e2, pt);
            } else if e1_wc == 1 && e2_wc == 1 {
                let is_new_contour = match clip_type {
                    ClipType::Intersection => e1_wc2 > 0 && e2_wc2 > 0,
                    ClipType::Union => e1_wc2 <= 0 && e2_wc2 <= 0,
                    ClipType::Difference => {
                        (poly_typ1 == PolyType::Clip && e1_wc2 > 0 && e2_wc2 > 0)
                            || (poly_typ1 == PolyType::Subject && e1_wc2 <= 0 && e2_wc2 <= 0)
                    }
                    ClipType::Xor => true,
                };

                if is_new_contour {
                    self.add_local_min_poly(e1, e2, pt);
                }
            } else {
                self.t_edge.swap_sides(e1, e2);
            }
        }
    }

    fn process_horizontals(&mut self) -> ClipperResult<()> {
        while let Some(horz_edge) = self.t_edge.pop_edge_from_sel() {
            self.process_horizontal(horz_edge)?;
        }

        Ok(())
    }

    // joins a horizontal output segment with every overlapping horizontal still queued
    fn add_horz_joins(&mut self, horz_edge: usize, op1: usize) {
        let (bot_x, top_x) = (self.t_edge[horz_edge].bot.x, self.t_edge[horz_edge].top.x);
        let mut e_next_horz = self.t_edge.sorted;

        while let Some(index) = e_next_horz {
            let edge = &self.t_edge[index];

            if edge.is_assigned() && horz_segments_overlap(bot_x, top_x, edge.bot.x, edge.top.x) {
                let top = edge.top;
                if let Some(op2) = self.last_out_pt(index) {
                    self.join.add(op2, op1, top);
                }
            }

            e_next_horz = self.t_edge[index].next_in_sel;
        }
    }

    fn next_maxima(&self, index: usize, direction: Direction) -> Option<usize> {
        match direction {
            Direction::LeftToRight => (index + 1 < self.maxima.len()).then_some(index + 1),
            Direction::RightToLeft => index.checked_sub(1),
        }
    }

    fn process_horizontal(&mut self, horz_edge: usize) -> ClipperResult<()> {
        let mut horz_edge = horz_edge;
        let is_open = self.t_edge[horz_edge].wind_delta == 0;
        let (mut direction, mut horz_left, mut horz_right) = self.t_edge[horz_edge].horz_direction();

        let mut e_last_horz = horz_edge;
        while let Some(next) = self.t_edge[e_last_horz].next_in_lml {
            if !self.t_edge[next].is_horizontal() {
                break;
            }
            e_last_horz = next;
        }

        let e_max_pair = if self.t_edge[e_last_horz].next_in_lml.is_none() {
            self.t_edge.maxima_pair(e_last_horz)
        } else {
            None
        };

        //first maximum in range (x)
        let mut curr_max = if self.maxima.is_empty() {
            None
        } else {
            let bot_x = self.t_edge[horz_edge].bot.x;
            let last_top_x = self.t_edge[e_last_horz].top.x;

            match direction {
                Direction::LeftToRight => {
                    let index = self.maxima.first_right_of(bot_x);
                    (index < self.maxima.len() && self.maxima.get(index) < last_top_x).then_some(index)
                }
                Direction::RightToLeft => {
                    self.maxima
                        .last_left_of(bot_x)
                        .filter(|index| self.maxima.get(*index) > last_top_x)
                }
            }
        };

        let mut op1: Option<usize> = None;

        //loop through consecutive horizontal edges
        loop {
            let is_last_horz = horz_edge == e_last_horz;
            let mut e = self.t_edge.get_next_in_ael(horz_edge, direction);

            while let Some(index) = e {
                let curr_x = self.t_edge[index].curr.x;

                //insert extra vertices wherever maxima touch the horizontal edge
                while let Some(max_index) = curr_max {
                    let max_x = self.maxima.get(max_index);
                    let is_passed = match direction {
                        Direction::LeftToRight => max_x < curr_x,
                        Direction::RightToLeft => max_x > curr_x,
                    };

                    if !is_passed {
                        break;
                    }

                    if self.t_edge[horz_edge].is_assigned() && !is_open {
                        let pt = IntPoint::new(max_x, self.t_edge[horz_edge].bot.y);
                        self.add_out_pt(horz_edge, pt);
                    }

                    curr_max = self.next_maxima(max_index, direction);
                }

                if (direction == Direction::LeftToRight && curr_x > horz_right)
                    || (direction == Direction::RightToLeft && curr_x < horz_left)
                {
                    break;
                }

                //also stop at the end of an intermediate horizontal edge;
                //smaller dx's are to the right of larger dx's above the horizontal
                if curr_x == self.t_edge[horz_edge].top.x {
                    if let Some(next) = self.t_edge[horz_edge].next_in_lml {
                        if self.t_edge[index].dx < self.t_edge[next].dx {
                            break;
                        }
                    }
                }

                //note: may be done multiple times
                if self.t_edge[horz_edge].is_assigned() && !is_open {
                    let curr = self.t_edge[index].curr;
                    let op = self.add_out_pt(horz_edge, curr);
                    op1 = Some(op);
                    self.add_horz_joins(horz_edge, op);
                    self.join.add_ghost(op, self.t_edge[horz_edge].bot);
                }

                //still in range of the horizontal edge, but make sure this is the
                //last of the consecutive horizontals when matching with e_max_pair
                if Some(index) == e_max_pair && is_last_horz {
                    if self.t_edge[horz_edge].is_assigned() {
                        let top = self.t_edge[horz_edge].top;
                        self.add_local_max_poly(horz_edge, index, top);
                    }
                    self.t_edge.delete_from_ael(horz_edge);
                    self.t_edge.delete_from_ael(index);
                    return Ok(());
                }

                let pt = IntPoint::new(curr_x, self.t_edge[horz_edge].curr.y);

                match direction {
                    Direction::LeftToRight => self.intersect_edges(horz_edge, index, pt),
                    Direction::RightToLeft => self.intersect_edges(index, horz_edge, pt),
                }

                let e_next = self.t_edge.get_next_in_ael(index, direction);
                self.t_edge.swap_positions_in_list(horz_edge, index, true);
                e = e_next;
            }

            //stop unless the next edge in the bound is also horizontal
            match self.t_edge[horz_edge].next_in_lml {
                Some(next) if self.t_edge[next].is_horizontal() => {}
                _ => break,
            }

            horz_edge = self.update_edge_into_ael(horz_edge)?;

            if self.t_edge[horz_edge].is_assigned() {
                let bot = self.t_edge[horz_edge].bot;
                self.add_out_pt(horz_edge, bot);
            }

            (direction, horz_left, horz_right) = self.t_edge[horz_edge].horz_direction();
        }

        if op1.is_none() {
            if let Some(op) = self.last_out_pt(horz_edge) {
                self.add_horz_joins(horz_edge, op);
                self.join.add_ghost(op, self.t_edge[horz_edge].top);
            }
        }

        if self.t_edge[horz_edge].next_in_lml.is_none() {
            if self.t_edge[horz_edge].is_assigned() {
                let top = self.t_edge[horz_edge].top;
                self.add_out_pt(horz_edge, top);
            }
            self.t_edge.delete_from_ael(horz_edge);

            return Ok(());
        }

        if !self.t_edge[horz_edge].is_assigned() {
            self.update_edge_into_ael(horz_edge)?;

            return Ok(());
        }

        let top = self.t_edge[horz_edge].top;
        let op1 = self.add_out_pt(horz_edge, top);
        let horz_edge = self.update_edge_into_ael(horz_edge)?;

        if self.t_edge[horz_edge].wind_delta == 0 {
            return Ok(());
        }

        //horz_edge is no longer horizontal here
        let edge = &self.t_edge[horz_edge];
        let (bot, top) = (edge.bot, edge.top);
        let candidates = [edge.prev_in_ael, edge.next_in_ael];

        for neighbor in candidates.into_iter().flatten() {
            let other = &self.t_edge[neighbor];

            if other.curr == bot
                && other.wind_delta != 0
                && other.is_assigned()
                && other.curr.y > other.top.y
                && self.t_edge.slopes_equal(horz_edge, neighbor)
            {
                let op2 = self.add_out_pt(neighbor, bot);
                self.join.add(op1, op2, top);
                break;
            }
        }

        Ok(())
    }

    pub(crate) fn process_intersections(&mut self, top_y: i64) -> ClipperResult<()> {
        if self.t_edge.active.is_none() {
            return Ok(());
        }

        self.build_intersect_list(top_y);

        let result = if self.intersections.is_empty() {
            Ok(())
        } else if self.intersections.len() == 1 || self.fixup_intersection_order() {
            self.process_intersect_list();
            Ok(())
        } else {
            warn!("unable to order {} intersections at y = {}", self.intersections.len(), top_y);
            Err(ClipperError::IntersectionOrder)
        };

        self.t_edge.sorted = None;
        self.intersections.clean();

        result
    }

    fn build_intersect_list(&mut self, top_y: i64) {
        //prepare for sorting
        self.t_edge.prepare_for_intersections(top_y);

        //bubblesort
        let mut is_modified = true;

        while is_modified {
            let mut e = match self.t_edge.sorted {
                Some(e) => e,
                None => break,
            };

            is_modified = false;

            while let Some(next) = self.t_edge[e].next_in_sel {
                if self.t_edge[e].curr.x > self.t_edge[next].curr.x {
                    let mut pt = self.t_edge.intersect_point(e, next);

                    if pt.y < top_y {
                        pt = IntPoint::new(self.t_edge[e].top_x(top_y), top_y);
                    }

                    self.intersections.add(e, next, pt);
                    self.t_edge.swap_positions_in_list(e, next, false);
                    is_modified = true;
                } else {
                    e = next;
                }
            }

            match self.t_edge[e].prev_in_sel {
                Some(prev) => self.t_edge[prev].next_in_sel = None,
                None => break,
            }
        }

        self.t_edge.sorted = None;
    }

    /// Reorders intersections so that each one is between edges adjacent in the AEL
    /// at the time it is processed.
    fn fixup_intersection_order(&mut self) -> bool {
        self.intersections.sort();
        self.t_edge.copy_ael_to_sel();

        let size = self.intersections.len();

        for i in 0..size {
            let node = *self.intersections.get(i);

            if !self.t_edge.edges_adjacent_in_sel(node.edge1, node.edge2) {
                let mut j = i + 1;

                while j < size {
                    let other = self.intersections.get(j);
                    if self.t_edge.edges_adjacent_in_sel(other.edge1, other.edge2) {
                        break;
                    }
                    j += 1;
                }

                if j == size {
                    return false;
                }

                self.intersections.swap(i, j);
            }

            let node = *self.intersections.get(i);
            self.t_edge.swap_positions_in_list(node.edge1, node.edge2, false);
        }

        true
    }

    fn process_intersect_list(&mut self) {
        for node in self.intersections.take() {
            self.intersect_edges(node.edge1, node.edge2, node.pt);
            self.t_edge.swap_positions_in_list(node.edge1, node.edge2, true);
        }
    }

    fn process_edges_at_top_of_scanbeam(&mut self, top_y: i64) -> ClipperResult<()> {
        let mut e = self.t_edge.active;

        while let Some(mut index) = e {
            //1. process maxima, treating them as if they're 'bent' horizontal edges,
            //   but exclude maxima with horizontal edges
            let is_maxima_edge = self.t_edge[index].is_maxima(top_y)
                && self
                    .t_edge
                    .maxima_pair_ex(index)
                    .map_or(true, |pair| !self.t_edge[pair].is_horizontal());

            if is_maxima_edge {
                if self.config.strictly_simple {
                    self.maxima.insert(self.t_edge[index].top.x);
                }

                let prev = self.t_edge[index].prev_in_ael;
                self.do_maxima(index)?;

                e = match prev {
                    Some(prev) => self.t_edge[prev].next_in_ael,
                    None => self.t_edge.active,
                };

                continue;
            }

            //2. promote horizontal edges, otherwise update curr
            let is_horizontal_next = self.t_edge[index]
                .next_in_lml
                .map_or(false, |next| self.t_edge[next].is_horizontal());

            if self.t_edge[index].is_intermediate(top_y) && is_horizontal_next {
                index = self.update_edge_into_ael(index)?;

                if self.t_edge[index].is_assigned() {
                    let bot = self.t_edge[index].bot;
                    self.add_out_pt(index, bot);
                }

                self.t_edge.add_edge_to_sel(index);
            } else {
                let x = self.t_edge[index].top_x(top_y);
                self.t_edge[index].curr = IntPoint::new(x, top_y);
            }

            //when strictly simple and 'e' is touched by another edge, make sure
            //both edges have a vertex here
            if self.config.strictly_simple {
                if let Some(prev) = self.t_edge[index].prev_in_ael {
                    let (edge, prev_edge) = (&self.t_edge[index], &self.t_edge[prev]);

                    if edge.is_assigned()
                        && edge.wind_delta != 0
                        && prev_edge.is_assigned()
                        && prev_edge.curr.x == edge.curr.x
                        && prev_edge.wind_delta != 0
                    {
                        let ip = edge.curr;
                        let op = self.add_out_pt(prev, ip);
                        let op2 = self.add_out_pt(index, ip);
                        //strictly simple (type-3) join
                        self.join.add(op, op2, ip);
                    }
                }
            }

            e = self.t_edge[index].next_in_ael;
        }

        //3. process horizontals at the top of the scanbeam
        self.process_horizontals()?;
        self.maxima.clean();

        //4. promote intermediate vertices
        let mut e = self.t_edge.active;

        while let Some(mut index) = e {
            if self.t_edge[index].is_intermediate(top_y) {
                let op = if self.t_edge[index].is_assigned() {
                    let top = self.t_edge[index].top;
                    Some(self.add_out_pt(index, top))
                } else {
                    None
                };

                index = self.update_edge_into_ael(index)?;

                //output polygons sharing an edge need joining later
                if let Some(op) = op {
                    self.join_collinear_neighbor(index, op);
                }
            }

            e = self.t_edge[index].next_in_ael;
        }

        Ok(())
    }

    fn join_collinear_neighbor(&mut self, index: usize, op: usize) {
        let use_full_range = self.t_edge.use_full_range();
        let edge = &self.t_edge[index];
        let (bot, curr, top) = (edge.bot, edge.curr, edge.top);

        if edge.wind_delta == 0 {
            return;
        }

        let candidates = [edge.prev_in_ael, edge.next_in_ael];

        for neighbor in candidates.into_iter().flatten() {
            let other = &self.t_edge[neighbor];

            if other.curr == bot
                && other.is_assigned()
                && other.curr.y > other.top.y
                && other.wind_delta != 0
                && slopes_equal4(&curr, &top, &other.curr, &other.top, use_full_range)
            {
                let op2 = self.add_out_pt(neighbor, bot);
                self.join.add(op, op2, top);
                return;
            }
        }
    }

    fn do_maxima(&mut self, index: usize) -> ClipperResult<()> {
        let max_pair = match self.t_edge.maxima_pair_ex(index) {
            Some(max_pair) => max_pair,
            None => {
                if self.t_edge[index].is_assigned() {
                    let top = self.t_edge[index].top;
                    self.add_out_pt(index, top);
                }
                self.t_edge.delete_from_ael(index);

                return Ok(());
            }
        };

        let top = self.t_edge[index].top;
        let mut e_next = self.t_edge[index].next_in_ael;

        while let Some(next) = e_next {
            if next == max_pair {
                break;
            }

            self.intersect_edges(index, next, top);
            self.t_edge.swap_positions_in_list(index, next, true);
            e_next = self.t_edge[index].next_in_ael;
        }

        let out_idx = self.t_edge[index].out_idx;
        let pair_out_idx = self.t_edge[max_pair].out_idx;

        if out_idx == OutIdx::Unassigned && pair_out_idx == OutIdx::Unassigned {
            self.t_edge.delete_from_ael(index);
            self.t_edge.delete_from_ael(max_pair);
        } else if self.t_edge[index].is_assigned() && self.t_edge[max_pair].is_assigned() {
            self.add_local_max_poly(index, max_pair, top);
            self.t_edge.delete_from_ael(index);
            self.t_edge.delete_from_ael(max_pair);
        } else if self.t_edge[index].wind_delta == 0 {
            if self.t_edge[index].is_assigned() {
                self.add_out_pt(index, top);
                self.t_edge[index].unassign();
            }
            self.t_edge.delete_from_ael(index);

            if self.t_edge[max_pair].is_assigned() {
                self.add_out_pt(max_pair, top);
                self.t_edge[max_pair].unassign();
            }
            self.t_edge.delete_from_ael(max_pair);
        } else {
            return Err(ClipperError::MaximaPair);
        }

        Ok(())
    }
}
