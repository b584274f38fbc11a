use crate::clipper::clipper::Clipper;
use crate::clipper::poly_tree::PolyTree;
use crate::geometry::point::Paths;
use crate::utils::math::{pt2_is_between_pt1_and_pt3, slopes_equal3};
use log::debug;

impl Clipper {
    /// Post-sweep pass over the raw rings: orientation, deferred joins, vertex
    /// cleanup and, when requested, strict simplicity.
    pub(crate) fn build_output(&mut self) {
        for index in 0..self.out_recs.len() {
            if !self.out_recs[index].is_open {
                self.fix_orientation(index);
            }
        }

        if !self.join.is_empty() {
            self.join_common_edges();
        }

        //fixup must follow join_common_edges
        for index in 0..self.out_recs.len() {
            if self.out_recs[index].pts.is_none() {
                continue;
            }

            if self.out_recs[index].is_open {
                self.fixup_out_polyline(index);
            } else {
                self.fixup_out_polygon(index);
            }
        }

        if self.config.strictly_simple {
            self.do_simple_polygons();
        }
    }

    // outers turn one way and holes the other, flipped by reverse_solution
    fn fix_orientation(&mut self, index: usize) {
        let pts = match self.out_recs[index].pts {
            Some(pts) => pts,
            None => return,
        };

        let is_hole = self.out_recs[index].is_hole;

        if (is_hole ^ self.config.reverse_solution) == (self.out_pts.area(pts) > 0.0) {
            self.out_pts.reverse_links(pts);
        }
    }

    fn join_common_edges(&mut self) {
        let use_full_range = self.t_edge.use_full_range();
        let joins = self.join.take();
        let join_count = joins.len();
        let mut merge_count = 0;
        let mut split_count = 0;

        for mut join in joins {
            let rec1 = self.out_recs.get_out_rec(self.out_pts[join.out_pt1].idx);
            let rec2 = self.out_recs.get_out_rec(self.out_pts[join.out_pt2].idx);

            if self.out_recs[rec1].pts.is_none() || self.out_recs[rec2].pts.is_none() {
                continue;
            }

            if self.out_recs[rec1].is_open || self.out_recs[rec2].is_open {
                continue;
            }

            //the fragment with the correct hole state has to be known before joining
            let hole_state_rec = if rec1 == rec2 {
                rec1
            } else if self.out_recs.is_right_of(rec1, rec2) {
                rec2
            } else if self.out_recs.is_right_of(rec2, rec1) {
                rec1
            } else {
                self.out_recs.lowermost_rec(rec1, rec2, &self.out_pts)
            };

            if !join.join_points(&mut self.out_pts, rec1 == rec2, use_full_range) {
                continue;
            }

            if rec1 == rec2 {
                //a polygon split into two rather than two joined
                self.split_out_rec(rec1, join.out_pt1, join.out_pt2, true);
                split_count += 1;
            } else {
                self.merge_out_recs(rec1, rec2, hole_state_rec);
                merge_count += 1;
            }
        }

        debug!(
            "resolved {} joins: {} merged, {} split",
            join_count, merge_count, split_count
        );
    }

    fn merge_out_recs(&mut self, rec1: usize, rec2: usize, hole_state_rec: usize) {
        let first_left = self.out_recs[rec2].first_left;
        let is_hole = self.out_recs[hole_state_rec].is_hole;

        self.out_recs[rec2].pts = None;
        self.out_recs[rec2].bottom_pt = None;
        self.out_recs[rec2].idx = self.out_recs[rec1].idx;

        self.out_recs[rec1].is_hole = is_hole;
        if hole_state_rec == rec2 {
            self.out_recs[rec1].first_left = first_left;
        }
        self.out_recs[rec2].first_left = Some(rec1);

        if self.is_using_poly_tree {
            self.out_recs.fixup_first_lefts3(rec2, rec1);
        }
    }

    /// Gives the ring at `op2` a record of its own and re-derives hole state
    /// and containment of both fragments.
    fn split_out_rec(&mut self, rec1: usize, op1: usize, op2: usize, is_orientation_fixed: bool) -> usize {
        self.out_recs[rec1].pts = Some(op1);
        self.out_recs[rec1].bottom_pt = None;

        let rec2 = self.out_recs.create();
        self.out_recs[rec2].pts = Some(op2);
        self.out_pts.update_idxs(op2, rec2);

        if self.out_pts.contains_poly(op1, op2) {
            //rec1 contains rec2
            self.out_recs[rec2].is_hole = !self.out_recs[rec1].is_hole;
            self.out_recs[rec2].first_left = Some(rec1);

            if self.is_using_poly_tree {
                self.out_recs.fixup_first_lefts2(rec2, rec1, &self.out_pts);
            }

            if is_orientation_fixed {
                self.fix_orientation(rec2);
            }
        } else if self.out_pts.contains_poly(op2, op1) {
            //rec2 contains rec1
            self.out_recs[rec2].is_hole = self.out_recs[rec1].is_hole;
            self.out_recs[rec1].is_hole = !self.out_recs[rec2].is_hole;
            self.out_recs[rec2].first_left = self.out_recs[rec1].first_left;
            self.out_recs[rec1].first_left = Some(rec2);

            if self.is_using_poly_tree {
                self.out_recs.fixup_first_lefts2(rec1, rec2, &self.out_pts);
            }

            if is_orientation_fixed {
                self.fix_orientation(rec1);
            }
        } else {
            //the two polygons are completely separate
            self.out_recs[rec2].is_hole = self.out_recs[rec1].is_hole;
            self.out_recs[rec2].first_left = self.out_recs[rec1].first_left;

            if self.is_using_poly_tree {
                self.out_recs.fixup_first_lefts1(rec1, rec2, &self.out_pts);
            }
        }

        rec2
    }

    /// Removes duplicate points and merges collinear edges, dropping rings
    /// that collapse below three vertices.
    fn fixup_out_polygon(&mut self, index: usize) {
        let is_preserve_collinear = self.config.preserve_collinear || self.config.strictly_simple;
        let use_full_range = self.t_edge.use_full_range();
        let mut last_ok: Option<usize> = None;

        self.out_recs[index].bottom_pt = None;

        let mut pp = match self.out_recs[index].pts {
            Some(pts) => pts,
            None => return,
        };

        loop {
            let prev = self.out_pts.prev(pp);
            let next = self.out_pts.next(pp);

            if prev == pp || prev == next {
                self.out_recs[index].pts = None;
                return;
            }

            let prev_pt = self.out_pts.pt(prev);
            let pt = self.out_pts.pt(pp);
            let next_pt = self.out_pts.pt(next);

            if pt == next_pt
                || pt == prev_pt
                || (slopes_equal3(&prev_pt, &pt, &next_pt, use_full_range)
                    && (!is_preserve_collinear || !pt2_is_between_pt1_and_pt3(&prev_pt, &pt, &next_pt)))
            {
                last_ok = None;
                pp = self.out_pts.exclude(pp);
            } else if Some(pp) == last_ok {
                break;
            } else {
                if last_ok.is_none() {
                    last_ok = Some(pp);
                }
                pp = next;
            }
        }

        self.out_recs[index].pts = Some(pp);
    }

    fn fixup_out_polyline(&mut self, index: usize) {
        let mut pp = match self.out_recs[index].pts {
            Some(pts) => pts,
            None => return,
        };
        let mut last_pp = self.out_pts.prev(pp);

        while pp != last_pp {
            pp = self.out_pts.next(pp);

            if self.out_pts.pt(pp) == self.out_pts.pt(self.out_pts.prev(pp)) {
                if pp == last_pp {
                    last_pp = self.out_pts.prev(pp);
                }
                pp = self.out_pts.exclude(pp);
            }
        }

        if pp == self.out_pts.prev(pp) {
            self.out_recs[index].pts = None;
        }
    }

    /// Splits every ring at repeated non-adjacent vertices until no ring touches itself.
    fn do_simple_polygons(&mut self) {
        let mut index = 0;

        //records created by splits are visited too
        while index < self.out_recs.len() {
            let rec = index;
            index += 1;

            let start = match self.out_recs[rec].pts {
                Some(pts) if !self.out_recs[rec].is_open => pts,
                _ => continue,
            };

            let mut op = start;

            loop {
                let mut op2 = self.out_pts.next(op);

                while Some(op2) != self.out_recs[rec].pts {
                    if self.out_pts.pt(op) == self.out_pts.pt(op2)
                        && self.out_pts.next(op2) != op
                        && self.out_pts.prev(op2) != op
                    {
                        //split the polygon into two
                        let op3 = self.out_pts.prev(op);
                        let op4 = self.out_pts.prev(op2);

                        self.out_pts.push(op4, op);
                        self.out_pts.push(op3, op2);
                        self.split_out_rec(rec, op, op2, false);

                        op2 = op;
                    }

                    op2 = self.out_pts.next(op2);
                }

                op = self.out_pts.next(op);

                if Some(op) == self.out_recs[rec].pts {
                    break;
                }
            }
        }
    }

    /// Flat solution: every ring with at least two vertices, read from its
    /// rightmost point backwards.
    pub(crate) fn build_result(&self) -> Paths {
        (0..self.out_recs.len())
            .filter_map(|index| {
                let pts = self.out_recs[index].pts?;

                (self.out_pts.point_count(Some(pts)) >= 2).then(|| self.out_pts.export(pts))
            })
            .collect()
    }

    pub(crate) fn build_result2(&mut self) -> PolyTree {
        let mut result = PolyTree::new();

        for index in 0..self.out_recs.len() {
            let pts = match self.out_recs[index].pts {
                Some(pts) => pts,
                None => continue,
            };
            let is_open = self.out_recs[index].is_open;
            let count = self.out_pts.point_count(Some(pts));

            if (is_open && count < 2) || (!is_open && count < 3) {
                continue;
            }

            self.out_recs.fix_hole_linkage(index);

            let node = result.create_node(self.out_pts.export(pts), is_open);
            self.out_recs[index].poly_node = Some(node);
        }

        for index in 0..self.out_recs.len() {
            let rec = &self.out_recs[index];

            let node = match rec.poly_node {
                Some(node) => node,
                None => continue,
            };

            let parent = if rec.is_open {
                None
            } else {
                rec.first_left.and_then(|first_left| self.out_recs[first_left].poly_node)
            };

            result.add_child(parent, node);
        }

        result
    }
}
