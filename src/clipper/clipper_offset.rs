use crate::clipper::clipper::Clipper;
use crate::clipper::config::ClipperConfig;
use crate::clipper::constants::{DEF_ARC_TOLERANCE, DEF_MITER_LIMIT, OUTER_RECT_MARGIN, TOLERANCE, TWO_PI};
use crate::clipper::enums::{ClipType, EndType, JoinType, PolyFillType, PolyType};
use crate::clipper::error::ClipperResult;
use crate::clipper::poly_tree::PolyTree;
use crate::geometry::bound_rect::BoundRect;
use crate::geometry::point::{DoublePoint, IntPoint, Path, Paths};
use crate::geometry::polygon::orientation;
use crate::utils::round::round_to_i64;
use log::debug;
use std::f64::consts::PI;

#[derive(Debug, Clone)]
struct OffsetPath {
    contour: Path,
    join_type: JoinType,
    end_type: EndType,
}

/// Per-run trigonometry shared by every contour.
#[derive(Debug, Clone, Copy)]
struct OffsetParams {
    delta: f64,
    sin: f64,
    cos: f64,
    miter_lim: f64,
    steps_per_rad: f64,
    steps: f64,
}

/// Grows (positive delta) or shrinks (negative delta) polygons and turns
/// polylines into outlines. Raw offsets are unioned to remove self overlap.
#[derive(Debug, Clone)]
pub struct ClipperOffset {
    pub miter_limit: f64,
    pub arc_tolerance: f64,
    paths: Vec<OffsetPath>,
    /// (path, vertex) of the lowest vertex among closed polygons.
    lowest: Option<(usize, usize)>,
}

impl Default for ClipperOffset {
    fn default() -> Self {
        Self::new(DEF_MITER_LIMIT, DEF_ARC_TOLERANCE)
    }
}

impl ClipperOffset {
    pub fn new(miter_limit: f64, arc_tolerance: f64) -> Self {
        Self {
            miter_limit,
            arc_tolerance,
            paths: Vec::new(),
            lowest: None,
        }
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.lowest = None;
    }

    pub fn add_path(&mut self, path: &[IntPoint], join_type: JoinType, end_type: EndType) {
        if path.is_empty() {
            return;
        }

        let is_closed = matches!(end_type, EndType::ClosedLine | EndType::ClosedPolygon);
        let mut high_i = path.len() - 1;

        if is_closed {
            while high_i > 0 && path[0] == path[high_i] {
                high_i -= 1;
            }
        }

        //strip duplicates while tracking the lowest vertex
        let mut contour: Path = Vec::with_capacity(high_i + 1);
        let mut k = 0;

        contour.push(path[0]);

        for pt in &path[1..=high_i] {
            if contour[contour.len() - 1] != *pt {
                contour.push(*pt);

                let lowest = contour[k];
                if pt.y > lowest.y || (pt.y == lowest.y && pt.x < lowest.x) {
                    k = contour.len() - 1;
                }
            }
        }

        if end_type == EndType::ClosedPolygon && contour.len() < 3 {
            return;
        }

        let pt = contour[k];

        self.paths.push(OffsetPath {
            contour,
            join_type,
            end_type,
        });

        if end_type != EndType::ClosedPolygon {
            return;
        }

        let is_lower = match self.lowest {
            None => true,
            Some((path_index, vertex)) => {
                let lowest = self.paths[path_index].contour[vertex];
                pt.y > lowest.y || (pt.y == lowest.y && pt.x < lowest.x)
            }
        };

        if is_lower {
            self.lowest = Some((self.paths.len() - 1, k));
        }
    }

    pub fn add_paths(&mut self, paths: &[Path], join_type: JoinType, end_type: EndType) {
        for path in paths {
            self.add_path(path, join_type, end_type);
        }
    }

    pub fn execute(&self, delta: f64) -> ClipperResult<Paths> {
        let mut clipper = self.prepare_clipper(delta)?;

        if delta > 0.0 {
            return clipper.execute(ClipType::Union, PolyFillType::Positive);
        }

        let mut result = clipper.execute(ClipType::Union, PolyFillType::Negative)?;

        //the first contour is the enclosing rectangle
        if !result.is_empty() {
            result.remove(0);
        }

        Ok(result)
    }

    pub fn execute_tree(&self, delta: f64) -> ClipperResult<PolyTree> {
        let mut clipper = self.prepare_clipper(delta)?;

        if delta > 0.0 {
            return clipper.execute_tree(ClipType::Union, PolyFillType::Positive);
        }

        let mut result = clipper.execute_tree(ClipType::Union, PolyFillType::Negative)?;
        result.remove_outer();

        Ok(result)
    }

    fn prepare_clipper(&self, delta: f64) -> ClipperResult<Clipper> {
        let contours = self.oriented_paths();
        let dest_polys = self.do_offset(&contours, delta);

        debug!("offset by {} produced {} raw contours", delta, dest_polys.len());

        if delta > 0.0 {
            let mut clipper = Clipper::default();
            clipper.add_paths(&dest_polys, PolyType::Subject, true)?;

            return Ok(clipper);
        }

        //negative fill inside an enclosing rectangle keeps the shrunk areas only
        let config = ClipperConfig {
            reverse_solution: true,
            ..ClipperConfig::default()
        };
        let outer = BoundRect::from_paths(&dest_polys).outer_path(OUTER_RECT_MARGIN);
        let mut clipper = Clipper::new(config);

        clipper.add_paths(&dest_polys, PolyType::Subject, true)?;
        clipper.add_path(&outer, PolyType::Subject, true)?;

        Ok(clipper)
    }

    /// Copies of the input with closed polygons turned to match the polygon
    /// holding the lowest vertex and closed lines made positive.
    fn oriented_paths(&self) -> Vec<OffsetPath> {
        let is_reversed = self
            .lowest
            .map_or(false, |(index, _)| !orientation(&self.paths[index].contour));

        self.paths
            .iter()
            .cloned()
            .map(|mut path| {
                let is_flipped = match path.end_type {
                    EndType::ClosedPolygon => is_reversed,
                    EndType::ClosedLine => orientation(&path.contour) == is_reversed,
                    _ => false,
                };

                if is_flipped {
                    path.contour.reverse();
                }

                path
            })
            .collect()
    }

    fn params(&self, delta: f64) -> OffsetParams {
        let abs_delta = delta.abs();
        let miter_lim = if self.miter_limit > 2.0 {
            2.0 / (self.miter_limit * self.miter_limit)
        } else {
            0.5
        };

        let y = if self.arc_tolerance <= 0.0 {
            DEF_ARC_TOLERANCE
        } else if self.arc_tolerance > abs_delta * DEF_ARC_TOLERANCE {
            abs_delta * DEF_ARC_TOLERANCE
        } else {
            self.arc_tolerance
        };

        //ie excessive precision check
        let steps = (PI / (1.0 - y / abs_delta).acos()).min(abs_delta * PI);
        let sin = (TWO_PI / steps).sin();

        OffsetParams {
            delta,
            sin: if delta < 0.0 { -sin } else { sin },
            cos: (TWO_PI / steps).cos(),
            miter_lim,
            steps_per_rad: steps / TWO_PI,
            steps,
        }
    }

    fn do_offset(&self, paths: &[OffsetPath], delta: f64) -> Paths {
        //zero offset just copies closed polygons
        if delta.abs() < TOLERANCE {
            return paths
                .iter()
                .filter(|path| path.end_type == EndType::ClosedPolygon)
                .map(|path| path.contour.clone())
                .collect();
        }

        let params = self.params(delta);
        let mut result = Vec::with_capacity(paths.len() * 2);

        for path in paths {
            let len = path.contour.len();

            if len == 0 || (delta <= 0.0 && (len < 3 || path.end_type != EndType::ClosedPolygon)) {
                continue;
            }

            if len == 1 {
                result.push(point_contour(&path.contour[0], path.join_type, &params));
                continue;
            }

            let mut builder = ContourBuilder::new(&path.contour, path.end_type, params);

            match path.end_type {
                EndType::ClosedPolygon => result.push(builder.closed_polygon(path.join_type)),
                EndType::ClosedLine => {
                    let (outer, inner) = builder.closed_line(path.join_type);
                    result.push(outer);
                    result.push(inner);
                }
                end_type => result.push(builder.open_line(path.join_type, end_type)),
            }
        }

        result
    }
}

/// Circle or square around a lone vertex.
fn point_contour(pt: &IntPoint, join_type: JoinType, params: &OffsetParams) -> Path {
    let mut result = Vec::new();

    if join_type == JoinType::Round {
        let (mut x, mut y) = (1.0, 0.0);
        let mut step = 1.0;

        while step <= params.steps {
            result.push(DoublePoint::new(x, y).offset_from(pt, params.delta));

            let x2 = x;
            x = x * params.cos - params.sin * y;
            y = x2 * params.sin + y * params.cos;
            step += 1.0;
        }
    } else {
        let (mut x, mut y) = (-1.0, -1.0);

        for _ in 0..4 {
            result.push(DoublePoint::new(x, y).offset_from(pt, params.delta));

            if x < 0.0 {
                x = 1.0;
            } else if y < 0.0 {
                y = 1.0;
            } else {
                x = -1.0;
            }
        }
    }

    result
}

/// Offsets one contour vertex by vertex around its edge normals.
struct ContourBuilder<'a> {
    src: &'a [IntPoint],
    normals: Vec<DoublePoint>,
    dest: Path,
    params: OffsetParams,
    sin_a: f64,
}

impl<'a> ContourBuilder<'a> {
    fn new(src: &'a [IntPoint], end_type: EndType, params: OffsetParams) -> Self {
        let len = src.len();
        let mut normals: Vec<DoublePoint> = src
            .windows(2)
            .map(|pair| DoublePoint::unit_normal(&pair[0], &pair[1]))
            .collect();

        if matches!(end_type, EndType::ClosedLine | EndType::ClosedPolygon) {
            normals.push(DoublePoint::unit_normal(&src[len - 1], &src[0]));
        } else {
            normals.push(normals[len - 2]);
        }

        Self {
            src,
            normals,
            dest: Vec::new(),
            params,
            sin_a: 0.0,
        }
    }

    fn take(&mut self) -> Path {
        std::mem::take(&mut self.dest)
    }

    fn push_offset(&mut self, j: usize, normal: DoublePoint, scale: f64) {
        self.dest.push(normal.offset_from(&self.src[j], scale));
    }

    fn closed_polygon(&mut self, join_type: JoinType) -> Path {
        let mut k = self.src.len() - 1;

        for j in 0..self.src.len() {
            k = self.offset_point(j, k, join_type);
        }

        self.take()
    }

    /// Both sides of a closed polyline: the outer ring then the inner one.
    fn closed_line(&mut self, join_type: JoinType) -> (Path, Path) {
        let len = self.src.len();
        let outer = self.closed_polygon(join_type);

        //normals reversed for the way back
        let last = self.normals[len - 1];
        for j in (1..len).rev() {
            self.normals[j] = self.normals[j - 1].reverse();
        }
        self.normals[0] = last.reverse();

        let mut k = 0;
        for j in (0..len).rev() {
            k = self.offset_point(j, k, join_type);
        }

        (outer, self.take())
    }

    fn open_line(&mut self, join_type: JoinType, end_type: EndType) -> Path {
        let len = self.src.len();
        let delta = self.params.delta;
        let mut k = 0;

        for j in 1..len - 1 {
            k = self.offset_point(j, k, join_type);
        }

        //end cap
        let j = len - 1;
        if end_type == EndType::OpenButt {
            let normal = self.normals[j];
            self.push_offset(j, normal, delta);
            self.push_offset(j, normal, -delta);
        } else {
            self.sin_a = 0.0;
            self.normals[j] = self.normals[j].reverse();
            self.do_cap(j, len - 2, end_type);
        }

        //normals reversed for the way back
        for j in (1..len).rev() {
            self.normals[j] = self.normals[j - 1].reverse();
        }
        self.normals[0] = self.normals[1].reverse();

        k = len - 1;
        for j in (1..len - 1).rev() {
            k = self.offset_point(j, k, join_type);
        }

        //start cap
        if end_type == EndType::OpenButt {
            let normal = self.normals[0];
            self.push_offset(0, normal, -delta);
            self.push_offset(0, normal, delta);
        } else {
            self.sin_a = 0.0;
            self.do_cap(0, 1, end_type);
        }

        self.take()
    }

    fn do_cap(&mut self, j: usize, k: usize, end_type: EndType) {
        if end_type == EndType::OpenSquare {
            self.do_square(j, k);
        } else {
            self.do_round(j, k);
        }
    }

    /// Emits the offset of vertex `j` whose incoming edge normal is `k`;
    /// returns the index to use as `k` for the next vertex.
    fn offset_point(&mut self, j: usize, k: usize, join_type: JoinType) -> usize {
        let delta = self.params.delta;
        let normal_k = self.normals[k];
        let normal_j = self.normals[j];

        self.sin_a = normal_j.cross(&normal_k);

        if (self.sin_a * delta).abs() < 1.0 {
            //angle near 0 degrees
            if normal_k.dot(&normal_j) > 0.0 {
                self.push_offset(j, normal_k, delta);
                return k;
            }
            //else angle near 180 degrees
        } else {
            self.sin_a = self.sin_a.clamp(-1.0, 1.0);
        }

        if self.sin_a * delta < 0.0 {
            //concave
            self.push_offset(j, normal_k, delta);
            self.dest.push(self.src[j]);
            self.push_offset(j, normal_j, delta);
        } else {
            match join_type {
                JoinType::Miter => {
                    let r = 1.0 + normal_j.dot(&normal_k);

                    if r >= self.params.miter_lim {
                        self.do_miter(j, k, r);
                    } else {
                        self.do_square(j, k);
                    }
                }
                JoinType::Square => self.do_square(j, k),
                JoinType::Round => self.do_round(j, k),
            }
        }

        j
    }

    fn do_square(&mut self, j: usize, k: usize) {
        let delta = self.params.delta;
        let normal_k = self.normals[k];
        let normal_j = self.normals[j];
        let dx = (self.sin_a.atan2(normal_k.dot(&normal_j)) / 4.0).tan();

        self.push_offset(j, DoublePoint::new(normal_k.x - normal_k.y * dx, normal_k.y + normal_k.x * dx), delta);
        self.push_offset(j, DoublePoint::new(normal_j.x + normal_j.y * dx, normal_j.y - normal_j.x * dx), delta);
    }

    fn do_miter(&mut self, j: usize, k: usize, r: f64) {
        let q = self.params.delta / r;
        let normal = self.normals[k].add(&self.normals[j]);

        self.push_offset(j, normal, q);
    }

    fn do_round(&mut self, j: usize, k: usize) {
        let OffsetParams {
            delta,
            sin,
            cos,
            steps_per_rad,
            ..
        } = self.params;
        let normal_k = self.normals[k];
        let normal_j = self.normals[j];
        let a = self.sin_a.atan2(normal_k.dot(&normal_j));
        let steps = round_to_i64(steps_per_rad * a.abs()).max(1);

        let (mut x, mut y) = (normal_k.x, normal_k.y);

        for _ in 0..steps {
            self.push_offset(j, DoublePoint::new(x, y), delta);

            let x2 = x;
            x = x * cos - sin * y;
            y = x2 * sin + y * cos;
        }

        self.push_offset(j, normal_j, delta);
    }
}
