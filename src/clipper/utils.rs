use crate::clipper::clipper::Clipper;
use crate::clipper::config::ClipperConfig;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::error::{ClipperError, ClipperResult};
use crate::clipper::out_pt::OutPtList;
use crate::geometry::point::{IntPoint, Path, Paths};
use crate::utils::math::{points_are_close, slopes_near_collinear};

/// Default proximity below which `clean_polygon` merges vertices, ~sqrt(2).
pub const DEFAULT_CLEAN_DISTANCE: f64 = 1.415;

const UNCHECKED: usize = 0;
const CHECKED: usize = 1;

/// Removes vertices that are within `distance` of a neighbor, that sit on a
/// near collinear run, or that form a spike. Returns an empty path when fewer
/// than three vertices remain.
pub fn clean_polygon(path: &[IntPoint], distance: f64) -> Path {
    let mut size = path.len();

    if size == 0 {
        return Vec::new();
    }

    //the ring reuses the output point arena, idx marks checked vertices
    let mut ring = OutPtList::new();

    for pt in path {
        ring.create(UNCHECKED, *pt);
    }

    for index in 0..size {
        ring.push(index, (index + 1) % size);
    }

    let dist_sqrd = distance * distance;
    let mut op = 0;

    while ring[op].idx == UNCHECKED && ring.next(op) != ring.prev(op) {
        let prev_pt = ring.pt(ring.prev(op));
        let pt = ring.pt(op);
        let next_pt = ring.pt(ring.next(op));

        if points_are_close(&pt, &prev_pt, dist_sqrd) {
            op = exclude(&mut ring, op);
            size -= 1;
        } else if points_are_close(&prev_pt, &next_pt, dist_sqrd) {
            let next = ring.next(op);
            exclude(&mut ring, next);
            op = exclude(&mut ring, op);
            size -= 2;
        } else if slopes_near_collinear(&prev_pt, &pt, &next_pt, dist_sqrd) {
            op = exclude(&mut ring, op);
            size -= 1;
        } else {
            ring[op].idx = CHECKED;
            op = ring.next(op);
        }
    }

    if size < 3 {
        return Vec::new();
    }

    ring.ring_points(op).take(size).collect()
}

fn exclude(ring: &mut OutPtList, index: usize) -> usize {
    let result = ring.exclude(index);
    ring[result].idx = UNCHECKED;

    result
}

/// Reads a flat `[x0, y0, x1, y1, ...]` segment. A trailing odd value is ignored.
pub fn from_mem_seg(mem_seg: &[i32]) -> Path {
    mem_seg
        .chunks_exact(2)
        .map(|chunk| IntPoint::new(chunk[0] as i64, chunk[1] as i64))
        .collect()
}

fn push_point(result: &mut Vec<i32>, point: &IntPoint) -> ClipperResult<()> {
    match (i32::try_from(point.x), i32::try_from(point.y)) {
        (Ok(x), Ok(y)) => {
            result.push(x);
            result.push(y);
            Ok(())
        }
        _ => Err(ClipperError::CoordinateOutOfRange { x: point.x, y: point.y }),
    }
}

/// Writes a path as a flat `[x0, y0, x1, y1, ...]` segment. Fails on the first
/// coordinate that does not fit an `i32`.
pub fn to_mem_seg(path: &[IntPoint]) -> ClipperResult<Vec<i32>> {
    let mut result = Vec::with_capacity(path.len() * 2);

    for point in path {
        push_point(&mut result, point)?;
    }

    Ok(result)
}

/// Packs paths as `[count, offset_0, .., offset_n, x0, y0, ...]`, offsets
/// being relative to the start of the coordinate section.
pub fn pack_paths(paths: &[Path]) -> ClipperResult<Vec<i32>> {
    let header_len = 1 + paths.len();
    let data_len: usize = paths.iter().map(|path| path.len() * 2).sum();
    let mut result = Vec::with_capacity(header_len + data_len);
    let mut running = 0;

    result.push(paths.len() as i32);

    for path in paths {
        result.push(running as i32);
        running += path.len() * 2;
    }

    for point in paths.iter().flatten() {
        push_point(&mut result, point)?;
    }

    Ok(result)
}

/// Inverse of `pack_paths`. A malformed header yields the paths read so far.
pub fn unpack_paths(buff: &[i32]) -> Paths {
    let count = match buff.first() {
        Some(count) if *count > 0 => *count as usize,
        _ => return Vec::new(),
    };

    let header_len = 1 + count;

    if buff.len() < header_len {
        return Vec::new();
    }

    let data = &buff[header_len..];
    let offsets = &buff[1..header_len];
    let mut result = Vec::with_capacity(count);

    for (index, offset) in offsets.iter().enumerate() {
        let start = *offset as usize;
        let end = offsets.get(index + 1).map_or(data.len(), |next| *next as usize);

        if *offset < 0 || start > end || end > data.len() {
            break;
        }

        result.push(from_mem_seg(&data[start..end]));
    }

    result
}

pub fn clean_polygons(paths: &[Path], distance: f64) -> Paths {
    paths.iter().map(|path| clean_polygon(path, distance)).collect()
}

/// Splits a self-intersecting polygon into simple ones by a strictly simple
/// union with itself.
pub fn simplify_polygon(path: &[IntPoint], fill_type: PolyFillType) -> ClipperResult<Paths> {
    let mut clipper = Clipper::new(ClipperConfig {
        strictly_simple: true,
        ..ClipperConfig::default()
    });

    clipper.add_path(path, PolyType::Subject, true)?;
    clipper.execute(ClipType::Union, fill_type)
}

pub fn simplify_polygons(paths: &[Path], fill_type: PolyFillType) -> ClipperResult<Paths> {
    let mut clipper = Clipper::new(ClipperConfig {
        strictly_simple: true,
        ..ClipperConfig::default()
    });

    clipper.add_paths(paths, PolyType::Subject, true)?;
    clipper.execute(ClipType::Union, fill_type)
}
