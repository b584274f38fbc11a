use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Int32Array;

pub mod clipper;
pub mod geometry;
pub mod utils;

pub use crate::clipper::{
    ClipType, Clipper, ClipperConfig, ClipperError, ClipperOffset, ClipperResult, EndType, JoinType,
    PolyFillType, PolyNode, PolyTree, PolyType,
};
pub use crate::geometry::point::{DoublePoint, IntPoint, Path, Paths, Point};

use crate::clipper::utils as clipper_utils;
use crate::geometry::polygon::area;
use crate::utils::wasm_logger;

/// Routes `log` records to the console. 0 disables logging, 5 enables trace.
#[wasm_bindgen]
pub fn init_logger(level: u8) {
    wasm_logger::init(wasm_logger::level_filter(level));
}

/// Signed area of a flat `[x0, y0, x1, y1, ...]` polygon, positive when counter-clockwise.
#[wasm_bindgen]
pub fn polygon_area(coords: &[i32]) -> f64 {
    area(&clipper_utils::from_mem_seg(coords))
}

/// Boolean operation on packed subject and clip polygons (see `pack_paths`).
/// `flags` carries the `ClipperConfig` bits.
pub fn clip_polygons_inner(
    subject: &[i32],
    clip: &[i32],
    clip_type: u8,
    fill_type: u8,
    flags: u32,
) -> ClipperResult<Vec<i32>> {
    let clip_type = ClipType::try_from(clip_type).map_err(ClipperError::InvalidOption)?;
    let fill_type = PolyFillType::try_from(fill_type).map_err(ClipperError::InvalidOption)?;
    let mut clipper = Clipper::new(ClipperConfig::from_bits(flags));

    clipper.add_paths(&clipper_utils::unpack_paths(subject), PolyType::Subject, true)?;
    clipper.add_paths(&clipper_utils::unpack_paths(clip), PolyType::Clip, true)?;

    let solution = clipper.execute(clip_type, fill_type)?;

    clipper_utils::pack_paths(&solution)
}

/// Offsets packed polygons by `delta` with one join and end style for all of them.
pub fn offset_polygons_inner(
    buff: &[i32],
    delta: f64,
    join_type: u8,
    end_type: u8,
    miter_limit: f64,
    arc_tolerance: f64,
) -> ClipperResult<Vec<i32>> {
    let join_type = JoinType::try_from(join_type).map_err(ClipperError::InvalidOption)?;
    let end_type = EndType::try_from(end_type).map_err(ClipperError::InvalidOption)?;
    let mut clipper_offset = ClipperOffset::new(miter_limit, arc_tolerance);

    clipper_offset.add_paths(&clipper_utils::unpack_paths(buff), join_type, end_type);

    let solution = clipper_offset.execute(delta)?;

    clipper_utils::pack_paths(&solution)
}

/// Cleans a flat `[x0, y0, ...]` polygon, returning it in the same layout.
pub fn clean_polygon_inner(buff: &[i32], distance: f64) -> ClipperResult<Vec<i32>> {
    let cleaned = clipper_utils::clean_polygon(&clipper_utils::from_mem_seg(buff), distance);

    clipper_utils::to_mem_seg(&cleaned)
}

fn to_int32_array(result: ClipperResult<Vec<i32>>) -> Result<Int32Array, JsError> {
    let packed = result.inspect_err(|error| warn!("{}", error))?;
    let out = Int32Array::new_with_length(packed.len() as u32);

    out.copy_from(&packed);

    Ok(out)
}

/// Throws when an option byte is unknown, a coordinate is out of range or the
/// sweep fails.
#[wasm_bindgen]
pub fn clip_polygons(
    subject: &[i32],
    clip: &[i32],
    clip_type: u8,
    fill_type: u8,
    flags: u32,
) -> Result<Int32Array, JsError> {
    to_int32_array(clip_polygons_inner(subject, clip, clip_type, fill_type, flags))
}

#[wasm_bindgen]
pub fn offset_polygons(
    buff: &[i32],
    delta: f64,
    join_type: u8,
    end_type: u8,
    miter_limit: f64,
    arc_tolerance: f64,
) -> Result<Int32Array, JsError> {
    to_int32_array(offset_polygons_inner(buff, delta, join_type, end_type, miter_limit, arc_tolerance))
}

#[wasm_bindgen]
pub fn clean_polygon(buff: &[i32], distance: f64) -> Result<Int32Array, JsError> {
    to_int32_array(clean_polygon_inner(buff, distance))
}
