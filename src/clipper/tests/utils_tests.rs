use crate::clipper::enums::PolyFillType;
use crate::clipper::error::ClipperError;
use crate::clipper::utils::{
    clean_polygon, clean_polygons, from_mem_seg, pack_paths, simplify_polygon, simplify_polygons, to_mem_seg,
    unpack_paths,
    DEFAULT_CLEAN_DISTANCE,
};
use crate::geometry::point::{IntPoint, Path};
use crate::geometry::polygon::area;

fn path(coords: &[(i64, i64)]) -> Path {
    coords.iter().map(|&(x, y)| IntPoint::new(x, y)).collect()
}

#[test]
fn test_clean_removes_near_collinear_vertex() {
    let result = clean_polygon(
        &path(&[(0, 0), (10, 0), (11, 1), (10, 10), (0, 10)]),
        DEFAULT_CLEAN_DISTANCE,
    );

    assert_eq!(result, path(&[(0, 0), (11, 1), (10, 10), (0, 10)]));
}

#[test]
fn test_clean_removes_duplicates() {
    let result = clean_polygon(
        &path(&[(0, 0), (0, 0), (10, 0), (10, 10), (0, 10)]),
        DEFAULT_CLEAN_DISTANCE,
    );

    assert_eq!(result.len(), 4);
    assert_eq!(area(&result), 100.0);
}

#[test]
fn test_clean_removes_spikes() {
    //(-5, 5) is reached and left through the same vertex
    let result = clean_polygon(
        &path(&[(0, 0), (10, 0), (10, 10), (0, 10), (0, 5), (-5, 5), (0, 5)]),
        DEFAULT_CLEAN_DISTANCE,
    );

    assert_eq!(result.len(), 4);
    assert!(!result.contains(&IntPoint::new(-5, 5)));
    assert_eq!(area(&result), 100.0);
}

#[test]
fn test_clean_collapses_tiny_polygons() {
    assert!(clean_polygon(&path(&[(0, 0), (1, 0), (0, 1)]), DEFAULT_CLEAN_DISTANCE).is_empty());
    assert!(clean_polygon(&[], DEFAULT_CLEAN_DISTANCE).is_empty());

    let cleaned = clean_polygons(
        &[path(&[(0, 0), (1, 0), (0, 1)]), path(&[(0, 0), (10, 0), (0, 10)])],
        DEFAULT_CLEAN_DISTANCE,
    );

    assert!(cleaned[0].is_empty());
    assert_eq!(cleaned[1].len(), 3);
}

#[test]
fn test_simplify_splits_bow_tie() {
    let result = simplify_polygon(&path(&[(0, 0), (10, 10), (10, 0), (0, 10)]), PolyFillType::NonZero).unwrap();

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|path| area(path) == 25.0));
}

#[test]
fn test_simplify_merges_overlaps() {
    let result = simplify_polygons(
        &[
            path(&[(0, 0), (10, 0), (10, 10), (0, 10)]),
            path(&[(5, 5), (15, 5), (15, 15), (5, 15)]),
        ],
        PolyFillType::NonZero,
    )
    .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(area(&result[0]), 175.0);
}

#[test]
fn test_pack_paths_layout() {
    let paths = vec![path(&[(0, 0), (10, 0), (10, 10)]), path(&[(-5, 7)])];

    let packed = pack_paths(&paths).unwrap();

    assert_eq!(packed, vec![2, 0, 6, 0, 0, 10, 0, 10, 10, -5, 7]);
    assert_eq!(unpack_paths(&packed), paths);
}

#[test]
fn test_pack_paths_rejects_wide_coordinates() {
    let too_wide = i32::MAX as i64 + 1;
    let paths = vec![path(&[(0, 0), (too_wide, 5), (0, 10)])];

    assert_eq!(
        pack_paths(&paths),
        Err(ClipperError::CoordinateOutOfRange { x: too_wide, y: 5 })
    );
    assert_eq!(
        to_mem_seg(&path(&[(1, 2), (3, i32::MIN as i64 - 1)])),
        Err(ClipperError::CoordinateOutOfRange { x: 3, y: i32::MIN as i64 - 1 })
    );
    assert_eq!(to_mem_seg(&path(&[(1, 2), (i32::MIN as i64, i32::MAX as i64)])), Ok(vec![1, 2, i32::MIN, i32::MAX]));
}

#[test]
fn test_unpack_rejects_malformed_buffers() {
    assert!(unpack_paths(&[]).is_empty());
    assert!(unpack_paths(&[0]).is_empty());
    assert!(unpack_paths(&[3, 0]).is_empty());
    //first path ends past the data
    assert!(unpack_paths(&[2, 0, 8, 1, 2, 3, 4]).is_empty());
    //offsets must not decrease
    assert_eq!(unpack_paths(&[3, 0, 4, 2, 1, 2, 3, 4, 5, 6]), vec![path(&[(1, 2), (3, 4)])]);
}

#[test]
fn test_mem_seg_ignores_odd_tail() {
    assert_eq!(from_mem_seg(&[1, 2, 3]), path(&[(1, 2)]));
}
