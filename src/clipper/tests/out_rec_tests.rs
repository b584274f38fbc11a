use crate::clipper::out_pt::OutPtList;
use crate::clipper::out_rec::OutRecList;
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::PointLocation;

fn ring(points: &mut OutPtList, rec_index: usize, coords: &[(i64, i64)]) -> usize {
    let start = points.create(rec_index, IntPoint::new(coords[0].0, coords[0].1));

    for &(x, y) in &coords[1..] {
        points.insert_before(start, IntPoint::new(x, y));
    }

    start
}

#[test]
fn test_ring_walk_and_export() {
    let mut points = OutPtList::new();
    let start = ring(&mut points, 0, &[(0, 0), (10, 0), (10, 10), (0, 10)]);

    let walked: Vec<IntPoint> = points.ring_points(start).collect();

    assert_eq!(walked[1], IntPoint::new(10, 0));
    assert_eq!(points.point_count(Some(start)), 4);
    assert_eq!(points.point_count(None), 0);

    //export reads backwards from the predecessor of start
    assert_eq!(
        points.export(start),
        vec![
            IntPoint::new(0, 10),
            IntPoint::new(10, 10),
            IntPoint::new(10, 0),
            IntPoint::new(0, 0),
        ]
    );
}

#[test]
fn test_area_and_reverse_links() {
    let mut points = OutPtList::new();
    let start = ring(&mut points, 0, &[(0, 0), (10, 0), (10, 10), (0, 10)]);

    assert_eq!(points.area(start), -100.0);

    points.reverse_links(start);

    assert_eq!(points.area(start), 100.0);
    assert_eq!(points.pt(points.next(start)), IntPoint::new(0, 10));
}

#[test]
fn test_exclude_and_duplicate() {
    let mut points = OutPtList::new();
    let start = ring(&mut points, 0, &[(0, 0), (10, 0), (10, 10)]);
    let second = points.next(start);

    let dup = points.duplicate(second, true);

    assert_eq!(points.pt(dup), IntPoint::new(10, 0));
    assert_eq!(points.next(second), dup);
    assert_eq!(points.point_count(Some(start)), 4);

    assert_eq!(points.exclude(dup), second);
    assert_eq!(points.point_count(Some(start)), 3);
}

#[test]
fn test_bottom_pt_prefers_lowest_then_leftmost() {
    let mut points = OutPtList::new();
    let start = ring(&mut points, 0, &[(0, 0), (10, 0), (10, 10), (0, 10)]);

    assert_eq!(points.pt(points.bottom_pt(start)), IntPoint::new(0, 10));
}

#[test]
fn test_contains_poly() {
    let mut points = OutPtList::new();
    let outer = ring(&mut points, 0, &[(0, 0), (10, 0), (10, 10), (0, 10)]);
    let inner = ring(&mut points, 1, &[(2, 2), (8, 2), (8, 8), (2, 8)]);
    let apart = ring(&mut points, 2, &[(20, 0), (30, 0), (30, 10)]);

    assert!(points.contains_poly(outer, inner));
    assert!(!points.contains_poly(inner, outer));
    assert!(!points.contains_poly(outer, apart));
    assert_eq!(points.point_location(&IntPoint::new(5, 0), outer), PointLocation::OnBoundary);
}

#[test]
fn test_update_idxs_relabels_ring() {
    let mut points = OutPtList::new();
    let start = ring(&mut points, 0, &[(0, 0), (10, 0), (10, 10)]);

    points.update_idxs(start, 4);

    assert!(points.ring(start).all(|index| points[index].idx == 4));
}

#[test]
fn test_get_out_rec_follows_merges() {
    let mut recs = OutRecList::new();

    let rec0 = recs.create();
    let rec1 = recs.create();
    let rec2 = recs.create();

    recs[rec2].idx = rec1;
    recs[rec1].idx = rec0;

    assert_eq!(recs.get_out_rec(rec2), rec0);
    assert_eq!(recs.get_out_rec(rec0), rec0);
}

#[test]
fn test_first_left_chain() {
    let mut points = OutPtList::new();
    let mut recs = OutRecList::new();

    let outer = recs.create();
    let merged = recs.create();
    let hole = recs.create();

    recs[outer].pts = Some(ring(&mut points, outer, &[(0, 0), (10, 0), (10, 10), (0, 10)]));
    recs[hole].pts = Some(ring(&mut points, hole, &[(2, 2), (8, 2), (8, 8), (2, 8)]));
    recs[hole].is_hole = true;

    //merged has no ring left and forwards to outer
    recs[merged].first_left = Some(outer);
    recs[hole].first_left = Some(merged);

    assert!(recs.is_right_of(hole, outer));
    assert!(!recs.is_right_of(outer, hole));
    assert_eq!(recs.parse_first_left(Some(merged)), Some(outer));

    recs.fix_hole_linkage(hole);

    assert_eq!(recs[hole].first_left, Some(outer));
}

#[test]
fn test_fixup_first_lefts_after_merge() {
    let mut recs = OutRecList::new();

    let old_rec = recs.create();
    let new_rec = recs.create();
    let child = recs.create();

    recs[old_rec].pts = Some(0);
    recs[child].pts = Some(1);
    recs[child].first_left = Some(old_rec);

    recs.fixup_first_lefts3(old_rec, new_rec);

    assert_eq!(recs[child].first_left, Some(new_rec));
}

#[test]
fn test_fixup_first_lefts_after_split() {
    let mut points = OutPtList::new();
    let mut recs = OutRecList::new();

    let old_rec = recs.create();
    let new_rec = recs.create();
    let inside = recs.create();
    let outside = recs.create();

    recs[old_rec].pts = Some(ring(&mut points, old_rec, &[(0, 0), (50, 0), (50, 50), (0, 50)]));
    recs[new_rec].pts = Some(ring(&mut points, new_rec, &[(0, 0), (20, 0), (20, 20), (0, 20)]));
    recs[inside].pts = Some(ring(&mut points, inside, &[(5, 5), (10, 5), (10, 10)]));
    recs[outside].pts = Some(ring(&mut points, outside, &[(30, 30), (40, 30), (40, 40)]));
    recs[inside].first_left = Some(old_rec);
    recs[outside].first_left = Some(old_rec);

    recs.fixup_first_lefts1(old_rec, new_rec, &points);

    assert_eq!(recs[inside].first_left, Some(new_rec));
    assert_eq!(recs[outside].first_left, Some(old_rec));
}
