use crate::clipper::clipper_offset::ClipperOffset;
use crate::clipper::enums::{EndType, JoinType};
use crate::geometry::point::{IntPoint, Path};
use crate::geometry::polygon::area;
use approx::assert_relative_eq;

fn square(x: i64, y: i64, size: i64) -> Path {
    vec![
        IntPoint::new(x, y),
        IntPoint::new(x + size, y),
        IntPoint::new(x + size, y + size),
        IntPoint::new(x, y + size),
    ]
}

fn total_area(paths: &[Path]) -> f64 {
    paths.iter().map(|path| area(path)).sum()
}

fn offset(path: &[IntPoint], join_type: JoinType, end_type: EndType, delta: f64) -> Vec<Path> {
    let mut offset = ClipperOffset::default();

    offset.add_path(path, join_type, end_type);
    offset.execute(delta).unwrap()
}

#[test]
fn test_miter_keeps_square_corners() {
    let result = offset(&square(0, 0, 100), JoinType::Miter, EndType::ClosedPolygon, 10.0);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 4);
    assert_eq!(area(&result[0]), 14400.0);
}

#[test]
fn test_square_join_chamfers_corners() {
    let result = offset(&square(0, 0, 1), JoinType::Square, EndType::ClosedPolygon, 1.0);

    //each corner is cut at distance delta from the vertex
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 8);
    assert_eq!(area(&result[0]), 7.0);

    let mitered = offset(&square(0, 0, 1), JoinType::Miter, EndType::ClosedPolygon, 1.0);

    assert_eq!(area(&mitered[0]), 9.0);
}

#[test]
fn test_round_join_approximates_arcs() {
    let result = offset(&square(0, 0, 100), JoinType::Round, EndType::ClosedPolygon, 10.0);
    let expected = 100.0 * 100.0 + 4.0 * 100.0 * 10.0 + std::f64::consts::PI * 100.0;

    assert_eq!(result.len(), 1);
    assert!(result[0].len() > 8);
    assert_relative_eq!(area(&result[0]), expected, max_relative = 0.01);
}

#[test]
fn test_negative_delta_shrinks() {
    for join_type in [JoinType::Miter, JoinType::Square, JoinType::Round] {
        let result = offset(&square(0, 0, 100), join_type, EndType::ClosedPolygon, -10.0);

        assert_eq!(result.len(), 1);
        assert_eq!(area(&result[0]), 6400.0);
    }
}

#[test]
fn test_negative_delta_can_erase_polygon() {
    let result = offset(&square(0, 0, 10), JoinType::Miter, EndType::ClosedPolygon, -6.0);

    assert!(result.is_empty());
}

#[test]
fn test_zero_delta_returns_closed_polygons() {
    let mut offset = ClipperOffset::default();

    offset.add_path(&square(0, 0, 50), JoinType::Miter, EndType::ClosedPolygon);
    offset.add_path(&[IntPoint::new(0, 0), IntPoint::new(10, 10)], JoinType::Miter, EndType::OpenButt);

    let result = offset.execute(0.0).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 4);
    assert_eq!(area(&result[0]), 2500.0);
}

#[test]
fn test_clockwise_input_is_reoriented() {
    let mut path = square(0, 0, 100);
    path.reverse();

    let result = offset(&path, JoinType::Miter, EndType::ClosedPolygon, 10.0);

    assert_eq!(result.len(), 1);
    assert_eq!(area(&result[0]), 14400.0);
}

#[test]
fn test_holes_shrink_when_outer_grows() {
    let mut hole = square(25, 25, 50);
    hole.reverse();

    let mut offset = ClipperOffset::default();
    offset.add_paths(&[square(0, 0, 100), hole], JoinType::Miter, EndType::ClosedPolygon);

    let result = offset.execute(5.0).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(total_area(&result), 110.0 * 110.0 - 40.0 * 40.0);

    let tree = offset.execute_tree(5.0).unwrap();

    assert_eq!(tree.child_count(), 1);
    assert_eq!(tree.node(tree.children()[0]).child_count(), 1);
}

#[test]
fn test_negative_tree_drops_enclosing_rect() {
    let mut offset = ClipperOffset::default();

    offset.add_path(&square(0, 0, 100), JoinType::Miter, EndType::ClosedPolygon);

    let tree = offset.execute_tree(-10.0).unwrap();

    assert_eq!(tree.total(), 1);

    let first = tree.first().unwrap();

    assert!(!tree.is_hole(first));
    assert_eq!(area(tree.node(first).contour()), 6400.0);
}

#[test]
fn test_open_line_end_caps() {
    let line = [IntPoint::new(0, 0), IntPoint::new(100, 0)];

    let butt = offset(&line, JoinType::Square, EndType::OpenButt, 10.0);
    let square_cap = offset(&line, JoinType::Square, EndType::OpenSquare, 10.0);
    let round_cap = offset(&line, JoinType::Round, EndType::OpenRound, 10.0);

    assert_eq!(total_area(&butt), 2000.0);
    assert_eq!(total_area(&square_cap), 2400.0);
    assert_relative_eq!(
        total_area(&round_cap),
        2000.0 + std::f64::consts::PI * 100.0,
        max_relative = 0.02
    );
}

#[test]
fn test_open_lines_vanish_for_negative_delta() {
    let line = [IntPoint::new(0, 0), IntPoint::new(100, 0)];

    assert!(offset(&line, JoinType::Square, EndType::OpenButt, -10.0).is_empty());
}

#[test]
fn test_closed_line_outlines_both_sides() {
    let result = offset(&square(0, 0, 100), JoinType::Miter, EndType::ClosedLine, 10.0);

    //a 20 wide frame around the outline
    assert_eq!(result.len(), 2);
    assert_eq!(total_area(&result), 120.0 * 120.0 - 80.0 * 80.0);
}

#[test]
fn test_single_point_becomes_square_or_circle() {
    let point = [IntPoint::new(5, 5)];

    let squared = offset(&point, JoinType::Square, EndType::OpenSquare, 2.0);

    assert_eq!(squared.len(), 1);
    assert_eq!(squared[0].len(), 4);
    assert_eq!(area(&squared[0]), 16.0);
    assert!(squared[0].contains(&IntPoint::new(3, 3)));
    assert!(squared[0].contains(&IntPoint::new(7, 7)));

    let circle = offset(&point, JoinType::Round, EndType::OpenRound, 10.0);

    assert_eq!(circle.len(), 1);
    assert!(area(&circle[0]) > 280.0 && area(&circle[0]) < 320.0);
}

#[test]
fn test_degenerate_closed_polygon_is_ignored() {
    let result = offset(
        &[IntPoint::new(0, 0), IntPoint::new(10, 0), IntPoint::new(0, 0)],
        JoinType::Miter,
        EndType::ClosedPolygon,
        5.0,
    );

    assert!(result.is_empty());
}

#[test]
fn test_clear_drops_paths() {
    let mut offset = ClipperOffset::default();

    offset.add_path(&square(0, 0, 10), JoinType::Miter, EndType::ClosedPolygon);
    offset.clear();

    assert!(offset.execute(1.0).unwrap().is_empty());
}
