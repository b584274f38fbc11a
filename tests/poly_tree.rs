use wasm_clipper::geometry::polygon::{area, point_in_polygon, PointLocation};
use wasm_clipper::{ClipType, Clipper, IntPoint, Path, PolyFillType, PolyTree, PolyType};

fn square(x: i64, y: i64, size: i64) -> Path {
    vec![
        IntPoint::new(x, y),
        IntPoint::new(x + size, y),
        IntPoint::new(x + size, y + size),
        IntPoint::new(x, y + size),
    ]
}

fn nested_tree() -> PolyTree {
    let mut clipper = Clipper::default();

    clipper
        .add_paths(
            &[
                square(0, 0, 100),
                square(20, 20, 60),
                square(40, 40, 20),
                square(200, 0, 50),
            ],
            PolyType::Subject,
            true,
        )
        .unwrap();

    clipper.execute_tree(ClipType::Union, PolyFillType::EvenOdd).unwrap()
}

#[test]
fn nesting_depth_alternates_outer_and_hole() {
    let tree = nested_tree();

    assert_eq!(tree.total(), 4);
    assert_eq!(tree.child_count(), 2);

    let outer = tree
        .children()
        .iter()
        .copied()
        .find(|&index| tree.node(index).child_count() == 1)
        .unwrap();
    let hole = tree.node(outer).children()[0];
    let island = tree.node(hole).children()[0];

    assert!(!tree.is_hole(outer));
    assert!(tree.is_hole(hole));
    assert!(!tree.is_hole(island));
    assert_eq!(tree.node(island).parent(), Some(hole));

    assert!(area(tree.node(outer).contour()) > 0.0);
    assert!(area(tree.node(hole).contour()) < 0.0);
    assert!(area(tree.node(island).contour()) > 0.0);
}

#[test]
fn children_lie_inside_parents_and_outside_siblings() {
    let tree = nested_tree();

    for index in tree.iter() {
        let node = tree.node(index);
        let siblings = match node.parent() {
            Some(parent) => {
                let parent_contour = tree.node(parent).contour();

                assert!(node
                    .contour()
                    .iter()
                    .all(|pt| point_in_polygon(pt, parent_contour) == PointLocation::Inside));

                tree.node(parent).children()
            }
            None => tree.children(),
        };

        for &sibling in siblings.iter().filter(|&&sibling| sibling != index) {
            let sibling_contour = tree.node(sibling).contour();

            assert!(node
                .contour()
                .iter()
                .all(|pt| point_in_polygon(pt, sibling_contour) == PointLocation::Outside));
        }
    }
}

#[test]
fn path_views_match_flat_result() {
    let tree = nested_tree();
    let mut clipper = Clipper::default();

    clipper
        .add_paths(
            &[
                square(0, 0, 100),
                square(20, 20, 60),
                square(40, 40, 20),
                square(200, 0, 50),
            ],
            PolyType::Subject,
            true,
        )
        .unwrap();

    let flat = clipper.execute(ClipType::Union, PolyFillType::EvenOdd).unwrap();
    let closed = tree.closed_paths();

    assert_eq!(closed.len(), flat.len());
    assert!(closed.iter().all(|path| flat.contains(path)));
    assert!(tree.open_paths().is_empty());
    assert_eq!(tree.paths(), closed);
}

#[test]
fn holes_of_difference_are_attached() {
    let mut clipper = Clipper::default();

    clipper.add_path(&square(0, 0, 100), PolyType::Subject, true).unwrap();
    clipper.add_path(&square(10, 10, 20), PolyType::Clip, true).unwrap();
    clipper.add_path(&square(60, 60, 20), PolyType::Clip, true).unwrap();

    let tree = clipper.execute_tree(ClipType::Difference, PolyFillType::NonZero).unwrap();

    assert_eq!(tree.child_count(), 1);

    let outer = tree.first().unwrap();

    assert_eq!(tree.node(outer).child_count(), 2);
    assert!(tree.node(outer).children().iter().all(|&hole| tree.is_hole(hole)));
    assert_eq!(
        tree.closed_paths().iter().map(|path| area(path)).sum::<f64>(),
        10000.0 - 800.0
    );
}
