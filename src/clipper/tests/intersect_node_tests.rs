use crate::clipper::intersect_node::IntersectList;
use crate::geometry::point::IntPoint;

#[test]
fn test_sort_puts_bottom_most_first() {
    let mut list = IntersectList::new();

    list.add(0, 1, IntPoint::new(5, 2));
    list.add(2, 3, IntPoint::new(1, 9));
    list.add(4, 5, IntPoint::new(7, 6));

    list.sort();

    assert_eq!(list.get(0).pt.y, 9);
    assert_eq!(list.get(1).pt.y, 6);
    assert_eq!(list.get(2).pt.y, 2);
}

#[test]
fn test_sort_keeps_discovery_order_on_equal_rows() {
    let mut list = IntersectList::new();

    list.add(0, 1, IntPoint::new(5, 4));
    list.add(2, 3, IntPoint::new(1, 4));
    list.add(4, 5, IntPoint::new(0, 8));

    list.sort();

    assert_eq!((list.get(0).edge1, list.get(0).edge2), (4, 5));
    assert_eq!((list.get(1).edge1, list.get(1).edge2), (0, 1));
    assert_eq!((list.get(2).edge1, list.get(2).edge2), (2, 3));
}

#[test]
fn test_swap_and_take() {
    let mut list = IntersectList::new();

    list.add(0, 1, IntPoint::new(0, 0));
    list.add(2, 3, IntPoint::new(1, 1));
    list.swap(0, 1);

    assert_eq!(list.get(0).edge1, 2);

    let nodes = list.take();

    assert_eq!(nodes.len(), 2);
    assert!(list.is_empty());
}
