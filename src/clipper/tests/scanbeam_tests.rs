use crate::clipper::maxima::Maxima;
use crate::clipper::scanbeam::Scanbeam;

#[test]
fn test_scanbeam_pops_bottom_row_first() {
    let mut scanbeam = Scanbeam::new();

    scanbeam.insert(10);
    scanbeam.insert(-5);
    scanbeam.insert(30);
    scanbeam.insert(0);

    assert_eq!(scanbeam.pop(), Some(30));
    assert_eq!(scanbeam.pop(), Some(10));
    assert_eq!(scanbeam.pop(), Some(0));
    assert_eq!(scanbeam.pop(), Some(-5));
    assert_eq!(scanbeam.pop(), None);
    assert!(scanbeam.is_empty());
}

#[test]
fn test_scanbeam_ignores_duplicates() {
    let mut scanbeam = Scanbeam::new();

    for y in [4, 4, 7, 4, 7] {
        scanbeam.insert(y);
    }

    assert_eq!(scanbeam.len(), 2);
    assert_eq!(scanbeam.pop(), Some(7));
    assert_eq!(scanbeam.pop(), Some(4));
}

#[test]
fn test_scanbeam_clean() {
    let mut scanbeam = Scanbeam::new();

    scanbeam.insert(1);
    scanbeam.insert(2);
    scanbeam.clean();

    assert!(scanbeam.is_empty());
    assert_eq!(scanbeam.pop(), None);
}

#[test]
fn test_maxima_stay_sorted_and_unique() {
    let mut maxima = Maxima::new();

    for x in [50, 10, 30, 10, 50] {
        maxima.insert(x);
    }

    assert_eq!(maxima.len(), 3);
    assert_eq!(maxima.get(0), 10);
    assert_eq!(maxima.get(1), 30);
    assert_eq!(maxima.get(2), 50);
}

#[test]
fn test_maxima_neighbors() {
    let mut maxima = Maxima::new();

    for x in [10, 30, 50] {
        maxima.insert(x);
    }

    assert_eq!(maxima.first_right_of(30), 2);
    assert_eq!(maxima.first_right_of(5), 0);
    assert_eq!(maxima.first_right_of(60), 3);
    assert_eq!(maxima.last_left_of(30), Some(1));
    assert_eq!(maxima.last_left_of(29), Some(0));
    assert_eq!(maxima.last_left_of(5), None);
    assert_eq!(maxima.last_left_of(100), Some(2));

    maxima.clean();
    assert!(maxima.is_empty());
}
