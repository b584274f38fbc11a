use crate::clipper::local_minima::{LocalMinima, LocalMinimum};

#[test]
fn test_minima_sorted_by_descending_y() {
    let mut minima = LocalMinima::new();

    minima.insert(5, Some(0), Some(1));
    minima.insert(20, Some(2), Some(3));
    minima.insert(10, Some(4), None);

    let ys: Vec<i64> = minima.iter().map(|item| item.y).collect();

    assert_eq!(ys, vec![20, 10, 5]);
    assert_eq!(minima.min_y(), Some(20));
}

#[test]
fn test_new_minimum_goes_before_equal_y() {
    let mut minima = LocalMinima::new();

    minima.insert(10, Some(0), Some(1));
    let index = minima.insert(10, Some(2), Some(3));

    assert_eq!(index, 0);
    assert_eq!(minima.get(0).left_bound, Some(2));
    assert_eq!(minima.get(1).left_bound, Some(0));
}

#[test]
fn test_pop_only_matches_current_row() {
    let mut minima = LocalMinima::new();

    minima.insert(10, Some(0), Some(1));
    minima.insert(10, Some(2), Some(3));
    minima.insert(3, None, Some(4));

    assert_eq!(minima.pop(3), None);
    assert_eq!(
        minima.pop(10),
        Some(LocalMinimum {
            y: 10,
            left_bound: Some(2),
            right_bound: Some(3),
        })
    );
    assert!(minima.pop(10).is_some());
    assert_eq!(minima.pop(10), None);
    assert_eq!(minima.min_y(), Some(3));
    assert!(minima.pop(3).is_some());
    assert!(minima.is_empty());
    assert_eq!(minima.min_y(), None);
}

#[test]
fn test_reset_rewinds_cursor() {
    let mut minima = LocalMinima::new();

    minima.insert(1, Some(0), Some(1));
    assert!(minima.pop(1).is_some());
    assert!(minima.is_empty());

    minima.reset();

    assert!(!minima.is_empty());
    assert_eq!(minima.len(), 1);
    assert_eq!(minima.min_y(), Some(1));

    minima.clean();
    assert_eq!(minima.len(), 0);
    assert!(minima.is_empty());
}
