use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_clipper::geometry::polygon::area;
use wasm_clipper::{ClipType, Clipper, ClipperConfig, ClipperError, IntPoint, Path, PolyFillType, PolyType};

fn path(coords: &[(i64, i64)]) -> Path {
    coords.iter().map(|&(x, y)| IntPoint::new(x, y)).collect()
}

fn square(x: i64, y: i64, size: i64) -> Path {
    path(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

fn total_area(paths: &[Path]) -> f64 {
    paths.iter().map(|path| area(path)).sum()
}

/// Simple counter-clockwise polygon with vertices at random radii around `center`.
fn star(rng: &mut StdRng, center: (i64, i64), vertex_count: usize) -> Path {
    (0..vertex_count)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / vertex_count as f64;
            let radius = rng.random_range(50.0..200.0);

            IntPoint::new(
                center.0 + (radius * angle.cos()).round() as i64,
                center.1 + (radius * angle.sin()).round() as i64,
            )
        })
        .collect()
}

fn clip(subject: &[Path], clip: &[Path], clip_type: ClipType, config: ClipperConfig) -> Vec<Path> {
    let mut clipper = Clipper::new(config);

    clipper.add_paths(subject, PolyType::Subject, true).unwrap();
    clipper.add_paths(clip, PolyType::Clip, true).unwrap();
    clipper.execute(clip_type, PolyFillType::NonZero).unwrap()
}

#[test]
fn overlapping_squares() {
    let subject = [square(0, 0, 10)];
    let clip_path = [square(5, 5, 10)];
    let config = ClipperConfig::default();

    let union = clip(&subject, &clip_path, ClipType::Union, config);
    let intersection = clip(&subject, &clip_path, ClipType::Intersection, config);
    let difference = clip(&subject, &clip_path, ClipType::Difference, config);
    let xor = clip(&subject, &clip_path, ClipType::Xor, config);

    assert_eq!(union.len(), 1);
    assert_eq!(total_area(&union), 175.0);
    assert_eq!(intersection.len(), 1);
    assert_eq!(intersection[0].len(), 4);
    assert!(intersection[0].contains(&IntPoint::new(5, 5)));
    assert!(intersection[0].contains(&IntPoint::new(10, 10)));
    assert_eq!(total_area(&intersection), 25.0);
    assert_eq!(total_area(&difference), 75.0);
    assert_eq!(total_area(&xor), 150.0);
}

#[test]
fn disjoint_squares() {
    let subject = [square(0, 0, 10)];
    let clip_path = [square(20, 0, 10)];
    let config = ClipperConfig::default();

    assert!(clip(&subject, &clip_path, ClipType::Intersection, config).is_empty());

    let union = clip(&subject, &clip_path, ClipType::Union, config);

    assert_eq!(union.len(), 2);
    assert!(union.iter().all(|path| path.len() == 4 && area(path) == 100.0));

    let difference = clip(&subject, &clip_path, ClipType::Difference, config);

    assert_eq!(difference.len(), 1);
    assert_eq!(area(&difference[0]), 100.0);
    assert!(difference[0].iter().all(|pt| pt.x <= 10));
}

#[test]
fn self_union_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let polygon = star(&mut rng, (300, 300), 12);
        let expected = area(&polygon);

        let result = clip(&[polygon.clone()], &[polygon], ClipType::Union, ClipperConfig::default());

        assert_eq!(result.len(), 1);
        assert_relative_eq!(total_area(&result), expected, max_relative = 1e-9);
    }
}

#[test]
fn xor_is_sum_of_differences() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = ClipperConfig::default();

    for _ in 0..20 {
        let a = [star(&mut rng, (300, 300), 9)];
        let b = [star(&mut rng, (380, 320), 7)];

        let a_minus_b = total_area(&clip(&a, &b, ClipType::Difference, config));
        let b_minus_a = total_area(&clip(&b, &a, ClipType::Difference, config));
        let xor = total_area(&clip(&a, &b, ClipType::Xor, config));
        let union = total_area(&clip(&a, &b, ClipType::Union, config));
        let intersection = total_area(&clip(&a, &b, ClipType::Intersection, config));

        assert_relative_eq!(a_minus_b + b_minus_a, xor, max_relative = 0.01);
        assert_relative_eq!(union - intersection, xor, max_relative = 0.01);
        assert!(union >= area(&a[0]).max(area(&b[0])) - 1.0);
    }
}

#[test]
fn full_range_arithmetic_gives_same_result() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..10 {
        let a = [star(&mut rng, (300, 300), 10)];
        let b = [star(&mut rng, (350, 280), 10)];

        for clip_type in [ClipType::Union, ClipType::Intersection, ClipType::Difference, ClipType::Xor] {
            let narrow = clip(&a, &b, clip_type, ClipperConfig::default());
            let wide = clip(&a, &b, clip_type, ClipperConfig::new().with_lo_range(0));

            assert_eq!(narrow, wide);
        }
    }
}

#[test]
fn figure_eight_splits_into_two_outers() {
    let figure_eight = path(&[(0, 0), (10, 10), (10, 0), (0, 10)]);
    let mut clipper = Clipper::default();

    clipper.add_path(&figure_eight, PolyType::Subject, true).unwrap();

    let result = clipper.execute(ClipType::Union, PolyFillType::NonZero).unwrap();

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|path| area(path) == 25.0));

    let tree = clipper.execute_tree(ClipType::Union, PolyFillType::NonZero).unwrap();

    assert_eq!(tree.child_count(), 2);
    assert!(tree.iter().all(|index| !tree.is_hole(index)));
}

#[test]
fn even_odd_makes_holes_from_nesting() {
    let mut clipper = Clipper::default();

    clipper.add_path(&square(0, 0, 100), PolyType::Subject, true).unwrap();
    clipper.add_path(&square(25, 25, 50), PolyType::Subject, true).unwrap();

    let even_odd = clipper.execute(ClipType::Union, PolyFillType::EvenOdd).unwrap();
    let non_zero = clipper.execute(ClipType::Union, PolyFillType::NonZero).unwrap();

    assert_eq!(even_odd.len(), 2);
    assert_eq!(total_area(&even_odd), 10000.0 - 2500.0);
    assert_eq!(non_zero.len(), 1);
    assert_eq!(total_area(&non_zero), 10000.0);
}

#[test]
fn strictly_simple_output_has_no_repeated_vertices() {
    let config = ClipperConfig {
        strictly_simple: true,
        ..ClipperConfig::default()
    };

    let result = clip(&[square(0, 0, 10)], &[square(10, 10, 10)], ClipType::Union, config);

    assert_eq!(result.len(), 2);

    for path in &result {
        for (i, pt) in path.iter().enumerate() {
            assert!(!path[i + 1..].contains(pt));
        }
    }
}

#[test]
fn invalid_input_is_reported() {
    let mut clipper = Clipper::default();

    assert_eq!(
        clipper.add_path(&path(&[(0, 0), (10, 0)]), PolyType::Clip, false),
        Err(ClipperError::OpenClipPath)
    );
    assert!(matches!(
        clipper.add_path(&path(&[(0, 0), (i64::MAX, 0), (0, 5)]), PolyType::Subject, true),
        Err(ClipperError::CoordinateOutOfRange { .. })
    ));

    clipper.add_path(&path(&[(0, 0), (10, 0)]), PolyType::Subject, false).unwrap();

    assert_eq!(
        clipper.execute(ClipType::Intersection, PolyFillType::NonZero),
        Err(ClipperError::OpenPathsRequirePolyTree)
    );
}

#[test]
fn open_paths_are_clipped_through_the_tree() {
    let line = path(&[(-10, 2), (20, 8)]);
    let mut clipper = Clipper::default();

    clipper.add_path(&line, PolyType::Subject, false).unwrap();
    clipper.add_path(&square(0, 0, 10), PolyType::Clip, true).unwrap();

    let inside = clipper.execute_tree(ClipType::Intersection, PolyFillType::NonZero).unwrap();
    let open = inside.open_paths();

    assert_eq!(open.len(), 1);
    assert_eq!(open[0].len(), 2);
    assert!(open[0].contains(&IntPoint::new(0, 4)));
    assert!(open[0].contains(&IntPoint::new(10, 6)));
    assert!(inside.closed_paths().is_empty());

    let outside = clipper.execute_tree(ClipType::Difference, PolyFillType::NonZero).unwrap();
    let open = outside.open_paths();

    assert_eq!(open.len(), 2);
    assert!(open.iter().any(|path| path.contains(&IntPoint::new(-10, 2)) && path.contains(&IntPoint::new(0, 4))));
    assert!(open.iter().any(|path| path.contains(&IntPoint::new(20, 8)) && path.contains(&IntPoint::new(10, 6))));
}
