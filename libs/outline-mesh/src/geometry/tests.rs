//! Tests for the planar predicates.

use super::*;
use approx::assert_relative_eq;

fn square() -> Vec<DVec2> {
    vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 3.0),
        DVec2::new(3.0, 3.0),
        DVec2::new(3.0, 0.0),
    ]
}

fn unit_hole() -> Vec<DVec2> {
    vec![
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 2.0),
        DVec2::new(2.0, 2.0),
        DVec2::new(2.0, 1.0),
    ]
}

// =============================================================================
// WINDING
// =============================================================================

#[test]
fn test_signed_area_sign_encodes_winding() {
    let mut ring = square();
    assert_relative_eq!(signed_area(&ring), 9.0);
    assert!(is_clockwise(&ring));

    ring.reverse();
    assert_relative_eq!(signed_area(&ring), -9.0);
    assert!(!is_clockwise(&ring));
}

#[test]
fn test_is_clockwise_fails_closed_below_three_points() {
    assert!(!is_clockwise(&[]));
    assert!(!is_clockwise(&[DVec2::ZERO, DVec2::X]));
}

#[test]
fn test_normalize_winding_reverses_only_counter_clockwise() {
    let mut ring = square();
    assert!(!normalize_winding(&mut ring));
    assert_eq!(ring, square());

    ring.reverse();
    assert!(normalize_winding(&mut ring));
    assert!(is_clockwise(&ring));
}

// =============================================================================
// POINT PREDICATES
// =============================================================================

#[test]
fn test_point_on_segment_reports_ratio() {
    let a = DVec2::new(0.0, 0.0);
    let b = DVec2::new(4.0, 0.0);

    let hit = point_on_segment(a, b, DVec2::new(1.0, 0.0)).unwrap();
    assert_relative_eq!(hit.ratio, 0.25);
    assert_relative_eq!(hit.deviation, 0.0);

    let end = point_on_segment(a, b, b).unwrap();
    assert_relative_eq!(end.ratio, 1.0);
}

#[test]
fn test_point_on_segment_is_loose_but_bounded() {
    let a = DVec2::new(0.0, 0.0);
    let b = DVec2::new(4.0, 0.0);

    // Slightly off the line still counts.
    assert!(point_on_segment(a, b, DVec2::new(2.0, 0.1)).is_some());
    assert!(point_on_segment(a, b, DVec2::new(1.0, 1.0)).is_none());
    assert!(point_on_segment(a, b, DVec2::new(5.0, 0.0)).is_none());
}

#[test]
fn test_point_on_zero_length_segment() {
    let a = DVec2::new(1.0, 1.0);
    assert!(point_on_segment(a, a, a).is_none());
}

#[test]
fn test_point_in_triangle() {
    let a = DVec2::new(0.0, 0.0);
    let b = DVec2::new(0.0, 2.0);
    let c = DVec2::new(2.0, 0.0);

    assert!(point_in_triangle(a, b, c, DVec2::new(0.5, 0.5)));
    assert!(point_in_triangle(a, b, c, DVec2::new(0.0, 1.0)));
    assert!(!point_in_triangle(a, b, c, DVec2::new(2.0, 2.0)));
    assert!(!point_in_triangle(a, b, c, DVec2::new(-0.1, 0.5)));

    // Winding does not matter.
    assert!(point_in_triangle(c, b, a, DVec2::new(0.5, 0.5)));
}

#[test]
fn test_point_in_triangle_excludes_corners() {
    let a = DVec2::new(0.0, 0.0);
    let b = DVec2::new(0.0, 2.0);
    let c = DVec2::new(2.0, 0.0);

    assert!(!point_in_triangle(a, b, c, a));
    assert!(!point_in_triangle(a, b, c, DVec2::new(2.0, 1e-12)));
}

#[test]
fn test_point_in_polygon_even_odd() {
    let ring = square();
    assert!(point_in_polygon(&ring, DVec2::new(1.5, 1.5)));
    assert!(!point_in_polygon(&ring, DVec2::new(4.0, 1.5)));
    assert!(!point_in_polygon(&ring, DVec2::new(-1.0, -1.0)));
}

// =============================================================================
// CROSSINGS
// =============================================================================

#[test]
fn test_vertical_crossings_of_square_hole() {
    let crossings = find_vertical_crossings(&unit_hole(), 1.0);

    assert_eq!(crossings.len(), 2);
    assert_eq!(crossings[0].point, DVec2::new(1.0, 1.0));
    assert_relative_eq!(crossings[0].position, 0.0);
    assert_eq!(crossings[1].point, DVec2::new(1.0, 2.0));
    assert_relative_eq!(crossings[1].position, 1.0);
}

#[test]
fn test_vertical_crossings_interpolate_between_vertices() {
    let crossings = find_vertical_crossings(&square(), 1.0);

    // Traversal starts with the closing edge, so the bottom comes first.
    assert_eq!(crossings.len(), 2);
    assert_relative_eq!(crossings[0].point.y, 0.0);
    assert_relative_eq!(crossings[0].position, 3.0 + 2.0 / 3.0);
    assert_relative_eq!(crossings[1].point.y, 3.0);
    assert_relative_eq!(crossings[1].position, 1.0 + 1.0 / 3.0);
}

#[test]
fn test_vertical_crossings_miss() {
    assert!(find_vertical_crossings(&square(), 7.0).is_empty());
}

#[test]
fn test_extreme_two_by_y() {
    let y = |p: &DVec2| p.y;

    let empty: [DVec2; 0] = [];
    assert!(extreme_two_by_y(&empty, y).is_none());

    let one = [DVec2::new(1.0, 5.0)];
    assert_eq!(extreme_two_by_y(&one, y), Some((one[0], one[0])));

    // Two items are ordered, not passed through.
    let two = [DVec2::new(0.0, 4.0), DVec2::new(0.0, 1.0)];
    assert_eq!(extreme_two_by_y(&two, y), Some((two[1], two[0])));

    let many = [
        DVec2::new(0.0, 2.0),
        DVec2::new(0.0, -1.0),
        DVec2::new(0.0, 7.0),
        DVec2::new(0.0, 3.0),
    ];
    assert_eq!(extreme_two_by_y(&many, y), Some((many[1], many[2])));
}

// =============================================================================
// SIMPLIFICATION
// =============================================================================

#[test]
fn test_simplify_collapses_collinear_run() {
    let points = [
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(2.0, 2.0),
    ];
    assert_eq!(
        simplify_collinear(&points),
        vec![DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0), DVec2::new(2.0, 2.0)]
    );
}

#[test]
fn test_simplify_is_idempotent() {
    let points = [
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(2.0, 2.0),
        DVec2::new(3.0, 0.0),
        DVec2::new(3.0, -1.0),
        DVec2::new(3.0, -2.0),
    ];
    let once = simplify_collinear(&points);
    assert_eq!(
        once,
        vec![DVec2::new(0.0, 0.0), DVec2::new(2.0, 2.0), DVec2::new(3.0, 0.0), DVec2::new(3.0, -2.0)]
    );
    assert_eq!(simplify_collinear(&once), once);
}

#[test]
fn test_simplify_skips_duplicates_and_keeps_spikes() {
    let points = [
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(1.0, 0.0),
    ];
    assert_eq!(
        simplify_collinear(&points),
        vec![DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0), DVec2::new(1.0, 0.0)]
    );
}

#[test]
fn test_simplify_short_inputs() {
    assert!(simplify_collinear(&[]).is_empty());
    assert_eq!(simplify_collinear(&[DVec2::X]), vec![DVec2::X]);
}
