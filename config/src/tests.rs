//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_segment_tolerance_is_loose() {
    // Bridge endpoints drift off the outline; the slack must absorb that.
    assert!(POINT_ON_SEGMENT_TOLERANCE >= 0.01);
    assert!(POINT_ON_SEGMENT_TOLERANCE < 1.0);
}

#[test]
fn test_merge_epsilon_below_other_tolerances() {
    assert!(VERTEX_MERGE_EPSILON < VERTICAL_EDGE_TOLERANCE);
    assert!(VERTEX_MERGE_EPSILON < POINT_ON_SEGMENT_TOLERANCE);
    assert!(DIRECTION_TOLERANCE > 0.0);
}

#[test]
fn test_min_polygon_vertices_is_triangle() {
    assert_eq!(MIN_POLYGON_VERTICES, 3);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(1.0, 1.0 + 1e-12));
    assert!(!approx_equal(1.0, 1.0 + 1e-6));
}

#[test]
fn test_areas_match_is_relative() {
    // Large areas tolerate proportionally larger drift.
    assert!(areas_match(1.0e6, 1.0e6 + 1.0));
    assert!(!areas_match(1.0e6, 1.0e6 + 100.0));
    // Tiny areas fall back to the absolute floor.
    assert!(areas_match(0.0, 1.0e-6));
}
