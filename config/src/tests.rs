//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_duplicate_epsilon_is_small() {
    assert!(DUPLICATE_POINT_EPSILON > 0.0);
    assert!(DUPLICATE_POINT_EPSILON < 1e-6, "tolerance should be small for precision");
}

#[test]
fn test_miter_scale_allows_right_angles() {
    // A 90 degree miter needs a stretch of sqrt(2)
    assert!(MAX_MITER_SCALE > std::f64::consts::SQRT_2);
}

// =============================================================================
// SWEEP DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_granularity_is_one_degree() {
    assert!((DEFAULT_GRANULARITY.to_degrees() - 1.0).abs() < 1e-12);
}

#[test]
fn test_wgs84_is_oblate() {
    assert_eq!(WGS84_RADII[0], 6_378_137.0);
    assert!(WGS84_RADII[2] < WGS84_RADII[0]);
}

#[test]
fn test_minimum_point_counts() {
    // A closed ring needs three points, a sweep needs two stations
    assert_eq!(MIN_SHAPE_POINTS, 3);
    assert_eq!(MIN_PATH_POINTS, 2);
}

// =============================================================================
// PACKED LAYOUT TESTS
// =============================================================================

#[test]
fn test_packed_length_formula() {
    // Two headers, the points, K ellipsoid slots, corner code and granularity
    for (n, m) in [(2, 3), (5, 4), (10, 32)] {
        assert_eq!(
            packed_spec_length(n, m),
            2 + 3 * n + 2 * m + ELLIPSOID_PACKED_LENGTH + 2
        );
    }
}

#[test]
fn test_index_limit_matches_u16() {
    assert_eq!(SIXTY_FOUR_KILOBYTES, u16::MAX as usize + 1);
}
