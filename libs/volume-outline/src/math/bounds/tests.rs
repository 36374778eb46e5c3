//! Tests for bounding rectangle and bounding sphere.

use super::*;

#[test]
fn rectangle_of_empty_slice_is_zero() {
    assert_eq!(BoundingRectangle::from_points(&[]), BoundingRectangle::default());
}

#[test]
fn rectangle_fit_points_overwrites_previous_extent() {
    let mut rect = BoundingRectangle::from_points(&[DVec2::splat(-100.0), DVec2::splat(100.0)]);
    rect.fit_points(&[DVec2::new(1.0, 1.0), DVec2::new(2.0, 4.0), DVec2::new(0.0, 3.0)]);
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.y, 1.0);
    assert_eq!(rect.width, 2.0);
    assert_eq!(rect.height, 3.0);
    assert_eq!(rect.center(), DVec2::new(1.0, 2.5));
}

#[test]
fn sphere_of_empty_slice_is_zero() {
    let sphere = BoundingSphere::from_points(&[]);
    assert_eq!(sphere.center, DVec3::ZERO);
    assert_eq!(sphere.radius, 0.0);
}

#[test]
fn sphere_of_single_point_has_zero_radius() {
    let p = DVec3::new(4.0, 5.0, 6.0);
    let sphere = BoundingSphere::from_points(&[p]);
    assert_eq!(sphere.center, p);
    assert_eq!(sphere.radius, 0.0);
}

#[test]
fn sphere_contains_every_cube_corner() {
    let mut corners = Vec::new();
    for x in [-1.0, 3.0] {
        for y in [-2.0, 2.0] {
            for z in [0.0, 5.0] {
                corners.push(DVec3::new(x, y, z));
            }
        }
    }
    let sphere = BoundingSphere::from_points(&corners);
    for corner in &corners {
        assert!(sphere.contains(*corner, 1e-9), "{corner} outside {sphere:?}");
    }
    // The tight sphere of a box is its half diagonal
    let half_diagonal = DVec3::new(4.0, 4.0, 5.0).length() * 0.5;
    assert!(sphere.radius <= half_diagonal + 1e-9);
}

#[test]
fn sphere_grows_for_points_outside_the_seed() {
    // The axis extremes seed a small sphere; the off-axis points force growth
    let points = [
        DVec3::new(-1.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.9, 0.9, 0.9),
        DVec3::new(-0.9, -0.9, 0.9),
        DVec3::new(0.0, 0.0, -0.95),
    ];
    let sphere = BoundingSphere::from_points(&points);
    for p in &points {
        assert!(sphere.contains(*p, 1e-9));
    }
}

#[test]
fn flat_positions_match_point_slice() {
    let points = [DVec3::new(1.0, 2.0, 3.0), DVec3::new(-4.0, 0.5, 9.0), DVec3::ZERO];
    let flat: Vec<f64> = points.iter().flat_map(|p| p.to_array()).collect();
    assert_eq!(
        BoundingSphere::from_flat_positions(&flat),
        BoundingSphere::from_points(&points)
    );
}
