//! Tests for the reference ellipsoid.

use super::*;
use approx::assert_relative_eq;

#[test]
fn default_is_wgs84() {
    let ellipsoid = Ellipsoid::default();
    assert_eq!(ellipsoid, Ellipsoid::WGS84);
    assert_eq!(ellipsoid.radii().to_array(), WGS84_RADII);
}

#[test]
fn new_rejects_invalid_radii() {
    assert!(Ellipsoid::new(DVec3::new(1.0, 0.0, 1.0)).is_err());
    assert!(Ellipsoid::new(DVec3::new(1.0, -2.0, 1.0)).is_err());
    assert!(Ellipsoid::new(DVec3::new(1.0, f64::NAN, 1.0)).is_err());
    assert!(Ellipsoid::new(DVec3::new(1.0, 2.0, 3.0)).is_ok());
}

#[test]
fn surface_normal_at_poles_and_equator() {
    let e = Ellipsoid::WGS84;
    let north = e.geodetic_to_cartesian(0.0, std::f64::consts::FRAC_PI_2, 0.0);
    assert_relative_eq!(e.geodetic_surface_normal(north), DVec3::Z, epsilon = 1e-12);

    let east = e.geodetic_to_cartesian(std::f64::consts::FRAC_PI_2, 0.0, 0.0);
    assert_relative_eq!(e.geodetic_surface_normal(east), DVec3::Y, epsilon = 1e-12);
}

#[test]
fn surface_normal_at_center_is_zero() {
    assert_eq!(Ellipsoid::WGS84.geodetic_surface_normal(DVec3::ZERO), DVec3::ZERO);
}

#[test]
fn geodetic_to_cartesian_applies_height_along_normal() {
    let e = Ellipsoid::WGS84;
    let ground = e.geodetic_to_cartesian(0.3, 0.7, 0.0);
    let raised = e.geodetic_to_cartesian(0.3, 0.7, 100.0);
    assert_relative_eq!((raised - ground).length(), 100.0, epsilon = 1e-6);
    assert_relative_eq!(
        (raised - ground).normalize(),
        e.geodetic_surface_normal(ground),
        epsilon = 1e-9
    );
}

#[test]
fn slots_round_trip() {
    let e = Ellipsoid::new(DVec3::new(3.0, 2.0, 1.0)).unwrap();
    let mut slots = [0.0; Ellipsoid::PACKED_LENGTH];
    e.write_slots(&mut slots);
    assert_eq!(slots, [3.0, 2.0, 1.0]);
    assert_eq!(Ellipsoid::from_slots(&slots).unwrap(), e);
}

#[test]
fn deserialize_validates_radii() {
    let ellipsoid: Ellipsoid = serde_json::from_str(r#"{"radii":[3.0,2.0,1.0]}"#).unwrap();
    assert_eq!(ellipsoid.radii(), DVec3::new(3.0, 2.0, 1.0));

    assert!(serde_json::from_str::<Ellipsoid>(r#"{"radii":[0.0,0.0,0.0]}"#).is_err());
    assert!(serde_json::from_str::<Ellipsoid>(r#"{"radii":[1.0,-1.0,1.0]}"#).is_err());
}

#[test]
fn serialize_round_trips_through_validation() {
    let json = serde_json::to_string(&Ellipsoid::WGS84).unwrap();
    assert_eq!(serde_json::from_str::<Ellipsoid>(&json).unwrap(), Ellipsoid::WGS84);
}
