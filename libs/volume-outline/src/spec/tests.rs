//! Tests for spec construction and corner codes.

use super::*;

fn triangle() -> Vec<DVec2> {
    vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)]
}

fn segment() -> Vec<DVec3> {
    vec![DVec3::new(1.0, 0.0, 0.0), DVec3::new(2.0, 0.0, 0.0)]
}

#[test]
fn new_applies_defaults() {
    let spec = VolumeOutlineSpec::new(segment(), triangle()).unwrap();
    assert_eq!(spec.ellipsoid(), &Ellipsoid::WGS84);
    assert_eq!(spec.corner_type(), CornerType::Rounded);
    assert_eq!(spec.granularity(), DEFAULT_GRANULARITY);
}

#[test]
fn packed_length_is_fixed_at_construction() {
    let spec = VolumeOutlineSpec::new(segment(), triangle()).unwrap();
    // 1 + 2*3 + 1 + 3*2 + 3 + 2
    assert_eq!(spec.packed_length(), 19);
    assert_eq!(spec.to_packed().len(), 19);
}

#[test]
fn missing_inputs_are_rejected() {
    assert_eq!(
        VolumeOutlineSpec::new(vec![], triangle()).unwrap_err(),
        OutlineError::EmptyPath
    );
    assert_eq!(
        VolumeOutlineSpec::new(segment(), vec![]).unwrap_err(),
        OutlineError::EmptyShape
    );
}

#[test]
fn invalid_granularity_is_rejected() {
    for granularity in [0.0, -0.1, 1.0e-300, MIN_GRANULARITY / 2.0, f64::NAN, f64::INFINITY] {
        let result = VolumeOutlineSpec::with_options(
            segment(),
            triangle(),
            VolumeOutlineOptions {
                granularity,
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(OutlineError::InvalidGranularity(_))));
    }
}

#[test]
fn minimum_granularity_is_accepted() {
    let spec = VolumeOutlineSpec::with_options(
        segment(),
        triangle(),
        VolumeOutlineOptions {
            granularity: MIN_GRANULARITY,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(spec.granularity(), MIN_GRANULARITY);
}

#[test]
fn options_take_granularity_from_config() {
    let config = OutlineConfig::new(1.0e-9, 0.5).unwrap();
    let options = VolumeOutlineOptions::from_config(&config);
    assert_eq!(options.granularity, 0.5);
    assert_eq!(options.corner_type, CornerType::Rounded);
    assert_eq!(
        VolumeOutlineOptions::from_config(&OutlineConfig::default()),
        VolumeOutlineOptions::default()
    );
}

#[test]
fn construction_keeps_duplicates_for_later_cleaning() {
    // Dedup happens at geometry time; VolumeOutlineSpec keeps its input
    let path = vec![DVec3::X, DVec3::X, DVec3::Y];
    let spec = VolumeOutlineSpec::new(path.clone(), triangle()).unwrap();
    assert_eq!(spec.path(), path.as_slice());
}

#[test]
fn corner_codes_round_trip() {
    for corner in [CornerType::Rounded, CornerType::Mitered, CornerType::Beveled] {
        assert_eq!(CornerType::try_from(f64::from(corner.code())), Ok(corner));
        assert_eq!(CornerType::try_from(corner.code()), Ok(corner));
    }
}

#[test]
fn unknown_corner_codes_are_rejected() {
    assert_eq!(
        CornerType::try_from(3.0),
        Err(OutlineError::InvalidCornerCode(3.0))
    );
    assert!(CornerType::try_from(0.5).is_err());
    assert!(CornerType::try_from(f64::NAN).is_err());
}

#[test]
fn serde_round_trip_revalidates() {
    let spec = VolumeOutlineSpec::with_options(
        segment(),
        triangle(),
        VolumeOutlineOptions {
            corner_type: CornerType::Beveled,
            granularity: 0.25,
            ..Default::default()
        },
    )
    .unwrap();

    let json = serde_json::to_string(&spec).unwrap();
    let back: VolumeOutlineSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);

    let broken = json.replace("0.25", "-1.0");
    assert!(serde_json::from_str::<VolumeOutlineSpec>(&broken).is_err());
}
