use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use volume_outline::{
    create_geometry, CornerType, Ellipsoid, IndexBuffer, OutlineError, VolumeOutlineOptions,
    VolumeOutlineSpec,
};

fn clockwise_equilateral() -> Vec<DVec2> {
    let h = 3.0_f64.sqrt() / 2.0;
    vec![DVec2::new(0.0, h), DVec2::new(0.5, 0.0), DVec2::new(-0.5, 0.0)]
}

fn circle(points: usize, radius: f64) -> Vec<DVec2> {
    (0..points)
        .map(|i| {
            let angle = TAU * i as f64 / points as f64;
            DVec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn geodetic_path(coordinates: &[(f64, f64)]) -> Vec<DVec3> {
    let e = Ellipsoid::WGS84;
    coordinates
        .iter()
        .map(|&(lon, lat)| e.geodetic_to_cartesian(lon.to_radians(), lat.to_radians(), 0.0))
        .collect()
}

#[test]
fn clockwise_triangle_between_two_points() {
    let spec = VolumeOutlineSpec::new(
        geodetic_path(&[(-75.0, 40.0), (-74.99, 40.0)]),
        clockwise_equilateral(),
    )
    .unwrap();
    let geometry = create_geometry(&spec).unwrap();

    assert_eq!(geometry.vertex_count(), 6);
    assert_eq!(geometry.indices().len(), 18);
    assert_eq!(geometry.segment_count(), 9);
    assert!(matches!(geometry.indices(), IndexBuffer::U16(_)));

    // VolumeOutlineSpec keeps its input order
    assert_eq!(spec.shape(), clockwise_equilateral().as_slice());
}

#[test]
fn every_index_addresses_a_vertex() {
    let spec = VolumeOutlineSpec::new(
        geodetic_path(&[(0.0, 0.0), (0.01, 0.0), (0.01, 0.01), (0.02, 0.02)]),
        circle(12, 5.0),
    )
    .unwrap();
    let geometry = create_geometry(&spec).unwrap();
    let vertex_count = geometry.vertex_count() as u32;

    assert!(geometry.indices().iter().all(|i| i < vertex_count));
    assert_eq!(geometry.vertex_count() % 12, 0);
    let shape_count = geometry.vertex_count() / 12;
    assert_eq!(geometry.indices().len(), 2 * 12 * (shape_count + 1));
}

#[test]
fn bounding_sphere_contains_all_positions() {
    let spec = VolumeOutlineSpec::with_options(
        geodetic_path(&[(10.0, 45.0), (10.01, 45.0), (10.01, 45.01)]),
        circle(8, 20.0),
        VolumeOutlineOptions {
            corner_type: CornerType::Beveled,
            ..Default::default()
        },
    )
    .unwrap();
    let geometry = create_geometry(&spec).unwrap();
    let sphere = geometry.bounding_sphere();

    for vertex in geometry.positions().chunks_exact(3) {
        assert!(sphere.contains(DVec3::from_slice(vertex), 1e-6));
    }
}

#[test]
fn corner_styles_order_by_section_count() {
    let path = geodetic_path(&[(0.0, 0.0), (0.01, 0.0), (0.01, 0.01)]);
    let vertices = |corner_type: CornerType| {
        let spec = VolumeOutlineSpec::with_options(
            path.clone(),
            circle(6, 1.0),
            VolumeOutlineOptions {
                corner_type,
                ..Default::default()
            },
        )
        .unwrap();
        create_geometry(&spec).unwrap().vertex_count()
    };

    let rounded = vertices(CornerType::Rounded);
    let beveled = vertices(CornerType::Beveled);
    let mitered = vertices(CornerType::Mitered);
    assert_eq!(mitered, 3 * 6);
    assert_eq!(beveled, 4 * 6);
    assert!(rounded > beveled);
}

#[test]
fn index_width_switches_at_sixty_four_kilobytes() {
    let path = geodetic_path(&[(0.0, 0.0), (0.01, 0.0)]);

    // 2 * 32767 = 65534 vertices
    let spec = VolumeOutlineSpec::new(path.clone(), circle(32_767, 50.0)).unwrap();
    let narrow = create_geometry(&spec).unwrap();
    assert_eq!(narrow.vertex_count(), 65_534);
    assert_eq!(narrow.indices().bytes_per_index(), 2);

    // 2 * 32768 = 65536 vertices
    let spec = VolumeOutlineSpec::new(path, circle(32_768, 50.0)).unwrap();
    let wide = create_geometry(&spec).unwrap();
    assert_eq!(wide.vertex_count(), 65_536);
    assert_eq!(wide.indices().bytes_per_index(), 4);
    assert_eq!(wide.indices().iter().max(), Some(65_535));
}

#[test]
fn degenerate_inputs_are_rejected() {
    let point = geodetic_path(&[(0.0, 0.0)])[0];
    let spec = VolumeOutlineSpec::new(vec![point; 4], clockwise_equilateral()).unwrap();
    assert_eq!(
        create_geometry(&spec).unwrap_err(),
        OutlineError::InsufficientPathPoints { count: 1 }
    );

    let spec = VolumeOutlineSpec::new(
        geodetic_path(&[(0.0, 0.0), (0.01, 0.0)]),
        vec![DVec2::ZERO, DVec2::ZERO, DVec2::X],
    )
    .unwrap();
    assert_eq!(
        create_geometry(&spec).unwrap_err(),
        OutlineError::InsufficientShapePoints { count: 2 }
    );

    assert_eq!(
        VolumeOutlineSpec::new(Vec::new(), clockwise_equilateral()).unwrap_err(),
        OutlineError::EmptyPath
    );
    assert_eq!(
        VolumeOutlineSpec::new(vec![point], Vec::new()).unwrap_err(),
        OutlineError::EmptyShape
    );
}

#[test]
fn geometry_is_deterministic() {
    let spec = VolumeOutlineSpec::new(
        geodetic_path(&[(30.0, -20.0), (30.02, -20.0), (30.02, -19.98)]),
        circle(5, 3.0),
    )
    .unwrap();
    assert_eq!(create_geometry(&spec).unwrap(), create_geometry(&spec).unwrap());
}
