//! # Path and Shape Normalization
//!
//! Prepares raw spec input for the sweep:
//! - consecutive duplicate path points are collapsed (per-axis tolerance)
//! - consecutive duplicate shape points are collapsed (cyclically, exact)
//! - the shape is rewound counter-clockwise
//!
//! After normalization the path has at least two points and the shape at
//! least three, or an error is returned.

use config::constants::{equals_epsilon, MIN_PATH_POINTS, MIN_SHAPE_POINTS};
use glam::{DVec2, DVec3};

use crate::error::{OutlineError, Result};

/// Cleaned path and counter-clockwise shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedInput {
    /// Path without consecutive duplicates
    pub path: Vec<DVec3>,
    /// Shape without consecutive duplicates, counter-clockwise
    pub shape: Vec<DVec2>,
}

/// Removes path points that match their preceding kept point on every axis.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use volume_outline::normalize::remove_duplicates_from_positions;
///
/// let clean = remove_duplicates_from_positions(&[DVec3::X, DVec3::X, DVec3::Y, DVec3::X], 1e-10);
/// assert_eq!(clean, vec![DVec3::X, DVec3::Y, DVec3::X]);
/// ```
pub fn remove_duplicates_from_positions(positions: &[DVec3], tolerance: f64) -> Vec<DVec3> {
    let mut cleaned = Vec::with_capacity(positions.len());
    remove_duplicates_from_positions_into(positions, tolerance, &mut cleaned);
    cleaned
}

/// Like [`remove_duplicates_from_positions`], writing into a reusable buffer.
pub fn remove_duplicates_from_positions_into(
    positions: &[DVec3],
    tolerance: f64,
    cleaned: &mut Vec<DVec3>,
) {
    cleaned.clear();
    for &position in positions {
        match cleaned.last() {
            Some(&last) if positions_equal(last, position, tolerance) => {}
            _ => cleaned.push(position),
        }
    }
}

/// Removes shape points equal to their cyclic predecessor.
///
/// The shape is a closed ring, so the first point is compared with the last
/// one: an explicit closing point is dropped.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use volume_outline::normalize::remove_duplicates_from_shape;
///
/// let ring = [DVec2::ZERO, DVec2::X, DVec2::X, DVec2::Y, DVec2::ZERO];
/// assert_eq!(remove_duplicates_from_shape(&ring), vec![DVec2::X, DVec2::Y, DVec2::ZERO]);
/// ```
pub fn remove_duplicates_from_shape(shape: &[DVec2]) -> Vec<DVec2> {
    let mut cleaned = Vec::with_capacity(shape.len());
    remove_duplicates_from_shape_into(shape, &mut cleaned);
    cleaned
}

/// Like [`remove_duplicates_from_shape`], writing into a reusable buffer.
pub fn remove_duplicates_from_shape_into(shape: &[DVec2], cleaned: &mut Vec<DVec2>) {
    cleaned.clear();
    let Some(&last) = shape.last() else {
        return;
    };

    let mut previous = last;
    for &point in shape {
        if point != previous {
            cleaned.push(point);
        }
        previous = point;
    }
}

/// Signed area of a 2D ring (shoelace formula). Positive for
/// counter-clockwise winding, negative for clockwise.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use volume_outline::normalize::signed_area;
///
/// let ccw = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// assert_eq!(signed_area(&ccw), 1.0);
/// ```
pub fn signed_area(ring: &[DVec2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let twice_area: f64 = (0..n)
        .map(|i| ring[i].perp_dot(ring[(i + 1) % n]))
        .sum();
    twice_area * 0.5
}

/// Reverses `shape` in place when it winds clockwise.
///
/// Returns true when the order was reversed.
pub fn ensure_counter_clockwise(shape: &mut [DVec2]) -> bool {
    if signed_area(shape) < 0.0 {
        shape.reverse();
        true
    } else {
        false
    }
}

/// Cleans `path` and `shape` and fixes shape winding.
///
/// # Errors
///
/// [`OutlineError::InsufficientPathPoints`] when fewer than two distinct
/// path points remain, [`OutlineError::InsufficientShapePoints`] when fewer
/// than three distinct shape points remain.
pub fn normalize(path: &[DVec3], shape: &[DVec2], tolerance: f64) -> Result<NormalizedInput> {
    let mut normalized = NormalizedInput::default();
    normalize_into(path, shape, tolerance, &mut normalized)?;
    Ok(normalized)
}

/// Like [`normalize`], reusing the buffers of `output`.
pub fn normalize_into(
    path: &[DVec3],
    shape: &[DVec2],
    tolerance: f64,
    output: &mut NormalizedInput,
) -> Result<()> {
    remove_duplicates_from_positions_into(path, tolerance, &mut output.path);
    if output.path.len() < MIN_PATH_POINTS {
        return Err(OutlineError::InsufficientPathPoints {
            count: output.path.len(),
        });
    }

    remove_duplicates_from_shape_into(shape, &mut output.shape);
    if output.shape.len() < MIN_SHAPE_POINTS {
        return Err(OutlineError::InsufficientShapePoints {
            count: output.shape.len(),
        });
    }

    if ensure_counter_clockwise(&mut output.shape) {
        log::trace!("Reversed clockwise shape of {} points", output.shape.len());
    }
    Ok(())
}

#[inline]
fn positions_equal(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    equals_epsilon(a.x, b.x, tolerance)
        && equals_epsilon(a.y, b.y, tolerance)
        && equals_epsilon(a.z, b.z, tolerance)
}
