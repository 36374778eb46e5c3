//! # Position Sweep
//!
//! Places copies of the cleaned shape along the cleaned path and flattens
//! them into one vertex buffer. The outline pipeline only depends on the
//! [`PositionSweeper`] trait; [`SurfaceSweeper`] is the reference
//! implementation used by default.
//!
//! ## Output contract
//!
//! `positions.len() == shape_count * shape.len() * 3`: the buffer holds
//! `shape_count` whole cross-sections, in sweep order, each with the
//! shape's points in their given order.

use config::constants::{
    MAX_MITER_SCALE, MIN_GRANULARITY, MIN_PATH_POINTS, STRAIGHT_TURN_EPSILON,
};
use glam::{DQuat, DVec2, DVec3};

use crate::error::{OutlineError, Result};
use crate::math::{BoundingRectangle, Ellipsoid};
use crate::spec::CornerType;

/// Everything a sweeper receives for one outline.
#[derive(Debug, Clone, Copy)]
pub struct SweepInput<'a> {
    /// Path with consecutive duplicates removed (at least two points)
    pub path: &'a [DVec3],
    /// Counter-clockwise shape with duplicates removed (at least three points)
    pub shape: &'a [DVec2],
    /// Bounding rectangle of `shape`
    pub bounding_rectangle: &'a BoundingRectangle,
    /// Reference surface
    pub ellipsoid: &'a Ellipsoid,
    /// Corner treatment
    pub corner_type: CornerType,
    /// Angular step for rounded corners, in radians
    pub granularity: f64,
    /// When false, the end cross-sections are repeated for cap triangulation
    pub outline_only: bool,
}

/// Flattened cross-sections produced by a sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweptPositions {
    /// `[x, y, z, ...]` for every vertex of every cross-section
    pub positions: Vec<f64>,
    /// Number of cross-sections in `positions`
    pub shape_count: usize,
}

impl SweptPositions {
    /// Number of vertices in the buffer.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Turns a cleaned path and shape into cross-section vertex positions.
///
/// Implementations must uphold the module-level output contract.
pub trait PositionSweeper {
    /// Computes the flattened cross-sections for `input`.
    fn compute_positions(&self, input: &SweepInput<'_>) -> Result<SweptPositions>;
}

impl<S: PositionSweeper + ?Sized> PositionSweeper for &S {
    fn compute_positions(&self, input: &SweepInput<'_>) -> Result<SweptPositions> {
        (**self).compute_positions(input)
    }
}

/// Reference sweeper that stands cross-sections upright on the ellipsoid.
///
/// Each cross-section lies in the plane spanned by the local "right"
/// direction and the surface normal ("up"), with the shape's x axis along
/// right (centered on the bounding rectangle) and its y axis along up.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use volume_outline::sweep::{PositionSweeper, SurfaceSweeper, SweepInput};
/// use volume_outline::{BoundingRectangle, CornerType, Ellipsoid};
///
/// let e = Ellipsoid::WGS84;
/// let path = [e.geodetic_to_cartesian(0.0, 0.0, 0.0), e.geodetic_to_cartesian(0.001, 0.0, 0.0)];
/// let shape = [DVec2::new(-1.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)];
/// let rect = BoundingRectangle::from_points(&shape);
/// let swept = SurfaceSweeper
///     .compute_positions(&SweepInput {
///         path: &path,
///         shape: &shape,
///         bounding_rectangle: &rect,
///         ellipsoid: &e,
///         corner_type: CornerType::Rounded,
///         granularity: 0.1,
///         outline_only: true,
///     })
///     .unwrap();
/// assert_eq!(swept.shape_count, 2);
/// assert_eq!(swept.vertex_count(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceSweeper;

impl PositionSweeper for SurfaceSweeper {
    fn compute_positions(&self, input: &SweepInput<'_>) -> Result<SweptPositions> {
        let path = input.path;
        if path.len() < MIN_PATH_POINTS {
            return Err(OutlineError::InsufficientPathPoints { count: path.len() });
        }
        if input.shape.is_empty() {
            return Err(OutlineError::EmptyShape);
        }
        if !(input.granularity.is_finite() && input.granularity >= MIN_GRANULARITY) {
            return Err(OutlineError::InvalidGranularity(input.granularity));
        }

        let directions: Vec<DVec3> = path
            .windows(2)
            .map(|w| (w[1] - w[0]).normalize_or_zero())
            .collect();

        let mut sweep = CrossSectionWriter::new(input, path.len());
        let last = path.len() - 1;

        sweep.emit(path[0], directions[0], 1.0);

        for i in 1..last {
            let point = path[i];
            let up = sweep.up_at(point);
            let incoming = tangent(directions[i - 1], up);
            let outgoing = tangent(directions[i], up);
            let turn = incoming.angle_between(outgoing);

            if !turn.is_finite() || turn < STRAIGHT_TURN_EPSILON {
                sweep.emit(point, incoming, 1.0);
                continue;
            }

            match input.corner_type {
                CornerType::Rounded => {
                    let axis = incoming.cross(outgoing).try_normalize().unwrap_or(up);
                    let steps = ((turn / input.granularity).ceil() as usize).max(1);
                    for step in 0..=steps {
                        let angle = turn * step as f64 / steps as f64;
                        let forward = DQuat::from_axis_angle(axis, angle) * incoming;
                        sweep.emit(point, forward, 1.0);
                    }
                }
                CornerType::Mitered => {
                    let bisector = (incoming + outgoing).try_normalize().unwrap_or(incoming);
                    let stretch = (1.0 / (turn * 0.5).cos()).clamp(1.0, MAX_MITER_SCALE);
                    sweep.emit(point, bisector, stretch);
                }
                CornerType::Beveled => {
                    sweep.emit(point, incoming, 1.0);
                    sweep.emit(point, outgoing, 1.0);
                }
            }
        }

        sweep.emit(path[last], directions[last - 1], 1.0);
        Ok(sweep.finish(input.outline_only))
    }
}

/// Accumulates cross-sections into a flat buffer.
struct CrossSectionWriter<'a> {
    shape: &'a [DVec2],
    ellipsoid: &'a Ellipsoid,
    center_x: f64,
    positions: Vec<f64>,
    shape_count: usize,
}

impl<'a> CrossSectionWriter<'a> {
    fn new(input: &SweepInput<'a>, path_len: usize) -> Self {
        Self {
            shape: input.shape,
            ellipsoid: input.ellipsoid,
            center_x: input.bounding_rectangle.center().x,
            positions: Vec::with_capacity(path_len * input.shape.len() * 3),
            shape_count: 0,
        }
    }

    fn up_at(&self, point: DVec3) -> DVec3 {
        let normal = self.ellipsoid.geodetic_surface_normal(point);
        if normal == DVec3::ZERO {
            DVec3::Z
        } else {
            normal
        }
    }

    /// Appends one cross-section at `point` facing `forward`, with the
    /// shape's x coordinates scaled by `stretch`.
    fn emit(&mut self, point: DVec3, forward: DVec3, stretch: f64) {
        let up = self.up_at(point);
        let forward = tangent(forward, up);
        let right = forward
            .cross(up)
            .try_normalize()
            .unwrap_or_else(|| up.any_orthonormal_vector());

        for vertex in self.shape {
            let position = point + right * ((vertex.x - self.center_x) * stretch) + up * vertex.y;
            self.positions.extend_from_slice(&position.to_array());
        }
        self.shape_count += 1;
    }

    fn finish(mut self, outline_only: bool) -> SweptPositions {
        if !outline_only && self.shape_count > 0 {
            // Repeat the end cross-sections so caps get their own vertices
            let section = self.shape.len() * 3;
            let tail = self.positions.len() - section;
            let mut positions = Vec::with_capacity(self.positions.len() + 2 * section);
            positions.extend_from_slice(&self.positions[..section]);
            positions.extend_from_slice(&self.positions);
            positions.extend_from_slice(&self.positions[tail..]);
            self.positions = positions;
            self.shape_count += 2;
        }
        SweptPositions {
            positions: self.positions,
            shape_count: self.shape_count,
        }
    }
}

/// Projects `direction` into the tangent plane with normal `up`.
///
/// Falls back to `direction` itself when it is parallel to `up`.
fn tangent(direction: DVec3, up: DVec3) -> DVec3 {
    (direction - up * direction.dot(up))
        .try_normalize()
        .unwrap_or(direction)
}
