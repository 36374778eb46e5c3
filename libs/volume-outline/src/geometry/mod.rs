//! # Outline Geometry
//!
//! Runs the outline pipeline for a [`VolumeOutlineSpec`] and returns the
//! resulting line-segment geometry.
//!
//! ```text
//! spec → normalize → sweep → topology + bounding sphere → OutlineGeometry
//! ```

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};
use crate::math::BoundingSphere;
use crate::normalize::normalize_into;
use crate::scratch::{with_thread_scratch, OutlineScratch};
use crate::spec::VolumeOutlineSpec;
use crate::sweep::{PositionSweeper, SurfaceSweeper, SweepInput};
use crate::topology::{build_outline_indices, IndexBuffer};

/// How consumers interpret the index buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Each consecutive index pair is one independent segment.
    #[default]
    Lines,
}

/// Wireframe outline of a polyline volume.
///
/// All positions are f64. Narrowing to f32 only happens at the WASM
/// boundary, through [`OutlineGeometry::positions_f32`].
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use volume_outline::{create_geometry, PrimitiveType, VolumeOutlineSpec};
///
/// let spec = VolumeOutlineSpec::new(
///     vec![DVec3::new(6_378_137.0, 0.0, 0.0), DVec3::new(6_378_137.0, 100.0, 0.0)],
///     vec![DVec2::new(-1.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)],
/// )
/// .unwrap();
/// let geometry = create_geometry(&spec).unwrap();
/// assert_eq!(geometry.vertex_count(), 6);
/// assert_eq!(geometry.segment_count(), 9);
/// assert_eq!(geometry.primitive_type(), PrimitiveType::Lines);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineGeometry {
    /// Flattened [x, y, z, ...] vertex positions
    positions: Vec<f64>,
    /// Segment endpoints, two per line
    indices: IndexBuffer,
    /// Sphere enclosing every position
    bounding_sphere: BoundingSphere,
    primitive_type: PrimitiveType,
}

impl OutlineGeometry {
    /// Returns the flattened vertex positions.
    #[inline]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Returns the index buffer.
    #[inline]
    pub fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    /// Returns the enclosing sphere of the positions.
    #[inline]
    pub fn bounding_sphere(&self) -> &BoundingSphere {
        &self.bounding_sphere
    }

    /// Returns the primitive type, always [`PrimitiveType::Lines`].
    #[inline]
    pub fn primitive_type(&self) -> PrimitiveType {
        self.primitive_type
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of line segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// Returns the vertex at `index`, if any.
    pub fn vertex(&self, index: usize) -> Option<DVec3> {
        let start = index.checked_mul(3)?;
        let end = start.checked_add(3)?;
        self.positions.get(start..end).map(DVec3::from_slice)
    }

    /// Iterates over segments as vertex index pairs.
    pub fn segments(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        (0..self.segment_count()).filter_map(move |s| {
            Some([self.indices.get(2 * s)?, self.indices.get(2 * s + 1)?])
        })
    }

    /// Exports positions as f32 for GPU upload.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.positions.iter().map(|&v| v as f32).collect()
    }

    /// Validates the geometry for correctness.
    ///
    /// Checks:
    /// - positions form whole vertices
    /// - every index addresses an existing vertex
    /// - the index count is even
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertex_count();
        self.positions.len() % 3 == 0
            && self.indices.len() % 2 == 0
            && self.indices.iter().all(|i| (i as usize) < vertex_count)
    }
}

/// Builds the outline geometry for `spec` with the [`SurfaceSweeper`] and
/// this thread's scratch space.
///
/// # Errors
///
/// Any precondition failure of the pipeline, or
/// [`OutlineError::ScratchInUse`] when called reentrantly on one thread.
pub fn create_geometry(spec: &VolumeOutlineSpec) -> Result<OutlineGeometry> {
    with_thread_scratch(|scratch| create_geometry_with_scratch(spec, &SurfaceSweeper, scratch))
}

/// Builds the outline geometry for `spec` with an explicit sweeper and
/// scratch space.
///
/// # Errors
///
/// - [`OutlineError::InsufficientPathPoints`] / [`OutlineError::InsufficientShapePoints`]
///   when too few distinct points remain after cleaning
/// - [`OutlineError::VertexCountMismatch`] / [`OutlineError::InvalidTopology`]
///   when the sweeper breaks its output contract
/// - whatever the sweeper itself reports
pub fn create_geometry_with_scratch<S>(
    spec: &VolumeOutlineSpec,
    sweeper: &S,
    scratch: &mut OutlineScratch,
) -> Result<OutlineGeometry>
where
    S: PositionSweeper + ?Sized,
{
    let OutlineScratch {
        config,
        normalized,
        bounding_rectangle,
        ellipsoid,
    } = scratch;

    normalize_into(spec.path(), spec.shape(), config.tolerance, normalized)?;
    log::debug!(
        "Normalized outline input: {} -> {} path points, {} -> {} shape points",
        spec.path().len(),
        normalized.path.len(),
        spec.shape().len(),
        normalized.shape.len()
    );

    bounding_rectangle.fit_points(&normalized.shape);
    *ellipsoid = *spec.ellipsoid();

    let swept = sweeper.compute_positions(&SweepInput {
        path: &normalized.path,
        shape: &normalized.shape,
        bounding_rectangle: &*bounding_rectangle,
        ellipsoid: &*ellipsoid,
        corner_type: spec.corner_type(),
        granularity: spec.granularity(),
        outline_only: true,
    })?;

    let shape_len = normalized.shape.len();
    if swept.positions.len() % 3 != 0 {
        return Err(OutlineError::sweep_failed(format!(
            "{} position values do not form whole vertices",
            swept.positions.len()
        )));
    }
    let vertex_count = swept.vertex_count();
    if vertex_count % shape_len != 0 {
        return Err(OutlineError::VertexCountMismatch {
            vertex_count,
            shape_len,
        });
    }
    if vertex_count / shape_len != swept.shape_count {
        return Err(OutlineError::sweep_failed(format!(
            "reported {} cross-sections but produced {}",
            swept.shape_count,
            vertex_count / shape_len
        )));
    }
    log::debug!(
        "Swept {} cross-sections ({} vertices, {:?} corners)",
        swept.shape_count,
        vertex_count,
        spec.corner_type()
    );

    let indices = build_outline_indices(vertex_count, shape_len)?;
    let bounding_sphere = BoundingSphere::from_flat_positions(&swept.positions);

    Ok(OutlineGeometry {
        positions: swept.positions,
        indices,
        bounding_sphere,
        primitive_type: PrimitiveType::Lines,
    })
}
