//! # Volume Outline
//!
//! Wireframe outline geometry for polyline volumes: a 2D cross-section
//! swept along a 3D path laid on a reference ellipsoid.
//!
//! ## Architecture
//!
//! ```text
//! VolumeOutlineSpec ──pack/unpack──▶ flat f64 buffer (worker / WASM transport)
//!        │
//!        ▼
//! normalize ─▶ PositionSweeper ─▶ topology + bounding sphere ─▶ OutlineGeometry
//! ```
//!
//! The outline is the closed ring of the first and of the last
//! cross-section plus one connector line per shape point between
//! consecutive cross-sections, drawn as [`PrimitiveType::Lines`].
//!
//! ## Usage
//!
//! ```rust
//! use glam::{DVec2, DVec3};
//! use volume_outline::{create_geometry, pack, VolumeOutlineSpec};
//!
//! let spec = VolumeOutlineSpec::new(
//!     vec![DVec3::new(6_378_137.0, 0.0, 0.0), DVec3::new(6_378_137.0, 100.0, 0.0)],
//!     vec![DVec2::new(0.0, 1.0), DVec2::new(1.0, 0.0), DVec2::new(-1.0, 0.0)],
//! )?;
//!
//! // Ship the description across a boundary and rebuild it on the other side
//! let packed = spec.to_packed();
//! let received = pack::unpack(&packed, 0)?;
//!
//! let geometry = create_geometry(&received)?;
//! assert_eq!(geometry.indices().len(), 18);
//! # Ok::<(), volume_outline::OutlineError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod normalize;
pub mod pack;
pub mod scratch;
pub mod spec;
pub mod sweep;
pub mod topology;

pub use error::{OutlineError, Result};
pub use geometry::{create_geometry, create_geometry_with_scratch, OutlineGeometry, PrimitiveType};
pub use math::{BoundingRectangle, BoundingSphere, Ellipsoid};
pub use scratch::OutlineScratch;
pub use spec::{CornerType, VolumeOutlineOptions, VolumeOutlineSpec};
pub use sweep::{PositionSweeper, SurfaceSweeper};
pub use topology::IndexBuffer;
