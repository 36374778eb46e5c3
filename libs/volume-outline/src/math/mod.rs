//! # Math Support
//!
//! The small amount of reference-surface and bounding-volume math the
//! outline pipeline needs, built on `glam` double-precision vectors.

pub mod bounds;
pub mod ellipsoid;

pub use bounds::{BoundingRectangle, BoundingSphere};
pub use ellipsoid::Ellipsoid;
