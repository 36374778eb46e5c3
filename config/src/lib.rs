//! # Config Crate
//!
//! Centralized configuration constants for the polyline volume outline
//! pipeline. Tolerances, reference-surface defaults, packed-layout slot
//! widths, and index-buffer limits are defined here so that the core
//! library and the WASM boundary agree on every number.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_GRANULARITY, DUPLICATE_POINT_EPSILON};
//!
//! // One degree of angular subdivision by default
//! assert!((DEFAULT_GRANULARITY - 1.0_f64.to_radians()).abs() < 1e-15);
//!
//! // Tolerance used when collapsing coincident path points
//! let dx: f64 = 1e-11;
//! assert!(dx.abs() < DUPLICATE_POINT_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Wire Compatible**: Slot widths match the packed spec layout exactly

pub mod constants;

#[cfg(test)]
mod tests;
