//! # Boundary Errors
//!
//! Failures of the JavaScript-facing entry points. Outline errors pass
//! through unchanged; the remaining variants cover flat arrays whose shape
//! does not match what the entry point expects.

use thiserror::Error;
use volume_outline::OutlineError;

/// Errors raised while converting host arrays or building outlines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundaryError {
    /// The outline pipeline rejected the input.
    #[error(transparent)]
    Outline(#[from] OutlineError),

    /// A flat coordinate array does not hold whole points.
    #[error("{name} has {len} values, which is not a multiple of {stride}")]
    CoordinateStride {
        /// Argument name as seen from JavaScript
        name: &'static str,
        /// Number of values received
        len: usize,
        /// Values per point
        stride: usize,
    },

    /// The radii array does not hold exactly three values.
    #[error("ellipsoid radii need {expected} values, got {len}")]
    RadiiLength {
        /// Values required
        expected: usize,
        /// Values received
        len: usize,
    },
}

/// Result type alias for boundary operations.
pub type Result<T> = std::result::Result<T, BoundaryError>;
