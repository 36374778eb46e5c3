//! # Error Types
//!
//! Error types for outline construction and spec serialization. Every
//! failure is a precondition violation: the computation is pure, so nothing
//! is retried and no partially populated output is ever returned.
//!
//! ## Error Policy
//!
//! - NO fallback geometry when a precondition fails
//! - All failures are explicit `Err` values
//! - Errors carry the counts/values needed for debugging

use config::constants::MIN_GRANULARITY;
use glam::DVec3;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or transporting an outline.
///
/// ## Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use volume_outline::{OutlineError, VolumeOutlineSpec};
///
/// let err = VolumeOutlineSpec::new(vec![], vec![DVec2::ZERO]).unwrap_err();
/// assert!(matches!(err, OutlineError::EmptyPath));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OutlineError {
    /// No path points were supplied.
    #[error("Polyline volume path is required")]
    EmptyPath,

    /// No shape points were supplied.
    #[error("Polyline volume shape is required")]
    EmptyShape,

    /// Fewer than two distinct path points remain after duplicate removal.
    #[error("Path must have at least 2 unique points, found {count}")]
    InsufficientPathPoints {
        /// Distinct points left after cleaning
        count: usize,
    },

    /// Fewer than three distinct shape points remain after duplicate removal.
    #[error("Shape must have at least 3 unique points, found {count}")]
    InsufficientShapePoints {
        /// Distinct points left after cleaning
        count: usize,
    },

    /// Granularity is below the minimum step or not finite.
    #[error("Granularity must be an angle of at least {min} radians: {0}", min = MIN_GRANULARITY)]
    InvalidGranularity(f64),

    /// Reference ellipsoid radii are not strictly positive and finite.
    #[error("Reference surface radii must be positive: {radii}")]
    InvalidReferenceSurface {
        /// The rejected radii
        radii: DVec3,
    },

    /// The swept vertex count is not an exact multiple of the shape length.
    #[error("Vertex count {vertex_count} is not a multiple of shape length {shape_len}")]
    VertexCountMismatch {
        /// Vertices produced by the sweeper
        vertex_count: usize,
        /// Points per cross-section
        shape_len: usize,
    },

    /// Topology inputs that cannot describe a closed outline.
    #[error("Invalid outline topology: shape length {shape_len}, cross-sections {shape_count}")]
    InvalidTopology {
        /// Points per cross-section
        shape_len: usize,
        /// Number of cross-sections
        shape_count: usize,
    },

    /// A position sweeper reported a failure of its own.
    #[error("Sweep failed: {message}")]
    SweepFailed {
        /// Description supplied by the sweeper
        message: String,
    },

    /// The packed buffer cannot hold (or does not contain) the full record.
    #[error("Packed buffer too small: need {required} slots, have {available}")]
    BufferTooSmall {
        /// Slots required past the start of the buffer
        required: usize,
        /// Slots actually available
        available: usize,
    },

    /// A packed corner code that does not name a corner type.
    #[error("Unknown corner type code: {0}")]
    InvalidCornerCode(f64),

    /// A packed length header that is negative, fractional or not finite.
    #[error("Invalid packed count {value} at slot {index}")]
    InvalidCount {
        /// Slot the header was read from
        index: usize,
        /// The raw slot value
        value: f64,
    },

    /// The per-thread scratch space was requested while already borrowed.
    #[error("Outline scratch space is already in use on this thread")]
    ScratchInUse,
}

impl OutlineError {
    /// Creates a sweep failure error.
    pub fn sweep_failed(message: impl Into<String>) -> Self {
        Self::SweepFailed {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, OutlineError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = OutlineError::InsufficientShapePoints { count: 2 };
        assert!(err.to_string().contains("at least 3"));
        assert!(err.to_string().contains('2'));

        let err = OutlineError::BufferTooSmall {
            required: 17,
            available: 10,
        };
        assert!(err.to_string().contains("17"));
        assert!(err.to_string().contains("10"));

        let err = OutlineError::sweep_failed("frame collapsed");
        assert!(err.to_string().contains("frame collapsed"));
    }

    /// Test error types are Send + Sync so results can cross worker threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OutlineError>();
    }
}
