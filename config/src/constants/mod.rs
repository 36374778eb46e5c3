//! Centralized configuration values shared across the outline pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Per-axis tolerance used when collapsing consecutive duplicate path points.
///
/// Applied both as an absolute and as a relative bound, so points far from
/// the origin (planetary coordinates are ~6.4e6) still merge when they only
/// differ by rounding noise.
///
/// # Examples
/// ```
/// use config::constants::DUPLICATE_POINT_EPSILON;
/// assert!(DUPLICATE_POINT_EPSILON < 1.0e-6);
/// ```
pub const DUPLICATE_POINT_EPSILON: f64 = 1.0e-10;

/// Turn angle (radians) below which a path vertex is treated as straight and
/// receives a single cross-section regardless of corner style.
///
/// # Examples
/// ```
/// use config::constants::STRAIGHT_TURN_EPSILON;
/// assert!(STRAIGHT_TURN_EPSILON > 0.0);
/// ```
pub const STRAIGHT_TURN_EPSILON: f64 = 1.0e-7;

/// Upper bound for the horizontal stretch applied to a mitered cross-section.
///
/// A miter at a near-hairpin turn tends towards infinite width; the scale is
/// clamped to this value.
///
/// # Examples
/// ```
/// use config::constants::MAX_MITER_SCALE;
/// assert!(MAX_MITER_SCALE > 1.0);
/// ```
pub const MAX_MITER_SCALE: f64 = 10.0;

// =============================================================================
// SWEEP DEFAULTS
// =============================================================================

/// Default angular granularity (one degree, in radians) used to subdivide
/// rounded corners.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_GRANULARITY;
/// let steps = (std::f64::consts::FRAC_PI_2 / DEFAULT_GRANULARITY).ceil();
/// assert_eq!(steps, 90.0);
/// ```
pub const DEFAULT_GRANULARITY: f64 = std::f64::consts::PI / 180.0;

/// Smallest accepted angular granularity, in radians.
///
/// Bounds a rounded corner to at most `PI / MIN_GRANULARITY` steps.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_GRANULARITY, MIN_GRANULARITY};
/// assert!(MIN_GRANULARITY < DEFAULT_GRANULARITY);
/// assert!((std::f64::consts::PI / MIN_GRANULARITY).ceil() < 40_000.0);
/// ```
pub const MIN_GRANULARITY: f64 = 1.0e-4;

/// Radii of the WGS84 reference ellipsoid in meters (x, y, z).
///
/// # Examples
/// ```
/// use config::constants::WGS84_RADII;
/// assert_eq!(WGS84_RADII[0], WGS84_RADII[1]);
/// assert!(WGS84_RADII[2] < WGS84_RADII[0]);
/// ```
pub const WGS84_RADII: [f64; 3] = [6_378_137.0, 6_378_137.0, 6_356_752.314_245_179];

/// Minimum number of distinct path points required to sweep a volume.
pub const MIN_PATH_POINTS: usize = 2;

/// Minimum number of distinct shape points required to form a cross-section.
pub const MIN_SHAPE_POINTS: usize = 3;

// =============================================================================
// PACKED LAYOUT
// =============================================================================

/// Slots occupied by one packed 3D point.
pub const CARTESIAN3_PACKED_LENGTH: usize = 3;

/// Slots occupied by one packed 2D point.
pub const CARTESIAN2_PACKED_LENGTH: usize = 2;

/// Slots occupied by the packed reference ellipsoid (its three radii).
pub const ELLIPSOID_PACKED_LENGTH: usize = 3;

/// Fixed slots of a packed spec that do not depend on the point counts:
/// the two length headers, the ellipsoid, the corner code and the
/// granularity.
///
/// # Examples
/// ```
/// use config::constants::{packed_spec_length, PACKED_SPEC_FIXED_SLOTS};
/// assert_eq!(packed_spec_length(0, 0), PACKED_SPEC_FIXED_SLOTS);
/// ```
pub const PACKED_SPEC_FIXED_SLOTS: usize = 1 + 1 + ELLIPSOID_PACKED_LENGTH + 2;

// =============================================================================
// INDEX BUFFER LIMITS
// =============================================================================

/// Vertex count at which index buffers switch from 16-bit to 32-bit entries.
///
/// A mesh with fewer vertices than this can address every vertex with a
/// `u16`.
///
/// # Examples
/// ```
/// use config::constants::SIXTY_FOUR_KILOBYTES;
/// assert_eq!(SIXTY_FOUR_KILOBYTES - 1, u16::MAX as usize);
/// ```
pub const SIXTY_FOUR_KILOBYTES: usize = 64 * 1024;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of slots a packed spec occupies for the given point counts.
///
/// # Examples
/// ```
/// use config::constants::packed_spec_length;
/// // 2 path points, 3 shape points: 2 + 6 + 6 + 3 + 2 = 19
/// assert_eq!(packed_spec_length(2, 3), 19);
/// ```
pub const fn packed_spec_length(path_len: usize, shape_len: usize) -> usize {
    PACKED_SPEC_FIXED_SLOTS
        + path_len * CARTESIAN3_PACKED_LENGTH
        + shape_len * CARTESIAN2_PACKED_LENGTH
}

/// Compares two scalars with a combined absolute and relative tolerance.
///
/// # Examples
/// ```
/// use config::constants::equals_epsilon;
/// assert!(equals_epsilon(6_378_137.0, 6_378_137.0 + 1.0e-4, 1.0e-10));
/// assert!(!equals_epsilon(1.0, 1.1, 1.0e-10));
/// ```
#[inline]
pub fn equals_epsilon(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = (a - b).abs();
    diff <= epsilon || diff <= epsilon * a.abs().max(b.abs())
}

// =============================================================================
// VALIDATED CONFIGURATION
// =============================================================================

/// Immutable snapshot of the tunables a caller may override.
///
/// # Examples
/// ```
/// use config::constants::OutlineConfig;
/// let config = OutlineConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineConfig {
    /// Per-axis tolerance for duplicate path point removal.
    pub tolerance: f64,
    /// Angular step given to specs built from this configuration.
    pub granularity: f64,
}

impl OutlineConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and granularity.
    ///
    /// # Examples
    /// ```
    /// use config::constants::OutlineConfig;
    /// let cfg = OutlineConfig::new(1.0e-6, 0.05).expect("valid config");
    /// assert_eq!(cfg.granularity, 0.05);
    /// ```
    pub fn new(tolerance: f64, granularity: f64) -> Result<Self, ConfigError> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(granularity.is_finite() && granularity >= MIN_GRANULARITY) {
            return Err(ConfigError::InvalidGranularity(granularity));
        }
        Ok(Self {
            tolerance,
            granularity,
        })
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            tolerance: DUPLICATE_POINT_EPSILON,
            granularity: DEFAULT_GRANULARITY,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when granularity is below [`MIN_GRANULARITY`] or not finite.
    InvalidGranularity(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidGranularity(value) => {
                write!(f, "granularity must be at least {MIN_GRANULARITY}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
