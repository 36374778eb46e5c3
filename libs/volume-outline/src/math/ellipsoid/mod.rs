//! # Reference Ellipsoid
//!
//! Triaxial ellipsoid used to interpret path points and orient
//! cross-sections. Only the radii are stored; derived quantities are cheap
//! enough to recompute per call.

use config::constants::{ELLIPSOID_PACKED_LENGTH, WGS84_RADII};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};

/// An ellipsoid centered at the origin, defined by its three radii.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use volume_outline::Ellipsoid;
///
/// let sphere = Ellipsoid::new(DVec3::splat(10.0)).unwrap();
/// let normal = sphere.geodetic_surface_normal(DVec3::new(0.0, 10.0, 0.0));
/// assert_eq!(normal, DVec3::Y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EllipsoidRecord")]
pub struct Ellipsoid {
    radii: DVec3,
}

/// Unvalidated serde shape of an [`Ellipsoid`].
#[derive(Deserialize)]
struct EllipsoidRecord {
    radii: DVec3,
}

impl TryFrom<EllipsoidRecord> for Ellipsoid {
    type Error = OutlineError;

    fn try_from(record: EllipsoidRecord) -> Result<Self> {
        Self::new(record.radii)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Ellipsoid {
    /// The WGS84 reference ellipsoid.
    pub const WGS84: Self = Self {
        radii: DVec3::new(WGS84_RADII[0], WGS84_RADII[1], WGS84_RADII[2]),
    };

    /// Number of slots a packed ellipsoid occupies.
    pub const PACKED_LENGTH: usize = ELLIPSOID_PACKED_LENGTH;

    /// Creates an ellipsoid, rejecting non-positive or non-finite radii.
    pub fn new(radii: DVec3) -> Result<Self> {
        if !radii.is_finite() || radii.min_element() <= 0.0 {
            return Err(OutlineError::InvalidReferenceSurface { radii });
        }
        Ok(Self { radii })
    }

    /// Returns the radii.
    #[inline]
    pub fn radii(&self) -> DVec3 {
        self.radii
    }

    /// Returns `1 / radii²` per axis.
    #[inline]
    pub fn one_over_radii_squared(&self) -> DVec3 {
        (self.radii * self.radii).recip()
    }

    /// Unit normal to the ellipsoid surface through `position`.
    ///
    /// Returns `DVec3::ZERO` for the ellipsoid center, where no normal is
    /// defined.
    pub fn geodetic_surface_normal(&self, position: DVec3) -> DVec3 {
        (position * self.one_over_radii_squared()).normalize_or_zero()
    }

    /// Converts geodetic coordinates (radians, height in radius units) to a
    /// Cartesian position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use volume_outline::Ellipsoid;
    ///
    /// let p = Ellipsoid::WGS84.geodetic_to_cartesian(0.0, 0.0, 0.0);
    /// assert_eq!(p.x, 6_378_137.0);
    /// ```
    pub fn geodetic_to_cartesian(&self, longitude: f64, latitude: f64, height: f64) -> DVec3 {
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let (sin_lon, cos_lon) = longitude.sin_cos();
        let normal = DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);

        let k = self.radii * self.radii * normal;
        let gamma = normal.dot(k).sqrt();
        k / gamma + normal * height
    }

    /// Writes the radii into the first [`Self::PACKED_LENGTH`] slots of `slots`.
    pub(crate) fn write_slots(&self, slots: &mut [f64]) {
        slots[..Self::PACKED_LENGTH].copy_from_slice(&self.radii.to_array());
    }

    /// Reads an ellipsoid from the first [`Self::PACKED_LENGTH`] slots.
    pub(crate) fn from_slots(slots: &[f64]) -> Result<Self> {
        Self::new(DVec3::new(slots[0], slots[1], slots[2]))
    }
}

#[cfg(test)]
mod tests;
