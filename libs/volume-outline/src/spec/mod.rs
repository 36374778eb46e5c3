//! # Volume Outline Spec
//!
//! The immutable description of a polyline volume: the path, the
//! cross-section shape, the reference ellipsoid, the corner style and the
//! angular granularity. A spec is what crosses execution boundaries (see
//! [`crate::pack`]); the geometry is always recomputed from it.

use config::constants::{
    packed_spec_length, OutlineConfig, DEFAULT_GRANULARITY, MIN_GRANULARITY,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};
use crate::math::Ellipsoid;

/// How the sweep treats the cross-section at interior path vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerType {
    /// Cross-sections rotate around the corner in `granularity` steps.
    #[default]
    Rounded,
    /// One stretched cross-section along the corner bisector.
    Mitered,
    /// One cross-section per adjoining segment, joined by straight lines.
    Beveled,
}

impl CornerType {
    /// Integer code used in the packed representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use volume_outline::CornerType;
    ///
    /// assert_eq!(CornerType::Beveled.code(), 2);
    /// assert_eq!(CornerType::try_from(2.0), Ok(CornerType::Beveled));
    /// ```
    pub const fn code(self) -> u8 {
        match self {
            CornerType::Rounded => 0,
            CornerType::Mitered => 1,
            CornerType::Beveled => 2,
        }
    }
}

impl TryFrom<f64> for CornerType {
    type Error = OutlineError;

    fn try_from(code: f64) -> Result<Self> {
        if code == 0.0 {
            Ok(CornerType::Rounded)
        } else if code == 1.0 {
            Ok(CornerType::Mitered)
        } else if code == 2.0 {
            Ok(CornerType::Beveled)
        } else {
            Err(OutlineError::InvalidCornerCode(code))
        }
    }
}

impl TryFrom<u8> for CornerType {
    type Error = OutlineError;

    fn try_from(code: u8) -> Result<Self> {
        CornerType::try_from(f64::from(code))
    }
}

/// Optional parameters of a [`VolumeOutlineSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeOutlineOptions {
    /// Reference surface the path is laid on
    pub ellipsoid: Ellipsoid,
    /// Corner treatment at interior path vertices
    pub corner_type: CornerType,
    /// Angular step (radians) for rounded corner subdivision
    pub granularity: f64,
}

impl Default for VolumeOutlineOptions {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::WGS84,
            corner_type: CornerType::Rounded,
            granularity: DEFAULT_GRANULARITY,
        }
    }
}

impl VolumeOutlineOptions {
    /// Default options with the granularity taken from `config`.
    pub fn from_config(config: &OutlineConfig) -> Self {
        Self {
            granularity: config.granularity,
            ..Self::default()
        }
    }
}

/// Description of a polyline volume outline.
///
/// Owns copies of its path and shape. Construction validates that both are
/// present and that the granularity is usable; the stricter "at least two
/// distinct path points / three distinct shape points" check happens when
/// geometry is created, after duplicate removal.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use volume_outline::{CornerType, VolumeOutlineOptions, VolumeOutlineSpec};
///
/// let spec = VolumeOutlineSpec::with_options(
///     vec![DVec3::new(6_378_137.0, 0.0, 0.0), DVec3::new(6_378_137.0, 100.0, 0.0)],
///     vec![DVec2::new(-5.0, 0.0), DVec2::new(5.0, 0.0), DVec2::new(0.0, 5.0)],
///     VolumeOutlineOptions {
///         corner_type: CornerType::Mitered,
///         ..Default::default()
///     },
/// )
/// .unwrap();
/// assert_eq!(spec.packed_length(), 2 + 6 + 6 + 3 + 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "SpecRecord", try_from = "SpecRecord")]
pub struct VolumeOutlineSpec {
    pub(crate) path: Vec<DVec3>,
    pub(crate) shape: Vec<DVec2>,
    pub(crate) ellipsoid: Ellipsoid,
    pub(crate) corner_type: CornerType,
    pub(crate) granularity: f64,
    pub(crate) packed_length: usize,
}

impl VolumeOutlineSpec {
    /// Creates a spec with the default ellipsoid, corner type and granularity.
    pub fn new(path: Vec<DVec3>, shape: Vec<DVec2>) -> Result<Self> {
        Self::with_options(path, shape, VolumeOutlineOptions::default())
    }

    /// Creates a spec with explicit options.
    pub fn with_options(
        path: Vec<DVec3>,
        shape: Vec<DVec2>,
        options: VolumeOutlineOptions,
    ) -> Result<Self> {
        validate_parts(path.len(), shape.len(), options.granularity)?;
        let packed_length = packed_spec_length(path.len(), shape.len());
        Ok(Self {
            path,
            shape,
            ellipsoid: options.ellipsoid,
            corner_type: options.corner_type,
            granularity: options.granularity,
            packed_length,
        })
    }

    /// Path points as supplied (before duplicate removal).
    #[inline]
    pub fn path(&self) -> &[DVec3] {
        &self.path
    }

    /// Shape points as supplied (before duplicate removal and winding fix).
    #[inline]
    pub fn shape(&self) -> &[DVec2] {
        &self.shape
    }

    /// Reference ellipsoid.
    #[inline]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Corner treatment.
    #[inline]
    pub fn corner_type(&self) -> CornerType {
        self.corner_type
    }

    /// Angular granularity in radians.
    #[inline]
    pub fn granularity(&self) -> f64 {
        self.granularity
    }

    /// Number of slots [`crate::pack::pack`] writes for this spec.
    #[inline]
    pub fn packed_length(&self) -> usize {
        self.packed_length
    }

    /// Packs this spec into a freshly allocated buffer of exactly
    /// [`Self::packed_length`] slots.
    pub fn to_packed(&self) -> Vec<f64> {
        let mut buffer = vec![0.0; self.packed_length];
        crate::pack::write_record(self, &mut buffer);
        buffer
    }
}

/// Checks the construction preconditions shared by every way of building a
/// spec (constructor, unpack, deserialize).
pub(crate) fn validate_parts(path_len: usize, shape_len: usize, granularity: f64) -> Result<()> {
    if path_len == 0 {
        return Err(OutlineError::EmptyPath);
    }
    if shape_len == 0 {
        return Err(OutlineError::EmptyShape);
    }
    if !(granularity.is_finite() && granularity >= MIN_GRANULARITY) {
        return Err(OutlineError::InvalidGranularity(granularity));
    }
    Ok(())
}

/// Serde shape of a spec. Deserializing goes back through the validating
/// constructor, so `packed_length` can never disagree with the point counts.
#[derive(Clone, Serialize, Deserialize)]
struct SpecRecord {
    path: Vec<DVec3>,
    shape: Vec<DVec2>,
    ellipsoid: Ellipsoid,
    corner_type: CornerType,
    granularity: f64,
}

impl From<VolumeOutlineSpec> for SpecRecord {
    fn from(spec: VolumeOutlineSpec) -> Self {
        Self {
            path: spec.path,
            shape: spec.shape,
            ellipsoid: spec.ellipsoid,
            corner_type: spec.corner_type,
            granularity: spec.granularity,
        }
    }
}

impl TryFrom<SpecRecord> for VolumeOutlineSpec {
    type Error = OutlineError;

    fn try_from(record: SpecRecord) -> Result<Self> {
        VolumeOutlineSpec::with_options(
            record.path,
            record.shape,
            VolumeOutlineOptions {
                ellipsoid: record.ellipsoid,
                corner_type: record.corner_type,
                granularity: record.granularity,
            },
        )
    }
}

#[cfg(test)]
mod tests;
