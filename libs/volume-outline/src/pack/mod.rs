//! # Packed Spec Serialization
//!
//! Fixed-layout encoding of a [`VolumeOutlineSpec`] into a flat `f64`
//! buffer, used to hand a spec to a worker or a WASM module without loss.
//!
//! ## Layout
//!
//! ```text
//! [0]                 path length N
//! [1 .. 3N]           N path points (x, y, z)
//! [3N+1]              shape length M
//! [3N+2 .. 3N+1+2M]   M shape points (x, y)
//! [next 3]            ellipsoid radii
//! [next]              corner type code
//! [last]              granularity (radians)
//! ```
//!
//! Total length is `2 + 3N + 2M + 3 + 2`, see
//! [`config::constants::packed_spec_length`].

use config::constants::{CARTESIAN2_PACKED_LENGTH, CARTESIAN3_PACKED_LENGTH};
use glam::{DVec2, DVec3};

use crate::error::{OutlineError, Result};
use crate::math::Ellipsoid;
use crate::spec::{validate_parts, CornerType, VolumeOutlineSpec};

/// Packs `spec` into `buffer` starting at `offset`.
///
/// Returns the offset one past the last written slot. Fails without
/// writing anything when the buffer is too short.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use volume_outline::{pack, VolumeOutlineSpec};
///
/// let spec = VolumeOutlineSpec::new(
///     vec![DVec3::X, DVec3::Y],
///     vec![DVec2::ZERO, DVec2::X, DVec2::Y],
/// )
/// .unwrap();
/// let mut buffer = vec![0.0; spec.packed_length() + 1];
/// let end = pack::pack(&spec, &mut buffer, 1).unwrap();
/// assert_eq!(end, buffer.len());
/// assert_eq!(buffer[1], 2.0); // path length
/// ```
pub fn pack(spec: &VolumeOutlineSpec, buffer: &mut [f64], offset: usize) -> Result<usize> {
    let end = offset.saturating_add(spec.packed_length());
    if buffer.len() < end {
        return Err(OutlineError::BufferTooSmall {
            required: end,
            available: buffer.len(),
        });
    }
    write_record(spec, &mut buffer[offset..end]);
    Ok(end)
}

/// Writes the record into a slice of exactly `spec.packed_length()` slots.
pub(crate) fn write_record(spec: &VolumeOutlineSpec, slots: &mut [f64]) {
    let mut cursor = 0;

    slots[cursor] = spec.path.len() as f64;
    cursor += 1;
    for point in &spec.path {
        slots[cursor..cursor + CARTESIAN3_PACKED_LENGTH].copy_from_slice(&point.to_array());
        cursor += CARTESIAN3_PACKED_LENGTH;
    }

    slots[cursor] = spec.shape.len() as f64;
    cursor += 1;
    for point in &spec.shape {
        slots[cursor..cursor + CARTESIAN2_PACKED_LENGTH].copy_from_slice(&point.to_array());
        cursor += CARTESIAN2_PACKED_LENGTH;
    }

    spec.ellipsoid.write_slots(&mut slots[cursor..]);
    cursor += Ellipsoid::PACKED_LENGTH;

    slots[cursor] = f64::from(spec.corner_type.code());
    slots[cursor + 1] = spec.granularity;
}

/// Unpacks a fresh spec from `buffer` starting at `offset`.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use volume_outline::{pack, VolumeOutlineSpec};
///
/// let spec = VolumeOutlineSpec::new(
///     vec![DVec3::X, DVec3::Y],
///     vec![DVec2::ZERO, DVec2::X, DVec2::Y],
/// )
/// .unwrap();
/// let packed = spec.to_packed();
/// assert_eq!(pack::unpack(&packed, 0).unwrap(), spec);
/// ```
pub fn unpack(buffer: &[f64], offset: usize) -> Result<VolumeOutlineSpec> {
    let layout = read_layout(buffer, offset)?;
    Ok(VolumeOutlineSpec {
        path: read_path(buffer, &layout).collect(),
        shape: read_shape(buffer, &layout).collect(),
        ellipsoid: layout.ellipsoid,
        corner_type: layout.corner_type,
        granularity: layout.granularity,
        packed_length: layout.end - offset,
    })
}

/// Unpacks into an existing spec, overwriting its fields in place and
/// reusing its path/shape allocations.
///
/// The whole record is validated before `result` is touched, so a failed
/// call leaves `result` unchanged. Returns `result` for chaining.
pub fn unpack_into<'a>(
    buffer: &[f64],
    offset: usize,
    result: &'a mut VolumeOutlineSpec,
) -> Result<&'a mut VolumeOutlineSpec> {
    let layout = read_layout(buffer, offset)?;

    result.path.clear();
    result.path.extend(read_path(buffer, &layout));
    result.shape.clear();
    result.shape.extend(read_shape(buffer, &layout));
    result.ellipsoid = layout.ellipsoid;
    result.corner_type = layout.corner_type;
    result.granularity = layout.granularity;
    result.packed_length = layout.end - offset;

    Ok(result)
}

/// Positions of a validated packed record within its buffer.
#[derive(Debug)]
struct PackedLayout {
    path_start: usize,
    path_len: usize,
    shape_start: usize,
    shape_len: usize,
    ellipsoid: Ellipsoid,
    corner_type: CornerType,
    granularity: f64,
    end: usize,
}

/// Reads the headers and trailing scalars, checking every bound before any
/// point is decoded.
fn read_layout(buffer: &[f64], offset: usize) -> Result<PackedLayout> {
    let path_len = read_count(buffer, offset)?;
    let path_start = offset + 1;

    let shape_header = path_start + path_len * CARTESIAN3_PACKED_LENGTH;
    let shape_len = read_count(buffer, shape_header)?;
    let shape_start = shape_header + 1;

    let ellipsoid_start = shape_start + shape_len * CARTESIAN2_PACKED_LENGTH;
    let corner_slot = ellipsoid_start + Ellipsoid::PACKED_LENGTH;
    let end = corner_slot + 2;
    ensure_available(buffer, end)?;

    let ellipsoid = Ellipsoid::from_slots(&buffer[ellipsoid_start..corner_slot])?;
    let corner_type = CornerType::try_from(buffer[corner_slot])?;
    let granularity = buffer[corner_slot + 1];

    validate_parts(path_len, shape_len, granularity)?;

    Ok(PackedLayout {
        path_start,
        path_len,
        shape_start,
        shape_len,
        ellipsoid,
        corner_type,
        granularity,
        end,
    })
}

fn read_count(buffer: &[f64], index: usize) -> Result<usize> {
    ensure_available(buffer, index.saturating_add(1))?;
    let value = buffer[index];
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(OutlineError::InvalidCount { index, value });
    }
    // A count larger than the buffer can never be satisfied; reject it
    // before it is multiplied into an offset.
    if value > buffer.len() as f64 {
        return Err(OutlineError::BufferTooSmall {
            required: (index + 1).saturating_add(value as usize),
            available: buffer.len(),
        });
    }
    Ok(value as usize)
}

fn ensure_available(buffer: &[f64], required: usize) -> Result<()> {
    if buffer.len() < required {
        return Err(OutlineError::BufferTooSmall {
            required,
            available: buffer.len(),
        });
    }
    Ok(())
}

fn read_path<'a>(buffer: &'a [f64], layout: &PackedLayout) -> impl Iterator<Item = DVec3> + 'a {
    let end = layout.path_start + layout.path_len * CARTESIAN3_PACKED_LENGTH;
    buffer[layout.path_start..end]
        .chunks_exact(CARTESIAN3_PACKED_LENGTH)
        .map(DVec3::from_slice)
}

fn read_shape<'a>(buffer: &'a [f64], layout: &PackedLayout) -> impl Iterator<Item = DVec2> + 'a {
    let end = layout.shape_start + layout.shape_len * CARTESIAN2_PACKED_LENGTH;
    buffer[layout.shape_start..end]
        .chunks_exact(CARTESIAN2_PACKED_LENGTH)
        .map(DVec2::from_slice)
}
