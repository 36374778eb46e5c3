//! WASM-facing entry points for polyline volume outlines.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every exported function has an `_internal` twin that
//! returns Rust errors, so native tests do not depend on a JS host.
//!
//! ```
//! use volume_outline_wasm::{create_outline_from_packed_internal, pack_outline_spec_internal};
//!
//! let packed = pack_outline_spec_internal(
//!     &[6_378_137.0, 0.0, 0.0, 6_378_137.0, 100.0, 0.0],
//!     &[0.0, 1.0, 1.0, 0.0, -1.0, 0.0],
//!     &[6_378_137.0, 6_378_137.0, 6_356_752.314_245_179],
//!     0,
//!     0.1,
//! )
//! .unwrap();
//! let outline = create_outline_from_packed_internal(&packed, 0).unwrap();
//! assert_eq!(outline.vertex_count(), 6);
//! ```

use config::constants::{
    CARTESIAN2_PACKED_LENGTH, CARTESIAN3_PACKED_LENGTH, ELLIPSOID_PACKED_LENGTH,
};
use glam::{DVec2, DVec3};
use volume_outline::{
    create_geometry, pack, CornerType, Ellipsoid, VolumeOutlineOptions, VolumeOutlineSpec,
};
use wasm_bindgen::prelude::*;

mod error;
mod outline_handle;

pub use error::{BoundaryError, Result};
pub use outline_handle::OutlineHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "volume-outline-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` records to the browser console.
///
/// Only active with the `debug_logs` feature; otherwise a no-op. Calling it
/// more than once is harmless.
#[wasm_bindgen]
pub fn init_logging() {
    init_logger();
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

/// Returns the number of slots a packed spec with these point counts needs.
///
/// # Examples
/// ```
/// assert_eq!(volume_outline_wasm::packed_spec_length(2, 3), 19);
/// ```
#[wasm_bindgen]
pub fn packed_spec_length(path_len: usize, shape_len: usize) -> usize {
    config::constants::packed_spec_length(path_len, shape_len)
}

/// Builds a spec from flat coordinate arrays and returns its packed form.
///
/// `path` holds `[x, y, z, ...]`, `shape` holds `[x, y, ...]`, `radii`
/// holds the three ellipsoid radii and `corner` is the corner type code
/// (0 rounded, 1 mitered, 2 beveled).
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the arrays are malformed or describe an invalid outline.
#[wasm_bindgen]
pub fn pack_outline_spec(
    path: &[f64],
    shape: &[f64],
    radii: &[f64],
    corner: u8,
    granularity: f64,
) -> std::result::Result<Vec<f64>, JsValue> {
    pack_outline_spec_internal(path, shape, radii, corner, granularity)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only twin of [`pack_outline_spec`].
pub fn pack_outline_spec_internal(
    path: &[f64],
    shape: &[f64],
    radii: &[f64],
    corner: u8,
    granularity: f64,
) -> Result<Vec<f64>> {
    let path = chunk_points(path, "path", CARTESIAN3_PACKED_LENGTH, DVec3::from_slice)?;
    let shape = chunk_points(shape, "shape", CARTESIAN2_PACKED_LENGTH, DVec2::from_slice)?;
    if radii.len() != ELLIPSOID_PACKED_LENGTH {
        return Err(BoundaryError::RadiiLength {
            expected: ELLIPSOID_PACKED_LENGTH,
            len: radii.len(),
        });
    }

    let spec = VolumeOutlineSpec::with_options(
        path,
        shape,
        VolumeOutlineOptions {
            ellipsoid: Ellipsoid::new(DVec3::from_slice(radii))?,
            corner_type: CornerType::try_from(corner)?,
            granularity,
        },
    )?;
    log::debug!("Packed outline spec into {} slots", spec.packed_length());
    Ok(spec.to_packed())
}

/// Unpacks a spec at `offset` in `buffer` and builds its outline.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the record is malformed or the outline cannot be built.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const outline = create_outline_from_packed(packed, 0);
/// // console.log(outline.vertex_count, outline.segment_count);
/// ```
#[wasm_bindgen]
pub fn create_outline_from_packed(
    buffer: &[f64],
    offset: usize,
) -> std::result::Result<OutlineHandle, JsValue> {
    create_outline_from_packed_internal(buffer, offset)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only twin of [`create_outline_from_packed`].
pub fn create_outline_from_packed_internal(
    buffer: &[f64],
    offset: usize,
) -> Result<OutlineHandle> {
    let spec = pack::unpack(buffer, offset)?;
    let geometry = create_geometry(&spec)?;
    log::debug!(
        "Outline from packed spec: {} vertices, {} segments",
        geometry.vertex_count(),
        geometry.segment_count()
    );
    Ok(OutlineHandle::from(geometry))
}

fn chunk_points<T>(
    values: &[f64],
    name: &'static str,
    stride: usize,
    point: impl Fn(&[f64]) -> T,
) -> Result<Vec<T>> {
    if values.len() % stride != 0 {
        return Err(BoundaryError::CoordinateStride {
            name,
            len: values.len(),
            stride,
        });
    }
    Ok(values.chunks_exact(stride).map(point).collect())
}
