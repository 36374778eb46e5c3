//! # Outline Scratch Space
//!
//! Reusable working buffers for geometry creation. Callers that build many
//! outlines keep one [`OutlineScratch`] and pass it by `&mut`, so the
//! borrow checker guarantees exclusive use. The convenience entry point
//! [`crate::create_geometry`] borrows a per-thread instance instead, through
//! [`with_thread_scratch`].

use std::cell::RefCell;

use config::constants::OutlineConfig;

use crate::error::{OutlineError, Result};
use crate::math::{BoundingRectangle, Ellipsoid};
use crate::normalize::NormalizedInput;

/// Working state reused across geometry creations.
#[derive(Debug, Clone, Default)]
pub struct OutlineScratch {
    /// Tolerances applied while normalizing
    pub config: OutlineConfig,
    /// Cleaned path and shape of the current outline
    pub normalized: NormalizedInput,
    /// Bounding rectangle of the cleaned shape
    pub bounding_rectangle: BoundingRectangle,
    /// Reference surface of the current outline
    pub ellipsoid: Ellipsoid,
}

impl OutlineScratch {
    /// Creates empty scratch space with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty scratch space normalizing with `config`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::OutlineConfig;
    /// use volume_outline::OutlineScratch;
    ///
    /// let config = OutlineConfig::new(1.0e-6, 0.05).unwrap();
    /// let scratch = OutlineScratch::with_config(config);
    /// assert_eq!(scratch.config.tolerance, 1.0e-6);
    /// ```
    pub fn with_config(config: OutlineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

thread_local! {
    static THREAD_SCRATCH: RefCell<OutlineScratch> = RefCell::new(OutlineScratch::new());
}

/// Runs `f` with exclusive access to this thread's scratch space.
///
/// # Errors
///
/// [`OutlineError::ScratchInUse`] when called from inside another
/// `with_thread_scratch` closure on the same thread; otherwise whatever `f`
/// returns.
pub fn with_thread_scratch<R>(f: impl FnOnce(&mut OutlineScratch) -> Result<R>) -> Result<R> {
    THREAD_SCRATCH.with(|cell| {
        let mut scratch = cell
            .try_borrow_mut()
            .map_err(|_| OutlineError::ScratchInUse)?;
        f(&mut scratch)
    })
}
