//! # Outline Topology
//!
//! Builds the `LINES` index buffer for a swept vertex buffer made of
//! `shape_count` cross-sections of `shape_len` points each.
//!
//! ## Layout
//!
//! Indices come in three groups, in this order:
//!
//! 1. the first cross-section closed into a ring
//! 2. the last cross-section closed into a ring
//! 3. one connector per shape point between consecutive cross-sections
//!
//! which gives `2 * shape_len * (shape_count + 1)` indices in total.
//! Intermediate cross-sections are only implied by the connectors.

use config::constants::{MIN_SHAPE_POINTS, SIXTY_FOUR_KILOBYTES};
use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};

/// Index buffer with the narrowest width that can address every vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexBuffer {
    /// Used when the vertex count is below 65536
    U16(Vec<u16>),
    /// Used for 65536 vertices or more
    U32(Vec<u32>),
}

impl IndexBuffer {
    /// Number of indices.
    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U16(indices) => indices.len(),
            IndexBuffer::U32(indices) => indices.len(),
        }
    }

    /// True when the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index at `position`, widened to `u32`.
    pub fn get(&self, position: usize) -> Option<u32> {
        match self {
            IndexBuffer::U16(indices) => indices.get(position).map(|&i| u32::from(i)),
            IndexBuffer::U32(indices) => indices.get(position).copied(),
        }
    }

    /// Iterates over the indices, widened to `u32`.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len()).filter_map(move |position| self.get(position))
    }

    /// Copies the indices into a `Vec<u32>`.
    pub fn to_u32_vec(&self) -> Vec<u32> {
        match self {
            IndexBuffer::U16(indices) => indices.iter().map(|&i| u32::from(i)).collect(),
            IndexBuffer::U32(indices) => indices.clone(),
        }
    }

    /// Bytes per index: 2 or 4.
    pub fn bytes_per_index(&self) -> usize {
        match self {
            IndexBuffer::U16(_) => std::mem::size_of::<u16>(),
            IndexBuffer::U32(_) => std::mem::size_of::<u32>(),
        }
    }
}

/// Number of indices the outline of `shape_count` cross-sections needs.
///
/// # Example
///
/// ```rust
/// use volume_outline::topology::outline_index_count;
///
/// assert_eq!(outline_index_count(3, 2), 18);
/// ```
pub const fn outline_index_count(shape_len: usize, shape_count: usize) -> usize {
    2 * shape_len * (shape_count + 1)
}

/// Builds the outline index buffer for `vertex_count` swept vertices.
///
/// # Errors
///
/// - [`OutlineError::InvalidTopology`] when `shape_len < 3` or there is no
///   cross-section at all
/// - [`OutlineError::VertexCountMismatch`] when `vertex_count` is not an
///   exact multiple of `shape_len`
///
/// # Example
///
/// ```rust
/// use volume_outline::topology::build_outline_indices;
///
/// let indices = build_outline_indices(6, 3).unwrap();
/// assert_eq!(
///     indices.to_u32_vec(),
///     vec![0, 1, 1, 2, 2, 0, 3, 4, 4, 5, 5, 3, 0, 3, 1, 4, 2, 5]
/// );
/// ```
pub fn build_outline_indices(vertex_count: usize, shape_len: usize) -> Result<IndexBuffer> {
    if shape_len < MIN_SHAPE_POINTS {
        return Err(OutlineError::InvalidTopology {
            shape_len,
            shape_count: if shape_len == 0 { 0 } else { vertex_count / shape_len },
        });
    }
    if vertex_count % shape_len != 0 {
        return Err(OutlineError::VertexCountMismatch {
            vertex_count,
            shape_len,
        });
    }
    let shape_count = vertex_count / shape_len;
    if shape_count < 1 {
        return Err(OutlineError::InvalidTopology {
            shape_len,
            shape_count,
        });
    }

    let index_count = outline_index_count(shape_len, shape_count);
    let indices = if vertex_count < SIXTY_FOUR_KILOBYTES {
        let mut indices = Vec::with_capacity(index_count);
        // vertex_count < 65536, so every index fits
        emit_outline(shape_len, shape_count, |a, b| {
            indices.push(a as u16);
            indices.push(b as u16);
        });
        IndexBuffer::U16(indices)
    } else {
        let mut indices = Vec::with_capacity(index_count);
        emit_outline(shape_len, shape_count, |a, b| {
            indices.push(a as u32);
            indices.push(b as u32);
        });
        IndexBuffer::U32(indices)
    };

    log::debug!(
        "Outline topology: {} cross-sections of {} points, {} indices ({} bytes each)",
        shape_count,
        shape_len,
        indices.len(),
        indices.bytes_per_index()
    );
    Ok(indices)
}

/// Calls `segment` for every line of the outline, in buffer order.
fn emit_outline(shape_len: usize, shape_count: usize, mut segment: impl FnMut(usize, usize)) {
    let mut ring = |offset: usize| {
        for j in 0..shape_len - 1 {
            segment(offset + j, offset + j + 1);
        }
        segment(offset + shape_len - 1, offset);
    };
    ring(0);
    ring((shape_count - 1) * shape_len);

    for i in 0..shape_count - 1 {
        let current = i * shape_len;
        let next = current + shape_len;
        for j in 0..shape_len {
            segment(current + j, next + j);
        }
    }
}
