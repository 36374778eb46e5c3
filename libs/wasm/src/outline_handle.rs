//! # Outline Handle
//!
//! WASM-friendly wrapper for outline geometry that can be transferred to
//! JavaScript.

use volume_outline::OutlineGeometry;
use wasm_bindgen::prelude::*;

/// A handle to outline buffers that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const outline = create_outline_from_packed(packed, 0);
///
/// const positions = outline.positions();  // Float64Array
/// const indices = outline.indices();      // Uint32Array
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(outline.positions_f32(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(indices, 1));
/// const lines = new THREE.LineSegments(geometry);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct OutlineHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f64>,
    /// Segment endpoints as [a, b, a, b, ...]
    indices: Vec<u32>,
    /// Width of the index buffer the geometry was built with
    bytes_per_index: u32,
    /// Bounding sphere center as [x, y, z]
    bounding_center: [f64; 3],
    bounding_radius: f64,
    vertex_count: u32,
    segment_count: u32,
}

#[wasm_bindgen]
impl OutlineHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of line segments.
    #[wasm_bindgen(getter)]
    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    /// Returns 2 or 4: the narrowest index width that addresses every vertex.
    #[wasm_bindgen(getter)]
    pub fn bytes_per_index(&self) -> u32 {
        self.bytes_per_index
    }

    /// Returns the vertex positions as a Float64Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    pub fn positions(&self) -> Vec<f64> {
        self.positions.clone()
    }

    /// Returns the vertex positions narrowed to a Float32Array.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.positions.iter().map(|&v| v as f32).collect()
    }

    /// Returns the segment indices as a Uint32Array.
    ///
    /// Format: [a, b, a, b, ...]
    /// Length: segment_count * 2
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the bounding sphere center as [x, y, z].
    pub fn bounding_sphere_center(&self) -> Vec<f64> {
        self.bounding_center.to_vec()
    }

    /// Returns the bounding sphere radius.
    #[wasm_bindgen(getter)]
    pub fn bounding_sphere_radius(&self) -> f64 {
        self.bounding_radius
    }

    /// Returns true if the outline has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl From<OutlineGeometry> for OutlineHandle {
    fn from(geometry: OutlineGeometry) -> Self {
        let sphere = *geometry.bounding_sphere();
        let indices = geometry.indices();
        Self {
            vertex_count: u32::try_from(geometry.vertex_count()).unwrap_or(u32::MAX),
            segment_count: u32::try_from(geometry.segment_count()).unwrap_or(u32::MAX),
            bytes_per_index: indices.bytes_per_index() as u32,
            indices: indices.to_u32_vec(),
            bounding_center: sphere.center.to_array(),
            bounding_radius: sphere.radius,
            positions: geometry.positions().to_vec(),
        }
    }
}
