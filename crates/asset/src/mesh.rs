//! CPU-side mesh representation handed to the renderer.

use bytemuck::{Pod, Zeroable};
use corelib::{Bounds3, Vec3};

/// Vertex: position + color. `color` carries the unit vertex normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    /// Size of one vertex in a vertex buffer.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    pub const POSITION_OFFSET: usize = std::mem::offset_of!(Vertex, position);
    pub const COLOR_OFFSET: usize = std::mem::offset_of!(Vertex, color);

    pub fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    /// Vertex slot created from a normal, position still at the origin.
    pub fn from_normal(color: [f32; 3]) -> Self {
        Self {
            position: [0.0; 3],
            color,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Indexed triangle list. Three indices per triangle, 32-bit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Returns `true` if both vertex and index buffers are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty() && !self.indices.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Bounds of all vertex positions, `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<Bounds3> {
        Bounds3::from_points(self.vertices.iter().map(Vertex::pos))
    }

    /// Indices pointing past the end of the vertex list.
    pub fn out_of_range_indices(&self) -> impl Iterator<Item = u32> + '_ {
        let len = self.vertices.len();
        self.indices
            .iter()
            .copied()
            .filter(move |&i| i as usize >= len)
    }

    /// Raw bytes for a vertex buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes for an index buffer upload (R32 unsigned).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
