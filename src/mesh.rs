//! The finalized mesh handle.

use crate::layout::{GridAttribute, MeshLayout};

/// An immutable finalized grid mesh.
///
/// Produced by [`GridSession::end`](crate::GridSession::end): one
/// interleaved float vertex buffer, a 16-bit triangle index buffer, and
/// the ordered [`MeshLayout`] a rendering backend needs to bind the
/// buffer. The handle never changes after finalization; a new session
/// produces a new handle.
#[derive(Clone, PartialEq)]
pub struct GridMesh {
    vertex_data: Vec<f32>,
    index_data: Vec<u16>,
    layout: MeshLayout,
    vertex_count: u32,
    label: Option<String>,
}

impl GridMesh {
    /// Assemble a mesh handle from packed parts.
    ///
    /// Vertex count is inferred from the data length and the layout
    /// stride.
    pub fn new(vertex_data: Vec<f32>, index_data: Vec<u16>, layout: MeshLayout) -> Self {
        let stride = layout.stride() as usize;
        let vertex_count = if stride > 0 {
            (vertex_data.len() / stride) as u32
        } else {
            0
        };
        Self {
            vertex_data,
            index_data,
            layout,
            vertex_count,
            label: None,
        }
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the interleaved vertex buffer.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_data
    }

    /// Get the triangle index buffer.
    pub fn index_data(&self) -> &[u16] {
        &self.index_data
    }

    /// Get the attribute layout describing the vertex buffer.
    pub fn layout(&self) -> &MeshLayout {
        &self.layout
    }

    /// Get the number of packed vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Get the number of index entries.
    pub fn index_count(&self) -> u32 {
        self.index_data.len() as u32
    }

    /// Get the number of whole triangles in the index buffer.
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Get the floats per vertex.
    pub fn stride(&self) -> u32 {
        self.layout.stride()
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the vertex buffer as raw bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_data)
    }

    /// Get the index buffer as raw bytes for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.index_data)
    }

    /// Read one attribute of one vertex back through the layout.
    ///
    /// Returns the attribute's float slice within that vertex, or `None`
    /// if the attribute is not in the layout or the vertex is out of
    /// range.
    pub fn attribute_floats(&self, vertex: u32, attribute: GridAttribute) -> Option<&[f32]> {
        if vertex >= self.vertex_count {
            return None;
        }
        let binding = self.layout.binding(attribute)?;
        let start = vertex as usize * self.stride() as usize + binding.offset as usize;
        self.vertex_data.get(start..start + binding.components as usize)
    }
}

impl std::fmt::Debug for GridMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridMesh")
            .field("label", &self.label)
            .field("vertex_count", &self.vertex_count)
            .field("index_count", &self.index_data.len())
            .field("stride", &self.layout.stride())
            .finish()
    }
}

static_assertions::assert_impl_all!(GridMesh: Send, Sync);
