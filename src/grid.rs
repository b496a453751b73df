//! The triangle grid and its build sessions.
//!
//! [`TriangleGrid`] owns the grid dimensions and the accumulation storage
//! that is reused across builds. [`GridSession`] is the short-lived build
//! context: it exclusively borrows the grid for one `begin()`..`end()`
//! bracket, accumulates vertices, attributes, and triangles, and packs
//! everything into an immutable [`GridMesh`] when consumed by
//! [`end`](GridSession::end).
//!
//! The exclusive borrow is what sequences the build: while a session is
//! alive the grid cannot start another one, and no session operation
//! exists outside a session.

use crate::color::pack_rgba;
use crate::error::GridError;
use crate::layout::{AttributeSet, GridAttribute, MeshLayout};
use crate::mesh::GridMesh;
use crate::normals::accumulate_face_normals;
use crate::pack::interleave;
use crate::vertex::GridVertex;

/// Vertices one grid cell contributes.
pub const QUAD_VERTICES: usize = 4;
/// Index entries one grid cell contributes (two triangles).
pub const QUAD_INDICES: usize = 6;

/// Index slots reserved per grid cell: four vertices, three slots each.
///
/// This is the sizing formula renderers built against this crate expect;
/// the actual triangulation spends [`QUAD_INDICES`] of the slots.
const INDEX_SLOTS_PER_CELL: usize = QUAD_VERTICES * 3;

static_assertions::const_assert!(QUAD_INDICES <= INDEX_SLOTS_PER_CELL);

/// A rectangular grid that builds triangle meshes over repeated sessions.
///
/// The grid itself holds no geometry between builds; its dimensions fix
/// the index capacity, and its internal buffers keep their allocations so
/// repeated builds do not reallocate.
///
/// # Example
///
/// ```
/// use trigrid::TriangleGrid;
///
/// let mut grid = TriangleGrid::new(2, 2);
/// let mut session = grid.begin();
/// for row in 0..2 {
///     for col in 0..2 {
///         session.add_rectangle(col as f32, 0.0, row as f32, 1.0, 1.0)?;
///     }
/// }
/// session.estimate_normals();
/// let mesh = session.end()?;
///
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.triangle_count(), 8);
/// # Ok::<(), trigrid::GridError>(())
/// ```
#[derive(Debug)]
pub struct TriangleGrid {
    rows: u32,
    columns: u32,
    index_capacity: usize,
    vertices: Vec<GridVertex>,
    indices: Vec<u16>,
    attributes: AttributeSet,
    label: Option<String>,
}

impl TriangleGrid {
    /// Create a grid with the given dimensions.
    ///
    /// Index storage is reserved up front at `rows * columns * 4 * 3`
    /// entries, and sessions fail with [`GridError::IndexOverflow`]
    /// rather than grow past that bound.
    pub fn new(rows: u32, columns: u32) -> Self {
        let cells = rows as usize * columns as usize;
        let index_capacity = cells * INDEX_SLOTS_PER_CELL;
        Self {
            rows,
            columns,
            index_capacity,
            vertices: Vec::with_capacity(cells * QUAD_VERTICES),
            indices: Vec::with_capacity(index_capacity),
            attributes: AttributeSet::new(),
            label: None,
        }
    }

    /// Set a debug label, inherited by every mesh this grid produces.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Get the number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Get the preallocated index capacity in 16-bit entries.
    pub fn index_capacity(&self) -> usize {
        self.index_capacity
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Start a build session.
    ///
    /// Accumulation from any earlier session is discarded; the storage
    /// keeps its allocation. The session exclusively borrows the grid
    /// until it is consumed by [`GridSession::end`] or dropped.
    pub fn begin(&mut self) -> GridSession<'_> {
        self.vertices.clear();
        self.indices.clear();
        self.attributes.clear();
        GridSession { grid: self }
    }
}

static_assertions::assert_impl_all!(TriangleGrid: Send, Sync);

/// One `begin()`..`end()` build bracket over a [`TriangleGrid`].
///
/// All mesh-construction operations live here. The attribute setters
/// mutate the most recently added vertex, and the attribute set records
/// each kind the first time the session touches it; that first-use order
/// fixes the packed layout. Dropping a session without calling
/// [`end`](Self::end) discards its accumulation.
#[derive(Debug)]
pub struct GridSession<'a> {
    grid: &'a mut TriangleGrid,
}

impl GridSession<'_> {
    /// Pre-declare an attribute, fixing its place in the layout order
    /// before any vertex touches it.
    pub fn mark_used(&mut self, attribute: GridAttribute) {
        self.grid.attributes.mark_used(attribute);
    }

    /// Check if an attribute is active in this session.
    pub fn is_used(&self, attribute: GridAttribute) -> bool {
        self.grid.attributes.is_used(attribute)
    }

    /// Get the per-vertex float stride of the attributes used so far.
    pub fn stride(&self) -> u32 {
        self.grid.attributes.stride()
    }

    /// Get the number of vertices accumulated so far.
    pub fn vertex_count(&self) -> usize {
        self.grid.vertices.len()
    }

    /// Get the number of index entries accumulated so far.
    pub fn index_count(&self) -> usize {
        self.grid.indices.len()
    }

    /// Append a vertex at `(x, y, z)` and make it the current vertex.
    ///
    /// Marks `Position` used and returns the vertex's sequential index,
    /// the handle later triangles refer to. Fails with
    /// [`GridError::IndexOverflow`] once a new vertex could no longer be
    /// addressed by a 16-bit index.
    #[inline]
    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) -> Result<u16, GridError> {
        let next = self.grid.vertices.len();
        if next > u16::MAX as usize {
            return Err(GridError::IndexOverflow {
                requested: next + 1,
                limit: u16::MAX as usize + 1,
            });
        }
        self.grid.attributes.mark_used(GridAttribute::Position);
        self.grid.vertices.push(GridVertex::at(x, y, z));
        Ok(next as u16)
    }

    fn current_vertex(&mut self, setter: &str) -> Result<&mut GridVertex, GridError> {
        self.grid.vertices.last_mut().ok_or_else(|| {
            GridError::SessionState(format!("{setter} called before any vertex was added"))
        })
    }

    /// Set the current vertex's normal. Marks `Normal` used.
    pub fn set_normal(&mut self, x: f32, y: f32, z: f32) -> Result<(), GridError> {
        let vertex = self.current_vertex("set_normal")?;
        vertex.normal = [x, y, z];
        self.grid.attributes.mark_used(GridAttribute::Normal);
        Ok(())
    }

    /// Set the current vertex's color from 8-bit channels, packed into a
    /// single float (see [`pack_rgba`]). Marks `Color` used.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8, a: u8) -> Result<(), GridError> {
        let vertex = self.current_vertex("set_color")?;
        vertex.color = pack_rgba(r, g, b, a);
        self.grid.attributes.mark_used(GridAttribute::Color);
        Ok(())
    }

    /// Set the current vertex's texture coordinates. Marks `TexCoord` used.
    pub fn set_tex_coord(&mut self, u: f32, v: f32) -> Result<(), GridError> {
        let vertex = self.current_vertex("set_tex_coord")?;
        vertex.tex_coord = [u, v];
        self.grid.attributes.mark_used(GridAttribute::TexCoord);
        Ok(())
    }

    /// Set the current vertex's grid-cell coordinate. Marks
    /// `TilePosition` used.
    pub fn set_tile_coord(&mut self, x: f32, z: f32) -> Result<(), GridError> {
        let vertex = self.current_vertex("set_tile_coord")?;
        vertex.tile_coord = [x, z];
        self.grid.attributes.mark_used(GridAttribute::TilePosition);
        Ok(())
    }

    /// Append one triangle's index triple.
    ///
    /// The index cursor only ever advances in whole triples. Fails with
    /// [`GridError::IndexOverflow`] when the triple would exceed the
    /// grid's preallocated index capacity.
    #[inline]
    pub fn add_triangle(&mut self, a: u16, b: u16, c: u16) -> Result<(), GridError> {
        let requested = self.grid.indices.len() + 3;
        if requested > self.grid.index_capacity {
            return Err(GridError::IndexOverflow {
                requested,
                limit: self.grid.index_capacity,
            });
        }
        self.grid.indices.extend_from_slice(&[a, b, c]);
        Ok(())
    }

    /// Emit one grid cell as a quad: four corner vertices and two
    /// triangles.
    ///
    /// Corners step one unit from `(x, y, z)`: top-left `(x, y, z)`,
    /// bottom-left `(x, y, z+1)`, top-right `(x+1, y, z)`, bottom-right
    /// `(x+1, y, z+1)`. The triangles wind as
    /// `(top_left, bottom_left, top_right)` then
    /// `(top_right, bottom_left, bottom_right)`; downstream face culling
    /// depends on this order. `width` and `height` are accepted for
    /// callers that track cell sizes, but the corner offsets stay fixed
    /// at one unit.
    pub fn add_rectangle(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        _width: f32,
        _height: f32,
    ) -> Result<(), GridError> {
        let top_left = self.add_vertex(x, y, z)?;
        let bottom_left = self.add_vertex(x, y, z + 1.0)?;
        let top_right = self.add_vertex(x + 1.0, y, z)?;
        self.add_triangle(top_left, bottom_left, top_right)?;

        let bottom_right = self.add_vertex(x + 1.0, y, z + 1.0)?;
        self.add_triangle(top_right, bottom_left, bottom_right)
    }

    /// Estimate smooth vertex normals from the triangles emitted so far.
    ///
    /// Runs the face-normal accumulation pass over the session's
    /// geometry (see [`accumulate_face_normals`]) and marks `Normal`
    /// used so the packed layout carries the results. Call after the
    /// geometry is complete and before [`end`](Self::end). Returns the
    /// number of degenerate triangles skipped.
    pub fn estimate_normals(&mut self) -> usize {
        self.grid.attributes.mark_used(GridAttribute::Normal);
        accumulate_face_normals(&mut self.grid.vertices, &self.grid.indices)
    }

    /// Finalize the session into an immutable [`GridMesh`].
    ///
    /// Packs the accumulated vertices in the attribute set's first-use
    /// order and copies the emitted index entries. Fails with
    /// [`GridError::EmptyMesh`] if the session added no vertices or
    /// never used an attribute.
    pub fn end(self) -> Result<GridMesh, GridError> {
        if self.grid.vertices.is_empty() {
            return Err(GridError::EmptyMesh("no vertices were added".to_string()));
        }
        if self.grid.attributes.is_empty() {
            return Err(GridError::EmptyMesh("no attributes are in use".to_string()));
        }

        let layout = MeshLayout::from_set(&self.grid.attributes);
        let vertex_data = interleave(&self.grid.vertices, &self.grid.attributes);
        let mut mesh = GridMesh::new(vertex_data, self.grid.indices.clone(), layout);
        if let Some(label) = &self.grid.label {
            mesh = mesh.with_label(label.clone());
        }

        log::trace!(
            "finalized grid mesh: {} vertices, {} indices, stride {}",
            mesh.vertex_count(),
            mesh.index_count(),
            mesh.stride()
        );
        Ok(mesh)
    }
}
