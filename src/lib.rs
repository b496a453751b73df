//! # trigrid
//!
//! Triangle mesh building for rectangular grids with dynamically
//! selected vertex attributes.
//!
//! - [`TriangleGrid`] - Grid dimensions plus accumulation storage reused
//!   across builds
//! - [`GridSession`] - One `begin()`..`end()` build bracket
//! - [`GridMesh`] - The finalized interleaved vertex and index buffers
//! - [`MeshLayout`] - Attribute bindings describing the packed buffer
//!
//! A session decides its own vertex layout as it goes: an attribute
//! joins the output the first time the session touches it, and that
//! first-use order is the packing order. Finalizing packs exactly the
//! attributes that were used; nothing is reserved for the rest.
//!
//! # Example
//!
//! ```
//! use trigrid::{GridAttribute, TriangleGrid};
//!
//! let mut grid = TriangleGrid::new(1, 1);
//! let mut session = grid.begin();
//!
//! let a = session.add_vertex(0.0, 0.0, 0.0)?;
//! session.set_color(255, 0, 0, 255)?;
//! let b = session.add_vertex(0.0, 0.0, 1.0)?;
//! session.set_color(0, 255, 0, 255)?;
//! let c = session.add_vertex(1.0, 0.0, 0.0)?;
//! session.set_color(0, 0, 255, 255)?;
//! session.add_triangle(a, b, c)?;
//!
//! let mesh = session.end()?;
//! assert_eq!(mesh.stride(), 4); // position + packed color
//! assert!(mesh.layout().has_attribute(GridAttribute::Color));
//! # Ok::<(), trigrid::GridError>(())
//! ```

pub mod color;
mod error;
mod grid;
mod layout;
pub mod math;
mod mesh;
pub mod normals;
pub mod pack;
mod vertex;

pub use error::GridError;
pub use grid::{GridSession, QUAD_INDICES, QUAD_VERTICES, TriangleGrid};
pub use layout::{AttributeBinding, AttributeSet, GridAttribute, MeshLayout};
pub use mesh::GridMesh;
pub use vertex::GridVertex;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
