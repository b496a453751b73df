//! The accumulated vertex record.

/// One grid vertex as accumulated during a build session.
///
/// The record always carries every attribute; which of them reach the
/// packed buffer is decided by the session's attribute set, not by the
/// record. Defaults are zero across the board: zero normal, transparent
/// black, origin texture and tile coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GridVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Vertex normal, caller-set or accumulated by normal estimation.
    pub normal: [f32; 3],
    /// Color in its packed one-float form (see [`crate::color::pack_rgba`]).
    pub color: f32,
    /// Texture coordinates.
    pub tex_coord: [f32; 2],
    /// Grid-cell coordinate.
    pub tile_coord: [f32; 2],
}

impl GridVertex {
    /// Create a vertex at `(x, y, z)` with every other field zeroed.
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
            ..Self::default()
        }
    }
}
