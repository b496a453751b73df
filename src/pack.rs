//! Interleaved vertex buffer packing.
//!
//! Flattens accumulated vertex records into a single float buffer.
//! Vertices keep their emission order; within each vertex the active
//! attributes are written in the attribute set's first-use order.
//! Inactive attributes are omitted entirely, so each vertex occupies
//! exactly `stride` consecutive floats.

use crate::layout::{AttributeSet, GridAttribute};
use crate::vertex::GridVertex;

/// Pack `vertices` into one interleaved buffer.
///
/// The result holds exactly `vertices.len() * set.stride()` floats. An
/// empty set packs nothing.
pub fn interleave(vertices: &[GridVertex], set: &AttributeSet) -> Vec<f32> {
    let stride = set.stride() as usize;
    let mut buffer = Vec::with_capacity(vertices.len() * stride);

    for vertex in vertices {
        for attribute in set.iter() {
            match attribute {
                GridAttribute::Position => buffer.extend_from_slice(&vertex.position),
                GridAttribute::Normal => buffer.extend_from_slice(&vertex.normal),
                GridAttribute::Color => buffer.push(vertex.color),
                GridAttribute::TexCoord => buffer.extend_from_slice(&vertex.tex_coord),
                GridAttribute::TilePosition => buffer.extend_from_slice(&vertex.tile_coord),
            }
        }
    }

    debug_assert_eq!(buffer.len(), vertices.len() * stride);
    buffer
}
