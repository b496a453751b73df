//! Face-normal estimation over accumulated geometry.
//!
//! Walks triangle index triples and writes smooth normals into the
//! vertex records before packing: every triangle adds its unit face
//! normal `cross(v1 - v0, v2 - v0)` to all three of its corners, and the
//! accumulated sums are renormalized in a final pass. Vertices shared
//! between faces end up with the area-independent average of their face
//! normals.

use crate::math::Vec3;
use crate::vertex::GridVertex;

/// Squared length below which a vector counts as degenerate.
const EPSILON_SQ: f32 = 1e-12;

/// Accumulate smooth face normals into `vertices` for every triangle in
/// `indices`.
///
/// `indices` is read as consecutive triples; a trailing partial triple
/// is ignored, as are triples that point outside `vertices`. Face
/// contributions add onto whatever the normal fields already hold, so
/// records start from their zeroed default unless the caller seeded
/// them. Returns the number of degenerate triangles that were skipped.
pub fn accumulate_face_normals(vertices: &mut [GridVertex], indices: &[u16]) -> usize {
    let mut degenerate = 0;

    for triangle in indices.chunks_exact(3) {
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;
        if i0 >= vertices.len() || i1 >= vertices.len() || i2 >= vertices.len() {
            continue;
        }

        let v0 = Vec3::from(vertices[i0].position);
        let v1 = Vec3::from(vertices[i1].position);
        let v2 = Vec3::from(vertices[i2].position);

        let face = (v1 - v0).cross(&(v2 - v0));
        if face.norm_squared() <= EPSILON_SQ {
            degenerate += 1;
            continue;
        }
        let face = face.normalize();

        for index in [i0, i1, i2] {
            let sum = Vec3::from(vertices[index].normal) + face;
            vertices[index].normal = sum.into();
        }
    }

    for vertex in vertices.iter_mut() {
        let sum = Vec3::from(vertex.normal);
        if sum.norm_squared() > EPSILON_SQ {
            vertex.normal = sum.normalize().into();
        }
    }

    if degenerate > 0 {
        log::warn!("normal estimation skipped {degenerate} degenerate triangles");
    }

    degenerate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_normal(actual: [f32; 3], expected: [f32; 3]) {
        let diff = Vec3::from(actual) - Vec3::from(expected);
        assert!(
            diff.norm() < 1e-5,
            "normal {actual:?} differs from expected {expected:?}"
        );
    }

    #[test]
    fn test_single_triangle_gets_unit_face_normal() {
        let mut vertices = [
            GridVertex::at(0.0, 0.0, 0.0),
            GridVertex::at(0.0, 0.0, 1.0),
            GridVertex::at(1.0, 0.0, 0.0),
        ];
        let skipped = accumulate_face_normals(&mut vertices, &[0, 1, 2]);

        assert_eq!(skipped, 0);
        for vertex in &vertices {
            assert_normal(vertex.normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_shared_vertices_renormalize_to_unit_length() {
        // Two coplanar triangles forming a quad; every shared vertex
        // accumulates two face contributions.
        let mut vertices = [
            GridVertex::at(0.0, 0.0, 0.0),
            GridVertex::at(0.0, 0.0, 1.0),
            GridVertex::at(1.0, 0.0, 0.0),
            GridVertex::at(1.0, 0.0, 1.0),
        ];
        accumulate_face_normals(&mut vertices, &[0, 1, 2, 2, 1, 3]);

        for vertex in &vertices {
            assert_normal(vertex.normal, [0.0, 1.0, 0.0]);
            let length = Vec3::from(vertex.normal).norm();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_triangle_is_skipped() {
        let mut vertices = [
            GridVertex::at(0.0, 0.0, 0.0),
            GridVertex::at(0.0, 0.0, 0.0),
            GridVertex::at(1.0, 0.0, 0.0),
        ];
        let skipped = accumulate_face_normals(&mut vertices, &[0, 1, 2]);

        assert_eq!(skipped, 1);
        for vertex in &vertices {
            assert_eq!(vertex.normal, [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_winding_flips_the_normal() {
        let mut vertices = [
            GridVertex::at(0.0, 0.0, 0.0),
            GridVertex::at(0.0, 0.0, 1.0),
            GridVertex::at(1.0, 0.0, 0.0),
        ];
        accumulate_face_normals(&mut vertices, &[0, 2, 1]);

        for vertex in &vertices {
            assert_normal(vertex.normal, [0.0, -1.0, 0.0]);
        }
    }

    #[test]
    fn test_partial_triple_and_out_of_range_indices_are_ignored() {
        let mut vertices = [
            GridVertex::at(0.0, 0.0, 0.0),
            GridVertex::at(0.0, 0.0, 1.0),
            GridVertex::at(1.0, 0.0, 0.0),
        ];
        // One out-of-range triple, then a dangling index.
        let skipped = accumulate_face_normals(&mut vertices, &[0, 1, 9, 0]);

        assert_eq!(skipped, 0);
        for vertex in &vertices {
            assert_eq!(vertex.normal, [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_sloped_face_normal_direction() {
        // Ramp rising along x; the normal leans back against the slope.
        let mut vertices = [
            GridVertex::at(0.0, 0.0, 0.0),
            GridVertex::at(0.0, 0.0, 1.0),
            GridVertex::at(1.0, 1.0, 0.0),
        ];
        accumulate_face_normals(&mut vertices, &[0, 1, 2]);

        let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
        for vertex in &vertices {
            assert_normal(vertex.normal, expected.into());
        }
    }
}
