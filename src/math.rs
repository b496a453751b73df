//! Math type aliases.
//!
//! Mesh building works in f32 throughout; this module pins the
//! [`nalgebra`] types the crate uses and re-exports the crate itself for
//! callers that need more.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = x.cross(&y);
        assert!((z - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn array_roundtrip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let a: [f32; 3] = v.into();
        assert_eq!(a, [1.0, 2.0, 3.0]);
        assert_eq!(Vec3::from(a), v);
    }
}
