//! Packed RGBA vertex colors.
//!
//! The color attribute occupies a single float of vertex stride: four
//! 8-bit channels are packed into the bit pattern of an `f32` and
//! unpacked on the GPU side. Packing must never produce a NaN pattern,
//! since hardware is free to canonicalize NaNs and scramble the channels
//! in transit.

/// Pack four 8-bit RGBA channels into one `f32`.
///
/// The channels are laid out as `(a << 24) | (b << 16) | (g << 8) | r`
/// and the result is masked with `0xfeff_ffff` before reinterpreting, so
/// the exponent can never be all ones and the value can never be a NaN
/// or infinity. The mask costs the lowest bit of alpha: an alpha of 255
/// unpacks as 254.
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> f32 {
    let bits =
        ((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32) & 0xfeff_ffff;
    f32::from_bits(bits)
}

/// Unpack a float produced by [`pack_rgba`] into `[r, g, b, a]`.
pub fn unpack_rgba(packed: f32) -> [u8; 4] {
    let bits = packed.to_bits();
    [
        (bits & 0xff) as u8,
        ((bits >> 8) & 0xff) as u8,
        ((bits >> 16) & 0xff) as u8,
        ((bits >> 24) & 0xff) as u8,
    ]
}
