/// `x * y / 255`, rounded to nearest.
pub(crate) fn mul_div255_u8(x: u8, y: u8) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// `(dst * (255 - mask) + src * mask) / 255` in 8-bit fixed point.
///
/// Uses the `((t >> 8) + t) >> 8` division approximation with a +128 bias, which matches the
/// usual 8-bit paste kernels bit for bit.
pub(crate) fn mask_blend_u8(dst: u8, src: u8, mask: u8) -> u8 {
    let t = u32::from(dst) * u32::from(255 - mask) + u32::from(src) * u32::from(mask) + 128;
    (((t >> 8) + t) >> 8) as u8
}

/// Undo premultiplication, rounding to nearest.
pub(crate) fn unpremul_u8(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
