use image::{Rgb, RgbImage};

use crate::{
    foundation::core::Rgb8,
    foundation::error::{PapercutError, PapercutResult},
};

/// 8-bit HSV: hue, saturation and value each scaled to `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsv8 {
    /// Hue, a full turn mapped onto `0..=255`.
    pub h: u8,
    /// Saturation.
    pub s: u8,
    /// Value, `max(r, g, b)`.
    pub v: u8,
}

/// RGB to 8-bit HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv8 {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    if maxc == minc {
        return Hsv8 { h: 0, s: 0, v: maxc };
    }

    let cr = f32::from(maxc - minc);
    let s = cr / f32::from(maxc);
    let rc = f32::from(maxc - r) / cr;
    let gc = f32::from(maxc - g) / cr;
    let bc = f32::from(maxc - b) / cr;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let h = (f64::from(h) / 6.0 + 1.0) % 1.0;

    Hsv8 {
        h: clip8((h * 255.0) as i32),
        s: clip8((f64::from(s) * 255.0) as i32),
        v: maxc,
    }
}

/// 8-bit HSV back to RGB. One output channel always equals `v`.
pub fn hsv_to_rgb(hsv: Hsv8) -> [u8; 3] {
    let Hsv8 { h, s, v } = hsv;
    if s == 0 {
        return [v, v, v];
    }

    let scaled = f64::from(h) * 6.0 / 255.0;
    let i = scaled.floor() as i32;
    let f = scaled - f64::from(i);
    let fs = f64::from(s) / 255.0;
    let vf = f64::from(v);
    let p = clip8((vf * (1.0 - fs)).round() as i32);
    let q = clip8((vf * (1.0 - fs * f)).round() as i32);
    let t = clip8((vf * (1.0 - fs * (1.0 - f))).round() as i32);

    match i % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// "Color" layer blend: hue and saturation from `color`, value from each pixel of `region`.
pub fn color_transfer(region: &RgbImage, color: Rgb8) -> PapercutResult<RgbImage> {
    if region.width() == 0 || region.height() == 0 {
        return Err(PapercutError::invalid(
            "color transfer requires a non-empty region",
        ));
    }

    let target = rgb_to_hsv(color.r, color.g, color.b);
    let mut out = RgbImage::new(region.width(), region.height());
    for (dst, src) in out.pixels_mut().zip(region.pixels()) {
        let [r, g, b] = src.0;
        let v = r.max(g).max(b);
        *dst = Rgb(hsv_to_rgb(Hsv8 { v, ..target }));
    }
    Ok(out)
}

fn clip8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/color_transfer.rs"]
mod tests;
