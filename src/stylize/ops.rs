use image::{DynamicImage, RgbaImage};

use crate::{
    assets::decode::to_color_layout,
    foundation::core::{Opacity, Rgb8, Threshold},
    foundation::error::{PapercutError, PapercutResult},
};

/// ITU-R 601 luma in 16.16 fixed point.
pub fn luma601(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16) as u8
}

/// Replace color with its luma on every pixel. Alpha, if present, is kept.
pub fn desaturate(img: &DynamicImage) -> DynamicImage {
    map_color_pixels(img, |px| {
        let l = luma601(px[0], px[1], px[2]);
        px[..3].fill(l);
    })
}

/// Push every color channel away from the mean luma by `factor`.
///
/// `factor == 1.0` is the identity, `0.0` flattens to the mean gray, large factors saturate
/// toward pure black and white. Alpha is untouched.
pub fn increase_contrast(img: &DynamicImage, factor: f32) -> PapercutResult<DynamicImage> {
    if !factor.is_finite() {
        return Err(PapercutError::invalid(format!(
            "contrast factor must be finite, got {factor}"
        )));
    }

    let normalized = to_color_layout(img);
    let Some(mean) = mean_luma(&normalized) else {
        return Ok(normalized);
    };
    let mean = mean as f32;

    Ok(map_color_pixels(&normalized, |px| {
        for c in &mut px[..3] {
            *c = clamp_trunc_u8(mean + factor * (f32::from(*c) - mean));
        }
    }))
}

/// Zero the alpha of every pixel whose R, G and B are all strictly greater than `threshold`.
pub fn remove_background(img: &DynamicImage, threshold: Threshold) -> RgbaImage {
    let t = threshold.get();
    let mut out = img.to_rgba8();
    for px in out.pixels_mut() {
        let [r, g, b, _] = px.0;
        if r > t && g > t && b > t {
            px.0[3] = 0;
        }
    }
    out
}

/// Flatten every visible pixel to `color` with alpha scaled by `opacity`; clear the rest.
pub fn convert_to_color(img: &DynamicImage, color: Rgb8, opacity: Opacity) -> RgbaImage {
    let mut out = img.to_rgba8();
    recolor_in_place(&mut out, color, opacity);
    out
}

pub(crate) fn recolor_in_place(img: &mut RgbaImage, color: Rgb8, opacity: Opacity) {
    let [r, g, b] = color.channels();
    for px in img.pixels_mut() {
        let a = px.0[3];
        px.0 = if a > 0 {
            [r, g, b, opacity.scale_alpha(a)]
        } else {
            [0, 0, 0, 0]
        };
    }
}

/// Mean luma rounded half-up, or `None` for an empty image. Expects `Rgb8` or `Rgba8`.
fn mean_luma(img: &DynamicImage) -> Option<u8> {
    let (bytes, channels) = match img {
        DynamicImage::ImageRgb8(buf) => (buf.as_raw().as_slice(), 3),
        DynamicImage::ImageRgba8(buf) => (buf.as_raw().as_slice(), 4),
        _ => return None,
    };
    let n = bytes.len() / channels;
    if n == 0 {
        return None;
    }
    let sum: u64 = bytes
        .chunks_exact(channels)
        .map(|px| u64::from(luma601(px[0], px[1], px[2])))
        .sum();
    Some((sum as f64 / n as f64 + 0.5) as u8)
}

fn map_color_pixels(img: &DynamicImage, mut f: impl FnMut(&mut [u8])) -> DynamicImage {
    let mut out = to_color_layout(img);
    match &mut out {
        DynamicImage::ImageRgb8(buf) => buf.chunks_exact_mut(3).for_each(&mut f),
        DynamicImage::ImageRgba8(buf) => buf.chunks_exact_mut(4).for_each(&mut f),
        _ => {}
    }
    out
}

fn clamp_trunc_u8(v: f32) -> u8 {
    if v <= 0.0 {
        0
    } else if v >= 255.0 {
        255
    } else {
        v as u8
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stylize/ops.rs"]
mod tests;
