use image::{Rgba, RgbaImage};

use crate::foundation::{
    core::{Affine, Point, Rect},
    error::{PapercutError, PapercutResult},
    math::{mul_div255_u8, unpremul_u8},
};

/// Canvas size after rotating a `width`x`height` image by `degrees` with expansion.
///
/// The canvas spans `ceil(max) - floor(min)` of the rotated corners, per axis.
pub fn rotated_bounds(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let (w, h) = (f64::from(width), f64::from(height));
    let bbox = Affine::rotate_about(degrees.to_radians(), Point::new(w / 2.0, h / 2.0))
        .transform_rect_bbox(Rect::new(0.0, 0.0, w, h));
    let nw = bbox.x1.ceil() - bbox.x0.floor();
    let nh = bbox.y1.ceil() - bbox.y0.floor();
    (nw.max(0.0) as u32, nh.max(0.0) as u32)
}

/// Rotate counter-clockwise by `degrees`, growing the canvas so no corner is clipped.
///
/// Sampling is bicubic on premultiplied pixels; uncovered pixels are fully transparent.
pub fn rotate_expand(img: &RgbaImage, degrees: f64) -> PapercutResult<RgbaImage> {
    if !degrees.is_finite() {
        return Err(PapercutError::invalid(format!(
            "rotation must be finite, got {degrees}"
        )));
    }
    if degrees == 0.0 {
        return Ok(img.clone());
    }

    let (w, h) = img.dimensions();
    let (nw, nh) = rotated_bounds(w, h, degrees);
    let premul = premultiplied(img);

    // Maps output pixel centers back into source coordinates.
    let inv = Affine::translate((f64::from(w) / 2.0, f64::from(h) / 2.0))
        * Affine::rotate(degrees.to_radians())
        * Affine::translate((-f64::from(nw) / 2.0, -f64::from(nh) / 2.0));

    let mut out = RgbaImage::new(nw, nh);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let p = inv * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        if let Some(sampled) = sample_bicubic(&premul, p.x, p.y) {
            let a = sampled[3];
            *px = Rgba([
                unpremul_u8(sampled[0], a),
                unpremul_u8(sampled[1], a),
                unpremul_u8(sampled[2], a),
                a,
            ]);
        }
    }
    Ok(out)
}

fn premultiplied(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let a = px.0[3];
        for c in &mut px.0[..3] {
            *c = mul_div255_u8(*c, a);
        }
    }
    out
}

/// Bicubic sample at continuous source coordinates; `None` outside the source.
fn sample_bicubic(src: &RgbaImage, xin: f64, yin: f64) -> Option<[u8; 4]> {
    let (w, h) = src.dimensions();
    if xin < 0.0 || yin < 0.0 || xin >= f64::from(w) || yin >= f64::from(h) {
        return None;
    }

    let xc = xin - 0.5;
    let yc = yin - 0.5;
    let x0 = xc.floor();
    let y0 = yc.floor();
    let dx = xc - x0;
    let dy = yc - y0;
    let (x0, y0) = (x0 as i64 - 1, y0 as i64 - 1);

    let clip = |v: i64, max: u32| v.clamp(0, i64::from(max) - 1) as u32;
    let xs = [0, 1, 2, 3].map(|k| clip(x0 + k, w));
    let ys = [0, 1, 2, 3].map(|k| clip(y0 + k, h));

    let mut out = [0u8; 4];
    for (c, slot) in out.iter_mut().enumerate() {
        let rows = ys.map(|sy| {
            let v = xs.map(|sx| f64::from(src.get_pixel(sx, sy).0[c]));
            cubic(v, dx)
        });
        let v = cubic(rows, dy);
        *slot = if v <= 0.0 {
            0
        } else if v >= 255.0 {
            255
        } else {
            v as u8
        };
    }
    Some(out)
}

/// Cubic convolution through four samples, evaluated between the middle two.
fn cubic([v1, v2, v3, v4]: [f64; 4], d: f64) -> f64 {
    let p1 = v2;
    let p2 = -v1 + v3;
    let p3 = 2.0 * (v1 - v2) + v3 - v4;
    let p4 = -v1 + v2 - v3 + v4;
    p1 + d * (p2 + d * (p3 + d * p4))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;
