use image::{Rgb, RgbImage, RgbaImage};

use crate::foundation::math::mask_blend_u8;

/// Intersection of a `w`x`h` image placed at `(x, y)` with a `dst_w`x`dst_h` canvas.
///
/// Returns `(src_x0, src_y0, dst_x0, dst_y0, width, height)`, or `None` when nothing overlaps.
pub(crate) fn clip_placement(
    dst_w: u32,
    dst_h: u32,
    w: u32,
    h: u32,
    x: i64,
    y: i64,
) -> Option<(u32, u32, u32, u32, u32, u32)> {
    let dx0 = x.max(0);
    let dy0 = y.max(0);
    let dx1 = x.saturating_add(i64::from(w)).min(i64::from(dst_w));
    let dy1 = y.saturating_add(i64::from(h)).min(i64::from(dst_h));
    if dx1 <= dx0 || dy1 <= dy0 {
        return None;
    }
    Some((
        (dx0 - x) as u32,
        (dy0 - y) as u32,
        dx0 as u32,
        dy0 as u32,
        (dx1 - dx0) as u32,
        (dy1 - dy0) as u32,
    ))
}

/// Paste `src` onto `dst` at `(x, y)` using `src`'s own alpha as the mask.
///
/// Every channel, alpha included, becomes `(dst * (255 - a) + src * a) / 255`. Parts of `src`
/// falling outside `dst` are dropped; negative offsets are allowed.
pub fn paste_with_alpha(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let Some((sx0, sy0, dx0, dy0, w, h)) =
        clip_placement(dst.width(), dst.height(), src.width(), src.height(), x, y)
    else {
        return;
    };

    for row in 0..h {
        for col in 0..w {
            let s = src.get_pixel(sx0 + col, sy0 + row).0;
            let mask = s[3];
            if mask == 0 {
                continue;
            }
            let d = dst.get_pixel_mut(dx0 + col, dy0 + row);
            for c in 0..4 {
                d.0[c] = mask_blend_u8(d.0[c], s[c], mask);
            }
        }
    }
}

/// Drop the alpha channel.
pub fn flatten_to_rgb(img: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, _] = img.get_pixel(x, y).0;
        Rgb([r, g, b])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
