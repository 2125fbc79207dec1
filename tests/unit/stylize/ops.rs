use image::{Rgb, RgbImage, Rgba};

use super::*;

fn rgba_from(pixels: &[[u8; 4]], width: u32) -> RgbaImage {
    let height = pixels.len() as u32 / width;
    RgbaImage::from_raw(width, height, pixels.concat()).unwrap()
}

#[test]
fn luma_of_primaries_and_grays() {
    assert_eq!(luma601(255, 0, 0), 76);
    assert_eq!(luma601(0, 255, 0), 150);
    assert_eq!(luma601(0, 0, 255), 29);
    for g in [0u8, 1, 77, 128, 254, 255] {
        assert_eq!(luma601(g, g, g), g);
    }
}

#[test]
fn desaturate_zeroes_saturation_and_keeps_layout() {
    let mut rgb = RgbImage::new(3, 2);
    for (i, px) in rgb.pixels_mut().enumerate() {
        *px = Rgb([(i * 40) as u8, 255 - (i * 30) as u8, (i * 7) as u8]);
    }
    let out = desaturate(&DynamicImage::ImageRgb8(rgb.clone()));
    let DynamicImage::ImageRgb8(out) = out else {
        panic!("rgb input must stay rgb");
    };
    assert_eq!(out.dimensions(), rgb.dimensions());
    for (src, dst) in rgb.pixels().zip(out.pixels()) {
        let [r, g, b] = dst.0;
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(r, luma601(src.0[0], src.0[1], src.0[2]));
    }
}

#[test]
fn desaturate_preserves_alpha() {
    let img = rgba_from(&[[255, 0, 0, 17], [0, 0, 255, 0]], 2);
    let DynamicImage::ImageRgba8(out) = desaturate(&DynamicImage::ImageRgba8(img)) else {
        panic!("rgba input must stay rgba");
    };
    assert_eq!(out.get_pixel(0, 0), &Rgba([76, 76, 76, 17]));
    assert_eq!(out.get_pixel(1, 0), &Rgba([29, 29, 29, 0]));
}

#[test]
fn contrast_scales_deviation_from_mean() {
    // Mean luma of {100, 200} is 150.
    let img = RgbImage::from_raw(2, 1, vec![100, 100, 100, 200, 200, 200]).unwrap();
    let out = increase_contrast(&DynamicImage::ImageRgb8(img), 2.0)
        .unwrap()
        .to_rgb8();
    assert_eq!(out.get_pixel(0, 0), &Rgb([50, 50, 50]));
    assert_eq!(out.get_pixel(1, 0), &Rgb([250, 250, 250]));
}

#[test]
fn contrast_clamps_and_keeps_alpha() {
    let img = rgba_from(&[[10, 10, 10, 255], [240, 240, 240, 99]], 2);
    let out = increase_contrast(&DynamicImage::ImageRgba8(img), 10.0)
        .unwrap()
        .to_rgba8();
    assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    assert_eq!(out.get_pixel(1, 0), &Rgba([255, 255, 255, 99]));
}

#[test]
fn contrast_factor_zero_flattens_to_mean() {
    let img = RgbImage::from_raw(2, 1, vec![0, 0, 0, 101, 101, 101]).unwrap();
    let out = increase_contrast(&DynamicImage::ImageRgb8(img), 0.0)
        .unwrap()
        .to_rgb8();
    // 50.5 rounds half-up to 51.
    assert!(out.pixels().all(|p| p.0 == [51, 51, 51]));
}

#[test]
fn contrast_rejects_non_finite_factor() {
    let img = DynamicImage::ImageRgb8(RgbImage::new(1, 1));
    assert!(increase_contrast(&img, f32::NAN).is_err());
    assert!(increase_contrast(&img, f32::INFINITY).is_err());
}

#[test]
fn remove_background_is_strict_per_channel() {
    let t = Threshold::new(230).unwrap();
    let img = rgba_from(
        &[
            [231, 231, 231, 255],
            [230, 230, 230, 255],
            [255, 255, 230, 200],
            [231, 240, 250, 7],
        ],
        4,
    );
    let out = remove_background(&DynamicImage::ImageRgba8(img), t);
    assert_eq!(out.get_pixel(0, 0).0[3], 0);
    assert_eq!(out.get_pixel(1, 0).0[3], 255);
    assert_eq!(out.get_pixel(2, 0).0[3], 200);
    assert_eq!(out.get_pixel(3, 0).0[3], 0);
    // Color channels are untouched by keying.
    assert_eq!(&out.get_pixel(0, 0).0[..3], &[231, 231, 231]);
}

#[test]
fn remove_background_threshold_255_keys_nothing() {
    let img = RgbImage::from_raw(1, 1, vec![255, 255, 255]).unwrap();
    let out = remove_background(&DynamicImage::ImageRgb8(img), Threshold::new(255).unwrap());
    assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
}

#[test]
fn remove_background_synthesizes_opaque_alpha() {
    let img = RgbImage::from_raw(2, 1, vec![0, 0, 0, 250, 250, 250]).unwrap();
    let out = remove_background(&DynamicImage::ImageRgb8(img), Threshold::DEFAULT);
    assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    assert_eq!(out.get_pixel(1, 0), &Rgba([250, 250, 250, 0]));
}

#[test]
fn convert_to_color_full_opacity() {
    let img = rgba_from(&[[12, 34, 56, 255], [1, 2, 3, 40], [200, 200, 200, 0]], 3);
    let out = convert_to_color(
        &DynamicImage::ImageRgba8(img),
        Rgb8::new(255, 0, 0),
        Opacity::OPAQUE,
    );
    assert_eq!(out.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    assert_eq!(out.get_pixel(1, 0), &Rgba([255, 0, 0, 40]));
    assert_eq!(out.get_pixel(2, 0), &Rgba([0, 0, 0, 0]));
}

#[test]
fn convert_to_color_half_opacity_truncates() {
    let img = rgba_from(&[[0, 0, 0, 255], [0, 0, 0, 3], [0, 0, 0, 1]], 3);
    let out = convert_to_color(
        &DynamicImage::ImageRgba8(img),
        Rgb8::new(152, 0, 21),
        Opacity::new(0.5).unwrap(),
    );
    assert_eq!(out.get_pixel(0, 0), &Rgba([152, 0, 21, 127]));
    assert_eq!(out.get_pixel(1, 0), &Rgba([152, 0, 21, 1]));
    // A foreground pixel may scale down to alpha 0 but still carries the color.
    assert_eq!(out.get_pixel(2, 0), &Rgba([152, 0, 21, 0]));
}
