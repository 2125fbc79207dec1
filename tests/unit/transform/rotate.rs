use super::*;

#[test]
fn bounds_grow_for_oblique_angles() {
    assert_eq!(rotated_bounds(250, 250, 33.0), (346, 346));
    assert_eq!(rotated_bounds(250, 250, 0.0), (250, 250));
    let (w, h) = rotated_bounds(200, 100, 33.0);
    assert!(w > 200 && h > 100);
}

#[test]
fn rotate_zero_is_identity() {
    let mut img = RgbaImage::new(3, 2);
    img.put_pixel(1, 0, Rgba([1, 2, 3, 4]));
    assert_eq!(rotate_expand(&img, 0.0).unwrap(), img);
}

#[test]
fn rotate_rejects_non_finite_angle() {
    assert!(rotate_expand(&RgbaImage::new(2, 2), f64::NAN).is_err());
}

#[test]
fn rotated_square_keeps_color_and_clears_corners() {
    let img = RgbaImage::from_pixel(100, 100, Rgba([152, 0, 21, 216]));
    let out = rotate_expand(&img, 33.0).unwrap();
    assert_eq!(out.dimensions(), rotated_bounds(100, 100, 33.0));

    let (w, h) = out.dimensions();
    assert_eq!(out.get_pixel(w / 2, h / 2), &Rgba([152, 0, 21, 216]));
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(out.get_pixel(x, y).0[3], 0, "corner ({x},{y})");
    }
}

#[test]
fn rotation_is_counter_clockwise() {
    // A marker in the top-right of the source should end up nearer the top after a CCW turn.
    let mut img = RgbaImage::new(40, 40);
    for y in 0..8 {
        for x in 32..40 {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
    let out = rotate_expand(&img, 33.0).unwrap();
    let (w, _) = out.dimensions();
    let (mut sum_x, mut sum_y, mut n) = (0u64, 0u64, 0u64);
    for (x, y, px) in out.enumerate_pixels() {
        if px.0[3] > 128 {
            sum_x += u64::from(x);
            sum_y += u64::from(y);
            n += 1;
        }
    }
    assert!(n > 0);
    let (cx, cy) = (sum_x / n, sum_y / n);
    // Unrotated, the marker centroid would sit near (44, 12) on the expanded canvas; a
    // clockwise turn would push it to about (50, 23).
    assert!(cy < 10, "centroid y {cy}");
    assert!(cx > u64::from(w) / 2 && cx < 40, "centroid x {cx}");
}
