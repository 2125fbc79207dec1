use std::path::Path;

use image::{Rgba, RgbImage, RgbaImage};

use crate::{
    assets::{ImageInput, encode::save_scene},
    effects::{
        color_transfer::color_transfer,
        composite::{clip_placement, flatten_to_rgb, paste_with_alpha},
    },
    foundation::error::PapercutResult,
    scene::layout::{SceneBlend, SceneKind, SceneLayout},
    stylize::ops::recolor_in_place,
    transform::{
        resize::resize_lanczos,
        rotate::{rotate_expand, rotated_bounds},
    },
};

/// Final footprint of the placed cutout on the background. May extend past any edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Left edge in background pixels.
    pub x: i64,
    /// Top edge in background pixels.
    pub y: i64,
    /// Width after resize and rotation.
    pub width: u32,
    /// Height after resize and rotation.
    pub height: u32,
}

/// Geometry resolved for one cutout over one background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenePlan {
    /// Size the cutout is resampled to before rotation.
    pub resized: (u32, u32),
    /// Where the (possibly rotated) cutout lands.
    pub placement: Placement,
}

/// Resolve sizing, rotation and anchoring without touching pixels.
///
/// The anchor is the center of the final footprint, so rotated layouts center the
/// expanded canvas rather than the pre-rotation rectangle.
pub fn plan_scene(
    layout: &SceneLayout,
    cutout: (u32, u32),
    background: (u32, u32),
) -> PapercutResult<ScenePlan> {
    layout.validate()?;
    let resized = layout.sizing.target_size(cutout, background)?;
    let (width, height) = if layout.rotation_deg == 0.0 {
        resized
    } else {
        rotated_bounds(resized.0, resized.1, layout.rotation_deg)
    };
    let (cx, cy) = layout.anchor.center(background);
    Ok(ScenePlan {
        resized,
        placement: Placement {
            x: cx.saturating_sub(i64::from(width / 2)),
            y: cy.saturating_sub(i64::from(height / 2)),
            width,
            height,
        },
    })
}

/// Render `cutout` into `scene` using the canonical layout.
pub fn render_scene(
    scene: SceneKind,
    cutout: &ImageInput,
    background: &ImageInput,
    output: Option<&Path>,
) -> PapercutResult<RgbImage> {
    render_scene_with(&SceneLayout::canonical(scene), cutout, background, output)
}

/// Render `cutout` over `background` following `layout`, optionally writing the result.
#[tracing::instrument(
    skip(layout, cutout, background),
    fields(scene = %layout.scene, background = %background.describe())
)]
pub fn render_scene_with(
    layout: &SceneLayout,
    cutout: &ImageInput,
    background: &ImageInput,
    output: Option<&Path>,
) -> PapercutResult<RgbImage> {
    let result = load_and_compose(layout, cutout, background, output);
    if let Err(e) = &result {
        tracing::warn!(error = %e, "scene render failed");
    }
    result
}

fn load_and_compose(
    layout: &SceneLayout,
    cutout: &ImageInput,
    background: &ImageInput,
    output: Option<&Path>,
) -> PapercutResult<RgbImage> {
    let cutout = cutout.resolve()?.to_rgba8();
    let background = background.resolve()?.to_rgb8();
    let composed = compose_scene(layout, &cutout, &background)?;
    if let Some(path) = output {
        save_scene(&composed, path)?;
        tracing::info!(path = %path.display(), "scene written");
    }
    Ok(composed)
}

/// Pixel work for one scene: resize, recolor, rotate, then blend onto a copy of `background`.
pub fn compose_scene(
    layout: &SceneLayout,
    cutout: &RgbaImage,
    background: &RgbImage,
) -> PapercutResult<RgbImage> {
    let plan = plan_scene(layout, cutout.dimensions(), background.dimensions())?;
    let mut placed = resize_lanczos(cutout, plan.resized.0, plan.resized.1)?;
    recolor_in_place(&mut placed, layout.color, layout.opacity);
    if layout.rotation_deg != 0.0 {
        placed = rotate_expand(&placed, layout.rotation_deg)?;
    }

    let Placement { x, y, .. } = plan.placement;
    let mut canvas = RgbaImage::from_fn(background.width(), background.height(), |px, py| {
        let [r, g, b] = background.get_pixel(px, py).0;
        Rgba([r, g, b, 255])
    });
    match layout.blend {
        SceneBlend::AlphaPaste => paste_with_alpha(&mut canvas, &placed, x, y),
        SceneBlend::ColorTransfer => {
            if let Some(tinted) = tinted_footprint(layout, background, &placed, x, y)? {
                paste_with_alpha(&mut canvas, &tinted, x, y);
            }
        }
    }
    tracing::debug!(
        scene = %layout.scene,
        x,
        y,
        width = placed.width(),
        height = placed.height(),
        "cutout placed"
    );
    Ok(flatten_to_rgb(&canvas))
}

/// Background under the cutout footprint, tinted toward the layout color and carrying the
/// cutout's alpha. `None` when the footprint misses the background entirely.
fn tinted_footprint(
    layout: &SceneLayout,
    background: &RgbImage,
    placed: &RgbaImage,
    x: i64,
    y: i64,
) -> PapercutResult<Option<RgbaImage>> {
    let Some((sx0, sy0, dx0, dy0, w, h)) = clip_placement(
        background.width(),
        background.height(),
        placed.width(),
        placed.height(),
        x,
        y,
    ) else {
        return Ok(None);
    };

    let region = image::imageops::crop_imm(background, dx0, dy0, w, h).to_image();
    let tinted = color_transfer(&region, layout.color)?;

    let mut overlay = RgbaImage::new(placed.width(), placed.height());
    for (col, row, px) in tinted.enumerate_pixels() {
        let [r, g, b] = px.0;
        let a = placed.get_pixel(sx0 + col, sy0 + row).0[3];
        overlay.put_pixel(sx0 + col, sy0 + row, Rgba([r, g, b, a]));
    }
    Ok(Some(overlay))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render.rs"]
mod tests;
