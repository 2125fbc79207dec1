//! Papercut turns generated artwork into a flat-color, transparent-background "paper cut" and
//! composites it into a fixed set of product scenes.
//!
//! # Pipeline overview
//!
//! 1. **Stylize**: `source -> RgbaImage` (desaturate, boost contrast, key near-white, recolor)
//! 2. **Place**: `cutout + SceneLayout -> placement` (size, optional rotation, anchor)
//! 3. **Composite**: `cutout + background -> RgbImage` (alpha paste, or color transfer for the door)
//! 4. **Persist** (optional): cutouts as PNG with alpha, scenes flattened to RGB
//!
//! Every public operation returns [`PapercutResult`]; inputs are never mutated.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod effects;
mod foundation;
mod generate;
mod naming;
mod run;
mod scene;
mod stylize;
mod transform;

pub use assets::ImageInput;
pub use assets::decode::{decode_image, open_image};
pub use assets::encode::{save_cutout_png, save_scene};
pub use config::PapercutConfig;
pub use effects::color_transfer::{Hsv8, color_transfer, hsv_to_rgb, rgb_to_hsv};
pub use effects::composite::{flatten_to_rgb, paste_with_alpha};
pub use foundation::core::{Opacity, Rgb8, Threshold};
pub use foundation::error::{PapercutError, PapercutResult};
pub use generate::{FileGenerator, ImageGenerator, PromptTemplate, generate_source};
pub use naming::{cutout_file_name, prompt_slug, raw_file_name, scene_file_name, unix_timestamp};
pub use run::{RunOptions, RunReport, run};
pub use scene::batch::{SceneJob, SceneOutcome, SceneThreading, render_scenes};
pub use scene::layout::{
    Anchor, DOOR_TINT, LayoutTable, MAX_ANCHOR_ABS, MAX_FRACTION, MAX_TARGET_SIDE, PAPERCUT_RED,
    SceneBlend, SceneKind, SceneLayout, Sizing,
};
pub use scene::render::{
    Placement, ScenePlan, compose_scene, plan_scene, render_scene, render_scene_with,
};
pub use stylize::ops::{
    convert_to_color, desaturate, increase_contrast, luma601, remove_background,
};
pub use stylize::pipeline::{StylePreset, StylizeParams, stylize, stylize_image};
pub use transform::resize::resize_lanczos;
pub use transform::rotate::{rotate_expand, rotated_bounds};
