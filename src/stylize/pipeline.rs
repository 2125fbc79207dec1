use image::{DynamicImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::{
    assets::ImageInput,
    foundation::core::{Opacity, Rgb8, Threshold},
    foundation::error::{PapercutError, PapercutResult},
    stylize::ops,
};

/// Named (contrast, threshold) pairs used by the two entry flows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreset {
    /// Generate-and-preview flow: contrast 3.0, threshold 230.
    #[default]
    Interactive,
    /// Offline batch flow: contrast 10.0, threshold 200.
    Batch,
}

/// Parameters for [`stylize`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylizeParams {
    /// Contrast factor applied after desaturation.
    pub contrast: f32,
    /// Near-white keying threshold.
    pub threshold: Threshold,
    /// Flat foreground color.
    pub color: Rgb8,
    /// Foreground alpha scale.
    pub opacity: Opacity,
}

impl StylizeParams {
    /// Pure red at full opacity.
    pub const DEFAULT_COLOR: Rgb8 = Rgb8::new(255, 0, 0);

    /// Parameters for a named preset.
    pub fn preset(preset: StylePreset) -> Self {
        let (contrast, threshold) = match preset {
            StylePreset::Interactive => (3.0, 230),
            StylePreset::Batch => (10.0, 200),
        };
        Self {
            contrast,
            threshold: Threshold::from(threshold),
            color: Self::DEFAULT_COLOR,
            opacity: Opacity::OPAQUE,
        }
    }

    /// Check values that the type system does not already guarantee.
    pub fn validate(&self) -> PapercutResult<()> {
        if !self.contrast.is_finite() {
            return Err(PapercutError::invalid(format!(
                "stylize contrast must be finite, got {}",
                self.contrast
            )));
        }
        Ok(())
    }
}

impl Default for StylizeParams {
    fn default() -> Self {
        Self::preset(StylePreset::Interactive)
    }
}

/// Decode `source` and run the full papercut pipeline on it.
#[tracing::instrument(skip(source), fields(source = %source.describe()))]
pub fn stylize(source: &ImageInput, params: &StylizeParams) -> PapercutResult<RgbaImage> {
    let img = source.resolve()?;
    stylize_image(&img, params)
}

/// desaturate -> increase contrast -> key near-white -> flat recolor.
pub fn stylize_image(img: &DynamicImage, params: &StylizeParams) -> PapercutResult<RgbaImage> {
    params.validate()?;
    let gray = ops::desaturate(img);
    let contrasted = ops::increase_contrast(&gray, params.contrast)?;
    let mut keyed = ops::remove_background(&contrasted, params.threshold);
    ops::recolor_in_place(&mut keyed, params.color, params.opacity);
    tracing::debug!(
        width = keyed.width(),
        height = keyed.height(),
        "stylized cutout"
    );
    Ok(keyed)
}

#[cfg(test)]
#[path = "../../tests/unit/stylize/pipeline.rs"]
mod tests;
