//! Seam for the upstream text-to-image generator.

use std::path::PathBuf;

use image::DynamicImage;

use crate::{
    assets::decode::open_image,
    foundation::error::{PapercutError, PapercutResult},
};

/// Wraps a subject prompt in the fixed papercut art direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Placeholder replaced by the subject prompt.
    pub const PLACEHOLDER: &'static str = "{prompt}";

    /// Template text with one [`PromptTemplate::PLACEHOLDER`].
    pub fn new(template: impl Into<String>) -> PapercutResult<Self> {
        let template = template.into();
        if template.matches(Self::PLACEHOLDER).count() != 1 {
            return Err(PapercutError::invalid(format!(
                "prompt template must contain '{}' exactly once",
                Self::PLACEHOLDER
            )));
        }
        Ok(Self { template })
    }

    /// Substitute `prompt`. Empty or whitespace-only prompts are rejected.
    pub fn compose(&self, prompt: &str) -> PapercutResult<String> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(PapercutError::invalid("prompt must not be empty"));
        }
        Ok(self.template.replace(Self::PLACEHOLDER, prompt))
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: "A vibrant red Chinese paper, {prompt}, complex Chinese patterns, stand \
                       proudly among the swirling clouds and stylized clouds. The background is \
                       pure white, emphasizing a bold traditional design"
                .to_string(),
        }
    }
}

/// Produces a source image for a fully composed prompt.
pub trait ImageGenerator {
    /// Generate one image. Failures are [`PapercutError::Generation`] or a decode error.
    fn generate(&self, prompt: &str) -> PapercutResult<DynamicImage>;
}

/// Compose `prompt` with `template` and ask `generator` for the image.
#[tracing::instrument(skip(generator, template))]
pub fn generate_source<G: ImageGenerator + ?Sized>(
    generator: &G,
    template: &PromptTemplate,
    prompt: &str,
) -> PapercutResult<DynamicImage> {
    let full = template.compose(prompt)?;
    let img = generator.generate(&full)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(PapercutError::generation("generator returned an empty image"));
    }
    tracing::debug!(width = img.width(), height = img.height(), "source generated");
    Ok(img)
}

/// Serves a pre-rendered image from disk, ignoring the prompt text.
#[derive(Clone, Debug)]
pub struct FileGenerator {
    path: PathBuf,
}

impl FileGenerator {
    /// Generator that always returns the image at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageGenerator for FileGenerator {
    fn generate(&self, prompt: &str) -> PapercutResult<DynamicImage> {
        if prompt.trim().is_empty() {
            return Err(PapercutError::invalid("prompt must not be empty"));
        }
        open_image(&self.path)
    }
}

#[cfg(test)]
#[path = "../tests/unit/generate/generate.rs"]
mod tests;
