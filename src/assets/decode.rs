use std::path::Path;

use image::DynamicImage;

use crate::foundation::error::{PapercutError, PapercutResult};

/// Decode an in-memory encoded image (PNG, JPEG, ...). `source_id` names it in errors.
pub fn decode_image(bytes: &[u8], source_id: &str) -> PapercutResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| PapercutError::decode(source_id, e))
}

/// Read and decode an image file. The file handle is closed before returning.
pub fn open_image(path: &Path) -> PapercutResult<DynamicImage> {
    if !path.is_file() {
        return Err(PapercutError::missing(path));
    }
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PapercutError::missing(path),
        _ => PapercutError::decode(path.display().to_string(), e),
    })?;
    decode_image(&bytes, &path.display().to_string())
}

/// Normalize to 8-bit `Rgb8` or `Rgba8`, keeping whether an alpha channel is present.
pub(crate) fn to_color_layout(img: &DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img.clone(),
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
