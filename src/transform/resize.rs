use image::{RgbaImage, imageops::FilterType};

use crate::foundation::error::{PapercutError, PapercutResult};

/// Lanczos (3-lobe) resample to exactly `width`x`height`.
pub fn resize_lanczos(img: &RgbaImage, width: u32, height: u32) -> PapercutResult<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(PapercutError::invalid(format!(
            "resize target must be non-empty, got {width}x{height}"
        )));
    }
    if img.width() == 0 || img.height() == 0 {
        return Err(PapercutError::invalid("cannot resize an empty image"));
    }
    if img.dimensions() == (width, height) {
        return Ok(img.clone());
    }
    Ok(image::imageops::resize(
        img,
        width,
        height,
        FilterType::Lanczos3,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/resize.rs"]
mod tests;
