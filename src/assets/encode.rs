use std::path::Path;

use image::{ImageFormat, RgbImage, RgbaImage};

use crate::foundation::error::{PapercutError, PapercutResult};

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> PapercutResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            PapercutError::write(path, format!("create directory '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

/// Persist a cutout as PNG, alpha included.
pub fn save_cutout_png(img: &RgbaImage, path: &Path) -> PapercutResult<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| PapercutError::write(path, e))
}

/// Persist a composited scene (RGB, no alpha). The format follows the extension; unknown
/// extensions are written as PNG.
pub fn save_scene(img: &RgbImage, path: &Path) -> PapercutResult<()> {
    ensure_parent_dir(path)?;
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    img.save_with_format(path, format)
        .map_err(|e| PapercutError::write(path, e))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
