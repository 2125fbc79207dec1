use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use image::DynamicImage;

use crate::foundation::error::PapercutResult;

pub(crate) mod decode;
pub(crate) mod encode;

/// Image source accepted at the API boundary: a file to decode, or pixels already in memory.
#[derive(Clone, Debug)]
pub enum ImageInput {
    /// Decode from this file.
    Path(PathBuf),
    /// Use this decoded image.
    Image(DynamicImage),
}

impl ImageInput {
    /// Resolve to pixels. Borrows for [`ImageInput::Image`], decodes for [`ImageInput::Path`].
    pub fn resolve(&self) -> PapercutResult<Cow<'_, DynamicImage>> {
        match self {
            Self::Path(path) => decode::open_image(path).map(Cow::Owned),
            Self::Image(img) => Ok(Cow::Borrowed(img)),
        }
    }

    /// Human-readable identifier for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Image(img) => format!("<in-memory {}x{}>", img.width(), img.height()),
        }
    }
}

impl From<PathBuf> for ImageInput {
    fn from(p: PathBuf) -> Self {
        Self::Path(p)
    }
}

impl From<&Path> for ImageInput {
    fn from(p: &Path) -> Self {
        Self::Path(p.to_path_buf())
    }
}

impl From<DynamicImage> for ImageInput {
    fn from(img: DynamicImage) -> Self {
        Self::Image(img)
    }
}

impl From<image::RgbaImage> for ImageInput {
    fn from(img: image::RgbaImage) -> Self {
        Self::Image(DynamicImage::ImageRgba8(img))
    }
}

impl From<image::RgbImage> for ImageInput {
    fn from(img: image::RgbImage) -> Self {
        Self::Image(DynamicImage::ImageRgb8(img))
    }
}
