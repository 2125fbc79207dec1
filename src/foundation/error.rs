use std::path::{Path, PathBuf};

/// Result alias used across the crate.
pub type PapercutResult<T> = Result<T, PapercutError>;

/// Error taxonomy for stylization, compositing and persistence.
#[derive(thiserror::Error, Debug)]
pub enum PapercutError {
    /// Input bytes or file could not be interpreted as an image.
    #[error("decode error: {source_id}: {reason}")]
    Decode {
        /// Path or other identifier of the offending input.
        source_id: String,
        /// Decoder message.
        reason: String,
    },

    /// A required file (background, cutout, source) does not exist.
    #[error("missing resource: {}", .0.display())]
    ResourceMissing(PathBuf),

    /// A numeric parameter is outside its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Encoding or writing an output artifact failed.
    #[error("write error: {}: {reason}", path.display())]
    Write {
        /// Destination that could not be written.
        path: PathBuf,
        /// Encoder or filesystem message.
        reason: String,
    },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// The upstream image generator failed or returned nothing usable.
    #[error("generation error: {0}")]
    Generation(String),

    /// Anything else, with its context chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PapercutError {
    /// Build a [`PapercutError::Decode`].
    pub fn decode(source_id: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Decode {
            source_id: source_id.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`PapercutError::ResourceMissing`].
    pub fn missing(path: impl AsRef<Path>) -> Self {
        Self::ResourceMissing(path.as_ref().to_path_buf())
    }

    /// Build a [`PapercutError::InvalidParameter`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`PapercutError::Write`].
    pub fn write(path: impl AsRef<Path>, reason: impl std::fmt::Display) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`PapercutError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PapercutError::Generation`].
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
