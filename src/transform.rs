//! Geometric helpers: resampling and rotation.

pub(crate) mod resize;
pub(crate) mod rotate;
