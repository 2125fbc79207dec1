//! Placing a cutout into the fixed product scenes.
//!
//! Each scene is described by a [`layout::SceneLayout`]: a sizing rule, an anchor for the
//! center of the placed cutout, an optional rotation, and the color and opacity the cutout is
//! repainted with. [`render::compose_scene`] does the pixel work; [`batch::render_scenes`] fans
//! several scenes out over one cutout.

pub(crate) mod batch;
pub(crate) mod layout;
pub(crate) mod render;
