use std::path::PathBuf;

use image::RgbaImage;

use crate::{
    assets::{ImageInput, encode::save_cutout_png},
    foundation::error::PapercutResult,
    naming::{cutout_file_name, scene_file_name, unix_timestamp},
    scene::{
        batch::{SceneJob, SceneOutcome, SceneThreading, render_scenes},
        layout::{LayoutTable, SceneKind},
    },
    stylize::pipeline::{StylizeParams, stylize},
};

/// Inputs for [`run`].
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Stylization parameters.
    pub params: StylizeParams,
    /// Scene layouts.
    pub layouts: LayoutTable,
    /// Directory with the `Base_*` backgrounds.
    pub assets_dir: PathBuf,
    /// Where the cutout and the composites are written.
    pub out_dir: PathBuf,
    /// Scene parallelism.
    pub threading: SceneThreading,
    /// Timestamp used in artifact names; the current time when `None`.
    pub timestamp: Option<u64>,
}

impl RunOptions {
    /// Defaults with the given directories.
    pub fn new(assets_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            params: StylizeParams::default(),
            layouts: LayoutTable::canonical(),
            assets_dir: assets_dir.into(),
            out_dir: out_dir.into(),
            threading: SceneThreading::default(),
            timestamp: None,
        }
    }
}

/// What [`run`] produced.
#[derive(Debug)]
pub struct RunReport {
    /// Stylized cutout.
    pub cutout: RgbaImage,
    /// Where the cutout was saved.
    pub cutout_path: PathBuf,
    /// One entry per scene, in [`SceneKind::ALL`] order.
    pub scenes: Vec<SceneOutcome>,
}

impl RunReport {
    /// Number of scenes that rendered and saved successfully.
    pub fn succeeded(&self) -> usize {
        self.scenes.iter().filter(|o| o.result.is_ok()).count()
    }
}

/// Stylize `source`, save the cutout, then render and save every scene.
///
/// Stylization or cutout persistence failing fails the run; a scene failing is only recorded
/// in its outcome.
#[tracing::instrument(skip(source, opts), fields(source = %source.describe()))]
pub fn run(source: &ImageInput, opts: &RunOptions) -> PapercutResult<RunReport> {
    let ts = opts.timestamp.unwrap_or_else(unix_timestamp);
    let cutout = stylize(source, &opts.params)?;
    let cutout_path = opts.out_dir.join(cutout_file_name(ts));
    save_cutout_png(&cutout, &cutout_path)?;
    tracing::info!(path = %cutout_path.display(), "cutout written");

    let jobs: Vec<SceneJob> = SceneJob::from_assets(&opts.layouts, &opts.assets_dir, &SceneKind::ALL)
        .into_iter()
        .map(|job| SceneJob {
            output: Some(opts.out_dir.join(scene_file_name(job.layout.scene, ts))),
            ..job
        })
        .collect();
    let scenes = render_scenes(&cutout, &jobs, &opts.threading)?;

    Ok(RunReport {
        cutout,
        cutout_path,
        scenes,
    })
}

#[cfg(test)]
#[path = "../tests/unit/run.rs"]
mod tests;
