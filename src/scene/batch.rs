use std::path::PathBuf;

use image::{DynamicImage, RgbImage, RgbaImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    assets::ImageInput,
    foundation::error::{PapercutError, PapercutResult},
    scene::{
        layout::{LayoutTable, SceneKind, SceneLayout},
        render::render_scene_with,
    },
};

/// One scene to render for a shared cutout.
#[derive(Clone, Debug)]
pub struct SceneJob {
    /// Layout constants.
    pub layout: SceneLayout,
    /// Background photograph.
    pub background: ImageInput,
    /// Where to write the composite, if anywhere.
    pub output: Option<PathBuf>,
}

impl SceneJob {
    /// Jobs for every scene in `table`, with backgrounds taken from `assets_dir`.
    pub fn from_assets(
        table: &LayoutTable,
        assets_dir: &std::path::Path,
        scenes: &[SceneKind],
    ) -> Vec<Self> {
        scenes
            .iter()
            .map(|&kind| Self {
                layout: *table.get(kind),
                background: ImageInput::Path(assets_dir.join(kind.background_file())),
                output: None,
            })
            .collect()
    }
}

/// Result of one [`SceneJob`]. A failure here does not affect its siblings.
#[derive(Debug)]
pub struct SceneOutcome {
    /// Which scene.
    pub scene: SceneKind,
    /// Output path requested by the job.
    pub output: Option<PathBuf>,
    /// Composite or the reason it could not be produced.
    pub result: PapercutResult<RgbImage>,
}

/// Parallelism knobs for [`render_scenes`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneThreading {
    /// Render jobs on a rayon pool instead of sequentially.
    pub parallel: bool,
    /// Pool size; `None` lets rayon decide. Must be >= 1 when set.
    pub threads: Option<usize>,
}

/// Render every job against the same cutout. Outcomes keep job order.
///
/// Only pool construction fails the whole batch; per-scene errors are reported in each outcome.
#[tracing::instrument(skip(cutout, jobs), fields(jobs = jobs.len()))]
pub fn render_scenes(
    cutout: &RgbaImage,
    jobs: &[SceneJob],
    threading: &SceneThreading,
) -> PapercutResult<Vec<SceneOutcome>> {
    let cutout = ImageInput::Image(DynamicImage::ImageRgba8(cutout.clone()));
    let render_one = |job: &SceneJob| SceneOutcome {
        scene: job.layout.scene,
        output: job.output.clone(),
        result: render_scene_with(
            &job.layout,
            &cutout,
            &job.background,
            job.output.as_deref(),
        ),
    };

    let outcomes: Vec<SceneOutcome> = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| jobs.par_iter().map(render_one).collect())
    } else {
        jobs.iter().map(render_one).collect()
    };

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    tracing::info!(
        rendered = outcomes.len() - failed,
        failed,
        "scene batch finished"
    );
    Ok(outcomes)
}

fn build_thread_pool(threads: Option<usize>) -> PapercutResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PapercutError::invalid(
            "scene threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PapercutError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/batch.rs"]
mod tests;
