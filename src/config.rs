use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{PapercutError, PapercutResult},
    scene::layout::{LayoutTable, SceneKind, SceneLayout},
    stylize::pipeline::StylizeParams,
};

/// JSON configuration shared by the library entry points and the CLI.
///
/// ```json
/// {
///   "stylize": { "contrast": 10.0, "threshold": 200 },
///   "scenes": { "wall": { "scene": "wall", ... } },
///   "assets_dir": "assets"
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PapercutConfig {
    /// Stylization parameters; missing fields take the interactive preset.
    pub stylize: StylizeParams,
    /// Whole-entry replacements for the canonical scene layouts.
    pub scenes: BTreeMap<SceneKind, SceneLayout>,
    /// Directory holding the `Base_*` background photographs.
    pub assets_dir: Option<PathBuf>,
}

impl PapercutConfig {
    /// Parse and validate a config file.
    pub fn from_path(path: &Path) -> PapercutResult<Self> {
        if !path.is_file() {
            return Err(PapercutError::missing(path));
        }
        let f = File::open(path)
            .map_err(|e| PapercutError::config(format!("open '{}': {e}", path.display())))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| PapercutError::config(format!("parse '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate config JSON held in memory.
    pub fn from_json_str(s: &str) -> PapercutResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| PapercutError::config(format!("parse: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Semantic checks not covered by deserialization.
    pub fn validate(&self) -> PapercutResult<()> {
        self.stylize.validate()?;
        self.layout_table().map(|_| ())
    }

    /// Canonical layouts with this config's overrides applied.
    pub fn layout_table(&self) -> PapercutResult<LayoutTable> {
        LayoutTable::with_overrides(&self.scenes)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
