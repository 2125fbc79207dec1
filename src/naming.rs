use std::time::{SystemTime, UNIX_EPOCH};

use crate::scene::layout::SceneKind;

/// Seconds since the Unix epoch; 0 if the clock is before it.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// `papercut_<ts>.png`
pub fn cutout_file_name(ts: u64) -> String {
    format!("papercut_{ts}.png")
}

/// `<scene>_<ts>.png`
pub fn scene_file_name(scene: SceneKind, ts: u64) -> String {
    format!("{}_{ts}.png", scene.name())
}

/// `flux_<slug>_<ts>.png` for a raw generated image.
pub fn raw_file_name(prompt: &str, ts: u64) -> String {
    format!("flux_{}_{ts}.png", prompt_slug(prompt))
}

/// First 20 characters, keeping only alphanumerics, space, `-` and `_`; trimmed, spaces become `_`.
pub fn prompt_slug(prompt: &str) -> String {
    let kept: String = prompt
        .chars()
        .take(20)
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim().replace(' ', "_")
}

#[cfg(test)]
#[path = "../tests/unit/naming.rs"]
mod tests;
