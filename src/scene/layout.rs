use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{Opacity, Rgb8},
    foundation::error::{PapercutError, PapercutResult},
};

/// The four fixed scenes a cutout can be placed into.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Lattice window, large fixed-size cutout.
    Window,
    /// Plain wall.
    Wall,
    /// Door panel, tinted with the color-transfer blend.
    Door,
    /// Gift package, rotated print.
    Package,
}

impl SceneKind {
    /// Every scene, in render order.
    pub const ALL: [SceneKind; 4] = [Self::Window, Self::Wall, Self::Door, Self::Package];

    /// Lowercase name used in file names and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Package => "package",
        }
    }

    /// File name of the reference photograph inside an assets directory.
    pub fn background_file(self) -> &'static str {
        match self {
            Self::Window => "Base_Window.jpg",
            Self::Wall => "Base_wall.jpeg",
            Self::Door => "Base_door.jpg",
            Self::Package => "Base_package.jpg",
        }
    }
}

impl std::fmt::Display for SceneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SceneKind {
    type Err = PapercutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                PapercutError::invalid(format!(
                    "unknown scene '{s}' (expected window, wall, door or package)"
                ))
            })
    }
}

/// Largest side, in pixels, a placed cutout may be resampled to.
pub const MAX_TARGET_SIDE: u32 = 16_384;

/// Largest magnitude accepted for an absolute anchor coordinate.
pub const MAX_ANCHOR_ABS: u64 = i32::MAX as u64;

/// Largest magnitude accepted for a sizing or anchor fraction.
pub const MAX_FRACTION: f64 = 16.0;

/// How big the cutout is drawn, before any rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sizing {
    /// Exact pixel size, aspect ratio ignored.
    Fixed {
        /// Target width.
        width: u32,
        /// Target height.
        height: u32,
    },
    /// `height = int(bg_height * fraction)`, width follows the cutout's aspect ratio.
    HeightFraction {
        /// Fraction of the background height.
        fraction: f64,
    },
    /// `width = int(bg_width * fraction)`, height follows the cutout's aspect ratio.
    WidthFraction {
        /// Fraction of the background width.
        fraction: f64,
    },
}

impl Sizing {
    /// Resolve to a pixel size for a `cutout` (w, h) drawn over a `background` (w, h).
    pub fn target_size(&self, cutout: (u32, u32), background: (u32, u32)) -> PapercutResult<(u32, u32)> {
        let (cw, ch) = cutout;
        if cw == 0 || ch == 0 {
            return Err(PapercutError::invalid("cutout must be non-empty"));
        }
        let (bw, bh) = (f64::from(background.0), f64::from(background.1));
        let size = match *self {
            Self::Fixed { width, height } => (width, height),
            Self::HeightFraction { fraction } => {
                let th = (bh * fraction) as u32;
                let aspect = f64::from(cw) / f64::from(ch);
                ((f64::from(th) * aspect) as u32, th)
            }
            Self::WidthFraction { fraction } => {
                let tw = (bw * fraction) as u32;
                let aspect = f64::from(ch) / f64::from(cw);
                (tw, (f64::from(tw) * aspect) as u32)
            }
        };
        if size.0 == 0 || size.1 == 0 {
            return Err(PapercutError::invalid(format!(
                "scene sizing yields an empty cutout ({}x{}) for background {}x{}",
                size.0, size.1, background.0, background.1
            )));
        }
        if size.0 > MAX_TARGET_SIDE || size.1 > MAX_TARGET_SIDE {
            return Err(PapercutError::invalid(format!(
                "scene sizing yields {}x{}, above the {MAX_TARGET_SIDE}px limit",
                size.0, size.1
            )));
        }
        Ok(size)
    }

    fn validate(&self) -> PapercutResult<()> {
        match *self {
            Self::Fixed { width, height }
                if !(1..=MAX_TARGET_SIDE).contains(&width)
                    || !(1..=MAX_TARGET_SIDE).contains(&height) =>
            {
                Err(PapercutError::invalid(format!(
                    "fixed sizing needs width and height within [1, {MAX_TARGET_SIDE}], \
                     got {width}x{height}"
                )))
            }
            Self::HeightFraction { fraction } | Self::WidthFraction { fraction }
                if !(fraction > 0.0 && fraction <= MAX_FRACTION) =>
            {
                Err(PapercutError::invalid(format!(
                    "sizing fraction must be within (0, {MAX_FRACTION}], got {fraction}"
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Where the center of the placed cutout lands on the background.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anchor {
    /// Center in background pixels.
    Absolute {
        /// Center x.
        x: i64,
        /// Center y.
        y: i64,
    },
    /// Center as `int(bg_width * x)`, `int(bg_height * y)`.
    Fraction {
        /// Fraction of the background width.
        x: f64,
        /// Fraction of the background height.
        y: f64,
    },
}

impl Anchor {
    /// Center point on a background of `background` (w, h).
    pub fn center(&self, background: (u32, u32)) -> (i64, i64) {
        match *self {
            Self::Absolute { x, y } => (x, y),
            Self::Fraction { x, y } => (
                (f64::from(background.0) * x) as i64,
                (f64::from(background.1) * y) as i64,
            ),
        }
    }

    fn validate(&self) -> PapercutResult<()> {
        let ok = match *self {
            Self::Absolute { x, y } => {
                x.unsigned_abs() <= MAX_ANCHOR_ABS && y.unsigned_abs() <= MAX_ANCHOR_ABS
            }
            Self::Fraction { x, y } => x.abs() <= MAX_FRACTION && y.abs() <= MAX_FRACTION,
        };
        if ok {
            Ok(())
        } else {
            Err(PapercutError::invalid(format!(
                "anchor {self:?} is out of range (absolute within +/-{MAX_ANCHOR_ABS}, \
                 fractions within +/-{MAX_FRACTION})"
            )))
        }
    }
}

/// How the recolored cutout reaches the background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneBlend {
    /// Paste the flat color using the cutout alpha.
    #[default]
    AlphaPaste,
    /// Paste the background tinted toward the layout color, masked by the cutout alpha.
    ColorTransfer,
}

/// Geometry and color constants for one scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneLayout {
    /// Scene this layout belongs to.
    pub scene: SceneKind,
    /// Cutout size rule.
    pub sizing: Sizing,
    /// Center placement rule.
    pub anchor: Anchor,
    /// Counter-clockwise rotation in degrees, applied after recoloring.
    #[serde(default)]
    pub rotation_deg: f64,
    /// Recolor target.
    pub color: Rgb8,
    /// Alpha scale applied while recoloring.
    pub opacity: Opacity,
    /// Blend used for the final paste.
    #[serde(default)]
    pub blend: SceneBlend,
}

/// Red used by the window, wall and package prints (`#980015`).
pub const PAPERCUT_RED: Rgb8 = Rgb8::new(152, 0, 21);

/// Warmer red the door tint is pulled toward.
pub const DOOR_TINT: Rgb8 = Rgb8::new(223, 48, 51);

impl SceneLayout {
    /// The canonical constants for `scene`.
    pub fn canonical(scene: SceneKind) -> Self {
        const THREE_QUARTERS: Opacity = Opacity::from_const(0.75);
        const NINE_TENTHS: Opacity = Opacity::from_const(0.9);
        const PACKAGE: Opacity = Opacity::from_const(0.85);
        match scene {
            // Tuned on the 5760x3840 window photo: top-left lands on (2890, 137).
            SceneKind::Window => Self {
                scene,
                sizing: Sizing::Fixed {
                    width: 1736,
                    height: 1736,
                },
                anchor: Anchor::Absolute { x: 3758, y: 1005 },
                rotation_deg: 0.0,
                color: PAPERCUT_RED,
                opacity: THREE_QUARTERS,
                blend: SceneBlend::AlphaPaste,
            },
            SceneKind::Wall => Self {
                scene,
                sizing: Sizing::HeightFraction { fraction: 0.4948 },
                anchor: Anchor::Fraction {
                    x: 0.6667,
                    y: 0.373,
                },
                rotation_deg: 0.0,
                color: PAPERCUT_RED,
                opacity: NINE_TENTHS,
                blend: SceneBlend::AlphaPaste,
            },
            SceneKind::Door => Self {
                scene,
                sizing: Sizing::HeightFraction { fraction: 0.18 },
                anchor: Anchor::Fraction {
                    x: 0.6245,
                    y: 0.363,
                },
                rotation_deg: 0.0,
                color: DOOR_TINT,
                opacity: NINE_TENTHS,
                blend: SceneBlend::ColorTransfer,
            },
            SceneKind::Package => Self {
                scene,
                sizing: Sizing::WidthFraction { fraction: 0.25 },
                anchor: Anchor::Fraction {
                    x: 0.48,
                    y: 0.4833,
                },
                rotation_deg: 33.0,
                color: PAPERCUT_RED,
                opacity: PACKAGE,
                blend: SceneBlend::AlphaPaste,
            },
        }
    }

    /// Reject geometry that cannot be rendered.
    pub fn validate(&self) -> PapercutResult<()> {
        self.sizing.validate()?;
        self.anchor.validate()?;
        if !self.rotation_deg.is_finite() {
            return Err(PapercutError::invalid(format!(
                "{} rotation must be finite",
                self.scene
            )));
        }
        Ok(())
    }
}

/// One layout per scene. Starts from the canonical constants; overrides replace whole entries.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayoutTable {
    layouts: BTreeMap<SceneKind, SceneLayout>,
}

impl LayoutTable {
    /// The built-in table.
    pub fn canonical() -> Self {
        Self {
            layouts: SceneKind::ALL
                .into_iter()
                .map(|k| (k, SceneLayout::canonical(k)))
                .collect(),
        }
    }

    /// Canonical table with `overrides` swapped in. Each override must be keyed by its own scene.
    pub fn with_overrides(overrides: &BTreeMap<SceneKind, SceneLayout>) -> PapercutResult<Self> {
        let mut table = Self::canonical();
        for (kind, layout) in overrides {
            if layout.scene != *kind {
                return Err(PapercutError::invalid(format!(
                    "layout keyed '{kind}' declares scene '{}'",
                    layout.scene
                )));
            }
            layout.validate()?;
            table.layouts.insert(*kind, *layout);
        }
        Ok(table)
    }

    /// Layout for `scene`.
    pub fn get(&self, scene: SceneKind) -> &SceneLayout {
        // Populated for every kind by construction.
        &self.layouts[&scene]
    }

    /// All layouts in render order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneLayout> {
        self.layouts.values()
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
