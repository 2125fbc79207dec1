use serde::{Deserialize, Serialize};

use crate::foundation::error::{PapercutError, PapercutResult};

pub use kurbo::{Affine, Point, Rect};

/// Straight (non-premultiplied) RGB color used as a recolor target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> PapercutResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PapercutError::invalid(format!(
                "color '{s}' must be 6 hex digits (#rrggbb)"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| PapercutError::invalid(format!("color '{s}' is not valid hex")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub(crate) fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::str::FromStr for Rgb8 {
    type Err = PapercutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: u8, g: u8, b: u8 },
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Self::new(r, g, b)),
            Repr::Arr([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

/// Alpha scale factor in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Opacity(f64);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Compile-time constructor for literals; panics during const evaluation when out of range.
    pub(crate) const fn from_const(v: f64) -> Self {
        assert!(v >= 0.0 && v <= 1.0, "opacity literal outside [0.0, 1.0]");
        Self(v)
    }

    /// Rejects NaN and values outside `[0.0, 1.0]`.
    pub fn new(v: f64) -> PapercutResult<Self> {
        if !(0.0..=1.0).contains(&v) {
            return Err(PapercutError::invalid(format!(
                "opacity must be within [0.0, 1.0], got {v}"
            )));
        }
        Ok(Self(v))
    }

    /// Raw factor.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Scale an 8-bit alpha, truncating toward zero like an 8-bit cast.
    pub fn scale_alpha(self, a: u8) -> u8 {
        (f64::from(a) * self.0) as u8
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl TryFrom<f64> for Opacity {
    type Error = PapercutError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<Opacity> for f64 {
    fn from(o: Opacity) -> Self {
        o.0
    }
}

/// Background keying threshold in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Threshold(u8);

impl Threshold {
    /// Default used by the standalone keying step.
    pub const DEFAULT: Self = Self(240);

    /// Rejects values outside `[0, 255]`.
    pub fn new(v: i64) -> PapercutResult<Self> {
        u8::try_from(v).map(Self).map_err(|_| {
            PapercutError::invalid(format!("threshold must be within [0, 255], got {v}"))
        })
    }

    /// Raw threshold.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Threshold {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

impl TryFrom<i64> for Threshold {
    type Error = PapercutError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<Threshold> for i64 {
    fn from(t: Threshold) -> Self {
        i64::from(t.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
