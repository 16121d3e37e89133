//! Density-independent length units.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screen density information used to convert lengths to device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayMetrics {
    /// Device pixels per density-independent pixel.
    pub density: f32,
    /// Device pixels per scale-independent pixel (density times font scale).
    pub scaled_density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density: 1.0,
            scaled_density: 1.0,
        }
    }
}

impl DisplayMetrics {
    /// Metrics for a display with the given density and no font scaling.
    pub fn new(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
        }
    }

    /// Apply a user font scale on top of the density.
    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.scaled_density = self.density * font_scale;
        self
    }
}

/// A length as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDimension", into = "String")]
pub enum Dimension {
    /// Device pixels.
    Px(f32),
    /// Density-independent pixels.
    Dp(f32),
    /// Scale-independent pixels (text sizes).
    Sp(f32),
}

impl Dimension {
    /// Convert to device pixels.
    pub fn to_px(self, metrics: &DisplayMetrics) -> f32 {
        match self {
            Dimension::Px(v) => v,
            Dimension::Dp(v) => v * metrics.density,
            Dimension::Sp(v) => v * metrics.scaled_density,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(v) => write!(f, "{v}px"),
            Dimension::Dp(v) => write!(f, "{v}dp"),
            Dimension::Sp(v) => write!(f, "{v}sp"),
        }
    }
}

impl FromStr for Dimension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        let (number, ctor): (&str, fn(f32) -> Dimension) = if let Some(n) = lower.strip_suffix("px") {
            (n, Dimension::Px)
        } else if let Some(n) = lower.strip_suffix("dip") {
            (n, Dimension::Dp)
        } else if let Some(n) = lower.strip_suffix("dp") {
            (n, Dimension::Dp)
        } else if let Some(n) = lower.strip_suffix("sp") {
            (n, Dimension::Sp)
        } else {
            (lower.as_str(), Dimension::Px)
        };
        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| ParseError::Dimension(s.to_string()))?;
        if !value.is_finite() {
            return Err(ParseError::Dimension(s.to_string()));
        }
        Ok(ctor(value))
    }
}

impl From<Dimension> for String {
    fn from(dimension: Dimension) -> Self {
        dimension.to_string()
    }
}

/// Configuration accepts either a bare number (pixels) or a suffixed string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Number(f32),
    Text(String),
}

impl TryFrom<RawDimension> for Dimension {
    type Error = ParseError;

    fn try_from(raw: RawDimension) -> Result<Self, Self::Error> {
        match raw {
            RawDimension::Number(v) => Ok(Dimension::Px(v)),
            RawDimension::Text(s) => s.parse(),
        }
    }
}
