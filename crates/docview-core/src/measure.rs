//! Layout constraints and measured sizes.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A size constraint imposed by the parent on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The view must be exactly this many pixels.
    Exactly(u32),
    /// The view may be at most this many pixels.
    AtMost(u32),
    /// The view may be any size.
    Unspecified,
}

impl MeasureSpec {
    /// The hard upper bound, if the constraint has one.
    pub fn bound(self) -> Option<u32> {
        match self {
            MeasureSpec::Exactly(size) | MeasureSpec::AtMost(size) => Some(size),
            MeasureSpec::Unspecified => None,
        }
    }

    /// Final size for a view that would like to be `desired` pixels.
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Padding around the content area, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(inset: u32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Grow the right and bottom insets so content never overlaps a corner
    /// decoration of side `decor_size`.
    pub fn reserve_corner(self, decor_size: f32) -> Self {
        let decor = decor_size.max(0.0).ceil() as u32;
        Self {
            right: self.right.max(decor),
            bottom: self.bottom.max(decor),
            ..self
        }
    }

    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Final size of a measured view, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSize {
    pub width: u32,
    pub height: u32,
}

impl ViewSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// How a view's size on one axis is requested from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LayoutDimension {
    /// Shrink to fit the content.
    Wrap,
    /// Fill the space the parent offers.
    Match,
    /// A fixed size in device pixels.
    Exact(u32),
}

impl LayoutDimension {
    /// The constraint a frame-style parent hands to a child requesting this
    /// dimension, given the parent's own constraint on the same axis.
    pub fn child_spec(self, parent: MeasureSpec) -> MeasureSpec {
        match (self, parent) {
            (LayoutDimension::Exact(size), _) => MeasureSpec::Exactly(size),
            (LayoutDimension::Match, MeasureSpec::Exactly(size)) => MeasureSpec::Exactly(size),
            (LayoutDimension::Match, MeasureSpec::AtMost(size))
            | (LayoutDimension::Wrap, MeasureSpec::Exactly(size))
            | (LayoutDimension::Wrap, MeasureSpec::AtMost(size)) => MeasureSpec::AtMost(size),
            (_, MeasureSpec::Unspecified) => MeasureSpec::Unspecified,
        }
    }
}

impl fmt::Display for LayoutDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutDimension::Wrap => f.write_str("wrap"),
            LayoutDimension::Match => f.write_str("match"),
            LayoutDimension::Exact(size) => write!(f, "{size}"),
        }
    }
}

impl FromStr for LayoutDimension {
    type Err = ParseError;

    /// Accepts `wrap`, `match` (any case) or a non-negative pixel count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("wrap") {
            return Ok(LayoutDimension::Wrap);
        }
        if trimmed.eq_ignore_ascii_case("match") {
            return Ok(LayoutDimension::Match);
        }
        let size: i64 = trimmed
            .parse()
            .map_err(|_| ParseError::Dimension(s.to_string()))?;
        u32::try_from(size)
            .map(LayoutDimension::Exact)
            .map_err(|_| ParseError::Dimension(s.to_string()))
    }
}

impl TryFrom<String> for LayoutDimension {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LayoutDimension> for String {
    fn from(dimension: LayoutDimension) -> Self {
        dimension.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_respects_bounds() {
        assert_eq!(MeasureSpec::Exactly(100).resolve(40), 100);
        assert_eq!(MeasureSpec::Exactly(100).resolve(400), 100);
        assert_eq!(MeasureSpec::AtMost(100).resolve(40), 40);
        assert_eq!(MeasureSpec::AtMost(100).resolve(400), 100);
        assert_eq!(MeasureSpec::Unspecified.resolve(400), 400);
    }

    #[test]
    fn test_reserve_corner() {
        let insets = Insets::ZERO.reserve_corner(20.0);
        assert_eq!(insets, Insets::new(0, 0, 20, 20));

        let insets = Insets::uniform(30).reserve_corner(20.0);
        assert_eq!(insets, Insets::uniform(30));

        // Fractional decorations round up.
        let insets = Insets::ZERO.reserve_corner(10.2);
        assert_eq!(insets.right, 11);
    }

    #[test]
    fn test_parse_layout_dimension() {
        assert_eq!("wrap".parse::<LayoutDimension>(), Ok(LayoutDimension::Wrap));
        assert_eq!("WRAP".parse::<LayoutDimension>(), Ok(LayoutDimension::Wrap));
        assert_eq!("Match".parse::<LayoutDimension>(), Ok(LayoutDimension::Match));
        assert_eq!("240".parse::<LayoutDimension>(), Ok(LayoutDimension::Exact(240)));
        assert!("-5".parse::<LayoutDimension>().is_err());
        assert!("wide".parse::<LayoutDimension>().is_err());
        assert!("12.5".parse::<LayoutDimension>().is_err());
    }

    #[test]
    fn test_child_spec_under_exact_parent() {
        let parent = MeasureSpec::Exactly(500);
        assert_eq!(LayoutDimension::Wrap.child_spec(parent), MeasureSpec::AtMost(500));
        assert_eq!(LayoutDimension::Match.child_spec(parent), MeasureSpec::Exactly(500));
        assert_eq!(LayoutDimension::Exact(240).child_spec(parent), MeasureSpec::Exactly(240));
    }

    #[test]
    fn test_child_spec_under_unbounded_parent() {
        let parent = MeasureSpec::Unspecified;
        assert_eq!(LayoutDimension::Wrap.child_spec(parent), MeasureSpec::Unspecified);
        assert_eq!(LayoutDimension::Match.child_spec(parent), MeasureSpec::Unspecified);
        assert_eq!(LayoutDimension::Exact(10).child_spec(parent), MeasureSpec::Exactly(10));
        assert_eq!(
            LayoutDimension::Match.child_spec(MeasureSpec::AtMost(80)),
            MeasureSpec::AtMost(80)
        );
    }
}
