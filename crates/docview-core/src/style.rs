//! Visual style and text content of a DocumentView.

use crate::color::Argb;

/// Border and corner decoration paint state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualStyle {
    /// Border stroke color.
    pub border_color: Argb,
    /// Border stroke width in device pixels (never negative).
    pub border_width: f32,
    /// Fill color of the corner triangle.
    pub decor_color: Argb,
    /// Side length of the corner triangle in device pixels (never negative).
    pub decor_size: f32,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            border_color: Argb::BLACK,
            border_width: 1.0,
            decor_color: Argb::GRAY,
            decor_size: 20.0,
        }
    }
}

/// One line of text content: the title or the subtitle.
///
/// An empty string means the field is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub text: String,
    pub color: Argb,
    /// Text size in device pixels.
    pub size: f32,
}

impl TextField {
    pub fn new(text: impl Into<String>, color: Argb, size: f32) -> Self {
        Self {
            text: text.into(),
            color,
            size: non_negative(size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Clamp a length to `>= 0`, mapping NaN to `0`.
pub(crate) fn non_negative(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_clamps_size() {
        let field = TextField::new("a", Argb::BLACK, -3.0);
        assert_eq!(field.size, 0.0);
        let field = TextField::new("a", Argb::BLACK, f32::NAN);
        assert_eq!(field.size, 0.0);
    }

    #[test]
    fn test_empty_text_is_absent() {
        assert!(TextField::new("", Argb::BLACK, 16.0).is_empty());
        assert!(!TextField::new(" ", Argb::BLACK, 16.0).is_empty());
    }
}
