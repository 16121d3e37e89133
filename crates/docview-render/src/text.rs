//! Parley-backed text metrics.

use docview_core::{MonospaceMeasurer, TextBlock, TextLine, TextMeasurer};
use parley::{Alignment, AlignmentOptions, FontContext, Layout, LayoutContext, StyleProperty};
use peniko::Brush;

/// Lays out text with Parley using the system font collection.
///
/// Without a usable font both widths and wrapping come from a fixed-advance
/// measurer, so measurement stays consistent on font-less hosts.
pub struct ParleyTextEngine {
    font_cx: FontContext,
    layout_cx: LayoutContext<Brush>,
    fallback: MonospaceMeasurer,
}

impl Default for ParleyTextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyTextEngine {
    pub fn new() -> Self {
        Self {
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
            fallback: MonospaceMeasurer::new(),
        }
    }

    /// Shape `text` at `size` pixels, breaking lines at `max_width` if given.
    pub fn layout(&mut self, text: &str, size: f32, max_width: Option<f32>) -> Layout<Brush> {
        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(size));
        let mut layout = builder.build(text);
        layout.break_all_lines(max_width);
        layout.align(max_width, Alignment::Start, AlignmentOptions::default());
        layout
    }
}

impl TextMeasurer for ParleyTextEngine {
    fn line_width(&mut self, text: &str, size: f32) -> f32 {
        if text.is_empty() || size <= 0.0 {
            return 0.0;
        }
        let layout = self.layout(text, size, None);
        if has_glyph_extent(&layout) {
            layout.width()
        } else {
            self.fallback.line_width(text, size)
        }
    }

    fn wrap(&mut self, text: &str, size: f32, max_width: u32) -> TextBlock {
        if max_width == 0 || size <= 0.0 {
            return TextBlock::empty();
        }

        let layout = self.layout(text, size, Some(max_width as f32));
        if !text.trim().is_empty() && !has_glyph_extent(&layout) {
            log::debug!("No font for {:?}, using fixed advances", text);
            return self.fallback.wrap(text, size, max_width);
        }

        let lines: Vec<TextLine> = layout
            .lines()
            .map(|line| {
                let metrics = line.metrics();
                let range = line.text_range();
                TextLine {
                    text: text[range].trim_end_matches(['\n', '\r']).to_string(),
                    top: metrics.min_coord,
                    baseline: metrics.baseline,
                    width: metrics.advance,
                    height: metrics.max_coord - metrics.min_coord,
                }
            })
            .collect();

        TextBlock::new(max_width, size, lines)
    }
}

/// Whether shaping produced lines with a real width, i.e. a font was found.
fn has_glyph_extent(layout: &Layout<Brush>) -> bool {
    layout.lines().next().is_some() && layout.width() > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_width() {
        let mut engine = ParleyTextEngine::new();
        assert_eq!(engine.line_width("", 16.0), 0.0);
        assert_eq!(engine.line_width("abc", 0.0), 0.0);
    }

    #[test]
    fn test_non_empty_text_has_width() {
        let mut engine = ParleyTextEngine::new();
        assert!(engine.line_width("Quarterly report", 16.0) > 0.0);
    }

    #[test]
    fn test_zero_width_wrap_is_empty() {
        let mut engine = ParleyTextEngine::new();
        let block = engine.wrap("hello", 16.0, 0);
        assert!(block.is_empty());
        assert_eq!(block.height(), 0);
    }

    #[test]
    fn test_wrap_keeps_requested_width() {
        let mut engine = ParleyTextEngine::new();
        let block = engine.wrap("hello world", 16.0, 200);
        assert_eq!(block.width(), 200);
        assert_eq!(block.font_size(), 16.0);
    }

    #[test]
    fn test_wrap_breaks_narrow_text() {
        let mut engine = ParleyTextEngine::new();
        let text = "one two three four five";
        let single = engine.wrap(text, 16.0, 1000);
        let block = engine.wrap(text, 16.0, 60);
        assert!(block.lines().len() > 1);
        assert!(block.height() > 0);
        assert!(block.height() > single.height());
    }
}
