//! Drawing seam between the widget and a rendering host.

use crate::text::TextBlock;
use kurbo::{BezPath, Point, Rect, Stroke};
use peniko::Color;

/// Drawing operations a host must provide to render a DocumentView.
///
/// Coordinates are device pixels relative to the view's top-left corner.
/// Operations composite in call order.
pub trait DrawTarget {
    /// Start an offscreen layer covering `bounds`. Clears inside the layer
    /// only affect what was drawn into the same layer.
    fn push_layer(&mut self, bounds: Rect);

    /// Composite the most recent layer onto its parent.
    fn pop_layer(&mut self);

    /// Clear the area covered by `path` to fully transparent.
    fn clear_path(&mut self, path: &BezPath);

    /// Fill `path` with a solid color (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke `path` with a solid color.
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color);

    /// Draw a wrapped text block with its top-left corner at `origin`.
    fn draw_text(&mut self, block: &TextBlock, origin: Point, color: Color);
}
