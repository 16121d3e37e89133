//! Renderer trait abstraction.

use docview_core::{DocumentView, ViewSize};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The view to draw. Must already be measured.
    pub view: &'a mut DocumentView,
    /// Top-left corner of the view in physical pixels.
    pub view_origin: Point,
    /// Size the view was laid out at.
    pub view_size: ViewSize,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Window background color.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the view at the origin.
    pub fn new(view: &'a mut DocumentView, view_size: ViewSize, viewport_size: Size) -> Self {
        Self {
            view,
            view_origin: Point::ZERO,
            view_size,
            viewport_size,
            background_color: Color::from_rgba8(250, 250, 250, 255),
        }
    }

    /// Set where the view's top-left corner lands in the viewport.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.view_origin = origin;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// The view's bounds in viewport coordinates.
    pub fn view_bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.view_origin,
            (f64::from(self.view_size.width), f64::from(self.view_size.height)),
        )
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene for a frame.
    ///
    /// Called once per frame; draws the window background and then the view.
    fn build_scene(&mut self, ctx: &mut RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_bounds() {
        let mut view = DocumentView::new();
        let ctx = RenderContext::new(&mut view, ViewSize::new(120, 80), Size::new(800.0, 600.0))
            .with_origin(Point::new(10.0, 20.0));
        assert_eq!(ctx.view_bounds(), Rect::new(10.0, 20.0, 130.0, 100.0));
    }
}
