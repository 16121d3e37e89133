//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use crate::text::ParleyTextEngine;
use docview_core::{DrawTarget, TextBlock};
use kurbo::{Affine, BezPath, Point, Rect, Stroke};
use parley::layout::PositionedLayoutItem;
use peniko::{BlendMode, Brush, Color, Compose, Fill, Mix};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Text shaping shared by measurement and drawing.
    text: ParleyTextEngine,
    /// View-to-viewport transform for the draw calls in progress.
    transform: Affine,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            text: ParleyTextEngine::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Text engine to measure the view with before drawing it.
    pub fn text_engine_mut(&mut self) -> &mut ParleyTextEngine {
        &mut self.text
    }

    /// Draw one pre-wrapped line with its own single-line layout.
    /// Returns the number of glyphs drawn.
    fn draw_line(&mut self, text: &str, font_size: f32, transform: Affine, brush: &Brush) -> usize {
        let layout = self.text.layout(text, font_size, None);
        let mut glyph_count = 0;

        // Adapted from Parley's vello example
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        glyph_count += 1;
                        vello::Glyph {
                            id: glyph.id,
                            x: gx,
                            y: gy,
                        }
                    })
                    .collect();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(brush)
                        .hint(true)
                        .transform(transform)
                        .glyph_transform(glyph_xform)
                        .font_size(run.font_size())
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }
        glyph_count
    }
}

impl DrawTarget for VelloRenderer {
    fn push_layer(&mut self, bounds: Rect) {
        self.scene.push_layer(Fill::NonZero, Mix::Normal, 1.0, self.transform, &bounds);
    }

    fn pop_layer(&mut self) {
        self.scene.pop_layer();
    }

    fn clear_path(&mut self, path: &BezPath) {
        self.scene.push_layer(
            Fill::NonZero,
            BlendMode::new(Mix::Normal, Compose::Clear),
            1.0,
            self.transform,
            path,
        );
        self.scene.fill(Fill::NonZero, self.transform, Color::BLACK, None, path);
        self.scene.pop_layer();
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.scene.fill(Fill::NonZero, self.transform, color, None, path);
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        if stroke.width <= 0.0 {
            return;
        }
        self.scene.stroke(stroke, self.transform, color, None, path);
    }

    fn draw_text(&mut self, block: &TextBlock, origin: Point, color: Color) {
        let brush = Brush::Solid(color);
        let block_transform = self.transform * Affine::translate(origin.to_vec2());

        for line in block.lines() {
            if line.text.trim().is_empty() {
                continue;
            }
            let line_transform = block_transform * Affine::translate((0.0, f64::from(line.top)));
            let drawn = self.draw_line(&line.text, block.font_size(), line_transform, &brush);

            // If no glyphs were rendered (font not found), draw a fallback rectangle
            if drawn == 0 {
                let rect = Rect::new(0.0, 0.0, f64::from(line.width), f64::from(line.height));
                self.scene.fill(
                    Fill::NonZero,
                    line_transform,
                    color.multiply_alpha(0.4),
                    None,
                    &rect,
                );
            }
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &mut RenderContext) {
        // Clear the scene
        self.scene.reset();

        let viewport = Rect::new(0.0, 0.0, ctx.viewport_size.width, ctx.viewport_size.height);
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            ctx.background_color,
            None,
            &viewport,
        );

        let bounds = ctx.view_bounds();
        if bounds.is_zero_area() {
            return;
        }

        self.transform = Affine::translate(bounds.origin().to_vec2());
        let size = ctx.view_size;
        ctx.view.render(self, size);
        self.transform = Affine::IDENTITY;
    }
}
