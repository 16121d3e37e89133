//! Color preview swatch.

use egui::{Color32, CornerRadius, Pos2, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::sizing;

/// A small square showing the current value of a color property.
///
/// Translucent colors are drawn over a two-tone checkerboard so alpha is
/// visible. A `None` color draws a struck-out box.
pub struct ColorPreview<'a> {
    color: Option<Color32>,
    tooltip: &'a str,
}

impl<'a> ColorPreview<'a> {
    /// Create a new color preview.
    pub fn new(color: Option<Color32>, tooltip: &'a str) -> Self {
        Self { color, tooltip }
    }

    /// Show the swatch.
    pub fn show(self, ui: &mut Ui) {
        let size = Vec2::splat(sizing::SMALL);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);

            match self.color {
                Some(color) => {
                    if color.a() < 255 {
                        let half = rect.width() / 2.0;
                        painter.rect_filled(rect, radius, Color32::WHITE);
                        for (dx, dy) in [(0.0, 0.0), (half, half)] {
                            let cell = egui::Rect::from_min_size(
                                rect.min + Vec2::new(dx, dy),
                                Vec2::splat(half),
                            );
                            painter.rect_filled(cell, CornerRadius::ZERO, Color32::from_gray(200));
                        }
                    }
                    painter.rect_filled(rect, radius, color);
                }
                None => {
                    painter.line_segment(
                        [
                            Pos2::new(rect.left() + 3.0, rect.bottom() - 3.0),
                            Pos2::new(rect.right() - 3.0, rect.top() + 3.0),
                        ],
                        Stroke::new(1.5, Color32::from_rgb(239, 68, 68)),
                    );
                }
            }

            painter.rect_stroke(
                rect,
                radius,
                Stroke::new(1.0, Color32::from_gray(180)),
                StrokeKind::Inside,
            );
        }

        response.on_hover_text(self.tooltip);
    }
}
