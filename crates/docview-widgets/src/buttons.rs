//! Text action buttons.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Pos2, Sense, Stroke, StrokeKind, Ui};

use crate::{palette, sizing};

/// A compact text button used for "Apply" and toolbar actions.
pub struct ActionButton<'a> {
    label: &'a str,
    tooltip: Option<&'a str>,
    primary: bool,
}

impl<'a> ActionButton<'a> {
    /// Create a new action button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            tooltip: None,
            primary: false,
        }
    }

    /// Draw with a solid accent background.
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Set the hover tooltip.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font = egui::FontId::proportional(12.0);
        let text_width = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font.clone(), palette::LABEL)
            .size()
            .x;
        let size = vec2(text_width + 16.0, sizing::ROW_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let (bg_color, text_color) = match (self.primary, response.hovered()) {
                (true, false) => (palette::ACTION, Color32::WHITE),
                (true, true) => (palette::ACTION_HOVER, Color32::WHITE),
                (false, false) => (Color32::TRANSPARENT, palette::LABEL),
                (false, true) => (palette::ROW_HOVER, palette::LABEL),
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            if !self.primary {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, palette::OUTLINE),
                    StrokeKind::Inside,
                );
            }

            ui.painter().text(
                Pos2::new(rect.center().x, rect.center().y),
                egui::Align2::CENTER_CENTER,
                self.label,
                font,
                text_color,
            );
        }

        let clicked = response.clicked();
        let response = match self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip),
            None => response,
        };
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
