//! Panel chrome: the frame, section headings and rules between sections.

use egui::{CornerRadius, Frame, Margin, RichText, Sense, Stroke, Ui, vec2};

use crate::{palette, sizing};

/// Thin full-width rule closing a group of property rows.
pub fn separator(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 9.0), Sense::hover());
    ui.painter()
        .hline(rect.x_range(), rect.center().y, Stroke::new(1.0, palette::RULE));
}

/// Heading above a group of property rows.
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.add_space(2.0);
    ui.label(RichText::new(text).size(10.0).strong().color(palette::HEADING));
}

/// Frame around the whole property editor.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(palette::PANEL)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, palette::OUTLINE))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 12,
            offset: [0, 3],
            color: egui::Color32::from_black_alpha(20),
        })
        .inner_margin(Margin::same(10))
}
