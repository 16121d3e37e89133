//! Labelled property rows.

use egui::{Color32, TextEdit, Ui};

use crate::buttons::ActionButton;
use crate::swatch::ColorPreview;
use crate::{palette, sizing};

/// A row with a label, a single-line text field and an "Apply" button.
///
/// The row never interprets the text. Callers parse it when `show` returns
/// true, which happens on the Apply button or Enter in the field.
pub struct PropertyRow<'a> {
    label: &'a str,
    value: &'a mut String,
    hint: &'a str,
    preview: Option<Option<Color32>>,
}

impl<'a> PropertyRow<'a> {
    pub fn new(label: &'a str, value: &'a mut String) -> Self {
        Self {
            label,
            value,
            hint: "",
            preview: None,
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }

    /// Show a color swatch after the field. `None` draws the "no color" box.
    pub fn color_preview(mut self, color: Option<Color32>) -> Self {
        self.preview = Some(color);
        self
    }

    pub fn show(self, ui: &mut Ui) -> bool {
        let mut applied = false;

        ui.horizontal(|ui| {
            ui.add_sized(
                [sizing::LABEL_WIDTH, sizing::ROW_HEIGHT],
                egui::Label::new(egui::RichText::new(self.label).size(12.0).color(palette::LABEL)),
            );

            let edit = ui.add_sized(
                [sizing::FIELD_WIDTH, sizing::ROW_HEIGHT],
                TextEdit::singleline(self.value).hint_text(self.hint),
            );
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if let Some(color) = self.preview {
                ColorPreview::new(color, self.label).show(ui);
            }

            let clicked = ActionButton::new("Apply").show(ui);
            applied = clicked || submitted;
        });

        applied
    }
}
