//! Property editor panel using egui.

use docview_core::{parse_color, Argb, ViewSize};
use docview_widgets::{panel_frame, section_label, separator, ActionButton, PropertyRow};
use egui::{Align2, Color32, Context, Vec2};

use crate::binding::{Property, ValueKind};
use crate::host::DemoHost;

/// Actions triggered from the editor panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Parse the field for this property and apply it.
    Apply(Property),
    /// Save, rebuild and restore the view.
    Recreate,
    /// Reload every field from the view's current values.
    Reload,
}

/// Editor sections, in display order.
const SECTIONS: [(&str, &[Property]); 4] = [
    ("LAYOUT", &[Property::Background, Property::Width, Property::Height]),
    (
        "BORDER",
        &[
            Property::BorderColor,
            Property::BorderWidth,
            Property::DecorColor,
            Property::DecorSize,
        ],
    ),
    ("TITLE", &[Property::Title, Property::TitleColor, Property::TitleSize]),
    (
        "SUBTITLE",
        &[Property::Subtitle, Property::SubtitleColor, Property::SubtitleSize],
    ),
];

/// UI state that persists across frames.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Field text per property, in [`Property::ALL`] order.
    fields: Vec<(Property, String)>,
    /// Size of the view after the last layout pass (shown in the panel).
    pub view_size: ViewSize,
}

impl UiState {
    /// Fill every field with the host's current values.
    pub fn from_host(host: &DemoHost) -> Self {
        let mut state = Self::default();
        state.reload(host);
        state
    }

    pub fn reload(&mut self, host: &DemoHost) {
        self.fields = Property::ALL
            .iter()
            .map(|&property| (property, property.current_text(host)))
            .collect();
        self.view_size = host.size();
    }

    pub fn text(&self, property: Property) -> &str {
        self.fields
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, text)| text.as_str())
            .unwrap_or_default()
    }

    fn text_mut(&mut self, property: Property) -> Option<&mut String> {
        self.fields
            .iter_mut()
            .find(|(p, _)| *p == property)
            .map(|(_, text)| text)
    }
}

fn to_color32(color: Argb) -> Color32 {
    Color32::from_rgba_unmultiplied(color.red(), color.green(), color.blue(), color.alpha())
}

/// Render all UI panels and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("properties"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-12.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(6.0, 4.0);

                    for (title, properties) in SECTIONS {
                        section_label(ui, title);
                        for &property in properties {
                            if let Some(a) = property_row(ui, ui_state, property) {
                                action = Some(a);
                            }
                        }
                        separator(ui);
                    }

                    ui.horizontal(|ui| {
                        if ActionButton::new("Recreate")
                            .tooltip("Save state, rebuild the view and restore it")
                            .primary()
                            .show(ui)
                        {
                            action = Some(UiAction::Recreate);
                        }
                        if ActionButton::new("Reload fields").show(ui) {
                            action = Some(UiAction::Reload);
                        }
                    });

                    ui.add_space(4.0);
                    section_label(
                        ui,
                        &format!(
                            "Measured {} x {} px",
                            ui_state.view_size.width, ui_state.view_size.height
                        ),
                    );
                });
            });
        });

    action
}

fn property_row(ui: &mut egui::Ui, ui_state: &mut UiState, property: Property) -> Option<UiAction> {
    let preview = (property.kind() == ValueKind::Color)
        .then(|| parse_color(ui_state.text(property)).ok().map(to_color32));
    let text = ui_state.text_mut(property)?;

    let mut row = PropertyRow::new(property.label(), text).hint(property.hint());
    if let Some(color) = preview {
        row = row.color_preview(color);
    }
    row.show(ui).then_some(UiAction::Apply(property))
}
