//! egui components for editing DocumentView properties.
//!
//! - **Buttons**: text action buttons
//! - **Fields**: labelled property rows with an apply button
//! - **Swatch**: color preview next to a color property
//! - **Layout**: section labels, separators, panel frames

pub mod buttons;
pub mod fields;
pub mod layout;
pub mod swatch;

pub use buttons::ActionButton;
pub use fields::PropertyRow;
pub use layout::{panel_frame, section_label, separator};
pub use swatch::ColorPreview;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Swatch size
    pub const SMALL: f32 = 20.0;
    /// Button and field height
    pub const ROW_HEIGHT: f32 = 24.0;
    /// Width of a property label column
    pub const LABEL_WIDTH: f32 = 96.0;
    /// Width of a property text field
    pub const FIELD_WIDTH: f32 = 140.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Editor panel colors.
pub mod palette {
    use egui::Color32;

    pub const LABEL: Color32 = Color32::from_rgb(52, 56, 64);
    /// Section headings and secondary readouts.
    pub const HEADING: Color32 = Color32::from_rgb(128, 132, 140);
    pub const OUTLINE: Color32 = Color32::from_rgb(214, 218, 224);
    pub const RULE: Color32 = Color32::from_rgb(232, 234, 238);
    /// Fill of the primary action button.
    pub const ACTION: Color32 = Color32::from_rgb(37, 99, 235);
    pub const ACTION_HOVER: Color32 = Color32::from_rgb(29, 78, 216);
    pub const ROW_HOVER: Color32 = Color32::from_rgb(241, 243, 246);
    pub const PANEL: Color32 = Color32::from_rgba_premultiplied(252, 252, 253, 248);
}
