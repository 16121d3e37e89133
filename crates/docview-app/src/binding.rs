//! Text-field bindings from the property editor to the view.
//!
//! Every editable property is applied from free text. Text that does not
//! parse is dropped without touching the view; the only trace is a debug
//! log line.

use crate::host::DemoHost;
use docview_core::{parse_color, Argb, LayoutDimension, ParseError};

/// How a property's text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Color,
    Float,
    Dimension,
    Text,
}

/// A parsed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Color(Argb),
    Float(f32),
    Dimension(LayoutDimension),
    Text(String),
}

/// An editable property of the demo view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Background,
    Width,
    Height,
    BorderColor,
    BorderWidth,
    DecorColor,
    DecorSize,
    TitleColor,
    Title,
    TitleSize,
    SubtitleColor,
    Subtitle,
    SubtitleSize,
}

impl Property {
    /// Every property in editor order.
    pub const ALL: [Property; 13] = [
        Property::Background,
        Property::Width,
        Property::Height,
        Property::BorderColor,
        Property::BorderWidth,
        Property::DecorColor,
        Property::DecorSize,
        Property::TitleColor,
        Property::Title,
        Property::TitleSize,
        Property::SubtitleColor,
        Property::Subtitle,
        Property::SubtitleSize,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Property::Background => "Background",
            Property::Width => "Width",
            Property::Height => "Height",
            Property::BorderColor => "Border color",
            Property::BorderWidth => "Border width",
            Property::DecorColor => "Decor color",
            Property::DecorSize => "Decor size",
            Property::TitleColor => "Title color",
            Property::Title => "Title",
            Property::TitleSize => "Title size",
            Property::SubtitleColor => "Subtitle color",
            Property::Subtitle => "Subtitle",
            Property::SubtitleSize => "Subtitle size",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Property::Background
            | Property::BorderColor
            | Property::DecorColor
            | Property::TitleColor
            | Property::SubtitleColor => ValueKind::Color,
            Property::Width | Property::Height => ValueKind::Dimension,
            Property::BorderWidth
            | Property::DecorSize
            | Property::TitleSize
            | Property::SubtitleSize => ValueKind::Float,
            Property::Title | Property::Subtitle => ValueKind::Text,
        }
    }

    /// Placeholder text for the editor field.
    pub fn hint(self) -> &'static str {
        match self.kind() {
            ValueKind::Color => "#AARRGGBB or name",
            ValueKind::Float => "pixels",
            ValueKind::Dimension => "wrap, match or pixels",
            ValueKind::Text => "text",
        }
    }

    /// Parse editor text for this property.
    pub fn parse(self, text: &str) -> Result<PropertyValue, ParseError> {
        Ok(match self.kind() {
            ValueKind::Color => PropertyValue::Color(parse_color(text)?),
            ValueKind::Float => PropertyValue::Float(parse_float(text)?),
            ValueKind::Dimension => PropertyValue::Dimension(text.parse()?),
            ValueKind::Text => PropertyValue::Text(text.to_string()),
        })
    }

    /// Current value formatted the way the editor accepts it back.
    pub fn current_text(self, host: &DemoHost) -> String {
        let view = host.view();
        match self {
            Property::Background => host.background().map(|c| c.to_string()).unwrap_or_default(),
            Property::Width => host.width().to_string(),
            Property::Height => host.height().to_string(),
            Property::BorderColor => view.border_color().to_string(),
            Property::BorderWidth => view.border_width().to_string(),
            Property::DecorColor => view.decor_color().to_string(),
            Property::DecorSize => view.decor_size().to_string(),
            Property::TitleColor => view.title_color().to_string(),
            Property::Title => view.title().to_string(),
            Property::TitleSize => view.title_size().to_string(),
            Property::SubtitleColor => view.subtitle_color().to_string(),
            Property::Subtitle => view.subtitle().to_string(),
            Property::SubtitleSize => view.subtitle_size().to_string(),
        }
    }

    /// Store a parsed value. Values of the wrong kind are ignored.
    pub fn set(self, host: &mut DemoHost, value: PropertyValue) {
        match (self, value) {
            (Property::Background, PropertyValue::Color(c)) => host.set_background(Some(c)),
            (Property::Width, PropertyValue::Dimension(d)) => host.set_width(d),
            (Property::Height, PropertyValue::Dimension(d)) => host.set_height(d),
            (Property::BorderColor, PropertyValue::Color(c)) => host.view_mut().set_border_color(c),
            (Property::BorderWidth, PropertyValue::Float(v)) => host.view_mut().set_border_width(v),
            (Property::DecorColor, PropertyValue::Color(c)) => host.view_mut().set_decor_color(c),
            (Property::DecorSize, PropertyValue::Float(v)) => host.view_mut().set_decor_size(v),
            (Property::TitleColor, PropertyValue::Color(c)) => host.view_mut().set_title_color(c),
            (Property::Title, PropertyValue::Text(t)) => host.view_mut().set_title(Some(t)),
            (Property::TitleSize, PropertyValue::Float(v)) => host.view_mut().set_title_size(v),
            (Property::SubtitleColor, PropertyValue::Color(c)) => {
                host.view_mut().set_subtitle_color(c)
            }
            (Property::Subtitle, PropertyValue::Text(t)) => host.view_mut().set_subtitle(Some(t)),
            (Property::SubtitleSize, PropertyValue::Float(v)) => {
                host.view_mut().set_subtitle_size(v)
            }
            (property, value) => {
                log::warn!("Ignoring {:?} value for {:?}", value, property);
            }
        }
    }
}

/// Parse a decimal float. Surrounding whitespace is ignored; infinities and
/// NaN are rejected.
pub fn parse_float(text: &str) -> Result<f32, ParseError> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::Number(text.to_string()))
}

/// Apply editor text to a property. Returns whether the view changed;
/// unparseable text leaves everything untouched.
pub fn apply(host: &mut DemoHost, property: Property, text: &str) -> bool {
    match property.parse(text) {
        Ok(value) => {
            property.set(host, value);
            true
        }
        Err(e) => {
            log::debug!("Discarding {} input: {}", property.label(), e);
            false
        }
    }
}
