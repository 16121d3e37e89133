//! Construction-time style attributes.

use crate::color::Argb;
use crate::error::{ConfigError, ConfigResult};
use crate::units::Dimension;
use serde::{Deserialize, Serialize};

/// Style attributes a DocumentView is created from. Every attribute is
/// optional in the serialized form; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentViewAttrs {
    pub border_color: Argb,
    pub border_width: Dimension,
    pub decor_color: Argb,
    pub decor_size: Dimension,
    pub title_text: Option<String>,
    pub title_text_size: Dimension,
    pub title_color: Argb,
    pub subtitle_text: Option<String>,
    pub subtitle_text_size: Dimension,
    pub subtitle_color: Argb,
}

impl Default for DocumentViewAttrs {
    fn default() -> Self {
        Self {
            border_color: Argb::BLACK,
            border_width: Dimension::Dp(1.0),
            decor_color: Argb::GRAY,
            decor_size: Dimension::Dp(20.0),
            title_text: None,
            title_text_size: Dimension::Sp(16.0),
            title_color: Argb::BLACK,
            subtitle_text: None,
            subtitle_text_size: Dimension::Sp(16.0),
            subtitle_color: Argb::GRAY,
        }
    }
}

impl DocumentViewAttrs {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::DisplayMetrics;

    #[test]
    fn test_defaults() {
        let attrs = DocumentViewAttrs::default();
        let metrics = DisplayMetrics::new(2.0);
        assert_eq!(attrs.border_width.to_px(&metrics), 2.0);
        assert_eq!(attrs.decor_size.to_px(&metrics), 40.0);
        assert_eq!(attrs.title_text_size.to_px(&metrics), 32.0);
        assert_eq!(attrs.decor_color, Argb(0xFF88_8888));
        assert!(attrs.title_text.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let attrs = DocumentViewAttrs::from_json(
            r##"{ "borderColor": "red", "decorSize": "12dp", "titleText": "Invoice" }"##,
        )
        .unwrap();
        assert_eq!(attrs.border_color, Argb::RED);
        assert_eq!(attrs.decor_size, Dimension::Dp(12.0));
        assert_eq!(attrs.title_text.as_deref(), Some("Invoice"));
        assert_eq!(attrs.border_width, Dimension::Dp(1.0));
        assert_eq!(attrs.subtitle_color, Argb::GRAY);
    }

    #[test]
    fn test_json_round_trip() {
        let mut attrs = DocumentViewAttrs::default();
        attrs.subtitle_text = Some("draft".into());
        attrs.title_color = Argb(0xFF10_2030);
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(DocumentViewAttrs::from_json(&json).unwrap(), attrs);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result = DocumentViewAttrs::from_json(r#"{ "borderColor": "blurple" }"#);
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }
}
