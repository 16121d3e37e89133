//! Demo configuration.

use docview_core::{
    Argb, ConfigError, ConfigResult, DisplayMetrics, DocumentViewAttrs, Insets, LayoutDimension,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration, optionally loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Window background behind the view.
    pub background_color: Argb,
    /// Background drawn by the view itself.
    pub view_background: Option<Argb>,
    pub padding: Insets,
    pub view_width: LayoutDimension,
    pub view_height: LayoutDimension,
    /// User font scale applied to `sp` sizes on top of the window scale.
    pub font_scale: f32,
    /// Style attributes the view is created from.
    pub attrs: DocumentViewAttrs,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "DocumentView".to_string(),
            width: 1280,
            height: 800,
            background_color: Argb::new(255, 250, 250, 250),
            view_background: Some(Argb::WHITE),
            padding: Insets::uniform(16),
            view_width: LayoutDimension::Wrap,
            view_height: LayoutDimension::Wrap,
            font_scale: 1.0,
            attrs: DocumentViewAttrs {
                title_text: Some("Quarterly report".to_string()),
                subtitle_text: Some("Draft for review".to_string()),
                ..Default::default()
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&json).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Display metrics for a window at `scale_factor`.
    pub fn metrics(&self, scale_factor: f64) -> DisplayMetrics {
        DisplayMetrics::new(scale_factor as f32).with_font_scale(self.font_scale)
    }
}
