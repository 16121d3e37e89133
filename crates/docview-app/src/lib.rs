//! DocumentView demo application
//!
//! A window hosting one DocumentView next to a property editor. Every
//! property has a text field and an apply button; the view updates live.

mod app;
pub mod binding;
pub mod config;
pub mod host;
mod ui;

pub use app::App;
pub use binding::{Property, PropertyValue, ValueKind};
pub use config::AppConfig;
pub use host::DemoHost;
pub use ui::{render_ui, UiAction, UiState};
