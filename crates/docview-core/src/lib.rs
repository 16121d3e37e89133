//! DocumentView Core Library
//!
//! Host-agnostic core of the DocumentView widget: a bordered panel with a
//! triangular corner decoration and centered title/subtitle text.
//!
//! The widget only talks to its host through two traits:
//! [`TextMeasurer`] for text metrics and [`DrawTarget`] for drawing.

pub mod attrs;
pub mod color;
pub mod display_list;
pub mod draw;
pub mod error;
pub mod invalidation;
pub mod measure;
pub mod parcel;
pub mod state;
pub mod style;
pub mod text;
pub mod units;
pub mod view;

pub use attrs::DocumentViewAttrs;
pub use color::{parse_color, Argb};
pub use display_list::{DisplayList, DrawCommand};
pub use draw::DrawTarget;
pub use error::{ConfigError, ConfigResult, ParseError, StateError, StateResult};
pub use invalidation::Invalidation;
pub use measure::{Insets, LayoutDimension, MeasureSpec, ViewSize};
pub use state::SavedState;
pub use style::{TextField, VisualStyle};
pub use text::{MonospaceMeasurer, TextBlock, TextLine, TextMeasurer};
pub use units::{Dimension, DisplayMetrics};
pub use view::DocumentView;
