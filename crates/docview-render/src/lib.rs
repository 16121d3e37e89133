//! DocumentView Render Library
//!
//! Renderer abstraction for hosting a DocumentView in a window.
//! The default implementation draws with Vello and measures text with Parley.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod text;
#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};

#[cfg(feature = "vello-renderer")]
pub use text::ParleyTextEngine;
#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
