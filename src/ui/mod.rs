//! UI components and layouts.
//!
//! Leptos SSR components for the two front-ends, plus the shared shell and
//! component library.
//!
//! # Structure
//!
//! - [`layout`]: document shell with header and footer
//! - [`landing`]: marketing landing page sections
//! - [`chat`]: chat widget components
//! - [`components`]: reusable UI components

pub mod chat;
pub mod components;
pub mod landing;
pub mod layout;

use leptos::prelude::{IntoView, RenderHtml};

/// Render a full page to an HTML document string.
pub fn render_page<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    format!("<!DOCTYPE html>\n{}", view().into_view().to_html())
}

/// Render a component to an HTML fragment string (HTMX swap targets).
pub fn render_fragment<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    view().into_view().to_html()
}
