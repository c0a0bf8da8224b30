//! Server-rendered pages and components.
//!
//! Everything is rendered with Leptos SSR. Client behavior is declared with
//! HTMX and Alpine.js attributes, so no client bundle is shipped.
//!
//! # Structure
//!
//! - [`app`]: Document shell and page dispatch
//! - [`pages`]: Landing, chat, testimonials and about pages
//! - [`components`]: Reusable presentational components
//! - [`demo`], [`features`], [`upload`], [`chat_embed`]: Page widgets

pub mod app;
pub mod chat_embed;
pub mod components;
pub mod demo;
pub mod features;
pub mod pages;
pub mod upload;

use leptos::prelude::*;

/// Render a view to an HTML string inside a fresh reactive owner.
pub fn render_html<V, F>(build: F) -> String
where
    V: IntoView,
    F: FnOnce() -> V,
{
    Owner::new().with(|| build().to_html())
}
