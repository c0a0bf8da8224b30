//! Document shell shared by every page.

use axum::response::Html;
use leptos::prelude::*;

use super::render_html;

/// HTMX 2 from the CDN.
pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
/// HTMX server-sent events extension.
pub const HTMX_SSE_SRC: &str = "https://unpkg.com/htmx-ext-sse@2.2.3/dist/sse.min.js";
/// Alpine.js 3.
pub const ALPINE_SRC: &str = "https://unpkg.com/alpinejs@3.15.0/dist/cdn.min.js";

/// Swap error responses too, so upload failures show their red banner.
const HTMX_CONFIG: &str = r#"{"responseHandling":[{"code":"204","swap":false},{"code":"[23]..","swap":true},{"code":"[45]..","swap":true,"error":true}]}"#;

/// `<html>` document with the vendor scripts and stylesheet.
#[component]
pub fn Document(
    title: &'static str,
    /// Classes of `<body>`.
    #[prop(default = "min-h-screen flex flex-col bg-premium-gradient font-geist")]
    body_class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Amore plans your wedding with you: venues, vendors, budget and timeline in one chat."
                />
                <meta name="htmx-config" content=HTMX_CONFIG />
                <title>{title}</title>

                <script src=HTMX_SRC></script>
                <script src=HTMX_SSE_SRC></script>
                <script defer src=ALPINE_SRC></script>
                <link rel="stylesheet" href="/static/app.css" />
            </head>
            <body class=body_class>
                {children()}
            </body>
        </html>
    }
}

/// Render a full page, doctype included.
pub fn render_document<V, F>(build: F) -> Html<String>
where
    V: IntoView,
    F: FnOnce() -> V,
{
    Html(format!("<!DOCTYPE html>{}", render_html(build)))
}
