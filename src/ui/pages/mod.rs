//! Full pages and their route handlers.

mod about;
mod chat;
mod landing;
mod testimonials;

pub use about::AboutPage;
pub use chat::ChatPage;
pub use landing::LandingPage;
pub use testimonials::TestimonialsPage;

use axum::extract::State;
use axum::response::Html;
use leptos::prelude::*;

use super::app::render_document;
use crate::AppState;

/// GET /
pub async fn landing(State(state): State<AppState>) -> Html<String> {
    let accept = state.config.upload.accept.clone();
    let max_size = state.config.upload.max_size_label();
    render_document(move || view! { <LandingPage accept=accept max_size=max_size /> })
}

/// GET /chat
pub async fn chat(State(state): State<AppState>) -> Html<String> {
    let mount = state.widget.as_ref().clone();
    render_document(move || view! { <ChatPage mount=mount /> })
}

/// GET /testimonials
pub async fn testimonials() -> Html<String> {
    render_document(|| view! { <TestimonialsPage /> })
}

/// GET /about
pub async fn about() -> Html<String> {
    render_document(|| view! { <AboutPage /> })
}
