//! Amore - AI wedding planner site
//!
//! Marketing and lead-generation site for the Amore AI wedding planner:
//! a landing page with a scripted chat demo, testimonials and about pages,
//! and a chat page that mounts the hosted planner widget.
//!
//! # Architecture
//!
//! - **Server**: Axum router, static assets, SSE for the chat demo
//! - **UI**: Leptos SSR + HTMX + Alpine.js, no client bundle
//! - **Integrations**: hosted chat widget glue, inspiration upload webhook
//!
//! # Modules
//!
//! - [`config`]: CLI and layered configuration
//! - [`content`]: Static marketing copy
//! - [`demo`]: Scripted chat demo timeline and its SSE stream
//! - [`inspiration`]: Inspiration photo uploads forwarded to a webhook
//! - [`widget`]: Hosted chat widget options
//! - [`ui`]: Pages and components

#![recursion_limit = "256"]
// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod content;
pub mod demo;
pub mod inspiration;
pub mod server;
pub mod ui;
pub mod widget;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::demo::DemoTiming;
use crate::inspiration::{InspirationSink, UploadRateLimiter, WebhookSink};
use crate::widget::WidgetMount;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global configuration.
    pub config: Arc<AppConfig>,
    /// Chat widget mount, resolved once at start-up.
    pub widget: Arc<WidgetMount>,
    /// Destination for inspiration uploads; `None` when no webhook is configured.
    pub sink: Option<Arc<dyn InspirationSink>>,
    /// Global upload rate limiter.
    pub upload_limiter: Arc<UploadRateLimiter>,
    /// Pacing of the scripted chat demo.
    pub demo_timing: DemoTiming,
}

impl AppState {
    /// Build the state from configuration, wiring the real webhook sink.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let sink = match &config.upload.webhook_url {
            Some(url) => {
                let sink: Arc<dyn InspirationSink> =
                    Arc::new(WebhookSink::new(url, &config.upload)?);
                Some(sink)
            }
            None => None,
        };
        Ok(Self::with_sink(config, sink))
    }

    /// Build the state with an explicit upload sink.
    pub fn with_sink(config: AppConfig, sink: Option<Arc<dyn InspirationSink>>) -> Self {
        let widget = Arc::new(WidgetMount::resolve(&config.chat));
        let upload_limiter = Arc::new(UploadRateLimiter::per_minute(config.upload.per_minute));
        Self {
            config: Arc::new(config),
            widget,
            sink,
            upload_limiter,
            demo_timing: DemoTiming::default(),
        }
    }
}
