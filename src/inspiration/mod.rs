//! Inspiration photo uploads.
//!
//! Visitors post one image from the landing page. The server validates it
//! and forwards it to the configured webhook. Nothing is stored and failures
//! are never retried.

mod error;
mod handler;
mod rate_limit;
mod sink;

pub use error::UploadError;
pub use handler::{IMAGE_FIELD, inspiration_handler};
pub use rate_limit::UploadRateLimiter;
pub use sink::{InspirationSink, Upload, WebhookSink};
