use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use crate::ui::upload::upload_status_html;

/// Every way an inspiration upload can fail.
///
/// Each variant maps to a status code and a user-facing message rendered as
/// the red status banner.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please select an image first")]
    MissingFile,

    #[error("Only image files can be uploaded")]
    NotAnImage { content_type: String },

    #[error("Image is too large (maximum {limit})")]
    TooLarge { limit: String },

    #[error("Error uploading image: {0}")]
    Multipart(String),

    #[error("Uploads are unavailable right now")]
    NotConfigured,

    #[error("Too many uploads, please wait a minute and try again")]
    RateLimited,

    #[error("Upload failed. Please try again.")]
    Rejected { status: u16 },

    #[error("Error uploading image: {0}")]
    Transport(String),

    #[error("upload webhook URL is invalid: {0}")]
    InvalidWebhook(String),
}

impl UploadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::NotAnImage { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotConfigured | Self::InvalidWebhook(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Rejected { .. } | Self::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Status the upload webhook answered with, when it answered at all.
    pub fn webhook_status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status } => Some(*status),
            _ => None,
        }
    }

    /// Transport error text with the request URL stripped.
    pub fn transport(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            Self::Transport("the upload service did not respond in time".to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(
            name: "inspiration.failed",
            status = status.as_u16(),
            webhook_status = self.webhook_status(),
            error = %self,
            "Inspiration upload failed"
        );
        (status, Html(upload_status_html(false, &self.to_string()))).into_response()
    }
}
