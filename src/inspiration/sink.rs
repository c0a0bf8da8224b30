use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};
use url::Url;

use super::error::UploadError;
use crate::config::UploadConfig;

/// An image accepted from a visitor, ready to be forwarded.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Destination of accepted uploads.
#[async_trait]
pub trait InspirationSink: Send + Sync + Debug {
    /// Deliver one upload. Called at most once per upload.
    async fn forward(&self, upload: Upload) -> Result<(), UploadError>;
}

/// Posts uploads as multipart field `image` to a remote webhook.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    url: Url,
}

impl WebhookSink {
    pub fn new(url: &str, config: &UploadConfig) -> Result<Self, UploadError> {
        let url = Url::parse(url.trim())
            .map_err(|e| UploadError::InvalidWebhook(e.to_string()))
            .and_then(|url| match url.scheme() {
                "http" | "https" => Ok(url),
                other => Err(UploadError::InvalidWebhook(format!(
                    "unsupported scheme {other}"
                ))),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.forward_timeout_secs))
            .build()
            .map_err(UploadError::transport)?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl InspirationSink for WebhookSink {
    async fn forward(&self, upload: Upload) -> Result<(), UploadError> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(UploadError::transport)?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(UploadError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Rejected {
                status: status.as_u16(),
            });
        }

        // The body is informational only
        match response.json::<serde_json::Value>().await {
            Ok(body) => info!(name: "inspiration.webhook.response", body = %body, "Webhook replied"),
            Err(e) => debug!(name: "inspiration.webhook.response", error = %e, "Webhook reply was not JSON"),
        }
        Ok(())
    }
}
