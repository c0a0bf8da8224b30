//! Hosted chat widget options.
//!
//! The chat page mounts a third-party widget that talks to a webhook. This
//! module validates the configured webhook once at start-up and serializes
//! the options handed to the widget's `createChat`.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::config::ChatConfig;

/// Element the widget renders into.
pub const CONTAINER_ID: &str = "n8n-chat-container";

/// Why the widget cannot be mounted.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("chat webhook URL is not configured")]
    Missing,
    #[error("chat webhook URL is invalid: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("chat webhook URL must use http or https, got {0}")]
    Scheme(String),
    #[error("chat widget options could not be serialized: {0}")]
    Options(#[from] serde_json::Error),
}

/// Title and subtitle shown in the widget header.
#[derive(Debug, Clone, Serialize)]
pub struct Labels {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebhookConfig {
    pub headers: BTreeMap<String, String>,
}

/// Options passed to the widget's `createChat`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    pub target: String,
    pub mode: &'static str,
    pub webhook_url: String,
    pub show_welcome_screen: bool,
    pub load_previous_session: bool,
    pub webhook_config: WebhookConfig,
    pub allow_file_uploads: bool,
    pub allowed_files_mime_types: String,
    pub i18n: BTreeMap<&'static str, Labels>,
    pub initial_messages: Vec<String>,
    pub enable_streaming: bool,
}

impl WidgetOptions {
    fn from_config(webhook_url: &Url, cfg: &ChatConfig) -> Self {
        let headers = cfg
            .instance_id
            .iter()
            .filter(|id| !id.trim().is_empty())
            .map(|id| ("X-Instance-Id".to_string(), id.clone()))
            .collect();

        Self {
            target: format!("#{CONTAINER_ID}"),
            mode: "fullscreen",
            webhook_url: webhook_url.to_string(),
            show_welcome_screen: false,
            load_previous_session: false,
            webhook_config: WebhookConfig { headers },
            allow_file_uploads: cfg.allow_file_uploads,
            allowed_files_mime_types: cfg.allowed_mime_types.clone(),
            i18n: BTreeMap::from([(
                "en",
                Labels {
                    title: cfg.title.clone(),
                    subtitle: cfg.subtitle.clone(),
                },
            )]),
            initial_messages: cfg.initial_messages.clone(),
            enable_streaming: cfg.enable_streaming,
        }
    }
}

/// Outcome of resolving the widget configuration.
#[derive(Debug, Clone)]
pub enum WidgetMount {
    Ready {
        options: WidgetOptions,
        /// `options` as JSON, safe to inline in a `<script>`.
        options_json: String,
        script_url: String,
        style_url: String,
    },
    /// The page shows a static error instead of the widget.
    Unavailable { reason: String },
}

impl WidgetMount {
    pub fn resolve(cfg: &ChatConfig) -> Self {
        match Self::try_resolve(cfg) {
            Ok(mount) => {
                info!(name: "chat.widget.ready", "Chat widget configured");
                mount
            }
            Err(e) => {
                warn!(name: "chat.widget.unavailable", error = %e, "Chat widget disabled");
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn try_resolve(cfg: &ChatConfig) -> Result<Self, WidgetError> {
        let url = validate_webhook_url(&cfg.webhook_url)?;
        let options = WidgetOptions::from_config(&url, cfg);
        let options_json = script_safe_json(&options)?;
        Ok(Self::Ready {
            options,
            options_json,
            script_url: cfg.script_url.clone(),
            style_url: cfg.style_url.clone(),
        })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Accepts only non-blank absolute http(s) URLs.
pub fn validate_webhook_url(raw: &str) -> Result<Url, WidgetError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(WidgetError::Missing);
    }
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(WidgetError::Scheme(other.to_string())),
    }
}

/// JSON that cannot close the surrounding `<script>` element.
pub fn script_safe_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_config(webhook_url: &str) -> ChatConfig {
        ChatConfig {
            webhook_url: webhook_url.to_string(),
            instance_id: Some("abc123".to_string()),
            initial_messages: vec!["Hi there! 👋".to_string()],
            allow_file_uploads: false,
            allowed_mime_types: String::new(),
            title: String::new(),
            subtitle: String::new(),
            enable_streaming: true,
            script_url: "https://cdn.test/chat.js".to_string(),
            style_url: "https://cdn.test/chat.css".to_string(),
        }
    }

    #[test]
    fn blank_and_malformed_urls_are_rejected() {
        assert!(matches!(
            validate_webhook_url("   "),
            Err(WidgetError::Missing)
        ));
        assert!(matches!(
            validate_webhook_url("not a url"),
            Err(WidgetError::Invalid(_))
        ));
        assert!(matches!(
            validate_webhook_url("ftp://hooks.test/chat"),
            Err(WidgetError::Scheme(_))
        ));
    }

    #[test]
    fn options_serialize_in_widget_shape() {
        let mount = WidgetMount::resolve(&chat_config("https://hooks.test/webhook/chat"));
        let WidgetMount::Ready { options_json, .. } = mount else {
            panic!("expected a ready widget");
        };
        let json: serde_json::Value = serde_json::from_str(&options_json).unwrap();

        assert_eq!(json["target"], "#n8n-chat-container");
        assert_eq!(json["mode"], "fullscreen");
        assert_eq!(json["webhookUrl"], "https://hooks.test/webhook/chat");
        assert_eq!(json["showWelcomeScreen"], false);
        assert_eq!(json["loadPreviousSession"], false);
        assert_eq!(json["webhookConfig"]["headers"]["X-Instance-Id"], "abc123");
        assert_eq!(json["allowFileUploads"], false);
        assert_eq!(json["i18n"]["en"]["title"], "");
        assert_eq!(json["initialMessages"][0], "Hi there! 👋");
        assert_eq!(json["enableStreaming"], true);
    }

    #[test]
    fn missing_instance_id_sends_no_headers() {
        let mut cfg = chat_config("https://hooks.test/chat");
        cfg.instance_id = None;
        let WidgetMount::Ready { options, .. } = WidgetMount::resolve(&cfg) else {
            panic!("expected a ready widget");
        };
        assert!(options.webhook_config.headers.is_empty());
    }

    #[test]
    fn unavailable_when_url_missing() {
        assert!(!WidgetMount::resolve(&chat_config("")).is_ready());
    }

    #[test]
    fn inline_json_cannot_close_script() {
        let json = script_safe_json(&["</script><script>alert(1)"]).unwrap();
        assert!(!json.contains("</script>"));
    }
}
