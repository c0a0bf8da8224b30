use clap::{Parser, ValueEnum};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Environment prefix for layered settings, e.g. `AMORE_SERVER__PORT=8000`.
pub const ENV_PREFIX: &str = "AMORE";

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Webhook URL of the hosted chat widget
    #[arg(long, env = "CHAT_WEBHOOK_URL")]
    pub chat_webhook_url: Option<String>,

    /// Webhook URL receiving inspiration uploads
    #[arg(long, env = "UPLOAD_WEBHOOK_URL")]
    pub upload_webhook_url: Option<String>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines with targets.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub chat: ChatConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

/// Settings handed to the hosted chat widget.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// Webhook the widget talks to. Blank means "not configured".
    pub webhook_url: String,
    /// Sent as the `X-Instance-Id` header on every widget request.
    pub instance_id: Option<String>,
    pub initial_messages: Vec<String>,
    pub allow_file_uploads: bool,
    pub allowed_mime_types: String,
    pub title: String,
    pub subtitle: String,
    pub enable_streaming: bool,
    /// ES module exporting `createChat`.
    pub script_url: String,
    pub style_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Remote endpoint receiving inspiration photos. Uploads are refused when unset.
    pub webhook_url: Option<String>,
    pub max_bytes: usize,
    /// `accept` attribute of the file picker.
    pub accept: String,
    pub forward_timeout_secs: u64,
    /// Uploads allowed per minute across all visitors.
    pub per_minute: u32,
}

impl UploadConfig {
    /// `max_bytes` for display, rounded down so the limit is never overstated.
    ///
    /// Whole megabytes from 1 MiB up, kilobytes below that.
    pub fn max_size_label(&self) -> String {
        const KIB: usize = 1024;
        const MIB: usize = 1024 * KIB;
        if self.max_bytes >= MIB {
            format!("{}MB", self.max_bytes / MIB)
        } else {
            format!("{}KB", (self.max_bytes / KIB).max(1))
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("server.log_format", LogFormat::Pretty.as_str())?
            .set_default("chat.webhook_url", "")?
            .set_default(
                "chat.initial_messages",
                vec![
                    "Hi there! 👋".to_string(),
                    "My name is Nathan. How can I assist you today?".to_string(),
                ],
            )?
            .set_default("chat.allow_file_uploads", false)?
            .set_default("chat.allowed_mime_types", "")?
            .set_default("chat.title", "")?
            .set_default("chat.subtitle", "")?
            .set_default("chat.enable_streaming", true)?
            .set_default(
                "chat.script_url",
                "https://cdn.jsdelivr.net/npm/@n8n/chat/dist/chat.bundle.es.js",
            )?
            .set_default(
                "chat.style_url",
                "https://cdn.jsdelivr.net/npm/@n8n/chat/dist/style.css",
            )?
            .set_default("upload.max_bytes", 10 * 1024 * 1024)?
            .set_default("upload.accept", "image/*")?
            .set_default("upload.forward_timeout_secs", 30)?
            .set_default("upload.per_minute", 30)?;

        // Explicit file wins over ./config.yaml
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CWD_CONFIG_FILE).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Priority: CLI flag > CLI env var > AMORE_* env > config file > defaults.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(format) = cli.log_format {
            builder = builder.set_override("server.log_format", format.as_str())?;
        }
        if let Some(url) = cli.chat_webhook_url {
            builder = builder.set_override("chat.webhook_url", url)?;
        }
        if let Some(url) = cli.upload_webhook_url {
            builder = builder.set_override("upload.webhook_url", url)?;
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.upload.webhook_url = cfg
            .upload
            .webhook_url
            .take()
            .filter(|url| !url.trim().is_empty());
        Ok(cfg)
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_defaults() {
        let cfg = AppConfig::load_from_args([
            "amore-site",
            "--port",
            "8181",
            "--log-format",
            "json",
            "--upload-webhook-url",
            "http://hooks.test/upload",
        ])
        .unwrap();

        assert_eq!(cfg.server.port, 8181);
        assert_eq!(cfg.server.log_format, LogFormat::Json);
        assert_eq!(
            cfg.upload.webhook_url.as_deref(),
            Some("http://hooks.test/upload")
        );
    }

    #[test]
    fn blank_upload_webhook_counts_as_unset() {
        let cfg =
            AppConfig::load_from_args(["amore-site", "--upload-webhook-url", "  "]).unwrap();
        assert!(cfg.upload.webhook_url.is_none());
    }

    #[test]
    fn unknown_flag_is_a_config_error() {
        let err = AppConfig::load_from_args(["amore-site", "--nope"]).unwrap_err();
        assert!(matches!(err, config::ConfigError::Message(_)));
    }

    fn upload_with_limit(max_bytes: usize) -> UploadConfig {
        UploadConfig {
            webhook_url: None,
            max_bytes,
            accept: "image/*".to_string(),
            forward_timeout_secs: 30,
            per_minute: 0,
        }
    }

    #[test]
    fn size_label_rounds_down() {
        assert_eq!(upload_with_limit(10 * 1024 * 1024).max_size_label(), "10MB");
        assert_eq!(upload_with_limit(3 * 1024 * 1024 / 2).max_size_label(), "1MB");
        assert_eq!(upload_with_limit(1024).max_size_label(), "1KB");
        assert_eq!(upload_with_limit(1024 * 1024 - 1).max_size_label(), "1023KB");
        assert_eq!(upload_with_limit(100).max_size_label(), "1KB");
    }
}
