//! Amore site server
//!
//! Entry point for the Amore marketing site.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use amore_site::AppState;
use amore_site::config::{AppConfig, LogFormat};
use amore_site::server::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing (M-LOG-STRUCTURED)
    let json = config.server.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with((!json).then(|| fmt::layer().with_target(true)))
        .with(json.then(|| fmt::layer().json().with_current_span(true)))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    info!(
        name: "config.loaded",
        address = %config.bind_address(),
        upload_forwarding = config.upload.webhook_url.is_some(),
        "Configuration loaded"
    );

    let state = AppState::from_config(config)?;
    start_server(state).await
}
