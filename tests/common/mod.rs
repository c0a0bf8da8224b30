#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use amore_site::AppState;
use amore_site::config::{AppConfig, ChatConfig, LogFormat, ServerConfig, UploadConfig};
use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;

/// Configuration with every external URL pointed at test values.
pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: "static".to_string(),
            request_timeout_secs: 30,
            log_format: LogFormat::Pretty,
        },
        chat: ChatConfig {
            webhook_url: "https://hooks.test/webhook/chat".to_string(),
            instance_id: Some("test-instance".to_string()),
            initial_messages: vec![
                "Hi there! 👋".to_string(),
                "My name is Nathan. How can I assist you today?".to_string(),
            ],
            allow_file_uploads: false,
            allowed_mime_types: String::new(),
            title: String::new(),
            subtitle: String::new(),
            enable_streaming: true,
            script_url: "https://cdn.test/chat.bundle.es.js".to_string(),
            style_url: "https://cdn.test/style.css".to_string(),
        },
        upload: UploadConfig {
            webhook_url: None,
            max_bytes: 1024,
            accept: "image/*".to_string(),
            forward_timeout_secs: 5,
            per_minute: 0,
        },
    }
}

pub fn router(config: AppConfig) -> Router {
    let state = AppState::from_config(config).expect("state should build");
    amore_site::server::build_router(state)
}

/// What the mock webhook saw for one upload.
#[derive(Debug, Clone)]
pub struct Received {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

/// Uploads seen by the mock webhook, in arrival order.
pub type MockInbox = Arc<Mutex<Vec<Received>>>;

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    received: MockInbox,
}

/// Webhook on an ephemeral port answering every upload with `status`.
pub async fn spawn_webhook(status: StatusCode) -> (String, MockInbox) {
    let received: MockInbox = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        received: Arc::clone(&received),
    };
    let app = Router::new()
        .route("/webhook/upload", post(mock_upload))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock webhook");
    let addr = listener.local_addr().expect("mock webhook address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock webhook");
    });

    (format!("http://{addr}/webhook/upload"), received)
}

async fn mock_upload(
    State(state): State<MockState>,
    mut multipart: Multipart,
) -> (StatusCode, &'static str) {
    while let Some(field) = multipart.next_field().await.expect("multipart") {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let size = field.bytes().await.expect("field bytes").len();
        state.received.lock().unwrap().push(Received {
            field: field_name,
            file_name,
            content_type,
            size,
        });
    }
    (state.status, r#"{"ok":true}"#)
}
