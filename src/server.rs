use axum::{
    Router,
    extract::{DefaultBodyLimit, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{info, warn};

use crate::AppState;
use crate::demo::demo_stream_handler;
use crate::inspiration::inspiration_handler;
use crate::ui::pages;

/// Headroom for multipart framing on top of the image itself.
pub const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let config = &state.config;
    let timeout_duration = Duration::from_secs(config.server.request_timeout_secs);
    let body_limit = config.upload.max_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/", get(pages::landing))
        .route("/chat", get(pages::chat))
        .route("/testimonials", get(pages::testimonials))
        .route("/about", get(pages::about))
        .route("/healthz", get(healthz))
        .route("/api/demo/stream", get(demo_stream_handler))
        .route(
            "/api/inspiration",
            post(inspiration_handler).layer(DefaultBodyLimit::max(body_limit)),
        )
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        .fallback(redirect_home)
        .layer(middleware::from_fn_with_state(
            timeout_duration,
            enforce_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answer 408 when the inner service takes longer than `limit`.
pub async fn enforce_timeout(State(limit): State<Duration>, req: Request, next: Next) -> Response {
    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(res) => res,
        Err(_) => {
            warn!(name: "request.timed_out", limit_secs = limit.as_secs(), "Request timed out");
            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
        }
    }
}

/// Start the Axum server with the provided state.
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// GET /healthz - Liveness probe.
async fn healthz() -> &'static str {
    "ok"
}

/// Unknown paths go home.
async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;
    use tower::ServiceExt;

    fn slow_router(limit: Duration) -> Router {
        Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    "late"
                }),
            )
            .route("/fast", get(|| async { "quick" }))
            .layer(middleware::from_fn_with_state(limit, enforce_timeout))
    }

    #[tokio::test(start_paused = true)]
    async fn slow_requests_time_out() {
        let response = slow_router(Duration::from_secs(1))
            .oneshot(http::Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Request timed out");
    }

    #[tokio::test(start_paused = true)]
    async fn fast_requests_pass_through() {
        let response = slow_router(Duration::from_secs(1))
            .oneshot(http::Request::get("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
