mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use futures::StreamExt;
use tower::ServiceExt;

use common::{router, test_config};

fn server() -> TestServer {
    TestServer::new(router(test_config())).expect("test server")
}

#[tokio::test]
async fn landing_page_renders_hero_demo_and_upload() {
    let response = server().get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Plan Your Perfect Day"));
    assert!(html.contains(r#"aria-label="Navigate to /chat""#));
    assert!(html.contains(r#"sse-connect="/api/demo/stream""#));
    assert!(html.contains(r#"id="how-it-works""#));
    assert!(html.contains(r#"hx-post="/api/inspiration""#));
    // test_config allows 1024 bytes
    assert!(html.contains("PNG, JPG, GIF up to 1KB"));
    assert!(html.contains("What Couples Say"));
}

#[tokio::test]
async fn testimonials_page_lists_every_couple() {
    let response = server().get("/testimonials").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("What Couples Are Saying"));
    for author in ["Sarah &amp; Michael", "Jessica &amp; David", "Emily &amp; James"] {
        assert!(html.contains(author), "missing {author}");
    }
    assert!(html.contains("Get Started Now"));
}

#[tokio::test]
async fn about_page_has_every_section() {
    let response = server().get("/about").await;
    response.assert_status_ok();

    let html = response.text();
    for heading in ["Meet Amore", "Our Mission", "What We Do", "Why Choose Us", "Plan and Book Now"] {
        assert!(html.contains(heading), "missing {heading}");
    }
    assert_eq!(html.matches(r#"class="capability "#).count(), 4);
}

#[tokio::test]
async fn chat_page_mounts_widget_with_configured_webhook() {
    let response = server().get("/chat").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"id="n8n-chat-container""#));
    assert!(html.contains(r#""webhookUrl":"https://hooks.test/webhook/chat""#));
    assert!(html.contains(r#""X-Instance-Id":"test-instance""#));
    assert!(html.contains("https://cdn.test/chat.bundle.es.js"));
}

#[tokio::test]
async fn chat_page_shows_error_for_invalid_webhook() {
    for bad in ["", "   ", "not a url"] {
        let mut config = test_config();
        config.chat.webhook_url = bad.to_string();
        let server = TestServer::new(router(config)).expect("test server");

        let html = server.get("/chat").await.text();
        assert!(html.contains("Unable to load chat interface"), "{bad:?}");
        assert!(html.contains("Please check the configuration."));
        assert!(!html.contains("n8n-chat-container"));
    }
}

#[tokio::test]
async fn unknown_paths_redirect_home() {
    let app = router(test_config());
    for path in ["/nope", "/chat/extra", "/api/unknown"] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_redirection(), "{path}");
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = server().get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn demo_stream_opens_with_typing_indicator() {
    let app = router(test_config());
    let response = app
        .oneshot(Request::get("/api/demo/stream").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/event-stream")
    );

    let mut body = response.into_body().into_data_stream();
    let first = body.next().await.expect("first event").unwrap();
    let first = String::from_utf8_lossy(&first);
    assert!(first.contains("event: active"));
    assert!(first.contains("typing-indicator"));
}
