//! Router tests — build the app and drive it with `oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use std::sync::Arc;

use folio_api::config::ApiConfig;
use folio_api::{AppState, router};
use folio_core::fallback::{
    CREATIVE_REPLIES, EXPERIENCE_REPLIES, GREETING_REPLIES, POETRY_REPLIES, PROJECT_REPLIES,
    SKILL_REPLIES,
};
use folio_core::responder::FallbackResponder;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Router whose replies always take the first variant.
fn app() -> axum::Router {
    let responder = FallbackResponder::new().with_picker(|_| 0);
    router(AppState::with_responder(ApiConfig::default(), Arc::new(responder)))
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let resp = app().oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse JSON");
    (status, json)
}

async fn chat_reply(message: &str) -> String {
    let (status, json) = send(post_json("/api/chat", &json!({"message": message}))).await;
    assert_eq!(status, StatusCode::OK, "{message}");
    assert_eq!(json["status"], "success");
    json["response"].as_str().expect("response string").to_string()
}

#[tokio::test]
async fn chat_returns_table_reply() {
    let (status, json) = send(post_json("/api/chat", &json!({"message": "What skills do you have?"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], SKILL_REPLIES[0]);
    assert_eq!(json["status"], "success");
}

#[tokio::test]
async fn chat_trims_before_matching() {
    assert_eq!(chat_reply("  Tell me about your work  ").await, EXPERIENCE_REPLIES[0]);
}

#[tokio::test]
async fn chat_group_precedence() {
    // "work" belongs to experience, which is checked before projects.
    assert_eq!(chat_reply("my work on a project").await, EXPERIENCE_REPLIES[0]);
    assert_eq!(chat_reply("Any research projects?").await, PROJECT_REPLIES[0]);
    assert_eq!(chat_reply("Write me a poem").await, POETRY_REPLIES[0]);
    assert_eq!(chat_reply("Generate something").await, CREATIVE_REPLIES[0]);
    assert_eq!(chat_reply("hey, what tech?").await, GREETING_REPLIES[0]);
}

#[tokio::test]
async fn chat_reply_varies_with_picker() {
    let responder = FallbackResponder::new().with_picker(|n| n - 1);
    let app = router(AppState::with_responder(ApiConfig::default(), Arc::new(responder)));
    let resp = app
        .oneshot(post_json("/api/chat", &json!({"message": "hello"})))
        .await
        .expect("request");
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&body).expect("parse JSON");
    assert_eq!(json["response"], GREETING_REPLIES[2]);
}

#[tokio::test]
async fn chat_rejects_whitespace_message() {
    let (status, json) = send(post_json("/api/chat", &json!({"message": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    assert_eq!(json["message"], "Message cannot be empty");
}

#[tokio::test]
async fn chat_rejects_missing_message() {
    let (status, json) = send(post_json("/api/chat", &json!({"text": "hello"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "No message provided");
}

#[tokio::test]
async fn chat_rejects_overlong_message() {
    let long = "a".repeat(1001);
    let (status, json) = send(post_json("/api/chat", &json!({"message": long}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Message too long (max 1000 characters)");
}

#[tokio::test]
async fn chat_accepts_message_at_limit() {
    let at_limit = "a".repeat(1000);
    let (status, _) = send(post_json("/api/chat", &json!({"message": at_limit}))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn chat_limit_counts_trimmed_length() {
    let padded = format!(" {}", "a".repeat(1000));
    let (status, json) = send(post_json("/api/chat", &json!({"message": padded}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
}

#[tokio::test]
async fn chat_rejects_malformed_json() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid request format");
}

#[tokio::test]
async fn chat_requires_json_content_type() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .body(Body::from(r#"{"message":"hi"}"#))
        .unwrap();
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Request must be JSON");
}

#[tokio::test]
async fn contact_accepts_complete_form() {
    let form = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "Collaboration",
        "message": "Let's talk"
    });
    let (status, json) = send(post_json("/contact", &form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn contact_rejects_bad_email() {
    let form = json!({
        "name": "Ada",
        "email": "not-an-address",
        "subject": "Collaboration",
        "message": "Let's talk"
    });
    let (status, json) = send(post_json("/contact", &form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "email must be a valid address");
}

#[tokio::test]
async fn contact_rejects_missing_field() {
    let form = json!({"name": "Ada", "email": "ada@example.com"});
    let (status, json) = send(post_json("/contact", &form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn health_reports_version() {
    let req = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], folio_core::version());
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let req = Request::builder()
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn wrong_method_is_json_405() {
    let req = Request::builder()
        .uri("/api/chat")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["error"], "method_not_allowed");
    assert_eq!(json["message"], "Method not allowed");
}
