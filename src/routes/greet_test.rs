use super::*;
use crate::routes::app;
use crate::state::test_helpers::{self, DownVerifier};
use axum::body::{Body, to_bytes};
use axum::http::{Method, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, String) {
    let mut builder = axum::http::Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let router = app(state.clone(), std::path::Path::new("/nonexistent-web-root"));
    let resp = router.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn json_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

// =============================================================================
// message helpers
// =============================================================================

#[test]
fn message_formats_greeting_and_name() {
    assert_eq!(message("Ciao", "World"), "Ciao World!");
    assert_eq!(message("Hola", "Joe"), "Hola Joe!");
}

// =============================================================================
// GET
// =============================================================================

#[tokio::test]
async fn default_message_greets_world() {
    let state = test_helpers::test_app_state();
    let (status, body) = send(&state, Method::GET, "/greet", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"message": "Ciao World!"}));
}

#[tokio::test]
async fn trailing_slash_greets_world() {
    let state = test_helpers::test_app_state();
    let (status, body) = send(&state, Method::GET, "/greet/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"message": "Ciao World!"}));
}

#[tokio::test]
async fn named_message_greets_name() {
    let state = test_helpers::test_app_state();
    let (status, body) = send(&state, Method::GET, "/greet/Joe", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"message": "Ciao Joe!"}));
}

#[tokio::test]
async fn named_message_decodes_path() {
    let state = test_helpers::test_app_state();
    let (_, body) = send(&state, Method::GET, "/greet/Mary%20Ann", None, None).await;
    assert_eq!(json_body(&body), json!({"message": "Ciao Mary Ann!"}));
}

#[tokio::test]
async fn get_greeting_returns_current_value() {
    let state = test_helpers::test_app_state();
    let (status, body) = send(&state, Method::GET, "/greet/greeting", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"greeting": "Ciao"}));
}

// =============================================================================
// PUT /greet/greeting/{greeting}
// =============================================================================

#[tokio::test]
async fn put_without_verifier_is_open() {
    let state = test_helpers::test_app_state();
    let (status, body) = send(&state, Method::PUT, "/greet/greeting/Hola", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"greeting": "Hola"}));
    assert_eq!(state.greeting().await, "Hola");
}

#[tokio::test]
async fn put_with_valid_token_updates_greeting() {
    let state = test_helpers::test_app_state_with_token("good-token");
    let (status, body) = send(&state, Method::PUT, "/greet/greeting/hello", Some("good-token"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"greeting": "hello"}));

    let (_, body) = send(&state, Method::GET, "/greet/Joe", None, None).await;
    assert_eq!(json_body(&body), json!({"message": "hello Joe!"}));
}

#[tokio::test]
async fn put_without_token_is_unauthorized() {
    let state = test_helpers::test_app_state_with_token("good-token");
    let (status, _) = send(&state, Method::PUT, "/greet/greeting/hello", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(state.greeting().await, "Ciao");
}

#[tokio::test]
async fn put_with_bad_token_is_unauthorized() {
    let state = test_helpers::test_app_state_with_token("good-token");
    let (status, _) = send(&state, Method::PUT, "/greet/greeting/hello", Some("forged"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(state.greeting().await, "Ciao");
}

#[tokio::test]
async fn put_with_verifier_down_is_bad_gateway() {
    let state = AppState::new("Ciao", Some(Arc::new(DownVerifier)));
    let (status, _) = send(&state, Method::PUT, "/greet/greeting/hello", Some("any"), None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

// =============================================================================
// POST /greet/greeting and /greet/slowgreeting
// =============================================================================

#[tokio::test]
async fn post_json_updates_greeting() {
    let state = test_helpers::test_app_state();
    let (status, body) = send(&state, Method::POST, "/greet/greeting", None, Some(json!({"greeting": "Howdy"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"greeting": "Howdy"}));
    assert_eq!(state.greeting().await, "Howdy");
}

#[tokio::test]
async fn post_json_without_greeting_is_bad_request() {
    let state = test_helpers::test_app_state();
    let (status, body) = send(&state, Method::POST, "/greet/greeting", None, Some(json!({"greeting": null}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "No greeting in your JSON");
    assert_eq!(state.greeting().await, "Ciao");
}

#[tokio::test]
async fn slow_post_applies_after_delay() {
    let state = test_helpers::test_app_state();
    let (status, body) = send(
        &state,
        Method::POST,
        "/greet/slowgreeting",
        None,
        Some(json!({"greeting": "Hi", "delay": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"greeting": "Hi"}));
}

#[tokio::test]
async fn slow_post_defaults_to_two_seconds() {
    let state = test_helpers::test_app_state();
    let started = std::time::Instant::now();
    let (status, _) = send(&state, Method::POST, "/greet/slowgreeting", None, Some(json!({"greeting": "Hi"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_secs(DEFAULT_SLOW_DELAY_SECS));
}

// =============================================================================
// Access counter
// =============================================================================

#[tokio::test]
async fn every_greet_request_is_counted() {
    let state = test_helpers::test_app_state();
    send(&state, Method::GET, "/greet", None, None).await;
    send(&state, Method::GET, "/greet/greeting", None, None).await;
    send(&state, Method::GET, "/greet/Joe", None, None).await;
    send(&state, Method::GET, "/health", None, None).await;
    assert_eq!(state.access_count(), 3);
}
