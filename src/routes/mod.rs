//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the `/greet` REST API, the health/readiness/metrics
//! endpoints and the static web UI under a single Axum router. Unmatched
//! paths fall through to the web root, whose `index.html` hosts the client.
//! The index page is served with the configured Google client id filled into
//! its `google-signin-client_id` meta tag, so the UI and the token verifier
//! share one audience.


pub mod auth;
pub mod greet;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::middleware;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post, put};
use serde_json::json;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Empty client-id meta tag attributes as shipped in `client/index.html`.
const EMPTY_CLIENT_ID_META: &str = r#"name="google-signin-client_id" content="""#;

/// Prometheus name of the `/greet` access counter.
pub const ACCESS_COUNTER_METRIC: &str = "application:accessctr";

/// `/greet` routes, each request counted by `greet::count_access`.
fn greet_routes(state: AppState) -> Router {
    Router::new()
        .route("/greet", get(greet::default_message))
        .route("/greet/", get(greet::default_message))
        .route("/greet/greeting", get(greet::get_greeting).post(greet::update_greeting_json))
        .route("/greet/greeting/{greeting}", put(greet::update_greeting))
        .route("/greet/slowgreeting", post(greet::update_greeting_json_slowly))
        .route("/greet/{name}", get(greet::named_message))
        .route_layer(middleware::from_fn_with_state(state.clone(), greet::count_access))
        .with_state(state)
}

/// Health, readiness and metrics endpoints.
fn ops_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// `index.html` with the client id filled in; other assets come from `ServeDir`.
fn index_routes(state: AppState, web_root: &Path) -> Router {
    let index_path = web_root.join("index.html");
    let handler = move |State(state): State<AppState>| index_page(state, index_path.clone());
    Router::new()
        .route("/", get(handler.clone()))
        .route("/index.html", get(handler))
        .with_state(state)
}

/// Full application: API routes + static web UI from `web_root`.
pub fn app(state: AppState, web_root: &Path) -> Router {
    let web = ServeDir::new(web_root).append_index_html_on_directories(true);
    greet_routes(state.clone())
        .merge(ops_routes(state.clone()))
        .merge(index_routes(state, web_root))
        .fallback_service(web)
        .layer(TraceLayer::new_for_http())
}

async fn index_page(state: AppState, path: PathBuf) -> Response {
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(render_index(&html, state.google_client_id.as_deref())).into_response(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "index page unavailable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Fill the empty client-id meta tag in `html`. Left untouched without an id.
fn render_index(html: &str, client_id: Option<&str>) -> String {
    let Some(client_id) = client_id else {
        return html.to_owned();
    };
    let filled = format!(r#"name="google-signin-client_id" content="{}""#, escape_attr(client_id));
    html.replacen(EMPTY_CLIENT_ID_META, &filled, 1)
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "outcome": "UP",
        "checks": [{ "name": "greet", "state": "UP" }],
    }))
}

async fn ready() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Ready!")
}

fn render_metrics(access_count: u64) -> String {
    format!("# TYPE {ACCESS_COUNTER_METRIC} counter\n{ACCESS_COUNTER_METRIC} {access_count}\n")
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        render_metrics(state.access_count()),
    )
}
