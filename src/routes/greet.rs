//! `/greet` routes: read and change the service's greeting.
//!
//! ```text
//! GET  /greet                      {"message": "Ciao World!"}
//! GET  /greet/Joe                  {"message": "Ciao Joe!"}
//! GET  /greet/greeting             {"greeting": "Ciao"}
//! PUT  /greet/greeting/Hola        {"greeting": "Hola"}   (bearer token)
//! POST /greet/greeting             {"greeting": "Howdy"}
//! POST /greet/slowgreeting         {"greeting": "Hi", "delay": 2}
//! ```

#[cfg(test)]
#[path = "greet_test.rs"]
mod greet_test;

use std::time::Duration;

use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::{Json, Response};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

pub const DEFAULT_SLOW_DELAY_SECS: u64 = 2;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GreetingResponse {
    pub greeting: String,
}

#[derive(Debug, Deserialize)]
pub struct GreetingRequest {
    greeting: Option<String>,
    delay: Option<u64>,
}

fn message(greeting: &str, name: &str) -> String {
    format!("{greeting} {name}!")
}

/// Counts every `/greet` request before handing it on.
pub async fn count_access(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let count = state.record_access();
    tracing::trace!(count, path = %request.uri().path(), "greet access");
    next.run(request).await
}

/// `GET /greet` — greet the world.
pub async fn default_message(State(state): State<AppState>) -> Json<MessageResponse> {
    let greeting = state.greeting().await;
    Json(MessageResponse { message: message(&greeting, "World") })
}

/// `GET /greet/{name}` — greet `name`.
pub async fn named_message(State(state): State<AppState>, Path(name): Path<String>) -> Json<MessageResponse> {
    let greeting = state.greeting().await;
    Json(MessageResponse { message: message(&greeting, &name) })
}

/// `GET /greet/greeting` — the greeting in use.
pub async fn get_greeting(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(GreetingResponse { greeting: state.greeting().await })
}

/// `PUT /greet/greeting/{greeting}` — authenticated greeting change.
pub async fn update_greeting(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(greeting): Path<String>,
) -> Json<GreetingResponse> {
    let greeting = state.set_greeting(greeting).await;
    tracing::info!(
        %greeting,
        by = auth.user.as_ref().map_or("anonymous", |u| u.subject.as_str()),
        "greeting updated"
    );
    Json(GreetingResponse { greeting })
}

/// `POST /greet/greeting` — greeting change from a JSON body.
pub async fn update_greeting_json(
    State(state): State<AppState>,
    Json(body): Json<GreetingRequest>,
) -> Result<Json<GreetingResponse>, ApiError> {
    let greeting = body.greeting.ok_or(ApiError::MissingGreeting)?;
    let greeting = state.set_greeting(greeting).await;
    tracing::info!(%greeting, "greeting updated from json");
    Ok(Json(GreetingResponse { greeting }))
}

/// `POST /greet/slowgreeting` — like `POST /greet/greeting`, after `delay`
/// seconds (default 2).
pub async fn update_greeting_json_slowly(
    State(state): State<AppState>,
    Json(body): Json<GreetingRequest>,
) -> Result<Json<GreetingResponse>, ApiError> {
    let greeting = body.greeting.ok_or(ApiError::MissingGreeting)?;
    let delay = Duration::from_secs(body.delay.unwrap_or(DEFAULT_SLOW_DELAY_SECS));
    let span = tracing::info_span!("update_greeting_slowly", delay_secs = delay.as_secs());
    async move {
        tokio::time::sleep(delay).await;
        let greeting = state.set_greeting(greeting).await;
        tracing::info!(%greeting, "greeting updated slowly");
        Ok::<_, ApiError>(Json(GreetingResponse { greeting }))
    }
    .instrument(span)
    .await
}
