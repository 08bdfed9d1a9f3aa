//! HTTP-facing error type for route handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::google::AuthError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No greeting in your JSON")]
    MissingGreeting,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingGreeting => StatusCode::BAD_REQUEST,
            Self::Auth(AuthError::Upstream(_)) => StatusCode::BAD_GATEWAY,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
