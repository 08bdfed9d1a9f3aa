//! Bearer-token authentication for mutating greet routes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::FromRef;
use axum::http::header::AUTHORIZATION;

use crate::error::ApiError;
use crate::services::google::{AuthError, VerifiedUser};
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub(crate) fn parse_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Caller identity for routes that require authentication.
///
/// `user` is `None` when verification is disabled (no client id configured);
/// otherwise a missing or rejected bearer token rejects the request.
pub struct AuthUser {
    pub user: Option<VerifiedUser>,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(verifier) = app_state.verifier.as_ref() else {
            return Ok(Self { user: None });
        };

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_bearer)
            .ok_or(AuthError::MissingToken)?;

        let user = verifier.verify(token).await?;
        tracing::debug!(subject = %user.subject, "bearer token verified");
        Ok(Self { user: Some(user) })
    }
}
