//! Google ID-token verification via the `tokeninfo` endpoint.

#[cfg(test)]
#[path = "google_test.rs"]
mod google_test;

use serde::Deserialize;

pub const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Identity behind a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    pub subject: String,
    pub email: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("token issued for another client")]
    AudienceMismatch,
    #[error("token verification unavailable: {0}")]
    Upstream(String),
}

/// Checks a bearer token and resolves the user it was issued to.
#[async_trait::async_trait]
pub trait TokenVerifier: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the token is rejected or cannot be checked.
    async fn verify(&self, token: &str) -> Result<VerifiedUser, AuthError>;
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    sub: String,
    email: Option<String>,
}

/// Accept `info` only if it was issued for `client_id`.
fn check_claims(info: TokenInfo, client_id: &str) -> Result<VerifiedUser, AuthError> {
    if info.aud != client_id {
        return Err(AuthError::AudienceMismatch);
    }
    Ok(VerifiedUser { subject: info.sub, email: info.email })
}

/// Verifier asking Google to validate ID tokens for one OAuth client.
#[derive(Debug, Clone)]
pub struct GoogleTokenVerifier {
    http: reqwest::Client,
    client_id: String,
    endpoint: String,
}

impl GoogleTokenVerifier {
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self::with_endpoint(client_id, TOKENINFO_URL)
    }

    #[must_use]
    pub fn with_endpoint(client_id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), client_id: client_id.into(), endpoint: endpoint.into() }
    }
}

#[async_trait::async_trait]
impl TokenVerifier for GoogleTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedUser, AuthError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))?;

        let status = resp.status();
        if status.is_client_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::InvalidToken(format!("{status}: {body}")));
        }
        if !status.is_success() {
            return Err(AuthError::Upstream(status.to_string()));
        }

        let info = resp
            .json::<TokenInfo>()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))?;
        check_claims(info, &self.client_id)
    }
}
