//! Identity session access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page never owns the session: the identity provider creates and
//! destroys it, and the page only asks whether someone is signed in, who,
//! and with which identity token. `SessionProvider` is that narrow seam;
//! `google::GoogleSession` binds it to the Google Identity SDK in the
//! browser.

#[cfg(feature = "csr")]
pub mod google;


use async_trait::async_trait;

use crate::state::error::ErrorPayload;

/// Snapshot of the identity provider's current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Identity token, present only while a user is authenticated.
    pub id_token: Option<String>,
    /// Basic-profile email; display only.
    pub email: String,
}

impl Session {
    #[must_use]
    pub fn signed_in(id_token: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id_token: Some(id_token.into()), email: email.into() }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }
}

/// Reading the session failed (SDK not loaded, not initialised, ...).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("session unavailable: {payload}")]
pub struct SessionError {
    payload: ErrorPayload,
}

impl SessionError {
    #[must_use]
    pub fn new(payload: impl Into<ErrorPayload>) -> Self {
        Self { payload: payload.into() }
    }

    #[must_use]
    pub fn payload(&self) -> &ErrorPayload {
        &self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> ErrorPayload {
        self.payload
    }
}

#[async_trait(?Send)]
pub trait SessionProvider {
    /// The provider's live session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the provider cannot be queried.
    fn current_session(&self) -> Result<Session, SessionError>;

    /// End the session; resolves once the provider has signed out.
    async fn sign_out(&self);
}
