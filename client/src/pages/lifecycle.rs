//! Sign-in gated lifecycle of the greeting page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has two presentation states, signed out and signed in, and the
//! identity provider drives the transitions between them. `PageController`
//! queries the session, toggles page regions, issues the greet requests and
//! routes every outcome to either the result modal or the error modal.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the browser event loop. Requests are not cancelled or
//! de-duplicated, so a slow response still lands after a newer state change
//! and overwrites it.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use serde_json::Value;

use crate::net::api::{self, GREETING_ENDPOINT, Transport, TransportError};
use crate::net::types::{GreetingPayload, MessagePayload, is_empty_payload};
use crate::session::{Session, SessionError, SessionProvider};
use crate::state::error::ErrorPayload;
use crate::state::page::{Modal, PageView};

pub const GREETING_FETCH_ERROR: &str = "Error: unable to get current greet value.";
pub const GREETING_MISSING_ERROR: &str = "greeting is empty";

#[must_use]
pub fn update_confirmation(greeting: &str) -> String {
    format!("Greeting value updated to: {greeting}")
}

/// Drives the greeting page against an injected session, transport and view.
pub struct PageController<S, T, V> {
    session: S,
    transport: T,
    view: V,
}

impl<S, T, V> PageController<S, T, V>
where
    S: SessionProvider,
    T: Transport,
    V: PageView,
{
    pub fn new(session: S, transport: T, view: V) -> Self {
        Self { session, transport, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // =========================================================================
    // SESSION ACCESSOR
    // =========================================================================

    /// The provider's current session, unchecked.
    ///
    /// # Errors
    ///
    /// Passes through the provider's `SessionError`.
    pub fn current_user(&self) -> Result<Session, SessionError> {
        self.session.current_session()
    }

    /// Identity token of the current session.
    ///
    /// A provider failure is shown as an authentication error and reported
    /// as "no token".
    pub fn access_token(&self) -> Option<String> {
        match self.session.current_session() {
            Ok(session) => session.id_token,
            Err(e) => {
                self.clear_page_error(e.into_payload());
                None
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.access_token().is_some()
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Initial entry: pick the signed-in or signed-out chrome, then load the page.
    pub async fn load_page0(&self) {
        let signed_in = self.is_signed_in();
        if signed_in {
            let email = match self.current_user() {
                Ok(session) => session.email,
                Err(e) => {
                    log::warn!("signed in but profile unavailable: {e}");
                    String::new()
                }
            };
            self.view.apply(|page| {
                page.signin_button_visible = false;
                page.email_text = email;
                page.signout_bound = true;
                page.userinfo_visible = true;
            });
        } else {
            self.view.apply(|page| {
                page.userinfo_visible = false;
                page.signin_button_visible = true;
            });
        }
        self.load_page(signed_in).await;
    }

    /// Entry when the identity SDK failed to start: show the error, then
    /// carry on signed out so the greeting form still works.
    pub async fn load_page0_without_session(&self, error: SessionError) {
        self.clear_page_error(error.into_payload());
        self.load_page0().await;
    }

    /// Bind the greeting form, then either reveal the page (signed out) or
    /// fetch the current greeting and reveal it with the update form.
    pub async fn load_page(&self, signed_in: bool) {
        self.view.apply(|page| page.greeting_form_bound = true);
        if !signed_in {
            self.reveal_page();
            return;
        }

        let Ok(data) = self.get(GREETING_ENDPOINT).await else {
            return;
        };
        let Some(payload) = GreetingPayload::from_value(&data) else {
            if is_empty_payload(&data) {
                log::warn!("empty greeting payload");
            } else {
                log::warn!("greeting payload without greeting: {data}");
            }
            self.clear_page_error(GREETING_FETCH_ERROR);
            return;
        };

        self.render_update_greeting(&payload.greeting);
        self.view.apply(|page| page.update_form_bound = true);
        self.reveal_page();
    }

    /// Fill the update-greeting section from its template context.
    pub fn render_update_greeting(&self, greeting: &str) {
        let greeting = greeting.to_owned();
        self.view.apply(|page| page.update_greeting = Some(greeting));
    }

    /// Clear the update-greeting section and fade the page out.
    pub fn clear_page(&self) {
        self.view.apply(|page| {
            page.update_greeting = None;
            page.update_form_bound = false;
            page.page_wrapper_visible = false;
        });
    }

    /// After sign-out: reset the page and start over signed out.
    pub async fn clear_page_sign_in(&self) {
        self.clear_page();
        self.view.apply(|page| page.email_text.clear());
        self.load_page0().await;
    }

    /// After an authentication (or greeting fetch) error: reset the page and
    /// show the error.
    pub fn clear_page_error(&self, payload: impl Into<ErrorPayload>) {
        let payload = payload.into();
        log::warn!("clear page on error: {payload:?}");
        self.clear_page();
        self.display_error(payload.message());
    }

    /// Sign out with the provider, then return to the signed-out page.
    pub async fn sign_out(&self) {
        self.session.sign_out().await;
        self.clear_page_sign_in().await;
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Greet `name`, or the world when no name was given.
    pub async fn do_greeting(&self, name: Option<String>) {
        let url = api::greet_endpoint(name.as_deref());
        let Ok(data) = self.get(&url).await else {
            return;
        };
        match MessagePayload::from_value(&data) {
            Some(payload) => self.display_result(payload.message),
            None => log::warn!("greet response without message: {data}"),
        }
    }

    /// Push a new greeting. An absent value is rejected without a request;
    /// an empty one is sent as-is.
    pub async fn do_update_greeting(&self, greeting: Option<String>) {
        let Some(greeting) = greeting else {
            self.display_error(GREETING_MISSING_ERROR);
            return;
        };
        let url = api::update_greeting_endpoint(&greeting);
        let Ok(data) = self.put(&url, None).await else {
            return;
        };
        match GreetingPayload::from_value(&data) {
            Some(payload) => self.display_result(update_confirmation(&payload.greeting)),
            None => log::warn!("update response without greeting: {data}"),
        }
    }

    // =========================================================================
    // PRESENTATION
    // =========================================================================

    pub fn display_result(&self, msg: impl Into<String>) {
        let modal = Modal::result(msg);
        self.view.apply(|page| page.modal = Some(modal));
    }

    pub fn display_error(&self, msg: impl Into<String>) {
        let modal = Modal::error(msg);
        self.view.apply(|page| page.modal = Some(modal));
    }

    fn reveal_page(&self) {
        self.view.apply(|page| page.page_wrapper_visible = true);
    }

    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        let token = self.access_token();
        api::get(&self.transport, url, token).await
    }

    async fn put(&self, url: &str, body: Option<Value>) -> Result<Value, TransportError> {
        let token = self.access_token();
        api::put(&self.transport, url, body, token).await
    }
}
