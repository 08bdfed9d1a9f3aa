//! In-memory doubles for the session, transport and page seams.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::net::api::{ApiRequest, Transport, TransportError};
use crate::session::{Session, SessionError, SessionProvider};
use crate::state::page::{PageState, PageView};

/// Transport answering from a per-URL script; unscripted URLs fail with 404.
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<HashMap<String, Result<Value, TransportError>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, response: Result<Value, TransportError>) {
        self.responses.borrow_mut().insert(url.to_owned(), response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let url = request.url.clone();
        self.sent.borrow_mut().push(request);
        match self.responses.borrow().get(&url) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(TransportError::Status(code))) => Err(TransportError::Status(*code)),
            Some(Err(e)) => Err(TransportError::Network(e.to_string())),
            None => Err(TransportError::Status(404)),
        }
    }
}

/// Session provider holding a scripted session; `sign_out` drops the token.
pub struct FakeSession {
    current: RefCell<Result<Session, SessionError>>,
    sign_outs: Cell<usize>,
}

impl FakeSession {
    pub fn signed_in(token: &str, email: &str) -> Self {
        Self { current: RefCell::new(Ok(Session::signed_in(token, email))), sign_outs: Cell::new(0) }
    }

    pub fn signed_out() -> Self {
        Self { current: RefCell::new(Ok(Session::signed_out())), sign_outs: Cell::new(0) }
    }

    pub fn failing(error: SessionError) -> Self {
        Self { current: RefCell::new(Err(error)), sign_outs: Cell::new(0) }
    }

    pub fn sign_outs(&self) -> usize {
        self.sign_outs.get()
    }
}

#[async_trait(?Send)]
impl SessionProvider for FakeSession {
    fn current_session(&self) -> Result<Session, SessionError> {
        self.current.borrow().clone()
    }

    async fn sign_out(&self) {
        self.sign_outs.set(self.sign_outs.get() + 1);
        *self.current.borrow_mut() = Ok(Session::signed_out());
    }
}

/// Page state in a plain cell.
#[derive(Default)]
pub struct MemoryView {
    state: RefCell<PageState>,
}

impl PageView for MemoryView {
    fn apply(&self, f: impl FnOnce(&mut PageState)) {
        f(&mut self.state.borrow_mut());
    }

    fn snapshot(&self) -> PageState {
        self.state.borrow().clone()
    }
}
