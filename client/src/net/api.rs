//! REST transport helpers for the `/greet` endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Everywhere else the `Transport` trait is implemented by test doubles.
//!
//! ERROR HANDLING
//! ==============
//! `get` and `put` never panic. A failed request is logged and handed back
//! as `Err(TransportError)`; callers drop it, so the continuation that would
//! have consumed the response simply does not run. There is no retry.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde_json::Value;

pub const GREET_ENDPOINT: &str = "/greet";
pub const GREETING_ENDPOINT: &str = "/greet/greeting";

const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid request body: {0}")]
    Encode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
        }
    }
}

/// A single same-origin request, fully described before it is sent.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), bearer: None, body: None }
    }

    /// A `PUT` with a JSON body; `None` is sent as JSON `null`.
    #[must_use]
    pub fn put(url: impl Into<String>, body: Option<Value>) -> Self {
        Self { method: Method::Put, url: url.into(), bearer: None, body: Some(body.unwrap_or(Value::Null)) }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    /// Headers to attach, in send order.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if let Some(token) = &self.bearer {
            headers.push(("Authorization", bearer_header_value(token)));
        }
        if self.body.is_some() {
            headers.push(("Accept", "application/json".to_owned()));
            headers.push(("Content-Type", JSON_CONTENT_TYPE.to_owned()));
        }
        headers
    }

    /// Serialized request body, if this request carries one.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Encode` if the body cannot be serialized.
    pub fn encoded_body(&self) -> Result<Option<String>, TransportError> {
        self.body
            .as_ref()
            .map(|body| serde_json::to_string(body).map_err(|e| TransportError::Encode(e.to_string())))
            .transpose()
    }
}

/// Something that can carry an `ApiRequest` to the server.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
}

#[must_use]
pub fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// `GET /greet/{name}`, or `GET /greet` when no name was entered.
#[must_use]
pub fn greet_endpoint(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{GREET_ENDPOINT}/{name}"),
        None => GREET_ENDPOINT.to_owned(),
    }
}

#[must_use]
pub fn update_greeting_endpoint(greeting: &str) -> String {
    format!("{GREETING_ENDPOINT}/{greeting}")
}

/// Parse a response body. An empty body decodes to `null`.
///
/// # Errors
///
/// Returns `TransportError::Decode` for a non-empty body that is not JSON.
pub fn parse_body(text: &str) -> Result<Value, TransportError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Issue a `GET`, attaching `token` as a bearer credential when present.
///
/// # Errors
///
/// Returns the transport failure after logging it.
pub async fn get<T>(transport: &T, url: &str, token: Option<String>) -> Result<Value, TransportError>
where
    T: Transport + ?Sized,
{
    log::debug!("get initiated {url}");
    let request = ApiRequest::get(url).with_bearer(token);
    match transport.send(request).await {
        Ok(data) => {
            log::debug!("get success {url} {data}");
            Ok(data)
        }
        Err(e) => {
            log::warn!("get failed {url}: {e}");
            Err(e)
        }
    }
}

/// Issue a `PUT` with a JSON body, attaching `token` as a bearer credential when present.
///
/// # Errors
///
/// Returns the transport failure after logging it.
pub async fn put<T>(transport: &T, url: &str, body: Option<Value>, token: Option<String>) -> Result<Value, TransportError>
where
    T: Transport + ?Sized,
{
    log::debug!("put initiated {url} {body:?}");
    let request = ApiRequest::put(url, body).with_bearer(token);
    match transport.send(request).await {
        Ok(data) => {
            log::debug!("put success {url} {data}");
            Ok(data)
        }
        Err(e) => {
            log::warn!("put failed {url}: {e}");
            Err(e)
        }
    }
}

/// Browser transport backed by `fetch`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let mut builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Put => gloo_net::http::Request::put(&request.url),
        };
        for (name, value) in request.headers() {
            builder = builder.header(name, &value);
        }
        let resp = match request.encoded_body()? {
            Some(body) => builder
                .body(body)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(TransportError::Status(resp.status()));
        }
        let text = resp.text().await.map_err(|e| TransportError::Decode(e.to_string()))?;
        parse_body(&text)
    }
}
