//! Client configuration read from the hosting page's markup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `<meta>` tag carrying the Google OAuth client id.
pub const CLIENT_ID_META: &str = "google-signin-client_id";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub google_client_id: Option<String>,
}

impl ClientConfig {
    /// Build from the raw `content` attribute of the client-id meta tag.
    #[must_use]
    pub fn from_meta(content: Option<&str>) -> Self {
        let google_client_id = content
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_owned);
        Self { google_client_id }
    }

    /// Read the configuration from the current document.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(&meta_selector(CLIENT_ID_META)).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        Self::from_meta(content.as_deref())
    }
}

#[cfg(any(test, feature = "csr"))]
fn meta_selector(name: &str) -> String {
    format!("meta[name=\"{name}\"]")
}
