use super::*;

#[test]
fn from_meta_keeps_client_id() {
    let config = ClientConfig::from_meta(Some("123.apps.googleusercontent.com"));
    assert_eq!(config.google_client_id.as_deref(), Some("123.apps.googleusercontent.com"));
}

#[test]
fn from_meta_trims_whitespace() {
    let config = ClientConfig::from_meta(Some("  abc  "));
    assert_eq!(config.google_client_id.as_deref(), Some("abc"));
}

#[test]
fn from_meta_blank_or_missing_is_none() {
    assert_eq!(ClientConfig::from_meta(Some("   ")), ClientConfig::default());
    assert_eq!(ClientConfig::from_meta(None), ClientConfig::default());
}

#[test]
fn meta_selector_quotes_name() {
    assert_eq!(meta_selector(CLIENT_ID_META), "meta[name=\"google-signin-client_id\"]");
}
