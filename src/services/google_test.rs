use super::*;

fn info(aud: &str) -> TokenInfo {
    TokenInfo { aud: aud.to_owned(), sub: "1234567890".to_owned(), email: Some("ann@example.com".to_owned()) }
}

#[test]
fn check_claims_accepts_matching_audience() {
    let user = check_claims(info("client-1"), "client-1").unwrap();
    assert_eq!(user.subject, "1234567890");
    assert_eq!(user.email.as_deref(), Some("ann@example.com"));
}

#[test]
fn check_claims_rejects_other_audience() {
    let err = check_claims(info("client-2"), "client-1").unwrap_err();
    assert!(matches!(err, AuthError::AudienceMismatch));
}

#[test]
fn tokeninfo_payload_deserializes() {
    let raw = r#"{"aud":"client-1","sub":"42","email":"bo@example.com","exp":"1700000000","iss":"accounts.google.com"}"#;
    let parsed: TokenInfo = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.aud, "client-1");
    assert_eq!(parsed.sub, "42");
    assert_eq!(parsed.email.as_deref(), Some("bo@example.com"));
}

#[test]
fn tokeninfo_payload_without_email() {
    let parsed: TokenInfo = serde_json::from_str(r#"{"aud":"a","sub":"s"}"#).unwrap();
    assert_eq!(parsed.email, None);
}

#[test]
fn default_verifier_targets_google() {
    let verifier = GoogleTokenVerifier::new("client-1");
    assert_eq!(verifier.endpoint, TOKENINFO_URL);
    assert_eq!(verifier.client_id, "client-1");
}

#[tokio::test]
async fn unreachable_endpoint_is_upstream_error() {
    let verifier = GoogleTokenVerifier::with_endpoint("client-1", "http://127.0.0.1:9/tokeninfo");
    let err = verifier.verify("token").await.unwrap_err();
    assert!(matches!(err, AuthError::Upstream(_)));
}
