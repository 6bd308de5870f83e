use super::*;
use serde_json::json;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = base64::encode_config(
        br#"{"alg":"HS256","typ":"JWT"}"#,
        base64::URL_SAFE_NO_PAD,
    );

    let payload = base64::encode_config(payload.to_string().as_bytes(), base64::URL_SAFE_NO_PAD);
    format!("{header}.{payload}.sig")
}

#[test]
fn decode_should_extract_claims() {
    let token = token_with_payload(&json!({
        "sub": 1,
        "username": "alice",
        "role": "admin",
        "iat": 1_700_000_000,
        "exp": 1_700_003_600,
    }));

    let identity = decode(&token).expect("token should decode");
    assert_eq!(identity.subject, 1);
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.role, "admin");
    assert_eq!(identity.issued_at.unix_timestamp(), 1_700_000_000);
    assert_eq!(identity.expires_at.unix_timestamp(), 1_700_003_600);
}

#[test]
fn decode_should_not_enforce_expiry() {
    let token = token_with_payload(&json!({
        "sub": 2,
        "username": "bob",
        "role": "user",
        "iat": 0,
        "exp": 1,
    }));

    assert!(
        decode(&token).is_some(),
        "expired claims should still decode"
    );
}

#[test]
fn decode_should_reject_malformed_tokens() {
    let missing_claim = token_with_payload(&json!({
        "sub": 1,
        "role": "admin",
        "iat": 0,
        "exp": 0,
    }));

    let not_json = format!(
        "h.{}.s",
        base64::encode_config(b"not json", base64::URL_SAFE_NO_PAD)
    );

    for token in [
        "",
        "opaque",
        "only.two",
        "bad.!!!.base64",
        not_json.as_str(),
        missing_claim.as_str(),
    ] {
        assert!(decode(token).is_none(), "`{token}` should not decode");
    }
}
