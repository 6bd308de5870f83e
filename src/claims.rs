//! Bearer token claims.
use serde::Deserialize;
use time::OffsetDateTime;

/// Claims carried in a token issued by the Cantor API.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Subject, the user's id.
    pub sub: i64,
    pub username: String,
    pub role: String,

    /// Issued at, Unix seconds.
    pub iat: i64,

    /// Expiry, Unix seconds.
    pub exp: i64,
}

/// Identity derived from the stored credential.
///
/// Informational only. The client can not verify the token, so decoded
/// claims are used for display and never for authorization decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub subject: i64,
    pub username: String,
    pub role: String,
    pub issued_at: OffsetDateTime,
    pub expires_at: OffsetDateTime,
}

/// Decodes the claims segment of a bearer token.
///
/// Best effort: any malformed token yields `None`. Expiry is not checked
/// against the clock; the server remains the authority on validity.
pub fn decode(token: &str) -> Option<Identity> {
    let mut segments = token.split('.');
    segments.next()?; // header
    let payload = segments.next()?;
    segments.next()?; // signature

    let payload = base64::decode_config(payload, base64::URL_SAFE_NO_PAD).ok()?;
    let claims: TokenClaims = serde_json::from_slice(&payload).ok()?;

    let issued_at = OffsetDateTime::from_unix_timestamp(claims.iat).ok()?;
    let expires_at = OffsetDateTime::from_unix_timestamp(claims.exp).ok()?;

    Some(Identity {
        subject: claims.sub,
        username: claims.username,
        role: claims.role,
        issued_at,
        expires_at,
    })
}

#[cfg(test)]
#[path = "./claims_test.rs"]
mod claims_test;
