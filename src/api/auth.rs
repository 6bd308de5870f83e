//! Login and registration exchange.
use super::client::{parse_json, ApiClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Exchanges credentials for a bearer token.
pub async fn login(client: &ApiClient, username: String, password: String) -> Result<String> {
    let body = client
        .exchange("/login", &Credentials { username, password })
        .await?;

    let TokenResponse { access_token } = parse_json(&body)?;
    Ok(access_token)
}

/// Creates a new account.
pub async fn register(client: &ApiClient, username: String, password: String) -> Result<()> {
    client
        .exchange("/register", &Credentials { username, password })
        .await?;

    Ok(())
}

/// User credentials for authentication.
#[derive(Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}
