//! HTTP transport for the Cantor API.
use crate::constants::API_BASE;
use crate::credentials::CredentialStore;
use crate::error::{ApiError, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Client for calls against the Cantor REST API.
///
/// Attaches the stored bearer credential to every request and classifies
/// responses, so the 401 redirect behavior stays uniform across callers.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    credentials: CredentialStore,
}

impl ApiClient {
    pub fn new(credentials: CredentialStore) -> Self {
        Self::with_base(API_BASE, credentials)
    }

    /// Client against an alternate base URL.
    pub fn with_base(base: impl Into<String>, credentials: CredentialStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
            credentials,
        }
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.dispatch(Method::GET, path, None, true).await?;
        parse_json(&body)
    }

    /// POST with the response body discarded.
    pub async fn post(&self, path: &str, body: &impl Serialize) -> Result<()> {
        self.dispatch(Method::POST, path, Some(to_body(body)?), true)
            .await?;
        Ok(())
    }

    /// PUT with the response body discarded.
    pub async fn put(&self, path: &str, body: &impl Serialize) -> Result<()> {
        self.dispatch(Method::PUT, path, Some(to_body(body)?), true)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(Method::DELETE, path, None, true).await?;
        Ok(())
    }

    /// POST for the login and registration exchange.
    ///
    /// Credential rejection there is an application failure whose message
    /// belongs inline on the form, so 401 is not intercepted.
    pub async fn exchange(&self, path: &str, body: &impl Serialize) -> Result<String> {
        self.dispatch(Method::POST, path, Some(to_body(body)?), false)
            .await
    }

    #[tracing::instrument(skip(self, body))]
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        intercept_auth: bool,
    ) -> Result<String> {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base, path))
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.credentials.read() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if intercept_auth && status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthFailure);
        }

        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Application {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        Ok(body)
    }
}

fn to_body(body: &impl Serialize) -> Result<String> {
    serde_json::to_string(body).map_err(|err| ApiError::Network(err.to_string()))
}

pub(super) fn parse_json<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|err| ApiError::Network(err.to_string()))
}

/// Best effort extraction of a human readable failure message.
///
/// The API's error bodies are not consistent across endpoints: prefer a
/// structured `message`, then `error`, then the raw body, then the status
/// line.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(data) = serde_json::from_str::<Value>(body) {
        if let Some(message) = data.get("message").and_then(Value::as_str) {
            return message.to_owned();
        }

        if let Some(message) = data.get("error").and_then(Value::as_str) {
            return message.to_owned();
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_owned();
    }

    match status.canonical_reason() {
        Some(reason) => reason.to_owned(),
        None => format!("Error: {}", status.as_u16()),
    }
}

#[cfg(test)]
#[path = "./client_test.rs"]
mod client_test;
