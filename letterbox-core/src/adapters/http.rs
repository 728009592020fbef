//! Letter service HTTP client
//!
//! Implements the Backend port over a blocking reqwest client. All failure
//! shapes are normalized here; nothing above this layer sees a
//! `reqwest::Error`.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::AUTHORIZATION;
use serde_json::Value as JsonValue;
use url::Url;

use crate::domain::{Failure, SessionToken};
use crate::ports::Backend;

/// HTTP client for the letter service backend
#[derive(Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the given base URL
    ///
    /// The URL must be absolute http(s). Trailing slashes are dropped so
    /// endpoint paths can be appended directly.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .with_context(|| format!("Invalid backend URL: {}", base_url))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("Backend URL must use http or https: {}", base_url);
        }

        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn send(&self, request: RequestBuilder, token: Option<&SessionToken>) -> Result<JsonValue, Failure> {
        let request = match token {
            Some(token) => request.header(AUTHORIZATION, token.bearer()),
            None => request,
        };

        let response = request.send().map_err(|e| self.map_request_error(e))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Failure::transport(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(Failure::from_status(status.as_u16(), &text));
        }

        Ok(parse_body(&text))
    }

    /// Map request errors to log-friendly details
    fn map_request_error(&self, error: reqwest::Error) -> Failure {
        if error.is_timeout() {
            Failure::transport("Connection to the letter service timed out")
        } else if error.is_connect() {
            Failure::transport(format!("Unable to connect to {}", self.base_url))
        } else {
            Failure::transport(format!("Letter service request failed: {}", error))
        }
    }
}

impl Backend for HttpBackend {
    fn get(&self, path: &str, token: Option<&SessionToken>) -> Result<JsonValue, Failure> {
        self.send(self.client.get(self.url(path)), token)
    }

    fn post(
        &self,
        path: &str,
        body: &JsonValue,
        token: Option<&SessionToken>,
    ) -> Result<JsonValue, Failure> {
        self.send(self.client.post(self.url(path)).json(body), token)
    }
}

/// Success bodies: JSON when it parses, `null` when empty, else the raw text
fn parse_body(text: &str) -> JsonValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return JsonValue::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| JsonValue::String(trimmed.to_string()))
}
