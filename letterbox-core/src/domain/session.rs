//! Session token

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::result::{Error, Result};

/// Opaque bearer credential issued by the backend on login
///
/// Presence of a token does not mean it is valid; the backend decides.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string. Surrounding whitespace is dropped and an
    /// empty token is rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("session token cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Extract the token from a login response body
    ///
    /// Accepts both `{"token": "..."}` and a bare string body.
    pub fn from_login_response(body: &JsonValue) -> Option<Self> {
        let raw = match body {
            JsonValue::Object(map) => map.get("token")?.as_str()?,
            JsonValue::String(s) => s.as_str(),
            _ => return None,
        };
        Self::new(raw).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

impl TryFrom<String> for SessionToken {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SessionToken> for String {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}
