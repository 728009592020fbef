//! Normalized backend failure
//!
//! Every non-success outcome of a request (transport error, non-2xx status,
//! undecodable body) becomes a [`Failure`]. Page controllers only ever look
//! at this type, never at transport-specific error shapes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Where a request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Network unreachable, connection refused, timeout
    Transport,
    /// The backend answered with a non-2xx status
    Status,
    /// A 2xx body did not have the expected shape
    Decode,
}

/// Uniform failure value produced at the API client boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    /// HTTP status, when a response was received
    pub status: Option<u16>,
    /// Structured `message` field of a JSON error body
    pub message: Option<String>,
    /// Raw server text when no structured field is present
    pub server_message: Option<String>,
    /// Diagnostic detail for the event log. Never shown to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Failure {
    /// Transport-level failure; the detail is kept for logs only
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            status: None,
            message: None,
            server_message: None,
            detail: Some(detail.into()),
        }
    }

    /// Body of a 2xx response could not be decoded
    pub fn decode(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Decode,
            status: None,
            message: None,
            server_message: None,
            detail: Some(detail.into()),
        }
    }

    /// Normalize a non-2xx response from its status and raw body
    ///
    /// A JSON object contributes its `message` string as the structured
    /// message, or its `error` string as the server message. A JSON string or
    /// plain-text body becomes the server message. Any other shape carries no
    /// displayable text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let (message, server_message) = match serde_json::from_str::<JsonValue>(body) {
            Ok(JsonValue::Object(map)) => {
                let message = non_blank(map.get("message").and_then(|v| v.as_str()));
                let server_message = non_blank(map.get("error").and_then(|v| v.as_str()));
                (message, server_message)
            }
            Ok(JsonValue::String(s)) => (None, non_blank(Some(&s))),
            Ok(_) => (None, None),
            Err(_) => (None, non_blank(Some(body))),
        };

        Self {
            kind: FailureKind::Status,
            status: Some(status),
            message,
            server_message,
            detail: None,
        }
    }

    /// Whether the backend rejected the credentials or the token
    pub fn is_auth(&self) -> bool {
        matches!(self.status, Some(401) | Some(403))
    }

    /// Whether the failure carries any server-supplied text
    pub fn has_server_text(&self) -> bool {
        self.message.is_some() || self.server_message.is_some()
    }

    /// Message to show the user: structured message, else raw server text,
    /// else the page's fallback
    pub fn user_message(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .or(self.server_message.as_deref())
            .unwrap_or(fallback)
            .to_string()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .message
            .as_deref()
            .or(self.server_message.as_deref())
            .or(self.detail.as_deref());
        match (self.status, text) {
            (Some(status), Some(text)) => write!(f, "HTTP {}: {}", status, text),
            (Some(status), None) => write!(f, "HTTP {}", status),
            (None, Some(text)) => write!(f, "{}", text),
            (None, None) => write!(f, "request failed"),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
