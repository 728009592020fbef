//! Backend port - raw HTTP access to the letter service

use serde_json::Value as JsonValue;

use crate::domain::{Failure, SessionToken};

/// Untyped request/response access to the backend
///
/// Paths are relative to the configured base URL. When a token is given it
/// is sent as `Authorization: Bearer <token>`. A 2xx response yields its
/// body (JSON when it parses, `null` when empty, a JSON string otherwise);
/// everything else is normalized into a [`Failure`].
pub trait Backend: Send + Sync {
    fn get(&self, path: &str, token: Option<&SessionToken>) -> Result<JsonValue, Failure>;

    fn post(
        &self,
        path: &str,
        body: &JsonValue,
        token: Option<&SessionToken>,
    ) -> Result<JsonValue, Failure>;
}
