//! Typed letter service API
//!
//! Maps the seven backend endpoints onto domain types. Encoding and decoding
//! problems are reported as `Failure`s of kind `Decode`, so callers handle a
//! single failure type whatever went wrong.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use url::Url;

use crate::domain::{
    Failure, Letter, LetterSummary, LoginRequest, RegisterRequest, SendLetterRequest,
    SessionToken, User,
};
use crate::ports::Backend;

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const ME_PATH: &str = "/api/auth/me";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const SEND_LETTER_PATH: &str = "/api/letters/send";
pub const RECEIVED_LETTERS_PATH: &str = "/api/letters/received";
pub const LETTERS_PATH: &str = "/api/letters";

#[derive(Clone)]
pub struct LetterApi {
    backend: Arc<dyn Backend>,
}

impl LetterApi {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn register(&self, request: &RegisterRequest) -> Result<(), Failure> {
        self.backend.post(REGISTER_PATH, &encode(request)?, None)?;
        Ok(())
    }

    /// Log in and extract the session token
    ///
    /// The response may be `{"token": "..."}` or the bare token string.
    pub fn login(&self, request: &LoginRequest) -> Result<SessionToken, Failure> {
        let body = self.backend.post(LOGIN_PATH, &encode(request)?, None)?;
        SessionToken::from_login_response(&body)
            .ok_or_else(|| Failure::decode("Login response did not contain a token"))
    }

    pub fn me(&self, token: &SessionToken) -> Result<User, Failure> {
        decode(self.backend.get(ME_PATH, Some(token))?, "user")
    }

    pub fn logout(&self, token: &SessionToken) -> Result<(), Failure> {
        self.backend
            .post(LOGOUT_PATH, &JsonValue::Object(Default::default()), Some(token))?;
        Ok(())
    }

    pub fn send_letter(
        &self,
        request: &SendLetterRequest,
        token: &SessionToken,
    ) -> Result<(), Failure> {
        self.backend
            .post(SEND_LETTER_PATH, &encode(request)?, Some(token))?;
        Ok(())
    }

    pub fn received(&self, token: &SessionToken) -> Result<Vec<LetterSummary>, Failure> {
        let body = self.backend.get(RECEIVED_LETTERS_PATH, Some(token))?;
        // Some backends answer an empty inbox with no body at all
        if body.is_null() {
            return Ok(Vec::new());
        }
        decode(body, "letter list")
    }

    pub fn letter(&self, id: &str, token: &SessionToken) -> Result<Letter, Failure> {
        decode(self.backend.get(&letter_path(id)?, Some(token))?, "letter")
    }
}

/// `/api/letters/:id` with the id percent-encoded as one path segment
pub fn letter_path(id: &str) -> Result<String, Failure> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|e| Failure::decode(format!("Failed to build letter path: {}", e)))?;
    url.path_segments_mut()
        .map_err(|()| Failure::decode("Failed to build letter path"))?
        .pop_if_empty()
        .extend(LETTERS_PATH.split('/').filter(|s| !s.is_empty()))
        .push(id);
    Ok(url.path().to_string())
}

fn encode<T: Serialize>(request: &T) -> Result<JsonValue, Failure> {
    serde_json::to_value(request)
        .map_err(|e| Failure::decode(format!("Failed to encode request: {}", e)))
}

fn decode<T: DeserializeOwned>(body: JsonValue, what: &str) -> Result<T, Failure> {
    serde_json::from_value(body)
        .map_err(|e| Failure::decode(format!("Failed to parse {} response: {}", what, e)))
}
