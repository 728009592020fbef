//! Form drafts and the request bodies they validate into
//!
//! Drafts live in memory only. A draft with any required field blank after
//! trimming never turns into a request.

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

pub const LOGIN_FIELDS_MESSAGE: &str = "Please enter your username and password.";
pub const REGISTER_FIELDS_MESSAGE: &str = "Please fill in your name, username and password!";
pub const LETTER_FIELDS_MESSAGE: &str =
    "Please fill in the title, recipient username and content!";

fn required(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Login screen draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Username is trimmed; the password is sent as typed but must not be blank
    pub fn to_request(&self) -> Result<LoginRequest> {
        match (required(&self.username), required(&self.password)) {
            (Some(username), Some(_)) => Ok(LoginRequest {
                username: username.to_string(),
                password: self.password.clone(),
            }),
            _ => Err(Error::validation(LOGIN_FIELDS_MESSAGE)),
        }
    }
}

/// Registration screen draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl RegisterForm {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// All three fields are trimmed and sent trimmed
    pub fn to_request(&self) -> Result<RegisterRequest> {
        match (
            required(&self.name),
            required(&self.username),
            required(&self.password),
        ) {
            (Some(name), Some(username), Some(password)) => Ok(RegisterRequest {
                name: name.to_string(),
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => Err(Error::validation(REGISTER_FIELDS_MESSAGE)),
        }
    }
}

/// Compose screen draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterDraft {
    pub title: String,
    pub recipient_username: String,
    pub content: String,
}

/// Body of `POST /api/letters/send`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendLetterRequest {
    pub title: String,
    pub recipient_username: String,
    pub content: String,
    pub sender_username: String,
}

impl LetterDraft {
    pub fn new(
        title: impl Into<String>,
        recipient_username: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            recipient_username: recipient_username.into(),
            content: content.into(),
        }
    }

    pub fn to_request(&self, sender_username: &str) -> Result<SendLetterRequest> {
        match (
            required(&self.title),
            required(&self.recipient_username),
            required(&self.content),
        ) {
            (Some(title), Some(recipient), Some(content)) => Ok(SendLetterRequest {
                title: title.to_string(),
                recipient_username: recipient.to_string(),
                content: content.to_string(),
                sender_username: sender_username.to_string(),
            }),
            _ => Err(Error::validation(LETTER_FIELDS_MESSAGE)),
        }
    }
}
