//! Result and error types for the core library

use thiserror::Error;

use super::failure::{Failure, FailureKind};

/// Core library error type
///
/// The first group mirrors what a screen can run into while talking to the
/// letter service. Page controllers surface those themselves (notice plus,
/// for auth failures, a forced navigation), so front-ends should not report
/// them a second time; see [`Error::is_surfaced`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Login required")]
    AuthRequired,

    #[error("Authentication rejected: {0}")]
    AuthInvalid(Failure),

    #[error("Request failed: {0}")]
    Request(Failure),

    #[error("Unrecognized response: {0}")]
    Unknown(Failure),

    #[error("A submission is already in progress")]
    Busy,

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a session storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Classify a backend failure
    ///
    /// 401/403 become `AuthInvalid`; bodies that could not be decoded, and
    /// error responses without any recognizable message, become `Unknown`;
    /// everything else is `Request`.
    pub fn from_failure(failure: Failure) -> Self {
        if failure.is_auth() {
            Self::AuthInvalid(failure)
        } else if failure.kind == FailureKind::Decode
            || (failure.kind == FailureKind::Status && !failure.has_server_text())
        {
            Self::Unknown(failure)
        } else {
            Self::Request(failure)
        }
    }

    /// Whether a page controller already showed this error to the user
    pub fn is_surfaced(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::AuthRequired
                | Self::AuthInvalid(_)
                | Self::Request(_)
                | Self::Unknown(_)
                | Self::Busy
        )
    }

    /// The backend failure behind this error, if any
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::AuthInvalid(f) | Self::Request(f) | Self::Unknown(f) => Some(f),
            _ => None,
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
