//! Shared page context and the authenticated-fetch guard
//!
//! Every protected screen runs the same sequence: read the token, redirect
//! to Login when there is none (before any request), run the fetch, and on
//! failure notify the user and possibly drop the session. [`AuthGuard`] is
//! that sequence, parameterized by the failure policy and the page's
//! fallback message.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{Failure, Notice, Route, SessionToken};
use crate::ports::{Backend, Navigator, Notifier, SessionStore};

use super::api::LetterApi;

pub const AUTH_REQUIRED_MESSAGE: &str = "Login required!";

/// Collaborators injected into every page controller
#[derive(Clone)]
pub struct PageContext {
    pub api: LetterApi,
    pub session: Arc<dyn SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

impl PageContext {
    pub fn new(
        backend: Arc<dyn Backend>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api: LetterApi::new(backend),
            session,
            navigator,
            notifier,
        }
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::success(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::info(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::error(message));
    }

    /// Notify a local validation error and hand it back
    pub fn reject(&self, error: Error) -> Error {
        if let Error::Validation(message) = &error {
            self.error(message.clone());
        }
        error
    }
}

/// What a failed protected fetch does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Identity fetches: any failure means the token is unusable
    ClearOnAnyFailure,
    /// Data fetches: only 401/403 drop the session
    ClearOnAuthFailure,
}

pub struct AuthGuard<'a> {
    ctx: &'a PageContext,
    policy: FailurePolicy,
    fallback: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(ctx: &'a PageContext, policy: FailurePolicy, fallback: &'a str) -> Self {
        Self {
            ctx,
            policy,
            fallback,
        }
    }

    /// Current token, or notify + navigate to Login when there is none
    pub fn token(&self) -> Result<SessionToken> {
        match self.ctx.session.get()? {
            Some(token) => Ok(token),
            None => {
                self.ctx.error(AUTH_REQUIRED_MESSAGE);
                self.ctx.navigate(Route::Login);
                Err(Error::AuthRequired)
            }
        }
    }

    /// Interpret the outcome of a fetch made with the guard's token
    pub fn resolve<T>(&self, outcome: std::result::Result<T, Failure>) -> Result<T> {
        let failure = match outcome {
            Ok(value) => return Ok(value),
            Err(failure) => failure,
        };

        self.ctx.error(failure.user_message(self.fallback));

        let drop_session = match self.policy {
            FailurePolicy::ClearOnAnyFailure => true,
            FailurePolicy::ClearOnAuthFailure => failure.is_auth(),
        };
        if drop_session {
            self.ctx.session.clear()?;
            self.ctx.navigate(Route::Login);
            return Err(Error::AuthInvalid(failure));
        }

        Err(Error::from_failure(failure))
    }

    /// Token check, fetch, and outcome handling in one step
    pub fn require<T>(
        &self,
        fetch: impl FnOnce(&SessionToken) -> std::result::Result<T, Failure>,
    ) -> Result<T> {
        let token = self.token()?;
        self.resolve(fetch(&token))
    }

    /// Message the guard showed for a failed fetch
    pub fn message_for(&self, error: &Error) -> String {
        match error {
            Error::AuthRequired => AUTH_REQUIRED_MESSAGE.to_string(),
            other => other
                .failure()
                .map(|f| f.user_message(self.fallback))
                .unwrap_or_else(|| self.fallback.to_string()),
        }
    }
}
