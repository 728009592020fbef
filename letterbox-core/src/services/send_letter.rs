//! Compose screen

use crate::domain::result::Result;
use crate::domain::{Failure, LetterDraft, Route, SessionToken, User};

use super::guard::{AuthGuard, FailurePolicy, PageContext};
use super::my_page::identity_guard;
use super::page::{LoadTicket, Loadable, PageState, Submission};

pub const LETTER_SENT_MESSAGE: &str = "Letter sent!";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send the letter! Please try again.";

/// What a submit did when it returned without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    /// The sender identity has not loaded; nothing was sent
    SenderNotLoaded,
}

pub struct SendLetterPage {
    ctx: PageContext,
    sender: Loadable<User>,
    pub draft: LetterDraft,
    submission: Submission,
}

impl SendLetterPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            sender: Loadable::new(),
            draft: LetterDraft::default(),
            submission: Submission::Idle,
        }
    }

    pub fn state(&self) -> &PageState<User> {
        self.sender.state()
    }

    /// The signed-in user letters will be sent as
    pub fn sender(&self) -> Option<&User> {
        self.sender.value()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    /// Load the sender identity
    pub fn load(&mut self) -> Result<()> {
        let (ticket, token) = self.begin_load()?;
        let outcome = self.ctx.api.me(&token);
        self.settle(ticket, outcome)
    }

    pub fn begin_load(&mut self) -> Result<(LoadTicket, SessionToken)> {
        let guard = identity_guard(&self.ctx);
        self.sender.begin(&guard)
    }

    pub fn settle(
        &mut self,
        ticket: LoadTicket,
        outcome: std::result::Result<User, Failure>,
    ) -> Result<()> {
        let guard = identity_guard(&self.ctx);
        self.sender.settle(&guard, ticket, outcome)
    }

    /// Send the draft as the loaded sender
    ///
    /// Sends nothing until the sender identity is ready.
    pub fn submit(&mut self) -> Result<SendOutcome> {
        let Some(sender) = self.sender.value() else {
            return Ok(SendOutcome::SenderNotLoaded);
        };
        let request = self
            .draft
            .to_request(&sender.username)
            .map_err(|e| self.ctx.reject(e))?;

        self.submission.begin()?;
        let guard = AuthGuard::new(&self.ctx, FailurePolicy::ClearOnAuthFailure, SEND_FAILED_MESSAGE);
        let api = &self.ctx.api;
        let result = guard.require(|token| api.send_letter(&request, token));
        self.submission.finish();
        result?;

        self.draft = LetterDraft::default();
        self.ctx.success(LETTER_SENT_MESSAGE);
        self.ctx.navigate(Route::MyPage);
        Ok(SendOutcome::Sent)
    }

    pub fn unmount(&mut self) {
        self.sender.unmount();
    }
}
