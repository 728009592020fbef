//! Inbox and letter detail

use crate::domain::result::Result;
use crate::domain::{Failure, Letter, LetterSummary, SessionToken};

use super::guard::{AuthGuard, FailurePolicy, PageContext};
use super::page::{LoadTicket, Loadable, PageState};

pub const LETTERS_LOAD_FAILED_MESSAGE: &str = "Failed to load letters.";
pub const LETTER_LOAD_FAILED_MESSAGE: &str = "Failed to load the letter.";
pub const EMPTY_INBOX_MESSAGE: &str = "No letters received.";

pub struct LettersPage {
    ctx: PageContext,
    inbox: Loadable<Vec<LetterSummary>>,
    detail: Loadable<Letter>,
}

impl LettersPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            inbox: Loadable::new(),
            detail: Loadable::new(),
        }
    }

    pub fn state(&self) -> &PageState<Vec<LetterSummary>> {
        self.inbox.state()
    }

    /// Received letters; empty until the inbox has loaded
    pub fn letters(&self) -> &[LetterSummary] {
        self.inbox.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected(&self) -> Option<&Letter> {
        self.detail.value()
    }

    pub fn load(&mut self) -> Result<()> {
        let (ticket, token) = self.begin_load()?;
        let outcome = self.ctx.api.received(&token);
        self.settle(ticket, outcome)
    }

    pub fn begin_load(&mut self) -> Result<(LoadTicket, SessionToken)> {
        let guard = AuthGuard::new(&self.ctx, FailurePolicy::ClearOnAuthFailure, LETTERS_LOAD_FAILED_MESSAGE);
        self.inbox.begin(&guard)
    }

    pub fn settle(
        &mut self,
        ticket: LoadTicket,
        outcome: std::result::Result<Vec<LetterSummary>, Failure>,
    ) -> Result<()> {
        let guard = AuthGuard::new(&self.ctx, FailurePolicy::ClearOnAuthFailure, LETTERS_LOAD_FAILED_MESSAGE);
        self.inbox.settle(&guard, ticket, outcome)
    }

    /// Fetch and select one letter. The inbox state is left as it is.
    pub fn open(&mut self, id: &str) -> Result<()> {
        let (ticket, token) = self.begin_open()?;
        let outcome = self.ctx.api.letter(id, &token);
        self.settle_open(ticket, outcome)
    }

    pub fn begin_open(&mut self) -> Result<(LoadTicket, SessionToken)> {
        let guard = AuthGuard::new(&self.ctx, FailurePolicy::ClearOnAuthFailure, LETTER_LOAD_FAILED_MESSAGE);
        self.detail.begin(&guard)
    }

    pub fn settle_open(
        &mut self,
        ticket: LoadTicket,
        outcome: std::result::Result<Letter, Failure>,
    ) -> Result<()> {
        let guard = AuthGuard::new(&self.ctx, FailurePolicy::ClearOnAuthFailure, LETTER_LOAD_FAILED_MESSAGE);
        self.detail.settle(&guard, ticket, outcome)
    }

    /// Close the detail view
    pub fn close(&mut self) {
        self.detail.reset();
    }

    pub fn unmount(&mut self) {
        self.inbox.unmount();
        self.detail.unmount();
    }
}
