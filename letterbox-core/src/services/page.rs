//! Page lifecycle building blocks
//!
//! A page load goes `Initializing → Loading → Ready | Unauthenticated |
//! Failed`. Loads are split into `begin` (token check, ticket) and `settle`
//! (apply the outcome) so a host that runs the request elsewhere can hand the
//! result back later. A result settled after the page was unmounted, or for a
//! load that has since been superseded, is dropped without side effects.

use crate::domain::result::{Error, Result};
use crate::domain::{Failure, SessionToken};

use super::guard::AuthGuard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<T> {
    Initializing,
    Loading,
    Ready(T),
    Unauthenticated,
    Failed(String),
}

impl<T> PageState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Initializing
    }
}

/// Identifies one load; only the latest ticket of a mounted page settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// One fetch-backed slot of page state
#[derive(Debug)]
pub struct Loadable<T> {
    state: PageState<T>,
    generation: u64,
    mounted: bool,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            state: PageState::Initializing,
            generation: 0,
            mounted: true,
        }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    pub fn value(&self) -> Option<&T> {
        self.state.ready()
    }

    /// Start a load: issue a ticket and obtain the token
    ///
    /// Without a token the slot becomes `Unauthenticated` and the guard has
    /// already redirected; no request must be made. A session store that
    /// cannot be read leaves the slot `Failed` with the storage error.
    pub fn begin(&mut self, guard: &AuthGuard<'_>) -> Result<(LoadTicket, SessionToken)> {
        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        self.state = PageState::Loading;

        match guard.token() {
            Ok(token) => Ok((ticket, token)),
            Err(Error::AuthRequired) => {
                self.state = PageState::Unauthenticated;
                Err(Error::AuthRequired)
            }
            Err(e) => {
                self.state = PageState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Apply a fetch outcome. Stale tickets are ignored and return `Ok`.
    pub fn settle(
        &mut self,
        guard: &AuthGuard<'_>,
        ticket: LoadTicket,
        outcome: std::result::Result<T, Failure>,
    ) -> Result<()> {
        if !self.is_current(ticket) {
            return Ok(());
        }

        match guard.resolve(outcome) {
            Ok(value) => {
                self.state = PageState::Ready(value);
                Ok(())
            }
            Err(e) => {
                self.state = PageState::Failed(guard.message_for(&e));
                Err(e)
            }
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.mounted && ticket.0 == self.generation
    }

    /// Back to `Initializing`; any outstanding ticket becomes stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = PageState::Initializing;
    }

    /// The page went away; outstanding results are discarded
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

/// Submit control state for form screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
}

impl Submission {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    /// Disable the control; a second in-flight submit is refused
    pub fn begin(&mut self) -> Result<()> {
        if self.is_submitting() {
            return Err(Error::Busy);
        }
        *self = Submission::Submitting;
        Ok(())
    }

    pub fn finish(&mut self) {
        *self = Submission::Idle;
    }
}
