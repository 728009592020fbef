//! User dashboard

use crate::domain::result::{Error, Result};
use crate::domain::{Failure, Route, SessionToken, User};

use super::guard::{AuthGuard, FailurePolicy, PageContext};
use super::page::{LoadTicket, Loadable, PageState};

pub const USER_LOAD_FAILED_MESSAGE: &str = "Failed to load user information.";
pub const LOGOUT_MESSAGE: &str = "You have been logged out.";

/// Identity fetches treat any failure as an unusable token
pub(crate) fn identity_guard(ctx: &PageContext) -> AuthGuard<'_> {
    AuthGuard::new(ctx, FailurePolicy::ClearOnAnyFailure, USER_LOAD_FAILED_MESSAGE)
}

pub struct MyPage {
    ctx: PageContext,
    user: Loadable<User>,
}

impl MyPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            user: Loadable::new(),
        }
    }

    pub fn state(&self) -> &PageState<User> {
        self.user.state()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.value()
    }

    /// Fetch the signed-in user
    pub fn load(&mut self) -> Result<()> {
        let (ticket, token) = self.begin_load()?;
        let outcome = self.ctx.api.me(&token);
        self.settle(ticket, outcome)
    }

    /// First half of [`MyPage::load`]: token check and ticket
    pub fn begin_load(&mut self) -> Result<(LoadTicket, SessionToken)> {
        let guard = identity_guard(&self.ctx);
        self.user.begin(&guard)
    }

    /// Second half of [`MyPage::load`]. A no-op once the page is unmounted.
    pub fn settle(
        &mut self,
        ticket: LoadTicket,
        outcome: std::result::Result<User, Failure>,
    ) -> Result<()> {
        let guard = identity_guard(&self.ctx);
        self.user.settle(&guard, ticket, outcome)
    }

    pub fn greeting(&self) -> String {
        let name = self.user().map(|u| u.name.as_str()).unwrap_or("Guest");
        format!("Welcome, {}!", name)
    }

    pub fn open_send_letter(&self) {
        self.ctx.navigate(Route::SendLetter);
    }

    pub fn open_letters(&self) {
        self.ctx.navigate(Route::Letters);
    }

    /// Log out locally, then tell the backend
    ///
    /// The session is cleared before the notification call and the user lands
    /// on Home whatever that call returns. A failed call or an unusable
    /// session store is still reported, after the navigation.
    pub fn logout(&mut self) -> Result<()> {
        let stored = self.ctx.session.get();
        let cleared = self.ctx.session.clear();
        self.user.reset();

        let outcome = match &stored {
            Ok(Some(token)) => self.ctx.api.logout(token),
            _ => Ok(()),
        };
        self.ctx.navigate(Route::Home);

        stored?;
        cleared?;

        match outcome {
            Ok(()) => {
                self.ctx.info(LOGOUT_MESSAGE);
                Ok(())
            }
            Err(failure) => {
                self.ctx.error(format!(
                    "Logout request failed: {}",
                    failure.user_message("the server could not be reached")
                ));
                Err(Error::from_failure(failure))
            }
        }
    }

    pub fn unmount(&mut self) {
        self.user.unmount();
    }
}
