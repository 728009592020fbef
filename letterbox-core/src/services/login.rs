//! Login screen

use crate::domain::result::{Error, Result};
use crate::domain::{LoginForm, Route};

use super::guard::PageContext;
use super::page::Submission;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed! Please check your username and password.";

pub struct LoginPage {
    ctx: PageContext,
    pub form: LoginForm,
    submission: Submission,
}

impl LoginPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            form: LoginForm::default(),
            submission: Submission::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    /// Log in with the current draft
    ///
    /// On success the returned token is the one now held by the session
    /// store, and the user is sent to My Page.
    pub fn submit(&mut self) -> Result<()> {
        let request = self.form.to_request().map_err(|e| self.ctx.reject(e))?;

        self.submission.begin()?;
        let outcome = self.ctx.api.login(&request);
        self.submission.finish();

        match outcome {
            Ok(token) => {
                self.ctx.session.set(&token)?;
                self.form = LoginForm::default();
                self.ctx.success(LOGIN_SUCCESS_MESSAGE);
                self.ctx.navigate(Route::MyPage);
                Ok(())
            }
            Err(failure) => {
                self.ctx.error(failure.user_message(LOGIN_FAILED_MESSAGE));
                Err(Error::from_failure(failure))
            }
        }
    }

    pub fn open_register(&self) {
        self.ctx.navigate(Route::Register);
    }
}
