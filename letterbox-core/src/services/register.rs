//! Registration screen

use crate::domain::result::{Error, Result};
use crate::domain::{RegisterForm, Route};

use super::guard::PageContext;
use super::page::Submission;

pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration complete! Please log in.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed! Please try again.";

pub struct RegisterPage {
    ctx: PageContext,
    pub form: RegisterForm,
    submission: Submission,
}

impl RegisterPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            form: RegisterForm::default(),
            submission: Submission::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    pub fn submit(&mut self) -> Result<()> {
        let request = self.form.to_request().map_err(|e| self.ctx.reject(e))?;

        self.submission.begin()?;
        let outcome = self.ctx.api.register(&request);
        self.submission.finish();

        match outcome {
            Ok(()) => {
                self.form = RegisterForm::default();
                self.ctx.success(REGISTER_SUCCESS_MESSAGE);
                self.ctx.navigate(Route::Login);
                Ok(())
            }
            Err(failure) => {
                self.ctx.error(failure.user_message(REGISTER_FAILED_MESSAGE));
                Err(Error::from_failure(failure))
            }
        }
    }

    pub fn open_login(&self) {
        self.ctx.navigate(Route::Login);
    }
}
