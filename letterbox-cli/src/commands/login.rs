//! Login command

use anyhow::Result;
use dialoguer::{Input, Password};
use letterbox_core::services::LoginPage;
use letterbox_core::{LoginForm, Route};

use super::App;

/// Ask for whatever the flags didn't supply
pub fn prompt_form(username: Option<String>, password: Option<String>) -> Result<LoginForm> {
    let username = match username {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };
    Ok(LoginForm::new(username, password))
}

/// Submit the form on the login screen
pub fn submit(app: &App, page: &mut LoginPage, form: LoginForm) -> Result<()> {
    page.form = form;
    let result = app.busy("Logging in...", || page.submit());
    app.outcome("login", Route::Login, result)
}

pub fn run(app: &App, username: Option<String>, password: Option<String>) -> Result<()> {
    let mut page = LoginPage::new(app.pages.clone());
    let form = prompt_form(username, password)?;
    submit(app, &mut page, form)
}
