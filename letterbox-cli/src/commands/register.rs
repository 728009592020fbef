//! Register command

use anyhow::Result;
use dialoguer::{Input, Password};
use letterbox_core::services::RegisterPage;
use letterbox_core::{RegisterForm, Route};

use super::App;

pub fn prompt_form(
    name: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> Result<RegisterForm> {
    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Name")
            .allow_empty(true)
            .interact_text()?,
    };
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
    Ok(RegisterForm::new(name, username, password))
}

pub fn submit(app: &App, page: &mut RegisterPage, form: RegisterForm) -> Result<()> {
    page.form = form;
    let result = app.busy("Creating account...", || page.submit());
    app.outcome("register", Route::Register, result)
}

pub fn run(
    app: &App,
    name: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut page = RegisterPage::new(app.pages.clone());
    let form = prompt_form(name, username, password)?;
    submit(app, &mut page, form)
}
