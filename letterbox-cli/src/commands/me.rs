//! Me command - the signed-in user's page

use anyhow::Result;
use colored::Colorize;
use letterbox_core::services::MyPage;
use letterbox_core::Route;

use super::App;
use crate::output;

/// Load the user and print the greeting
pub fn load(app: &App, page: &mut MyPage) -> Result<()> {
    let result = app.busy("Loading your page...", || page.load());
    app.outcome("load_user", Route::MyPage, result)
}

pub fn show(page: &MyPage) {
    output::heading(&page.greeting());
    if let Some(user) = page.user() {
        println!("  {} {}", "Username:".dimmed(), user.username);
        println!("  {} {}", "Joined:".dimmed(), user.joined());
    }
}

pub fn run(app: &App, json: bool) -> Result<()> {
    let mut page = MyPage::new(app.pages.clone());
    load(app, &mut page)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page.user())?);
    } else {
        show(&page);
    }
    Ok(())
}
