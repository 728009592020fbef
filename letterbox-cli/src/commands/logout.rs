//! Logout command

use anyhow::Result;
use letterbox_core::services::MyPage;
use letterbox_core::Route;

use super::App;

pub fn run(app: &App) -> Result<()> {
    let mut page = MyPage::new(app.pages.clone());
    let result = app.busy("Logging out...", || page.logout());
    app.outcome("logout", Route::MyPage, result)
}
