//! Home command - landing screen

use anyhow::Result;
use colored::Colorize;
use letterbox_core::services::HomePage;

use super::App;
use crate::output;

/// Print the landing screen
pub fn show(page: &HomePage) {
    output::heading(page.title());
    println!("{}", page.tagline());
}

pub fn run(app: &App) -> Result<()> {
    let page = HomePage::new(app.pages.clone());
    show(&page);
    println!();
    println!("{} to sign in, or {} to start.", "lb login".bold(), "lb".bold());
    Ok(())
}
