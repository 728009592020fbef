//! Inbox command - received letters

use anyhow::Result;
use colored::Colorize;
use letterbox_core::services::{LettersPage, EMPTY_INBOX_MESSAGE};
use letterbox_core::{Letter, Route};

use super::App;
use crate::output;

pub fn load(app: &App, page: &mut LettersPage) -> Result<()> {
    let result = app.busy("Loading letters...", || page.load());
    app.outcome("load_letters", Route::Letters, result)
}

pub fn open(app: &App, page: &mut LettersPage, id: &str) -> Result<()> {
    let result = app.busy("Opening letter...", || page.open(id));
    app.outcome("open_letter", Route::Letters, result)
}

/// Print the inbox as a table
pub fn show_list(page: &LettersPage) {
    output::heading("Received letters");
    if page.letters().is_empty() {
        println!("{}", EMPTY_INBOX_MESSAGE);
        return;
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Title", "From", "Sent"]);
    for letter in page.letters() {
        table.add_row(vec![
            letter.id.clone(),
            letter.title.clone(),
            letter.sender_name.clone(),
            letter.sent(),
        ]);
    }
    println!("{}", table);
}

pub fn show_letter(letter: &Letter) {
    output::heading(&letter.title);
    println!("  {} {}", "From:".dimmed(), letter.sender_name);
    if let Some(recipient) = &letter.recipient_username {
        println!("  {} {}", "To:".dimmed(), recipient);
    }
    println!("  {} {}", "Sent:".dimmed(), letter.sent());
    println!();
    println!("{}", letter.content);
}

pub fn run(app: &App, open_id: Option<String>, json: bool) -> Result<()> {
    let mut page = LettersPage::new(app.pages.clone());
    load(app, &mut page)?;

    match open_id {
        Some(id) => {
            open(app, &mut page, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page.selected())?);
            } else if let Some(letter) = page.selected() {
                show_letter(letter);
            }
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(page.letters())?);
            } else {
                show_list(&page);
            }
        }
    }
    Ok(())
}
