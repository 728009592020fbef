//! Send command - compose and send a letter

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use letterbox_core::services::{SendLetterPage, SendOutcome};
use letterbox_core::{LetterDraft, LogEvent, Route};

use super::App;
use crate::output;

pub fn load(app: &App, page: &mut SendLetterPage) -> Result<()> {
    let result = app.busy("Loading sender...", || page.load());
    app.outcome("load_sender", Route::SendLetter, result)
}

fn prompt(label: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?),
    }
}

pub fn prompt_draft(
    to: Option<String>,
    title: Option<String>,
    content: Option<String>,
) -> Result<LetterDraft> {
    let recipient = prompt("To (username)", to)?;
    let title = prompt("Title", title)?;
    let content = prompt("Content", content)?;
    Ok(LetterDraft::new(title, recipient, content))
}

pub fn submit(app: &App, page: &mut SendLetterPage, draft: LetterDraft) -> Result<()> {
    page.draft = draft;
    let result = app.busy("Sending...", || page.submit());
    match result {
        Ok(SendOutcome::SenderNotLoaded) => {
            app.log(LogEvent::new("send_letter_skipped").with_page(Route::SendLetter));
            output::hint("The sender has not loaded yet; nothing was sent.");
            Ok(())
        }
        other => app.outcome("send_letter", Route::SendLetter, other.map(|_| ())),
    }
}

pub fn run(
    app: &App,
    to: Option<String>,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let mut page = SendLetterPage::new(app.pages.clone());
    load(app, &mut page)?;

    if let Some(sender) = page.sender() {
        println!("{} {}", "From:".dimmed(), sender.name);
    }
    let draft = prompt_draft(to, title, content)?;
    submit(app, &mut page, draft)
}
