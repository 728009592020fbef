//! Interactive shell - one screen at a time, driven by the navigator
//!
//! Each screen shows its content and a menu. Screen actions move the
//! navigator; the loop then shows whatever route it landed on.

use anyhow::{bail, Result};
use dialoguer::Select;
use letterbox_core::services::{
    HomePage, LettersPage, LoginPage, MyPage, PageState, RegisterPage, SendLetterPage,
};
use letterbox_core::{EntryPoint, Route};

use super::{already_shown, home, inbox, login, me, register, send, App};
use crate::output;

enum Flow {
    Continue,
    Quit,
}

fn menu(items: &[&str]) -> Result<usize> {
    Ok(Select::new().items(items).default(0).interact()?)
}

pub fn run() -> Result<()> {
    if atty::isnt(atty::Stream::Stdin) {
        bail!("The interactive shell needs a terminal; see `lb --help` for one-shot commands");
    }

    let app = App::open(EntryPoint::Shell, "shell", Route::Home)?;

    loop {
        let route = app.route();
        app.log_page(route);
        output::hint(&format!("letterbox {}", route.path()));

        let flow = match route {
            Route::Home => home_screen(&app),
            Route::Login => login_screen(&app),
            Route::Register => register_screen(&app),
            Route::MyPage => my_page_screen(&app),
            Route::SendLetter => send_letter_screen(&app),
            Route::Letters => letters_screen(&app),
        };

        match flow {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(e) if already_shown(&e) => {}
            Err(e) => return Err(e),
        }
    }
}

fn home_screen(app: &App) -> Result<Flow> {
    let page = HomePage::new(app.pages.clone());
    home::show(&page);

    match menu(&["Log in", "Register", "Quit"])? {
        0 => page.open_login(),
        1 => app.pages.navigate(Route::Register),
        _ => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn login_screen(app: &App) -> Result<Flow> {
    output::heading("Log in");
    let mut page = LoginPage::new(app.pages.clone());

    match menu(&["Enter credentials", "Register instead", "Home", "Quit"])? {
        0 => {
            let form = login::prompt_form(None, None)?;
            login::submit(app, &mut page, form)?;
        }
        1 => page.open_register(),
        2 => app.pages.navigate(Route::Home),
        _ => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn register_screen(app: &App) -> Result<Flow> {
    output::heading("Register");
    let mut page = RegisterPage::new(app.pages.clone());

    match menu(&["Create account", "Log in instead", "Home", "Quit"])? {
        0 => {
            let form = register::prompt_form(None, None, None)?;
            register::submit(app, &mut page, form)?;
        }
        1 => page.open_login(),
        2 => app.pages.navigate(Route::Home),
        _ => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn my_page_screen(app: &App) -> Result<Flow> {
    let mut page = MyPage::new(app.pages.clone());
    let loaded = me::load(app, &mut page);
    if app.route() != Route::MyPage {
        return Ok(Flow::Continue);
    }
    loaded?;
    me::show(&page);

    let result = match menu(&["Send a letter", "Received letters", "Log out", "Quit"])? {
        0 => {
            page.open_send_letter();
            Ok(())
        }
        1 => {
            page.open_letters();
            Ok(())
        }
        2 => {
            let result = app.busy("Logging out...", || page.logout());
            app.outcome("logout", Route::MyPage, result)
        }
        _ => return Ok(Flow::Quit),
    };
    page.unmount();
    result.map(|()| Flow::Continue)
}

fn send_letter_screen(app: &App) -> Result<Flow> {
    let mut page = SendLetterPage::new(app.pages.clone());
    let loaded = send::load(app, &mut page);
    if app.route() != Route::SendLetter {
        return Ok(Flow::Continue);
    }
    loaded?;

    output::heading("Send a letter");
    if let Some(sender) = page.sender() {
        output::hint(&format!("Sending as {}", sender.name));
    }

    match menu(&["Write a letter", "Back to my page", "Quit"])? {
        0 => {
            loop {
                let draft = send::prompt_draft(None, None, None)?;
                let sent = send::submit(app, &mut page, draft);
                if app.route() != Route::SendLetter {
                    break;
                }
                if let Err(e) = sent {
                    if !already_shown(&e) {
                        return Err(e);
                    }
                }
                if menu(&["Try again", "Back to my page"])? != 0 {
                    app.pages.navigate(Route::MyPage);
                    break;
                }
            }
        }
        1 => app.pages.navigate(Route::MyPage),
        _ => return Ok(Flow::Quit),
    }
    page.unmount();
    Ok(Flow::Continue)
}

fn letters_screen(app: &App) -> Result<Flow> {
    let mut page = LettersPage::new(app.pages.clone());
    let loaded = inbox::load(app, &mut page);
    if app.route() != Route::Letters {
        return Ok(Flow::Continue);
    }
    if loaded.is_err() {
        if let PageState::Failed(_) = page.state() {
            return match menu(&["Retry", "Back to my page", "Quit"])? {
                0 => Ok(Flow::Continue),
                1 => {
                    app.pages.navigate(Route::MyPage);
                    Ok(Flow::Continue)
                }
                _ => Ok(Flow::Quit),
            };
        }
        loaded?;
    }

    loop {
        inbox::show_list(&page);

        let labels: Vec<String> = page
            .letters()
            .iter()
            .map(|l| format!("Open \"{}\" from {}", l.title, l.sender_name))
            .collect();
        let mut items: Vec<&str> = labels.iter().map(String::as_str).collect();
        items.push("Back to my page");
        items.push("Quit");

        let choice = menu(&items)?;
        let count = labels.len();
        if choice == count {
            app.pages.navigate(Route::MyPage);
            break;
        }
        if choice > count {
            return Ok(Flow::Quit);
        }

        let id = page.letters()[choice].id.clone();
        let opened = inbox::open(app, &mut page, &id);
        if app.route() != Route::Letters {
            break;
        }
        match opened {
            Ok(()) => {
                if let Some(letter) = page.selected() {
                    inbox::show_letter(letter);
                }
                page.close();
            }
            Err(e) if already_shown(&e) => {}
            Err(e) => return Err(e),
        }
    }

    page.unmount();
    Ok(Flow::Continue)
}
