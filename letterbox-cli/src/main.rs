//! Letterbox CLI - send and read letters from your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{config, home, inbox, login, logout, logs, me, register, send, shell, App};
use letterbox_core::{EntryPoint, Route};

/// Letterbox - exchange letters from your terminal
///
/// Run without a command to start the interactive shell.
#[derive(Parser)]
#[command(name = "lb", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing screen
    Home,

    /// Log in and store the session token
    Login {
        /// Username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long, env = "LETTERBOX_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Username
        #[arg(short, long)]
        username: Option<String>,
        /// Password
        #[arg(long, env = "LETTERBOX_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Show the signed-in user
    Me {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log out and forget the session token
    Logout,

    /// Send a letter
    Send {
        /// Recipient username
        #[arg(long)]
        to: Option<String>,
        /// Letter title
        #[arg(long)]
        title: Option<String>,
        /// Letter content
        #[arg(long)]
        content: Option<String>,
    },

    /// List received letters
    Inbox {
        /// Open the letter with this ID
        #[arg(long)]
        open: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the backend URL
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Screen errors were already shown as notices
            if !commands::already_shown(&e) {
                output::error(&format!("{:#}", e));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        return shell::run();
    };

    match command {
        Commands::Home => home::run(&App::open(EntryPoint::Cli, "home", Route::Home)?),
        Commands::Login { username, password } => {
            let app = App::open(EntryPoint::Cli, "login", Route::Login)?;
            login::run(&app, username, password)
        }
        Commands::Register {
            name,
            username,
            password,
        } => {
            let app = App::open(EntryPoint::Cli, "register", Route::Register)?;
            register::run(&app, name, username, password)
        }
        Commands::Me { json } => me::run(&App::open(EntryPoint::Cli, "me", Route::MyPage)?, json),
        Commands::Logout => logout::run(&App::open(EntryPoint::Cli, "logout", Route::MyPage)?),
        Commands::Send { to, title, content } => {
            let app = App::open(EntryPoint::Cli, "send", Route::SendLetter)?;
            send::run(&app, to, title, content)
        }
        Commands::Inbox { open, json } => {
            let app = App::open(EntryPoint::Cli, "inbox", Route::Letters)?;
            inbox::run(&app, open, json)
        }
        Commands::Config { command } => config::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
