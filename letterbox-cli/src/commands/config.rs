//! Config command - show or change the backend the client talks to

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use letterbox_core::config::{normalize_backend_url, Config, BACKEND_URL_ENV};

use super::get_letterbox_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the backend URL in effect
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Store the backend URL in settings.json
    SetBackend {
        /// Base URL, e.g. https://letters.example.com
        url: String,
    },
}

fn env_override() -> Option<String> {
    std::env::var(BACKEND_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

pub fn run(command: Option<ConfigCommands>) -> Result<()> {
    let letterbox_dir = get_letterbox_dir()?;
    std::fs::create_dir_all(&letterbox_dir)?;

    match command {
        Some(ConfigCommands::SetBackend { url }) => {
            let config = Config {
                backend_url: normalize_backend_url(&url)?,
            };
            config.save(&letterbox_dir)?;
            output::success(&format!("Backend set to {}", config.backend_url));
            if env_override().is_some() {
                output::hint(&format!("{} is set and still takes precedence.", BACKEND_URL_ENV));
            }
        }
        Some(ConfigCommands::Show { json }) => show(&letterbox_dir, json)?,
        None => show(&letterbox_dir, false)?,
    }
    Ok(())
}

fn show(letterbox_dir: &std::path::Path, json: bool) -> Result<()> {
    let config = Config::load(letterbox_dir)?;
    let from_env = env_override().is_some();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "backend_url": config.backend_url,
                "from_env": from_env,
            })
        );
        return Ok(());
    }

    println!("Backend: {}", config.backend_url.bold());
    if from_env {
        println!("  {}", format!("(from {})", BACKEND_URL_ENV).dimmed());
    }
    Ok(())
}
