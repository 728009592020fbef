//! Logs command - view and manage the event log

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;
use letterbox_core::services::logging::cutoff_days_ago;
use letterbox_core::services::LogFilter;
use letterbox_core::{EntryPoint, LogEntry, LoggingService};

use super::get_letterbox_dir;
use crate::output;

#[derive(Subcommand)]
pub enum LogsCommands {
    /// Show recent log entries
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Show only errors, with HTTP status and message
        #[arg(long)]
        errors: bool,
        /// Show only entries for this screen (home, login, register, mypage, send-letter, letters)
        #[arg(long)]
        page: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear old log entries
    Clear {
        /// Delete logs older than N days
        #[arg(long, default_value = "30")]
        older_than_days: u64,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show log statistics and database path
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn get_logging_service() -> Result<LoggingService> {
    let letterbox_dir = get_letterbox_dir()?;
    std::fs::create_dir_all(&letterbox_dir)?;
    LoggingService::new(&letterbox_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))
}

fn format_timestamp(timestamp_ms: i64) -> String {
    use chrono::{Local, TimeZone};
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

fn status_cell(entry: &LogEntry) -> String {
    match entry.status {
        Some(status) if status >= 400 => status.to_string().red().to_string(),
        Some(status) => status.to_string(),
        None => String::new(),
    }
}

fn print_entries(entries: &[LogEntry]) {
    let mut table = output::create_table();
    table.set_header(vec!["Time", "Entry", "Event", "Context", "Status", "Error"]);

    for entry in entries {
        let context = [entry.command.as_deref(), entry.page.as_deref()]
            .iter()
            .filter_map(|&s| s)
            .collect::<Vec<_>>()
            .join(", ");

        let error_indicator = if entry.error_message.is_some() {
            "!".red().to_string()
        } else {
            String::new()
        };

        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.entry_point.clone(),
            entry.event.clone(),
            context,
            status_cell(entry),
            error_indicator,
        ]);
    }

    println!("{}", table);
}

/// Errors view: what failed, on which screen, and what the server said
fn print_errors(entries: &[LogEntry]) {
    let mut table = output::create_table();
    table.set_header(vec!["Time", "Event", "Screen", "Status", "Message"]);

    for entry in entries {
        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.event.clone(),
            entry.page.clone().unwrap_or_default(),
            status_cell(entry),
            entry.error_message.clone().unwrap_or_default(),
        ]);
    }

    println!("{}", table);
}

pub fn run(command: LogsCommands) -> Result<()> {
    match command {
        LogsCommands::List {
            limit,
            errors,
            page,
            json,
        } => {
            let service = get_logging_service()?;
            let filter = LogFilter {
                page,
                errors_only: errors,
            };
            let entries = service.query(&filter, limit)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }

            if entries.is_empty() {
                println!("No log entries found.");
                return Ok(());
            }

            if errors {
                print_errors(&entries);
                return Ok(());
            }

            print_entries(&entries);

            let error_count = entries.iter().filter(|e| e.error_message.is_some()).count();
            if error_count > 0 {
                println!();
                output::hint(&format!(
                    "{} of these failed; run `lb logs list --errors` for details.",
                    error_count
                ));
            }
        }
        LogsCommands::Clear {
            older_than_days,
            force,
            json,
        } => {
            let service = get_logging_service()?;

            if !force && !json {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete logs older than {} days?", older_than_days))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let deleted = service.delete_before(cutoff_days_ago(older_than_days))?;

            if json {
                println!("{}", serde_json::json!({ "deleted": deleted }));
            } else {
                output::success(&format!("Deleted {} log entries", deleted));
            }
        }
        LogsCommands::Stats { json } => {
            let service = get_logging_service()?;
            let total = service.count()?;
            let errors = service.count_errors()?;
            let db_path = service.db_path().to_path_buf();
            let size_bytes = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "total_entries": total,
                        "error_count": errors,
                        "database_path": db_path.to_string_lossy(),
                        "database_size_bytes": size_bytes
                    })
                );
            } else {
                println!("{}", "Log Statistics".bold());
                println!("  Total entries: {}", total);
                println!("  Errors: {}", errors);
                println!("  Database: {}", db_path.display());
                println!("  Size: {} bytes", size_bytes);
            }
        }
    }

    Ok(())
}
