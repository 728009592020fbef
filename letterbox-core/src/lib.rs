//! Letterbox Core - client for a small letter-exchange service
//!
//! Follows a hexagonal layout:
//!
//! - **domain**: Session token, users, letters, forms, failures
//! - **ports**: Trait definitions for the backend, the session store and the front-end
//! - **services**: API client, auth guard, one controller per screen, event log
//! - **adapters**: Concrete implementations (reqwest, session file, in-memory)

pub mod adapters;
pub mod config;
pub mod domain;
mod log_migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::{FileSessionStore, HttpBackend};
use config::Config;
use ports::{Navigator, Notifier};
use services::PageContext;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    Failure, FailureKind, Letter, LetterDraft, LetterSummary, LoginForm, Notice, NoticeLevel,
    RegisterForm, Route, SessionToken, User,
};
pub use services::{EntryPoint, LogEntry, LogEvent, LoggingService};

/// Main context for Letterbox operations
///
/// Holds the configuration and the concrete adapters a front-end wires into
/// its page controllers.
pub struct LetterboxContext {
    pub config: Config,
    pub session: Arc<FileSessionStore>,
    pub backend: Arc<HttpBackend>,
}

impl LetterboxContext {
    /// Create a context rooted at the letterbox directory
    pub fn new(letterbox_dir: &Path) -> Result<Self> {
        let config = Config::load(letterbox_dir)?;
        let backend = HttpBackend::new(&config.backend_url)
            .with_context(|| format!("Failed to set up backend client for {}", config.backend_url))?;

        Ok(Self {
            config,
            session: Arc::new(FileSessionStore::new(letterbox_dir)),
            backend: Arc::new(backend),
        })
    }

    /// Controller context for a front-end's navigator and notifier
    pub fn page_context(
        &self,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> PageContext {
        PageContext::new(
            self.backend.clone(),
            self.session.clone(),
            navigator,
            notifier,
        )
    }
}
