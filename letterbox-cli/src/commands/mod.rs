//! CLI command implementations

pub mod config;
pub mod home;
pub mod inbox;
pub mod login;
pub mod logout;
pub mod logs;
pub mod me;
pub mod register;
pub mod send;
pub mod shell;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use letterbox_core::domain::result::Result as CoreResult;
use letterbox_core::ports::{Navigator, Notifier};
use letterbox_core::services::PageContext;
use letterbox_core::{EntryPoint, Error, LetterboxContext, LogEvent, LoggingService, Notice, Route};

use crate::output;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger(entry_point: EntryPoint) -> Option<LoggingService> {
    let letterbox_dir = get_letterbox_dir().ok()?;
    std::fs::create_dir_all(&letterbox_dir).ok()?;
    LoggingService::new(&letterbox_dir, entry_point, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the letterbox directory from environment or default
pub fn get_letterbox_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("LETTERBOX_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".letterbox"))
        .ok_or_else(|| anyhow!("Could not find home directory; set LETTERBOX_DIR"))
}

/// Get or create letterbox context
pub fn get_context() -> Result<LetterboxContext> {
    let letterbox_dir = get_letterbox_dir()?;

    std::fs::create_dir_all(&letterbox_dir)
        .with_context(|| format!("Failed to create letterbox directory: {:?}", letterbox_dir))?;

    LetterboxContext::new(&letterbox_dir).context("Failed to initialize letterbox context")
}

/// Navigator that remembers the route the screens asked for
pub struct CliNavigator {
    current: Mutex<Route>,
}

impl CliNavigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    pub fn current(&self) -> Route {
        self.current.lock().map(|r| *r).unwrap_or(Route::Home)
    }
}

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        if let Ok(mut current) = self.current.lock() {
            *current = route;
        }
    }
}

/// Notifier that holds notices until the spinner is gone
#[derive(Default)]
pub struct CliNotifier {
    pending: Mutex<Vec<Notice>>,
}

impl CliNotifier {
    pub fn flush(&self) {
        let notices = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return,
        };
        for notice in &notices {
            output::notice(notice);
        }
    }
}

impl Notifier for CliNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push(notice);
        }
    }
}

/// Everything a screen command needs: page context, front-end ports, event log
pub struct App {
    pub pages: PageContext,
    navigator: Arc<CliNavigator>,
    notifier: Arc<CliNotifier>,
    logger: Option<LoggingService>,
    entry_point: EntryPoint,
}

impl App {
    /// Open the context and record the command
    pub fn open(entry_point: EntryPoint, command: &str, start: Route) -> Result<Self> {
        let context = get_context()?;
        let logger = get_logger(entry_point);
        if let Some(l) = &logger {
            let _ = l.log_command(command);
        }

        let navigator = Arc::new(CliNavigator::new(start));
        let notifier = Arc::new(CliNotifier::default());
        let pages = context.page_context(navigator.clone(), notifier.clone());

        Ok(Self {
            pages,
            navigator,
            notifier,
            logger,
            entry_point,
        })
    }

    /// Route the last screen action navigated to
    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn log(&self, event: LogEvent) {
        log_event(&self.logger, event);
    }

    /// Record that a screen was shown
    pub fn log_page(&self, route: Route) {
        if let Some(l) = &self.logger {
            let _ = l.log_page(route);
        }
    }

    /// Print any notices raised so far
    pub fn flush(&self) {
        self.notifier.flush();
    }

    /// Run a page action under a spinner, then show its notices
    pub fn busy<T>(&self, message: &str, action: impl FnOnce() -> T) -> T {
        let pb = output::spinner(message);
        let result = action();
        pb.finish_and_clear();
        self.flush();
        result
    }

    /// Log the outcome of a page action and convert it for the command boundary
    pub fn outcome(&self, action: &str, page: Route, result: CoreResult<()>) -> Result<()> {
        match result {
            Ok(()) => {
                self.log(LogEvent::new(format!("{}_completed", action)).with_page(page));
                Ok(())
            }
            Err(e) => {
                self.log(
                    LogEvent::new(format!("{}_failed", action))
                        .with_page(page)
                        .with_core_error(&e),
                );
                if self.entry_point == EntryPoint::Cli
                    && page.is_protected()
                    && self.route() == Route::Login
                {
                    output::hint("Run `lb login` to sign in.");
                }
                Err(e.into())
            }
        }
    }
}

/// Whether a screen already showed this error to the user
pub fn already_shown(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<Error>()
        .map_or(false, Error::is_surfaced)
}
