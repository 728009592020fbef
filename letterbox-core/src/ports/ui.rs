//! Front-end ports: navigation and notices

use crate::domain::{Notice, Route};

/// Moves the user between screens
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Shows alert-style notices
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
