//! Port definitions (hexagonal architecture)
//!
//! Page controllers depend only on these traits. Concrete implementations
//! live in `adapters` or in the front-end that hosts the screens.

mod backend;
mod session_store;
mod ui;

pub use backend::Backend;
pub use session_store::SessionStore;
pub use ui::{Navigator, Notifier};
