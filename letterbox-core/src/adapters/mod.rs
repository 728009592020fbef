//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for the Backend port
//! - JSON file in the letterbox directory for the SessionStore port
//! - In-process memory slot for the SessionStore port

pub mod file_session;
pub mod http;
pub mod memory_session;

#[cfg(test)]
pub mod mock_backend;

pub use file_session::FileSessionStore;
pub use http::HttpBackend;
pub use memory_session::MemorySessionStore;
