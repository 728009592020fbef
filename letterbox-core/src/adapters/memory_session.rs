//! In-process session store

use std::sync::Mutex;

use crate::domain::result::{Error, Result};
use crate::domain::SessionToken;
use crate::ports::SessionStore;

/// Session slot that lives as long as the process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<SessionToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    pub fn with_token(token: SessionToken) -> Self {
        Self {
            slot: Mutex::new(Some(token)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<SessionToken>>> {
        self.slot
            .lock()
            .map_err(|e| Error::storage(format!("Lock poisoned: {}", e)))
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<SessionToken>> {
        Ok(self.lock()?.clone())
    }

    fn set(&self, token: &SessionToken) -> Result<()> {
        *self.lock()? = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}
