//! File-backed session store
//!
//! The CLI counterpart of browser local storage: a small JSON object in the
//! letterbox directory whose `token` key is the session slot. Keys this
//! client doesn't manage are preserved. Writes go to a temp file in the same
//! directory and are renamed into place, so a reader never sees a partial
//! file.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::domain::SessionToken;
use crate::ports::SessionStore;

/// File name of the session slot inside the letterbox directory
pub const SESSION_FILE: &str = "session.json";

/// Key holding the bearer token
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Session store in the given letterbox directory
    pub fn new(letterbox_dir: &Path) -> Self {
        Self {
            path: letterbox_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored object. A missing, unreadable or corrupt file reads
    /// as empty.
    fn load(&self) -> Map<String, JsonValue> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };

        match serde_json::from_str::<JsonValue>(&content) {
            Ok(JsonValue::Object(map)) => map,
            _ => Map::new(),
        }
    }

    fn store(&self, map: &Map<String, JsonValue>) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::storage("session file has no parent directory"))?;
        std::fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(serde_json::to_string_pretty(map)?.as_bytes())?;
        file.flush()?;
        file.persist(&self.path)
            .map_err(|e| Error::storage(format!("Failed to write {:?}: {}", self.path, e.error)))?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<SessionToken>> {
        let map = self.load();
        Ok(map
            .get(TOKEN_KEY)
            .and_then(|v| v.as_str())
            .and_then(|raw| SessionToken::new(raw).ok()))
    }

    fn set(&self, token: &SessionToken) -> Result<()> {
        let mut map = self.load();
        map.insert(TOKEN_KEY.to_string(), JsonValue::String(token.as_str().to_string()));
        self.store(&map)
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut map = self.load();
        if map.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.store(&map)
    }
}
