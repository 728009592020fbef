//! Configuration management
//!
//! Read from `settings.json` in the letterbox directory:
//! ```json
//! { "backendUrl": "https://letters.example.com" }
//! ```
//! Keys the client does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const BACKEND_URL_ENV: &str = "LETTERBOX_BACKEND_URL";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    backend_url: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Letterbox configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from the letterbox directory
    ///
    /// The backend URL comes from, in order:
    /// 1. Environment variable LETTERBOX_BACKEND_URL
    /// 2. `backendUrl` in settings.json
    /// 3. http://localhost:8080
    pub fn load(letterbox_dir: &Path) -> Result<Self> {
        let raw = read_settings(letterbox_dir)?;

        let backend_url = std::env::var(BACKEND_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or(raw.backend_url)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Ok(Self {
            backend_url: normalize_backend_url(&backend_url)?,
        })
    }

    /// Save config to the letterbox directory
    /// Preserves other settings that the client doesn't manage
    pub fn save(&self, letterbox_dir: &Path) -> Result<()> {
        let mut settings = read_settings(letterbox_dir)?;
        settings.backend_url = Some(normalize_backend_url(&self.backend_url)?);

        let content = serde_json::to_string_pretty(&settings)?;
        let settings_path = letterbox_dir.join(SETTINGS_FILE);
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {:?}", settings_path))?;
        Ok(())
    }
}

fn read_settings(letterbox_dir: &Path) -> Result<SettingsFile> {
    let settings_path = letterbox_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

/// Validate a backend base URL and drop trailing slashes
pub fn normalize_backend_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).with_context(|| format!("Invalid backend URL: {}", trimmed))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => anyhow::bail!("Unsupported backend URL scheme '{}': {}", other, trimmed),
    }
}
