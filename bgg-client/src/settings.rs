//! Client settings (endpoint, timeouts, cache lifetime).
//!
//! Settings live in `~/.config/bgg-client/settings.toml` under a `[client]`
//! table. Every field is optional; environment variables take priority over
//! the file:
//!
//! ```toml
//! [client]
//! base_url = "https://boardgamegeek.com/xmlapi2"
//! timeout_secs = 30
//! detail_ttl_secs = 43200
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::BggError;

pub const DEFAULT_BASE_URL: &str = "https://boardgamegeek.com/xmlapi2";

/// Game details stay cached for 12 hours.
pub const DEFAULT_DETAIL_TTL_SECS: u64 = 12 * 60 * 60;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Effective client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub detail_ttl_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("bgg-client/", env!("CARGO_PKG_VERSION")).to_string(),
            detail_ttl_secs: DEFAULT_DETAIL_TTL_SECS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    client: Option<ClientSettings>,
}

/// Canonical path to the settings file: `~/.config/bgg-client/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("bgg-client").join("settings.toml")
}

impl ClientSettings {
    /// Load settings with priority: env vars > settings file > defaults.
    ///
    /// A missing or unreadable settings file is not an error; the defaults
    /// are used and the problem is logged.
    pub fn load() -> Self {
        let mut settings = Self::load_file(&settings_path()).unwrap_or_else(|e| {
            log::warn!("Ignoring settings file: {}", e);
            Self::default()
        });
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    /// Read settings from a TOML file. A file that does not exist yields defaults.
    pub fn load_file(path: &Path) -> Result<Self, BggError> {
        if !path.exists() {
            log::debug!("No settings file at {}", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, BggError> {
        let file: SettingsFile = toml::from_str(contents)
            .map_err(|e| BggError::config(format!("Invalid settings file: {e}")))?;
        Ok(file.client.unwrap_or_default())
    }

    /// Override fields from `BGG_BASE_URL` and `BGG_TIMEOUT_SECS`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("BGG_BASE_URL").filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = var("BGG_TIMEOUT_SECS") {
            match raw.trim().parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => log::warn!("Ignoring invalid BGG_TIMEOUT_SECS '{}'", raw),
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn detail_ttl(&self) -> Duration {
        Duration::from_secs(self.detail_ttl_secs)
    }
}
