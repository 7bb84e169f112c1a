//! User configuration for mindcare.
//!
//! Read from `$XDG_CONFIG_HOME/mindcare/config.toml` (falling back to
//! `~/.config/mindcare/config.toml`). Every key is optional:
//!
//! ```toml
//! theme = "catppuccin-mocha"
//! base_url = "http://127.0.0.1:8000"
//! ```
//!
//! `MINDCARE_API_URL`, when set and non-empty, overrides `base_url`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::client::DEFAULT_BASE_URL;

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "MINDCARE_API_URL";

pub const DEFAULT_THEME: &str = "catppuccin-mocha";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { theme: DEFAULT_THEME.to_owned(), base_url: DEFAULT_BASE_URL.to_owned() }
    }
}

impl Settings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] if the file cannot be read (including when it
    /// does not exist), [`ConfigError::Parse`] if it is not valid TOML for
    /// these settings.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_owned(), source })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse { path: path.to_owned(), source })
    }

    /// Loads from the default location and applies the environment override.
    ///
    /// Never fails: a missing file means defaults, and an unreadable or
    /// malformed file is logged and replaced by defaults.
    pub fn load() -> Self {
        let path = config_path();
        let settings = match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default settings");
                Self::default()
            }
        };
        settings.with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Replaces `base_url` with `value` when it is present and not blank.
    pub fn with_base_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_owned();
        }
        self
    }
}

/// Directory holding `config.toml` and the log file.
///
/// Prefers `$XDG_CONFIG_HOME/mindcare`; falls back to `~/.config/mindcare`
/// when the env var is absent.
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("mindcare")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = Settings::from_toml("theme = \"dark\"\n").unwrap();
        assert_eq!(s.theme, "dark");
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_override_is_ignored() {
        let s = Settings::default().with_base_url_override(Some("  ".to_owned()));
        assert_eq!(s.base_url, DEFAULT_BASE_URL);

        let s = Settings::default().with_base_url_override(Some("http://10.0.0.2:9000".to_owned()));
        assert_eq!(s.base_url, "http://10.0.0.2:9000");
    }
}
