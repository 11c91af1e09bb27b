//! Core configuration types and loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults::{
    default_bot_name, default_database_path, default_language, default_map_base_url,
    default_prefix,
};
use super::limits::LimitsConfig;

/// Environment variable overriding `[assets].map_base_url`.
pub const BASE_MAP_URL_ENV: &str = "BASE_MAP_URL";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Bot configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Bot identity and per-guild defaults.
    #[serde(default)]
    pub bot: BotConfig,
    /// Static asset locations.
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Output and locking limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Statistics database. Without it, stats are kept in memory.
    pub database: Option<DatabaseConfig>,
    /// Prometheus endpoint.
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Localization catalogs.
    #[serde(default)]
    pub locales: LocalesConfig,
    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path`, or fall back to built-in defaults if it does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(&path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.as_ref().display(), "No config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Apply environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BASE_MAP_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.assets.map_base_url = url;
        }
    }
}

/// Bot identity and the settings new guilds start with.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Display name used in help and info cards.
    #[serde(default = "default_bot_name")]
    pub name: String,
    /// Command prefix for guilds that have not set one.
    #[serde(default = "default_prefix")]
    pub default_prefix: String,
    /// Language for guilds that have not set one.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Invite link shown by `workerbot`.
    pub worker_invite_url: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            default_prefix: default_prefix(),
            default_language: default_language(),
            worker_invite_url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Base URL for map images; `<lang>/<map>.png` is appended.
    #[serde(default = "default_map_base_url")]
    pub map_base_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            map_base_url: default_map_base_url(),
        }
    }
}

/// Statistics database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file.
    #[serde(default = "default_database_path")]
    pub path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsConfig {
    /// Serve `GET /metrics` on this port.
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalesConfig {
    /// Directory of `<lang>.toml` catalogs.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}
