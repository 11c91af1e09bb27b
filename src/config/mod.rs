//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions and loading
//! - [`limits`]: Output and locking limits (LimitsConfig)
//! - [`defaults`]: Serde default functions
//! - [`validation`]: Startup validation

mod defaults;
mod limits;
mod types;
pub mod validation;

pub use defaults::DEFAULT_MAP_BASE_URL;
pub use limits::LimitsConfig;
pub use types::{
    AssetsConfig, BotConfig, Config, ConfigError, DatabaseConfig, LocalesConfig, LogFormat,
    LoggingConfig, MetricsConfig, BASE_MAP_URL_ENV,
};
pub use validation::{ValidationError, validate};
