//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::settings::MAX_PREFIX_LEN;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

/// Allowed range for `limits.max_chunk_bytes`.
///
/// The upper bound leaves room for a `JSON` code fence within one message.
pub const CHUNK_BYTES_RANGE: RangeInclusive<usize> = 64..=1988;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bot.default_prefix must not be empty")]
    EmptyPrefix,
    #[error("bot.default_prefix must be at most {MAX_PREFIX_LEN} characters, got {0}")]
    PrefixTooLong(usize),
    #[error("bot.default_prefix must not contain whitespace")]
    PrefixWhitespace,
    #[error("limits.max_chunk_bytes must be within 64..=1988, got {0}")]
    ChunkSizeOutOfRange(usize),
    #[error("limits.lock_ttl_secs must be greater than zero")]
    ZeroLockTtl,
    #[error("assets.map_base_url is not a valid URL: {0}")]
    InvalidMapBaseUrl(String),
    #[error("database.path parent directory does not exist: {0}")]
    DatabasePathInvalid(String),
    #[error("locales.dir does not exist: {0}")]
    LocalesDirNotFound(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Prefix
    let prefix = &config.bot.default_prefix;
    if prefix.is_empty() {
        errors.push(ValidationError::EmptyPrefix);
    } else {
        let len = prefix.chars().count();
        if len > MAX_PREFIX_LEN {
            errors.push(ValidationError::PrefixTooLong(len));
        }
        if prefix.chars().any(char::is_whitespace) {
            errors.push(ValidationError::PrefixWhitespace);
        }
    }

    // Limits
    if !CHUNK_BYTES_RANGE.contains(&config.limits.max_chunk_bytes) {
        errors.push(ValidationError::ChunkSizeOutOfRange(
            config.limits.max_chunk_bytes,
        ));
    }
    if config.limits.lock_ttl_secs == 0 {
        errors.push(ValidationError::ZeroLockTtl);
    }

    // Assets
    if url::Url::parse(&config.assets.map_base_url).is_err() {
        errors.push(ValidationError::InvalidMapBaseUrl(
            config.assets.map_base_url.clone(),
        ));
    }

    // Database path validation
    if let Some(ref db) = config.database {
        let db_path = Path::new(&db.path);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ValidationError::DatabasePathInvalid(db.path.clone()));
        }
    }

    if let Some(ref dir) = config.locales.dir
        && !dir.is_dir()
    {
        errors.push(ValidationError::LocalesDirNotFound(
            dir.display().to_string(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(toml: &str) -> Config {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_defaults_pass() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_bad_prefix_fails() {
        let errors = validate(&config_from("[bot]\ndefault_prefix = \"\"")).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::EmptyPrefix)));

        let errors = validate(&config_from("[bot]\ndefault_prefix = \"a b\"")).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::PrefixWhitespace)));

        let errors = validate(&config_from("[bot]\ndefault_prefix = \"abcdefghijk\"")).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::PrefixTooLong(11))));
    }

    #[test]
    fn test_limits_out_of_range() {
        let errors = validate(&config_from(
            "[limits]\nmax_chunk_bytes = 4000\nlock_ttl_secs = 0",
        ))
        .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::ChunkSizeOutOfRange(4000))));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::ZeroLockTtl)));
    }

    #[test]
    fn test_chunk_size_upper_bound() {
        assert!(validate(&config_from("[limits]\nmax_chunk_bytes = 1988")).is_ok());
        let errors = validate(&config_from("[limits]\nmax_chunk_bytes = 1990")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::ChunkSizeOutOfRange(1990)));
    }

    #[test]
    fn test_invalid_base_url() {
        let errors = validate(&config_from("[assets]\nmap_base_url = \"not a url\"")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidMapBaseUrl(_)));
    }

    #[test]
    fn test_missing_database_parent() {
        let errors = validate(&config_from(
            "[database]\npath = \"/nonexistent/dir/stats.db\"",
        ))
        .unwrap_err();
        assert!(matches!(errors[0], ValidationError::DatabasePathInvalid(_)));
    }

    #[test]
    fn test_errors_are_collected() {
        let errors = validate(&config_from(
            "[bot]\ndefault_prefix = \"\"\n\
             [limits]\nlock_ttl_secs = 0\n\
             [assets]\nmap_base_url = \"::\"",
        ))
        .unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
