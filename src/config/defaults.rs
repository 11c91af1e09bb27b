//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use crate::settings::DEFAULT_PREFIX;

// =============================================================================
// Bot Defaults
// =============================================================================

pub fn default_bot_name() -> String {
    "MuteBot".to_string()
}

pub fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

pub fn default_language() -> String {
    crate::i18n::DEFAULT_LANGUAGE.to_string()
}

// =============================================================================
// Asset Defaults
// =============================================================================

pub const DEFAULT_MAP_BASE_URL: &str =
    "https://github.com/automuteus/automuteus/blob/master/assets/maps/";

pub fn default_map_base_url() -> String {
    DEFAULT_MAP_BASE_URL.to_string()
}

// =============================================================================
// Limit Defaults
// =============================================================================

/// Leaves room for the code-block envelope under a 2000-byte message cap.
pub fn default_max_chunk_bytes() -> usize {
    1900
}

pub fn default_lock_ttl_secs() -> u64 {
    15
}

// =============================================================================
// Database Defaults
// =============================================================================

pub fn default_database_path() -> String {
    "mutebot.db".to_string()
}
