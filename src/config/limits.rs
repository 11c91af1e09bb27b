//! Output and locking limits configuration.

use super::defaults::{default_lock_ttl_secs, default_max_chunk_bytes};
use serde::Deserialize;
use std::time::Duration;

/// Output and locking limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum bytes of raw block content per outbound message (default: 1900).
    /// The code-block envelope is added on top of this.
    #[serde(default = "default_max_chunk_bytes")]
    pub max_chunk_bytes: usize,
    /// Seconds after which an unreleased session lock may be reclaimed (default: 15).
    #[serde(default = "default_lock_ttl_secs")]
    pub lock_ttl_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_chunk_bytes: default_max_chunk_bytes(),
            lock_ttl_secs: default_lock_ttl_secs(),
        }
    }
}

impl LimitsConfig {
    pub fn lock_ttl(&self) -> Duration {
        Duration::from_secs(self.lock_ttl_secs)
    }
}
