//! Store interfaces for session state, guild settings and cached names.
//!
//! Production deployments back these with an external key-value store; the
//! in-memory implementations here serve development and tests.

use super::{GameSessionKey, GameState};
use crate::settings::GuildSettings;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeSet;
use thiserror::Error;

/// Failure reaching an external collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Database(#[from] crate::db::DbError),
}

#[async_trait]
pub trait GameStateStore: Send + Sync {
    /// Read a session. Callers that mutate must hold its [`super::SessionLock`].
    async fn load(&self, key: &GameSessionKey) -> Result<Option<GameState>, StoreError>;

    async fn save(&self, state: &GameState) -> Result<(), StoreError>;

    async fn delete(&self, key: &GameSessionKey) -> Result<bool, StoreError>;

    /// Sessions currently marked running.
    async fn active_games(&self) -> Result<usize, StoreError>;
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Settings for a guild, or defaults if none were saved.
    async fn load(&self, guild_id: &str) -> Result<GuildSettings, StoreError>;

    async fn save(&self, guild_id: &str, settings: &GuildSettings) -> Result<(), StoreError>;

    async fn reset(&self, guild_id: &str) -> Result<(), StoreError>;

    /// Guilds with saved settings.
    async fn guild_count(&self) -> Result<usize, StoreError>;
}

#[async_trait]
pub trait UsernameCache: Send + Sync {
    /// In-game names observed for a user in a guild, sorted.
    async fn names(&self, guild_id: &str, user_id: &str) -> Result<Vec<String>, StoreError>;

    async fn record(&self, guild_id: &str, user_id: &str, name: &str) -> Result<(), StoreError>;

    /// Forget every cached name for a user. Returns how many were removed.
    async fn clear(&self, guild_id: &str, user_id: &str) -> Result<usize, StoreError>;
}

// ============================================================================
// In-memory implementations
// ============================================================================

#[derive(Debug, Default)]
pub struct MemoryGameStore {
    sessions: DashMap<GameSessionKey, GameState>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStateStore for MemoryGameStore {
    async fn load(&self, key: &GameSessionKey) -> Result<Option<GameState>, StoreError> {
        Ok(self.sessions.get(key).map(|r| r.value().clone()))
    }

    async fn save(&self, state: &GameState) -> Result<(), StoreError> {
        self.sessions.insert(state.key.clone(), state.clone());
        Ok(())
    }

    async fn delete(&self, key: &GameSessionKey) -> Result<bool, StoreError> {
        Ok(self.sessions.remove(key).is_some())
    }

    async fn active_games(&self) -> Result<usize, StoreError> {
        Ok(self.sessions.iter().filter(|s| s.running).count())
    }
}

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    guilds: DashMap<String, GuildSettings>,
    defaults: GuildSettings,
}

impl MemorySettingsStore {
    /// Guilds without saved settings get `defaults`.
    pub fn new(defaults: GuildSettings) -> Self {
        Self {
            guilds: DashMap::new(),
            defaults,
        }
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load(&self, guild_id: &str) -> Result<GuildSettings, StoreError> {
        Ok(self
            .guilds
            .get(guild_id)
            .map(|r| r.value().clone())
            .unwrap_or_else(|| self.defaults.clone()))
    }

    async fn save(&self, guild_id: &str, settings: &GuildSettings) -> Result<(), StoreError> {
        self.guilds.insert(guild_id.to_string(), settings.clone());
        Ok(())
    }

    async fn reset(&self, guild_id: &str) -> Result<(), StoreError> {
        self.guilds.remove(guild_id);
        Ok(())
    }

    async fn guild_count(&self) -> Result<usize, StoreError> {
        Ok(self.guilds.len())
    }
}

#[derive(Debug, Default)]
pub struct MemoryUsernameCache {
    names: DashMap<(String, String), BTreeSet<String>>,
}

impl MemoryUsernameCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsernameCache for MemoryUsernameCache {
    async fn names(&self, guild_id: &str, user_id: &str) -> Result<Vec<String>, StoreError> {
        let key = (guild_id.to_string(), user_id.to_string());
        Ok(self
            .names
            .get(&key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn record(&self, guild_id: &str, user_id: &str, name: &str) -> Result<(), StoreError> {
        self.names
            .entry((guild_id.to_string(), user_id.to_string()))
            .or_default()
            .insert(name.to_string());
        Ok(())
    }

    async fn clear(&self, guild_id: &str, user_id: &str) -> Result<usize, StoreError> {
        let key = (guild_id.to_string(), user_id.to_string());
        Ok(self.names.remove(&key).map(|(_, set)| set.len()).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_game_store_roundtrip_and_active_count() {
        let store = MemoryGameStore::new();
        let key = GameSessionKey::new("g", "c");
        assert!(store.load(&key).await.unwrap().is_none());

        let mut state = GameState::new(key.clone());
        store.save(&state).await.unwrap();
        assert_eq!(store.active_games().await.unwrap(), 1);

        state.running = false;
        store.save(&state).await.unwrap();
        assert_eq!(store.active_games().await.unwrap(), 0);

        assert!(store.delete(&key).await.unwrap());
        assert!(!store.delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_settings_store_defaults_and_reset() {
        let store = MemorySettingsStore::new(GuildSettings::default());
        let mut s = store.load("g").await.unwrap();
        assert_eq!(s, GuildSettings::default());

        s.command_prefix = "!".to_string();
        store.save("g", &s).await.unwrap();
        assert_eq!(store.load("g").await.unwrap().command_prefix, "!");
        assert_eq!(store.guild_count().await.unwrap(), 1);

        store.reset("g").await.unwrap();
        assert_eq!(store.load("g").await.unwrap(), GuildSettings::default());
    }

    #[tokio::test]
    async fn test_username_cache() {
        let cache = MemoryUsernameCache::new();
        cache.record("g", "u", "Soup").await.unwrap();
        cache.record("g", "u", "Bob").await.unwrap();
        cache.record("g", "u", "Soup").await.unwrap();
        assert_eq!(cache.names("g", "u").await.unwrap(), vec!["Bob", "Soup"]);
        assert!(cache.names("h", "u").await.unwrap().is_empty());
        assert_eq!(cache.clear("g", "u").await.unwrap(), 2);
        assert_eq!(cache.clear("g", "u").await.unwrap(), 0);
    }
}
