//! Non-blocking session locks.
//!
//! A [`SessionLock`] is exclusive ownership of one [`GameSessionKey`] for the
//! duration of a single dispatch. Acquisition never waits: a held key fails
//! immediately with [`LockUnavailable`]. The lock is released when the
//! handle is dropped, so every exit path of a handler releases it.

use super::GameSessionKey;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// The session is held by another in-flight dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not obtain lock for session {key}")]
pub struct LockUnavailable {
    pub key: GameSessionKey,
}

/// Backing store for session locks (key-value store in production).
///
/// Both operations must be non-blocking.
pub trait LockStore: Send + Sync {
    /// Take `key` for `token` if it is free (or its holder expired).
    fn try_lock(&self, key: &GameSessionKey, token: Uuid, ttl: Duration) -> bool;

    /// Release `key` if it is still held by `token`.
    fn unlock(&self, key: &GameSessionKey, token: Uuid) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct Holder {
    token: Uuid,
    expires_at: Instant,
}

/// In-process lock store.
///
/// Holders carry a TTL so a lock leaked by a crashed task cannot wedge a
/// session forever.
#[derive(Debug, Default)]
pub struct MemoryLockStore {
    held: DashMap<GameSessionKey, Holder>,
}

impl MemoryLockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held (including expired, not yet reclaimed).
    pub fn held(&self) -> usize {
        self.held.len()
    }
}

impl LockStore for MemoryLockStore {
    fn try_lock(&self, key: &GameSessionKey, token: Uuid, ttl: Duration) -> bool {
        let now = Instant::now();
        let holder = Holder {
            token,
            expires_at: now + ttl,
        };
        match self.held.entry(key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(holder);
                true
            }
            Entry::Occupied(mut slot) => {
                if slot.get().expires_at <= now {
                    warn!(session = %key, "Reclaiming expired session lock");
                    slot.insert(holder);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn unlock(&self, key: &GameSessionKey, token: Uuid) -> bool {
        self.held.remove_if(key, |_, h| h.token == token).is_some()
    }
}

/// Hands out [`SessionLock`]s over a [`LockStore`].
#[derive(Clone)]
pub struct LockCoordinator {
    store: Arc<dyn LockStore>,
    ttl: Duration,
}

impl LockCoordinator {
    pub fn new(store: Arc<dyn LockStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Acquire `key` or fail immediately if another dispatch holds it.
    pub fn try_acquire(&self, key: &GameSessionKey) -> Result<SessionLock, LockUnavailable> {
        let token = Uuid::new_v4();
        if self.store.try_lock(key, token, self.ttl) {
            debug!(session = %key, %token, "Session lock acquired");
            Ok(SessionLock {
                key: key.clone(),
                token,
                store: Arc::clone(&self.store),
            })
        } else {
            debug!(session = %key, "Session lock contended");
            crate::metrics::record_lock_contention();
            Err(LockUnavailable { key: key.clone() })
        }
    }
}

/// Exclusive ownership of a session. Released on drop.
pub struct SessionLock {
    key: GameSessionKey,
    token: Uuid,
    store: Arc<dyn LockStore>,
}

impl SessionLock {
    pub fn key(&self) -> &GameSessionKey {
        &self.key
    }

    pub fn token(&self) -> Uuid {
        self.token
    }
}

impl std::fmt::Debug for SessionLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionLock")
            .field("key", &self.key)
            .field("token", &self.token)
            .finish()
    }
}

impl Drop for SessionLock {
    fn drop(&mut self) {
        if self.store.unlock(&self.key, self.token) {
            debug!(session = %self.key, token = %self.token, "Session lock released");
        } else {
            // Expired and reclaimed by someone else; nothing to release.
            warn!(session = %self.key, token = %self.token, "Session lock was no longer held");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator(ttl: Duration) -> (LockCoordinator, Arc<MemoryLockStore>) {
        let store = Arc::new(MemoryLockStore::new());
        (LockCoordinator::new(store.clone(), ttl), store)
    }

    #[test]
    fn test_contended_acquire_fails_then_release_frees() {
        let (locks, store) = coordinator(Duration::from_secs(30));
        let key = GameSessionKey::new("g", "c");

        let held = locks.try_acquire(&key).unwrap();
        assert_eq!(locks.try_acquire(&key).unwrap_err().key, key);

        drop(held);
        assert_eq!(store.held(), 0);
        assert!(locks.try_acquire(&key).is_ok());
    }

    #[test]
    fn test_distinct_keys_do_not_contend() {
        let (locks, _) = coordinator(Duration::from_secs(30));
        let a = locks.try_acquire(&GameSessionKey::new("g", "c1")).unwrap();
        let b = locks.try_acquire(&GameSessionKey::new("g", "c2")).unwrap();
        let c = locks.try_acquire(&GameSessionKey::new("h", "c1")).unwrap();
        assert_ne!(a.token(), b.token());
        drop((a, b, c));
    }

    #[test]
    fn test_expired_holder_is_reclaimed() {
        let (locks, store) = coordinator(Duration::ZERO);
        let key = GameSessionKey::new("g", "c");
        let stale = locks.try_acquire(&key).unwrap();
        let fresh = locks.try_acquire(&key).unwrap();

        // The stale holder must not release the fresh holder's lock.
        drop(stale);
        assert_eq!(store.held(), 1);
        drop(fresh);
        assert_eq!(store.held(), 0);
    }

    #[test]
    fn test_released_on_panic_unwind() {
        let (locks, store) = coordinator(Duration::from_secs(30));
        let key = GameSessionKey::new("g", "c");
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _lock = locks.try_acquire(&key).unwrap();
            panic!("handler blew up");
        }));
        assert!(result.is_err());
        assert_eq!(store.held(), 0);
    }

    #[test]
    fn test_unlock_requires_matching_token() {
        let store = MemoryLockStore::new();
        let key = GameSessionKey::new("g", "c");
        let token = Uuid::new_v4();
        assert!(store.try_lock(&key, token, Duration::from_secs(5)));
        assert!(!store.unlock(&key, Uuid::new_v4()));
        assert!(store.unlock(&key, token));
    }
}
