//! State management module.
//!
//! Contains the per-(guild, channel) game session model, the non-blocking
//! session lock coordinator, and the narrow store interfaces the bot uses to
//! reach external persistence and the voice/status actuator.

mod actuator;
mod lock;
mod session;
mod store;

pub use actuator::{ActuatorEvent, GameActuator, NoopActuator, RecordingActuator};
pub use lock::{LockCoordinator, LockStore, LockUnavailable, MemoryLockStore, SessionLock};
pub use session::{GameSessionKey, GameState, PLAYER_COLORS, Phase, PlayerLink};
pub use store::{
    GameStateStore, MemoryGameStore, MemorySettingsStore, MemoryUsernameCache, SettingsStore,
    StoreError, UsernameCache,
};
