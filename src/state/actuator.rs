//! Voice and status-message actuation.
//!
//! Muting, deafening and editing the game status message happen on the chat
//! platform; commands only ask for them through [`GameActuator`].

use super::{GameState, StoreError};
use crate::settings::GuildSettings;
use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

#[async_trait]
pub trait GameActuator: Send + Sync {
    /// Set mute/deaf for every linked player in the session.
    async fn apply_to_all(&self, state: &GameState, mute: bool, deaf: bool)
    -> Result<(), StoreError>;

    /// Post (or re-post) the status message. Returns the new message id.
    async fn publish_status(
        &self,
        state: &GameState,
        settings: &GuildSettings,
    ) -> Result<Option<String>, StoreError>;

    /// Tell the capture pipeline the game for this session is over.
    async fn end_game(&self, state: &GameState) -> Result<(), StoreError>;
}

/// Accepts every request and does nothing. The stdio transport uses it.
#[derive(Debug, Default)]
pub struct NoopActuator;

#[async_trait]
impl GameActuator for NoopActuator {
    async fn apply_to_all(&self, _: &GameState, _: bool, _: bool) -> Result<(), StoreError> {
        Ok(())
    }

    async fn publish_status(
        &self,
        _: &GameState,
        _: &GuildSettings,
    ) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    async fn end_game(&self, _: &GameState) -> Result<(), StoreError> {
        Ok(())
    }
}

/// What a [`RecordingActuator`] was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuatorEvent {
    ApplyToAll {
        connect_code: String,
        mute: bool,
        deaf: bool,
    },
    PublishStatus {
        connect_code: String,
        running: bool,
        links: usize,
    },
    EndGame {
        connect_code: String,
    },
}

/// Records requests in order, for tests.
#[derive(Debug, Default)]
pub struct RecordingActuator {
    events: Mutex<Vec<ActuatorEvent>>,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ActuatorEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl GameActuator for RecordingActuator {
    async fn apply_to_all(
        &self,
        state: &GameState,
        mute: bool,
        deaf: bool,
    ) -> Result<(), StoreError> {
        self.events.lock().push(ActuatorEvent::ApplyToAll {
            connect_code: state.connect_code.clone(),
            mute,
            deaf,
        });
        Ok(())
    }

    async fn publish_status(
        &self,
        state: &GameState,
        _settings: &GuildSettings,
    ) -> Result<Option<String>, StoreError> {
        self.events.lock().push(ActuatorEvent::PublishStatus {
            connect_code: state.connect_code.clone(),
            running: state.running,
            links: state.links.len(),
        });
        Ok(Some(Uuid::new_v4().to_string()))
    }

    async fn end_game(&self, state: &GameState) -> Result<(), StoreError> {
        self.events.lock().push(ActuatorEvent::EndGame {
            connect_code: state.connect_code.clone(),
        });
        Ok(())
    }
}
