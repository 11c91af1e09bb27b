//! Game session model.
//!
//! A session is the shared mutable game state scoped to one (guild, text
//! channel) pair. The game-state machine itself lives outside this crate;
//! this is the slice of it commands read and mutate.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// In-game player colors accepted by `link`.
pub const PLAYER_COLORS: &[&str] = &[
    "red", "blue", "green", "pink", "orange", "yellow", "black", "white", "purple", "brown",
    "cyan", "lime", "maroon", "rose", "banana", "gray", "tan", "coral",
];

/// Identifies the shared game session a command may read or mutate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameSessionKey {
    pub guild_id: String,
    pub channel_id: String,
}

impl GameSessionKey {
    pub fn new(guild_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            guild_id: guild_id.into(),
            channel_id: channel_id.into(),
        }
    }
}

impl fmt::Display for GameSessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guild_id, self.channel_id)
    }
}

/// Game phase as tracked by the external state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menu,
    Lobby,
    Tasks,
    Discussion,
}

impl Phase {
    /// Phases a player can configure delays and voice rules for.
    pub const CONFIGURABLE: [Phase; 3] = [Phase::Lobby, Phase::Tasks, Phase::Discussion];

    /// Parse a phase name or its one-letter abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lobby" | "l" => Some(Self::Lobby),
            "tasks" | "task" | "t" => Some(Self::Tasks),
            "discussion" | "discuss" | "d" => Some(Self::Discussion),
            "menu" | "m" => Some(Self::Menu),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Lobby => "lobby",
            Self::Tasks => "tasks",
            Self::Discussion => "discussion",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chat user linked to an in-game player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLink {
    pub user_id: String,
    /// Player color, when the link was made by color.
    pub color: Option<String>,
    /// In-game name, when the link was made by name.
    pub name: Option<String>,
}

impl PlayerLink {
    /// Link by color when `player` names a known color, by name otherwise.
    pub fn new(user_id: impl Into<String>, player: &str) -> Self {
        let lowered = player.to_ascii_lowercase();
        if PLAYER_COLORS.contains(&lowered.as_str()) {
            Self {
                user_id: user_id.into(),
                color: Some(lowered),
                name: None,
            }
        } else {
            Self {
                user_id: user_id.into(),
                color: None,
                name: Some(player.to_string()),
            }
        }
    }
}

/// Shared game state for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub key: GameSessionKey,
    pub connect_code: String,
    pub running: bool,
    pub phase: Phase,
    pub links: Vec<PlayerLink>,
    pub status_message_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GameState {
    pub fn new(key: GameSessionKey) -> Self {
        Self {
            key,
            connect_code: generate_connect_code(),
            running: true,
            phase: Phase::Lobby,
            links: Vec::new(),
            status_message_id: None,
            created_at: Utc::now(),
        }
    }

    /// Link a user, replacing any previous link for that user.
    pub fn link(&mut self, link: PlayerLink) {
        self.links.retain(|l| l.user_id != link.user_id);
        self.links.push(link);
    }

    /// Remove a user's link. Returns whether one existed.
    pub fn unlink(&mut self, user_id: &str) -> bool {
        let before = self.links.len();
        self.links.retain(|l| l.user_id != user_id);
        self.links.len() != before
    }
}

/// Eight uppercase letters, used by the capture client to join a session.
fn generate_connect_code() -> String {
    let mut rng = rand::thread_rng();
    (0..8).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_parse() {
        assert_eq!(Phase::parse("T"), Some(Phase::Tasks));
        assert_eq!(Phase::parse("discuss"), Some(Phase::Discussion));
        assert_eq!(Phase::parse("lobby"), Some(Phase::Lobby));
        assert_eq!(Phase::parse("voting"), None);
    }

    #[test]
    fn test_player_link_by_color_or_name() {
        let by_color = PlayerLink::new("1", "Red");
        assert_eq!(by_color.color.as_deref(), Some("red"));
        assert!(by_color.name.is_none());

        let by_name = PlayerLink::new("1", "SoupLord");
        assert_eq!(by_name.name.as_deref(), Some("SoupLord"));
    }

    #[test]
    fn test_link_replaces_and_unlink() {
        let mut state = GameState::new(GameSessionKey::new("g", "c"));
        state.link(PlayerLink::new("1", "red"));
        state.link(PlayerLink::new("1", "blue"));
        assert_eq!(state.links.len(), 1);
        assert_eq!(state.links[0].color.as_deref(), Some("blue"));
        assert!(state.unlink("1"));
        assert!(!state.unlink("1"));
    }

    #[test]
    fn test_connect_code_shape() {
        let state = GameState::new(GameSessionKey::new("g", "c"));
        assert_eq!(state.connect_code.len(), 8);
        assert!(state.connect_code.chars().all(|c| c.is_ascii_uppercase()));
    }
}
