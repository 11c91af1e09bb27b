//! Per-guild settings snapshot.

use crate::state::Phase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_PREFIX: &str = ".au";
pub const MAX_PREFIX_LEN: usize = 10;

/// Which map image `map` shows when no qualifier is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapVersion {
    #[default]
    Simple,
    Detailed,
}

impl MapVersion {
    pub const NAMES: &'static [&'static str] = &["simple", "detailed"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Some(Self::Simple),
            "detailed" => Some(Self::Detailed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Detailed => "detailed",
        }
    }
}

/// How the room code is shown in the status message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCodeVisibility {
    #[default]
    Always,
    Spoiler,
    Never,
}

impl RoomCodeVisibility {
    pub const NAMES: &'static [&'static str] = &["always", "spoiler", "never"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Some(Self::Always),
            "spoiler" => Some(Self::Spoiler),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Spoiler => "spoiler",
            Self::Never => "never",
        }
    }
}

/// Mute or deafen, for voice rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAction {
    Mute,
    Deafen,
}

impl VoiceAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mute" | "muted" | "m" => Some(Self::Mute),
            "deaf" | "deafen" | "deafened" => Some(Self::Deafen),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mute => "mute",
            Self::Deafen => "deaf",
        }
    }
}

impl fmt::Display for VoiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuildSettings {
    pub command_prefix: String,
    pub language: String,
    pub admin_user_ids: Vec<String>,
    pub operator_roles: Vec<String>,
    pub unmute_dead_during_tasks: bool,
    /// Seconds, keyed by `from->to`.
    pub delays: BTreeMap<String, u32>,
    /// Keyed by `action:phase:alive|dead`.
    pub voice_rules: BTreeMap<String, bool>,
    pub map_version: MapVersion,
    /// Minutes before the match summary is deleted; -1 keeps it forever.
    pub match_summary_minutes: i32,
    pub match_summary_channel: Option<String>,
    pub auto_refresh: bool,
    pub leaderboard_mention: bool,
    pub leaderboard_size: u32,
    pub leaderboard_min: u32,
    pub mute_spectators: bool,
    pub display_room_code: RoomCodeVisibility,
}

impl Default for GuildSettings {
    fn default() -> Self {
        let mut settings = Self {
            command_prefix: DEFAULT_PREFIX.to_string(),
            language: crate::i18n::DEFAULT_LANGUAGE.to_string(),
            admin_user_ids: Vec::new(),
            operator_roles: Vec::new(),
            unmute_dead_during_tasks: false,
            delays: BTreeMap::new(),
            voice_rules: BTreeMap::new(),
            map_version: MapVersion::Simple,
            match_summary_minutes: -1,
            match_summary_channel: None,
            auto_refresh: false,
            leaderboard_mention: true,
            leaderboard_size: 3,
            leaderboard_min: 3,
            mute_spectators: false,
            display_room_code: RoomCodeVisibility::Always,
        };
        settings.set_delay(Phase::Lobby, Phase::Tasks, 2);
        settings.set_delay(Phase::Discussion, Phase::Tasks, 7);
        settings.set_voice_rule(VoiceAction::Mute, Phase::Tasks, true, true);
        settings.set_voice_rule(VoiceAction::Deafen, Phase::Tasks, true, true);
        settings.set_voice_rule(VoiceAction::Mute, Phase::Discussion, false, true);
        settings
    }
}

impl GuildSettings {
    /// Defaults with a deployment-specific prefix and language.
    pub fn with_defaults(prefix: &str, language: &str) -> Self {
        Self {
            command_prefix: prefix.to_string(),
            language: language.to_string(),
            ..Self::default()
        }
    }

    fn delay_key(from: Phase, to: Phase) -> String {
        format!("{from}->{to}")
    }

    fn voice_key(action: VoiceAction, phase: Phase, alive: bool) -> String {
        format!("{action}:{phase}:{}", if alive { "alive" } else { "dead" })
    }

    pub fn delay(&self, from: Phase, to: Phase) -> u32 {
        self.delays
            .get(&Self::delay_key(from, to))
            .copied()
            .unwrap_or(0)
    }

    pub fn set_delay(&mut self, from: Phase, to: Phase, seconds: u32) {
        self.delays.insert(Self::delay_key(from, to), seconds);
    }

    pub fn voice_rule(&self, action: VoiceAction, phase: Phase, alive: bool) -> bool {
        self.voice_rules
            .get(&Self::voice_key(action, phase, alive))
            .copied()
            .unwrap_or(false)
    }

    pub fn set_voice_rule(&mut self, action: VoiceAction, phase: Phase, alive: bool, on: bool) {
        self.voice_rules
            .insert(Self::voice_key(action, phase, alive), on);
    }
}
