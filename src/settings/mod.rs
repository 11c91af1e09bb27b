//! Guild settings: the model, value codecs and the setting registry entries.

mod model;
pub mod values;

pub use model::{
    DEFAULT_PREFIX, GuildSettings, MAX_PREFIX_LEN, MapVersion, RoomCodeVisibility, VoiceAction,
};
pub use values::{SettingEnv, SettingValue};

use crate::handlers::core::RegistryEntry;
use crate::i18n::{Localizer, Msg, messages, messages::setting as text};
use crate::response::{COLOR_GOLD, Card};
use values::{
    Bounded, Channel, Choice, Delays, Flag, Language, MentionKind, MentionList, Prefix, VoiceRules,
};

/// Marker shown next to premium-gated settings.
pub const PREMIUM_MARKER: &str = "💎";

/// What invoking a setting does.
pub enum SettingAction {
    /// View or change a stored value.
    Value(Box<dyn SettingValue>),
    /// Show every current value.
    Show,
    /// Restore defaults (two-step confirm).
    Reset,
}

/// A registered setting.
pub struct SettingEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub premium: bool,
    /// Usage after `settings`, e.g. `commandPrefix !`.
    pub example: &'static str,
    pub short_help: Msg,
    pub long_help: Msg,
    pub arguments: Msg,
    pub action: SettingAction,
}

impl RegistryEntry for SettingEntry {
    fn name(&self) -> &str {
        self.name
    }

    fn aliases(&self) -> &[&'static str] {
        self.aliases
    }
}

impl SettingEntry {
    /// Name with the premium marker when gated.
    pub fn title(&self) -> String {
        if self.premium {
            format!("{PREMIUM_MARKER} {}", self.name)
        } else {
            self.name.to_string()
        }
    }

    pub fn value(&self) -> Option<&dyn SettingValue> {
        match &self.action {
            SettingAction::Value(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    /// Detail card: current value, example, arguments and aliases.
    pub fn card(
        &self,
        settings: &GuildSettings,
        localizer: &dyn Localizer,
        language: &str,
        prefix: &str,
    ) -> Card {
        let l = |msg: &Msg| localizer.localize(language, msg, &[("CommandPrefix", prefix)]);
        let description = localizer.localize(
            language,
            &messages::SETTING_CARD_DESCRIPTION,
            &[("CommandPrefix", prefix), ("Setting", self.name)],
        ) + &l(&self.long_help);

        let mut card = Card::new(self.title(), description, COLOR_GOLD);
        if let Some(value) = self.value() {
            let current = value.current(settings);
            card = card.field(
                l(&messages::FIELD_CURRENT_VALUE),
                if current.is_empty() { "null".to_string() } else { current },
                false,
            );
        }
        let aliases = if self.aliases.is_empty() {
            l(&messages::NONE)
        } else {
            self.aliases.join(", ")
        };
        card.field(
            l(&messages::FIELD_EXAMPLE),
            format!("`{prefix} settings {}`", self.example),
            false,
        )
        .field(
            l(&messages::FIELD_ARGUMENTS),
            format!("`{}`", l(&self.arguments)),
            false,
        )
        .field(l(&messages::FIELD_ALIASES), aliases, false)
    }
}

/// Every setting, in precedence order.
pub fn all_settings() -> Vec<SettingEntry> {
    fn value(v: impl SettingValue + 'static) -> SettingAction {
        SettingAction::Value(Box::new(v))
    }

    vec![
        SettingEntry {
            name: "commandPrefix",
            aliases: &["prefix", "pref", "cp"],
            premium: false,
            example: "commandPrefix !",
            short_help: text::PREFIX_SHORT,
            long_help: text::PREFIX_LONG,
            arguments: text::PREFIX_ARGS,
            action: value(Prefix),
        },
        SettingEntry {
            name: "language",
            aliases: &["local", "lang", "l"],
            premium: false,
            example: "language ru",
            short_help: text::LANGUAGE_SHORT,
            long_help: text::LANGUAGE_LONG,
            arguments: text::LANGUAGE_ARGS,
            action: value(Language),
        },
        SettingEntry {
            name: "adminUserIDs",
            aliases: &["admins", "admin", "auid", "aui", "a"],
            premium: false,
            example: "adminUserIDs @Soup @Bob",
            short_help: text::ADMINS_SHORT,
            long_help: text::ADMINS_LONG,
            arguments: text::ADMINS_ARGS,
            action: value(MentionList::new(
                MentionKind::User,
                |s| &s.admin_user_ids,
                |s| &mut s.admin_user_ids,
            )),
        },
        SettingEntry {
            name: "operatorRoles",
            aliases: &["operators", "operator", "oproles", "roles", "role", "ops", "op"],
            premium: false,
            example: "operatorRoles @Bot Admins @Bot Mods",
            short_help: text::OPERATORS_SHORT,
            long_help: text::OPERATORS_LONG,
            arguments: text::OPERATORS_ARGS,
            action: value(MentionList::new(
                MentionKind::Role,
                |s| &s.operator_roles,
                |s| &mut s.operator_roles,
            )),
        },
        SettingEntry {
            name: "unmuteDeadDuringTasks",
            aliases: &["unmutedead", "unmute", "uddt", "ud"],
            premium: false,
            example: "unmuteDeadDuringTasks false",
            short_help: text::UNMUTE_DEAD_SHORT,
            long_help: text::UNMUTE_DEAD_LONG,
            arguments: text::UNMUTE_DEAD_ARGS,
            action: value(Flag::new(
                |s| s.unmute_dead_during_tasks,
                |s, v| s.unmute_dead_during_tasks = v,
            )),
        },
        SettingEntry {
            name: "delays",
            aliases: &["d"],
            premium: false,
            example: "delays lobby tasks 5",
            short_help: text::DELAYS_SHORT,
            long_help: text::DELAYS_LONG,
            arguments: text::DELAYS_ARGS,
            action: value(Delays),
        },
        SettingEntry {
            name: "voiceRules",
            aliases: &["voice", "vr"],
            premium: false,
            example: "voiceRules mute tasks dead true",
            short_help: text::VOICE_RULES_SHORT,
            long_help: text::VOICE_RULES_LONG,
            arguments: text::VOICE_RULES_ARGS,
            action: value(VoiceRules),
        },
        SettingEntry {
            name: "mapVersion",
            aliases: &["map"],
            premium: false,
            example: "mapVersion detailed",
            short_help: text::MAP_VERSION_SHORT,
            long_help: text::MAP_VERSION_LONG,
            arguments: text::MAP_VERSION_ARGS,
            action: value(Choice::new(
                MapVersion::NAMES,
                |s| s.map_version.as_str(),
                |s, v| MapVersion::parse(v).map(|m| s.map_version = m).is_some(),
            )),
        },
        SettingEntry {
            name: "matchSummary",
            aliases: &["matchsumm", "matchsum", "summary", "match", "summ", "sum"],
            premium: true,
            example: "matchSummary 5",
            short_help: text::MATCH_SUMMARY_SHORT,
            long_help: text::MATCH_SUMMARY_LONG,
            arguments: text::MATCH_SUMMARY_ARGS,
            action: value(Bounded::new(
                -1..=60,
                |s| s.match_summary_minutes as i64,
                |s, v| s.match_summary_minutes = v as i32,
            )),
        },
        SettingEntry {
            name: "matchSummaryChannel",
            aliases: &[
                "matchsummchan",
                "matchsumchan",
                "summarychannel",
                "matchchannel",
                "summchan",
                "sumchan",
            ],
            premium: true,
            example: "matchSummaryChannel #general",
            short_help: text::MATCH_SUMMARY_CHANNEL_SHORT,
            long_help: text::MATCH_SUMMARY_CHANNEL_LONG,
            arguments: text::MATCH_SUMMARY_CHANNEL_ARGS,
            action: value(Channel::new(
                |s| s.match_summary_channel.as_ref(),
                |s| &mut s.match_summary_channel,
            )),
        },
        SettingEntry {
            name: "autoRefresh",
            aliases: &["refresh", "auto", "ar"],
            premium: true,
            example: "autoRefresh true",
            short_help: text::AUTO_REFRESH_SHORT,
            long_help: text::AUTO_REFRESH_LONG,
            arguments: text::AUTO_REFRESH_ARGS,
            action: value(Flag::new(|s| s.auto_refresh, |s, v| s.auto_refresh = v)),
        },
        SettingEntry {
            name: "leaderboardMention",
            aliases: &["lboardmention", "leadermention", "mention", "ment"],
            premium: true,
            example: "leaderboardMention true",
            short_help: text::LEADERBOARD_MENTION_SHORT,
            long_help: text::LEADERBOARD_MENTION_LONG,
            arguments: text::LEADERBOARD_MENTION_ARGS,
            action: value(Flag::new(
                |s| s.leaderboard_mention,
                |s, v| s.leaderboard_mention = v,
            )),
        },
        SettingEntry {
            name: "leaderboardSize",
            aliases: &["lboardsize", "boardsize", "leadersize", "size"],
            premium: true,
            example: "leaderboardSize 5",
            short_help: text::LEADERBOARD_SIZE_SHORT,
            long_help: text::LEADERBOARD_SIZE_LONG,
            arguments: text::LEADERBOARD_SIZE_ARGS,
            action: value(Bounded::new(
                1..=10,
                |s| s.leaderboard_size as i64,
                |s, v| s.leaderboard_size = v as u32,
            )),
        },
        SettingEntry {
            name: "leaderboardMin",
            aliases: &["lboardmin", "boardmin", "leadermin", "min"],
            premium: true,
            example: "leaderboardMin 3",
            short_help: text::LEADERBOARD_MIN_SHORT,
            long_help: text::LEADERBOARD_MIN_LONG,
            arguments: text::LEADERBOARD_MIN_ARGS,
            action: value(Bounded::new(
                1..=100,
                |s| s.leaderboard_min as i64,
                |s, v| s.leaderboard_min = v as u32,
            )),
        },
        SettingEntry {
            name: "muteSpectators",
            aliases: &["mutespectator", "mutespec", "spectators", "spectator", "spec"],
            premium: true,
            example: "muteSpectators true",
            short_help: text::MUTE_SPECTATORS_SHORT,
            long_help: text::MUTE_SPECTATORS_LONG,
            arguments: text::MUTE_SPECTATORS_ARGS,
            action: value(Flag::new(
                |s| s.mute_spectators,
                |s, v| s.mute_spectators = v,
            )),
        },
        SettingEntry {
            name: "displayRoomCode",
            aliases: &["roomcode", "code", "rc"],
            premium: true,
            example: "displayRoomCode spoiler",
            short_help: text::ROOM_CODE_SHORT,
            long_help: text::ROOM_CODE_LONG,
            arguments: text::ROOM_CODE_ARGS,
            action: value(Choice::new(
                RoomCodeVisibility::NAMES,
                |s| s.display_room_code.as_str(),
                |s, v| {
                    RoomCodeVisibility::parse(v)
                        .map(|r| s.display_room_code = r)
                        .is_some()
                },
            )),
        },
        SettingEntry {
            name: "show",
            aliases: &["sh", "s"],
            premium: false,
            example: "show",
            short_help: text::SHOW_SHORT,
            long_help: text::SHOW_LONG,
            arguments: text::SHOW_ARGS,
            action: SettingAction::Show,
        },
        SettingEntry {
            name: "reset",
            aliases: &[],
            premium: false,
            example: "reset confirm",
            short_help: text::RESET_SHORT,
            long_help: text::RESET_LONG,
            arguments: text::RESET_ARGS,
            action: SettingAction::Reset,
        },
    ]
}
