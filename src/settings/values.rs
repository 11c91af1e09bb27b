//! Setting value codecs: how each setting renders and validates its value.

use super::model::{GuildSettings, MAX_PREFIX_LEN, VoiceAction};
use crate::error::{BotError, BotResult};
use crate::handlers::core::args;
use crate::i18n::{Localizer, Notice, messages};
use crate::state::Phase;
use std::ops::RangeInclusive;

/// Keyword that empties a list-valued setting.
pub const CLEAR_KEYWORD: &str = "clear";

/// Collaborators a value may need while applying.
pub struct SettingEnv<'a> {
    pub localizer: &'a dyn Localizer,
}

/// A setting's value behavior.
pub trait SettingValue: Send + Sync {
    /// Human-readable current value; empty when unset.
    fn current(&self, settings: &GuildSettings) -> String;

    /// Validate `args` and write the new value into `settings`.
    ///
    /// `args` is never empty. Returns a custom confirmation, or `None` for the
    /// generic "setting is now X" reply.
    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        env: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>>;
}

fn invalid(notice: Notice) -> BotError {
    BotError::Validation(notice)
}

// ============================================================================
// Prefix
// ============================================================================

pub struct Prefix;

impl SettingValue for Prefix {
    fn current(&self, settings: &GuildSettings) -> String {
        settings.command_prefix.clone()
    }

    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        _: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>> {
        let value = args.join(" ");
        let len = value.chars().count();
        if args.len() != 1 || len == 0 || len > MAX_PREFIX_LEN {
            return Err(invalid(Notice::new(messages::PREFIX_INVALID).arg("Value", value)));
        }
        settings.command_prefix = value;
        Ok(None)
    }
}

// ============================================================================
// Language
// ============================================================================

pub struct Language;

pub const RELOAD_KEYWORD: &str = "reload";

impl SettingValue for Language {
    fn current(&self, settings: &GuildSettings) -> String {
        settings.language.clone()
    }

    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        env: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>> {
        let code = args[0].to_lowercase();
        if code == RELOAD_KEYWORD {
            let count = env.localizer.reload()?;
            return Ok(Some(
                Notice::new(messages::LANGUAGE_RELOADED).arg("Count", count.to_string()),
            ));
        }
        let available = env.localizer.languages();
        if !available.contains(&code) {
            return Err(invalid(
                Notice::new(messages::LANGUAGE_UNKNOWN)
                    .arg("Value", code)
                    .arg("Languages", available.join(", ")),
            ));
        }
        settings.language = code;
        Ok(None)
    }
}

// ============================================================================
// Mention lists (admins, operator roles)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionKind {
    User,
    Role,
}

impl MentionKind {
    fn parse(self, token: &str) -> Option<String> {
        match self {
            Self::User => args::user_id(token),
            Self::Role => args::role_id(token),
        }
    }

    fn render(self, id: &str) -> String {
        match self {
            Self::User => format!("<@{id}>"),
            Self::Role => format!("<@&{id}>"),
        }
    }
}

pub struct MentionList {
    kind: MentionKind,
    field: fn(&mut GuildSettings) -> &mut Vec<String>,
    view: fn(&GuildSettings) -> &Vec<String>,
}

impl MentionList {
    pub fn new(
        kind: MentionKind,
        view: fn(&GuildSettings) -> &Vec<String>,
        field: fn(&mut GuildSettings) -> &mut Vec<String>,
    ) -> Self {
        Self { kind, field, view }
    }
}

impl SettingValue for MentionList {
    fn current(&self, settings: &GuildSettings) -> String {
        (self.view)(settings)
            .iter()
            .map(|id| self.kind.render(id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        _: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>> {
        if args.len() == 1 && args[0].eq_ignore_ascii_case(CLEAR_KEYWORD) {
            (self.field)(settings).clear();
            return Ok(None);
        }
        let mut ids = Vec::with_capacity(args.len());
        for token in args {
            let id = self.kind.parse(token).ok_or_else(|| {
                invalid(Notice::new(messages::MENTIONS_INVALID).arg("Value", token.as_str()))
            })?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        *(self.field)(settings) = ids;
        Ok(None)
    }
}

// ============================================================================
// Flags
// ============================================================================

pub struct Flag {
    get: fn(&GuildSettings) -> bool,
    set: fn(&mut GuildSettings, bool),
}

impl Flag {
    pub fn new(get: fn(&GuildSettings) -> bool, set: fn(&mut GuildSettings, bool)) -> Self {
        Self { get, set }
    }
}

impl SettingValue for Flag {
    fn current(&self, settings: &GuildSettings) -> String {
        (self.get)(settings).to_string()
    }

    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        _: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>> {
        let value = args::parse_bool(&args[0]).ok_or_else(|| {
            invalid(Notice::new(messages::BOOL_INVALID).arg("Value", args[0].as_str()))
        })?;
        (self.set)(settings, value);
        Ok(None)
    }
}

// ============================================================================
// Bounded integers
// ============================================================================

pub struct Bounded {
    range: RangeInclusive<i64>,
    get: fn(&GuildSettings) -> i64,
    set: fn(&mut GuildSettings, i64),
}

impl Bounded {
    pub fn new(
        range: RangeInclusive<i64>,
        get: fn(&GuildSettings) -> i64,
        set: fn(&mut GuildSettings, i64),
    ) -> Self {
        Self { range, get, set }
    }
}

fn parse_in_range(token: &str, range: &RangeInclusive<i64>) -> BotResult<i64> {
    token
        .parse::<i64>()
        .ok()
        .filter(|n| range.contains(n))
        .ok_or_else(|| {
            invalid(
                Notice::new(messages::NUMBER_INVALID)
                    .arg("Value", token)
                    .arg("Min", range.start().to_string())
                    .arg("Max", range.end().to_string()),
            )
        })
}

impl SettingValue for Bounded {
    fn current(&self, settings: &GuildSettings) -> String {
        (self.get)(settings).to_string()
    }

    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        _: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>> {
        let n = parse_in_range(&args[0], &self.range)?;
        (self.set)(settings, n);
        Ok(None)
    }
}

// ============================================================================
// Enumerated choices
// ============================================================================

pub struct Choice {
    names: &'static [&'static str],
    get: fn(&GuildSettings) -> &'static str,
    set: fn(&mut GuildSettings, &str) -> bool,
}

impl Choice {
    pub fn new(
        names: &'static [&'static str],
        get: fn(&GuildSettings) -> &'static str,
        set: fn(&mut GuildSettings, &str) -> bool,
    ) -> Self {
        Self { names, get, set }
    }
}

impl SettingValue for Choice {
    fn current(&self, settings: &GuildSettings) -> String {
        (self.get)(settings).to_string()
    }

    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        _: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>> {
        if !(self.set)(settings, &args[0]) {
            return Err(invalid(
                Notice::new(messages::CHOICE_INVALID)
                    .arg("Value", args[0].as_str())
                    .arg("Choices", self.names.join(", ")),
            ));
        }
        Ok(None)
    }
}

// ============================================================================
// Channel
// ============================================================================

pub struct Channel {
    view: fn(&GuildSettings) -> Option<&String>,
    field: fn(&mut GuildSettings) -> &mut Option<String>,
}

impl Channel {
    pub fn new(
        view: fn(&GuildSettings) -> Option<&String>,
        field: fn(&mut GuildSettings) -> &mut Option<String>,
    ) -> Self {
        Self { view, field }
    }
}

impl SettingValue for Channel {
    fn current(&self, settings: &GuildSettings) -> String {
        (self.view)(settings)
            .map(|id| format!("<#{id}>"))
            .unwrap_or_default()
    }

    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        _: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>> {
        if args[0].eq_ignore_ascii_case(CLEAR_KEYWORD) {
            *(self.field)(settings) = None;
            return Ok(None);
        }
        let id = args::channel_id(&args[0]).ok_or_else(|| {
            invalid(Notice::new(messages::CHANNEL_INVALID).arg("Value", args[0].as_str()))
        })?;
        *(self.field)(settings) = Some(id);
        Ok(None)
    }
}

// ============================================================================
// Delays
// ============================================================================

pub const MAX_DELAY_SECS: i64 = 20;

pub struct Delays;

fn configurable_phase(token: &str) -> BotResult<Phase> {
    Phase::parse(token)
        .filter(|p| Phase::CONFIGURABLE.contains(p))
        .ok_or_else(|| invalid(Notice::new(messages::PHASE_INVALID).arg("Value", token)))
}

impl SettingValue for Delays {
    fn current(&self, settings: &GuildSettings) -> String {
        let mut lines = Vec::new();
        for from in Phase::CONFIGURABLE {
            for to in Phase::CONFIGURABLE {
                if from != to {
                    lines.push(format!("{from} -> {to}: {}s", settings.delay(from, to)));
                }
            }
        }
        lines.join("\n")
    }

    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        _: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>> {
        let [from, to, secs] = args else {
            return Err(invalid(Notice::new(messages::DELAYS_USAGE)));
        };
        let from = configurable_phase(from)?;
        let to = configurable_phase(to)?;
        let secs = parse_in_range(secs, &(0..=MAX_DELAY_SECS))?;
        settings.set_delay(from, to, secs as u32);
        Ok(None)
    }
}

// ============================================================================
// Voice rules
// ============================================================================

pub struct VoiceRules;

fn parse_alive(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "alive" | "a" => Some(true),
        "dead" | "d" => Some(false),
        _ => None,
    }
}

impl SettingValue for VoiceRules {
    fn current(&self, settings: &GuildSettings) -> String {
        let mut lines = Vec::new();
        for action in [VoiceAction::Mute, VoiceAction::Deafen] {
            for phase in Phase::CONFIGURABLE {
                for alive in [true, false] {
                    let on = settings.voice_rule(action, phase, alive);
                    let status = if alive { "alive" } else { "dead" };
                    lines.push(format!("{action} {phase} {status}: {on}"));
                }
            }
        }
        lines.join("\n")
    }

    fn apply(
        &self,
        settings: &mut GuildSettings,
        args: &[String],
        _: &SettingEnv<'_>,
    ) -> BotResult<Option<Notice>> {
        let usage = || invalid(Notice::new(messages::VOICE_RULES_USAGE));
        let [action, phase, status, value] = args else {
            return Err(usage());
        };
        let action = VoiceAction::parse(action).ok_or_else(usage)?;
        let phase = configurable_phase(phase)?;
        let alive = parse_alive(status).ok_or_else(usage)?;
        let on = args::parse_bool(value).ok_or_else(|| {
            invalid(Notice::new(messages::BOOL_INVALID).arg("Value", value.as_str()))
        })?;
        settings.set_voice_rule(action, phase, alive, on);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    fn toks(s: &str) -> Vec<String> {
        args::tokenize(s)
    }

    fn apply(
        value: &dyn SettingValue,
        s: &mut GuildSettings,
        input: &str,
    ) -> BotResult<Option<Notice>> {
        let catalog = Catalog::empty();
        value.apply(s, &toks(input), &SettingEnv { localizer: &catalog })
    }

    fn validation_id(result: BotResult<Option<Notice>>) -> &'static str {
        match result {
            Err(BotError::Validation(n)) => n.msg.id,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_prefix() {
        let mut s = GuildSettings::default();
        apply(&Prefix, &mut s, "!mb").unwrap();
        assert_eq!(s.command_prefix, "!mb");
        assert_eq!(validation_id(apply(&Prefix, &mut s, "a b")), messages::PREFIX_INVALID.id);
        assert_eq!(
            validation_id(apply(&Prefix, &mut s, "abcdefghijk")),
            messages::PREFIX_INVALID.id
        );
        assert_eq!(s.command_prefix, "!mb");
    }

    #[test]
    fn test_language_only_loaded_codes() {
        let mut s = GuildSettings::default();
        apply(&Language, &mut s, "EN").unwrap();
        assert_eq!(s.language, "en");
        assert_eq!(validation_id(apply(&Language, &mut s, "xx")), messages::LANGUAGE_UNKNOWN.id);
        let notice = apply(&Language, &mut s, "reload").unwrap().unwrap();
        assert_eq!(notice.msg, messages::LANGUAGE_RELOADED);
    }

    #[test]
    fn test_language_reload_failure_is_external() {
        let dir = tempfile::tempdir().unwrap();
        let ru = dir.path().join("ru.toml");
        std::fs::write(&ru, "\"help.title\" = \"Команды\"\n").unwrap();
        let catalog = Catalog::load(dir.path()).unwrap();
        std::fs::write(&ru, "not = [valid").unwrap();

        let mut s = GuildSettings::default();
        let err = Language
            .apply(&mut s, &toks("reload"), &SettingEnv { localizer: &catalog })
            .unwrap_err();
        assert!(matches!(err, BotError::Catalog(_)));
        assert_eq!(err.error_code(), "external_service");
        assert_eq!(s.language, "en");
    }

    #[test]
    fn test_mention_list() {
        let admins = MentionList::new(
            MentionKind::User,
            |s| &s.admin_user_ids,
            |s| &mut s.admin_user_ids,
        );
        let mut s = GuildSettings::default();
        apply(&admins, &mut s, "<@1> <@!2> <@1>").unwrap();
        assert_eq!(s.admin_user_ids, vec!["1", "2"]);
        assert_eq!(admins.current(&s), "<@1> <@2>");
        assert_eq!(
            validation_id(apply(&admins, &mut s, "<@1> bob")),
            messages::MENTIONS_INVALID.id
        );
        assert_eq!(s.admin_user_ids.len(), 2);
        apply(&admins, &mut s, "CLEAR").unwrap();
        assert!(s.admin_user_ids.is_empty());
    }

    #[test]
    fn test_flag_and_bounded() {
        let flag = Flag::new(|s| s.auto_refresh, |s, v| s.auto_refresh = v);
        let mut s = GuildSettings::default();
        apply(&flag, &mut s, "on").unwrap();
        assert!(s.auto_refresh);
        assert_eq!(validation_id(apply(&flag, &mut s, "perhaps")), messages::BOOL_INVALID.id);

        let size = Bounded::new(
            1..=10,
            |s| s.leaderboard_size as i64,
            |s, v| s.leaderboard_size = v as u32,
        );
        apply(&size, &mut s, "10").unwrap();
        assert_eq!(s.leaderboard_size, 10);
        assert_eq!(validation_id(apply(&size, &mut s, "11")), messages::NUMBER_INVALID.id);
        assert_eq!(validation_id(apply(&size, &mut s, "ten")), messages::NUMBER_INVALID.id);
    }

    #[test]
    fn test_delays() {
        let mut s = GuildSettings::default();
        apply(&Delays, &mut s, "lobby tasks 5").unwrap();
        assert_eq!(s.delay(Phase::Lobby, Phase::Tasks), 5);
        assert_eq!(
            validation_id(apply(&Delays, &mut s, "lobby tasks 21")),
            messages::NUMBER_INVALID.id
        );
        assert_eq!(
            validation_id(apply(&Delays, &mut s, "lobby moon 1")),
            messages::PHASE_INVALID.id
        );
        assert_eq!(validation_id(apply(&Delays, &mut s, "lobby tasks")), messages::DELAYS_USAGE.id);
        assert!(Delays.current(&s).contains("lobby -> tasks: 5s"));
    }

    #[test]
    fn test_voice_rules() {
        let mut s = GuildSettings::default();
        apply(&VoiceRules, &mut s, "deaf discussion dead true").unwrap();
        assert!(s.voice_rule(VoiceAction::Deafen, Phase::Discussion, false));
        assert_eq!(
            validation_id(apply(&VoiceRules, &mut s, "mute tasks")),
            messages::VOICE_RULES_USAGE.id
        );
        assert_eq!(
            validation_id(apply(&VoiceRules, &mut s, "mute tasks zombie true")),
            messages::VOICE_RULES_USAGE.id
        );
    }

    #[test]
    fn test_channel() {
        let chan = Channel::new(
            |s| s.match_summary_channel.as_ref(),
            |s| &mut s.match_summary_channel,
        );
        let mut s = GuildSettings::default();
        apply(&chan, &mut s, "<#42>").unwrap();
        assert_eq!(chan.current(&s), "<#42>");
        assert_eq!(validation_id(apply(&chan, &mut s, "general")), messages::CHANNEL_INVALID.id);
        apply(&chan, &mut s, "clear").unwrap();
        assert_eq!(chan.current(&s), "");
    }
}
