//! Chat command handlers.
//!
//! [`all_commands`] is the static command table the registry is built from.
//! Order matters only for alias precedence: the first entry to claim a key
//! keeps it.

pub mod core;

mod cache;
mod debug;
mod help;
mod info;
mod map;
mod misc;
mod privacy;
mod session;
mod settings;
mod stats;

pub use cache::CacheHandler;
pub use debug::DebugStateHandler;
pub use help::HelpHandler;
pub use info::InfoHandler;
pub use map::MapHandler;
pub use misc::{AsciiHandler, ForceHandler, WorkerBotHandler};
pub use privacy::PrivacyHandler;
pub use session::{
    EndHandler, LinkHandler, NewHandler, PauseHandler, RefreshHandler, UnlinkHandler,
    UnmuteAllHandler,
};
pub use settings::SettingsHandler;
pub use stats::StatsHandler;

use self::core::{CommandEntry, CommandKind, SessionAccess, Tier, Visibility};
use crate::i18n::messages::command as text;

/// Every command, in precedence order.
pub fn all_commands() -> Vec<CommandEntry> {
    use SessionAccess::{Exclusive, Shared};
    use Visibility::{Public, Secret};

    vec![
        CommandEntry {
            name: "help",
            aliases: &["h"],
            kind: CommandKind::Help,
            visibility: Public,
            tier: Tier::None,
            access: Shared,
            min_args: 0,
            emoji: "❓",
            example: "help link",
            short_help: text::HELP_SHORT,
            long_help: text::HELP_LONG,
            arguments: text::HELP_ARGS,
            handler: Box::new(HelpHandler),
        },
        CommandEntry {
            name: "new",
            aliases: &["start", "n"],
            kind: CommandKind::New,
            visibility: Public,
            tier: Tier::Operator,
            access: Exclusive,
            min_args: 0,
            emoji: "🕹",
            example: "new",
            short_help: text::NEW_SHORT,
            long_help: text::NEW_LONG,
            arguments: text::NEW_ARGS,
            handler: Box::new(NewHandler),
        },
        CommandEntry {
            name: "end",
            aliases: &["stop", "e"],
            kind: CommandKind::End,
            visibility: Public,
            tier: Tier::Operator,
            access: Exclusive,
            min_args: 0,
            emoji: "🛑",
            example: "end",
            short_help: text::END_SHORT,
            long_help: text::END_LONG,
            arguments: text::END_ARGS,
            handler: Box::new(EndHandler),
        },
        CommandEntry {
            name: "pause",
            aliases: &["unpause", "p"],
            kind: CommandKind::Pause,
            visibility: Public,
            tier: Tier::Operator,
            access: Exclusive,
            min_args: 0,
            emoji: "⏸",
            example: "pause",
            short_help: text::PAUSE_SHORT,
            long_help: text::PAUSE_LONG,
            arguments: text::PAUSE_ARGS,
            handler: Box::new(PauseHandler),
        },
        CommandEntry {
            name: "refresh",
            aliases: &["reload", "ref", "rel", "r"],
            kind: CommandKind::Refresh,
            visibility: Public,
            tier: Tier::Operator,
            access: Exclusive,
            min_args: 0,
            emoji: "♻",
            example: "refresh",
            short_help: text::REFRESH_SHORT,
            long_help: text::REFRESH_LONG,
            arguments: text::REFRESH_ARGS,
            handler: Box::new(RefreshHandler),
        },
        CommandEntry {
            name: "link",
            aliases: &["l"],
            kind: CommandKind::Link,
            visibility: Public,
            tier: Tier::Operator,
            access: Exclusive,
            min_args: 2,
            emoji: "🔗",
            example: "link @Soup red",
            short_help: text::LINK_SHORT,
            long_help: text::LINK_LONG,
            arguments: text::LINK_ARGS,
            handler: Box::new(LinkHandler),
        },
        CommandEntry {
            name: "unlink",
            aliases: &["un", "ul", "u"],
            kind: CommandKind::Unlink,
            visibility: Public,
            tier: Tier::Operator,
            access: Exclusive,
            min_args: 1,
            emoji: "🚷",
            example: "unlink @Soup",
            short_help: text::UNLINK_SHORT,
            long_help: text::UNLINK_LONG,
            arguments: text::UNLINK_ARGS,
            handler: Box::new(UnlinkHandler),
        },
        CommandEntry {
            name: "unmuteall",
            aliases: &["unmute", "ua"],
            kind: CommandKind::UnmuteAll,
            visibility: Public,
            tier: Tier::Operator,
            access: Shared,
            min_args: 0,
            emoji: "🔊",
            example: "unmuteall",
            short_help: text::UNMUTEALL_SHORT,
            long_help: text::UNMUTEALL_LONG,
            arguments: text::UNMUTEALL_ARGS,
            handler: Box::new(UnmuteAllHandler),
        },
        CommandEntry {
            name: "force",
            aliases: &["f"],
            kind: CommandKind::Force,
            visibility: Secret,
            tier: Tier::Operator,
            access: Shared,
            min_args: 0,
            emoji: "📢",
            example: "force task",
            short_help: text::FORCE_SHORT,
            long_help: text::FORCE_LONG,
            arguments: text::FORCE_ARGS,
            handler: Box::new(ForceHandler),
        },
        CommandEntry {
            name: "map",
            aliases: &[],
            kind: CommandKind::Map,
            visibility: Public,
            tier: Tier::None,
            access: Shared,
            min_args: 0,
            emoji: "🗺",
            example: "map skeld",
            short_help: text::MAP_SHORT,
            long_help: text::MAP_LONG,
            arguments: text::MAP_ARGS,
            handler: Box::new(MapHandler),
        },
        CommandEntry {
            name: "cache",
            aliases: &["c"],
            kind: CommandKind::Cache,
            visibility: Public,
            tier: Tier::Operator,
            access: Shared,
            min_args: 0,
            emoji: "📖",
            example: "cache @Soup",
            short_help: text::CACHE_SHORT,
            long_help: text::CACHE_LONG,
            arguments: text::CACHE_ARGS,
            handler: Box::new(CacheHandler),
        },
        CommandEntry {
            name: "privacy",
            aliases: &["private", "priv", "gdpr"],
            kind: CommandKind::Privacy,
            visibility: Public,
            tier: Tier::None,
            access: Shared,
            min_args: 0,
            emoji: "🔍",
            example: "privacy showme",
            short_help: text::PRIVACY_SHORT,
            long_help: text::PRIVACY_LONG,
            arguments: text::PRIVACY_ARGS,
            handler: Box::new(PrivacyHandler),
        },
        CommandEntry {
            name: "settings",
            aliases: &["sett", "set", "s"],
            kind: CommandKind::Settings,
            visibility: Public,
            tier: Tier::Admin,
            access: Shared,
            min_args: 0,
            emoji: "🛠",
            example: "settings commandPrefix !",
            short_help: text::SETTINGS_SHORT,
            long_help: text::SETTINGS_LONG,
            arguments: text::SETTINGS_ARGS,
            handler: Box::new(SettingsHandler),
        },
        CommandEntry {
            name: "workerbot",
            aliases: &["add", "invite", "worker", "w"],
            kind: CommandKind::WorkerBot,
            visibility: Public,
            tier: Tier::None,
            access: Shared,
            min_args: 0,
            emoji: "🤖",
            example: "workerbot",
            short_help: text::WORKERBOT_SHORT,
            long_help: text::WORKERBOT_LONG,
            arguments: text::WORKERBOT_ARGS,
            handler: Box::new(WorkerBotHandler),
        },
        CommandEntry {
            name: "stats",
            aliases: &["stat", "st"],
            kind: CommandKind::Stats,
            visibility: Public,
            tier: Tier::None,
            access: Shared,
            min_args: 0,
            emoji: "📊",
            example: "stats @Soup",
            short_help: text::STATS_SHORT,
            long_help: text::STATS_LONG,
            arguments: text::STATS_ARGS,
            handler: Box::new(StatsHandler),
        },
        CommandEntry {
            name: "info",
            aliases: &["inf", "in", "i"],
            kind: CommandKind::Info,
            visibility: Public,
            tier: Tier::None,
            access: Shared,
            min_args: 0,
            emoji: "📰",
            example: "info",
            short_help: text::INFO_SHORT,
            long_help: text::INFO_LONG,
            arguments: text::INFO_ARGS,
            handler: Box::new(InfoHandler),
        },
        CommandEntry {
            name: "ascii",
            aliases: &["asc"],
            kind: CommandKind::Ascii,
            visibility: Secret,
            tier: Tier::None,
            access: Shared,
            min_args: 0,
            emoji: "",
            example: "ascii @Soup t 10",
            short_help: text::ASCII_SHORT,
            long_help: text::ASCII_LONG,
            arguments: text::ASCII_ARGS,
            handler: Box::new(AsciiHandler),
        },
        CommandEntry {
            name: "debugstate",
            aliases: &["debug", "ds", "state"],
            kind: CommandKind::DebugState,
            visibility: Secret,
            tier: Tier::Operator,
            access: Shared,
            min_args: 0,
            emoji: "",
            example: "debugstate",
            short_help: text::DEBUGSTATE_SHORT,
            long_help: text::DEBUGSTATE_LONG,
            arguments: text::DEBUGSTATE_ARGS,
            handler: Box::new(DebugStateHandler),
        },
    ]
}
