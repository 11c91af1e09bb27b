//! Message keys and their default English text.
//!
//! Keys are stable; translations live in `locales/<lang>.toml`.

use super::Msg;

// ============================================================================
// Errors
// ============================================================================

pub const COMMAND_NOT_FOUND: Msg = Msg::new(
    "error.command_not_found",
    "I didn't recognize that command! View `{{.CommandPrefix}} help` for all available commands!",
);
pub const SETTING_NOT_FOUND: Msg = Msg::new(
    "error.setting_not_found",
    "Sorry, `{{.Token}}` is not a valid setting! Type `{{.CommandPrefix}} settings` to see them all.",
);
pub const MAP_NOT_FOUND: Msg = Msg::new("error.map_not_found", "I don't have a map by that name!");
pub const USER_NOT_FOUND: Msg = Msg::new(
    "error.user_not_found",
    "I couldn't find a user by that name or ID!",
);
pub const MATCH_NOT_FOUND: Msg = Msg::new(
    "error.match_not_found",
    "I didn't recognize that user, you mistyped 'guild', or didn't provide a valid Match ID",
);
pub const PERMISSION_DENIED: Msg = Msg::new(
    "error.permission_denied",
    "You don't have permission to do that! It requires {{.Tier}} access.",
);
pub const LOCK_UNAVAILABLE: Msg = Msg::new("error.lock_unavailable", "Could not obtain lock");
pub const EXTERNAL_FAILURE: Msg = Msg::new(
    "error.external",
    "Encountered the following error: {{.Error}}",
);
pub const INTERNAL_FAILURE: Msg = Msg::new(
    "error.internal",
    "Something went wrong on my end. Please try again.",
);
pub const NO_GAME: Msg = Msg::new(
    "error.no_game",
    "There is no game in this channel! Type `{{.CommandPrefix}} new` to start one.",
);

// ============================================================================
// Cards
// ============================================================================

pub const FIELD_CURRENT_VALUE: Msg = Msg::new("card.current_value", "Current Value");
pub const FIELD_EXAMPLE: Msg = Msg::new("card.example", "Example");
pub const FIELD_ARGUMENTS: Msg = Msg::new("card.arguments", "Arguments");
pub const FIELD_ALIASES: Msg = Msg::new("card.aliases", "Aliases");
pub const NONE: Msg = Msg::new("card.none", "None");

// ============================================================================
// Commands
// ============================================================================

pub mod command {
    use super::Msg;

    pub const HELP_SHORT: Msg = Msg::new("command.help.short", "Display help");
    pub const HELP_LONG: Msg = Msg::new(
        "command.help.long",
        "Display bot help message, or see info about a command",
    );
    pub const HELP_ARGS: Msg = Msg::new(
        "command.help.args",
        "None, or optional command to see info for",
    );

    pub const NEW_SHORT: Msg = Msg::new("command.new.short", "Start a new game");
    pub const NEW_LONG: Msg = Msg::new("command.new.long", "Start a new game");
    pub const NEW_ARGS: Msg = Msg::new("command.new.args", "None");

    pub const END_SHORT: Msg = Msg::new("command.end.short", "End the game");
    pub const END_LONG: Msg = Msg::new("command.end.long", "End the current game");
    pub const END_ARGS: Msg = Msg::new("command.end.args", "None");

    pub const PAUSE_SHORT: Msg = Msg::new("command.pause.short", "Pause the bot");
    pub const PAUSE_LONG: Msg = Msg::new(
        "command.pause.long",
        "Pause the bot so it doesn't automute/deafen. Will unmute/undeafen all players!",
    );
    pub const PAUSE_ARGS: Msg = Msg::new("command.pause.args", "None");

    pub const REFRESH_SHORT: Msg = Msg::new("command.refresh.short", "Refresh the bot status");
    pub const REFRESH_LONG: Msg = Msg::new(
        "command.refresh.long",
        "Recreate the bot status message if it ends up too far in the chat",
    );
    pub const REFRESH_ARGS: Msg = Msg::new("command.refresh.args", "None");

    pub const LINK_SHORT: Msg = Msg::new("command.link.short", "Link a Discord User");
    pub const LINK_LONG: Msg = Msg::new(
        "command.link.long",
        "Manually link a Discord User to their in-game color or name",
    );
    pub const LINK_ARGS: Msg = Msg::new(
        "command.link.args",
        "<discord User> <in-game color or name>",
    );

    pub const UNLINK_SHORT: Msg = Msg::new("command.unlink.short", "Unlink a Discord User");
    pub const UNLINK_LONG: Msg = Msg::new(
        "command.unlink.long",
        "Manually unlink a Discord User from their in-game player",
    );
    pub const UNLINK_ARGS: Msg = Msg::new("command.unlink.args", "<discord User>");

    pub const UNMUTEALL_SHORT: Msg =
        Msg::new("command.unmuteall.short", "Force the bot to unmute all");
    pub const UNMUTEALL_LONG: Msg = Msg::new(
        "command.unmuteall.long",
        "Force the bot to unmute all linked players",
    );
    pub const UNMUTEALL_ARGS: Msg = Msg::new("command.unmuteall.args", "None");

    pub const FORCE_SHORT: Msg = Msg::new("command.force.short", "Force the bot to transition");
    pub const FORCE_LONG: Msg = Msg::new(
        "command.force.long",
        "Force the bot to transition to another game stage, if it doesn't transition properly",
    );
    pub const FORCE_ARGS: Msg = Msg::new(
        "command.force.args",
        "<phase name> (task, discuss, or lobby / t, d, or l)",
    );

    pub const MAP_SHORT: Msg = Msg::new("command.map.short", "Display an in-game map");
    pub const MAP_LONG: Msg = Msg::new(
        "command.map.long",
        "Display an image of an in-game map in the text channel. Two supported versions: simple or detailed",
    );
    pub const MAP_ARGS: Msg = Msg::new(
        "command.map.args",
        "<map_name> (skeld, mira_hq, polus, airship) <version> (optional, simple or detailed)",
    );

    pub const CACHE_SHORT: Msg = Msg::new("command.cache.short", "View cached usernames");
    pub const CACHE_LONG: Msg = Msg::new(
        "command.cache.long",
        "View a player's cached in-game names, and/or clear them",
    );
    pub const CACHE_ARGS: Msg = Msg::new("command.cache.args", "<player> (optionally, \"clear\")");

    pub const PRIVACY_SHORT: Msg = Msg::new("command.privacy.short", "View privacy information");
    pub const PRIVACY_LONG: Msg = Msg::new(
        "command.privacy.long",
        "Privacy and data collection details. See what is stored about you, or opt in/out of stats collection",
    );
    pub const PRIVACY_ARGS: Msg = Msg::new("command.privacy.args", "showme, optin, or optout");

    pub const SETTINGS_SHORT: Msg = Msg::new("command.settings.short", "Adjust bot settings");
    pub const SETTINGS_LONG: Msg = Msg::new(
        "command.settings.long",
        "Adjust the bot settings. Type `{{.CommandPrefix}} settings` with no arguments to see more.",
    );
    pub const SETTINGS_ARGS: Msg = Msg::new("command.settings.args", "<setting> <value>");

    pub const WORKERBOT_SHORT: Msg = Msg::new("command.workerbot.short", "Invite worker bots");
    pub const WORKERBOT_LONG: Msg = Msg::new(
        "command.workerbot.long",
        "Invite worker bots to speed up bot work",
    );
    pub const WORKERBOT_ARGS: Msg = Msg::new("command.workerbot.args", "None");

    pub const STATS_SHORT: Msg = Msg::new("command.stats.short", "View Player and Guild stats");
    pub const STATS_LONG: Msg = Msg::new(
        "command.stats.long",
        "View Player, Guild or Match stats. Admins can reset stats with `reset`",
    );
    pub const STATS_ARGS: Msg = Msg::new(
        "command.stats.args",
        "<@discord user>, \"guild\", or a Match ID (optionally, \"reset\")",
    );

    pub const INFO_SHORT: Msg = Msg::new("command.info.short", "View Bot info");
    pub const INFO_LONG: Msg = Msg::new(
        "command.info.long",
        "View info about the bot, like total guild number, active games, etc",
    );
    pub const INFO_ARGS: Msg = Msg::new("command.info.args", "None");

    pub const ASCII_SHORT: Msg = Msg::new("command.ascii.short", "Print an ASCII crewmate");
    pub const ASCII_LONG: Msg = Msg::new("command.ascii.long", "Print an ASCII crewmate");
    pub const ASCII_ARGS: Msg = Msg::new(
        "command.ascii.args",
        "<@discord user> <is impostor> (true|false) <x impostor remains> (count)",
    );

    pub const DEBUGSTATE_SHORT: Msg = Msg::new(
        "command.debugstate.short",
        "View the full state of the game session",
    );
    pub const DEBUGSTATE_LONG: Msg = Msg::new(
        "command.debugstate.long",
        "View the full state of the game session in this channel",
    );
    pub const DEBUGSTATE_ARGS: Msg = Msg::new("command.debugstate.args", "None");
}

// ============================================================================
// Command replies
// ============================================================================

pub const HELP_TITLE: Msg = Msg::new("help.title", "{{.Bot}} Bot Commands:");
pub const HELP_DESCRIPTION: Msg = Msg::new(
    "help.description",
    "Type `{{.CommandPrefix}} help <command>` to see more details on a command!",
);
pub const HELP_NOT_FOUND: Msg = Msg::new(
    "help.not_found",
    "I didn't recognize that command! View `{{.CommandPrefix}} help` for all available commands!",
);

pub const NEW_GAME_TITLE: Msg = Msg::new("new.title", "Lobby Created");
pub const NEW_GAME_DESCRIPTION: Msg = Msg::new(
    "new.description",
    "A new game was started in this channel. Connect your capture client with the code below.",
);
pub const NEW_GAME_CODE: Msg = Msg::new("new.connect_code", "Connect Code");

pub const CACHE_EMPTY: Msg = Msg::new(
    "cache.empty",
    "I don't have any cached player names stored for that user!",
);
pub const CACHE_NAMES: Msg = Msg::new("cache.names", "Cached in-game names:");
pub const CACHE_CLEARED: Msg = Msg::new(
    "cache.cleared",
    "Successfully deleted all cached names for that user!",
);

pub const PRIVACY_SHOWME_TITLE: Msg = Msg::new("privacy.showme.title", "Your Data");
pub const PRIVACY_SHOWME_NAMES: Msg = Msg::new("privacy.showme.names", "Cached in-game names");
pub const PRIVACY_SHOWME_OPTED_OUT: Msg =
    Msg::new("privacy.showme.opted_out", "Opted out of stats");
pub const PRIVACY_OPTED_OUT: Msg = Msg::new(
    "privacy.opted_out",
    "You are now opted out of data collection. I deleted {{.Count}} cached names.",
);
pub const PRIVACY_ALREADY_OPTED_OUT: Msg = Msg::new(
    "privacy.already_opted_out",
    "You are already opted out of data collection.",
);
pub const PRIVACY_OPTED_IN: Msg = Msg::new(
    "privacy.opted_in",
    "You are now opted in to data collection.",
);
pub const PRIVACY_ALREADY_OPTED_IN: Msg = Msg::new(
    "privacy.already_opted_in",
    "You are already opted in to data collection.",
);

pub const WORKER_TITLE: Msg = Msg::new("workerbot.title", "Worker Bots");
pub const WORKER_DESCRIPTION: Msg = Msg::new(
    "workerbot.description",
    "Invite worker bots to speed up muting and deafening in large games: {{.URL}}",
);
pub const WORKER_UNCONFIGURED: Msg = Msg::new(
    "workerbot.unconfigured",
    "This bot has no worker bots available to invite.",
);

pub const INFO_TITLE: Msg = Msg::new("info.title", "{{.Bot}} Info");
pub const INFO_VERSION: Msg = Msg::new("info.version", "Version");
pub const INFO_GUILDS: Msg = Msg::new("info.guilds", "Total Guilds");
pub const INFO_ACTIVE_GAMES: Msg = Msg::new("info.active_games", "Active Games");
pub const INFO_UPTIME: Msg = Msg::new("info.uptime", "Uptime");
pub const INFO_LANGUAGE: Msg = Msg::new("info.language", "Language");

pub const ASCII_WAS_IMPOSTOR: Msg = Msg::new("ascii.was_impostor", "{{.User}} was The Impostor.");
pub const ASCII_WAS_NOT_IMPOSTOR: Msg = Msg::new(
    "ascii.was_not_impostor",
    "{{.User}} was not The Impostor.",
);
pub const ASCII_REMAINING: Msg = Msg::new("ascii.remaining", "{{.Count}} Impostor(s) remain.");

pub const DEBUG_NO_STATE: Msg = Msg::new(
    "debugstate.empty",
    "There is no game state stored for this channel.",
);

// ============================================================================
// Stats
// ============================================================================

pub const STATS_USER_TITLE: Msg = Msg::new("stats.user.title", "Player Stats");
pub const STATS_GUILD_TITLE: Msg = Msg::new("stats.guild.title", "Guild Stats");
pub const STATS_MATCH_TITLE: Msg = Msg::new("stats.match.title", "Match {{.MatchID}}");
pub const STATS_GAMES: Msg = Msg::new("stats.games", "Games Played");
pub const STATS_WINS: Msg = Msg::new("stats.wins", "Wins");
pub const STATS_LOSSES: Msg = Msg::new("stats.losses", "Losses");
pub const STATS_CREWMATE_GAMES: Msg = Msg::new("stats.crewmate_games", "Crewmate Games");
pub const STATS_IMPOSTOR_GAMES: Msg = Msg::new("stats.impostor_games", "Impostor Games");
pub const STATS_CREWMATE_WINS: Msg = Msg::new("stats.crewmate_wins", "Crewmate Wins");
pub const STATS_IMPOSTOR_WINS: Msg = Msg::new("stats.impostor_wins", "Impostor Wins");
pub const STATS_PLAYERS: Msg = Msg::new("stats.players", "Players");
pub const STATS_WINNER: Msg = Msg::new("stats.winner", "Winner");
pub const STATS_STARTED: Msg = Msg::new("stats.started", "Started");
pub const STATS_DURATION: Msg = Msg::new("stats.duration", "Duration");
pub const STATS_PREMIUM_HINT: Msg = Msg::new(
    "stats.premium_hint",
    "Premium guilds get the full stats breakdown",
);
pub const STATS_RESET_GUILD_PROMPT: Msg = Msg::new(
    "stats.reset.guild.prompt",
    "Please type `{{.CommandPrefix}} stats guild reset confirm` if you are 100% certain that you wish to **completely reset** your guild's stats!",
);
pub const STATS_RESET_GUILD_DONE: Msg = Msg::new(
    "stats.reset.guild.done",
    "Successfully reset your guild's stats!",
);
pub const STATS_RESET_USER_PROMPT: Msg = Msg::new(
    "stats.reset.user.prompt",
    "Please type `{{.CommandPrefix}} stats {{.User}} reset confirm` if you are 100% certain that you wish to **completely reset** that user's stats!",
);
pub const STATS_RESET_USER_DONE: Msg = Msg::new(
    "stats.reset.user.done",
    "Successfully reset {{.User}}'s stats!",
);

// ============================================================================
// Settings
// ============================================================================

pub const SETTINGS_LIST_TITLE: Msg = Msg::new("settings.list.title", "Settings");
pub const SETTINGS_LIST_DESCRIPTION: Msg = Msg::new(
    "settings.list.description",
    "Type `{{.CommandPrefix}} settings <setting>` to view or change a setting from those listed below. 💎 settings require premium.",
);
pub const SETTINGS_SHOW_TITLE: Msg = Msg::new("settings.show.title", "Current Settings");
pub const SETTING_CARD_DESCRIPTION: Msg = Msg::new(
    "settings.card.description",
    "Type `{{.CommandPrefix}} settings {{.Setting}}` to change this setting.\n\n",
);
pub const SETTING_UPDATED: Msg = Msg::new(
    "settings.updated",
    "Setting `{{.Setting}}` is now `{{.Value}}`",
);
pub const PREMIUM_REQUIRED: Msg = Msg::new(
    "settings.premium_required",
    "Sorry, `{{.Setting}}` is a 💎 premium setting! Your guild needs premium to change it.",
);
pub const SETTINGS_RESET_PROMPT: Msg = Msg::new(
    "settings.reset.prompt",
    "Please type `{{.CommandPrefix}} settings reset confirm` if you are 100% certain that you wish to reset **all** settings to their defaults!",
);
pub const SETTINGS_RESET_DONE: Msg = Msg::new(
    "settings.reset.done",
    "Successfully reset all settings to their defaults!",
);
pub const PREFIX_INVALID: Msg = Msg::new(
    "settings.prefix.invalid",
    "Sorry, `{{.Value}}` is not a valid prefix. Use 1 to 10 characters without spaces.",
);
pub const LANGUAGE_UNKNOWN: Msg = Msg::new(
    "settings.language.unknown",
    "Sorry, `{{.Value}}` is not a loaded language. Available: {{.Languages}}",
);
pub const LANGUAGE_RELOADED: Msg = Msg::new(
    "settings.language.reloaded",
    "Reloaded {{.Count}} language catalogs.",
);
pub const MENTIONS_INVALID: Msg = Msg::new(
    "settings.mentions.invalid",
    "Sorry, I couldn't read `{{.Value}}` as a mention or ID.",
);
pub const BOOL_INVALID: Msg = Msg::new(
    "settings.bool.invalid",
    "Sorry, `{{.Value}}` is neither true nor false.",
);
pub const NUMBER_INVALID: Msg = Msg::new(
    "settings.number.invalid",
    "Sorry, `{{.Value}}` must be a whole number from {{.Min}} to {{.Max}}.",
);
pub const CHOICE_INVALID: Msg = Msg::new(
    "settings.choice.invalid",
    "Sorry, `{{.Value}}` is not one of: {{.Choices}}",
);
pub const CHANNEL_INVALID: Msg = Msg::new(
    "settings.channel.invalid",
    "Sorry, `{{.Value}}` is not a text channel mention or ID.",
);
pub const PHASE_INVALID: Msg = Msg::new(
    "settings.phase.invalid",
    "Sorry, `{{.Value}}` is not a game phase. Use lobby, tasks or discussion.",
);
pub const DELAYS_USAGE: Msg = Msg::new(
    "settings.delays.usage",
    "Usage: `{{.CommandPrefix}} settings delays <start phase> <end phase> <seconds>`",
);
pub const VOICE_RULES_USAGE: Msg = Msg::new(
    "settings.voice_rules.usage",
    "Usage: `{{.CommandPrefix}} settings voiceRules <mute/deaf> <game phase> <dead/alive> <true/false>`",
);

pub mod setting {
    use super::Msg;

    pub const PREFIX_SHORT: Msg = Msg::new("setting.prefix.short", "Bot Prefix");
    pub const PREFIX_LONG: Msg = Msg::new(
        "setting.prefix.long",
        "Change the prefix that the bot uses to detect commands",
    );
    pub const PREFIX_ARGS: Msg = Msg::new("setting.prefix.args", "<prefix>");

    pub const LANGUAGE_SHORT: Msg = Msg::new("setting.language.short", "Bot Language");
    pub const LANGUAGE_LONG: Msg =
        Msg::new("setting.language.long", "Change the bot messages language");
    pub const LANGUAGE_ARGS: Msg = Msg::new("setting.language.args", "<language> or reload");

    pub const ADMINS_SHORT: Msg = Msg::new("setting.admins.short", "Bot Admins");
    pub const ADMINS_LONG: Msg = Msg::new(
        "setting.admins.long",
        "Specify which individual users have admin bot permissions",
    );
    pub const ADMINS_ARGS: Msg = Msg::new("setting.admins.args", "<User @ mentions>... or clear");

    pub const OPERATORS_SHORT: Msg = Msg::new("setting.operators.short", "Bot Operators");
    pub const OPERATORS_LONG: Msg = Msg::new(
        "setting.operators.long",
        "Specify which roles have permissions to invoke the bot",
    );
    pub const OPERATORS_ARGS: Msg =
        Msg::new("setting.operators.args", "<role @ mentions>... or clear");

    pub const UNMUTE_DEAD_SHORT: Msg = Msg::new("setting.unmute_dead.short", "Bot Unmutes Deaths");
    pub const UNMUTE_DEAD_LONG: Msg = Msg::new(
        "setting.unmute_dead.long",
        "Specify if the bot should immediately unmute players when they die. **CAUTION. Leaks information!**",
    );
    pub const UNMUTE_DEAD_ARGS: Msg = Msg::new("setting.unmute_dead.args", "<true/false>");

    pub const DELAYS_SHORT: Msg = Msg::new("setting.delays.short", "Delays Between Stages");
    pub const DELAYS_LONG: Msg = Msg::new(
        "setting.delays.long",
        "Specify the delays for automute/deafen between stages of the game, like lobby->tasks",
    );
    pub const DELAYS_ARGS: Msg =
        Msg::new("setting.delays.args", "<start phase> <end phase> <delay>");

    pub const VOICE_RULES_SHORT: Msg = Msg::new("setting.voice_rules.short", "Mute/deafen Rules");
    pub const VOICE_RULES_LONG: Msg = Msg::new(
        "setting.voice_rules.long",
        "Specify mute/deafen rules for the game, depending on the stage and the alive/deadness of players. Example given would mute dead players during the tasks stage",
    );
    pub const VOICE_RULES_ARGS: Msg = Msg::new(
        "setting.voice_rules.args",
        "<mute/deaf> <game phase> <dead/alive> <true/false>",
    );

    pub const MAP_VERSION_SHORT: Msg = Msg::new("setting.map_version.short", "Map version");
    pub const MAP_VERSION_LONG: Msg = Msg::new(
        "setting.map_version.long",
        "Specify the default map version (simple, detailed) used by 'map' command",
    );
    pub const MAP_VERSION_ARGS: Msg = Msg::new("setting.map_version.args", "<version>");

    pub const MATCH_SUMMARY_SHORT: Msg =
        Msg::new("setting.match_summary.short", "Match Summary Message");
    pub const MATCH_SUMMARY_LONG: Msg = Msg::new(
        "setting.match_summary.long",
        "Specify minutes before the match summary message is deleted. 0 for instant deletion, -1 for never delete",
    );
    pub const MATCH_SUMMARY_ARGS: Msg = Msg::new("setting.match_summary.args", "<minutes>");

    pub const MATCH_SUMMARY_CHANNEL_SHORT: Msg = Msg::new(
        "setting.match_summary_channel.short",
        "Channel for Match Summaries",
    );
    pub const MATCH_SUMMARY_CHANNEL_LONG: Msg = Msg::new(
        "setting.match_summary_channel.long",
        "Specify the text channel where Match Summaries should be posted. Use `#general`, for example",
    );
    pub const MATCH_SUMMARY_CHANNEL_ARGS: Msg = Msg::new(
        "setting.match_summary_channel.args",
        "<text channel mention>",
    );

    pub const AUTO_REFRESH_SHORT: Msg =
        Msg::new("setting.auto_refresh.short", "Autorefresh Status Message");
    pub const AUTO_REFRESH_LONG: Msg = Msg::new(
        "setting.auto_refresh.long",
        "Specify if the bot should auto-refresh the status message after a match ends",
    );
    pub const AUTO_REFRESH_ARGS: Msg = Msg::new("setting.auto_refresh.args", "<true/false>");

    pub const LEADERBOARD_MENTION_SHORT: Msg = Msg::new(
        "setting.leaderboard_mention.short",
        "Player Leaderboard Mention Format",
    );
    pub const LEADERBOARD_MENTION_LONG: Msg = Msg::new(
        "setting.leaderboard_mention.long",
        "If players should be mentioned with @ on the leaderboard.\n**Disable this for large servers!**",
    );
    pub const LEADERBOARD_MENTION_ARGS: Msg =
        Msg::new("setting.leaderboard_mention.args", "<true/false>");

    pub const LEADERBOARD_SIZE_SHORT: Msg =
        Msg::new("setting.leaderboard_size.short", "Player Leaderboard Size");
    pub const LEADERBOARD_SIZE_LONG: Msg = Msg::new(
        "setting.leaderboard_size.long",
        "Specify the size of the player leaderboard",
    );
    pub const LEADERBOARD_SIZE_ARGS: Msg = Msg::new("setting.leaderboard_size.args", "<number>");

    pub const LEADERBOARD_MIN_SHORT: Msg = Msg::new(
        "setting.leaderboard_min.short",
        "Minimum Games for Leaderboard",
    );
    pub const LEADERBOARD_MIN_LONG: Msg = Msg::new(
        "setting.leaderboard_min.long",
        "Minimum amount of games before a player is displayed on the leaderboard",
    );
    pub const LEADERBOARD_MIN_ARGS: Msg = Msg::new("setting.leaderboard_min.args", "<number>");

    pub const MUTE_SPECTATORS_SHORT: Msg = Msg::new(
        "setting.mute_spectators.short",
        "Mute Spectators like Dead Players",
    );
    pub const MUTE_SPECTATORS_LONG: Msg = Msg::new(
        "setting.mute_spectators.long",
        "Whether or not the bot should treat spectators like dead players (respecting your voice rules)",
    );
    pub const MUTE_SPECTATORS_ARGS: Msg = Msg::new("setting.mute_spectators.args", "<true/false>");

    pub const ROOM_CODE_SHORT: Msg =
        Msg::new("setting.room_code.short", "Visibility for the ROOM CODE");
    pub const ROOM_CODE_LONG: Msg = Msg::new(
        "setting.room_code.long",
        "Specify the visibility (always, spoiler, never) for the ROOM CODE in the message",
    );
    pub const ROOM_CODE_ARGS: Msg = Msg::new("setting.room_code.args", "<always/spoiler/never>");

    pub const SHOW_SHORT: Msg = Msg::new("setting.show.short", "Show All Settings");
    pub const SHOW_LONG: Msg =
        Msg::new("setting.show.long", "Show all the Bot settings for this server");
    pub const SHOW_ARGS: Msg = Msg::new("setting.show.args", "None");

    pub const RESET_SHORT: Msg = Msg::new("setting.reset.short", "Reset Bot Settings");
    pub const RESET_LONG: Msg = Msg::new(
        "setting.reset.long",
        "Reset all bot settings to their default values",
    );
    pub const RESET_ARGS: Msg = Msg::new("setting.reset.args", "confirm");
}
