//! Command entries and the handler trait.

use super::context::DispatchContext;
use super::permission::{Tier, Visibility};
use super::registry::RegistryEntry;
use crate::error::BotResult;
use crate::i18n::{Localizer, Msg, messages};
use crate::response::{COLOR_GOLD, Card, Reply};
use async_trait::async_trait;

/// Closed set of operations the bot knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    New,
    End,
    Pause,
    Refresh,
    Link,
    Unlink,
    UnmuteAll,
    Force,
    Map,
    Cache,
    Privacy,
    Settings,
    WorkerBot,
    Stats,
    Info,
    Ascii,
    DebugState,
}

/// How a command touches the channel's game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAccess {
    /// No session access, or read-only.
    Shared,
    /// Mutates the session; the dispatcher takes the [`crate::state::SessionLock`] first.
    Exclusive,
}

/// Handler for a single command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply>;
}

/// A registered command.
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: CommandKind,
    pub visibility: Visibility,
    pub tier: Tier,
    pub access: SessionAccess,
    /// Fewer arguments than this get the usage card before any lock is taken.
    pub min_args: usize,
    pub emoji: &'static str,
    /// Usage without the prefix, e.g. `link @Soup red`.
    pub example: &'static str,
    pub short_help: Msg,
    pub long_help: Msg,
    pub arguments: Msg,
    pub handler: Box<dyn CommandHandler>,
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("tier", &self.tier)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

impl RegistryEntry for CommandEntry {
    fn name(&self) -> &str {
        self.name
    }

    fn aliases(&self) -> &[&'static str] {
        self.aliases
    }
}

impl CommandEntry {
    pub fn is_secret(&self) -> bool {
        self.visibility == Visibility::Secret
    }

    /// Detail card: description, example, arguments and aliases.
    pub fn card(&self, localizer: &dyn Localizer, language: &str, prefix: &str) -> Card {
        let args = [("CommandPrefix", prefix)];
        let aliases = if self.aliases.is_empty() {
            localizer.localize(language, &messages::NONE, &[])
        } else {
            self.aliases.join(", ")
        };
        Card::new(
            format!("{} {}", self.emoji, self.name).trim().to_string(),
            localizer.localize(language, &self.long_help, &args),
            COLOR_GOLD,
        )
        .field(
            localizer.localize(language, &messages::FIELD_EXAMPLE, &[]),
            format!("`{prefix} {}`", self.example),
            false,
        )
        .field(
            localizer.localize(language, &messages::FIELD_ARGUMENTS, &[]),
            format!("`{}`", localizer.localize(language, &self.arguments, &args)),
            false,
        )
        .field(
            localizer.localize(language, &messages::FIELD_ALIASES, &[]),
            aliases,
            false,
        )
    }
}
