//! Per-dispatch context handed to command handlers.

use super::entry::CommandEntry;
use super::permission::Clearance;
use crate::bot::Bot;
use crate::gateway::InboundMessage;
use crate::i18n::{Msg, Notice};
use crate::response::Reply;
use crate::settings::GuildSettings;
use crate::state::{GameSessionKey, SessionLock};

/// Everything a handler needs for one inbound command.
pub struct DispatchContext<'a> {
    pub bot: &'a Bot,
    pub entry: &'a CommandEntry,
    pub message: &'a InboundMessage,
    pub key: GameSessionKey,
    /// Raw tokens. Token 0 is the command name as typed.
    pub tokens: Vec<String>,
    pub clearance: Clearance,
    pub settings: GuildSettings,
    /// Held for the whole handler call when the entry needs exclusive access.
    pub session: Option<SessionLock>,
}

impl<'a> DispatchContext<'a> {
    /// Arguments after the command token.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args().get(index).map(String::as_str)
    }

    pub fn prefix(&self) -> &str {
        &self.settings.command_prefix
    }

    pub fn language(&self) -> &str {
        &self.settings.language
    }

    pub fn guild_id(&self) -> &str {
        &self.message.guild_id
    }

    pub fn user_id(&self) -> &str {
        &self.message.author.user_id
    }

    /// Localize a message in the guild's language with `CommandPrefix` bound.
    pub fn localize(&self, msg: &Msg) -> String {
        self.localize_with(msg, &[])
    }

    pub fn localize_with(&self, msg: &Msg, args: &[(&str, &str)]) -> String {
        let mut all: Vec<(&str, &str)> = Vec::with_capacity(args.len() + 1);
        all.push(("CommandPrefix", self.prefix()));
        all.extend_from_slice(args);
        self.bot.localizer().localize(self.language(), msg, &all)
    }

    pub fn render(&self, notice: Notice) -> String {
        notice
            .arg("CommandPrefix", self.prefix())
            .render(self.bot.localizer(), self.language())
    }

    /// Reply with this command's own detail card.
    pub fn usage(&self) -> Reply {
        Reply::card(
            self.entry
                .card(self.bot.localizer(), self.language(), self.prefix()),
        )
    }
}
