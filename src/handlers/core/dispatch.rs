//! Inbound message → resolved command → reply → outbound units.

use super::args::tokenize;
use super::context::DispatchContext;
use super::entry::{CommandEntry, SessionAccess};
use super::permission::Clearance;
use crate::bot::Bot;
use crate::error::{BotError, BotResult, Lookup};
use crate::gateway::InboundMessage;
use crate::response::{Destination, OutboundUnit, Reply};
use crate::settings::GuildSettings;
use crate::state::GameSessionKey;
use crate::telemetry::CommandTimer;
use tracing::{Instrument, Level, debug, span, warn};

/// Strip `prefix` from the start of `content`, ASCII case-insensitively.
fn strip_prefix_ci<'c>(content: &'c str, prefix: &str) -> Option<&'c str> {
    if prefix.is_empty() || !content.is_char_boundary(prefix.len().min(content.len())) {
        return None;
    }
    let head = content.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &content[prefix.len()..])
}

impl Bot {
    /// Handle one inbound message end to end.
    ///
    /// Messages that don't start with the guild's prefix produce nothing. A
    /// bare prefix runs `help`. Every failure becomes a localized reply in the
    /// originating channel.
    pub async fn handle_message(&self, message: &InboundMessage) -> Vec<OutboundUnit> {
        let settings = self.load_settings(&message.guild_id).await;

        let Some(rest) = strip_prefix_ci(message.content.trim_start(), &settings.command_prefix)
        else {
            return Vec::new();
        };
        let mut tokens = tokenize(rest);
        if tokens.is_empty() {
            tokens.push("help".to_string());
        }

        let reply = match self.commands().resolve(&tokens[0]) {
            Some(entry) => self.run(entry, message, tokens, settings.clone()).await,
            None => {
                crate::metrics::record_command_error("unknown", "not_found");
                Err(BotError::not_found(Lookup::Command, tokens[0].as_str()))
            }
        };

        let reply = reply.unwrap_or_else(|e| {
            Reply::here(e.to_reply(
                self.localizer(),
                &settings.language,
                &settings.command_prefix,
            ))
        });

        let channel = match &reply.destination {
            Destination::Origin => message.channel_id.as_str(),
            Destination::Channel(id) => id.as_str(),
        };
        self.formatter().format(channel, reply.payload)
    }

    async fn load_settings(&self, guild_id: &str) -> GuildSettings {
        match self.services().settings.load(guild_id).await {
            Ok(s) => s,
            Err(e) => {
                warn!(guild = %guild_id, error = %e, "Settings unavailable, using defaults");
                self.default_settings()
            }
        }
    }

    /// Authorize, instrument and dispatch a resolved command.
    async fn run(
        &self,
        entry: &CommandEntry,
        message: &InboundMessage,
        tokens: Vec<String>,
        settings: GuildSettings,
    ) -> BotResult<Reply> {
        let clearance = Clearance::compute(
            message.author.is_guild_admin,
            &message.author.user_id,
            &message.author.role_ids,
            &settings.admin_user_ids,
            &settings.operator_roles,
        );

        let cmd_span = span!(
            Level::DEBUG,
            "bot.command",
            command = entry.name,
            guild = %message.guild_id,
            channel = %message.channel_id,
            user = %message.author.user_id,
        );

        let _timer = CommandTimer::new(entry.name);

        let result = async {
            if !clearance.permits(entry.tier) {
                return Err(BotError::PermissionDenied {
                    required: entry.tier,
                });
            }
            let ctx = DispatchContext {
                bot: self,
                entry,
                message,
                key: GameSessionKey::new(&message.guild_id, &message.channel_id),
                tokens,
                clearance,
                settings,
                session: None,
            };
            self.dispatch(ctx).await
        }
        .instrument(cmd_span)
        .await;

        if let Err(ref e) = result {
            crate::metrics::record_command_error(entry.name, e.error_code());
            debug!(command = entry.name, error = %e, "Command error");
        }
        result
    }

    /// Invoke an entry's handler.
    ///
    /// Short argument lists get the usage card without touching the session.
    /// Entries with exclusive session access then take the session lock and
    /// fail fast with [`BotError::LockUnavailable`] if it is held. The lock
    /// lives in the context and is released when the context drops, on every
    /// exit path.
    pub async fn dispatch(&self, mut ctx: DispatchContext<'_>) -> BotResult<Reply> {
        if ctx.args().len() < ctx.entry.min_args {
            return Ok(ctx.usage());
        }
        if ctx.entry.access == SessionAccess::Exclusive {
            ctx.session = Some(self.locks().try_acquire(&ctx.key)?);
        }
        ctx.entry.handler.handle(&mut ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_ci() {
        assert_eq!(strip_prefix_ci(".au help", ".au"), Some(" help"));
        assert_eq!(strip_prefix_ci(".AU help", ".au"), Some(" help"));
        assert_eq!(strip_prefix_ci("!help", "!"), Some("help"));
        assert_eq!(strip_prefix_ci(".a", ".au"), None);
        assert_eq!(strip_prefix_ci("hello", ".au"), None);
        assert_eq!(strip_prefix_ci("é", "ab"), None);
        assert_eq!(strip_prefix_ci("anything", ""), None);
    }
}
