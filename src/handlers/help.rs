//! HELP command handler.

use super::core::{CommandHandler, DispatchContext};
use crate::error::BotResult;
use crate::i18n::messages;
use crate::response::{COLOR_GREEN, Card, Reply};
use async_trait::async_trait;

/// Handler for `help [command]`.
///
/// Without an argument, lists every public command the caller may use. With
/// one, shows that command's detail card.
pub struct HelpHandler;

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let bot = ctx.bot;

        if let Some(topic) = ctx.arg(0) {
            return Ok(match bot.commands().resolve(topic) {
                Some(entry) => {
                    Reply::card(entry.card(bot.localizer(), ctx.language(), ctx.prefix()))
                }
                None => Reply::text(ctx.localize(&messages::HELP_NOT_FOUND)),
            });
        }

        let title = ctx.localize_with(
            &messages::HELP_TITLE,
            &[("Bot", bot.config().bot.name.as_str())],
        );
        let mut card = Card::new(title, ctx.localize(&messages::HELP_DESCRIPTION), COLOR_GREEN);
        for entry in bot
            .commands()
            .entries()
            .filter(|e| !e.is_secret() && ctx.clearance.permits(e.tier))
        {
            card = card.field(
                format!("{} {}", entry.emoji, entry.name).trim().to_string(),
                ctx.localize(&entry.short_help),
                true,
            );
        }
        Ok(Reply::card(card))
    }
}
