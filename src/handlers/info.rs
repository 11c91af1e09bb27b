//! INFO command handler.

use super::core::{CommandHandler, DispatchContext};
use crate::error::BotResult;
use crate::i18n::messages;
use crate::response::{COLOR_GREEN, Card, Reply};
use async_trait::async_trait;
use std::time::Duration;

/// Handler for `info`: version, guild count, active games and uptime.
pub struct InfoHandler;

#[async_trait]
impl CommandHandler for InfoHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let bot = ctx.bot;
        let guilds = bot.services().settings.guild_count().await?;
        let games = bot.services().games.active_games().await?;

        let card = Card::new(
            ctx.localize_with(&messages::INFO_TITLE, &[("Bot", bot.config().bot.name.as_str())]),
            String::new(),
            COLOR_GREEN,
        )
        .field(ctx.localize(&messages::INFO_VERSION), env!("CARGO_PKG_VERSION"), true)
        .field(ctx.localize(&messages::INFO_GUILDS), guilds.to_string(), true)
        .field(ctx.localize(&messages::INFO_ACTIVE_GAMES), games.to_string(), true)
        .field(ctx.localize(&messages::INFO_UPTIME), format_uptime(bot.uptime()), true)
        .field(ctx.localize(&messages::INFO_LANGUAGE), ctx.language(), true);
        Ok(Reply::card(card))
    }
}

fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let (days, hours, mins) = (secs / 86_400, secs / 3_600 % 24, secs / 60 % 60);
    if days > 0 {
        format!("{days}d {hours}h {mins}m")
    } else if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m {}s", secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(42)), "0m 42s");
        assert_eq!(format_uptime(Duration::from_secs(3_720)), "1h 2m");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 1h 1m");
    }
}
