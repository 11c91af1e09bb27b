//! CACHE command handler.

use super::core::args::user_id;
use super::core::{CommandHandler, DispatchContext};
use crate::error::{BotError, BotResult, Lookup};
use crate::i18n::messages;
use crate::response::Reply;
use async_trait::async_trait;
use tracing::info;

/// Handler for `cache <@user> [clear|c]`.
pub struct CacheHandler;

#[async_trait]
impl CommandHandler for CacheHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let Some(mention) = ctx.arg(0) else {
            return Ok(ctx.usage());
        };
        let target =
            user_id(mention).ok_or_else(|| BotError::not_found(Lookup::User, mention))?;
        let usernames = &ctx.bot.services().usernames;

        match ctx.arg(1).map(str::to_lowercase).as_deref() {
            None => {
                let names = usernames.names(ctx.guild_id(), &target).await?;
                if names.is_empty() {
                    return Ok(Reply::text(ctx.localize(&messages::CACHE_EMPTY)));
                }
                let mut out = ctx.localize(&messages::CACHE_NAMES);
                out.push_str("\n```\n");
                for name in &names {
                    out.push_str(name);
                    out.push('\n');
                }
                out.push_str("```");
                Ok(Reply::text(out))
            }
            Some("clear" | "c") => {
                let removed = usernames.clear(ctx.guild_id(), &target).await?;
                info!(guild = %ctx.guild_id(), user = %target, removed, "Cached names cleared");
                Ok(Reply::text(ctx.localize(&messages::CACHE_CLEARED)))
            }
            Some(_) => Ok(Reply::silent()),
        }
    }
}
