//! PRIVACY command handler.

use super::core::{CommandHandler, DispatchContext};
use crate::error::BotResult;
use crate::i18n::messages;
use crate::response::{COLOR_GREEN, Card, Reply};
use async_trait::async_trait;
use tracing::info;

/// Handler for `privacy [showme|optin|optout]`.
///
/// Anything else replies with the command's card.
pub struct PrivacyHandler;

#[async_trait]
impl CommandHandler for PrivacyHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let services = ctx.bot.services();
        let user = ctx.user_id();

        match ctx.arg(0).map(str::to_lowercase).as_deref() {
            Some("showme") => {
                let names = services.usernames.names(ctx.guild_id(), user).await?;
                let opted_out = services.stats.is_opted_out(user).await?;
                let names = if names.is_empty() {
                    ctx.localize(&messages::NONE)
                } else {
                    names.join(", ")
                };
                let card = Card::new(
                    ctx.localize(&messages::PRIVACY_SHOWME_TITLE),
                    String::new(),
                    COLOR_GREEN,
                )
                .field(ctx.localize(&messages::PRIVACY_SHOWME_NAMES), names, false)
                .field(
                    ctx.localize(&messages::PRIVACY_SHOWME_OPTED_OUT),
                    opted_out.to_string(),
                    false,
                );
                Ok(Reply::card(card))
            }
            Some("optout") => {
                if !services.stats.set_opt_out(user, true).await? {
                    return Ok(Reply::text(ctx.localize(&messages::PRIVACY_ALREADY_OPTED_OUT)));
                }
                let removed = services.usernames.clear(ctx.guild_id(), user).await?;
                info!(user = %user, removed, "User opted out of data collection");
                Ok(Reply::text(ctx.localize_with(
                    &messages::PRIVACY_OPTED_OUT,
                    &[("Count", removed.to_string().as_str())],
                )))
            }
            Some("optin") => {
                let msg = if services.stats.set_opt_out(user, false).await? {
                    &messages::PRIVACY_OPTED_IN
                } else {
                    &messages::PRIVACY_ALREADY_OPTED_IN
                };
                Ok(Reply::text(ctx.localize(msg)))
            }
            _ => Ok(ctx.usage()),
        }
    }
}
