//! DEBUGSTATE command handler.

use super::core::{CommandHandler, DispatchContext};
use crate::error::{BotError, BotResult};
use crate::i18n::messages;
use crate::response::{Block, Payload, Reply};
use async_trait::async_trait;

/// Code-block label for the exported state.
const JSON_LABEL: &str = "JSON";

/// Handler for `debugstate`.
///
/// Exports the channel's session as pretty JSON; the formatter chunks it.
pub struct DebugStateHandler;

#[async_trait]
impl CommandHandler for DebugStateHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let Some(state) = ctx.bot.services().games.load(&ctx.key).await? else {
            return Ok(Reply::text(ctx.localize(&messages::DEBUG_NO_STATE)));
        };
        let content =
            serde_json::to_vec_pretty(&state).map_err(|e| BotError::Internal(e.to_string()))?;
        Ok(Reply::here(Payload::Block(Block {
            label: JSON_LABEL.to_string(),
            content,
        })))
    }
}
