//! Miscellaneous handlers: FORCE, WORKERBOT, ASCII

use super::core::args::{parse_bool, user_id};
use super::core::{CommandHandler, DispatchContext};
use crate::error::{BotError, BotResult, Lookup};
use crate::game::ascii;
use crate::i18n::messages;
use crate::response::{COLOR_GREEN, Card, Reply};
use async_trait::async_trait;

/// Handler for `force`.
///
/// Phase transitions belong to the capture pipeline; this is a placeholder
/// that answers nothing.
pub struct ForceHandler;

#[async_trait]
impl CommandHandler for ForceHandler {
    async fn handle(&self, _ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        Ok(Reply::silent())
    }
}

/// Handler for `workerbot`.
pub struct WorkerBotHandler;

#[async_trait]
impl CommandHandler for WorkerBotHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let Some(url) = ctx.bot.config().bot.worker_invite_url.as_deref() else {
            return Ok(Reply::text(ctx.localize(&messages::WORKER_UNCONFIGURED)));
        };
        let card = Card::new(
            ctx.localize(&messages::WORKER_TITLE),
            ctx.localize_with(&messages::WORKER_DESCRIPTION, &[("URL", url)]),
            COLOR_GREEN,
        );
        Ok(Reply::card(card))
    }
}

/// Handler for `ascii [@user [t|true] [count]]`.
pub struct AsciiHandler;

#[async_trait]
impl CommandHandler for AsciiHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let Some(mention) = ctx.arg(0) else {
            return Ok(Reply::text(ascii::CREWMATE));
        };
        if user_id(mention).is_none() {
            return Err(BotError::not_found(Lookup::User, mention));
        }

        let impostor = ctx.arg(1).and_then(parse_bool).unwrap_or(false);
        let count = ctx
            .arg(2)
            .and_then(|c| c.parse::<i64>().ok())
            .unwrap_or(1)
            .to_string();

        let verdict = if impostor {
            &messages::ASCII_WAS_IMPOSTOR
        } else {
            &messages::ASCII_WAS_NOT_IMPOSTOR
        };
        let verdict = ctx.localize_with(verdict, &[("User", mention)]);
        let remaining = ctx.localize_with(&messages::ASCII_REMAINING, &[("Count", count.as_str())]);
        Ok(Reply::text(ascii::starfield(&verdict, &remaining)))
    }
}
