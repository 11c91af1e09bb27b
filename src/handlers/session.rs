//! Game session handlers: NEW, END, PAUSE, REFRESH, LINK, UNLINK, UNMUTEALL
//!
//! Every handler here except UNMUTEALL mutates the channel's session and runs
//! under its session lock.

use super::core::args::user_id;
use super::core::{CommandHandler, DispatchContext};
use crate::error::{BotError, BotResult};
use crate::i18n::{Notice, messages};
use crate::response::{COLOR_GREEN, Card, Reply};
use crate::state::{GameState, PlayerLink};
use async_trait::async_trait;
use tracing::{debug, info};

/// The channel's session, or a `NO_GAME` validation error.
async fn load_game(ctx: &DispatchContext<'_>) -> BotResult<GameState> {
    ctx.bot
        .services()
        .games
        .load(&ctx.key)
        .await?
        .ok_or_else(|| BotError::invalid(messages::NO_GAME))
}

/// Republish the status message and persist the session with its new id.
async fn publish_and_save(ctx: &DispatchContext<'_>, state: &mut GameState) -> BotResult<()> {
    let services = ctx.bot.services();
    if let Some(id) = services.actuator.publish_status(state, &ctx.settings).await? {
        state.status_message_id = Some(id);
    }
    services.games.save(state).await?;
    Ok(())
}

fn mention_invalid(token: &str) -> BotError {
    BotError::Validation(Notice::new(messages::MENTIONS_INVALID).arg("Value", token))
}

/// Handler for `new`.
///
/// Starts a fresh session in the channel, replacing any existing one.
pub struct NewHandler;

#[async_trait]
impl CommandHandler for NewHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let mut state = GameState::new(ctx.key.clone());
        publish_and_save(ctx, &mut state).await?;

        info!(key = %ctx.key, code = %state.connect_code, "Game created");

        let card = Card::new(
            ctx.localize(&messages::NEW_GAME_TITLE),
            ctx.localize(&messages::NEW_GAME_DESCRIPTION),
            COLOR_GREEN,
        )
        .field(
            ctx.localize(&messages::NEW_GAME_CODE),
            format!("`{}`", state.connect_code),
            false,
        );
        Ok(Reply::card(card))
    }
}

/// Handler for `end`.
///
/// Signals end-of-game, unmutes everyone and deletes the session.
pub struct EndHandler;

#[async_trait]
impl CommandHandler for EndHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let state = load_game(ctx).await?;
        let services = ctx.bot.services();

        services.actuator.end_game(&state).await?;
        services.actuator.apply_to_all(&state, false, false).await?;
        services.games.delete(&ctx.key).await?;

        info!(key = %ctx.key, code = %state.connect_code, "Game ended");
        Ok(Reply::silent())
    }
}

/// Handler for `pause`.
///
/// Toggles automatic muting. Pausing unmutes and undeafens everyone.
pub struct PauseHandler;

#[async_trait]
impl CommandHandler for PauseHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let mut state = load_game(ctx).await?;
        state.running = !state.running;

        if !state.running {
            ctx.bot
                .services()
                .actuator
                .apply_to_all(&state, false, false)
                .await?;
        }
        publish_and_save(ctx, &mut state).await?;

        debug!(key = %ctx.key, running = state.running, "Pause toggled");
        Ok(Reply::silent())
    }
}

/// Handler for `refresh`.
pub struct RefreshHandler;

#[async_trait]
impl CommandHandler for RefreshHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let mut state = load_game(ctx).await?;
        publish_and_save(ctx, &mut state).await?;
        Ok(Reply::silent())
    }
}

/// Handler for `link <@user> <color|name>`.
///
/// Links by color when the player argument names one, by in-game name
/// otherwise. Names are recorded in the username cache.
pub struct LinkHandler;

#[async_trait]
impl CommandHandler for LinkHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let [mention, player @ ..] = ctx.args() else {
            return Ok(ctx.usage());
        };
        if player.is_empty() {
            return Ok(ctx.usage());
        }
        let target = user_id(mention).ok_or_else(|| mention_invalid(mention))?;
        let player = player.join(" ");

        let mut state = load_game(ctx).await?;
        let link = PlayerLink::new(target.as_str(), &player);
        if let Some(name) = &link.name {
            ctx.bot
                .services()
                .usernames
                .record(ctx.guild_id(), &target, name)
                .await?;
        }
        state.link(link);
        publish_and_save(ctx, &mut state).await?;

        debug!(key = %ctx.key, user = %target, player = %player, "Player linked");
        Ok(Reply::silent())
    }
}

/// Handler for `unlink <@user>`.
pub struct UnlinkHandler;

#[async_trait]
impl CommandHandler for UnlinkHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let Some(mention) = ctx.arg(0) else {
            return Ok(ctx.usage());
        };
        let target = user_id(mention).ok_or_else(|| mention_invalid(mention))?;

        let mut state = load_game(ctx).await?;
        if state.unlink(&target) {
            debug!(key = %ctx.key, user = %target, "Player unlinked");
        }
        publish_and_save(ctx, &mut state).await?;
        Ok(Reply::silent())
    }
}

/// Handler for `unmuteall`.
///
/// Reads the session without locking it.
pub struct UnmuteAllHandler;

#[async_trait]
impl CommandHandler for UnmuteAllHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let state = load_game(ctx).await?;
        ctx.bot
            .services()
            .actuator
            .apply_to_all(&state, false, false)
            .await?;
        Ok(Reply::silent())
    }
}
