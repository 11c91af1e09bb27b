//! SETTINGS command handler.
//!
//! `settings` lists every setting, `settings <name>` shows its card and
//! `settings <name> <value...>` validates, stores and confirms the change.

use super::core::args::is_confirmed;
use super::core::{CommandHandler, DispatchContext};
use crate::error::{BotError, BotResult, Lookup};
use crate::i18n::messages;
use crate::response::{COLOR_GOLD, Card, Reply};
use crate::settings::{SettingAction, SettingEntry, SettingEnv, SettingValue};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

/// Handler for `settings [name [value...]]`.
pub struct SettingsHandler;

#[async_trait]
impl CommandHandler for SettingsHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let bot = ctx.bot;
        let Some(token) = ctx.arg(0) else {
            return Ok(list(ctx));
        };
        let entry = bot
            .settings()
            .resolve(token)
            .ok_or_else(|| BotError::not_found(Lookup::Setting, token))?;
        let rest = ctx.args()[1..].to_vec();

        match &entry.action {
            SettingAction::Show => Ok(show(ctx)),
            SettingAction::Reset => reset(ctx, &rest).await,
            SettingAction::Value(_) if rest.is_empty() => Ok(Reply::card(entry.card(
                &ctx.settings,
                bot.localizer(),
                ctx.language(),
                ctx.prefix(),
            ))),
            SettingAction::Value(value) => change(ctx, entry, value.as_ref(), &rest).await,
        }
    }
}

fn list(ctx: &DispatchContext<'_>) -> Reply {
    let mut card = Card::new(
        ctx.localize(&messages::SETTINGS_LIST_TITLE),
        ctx.localize(&messages::SETTINGS_LIST_DESCRIPTION),
        COLOR_GOLD,
    );
    for entry in ctx.bot.settings().entries() {
        card = card.field(entry.title(), ctx.localize(&entry.short_help), true);
    }
    Reply::card(card)
}

fn show(ctx: &DispatchContext<'_>) -> Reply {
    let mut card = Card::new(
        ctx.localize(&messages::SETTINGS_SHOW_TITLE),
        String::new(),
        COLOR_GOLD,
    );
    for entry in ctx.bot.settings().entries() {
        if let Some(value) = entry.value() {
            let current = value.current(&ctx.settings);
            card = card.field(
                entry.title(),
                if current.is_empty() { "null".to_string() } else { current },
                true,
            );
        }
    }
    Reply::card(card)
}

async fn reset(ctx: &DispatchContext<'_>, rest: &[String]) -> BotResult<Reply> {
    if !is_confirmed(rest) {
        return Ok(Reply::text(ctx.localize(&messages::SETTINGS_RESET_PROMPT)));
    }
    ctx.bot.services().settings.reset(ctx.guild_id()).await?;
    info!(guild = %ctx.guild_id(), user = %ctx.user_id(), "Settings reset to defaults");
    Ok(Reply::text(ctx.localize(&messages::SETTINGS_RESET_DONE)))
}

async fn change(
    ctx: &DispatchContext<'_>,
    entry: &SettingEntry,
    value: &dyn SettingValue,
    rest: &[String],
) -> BotResult<Reply> {
    let services = ctx.bot.services();

    if entry.premium
        && !services
            .stats
            .premium_status(ctx.guild_id())
            .await?
            .is_active(Utc::now())
    {
        return Ok(Reply::text(
            ctx.localize_with(&messages::PREMIUM_REQUIRED, &[("Setting", entry.name)]),
        ));
    }

    let mut updated = ctx.settings.clone();
    let env = SettingEnv {
        localizer: ctx.bot.localizer(),
    };
    let notice = value.apply(&mut updated, rest, &env)?;
    services.settings.save(ctx.guild_id(), &updated).await?;

    let shown = value.current(&updated);
    info!(guild = %ctx.guild_id(), setting = entry.name, value = %shown, "Setting changed");

    let text = match notice {
        Some(notice) => ctx.render(notice),
        None => ctx.localize_with(
            &messages::SETTING_UPDATED,
            &[("Setting", entry.name), ("Value", shown.as_str())],
        ),
    };
    Ok(Reply::text(text))
}
