//! STATS command handler.
//!
//! `stats <@user|guild|CODE:ID> [reset [confirm]]`. Cards show stored counts
//! only. Resetting is admin-only and needs a trailing `confirm`.

use super::core::args::{is_confirmed, user_id};
use super::core::{CommandHandler, DispatchContext, Tier};
use crate::error::{BotError, BotResult, Lookup};
use crate::i18n::messages;
use crate::response::{COLOR_ORANGE, Card, Reply};
use crate::stats::{GameStats, GuildStats, UserStats};
use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

static MATCH_ID: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{6,8}:[0-9]+$").ok());

const GUILD_KEYWORDS: [&str; 3] = ["g", "guild", "server"];
const RESET_KEYWORD: &str = "reset";

/// What a `stats` invocation is about.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    User(String),
    Guild,
    Match { connect_code: String, game_id: i64 },
}

impl Target {
    fn parse(token: &str) -> Option<Self> {
        if let Some(id) = user_id(token) {
            return Some(Self::User(id));
        }
        let token = token.replace('"', "");
        if GUILD_KEYWORDS.iter().any(|k| token.eq_ignore_ascii_case(k)) {
            return Some(Self::Guild);
        }
        let upper = token.to_uppercase();
        if MATCH_ID.as_ref()?.is_match(&upper) {
            let (code, id) = upper.split_once(':')?;
            return Some(Self::Match {
                connect_code: code.to_string(),
                game_id: id.parse().ok()?,
            });
        }
        None
    }
}

/// Handler for `stats`.
pub struct StatsHandler;

#[async_trait]
impl CommandHandler for StatsHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        let Some(token) = ctx.arg(0) else {
            return Ok(ctx.usage());
        };
        let target =
            Target::parse(token).ok_or_else(|| BotError::not_found(Lookup::Match, token))?;

        let wants_reset = ctx
            .arg(1)
            .is_some_and(|t| t.eq_ignore_ascii_case(RESET_KEYWORD));
        if wants_reset && !matches!(target, Target::Match { .. }) {
            return reset(ctx, &target, token).await;
        }

        let stats = &ctx.bot.services().stats;
        let guild = ctx.guild_id();
        match target {
            Target::User(id) => {
                let user = stats.user_stats(guild, &id).await?;
                Ok(Reply::card(user_card(ctx, &id, &user)))
            }
            Target::Guild => {
                let summary = stats.guild_stats(guild).await?;
                Ok(Reply::card(guild_card(ctx, &summary)))
            }
            Target::Match {
                connect_code,
                game_id,
            } => {
                let game = stats
                    .game_stats(guild, &connect_code, game_id)
                    .await?
                    .ok_or_else(|| BotError::not_found(Lookup::Match, token))?;
                let premium = stats.premium_status(guild).await?.is_active(Utc::now());
                Ok(Reply::card(match_card(ctx, &game, premium)))
            }
        }
    }
}

async fn reset(ctx: &DispatchContext<'_>, target: &Target, token: &str) -> BotResult<Reply> {
    if !ctx.clearance.is_admin {
        return Err(BotError::PermissionDenied {
            required: Tier::Admin,
        });
    }

    let confirmed = is_confirmed(ctx.args().get(2..).unwrap_or(&[]));
    let stats = &ctx.bot.services().stats;
    let user = [("User", token)];

    match target {
        Target::Guild if confirmed => {
            let removed = stats.delete_guild_games(ctx.guild_id()).await?;
            info!(guild = %ctx.guild_id(), removed, "Guild stats reset");
            Ok(Reply::text(ctx.localize(&messages::STATS_RESET_GUILD_DONE)))
        }
        Target::Guild => Ok(Reply::text(ctx.localize(&messages::STATS_RESET_GUILD_PROMPT))),
        Target::User(id) if confirmed => {
            let removed = stats.delete_user_games(id).await?;
            info!(user = %id, removed, "User stats reset");
            Ok(Reply::text(ctx.localize_with(&messages::STATS_RESET_USER_DONE, &user)))
        }
        Target::User(_) => Ok(Reply::text(
            ctx.localize_with(&messages::STATS_RESET_USER_PROMPT, &user),
        )),
        Target::Match { .. } => Ok(Reply::silent()),
    }
}

fn user_card(ctx: &DispatchContext<'_>, user_id: &str, user: &UserStats) -> Card {
    Card::new(
        ctx.localize(&messages::STATS_USER_TITLE),
        format!("<@{user_id}>"),
        COLOR_ORANGE,
    )
    .field(ctx.localize(&messages::STATS_GAMES), user.games.to_string(), true)
    .field(ctx.localize(&messages::STATS_WINS), user.wins.to_string(), true)
    .field(ctx.localize(&messages::STATS_LOSSES), user.losses().to_string(), true)
    .field(
        ctx.localize(&messages::STATS_CREWMATE_GAMES),
        user.crewmate_games.to_string(),
        true,
    )
    .field(
        ctx.localize(&messages::STATS_IMPOSTOR_GAMES),
        user.impostor_games.to_string(),
        true,
    )
}

fn guild_card(ctx: &DispatchContext<'_>, guild: &GuildStats) -> Card {
    Card::new(
        ctx.localize(&messages::STATS_GUILD_TITLE),
        String::new(),
        COLOR_ORANGE,
    )
    .field(ctx.localize(&messages::STATS_GAMES), guild.games.to_string(), true)
    .field(ctx.localize(&messages::STATS_PLAYERS), guild.players.to_string(), true)
    .field(
        ctx.localize(&messages::STATS_CREWMATE_WINS),
        guild.crewmate_wins.to_string(),
        true,
    )
    .field(
        ctx.localize(&messages::STATS_IMPOSTOR_WINS),
        guild.impostor_wins.to_string(),
        true,
    )
}

/// Match card. The player roster is a premium detail.
fn match_card(ctx: &DispatchContext<'_>, game: &GameStats, premium: bool) -> Card {
    let match_id = game.match_id();
    let secs = (game.ended_at - game.started_at).num_seconds().max(0);
    let card = Card::new(
        ctx.localize_with(&messages::STATS_MATCH_TITLE, &[("MatchID", match_id.as_str())]),
        String::new(),
        COLOR_ORANGE,
    )
    .field(ctx.localize(&messages::STATS_WINNER), game.winner.to_string(), true)
    .field(
        ctx.localize(&messages::STATS_STARTED),
        game.started_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        true,
    )
    .field(
        ctx.localize(&messages::STATS_DURATION),
        format!("{}m {}s", secs / 60, secs % 60),
        true,
    );

    if !premium {
        return card
            .field(ctx.localize(&messages::STATS_PLAYERS), game.players.len().to_string(), true)
            .footer(ctx.localize(&messages::STATS_PREMIUM_HINT));
    }
    let roster = game
        .players
        .iter()
        .map(|p| {
            let outcome = if p.won { "🏆" } else { "" };
            format!("<@{}> {} ({}) {outcome}", p.user_id, p.name, p.role)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");
    card.field(ctx.localize(&messages::STATS_PLAYERS), roster, false)
}
