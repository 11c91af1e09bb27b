//! Integration test common infrastructure.
//!
//! Builds a bot over in-memory stores with a recording actuator, and offers
//! helpers for sending messages and reading the replies.

#![allow(dead_code)]

use mutebot::config::Config;
use mutebot::response::CardField;
use mutebot::settings::GuildSettings;
use mutebot::state::RecordingActuator;
use mutebot::stats::MemoryStats;
use mutebot::{Bot, BotServices, Caller, Card, Content, InboundMessage, OutboundUnit};
use std::sync::Arc;

pub const GUILD: &str = "guild-1";
pub const CHANNEL: &str = "chan-1";
pub const ADMIN_ID: &str = "100001";
pub const MEMBER_ID: &str = "200002";

pub struct TestBot {
    pub bot: Arc<Bot>,
    pub actuator: Arc<RecordingActuator>,
    pub stats: Arc<MemoryStats>,
}

impl TestBot {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let actuator = Arc::new(RecordingActuator::new());
        let stats = Arc::new(MemoryStats::new());
        let defaults =
            GuildSettings::with_defaults(&config.bot.default_prefix, &config.bot.default_language);
        let services = BotServices::in_memory(defaults)
            .with_actuator(actuator.clone())
            .with_stats(stats.clone());
        Self {
            bot: Arc::new(Bot::new(config, services)),
            actuator,
            stats,
        }
    }

    /// Send `content` as `caller` in the default guild and channel.
    pub async fn send(&self, caller: Caller, content: &str) -> Vec<OutboundUnit> {
        self.send_in(CHANNEL, caller, content).await
    }

    pub async fn send_in(&self, channel: &str, caller: Caller, content: &str) -> Vec<OutboundUnit> {
        let message = InboundMessage::new(GUILD, channel, caller, content);
        self.bot.handle_message(&message).await
    }

    /// Send as a guild administrator.
    pub async fn admin(&self, content: &str) -> Vec<OutboundUnit> {
        self.send(Caller::new(ADMIN_ID).admin(), content).await
    }

    /// Send as a regular member.
    pub async fn member(&self, content: &str) -> Vec<OutboundUnit> {
        self.send(Caller::new(MEMBER_ID), content).await
    }
}

/// The single text reply; panics on anything else.
pub fn text(units: &[OutboundUnit]) -> &str {
    match units {
        [
            OutboundUnit {
                content: Content::Text { text },
                ..
            },
        ] => text,
        other => panic!("expected one text unit, got {other:?}"),
    }
}

/// The single card reply; panics on anything else.
pub fn card(units: &[OutboundUnit]) -> &Card {
    match units {
        [
            OutboundUnit {
                content: Content::Card { card },
                ..
            },
        ] => card,
        other => panic!("expected one card unit, got {other:?}"),
    }
}

pub fn field<'c>(card: &'c Card, name: &str) -> Option<&'c CardField> {
    card.fields.iter().find(|f| f.name == name)
}
