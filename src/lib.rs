//! mutebot - command and setting routing for a social-deduction game bot.
//!
//! Inbound chat messages are resolved against two immutable registries
//! (commands and settings), gated by permission tier, dispatched against
//! per-guild shared game state guarded by non-blocking session locks, and
//! rendered into one or more outbound units.

pub mod bot;
pub mod config;
pub mod db;
pub mod error;
pub mod game;
pub mod gateway;
pub mod handlers;
pub mod http;
pub mod i18n;
pub mod metrics;
pub mod response;
pub mod settings;
pub mod state;
pub mod stats;
pub mod telemetry;

pub use bot::{Bot, BotServices};
pub use error::{BotError, BotResult};
pub use gateway::{Caller, InboundMessage};
pub use response::{Card, Content, OutboundUnit, Payload};
