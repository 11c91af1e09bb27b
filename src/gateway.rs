//! Inbound messages and the JSON-lines development transport.
//!
//! The real chat-platform gateway is out of scope. The stdio transport reads
//! one [`InboundMessage`] per line from stdin, dispatches every message on its
//! own task and prints each resulting [`OutboundUnit`] as one JSON line.

use crate::bot::Bot;
use crate::response::OutboundUnit;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Who sent a message, with the guild facts needed for permission checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: String,
    #[serde(default)]
    pub role_ids: Vec<String>,
    #[serde(default)]
    pub is_guild_admin: bool,
}

/// A text message posted in a guild channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub guild_id: String,
    pub channel_id: String,
    pub author: Caller,
    pub content: String,
}

impl InboundMessage {
    pub fn new(
        guild_id: impl Into<String>,
        channel_id: impl Into<String>,
        author: Caller,
        content: impl Into<String>,
    ) -> Self {
        Self {
            guild_id: guild_id.into(),
            channel_id: channel_id.into(),
            author,
            content: content.into(),
        }
    }
}

impl Caller {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn admin(mut self) -> Self {
        self.is_guild_admin = true;
        self
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.role_ids = roles.into_iter().map(Into::into).collect();
        self
    }
}

/// Run the stdio transport until stdin closes.
pub async fn run_stdio(bot: Arc<Bot>) -> std::io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<OutboundUnit>();

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(unit) = rx.recv().await {
            match serde_json::to_string(&unit) {
                Ok(mut line) => {
                    line.push('\n');
                    if let Err(e) = stdout.write_all(line.as_bytes()).await {
                        warn!(error = %e, "Failed to write outbound unit");
                        break;
                    }
                    let _ = stdout.flush().await;
                }
                Err(e) => warn!(error = %e, "Failed to serialize outbound unit"),
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = tokio::task::JoinSet::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let message: InboundMessage = match serde_json::from_str(&line) {
            Ok(m) => m,
            Err(e) => {
                warn!(error = %e, "Ignoring malformed inbound line");
                continue;
            }
        };
        let bot = Arc::clone(&bot);
        let tx = tx.clone();
        tasks.spawn(async move {
            for unit in bot.handle_message(&message).await {
                if tx.send(unit).is_err() {
                    debug!("Outbound channel closed");
                    break;
                }
            }
        });
    }

    while tasks.join_next().await.is_some() {}
    drop(tx);
    let _ = writer.await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_defaults() {
        let msg: InboundMessage = serde_json::from_str(
            r#"{"guild_id":"g","channel_id":"c","author":{"user_id":"u"},"content":".au help"}"#,
        )
        .unwrap();
        assert_eq!(msg.author, Caller::new("u"));
        assert!(!msg.author.is_guild_admin);
    }
}
