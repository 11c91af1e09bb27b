//! Payload materialization.
//!
//! Oversized block content is split on fixed byte boundaries, independent of
//! its structure, and every chunk is wrapped in the same code-block envelope
//! so each outbound unit renders on its own.

use super::{Block, Card, Payload};
use serde::Serialize;

/// Largest message the chat platform accepts, in bytes.
pub const PLATFORM_MESSAGE_LIMIT: usize = 2000;

/// Bytes the code fence adds around a chunk with `label`.
fn envelope_bytes(label: &str) -> usize {
    "```".len() * 2 + label.len() + "\n".len() * 2
}

/// One outbound platform message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundUnit {
    pub channel_id: String,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    Text { text: String },
    Card { card: Card },
}

/// Split `content` into consecutive segments of at most `max` bytes.
///
/// Produces `ceil(len / max)` segments whose in-order concatenation is
/// exactly `content`. A `max` of zero is treated as one.
pub fn chunk_bytes(content: &[u8], max: usize) -> std::slice::Chunks<'_, u8> {
    content.chunks(max.max(1))
}

/// Renders payloads into outbound units.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    max_chunk_bytes: usize,
}

impl Formatter {
    pub fn new(max_chunk_bytes: usize) -> Self {
        Self {
            max_chunk_bytes: max_chunk_bytes.max(1),
        }
    }

    pub fn max_chunk_bytes(&self) -> usize {
        self.max_chunk_bytes
    }

    pub fn format(&self, channel_id: &str, payload: Payload) -> Vec<OutboundUnit> {
        let unit = |content| OutboundUnit {
            channel_id: channel_id.to_string(),
            content,
        };
        match payload {
            Payload::None => Vec::new(),
            Payload::Text(text) if text.is_empty() => Vec::new(),
            Payload::Text(text) => vec![unit(Content::Text { text })],
            Payload::Card(card) => vec![unit(Content::Card { card })],
            Payload::List(texts) => texts
                .into_iter()
                .filter(|t| !t.is_empty())
                .map(|text| unit(Content::Text { text }))
                .collect(),
            Payload::Block(block) => self
                .wrap_block(&block)
                .into_iter()
                .map(|text| unit(Content::Text { text }))
                .collect(),
        }
    }

    /// Wrap each chunk of a block in a labeled code fence.
    ///
    /// The chunk size is shrunk by the fence's own size so that no wrapped
    /// unit exceeds [`PLATFORM_MESSAGE_LIMIT`].
    ///
    /// Chunks are cut on byte boundaries. A multi-byte character straddling a
    /// boundary does not survive: each side's partial bytes are rendered as
    /// U+FFFD, so the visible output loses that character.
    pub fn wrap_block(&self, block: &Block) -> Vec<String> {
        let ceiling = PLATFORM_MESSAGE_LIMIT.saturating_sub(envelope_bytes(&block.label));
        chunk_bytes(&block.content, self.max_chunk_bytes.min(ceiling))
            .map(|chunk| {
                format!(
                    "```{}\n{}\n```",
                    block.label,
                    String::from_utf8_lossy(chunk)
                )
            })
            .collect()
    }
}
