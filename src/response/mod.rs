//! Response payloads and their materialization into outbound units.
//!
//! Handlers return a [`Reply`]: where the response goes and a closed set of
//! payload variants. The [`Formatter`] turns a payload into the ordered
//! messages actually sent.

mod format;

pub use format::{Content, Formatter, OutboundUnit, PLATFORM_MESSAGE_LIMIT, chunk_bytes};

use serde::Serialize;

/// Gold, used for setting and command cards.
pub const COLOR_GOLD: u32 = 15_844_367;
/// Green, used for informational cards.
pub const COLOR_GREEN: u32 = 3_066_993;
/// Dark orange, used for stats cards.
pub const COLOR_ORANGE: u32 = 11_027_200;

/// A structured card (title, description, fields).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<CardField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Card {
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(CardField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// Raw block content that may exceed the platform size ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Code-block language label (e.g. `JSON`).
    pub label: String,
    pub content: Vec<u8>,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    None,
    Text(String),
    Card(Card),
    /// Each text becomes its own outbound unit.
    List(Vec<String>),
    /// Chunked into envelope-wrapped units of bounded size.
    Block(Block),
}

impl Payload {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Where a response is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The channel the command was issued in.
    Origin,
    Channel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub destination: Destination,
    pub payload: Payload,
}

impl Reply {
    /// Reply in the originating channel.
    pub fn here(payload: Payload) -> Self {
        Self {
            destination: Destination::Origin,
            payload,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::here(Payload::Text(text.into()))
    }

    pub fn card(card: Card) -> Self {
        Self::here(Payload::Card(card))
    }

    /// No response at all.
    pub fn silent() -> Self {
        Self::here(Payload::None)
    }
}
