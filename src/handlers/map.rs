//! MAP command handler.

use super::core::args::split_trailing_qualifier;
use super::core::{CommandHandler, DispatchContext};
use crate::error::{BotError, BotResult, Lookup};
use crate::game::MapItem;
use crate::response::Reply;
use crate::settings::MapVersion;
use async_trait::async_trait;

/// Handler for `map <name...> [simple|detailed]`.
///
/// A trailing `simple`/`detailed` picks the image; without one the guild's
/// stored map version applies.
pub struct MapHandler;

#[async_trait]
impl CommandHandler for MapHandler {
    async fn handle(&self, ctx: &mut DispatchContext<'_>) -> BotResult<Reply> {
        if ctx.args().is_empty() {
            return Ok(ctx.usage());
        }

        let (name, qualifier) = split_trailing_qualifier(ctx.args(), MapVersion::NAMES);
        let version = qualifier
            .and_then(MapVersion::parse)
            .unwrap_or(ctx.settings.map_version);

        let item = MapItem::new(&name, &ctx.bot.config().assets.map_base_url, ctx.language())
            .ok_or_else(|| BotError::not_found(Lookup::Map, name.as_str()))?;

        Ok(Reply::text(item.url(version == MapVersion::Detailed)))
    }
}
