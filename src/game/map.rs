//! Map identifiers and their image URLs.

use std::fmt;
use tracing::warn;
use url::Url;

/// The fixed set of maps with hosted images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    TheSkeld,
    MiraHq,
    Polus,
    Airship,
}

impl MapKind {
    pub const ALL: [MapKind; 4] = [Self::TheSkeld, Self::MiraHq, Self::Polus, Self::Airship];

    /// Normalize a user-typed map name. Unknown names are `None`, never a default.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "the skeld" | "the_skeld" | "skeld" => Some(Self::TheSkeld),
            "mira" | "mira_hq" | "mira hq" | "mirahq" => Some(Self::MiraHq),
            "polus" => Some(Self::Polus),
            "airship" | "ship" | "air" => Some(Self::Airship),
            _ => None,
        }
    }

    /// Asset file stem.
    pub fn id(self) -> &'static str {
        match self {
            Self::TheSkeld => "the_skeld",
            Self::MiraHq => "mira_hq",
            Self::Polus => "polus",
            Self::Airship => "airship",
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A resolved map with its plain and detailed image URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapItem {
    pub kind: MapKind,
    pub simple: String,
    pub detailed: String,
}

impl MapItem {
    /// Resolve `name` against `<base>/<language>/`.
    pub fn new(name: &str, base_url: &str, language: &str) -> Option<Self> {
        let kind = MapKind::parse(name)?;
        let dir = format!("{}/{}/", base_url.trim_end_matches('/'), language);
        Some(Self {
            kind,
            simple: join(&dir, &format!("{}.png", kind.id())),
            detailed: join(&dir, &format!("{}_detailed.png", kind.id())),
        })
    }

    pub fn url(&self, detailed: bool) -> &str {
        if detailed { &self.detailed } else { &self.simple }
    }
}

/// Join a file name onto a directory URL. Parse failures are logged and fall
/// back to plain concatenation.
fn join(dir: &str, file: &str) -> String {
    match Url::parse(dir).and_then(|base| base.join(file)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!(base = %dir, file = %file, error = %e, "Map URL construction failed");
            format!("{dir}{file}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAP_BASE_URL;

    #[test]
    fn test_skeld_spellings_normalize_together() {
        let a = MapKind::parse("skeld");
        assert_eq!(a, Some(MapKind::TheSkeld));
        assert_eq!(MapKind::parse("the skeld"), a);
        assert_eq!(MapKind::parse("The_Skeld"), a);
    }

    #[test]
    fn test_unknown_map_is_none() {
        assert_eq!(MapKind::parse("moon"), None);
        assert!(MapItem::new("moon", DEFAULT_MAP_BASE_URL, "en").is_none());
    }

    #[test]
    fn test_urls_join_language_and_id() {
        let item = MapItem::new("mira hq", DEFAULT_MAP_BASE_URL, "en").unwrap();
        assert_eq!(
            item.simple,
            "https://github.com/automuteus/automuteus/blob/master/assets/maps/en/mira_hq.png"
        );
        assert_eq!(item.url(true), format!("{DEFAULT_MAP_BASE_URL}en/mira_hq_detailed.png"));
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let item = MapItem::new("air", "https://cdn.test/maps", "ru").unwrap();
        assert_eq!(item.simple, "https://cdn.test/maps/ru/airship.png");
    }

    #[test]
    fn test_unparseable_base_falls_back() {
        let item = MapItem::new("polus", "not a url", "en").unwrap();
        assert_eq!(item.simple, "not a url/en/polus.png");
    }
}
