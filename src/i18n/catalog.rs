//! TOML-backed message catalogs.
//!
//! A locales directory holds one flat table per language (`en.toml`,
//! `ru.toml`, ...) mapping message ids to translated text. Lookups fall back
//! to the default language, then to the message's built-in English text.

use super::{Localizer, Msg, render_template};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Default language code.
pub const DEFAULT_LANGUAGE: &str = "en";

type Table = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read locales: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: toml::de::Error,
    },
}

/// In-memory catalog set, optionally backed by a directory.
pub struct Catalog {
    dir: Option<PathBuf>,
    tables: RwLock<HashMap<String, Table>>,
}

impl Catalog {
    /// A catalog with no translations; every lookup uses the built-in text.
    pub fn empty() -> Self {
        Self {
            dir: None,
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Load every `<lang>.toml` in `dir`.
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let catalog = Self {
            dir: Some(dir.into()),
            tables: RwLock::new(HashMap::new()),
        };
        catalog.reload()?;
        Ok(catalog)
    }

    fn read_dir(dir: &Path) -> Result<HashMap<String, Table>, CatalogError> {
        let mut tables = HashMap::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = std::fs::read_to_string(&path)?;
            let table: Table = toml::from_str(&content).map_err(|source| CatalogError::Parse {
                file: path.display().to_string(),
                source,
            })?;
            tables.insert(lang.to_ascii_lowercase(), table);
        }
        Ok(tables)
    }

    fn lookup(&self, language: &str, id: &str) -> Option<String> {
        let tables = self.tables.read();
        tables
            .get(language)
            .and_then(|t| t.get(id))
            .or_else(|| tables.get(DEFAULT_LANGUAGE).and_then(|t| t.get(id)))
            .cloned()
    }
}

impl Localizer for Catalog {
    fn localize(&self, language: &str, msg: &Msg, args: &[(&str, &str)]) -> String {
        match self.lookup(language, msg.id) {
            Some(text) => render_template(&text, args),
            None => render_template(msg.other, args),
        }
    }

    fn languages(&self) -> Vec<String> {
        let tables = self.tables.read();
        let mut langs: Vec<String> = tables.keys().cloned().collect();
        if !tables.contains_key(DEFAULT_LANGUAGE) {
            langs.push(DEFAULT_LANGUAGE.to_string());
        }
        langs.sort();
        langs
    }

    fn reload(&self) -> Result<usize, CatalogError> {
        let Some(dir) = &self.dir else {
            return Ok(self.tables.read().len());
        };
        match Self::read_dir(dir) {
            Ok(tables) => {
                let count = tables.len();
                *self.tables.write() = tables;
                info!(dir = %dir.display(), languages = count, "Locale catalogs loaded");
                Ok(count)
            }
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Failed to load locale catalogs");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: Msg = Msg::new("test.greeting", "Hello {{.User}}");

    #[test]
    fn test_empty_catalog_uses_default_text() {
        let catalog = Catalog::empty();
        assert_eq!(catalog.localize("ru", &GREETING, &[("User", "Soup")]), "Hello Soup");
        assert_eq!(catalog.languages(), vec!["en".to_string()]);
    }

    #[test]
    fn test_load_and_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("ru.toml"),
            "\"test.greeting\" = \"Привет {{.User}}\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.localize("ru", &GREETING, &[("User", "Soup")]), "Привет Soup");
        // Unknown language falls back to the built-in text.
        assert_eq!(catalog.localize("de", &GREETING, &[("User", "Soup")]), "Hello Soup");
        assert_eq!(catalog.languages(), vec!["en".to_string(), "ru".to_string()]);
    }

    #[test]
    fn test_reload_picks_up_new_language() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.languages(), vec!["en".to_string()]);

        std::fs::write(dir.path().join("fr.toml"), "\"test.greeting\" = \"Salut\"\n").unwrap();
        assert_eq!(catalog.reload().unwrap(), 1);
        assert!(catalog.languages().contains(&"fr".to_string()));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.toml"), "not = [valid").unwrap();
        assert!(matches!(
            Catalog::load(dir.path()),
            Err(CatalogError::Parse { .. })
        ));
    }
}
