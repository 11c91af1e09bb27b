//! Alias-conflict-free lookup registries.
//!
//! A [`Registry`] is built once at startup from an ordered list of
//! definitions and is read-only afterwards. Each definition registers its
//! canonical name and then its aliases, in order; the first registrant of a
//! (case-insensitive) key owns it. Conflicts are logged and the later key is
//! dropped. After construction, resolution is a single hash lookup.

use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Anything that can be registered under a name and aliases.
pub trait RegistryEntry: Send + Sync {
    fn name(&self) -> &str;
    fn aliases(&self) -> &[&'static str];
}

/// A configuration defect found while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryConflict {
    #[error("provided a blank key for entry {entry}")]
    BlankKey { entry: String },

    #[error("conflict in keys: {rejected} => {key} (owned by {owner})")]
    Duplicate {
        key: String,
        owner: String,
        rejected: String,
    },
}

/// Case-insensitive, immutable name → entry map.
pub struct Registry<E> {
    label: &'static str,
    entries: Vec<E>,
    index: HashMap<String, usize>,
    conflicts: Vec<RegistryConflict>,
}

/// Canonical case used for every key and lookup.
#[inline]
fn normalize(token: &str) -> String {
    token.to_lowercase()
}

impl<E: RegistryEntry> Registry<E> {
    /// Build a registry from definitions in precedence order.
    ///
    /// An entry whose canonical name is rejected is dropped entirely, aliases
    /// included. A rejected alias only loses that alias.
    pub fn build(label: &'static str, definitions: impl IntoIterator<Item = E>) -> Self {
        let mut entries = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut conflicts = Vec::new();

        for def in definitions {
            let slot = entries.len();
            let name = def.name().to_string();

            match Self::claim(&mut index, &entries, &name, &name, slot) {
                Ok(()) => {}
                Err(conflict) => {
                    conflicts.push(conflict);
                    continue;
                }
            }

            for alias in def.aliases() {
                if let Err(conflict) = Self::claim(&mut index, &entries, alias, &name, slot) {
                    conflicts.push(conflict);
                }
            }
            entries.push(def);
        }

        for conflict in &conflicts {
            warn!(registry = label, %conflict, "Registry configuration conflict");
        }
        crate::metrics::record_registry_conflicts(label, conflicts.len());

        Self {
            label,
            entries,
            index,
            conflicts,
        }
    }

    fn claim(
        index: &mut HashMap<String, usize>,
        entries: &[E],
        key: &str,
        entry_name: &str,
        slot: usize,
    ) -> Result<(), RegistryConflict> {
        if key.trim().is_empty() {
            return Err(RegistryConflict::BlankKey {
                entry: entry_name.to_string(),
            });
        }
        let key = normalize(key);
        if let Some(&owner) = index.get(&key) {
            // Slot == entries.len() means the owner is the entry being registered.
            let owner = entries
                .get(owner)
                .map(|e| e.name().to_string())
                .unwrap_or_else(|| entry_name.to_string());
            return Err(RegistryConflict::Duplicate {
                key,
                owner,
                rejected: entry_name.to_string(),
            });
        }
        index.insert(key, slot);
        Ok(())
    }

    /// Exact, case-insensitive lookup of a name or alias.
    pub fn resolve(&self, token: &str) -> Option<&E> {
        self.index
            .get(&normalize(token))
            .and_then(|&i| self.entries.get(i))
    }

    /// Entries in definition order.
    pub fn entries(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    pub fn conflicts(&self) -> &[RegistryConflict] {
        &self.conflicts
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every registered key, sorted. Useful for diagnostics.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.index.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Def {
        name: &'static str,
        aliases: &'static [&'static str],
    }

    impl RegistryEntry for Def {
        fn name(&self) -> &str {
            self.name
        }
        fn aliases(&self) -> &[&'static str] {
            self.aliases
        }
    }

    fn def(name: &'static str, aliases: &'static [&'static str]) -> Def {
        Def { name, aliases }
    }

    #[test]
    fn test_first_registrant_wins_alias() {
        let reg = Registry::build("test", [def("link", &["l"]), def("log", &["l"])]);
        assert_eq!(reg.resolve("l").unwrap().name, "link");
        assert_eq!(reg.resolve("log").unwrap().name, "log");
        assert_eq!(
            reg.conflicts(),
            &[RegistryConflict::Duplicate {
                key: "l".into(),
                owner: "link".into(),
                rejected: "log".into(),
            }]
        );
    }

    #[test]
    fn test_case_insensitive_resolution() {
        let reg = Registry::build("test", [def("unmuteAll", &["UA"])]);
        assert!(reg.resolve("UNMUTEALL").is_some());
        assert!(reg.resolve("ua").is_some());
        assert!(reg.resolve("Ua").is_some());
    }

    #[test]
    fn test_exact_match_only() {
        let reg = Registry::build("test", [def("refresh", &["ref"])]);
        assert!(reg.resolve("refr").is_none());
        assert!(reg.resolve("refreshx").is_none());
        assert!(reg.resolve("").is_none());
    }

    #[test]
    fn test_blank_alias_is_skipped() {
        let reg = Registry::build("test", [def("help", &["", "h"])]);
        assert_eq!(reg.len(), 1);
        assert!(reg.resolve("h").is_some());
        assert!(matches!(reg.conflicts()[0], RegistryConflict::BlankKey { .. }));
    }

    #[test]
    fn test_alias_duplicating_own_name_is_conflict() {
        let reg = Registry::build("test", [def("delays", &["Delays", "d"])]);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.conflicts().len(), 1);
        assert!(reg.resolve("d").is_some());
    }

    #[test]
    fn test_rejected_canonical_name_drops_entry() {
        let reg = Registry::build("test", [def("show", &["s"]), def("S", &["zzz"])]);
        assert_eq!(reg.len(), 1);
        assert!(reg.resolve("zzz").is_none());
    }

    #[test]
    fn test_every_key_resolves_to_exactly_one_entry() {
        let reg = Registry::build(
            "test",
            [
                def("new", &["start", "n"]),
                def("end", &["stop", "e"]),
                def("next", &["n", "nx"]),
            ],
        );
        for key in reg.keys() {
            let owners = reg
                .entries()
                .filter(|e| {
                    e.name.eq_ignore_ascii_case(key)
                        || e.aliases.iter().any(|a| a.eq_ignore_ascii_case(key))
                })
                .count();
            assert!(owners >= 1);
            // Determinism: repeated lookups agree.
            let a = reg.resolve(key).map(|e| e.name);
            let b = reg.resolve(key).map(|e| e.name);
            assert_eq!(a, b);
        }
        assert_eq!(reg.resolve("n").unwrap().name, "new");
    }
}
