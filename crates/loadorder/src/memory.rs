//! In-memory load order built from a JSON export.

use crate::error::{ErrorKind, Result};
use crate::{LoadOrder, Lookup, WinningContext};
use exn::{OptionExt, ResultExt};
use serde::Deserialize;
use serde_json::Value;
use spelltome_records::models::{Book, FormKey, MagicEffect, ModKey, Spell};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::instrument;

/// Export format: the active plugins, lowest priority first (the same order
/// as `plugins.txt`).
#[derive(Debug, Default, Deserialize)]
pub struct LoadOrderExport {
    #[serde(default)]
    pub plugins: Vec<PluginExport>,
}

/// The records of a single plugin.
///
/// Books are kept as raw JSON and only decoded while iterating
/// [`winning_books`](LoadOrder::winning_books); spells and magic effects are
/// decoded up front since they are looked up by reference.
#[derive(Debug, Deserialize)]
pub struct PluginExport {
    pub mod_key: ModKey,
    #[serde(default)]
    pub books: Vec<Value>,
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(default)]
    pub magic_effects: Vec<MagicEffect>,
}
impl PluginExport {
    pub fn new(mod_key: ModKey) -> Self {
        Self {
            mod_key,
            books: Vec::new(),
            spells: Vec::new(),
            magic_effects: Vec::new(),
        }
    }
}

struct RawRecord {
    mod_key: ModKey,
    form_key: FormKey,
    value: Value,
}

/// A fully indexed load order held in memory.
///
/// Later plugins override earlier ones, record by record.
pub struct MemoryLoadOrder {
    plugins: Vec<ModKey>,
    /// Winning books, highest priority plugin first.
    books: Vec<RawRecord>,
    spells: HashMap<FormKey, Spell>,
    magic_effects: HashMap<FormKey, MagicEffect>,
}
impl MemoryLoadOrder {
    /// Reads and indexes an export file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).or_raise(|| ErrorKind::Read(path.to_path_buf()))?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let export: LoadOrderExport = serde_json::from_slice(bytes).or_raise(|| ErrorKind::Malformed)?;
        Self::new(export.plugins)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let export: LoadOrderExport = serde_json::from_value(value).or_raise(|| ErrorKind::Malformed)?;
        Self::new(export.plugins)
    }

    /// Indexes `plugins`, given lowest priority first.
    pub fn new(plugins: Vec<PluginExport>) -> Result<Self> {
        let mut order = Vec::with_capacity(plugins.len());
        for plugin in &plugins {
            if order.contains(&plugin.mod_key) {
                exn::bail!(ErrorKind::DuplicatePlugin(plugin.mod_key.clone()));
            }
            order.push(plugin.mod_key.clone());
        }

        let mut spells = HashMap::new();
        let mut magic_effects = HashMap::new();
        let mut books = Vec::new();
        let mut seen = HashSet::new();
        // Walk from the top of the load order down so that the first version
        // of a book encountered is the winning one.
        for plugin in plugins.into_iter().rev() {
            for value in plugin.books {
                let form_key = Self::form_key_of(&value).ok_or_raise(|| ErrorKind::MissingFormKey {
                    plugin: plugin.mod_key.clone(),
                })?;
                if seen.insert(form_key.clone()) {
                    books.push(RawRecord {
                        mod_key: plugin.mod_key.clone(),
                        form_key,
                        value,
                    });
                }
            }
            for spell in plugin.spells {
                spells.entry(spell.form_key.clone()).or_insert(spell);
            }
            for effect in plugin.magic_effects {
                magic_effects.entry(effect.form_key.clone()).or_insert(effect);
            }
        }

        tracing::debug!(
            plugins = order.len(),
            books = books.len(),
            spells = spells.len(),
            magic_effects = magic_effects.len(),
            "Indexed load order"
        );
        Ok(Self {
            plugins: order,
            books,
            spells,
            magic_effects,
        })
    }

    /// Active plugins, lowest priority first.
    pub fn plugins(&self) -> &[ModKey] {
        &self.plugins
    }

    fn form_key_of(value: &Value) -> Option<FormKey> {
        value.get("form_key")?.as_str()?.parse().ok()
    }
}
impl Lookup<Spell> for MemoryLoadOrder {
    fn lookup(&self, key: &FormKey) -> Option<&Spell> {
        self.spells.get(key)
    }
}
impl Lookup<MagicEffect> for MemoryLoadOrder {
    fn lookup(&self, key: &FormKey) -> Option<&MagicEffect> {
        self.magic_effects.get(key)
    }
}
impl LoadOrder for MemoryLoadOrder {
    fn has_mod(&self, mod_key: &ModKey) -> bool {
        self.plugins.contains(mod_key)
    }

    fn winning_books(&self) -> Box<dyn Iterator<Item = WinningContext<'_, Book>> + '_> {
        Box::new(self.books.iter().map(|raw| {
            let record = Book::deserialize(&raw.value).or_raise(|| ErrorKind::Decode {
                plugin: raw.mod_key.clone(),
                form_key: raw.form_key.clone(),
            });
            WinningContext::new(&raw.mod_key, &raw.form_key, record)
        }))
    }
}
