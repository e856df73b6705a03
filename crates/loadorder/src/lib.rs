//! Load order queries and record lookup.
//!
//! The renaming pass never touches plugin files directly. It asks three
//! questions of a load order, expressed by the [`LoadOrder`] trait:
//!
//! - which version of each book wins ([`LoadOrder::winning_books`]),
//! - what a [`FormKey`] points at ([`Lookup`], bundled as [`LinkCache`]),
//! - whether a given plugin is active ([`LoadOrder::has_mod`]).
//!
//! [`MemoryLoadOrder`] answers them from a JSON export of the active plugins.
//! Changes are collected into a [`Patch`], which is written out once the pass
//! is over.

pub mod error;
mod memory;
mod patch;

pub use crate::memory::{LoadOrderExport, MemoryLoadOrder, PluginExport};
pub use crate::patch::Patch;
use crate::error::Result;
use spelltome_records::models::{Book, FormKey, MagicEffect, ModKey, Spell};

/// Resolves a reference to the winning version of a record of kind `R`.
///
/// Returns `None` for null, dangling, or wrongly-typed references; callers
/// treat all of those the same.
pub trait Lookup<R> {
    fn lookup(&self, key: &FormKey) -> Option<&R>;
}

/// Every record kind the renaming pass needs to follow links to.
pub trait LinkCache: Lookup<Spell> + Lookup<MagicEffect> {
    fn spell(&self, key: &FormKey) -> Option<&Spell> {
        Lookup::<Spell>::lookup(self, key)
    }

    fn magic_effect(&self, key: &FormKey) -> Option<&MagicEffect> {
        Lookup::<MagicEffect>::lookup(self, key)
    }
}
impl<T: Lookup<Spell> + Lookup<MagicEffect>> LinkCache for T {}

/// A prioritized set of plugins.
pub trait LoadOrder: LinkCache {
    /// Whether `mod_key` is part of the load order.
    fn has_mod(&self, mod_key: &ModKey) -> bool;

    /// Every book in the load order exactly once, at its winning version,
    /// highest priority plugin first.
    ///
    /// Records may be decoded lazily, so each item carries its own
    /// [`Result`]; a malformed record does not stop iteration.
    fn winning_books(&self) -> Box<dyn Iterator<Item = WinningContext<'_, Book>> + '_>;
}

/// The winning version of a record along with where it came from.
pub struct WinningContext<'a, R> {
    mod_key: &'a ModKey,
    form_key: &'a FormKey,
    record: Result<R>,
}
impl<'a, R> WinningContext<'a, R> {
    pub fn new(mod_key: &'a ModKey, form_key: &'a FormKey, record: Result<R>) -> Self {
        Self { mod_key, form_key, record }
    }

    /// The plugin providing the winning version (not necessarily the one
    /// that defined the record).
    pub fn mod_key(&self) -> &'a ModKey {
        self.mod_key
    }

    pub fn form_key(&self) -> &'a FormKey {
        self.form_key
    }

    pub fn into_record(self) -> Result<R> {
        self.record
    }
}
