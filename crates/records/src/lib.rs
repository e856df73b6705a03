//! Plugin record types.
//!
//! Only the record kinds (and the fields of them) that spell tome renaming
//! reads are modelled: books, spells and magic effects, plus the
//! [`FormKey`](models::FormKey)/[`ModKey`](models::ModKey) identifiers that
//! link them together. All types (de)serialize to the JSON export format
//! consumed by `spelltome-loadorder`.

mod consts;
pub mod error;
pub mod models;

pub use crate::consts::{BETTER_SPELL_LEARNING, SKYRIM, SPELL_LEARNED_PROPERTY, SPELL_TOME_KEYWORD, SPELL_TOME_SCRIPT};
