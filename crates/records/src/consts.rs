//! Well-known plugins and records.

use crate::models::{FormKey, ModKey, ModKind};

pub const SKYRIM: ModKey = ModKey::from_static("Skyrim", ModKind::Master);

/// `VendorItemSpellTome`: marks books that teach a spell when read.
pub const SPELL_TOME_KEYWORD: FormKey = FormKey::new(0x0937A5, SKYRIM);

/// Replaces the vanilla "teaches" link on spell tomes with a script that
/// teaches the spell over time, leaving the book without a direct link.
pub const BETTER_SPELL_LEARNING: ModKey = ModKey::from_static("Better Spell Learning", ModKind::Plugin);

/// Script attached to spell tomes by [`BETTER_SPELL_LEARNING`].
pub const SPELL_TOME_SCRIPT: &str = "SpellTomeReadScript";
/// Object property on [`SPELL_TOME_SCRIPT`] that points at the taught spell.
pub const SPELL_LEARNED_PROPERTY: &str = "SpellLearned";
