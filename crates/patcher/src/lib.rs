//! Spell tome renaming.
//!
//! Walks the winning version of every book in a [`LoadOrder`], and for each
//! spell tome works out which spell it teaches, that spell's school and
//! level, and renames the book according to a [`RenameTemplate`]:
//!
//! 1. **Spell lookup**: the book's direct spell link, or (when
//!    `Better Spell Learning.esp` is loaded) the spell referenced by its
//!    script, see [`find_taught_spell`].
//! 2. **School and level**: taken from the spell's costliest effect, see
//!    [`resolve_spell_info`]. Only computed when the template asks for them.
//! 3. **Rename**: the template is rendered and the new name written to an
//!    override in the output [`Patch`].
//!
//! The entry point is [`run`], which never aborts: per-book failures are
//! logged and collected in the returned [`PatchReport`].
//!
//! [`LoadOrder`]: spelltome_loadorder::LoadOrder
//! [`Patch`]: spelltome_loadorder::Patch

pub mod error;
mod fallback;
mod run;
mod spell_info;
mod template;

pub use crate::fallback::find_taught_spell;
pub use crate::run::{BookOutcome, PatchReport, Rename, SkipReason, patch_book, run};
pub use crate::spell_info::{LEVEL_NAMES, Level, SpellInfo, dominant_effect, effect_cost, resolve_spell_info, school_name};
pub use crate::template::{
    LEVEL_PLACEHOLDER, PLUGIN_PLACEHOLDER, Placeholders, RenameTemplate, SCHOOL_PLACEHOLDER, SPELL_PLACEHOLDER,
};
