mod book;
mod form_key;
mod magic_effect;
mod mod_key;
mod script;
mod spell;

pub use self::book::{Book, Teaches};
pub use self::form_key::FormKey;
pub use self::magic_effect::{CastType, MagicEffect, MagicSkill};
pub use self::mod_key::{ModKey, ModKind};
pub use self::script::{PropertyValue, ScriptEntry, ScriptProperty};
pub use self::spell::{Effect, EffectData, Spell};
