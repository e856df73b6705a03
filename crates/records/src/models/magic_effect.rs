use super::FormKey;
use serde::{Deserialize, Serialize};

/// How a magic effect is delivered once cast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastType {
    ConstantEffect,
    #[default]
    FireAndForget,
    /// Held for as long as the caster channels it; duration is meaningless.
    Concentration,
    Scroll,
}

/// The skill (actor value) a magic effect trains.
///
/// Only the five schools of magic are named; every other actor value
/// decodes to [`Other`](Self::Other).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagicSkill {
    Alteration,
    Conjuration,
    Destruction,
    Illusion,
    Restoration,
    #[default]
    None,
    #[serde(other)]
    Other,
}

/// Shared definition of an effect, referenced by the effect entries of
/// spells, scrolls, potions and enchantments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagicEffect {
    pub form_key: FormKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub base_cost: f32,
    #[serde(default)]
    pub cast_type: CastType,
    /// Skill level the caster needs; vanilla data only uses multiples of 25.
    #[serde(default)]
    pub minimum_skill_level: u32,
    #[serde(default)]
    pub magic_skill: MagicSkill,
}
