use super::FormKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub form_key: FormKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Effects in the order they appear on the record.
    #[serde(default)]
    pub effects: Vec<Effect>,
}

/// One entry of a spell's effect list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Null links are stored as `None`.
    #[serde(default)]
    pub base_effect: Option<FormKey>,
    #[serde(default)]
    pub data: Option<EffectData>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectData {
    #[serde(default)]
    pub magnitude: f32,
    #[serde(default)]
    pub area: u32,
    /// Seconds; zero for instantaneous effects.
    #[serde(default)]
    pub duration: u32,
}
