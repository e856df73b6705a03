use super::{FormKey, ModKey, ScriptEntry};
use serde::{Deserialize, Serialize};

/// A book record, as found in (or written to) a plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub form_key: FormKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    /// Display name shown in game; books without one are never renamed.
    #[serde(default)]
    pub name: Option<String>,
    /// `None` when the record has no keyword list at all, which is distinct
    /// from an empty list on the wire but treated the same here.
    #[serde(default)]
    pub keywords: Option<Vec<FormKey>>,
    /// What reading the book grants.
    #[serde(default)]
    pub teaches: Option<Teaches>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<ScriptEntry>,
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub weight: f32,
}
impl Book {
    /// `false` when the record carries no keywords.
    pub fn has_keyword(&self, keyword: &FormKey) -> bool {
        self.keywords.as_ref().is_some_and(|keywords| keywords.contains(keyword))
    }

    /// The plugin that originally defined this book.
    pub fn source_plugin(&self) -> &ModKey {
        self.form_key.mod_key()
    }

    /// The direct spell link, if the book teaches a spell and the link is set.
    pub fn taught_spell(&self) -> Option<&FormKey> {
        match &self.teaches {
            Some(Teaches::Spell { spell }) => spell.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Teaches {
    /// The link may be null, e.g. when a mod moves teaching into a script.
    Spell {
        #[serde(default)]
        spell: Option<FormKey>,
    },
    /// Skill books; the actor value name is kept verbatim.
    Skill { skill: String },
    Perk { perk: FormKey },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyValue;
    use crate::{BETTER_SPELL_LEARNING, SPELL_TOME_KEYWORD};
    use serde_json::json;

    #[test]
    fn test_decodes_exported_book() {
        let book: Book = serde_json::from_value(json!({
            "form_key": "0A26EA:Skyrim.esm",
            "editor_id": "SpellTomeFirebolt",
            "name": "Spell Tome: Firebolt",
            "keywords": ["0937A5:Skyrim.esm"],
            "teaches": { "type": "spell", "spell": "012FCD:Skyrim.esm" },
            "scripts": [{
                "name": "SpellTomeReadScript",
                "properties": [
                    { "name": "SpellLearned", "type": "object", "object": "012FCD:Skyrim.esm" },
                    { "name": "Silent", "type": "bool", "value": true },
                    { "name": "Lookup", "type": "struct", "members": [] }
                ]
            }],
            "value": 115,
            "weight": 1.0
        }))
        .unwrap();

        assert!(book.has_keyword(&SPELL_TOME_KEYWORD));
        assert_eq!(book.source_plugin().to_string(), "Skyrim.esm");
        assert_eq!(book.taught_spell().map(ToString::to_string).as_deref(), Some("012FCD:Skyrim.esm"));
        let properties = &book.scripts[0].properties;
        assert!(matches!(properties[0].value.as_object(), Some(key) if key.id() == 0x012FCD));
        assert_eq!(properties[1].value, PropertyValue::Bool { value: true });
        assert_eq!(properties[2].value, PropertyValue::Unknown);
    }

    #[test]
    fn test_missing_keywords_never_match() {
        let book: Book = serde_json::from_value(json!({ "form_key": "000D62:Skyrim.esm" })).unwrap();
        assert_eq!(book.keywords, None);
        assert!(!book.has_keyword(&SPELL_TOME_KEYWORD));
        assert_eq!(book.taught_spell(), None);
        assert_ne!(book.source_plugin(), &BETTER_SPELL_LEARNING);
    }

    #[test]
    fn test_null_spell_link() {
        for teaches in [json!({ "type": "spell", "spell": null }), json!({ "type": "spell" })] {
            let book: Book =
                serde_json::from_value(json!({ "form_key": "0A26E6:Skyrim.esm", "teaches": teaches })).unwrap();
            assert_eq!(book.teaches, Some(Teaches::Spell { spell: None }));
            assert_eq!(book.taught_spell(), None);
        }
    }
}
