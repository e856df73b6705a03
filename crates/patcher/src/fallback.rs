//! Finds the spell a tome teaches through its script, for load orders where
//! tomes no longer link to their spell directly.

use spelltome_loadorder::LinkCache;
use spelltome_records::models::{Book, Spell};
use spelltome_records::{SPELL_LEARNED_PROPERTY, SPELL_TOME_SCRIPT};

/// Resolves the `SpellLearned` object property of the book's
/// `SpellTomeReadScript` as a spell.
///
/// When several matching properties resolve, the last one wins.
pub fn find_taught_spell<'a, C: LinkCache + ?Sized>(book: &Book, cache: &'a C) -> Option<&'a Spell> {
    book.scripts
        .iter()
        .filter(|script| script.name == SPELL_TOME_SCRIPT)
        .flat_map(|script| script.properties_named(SPELL_LEARNED_PROPERTY))
        .filter_map(|property| property.value.as_object())
        .filter_map(|object| cache.spell(object))
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use spelltome_loadorder::MemoryLoadOrder;

    fn cache() -> MemoryLoadOrder {
        MemoryLoadOrder::from_value(json!({
            "plugins": [{
                "mod_key": "Skyrim.esm",
                "spells": [
                    { "form_key": "012FCD:Skyrim.esm", "name": "Firebolt" },
                    { "form_key": "012FD0:Skyrim.esm", "name": "Flames" }
                ],
                "magic_effects": [{ "form_key": "012F03:Skyrim.esm" }]
            }]
        }))
        .unwrap()
    }

    fn book(scripts: Value) -> Book {
        serde_json::from_value(json!({ "form_key": "0A26EA:Skyrim.esm", "name": "Tome", "scripts": scripts })).unwrap()
    }

    fn spell_learned(object: &str) -> Value {
        json!({ "name": "SpellLearned", "type": "object", "object": object })
    }

    fn found(book: &Book) -> Option<String> {
        let cache = cache();
        find_taught_spell(book, &cache).and_then(|spell| spell.name.clone())
    }

    #[test]
    fn test_finds_spell_learned_property() {
        let book = book(json!([{
            "name": "SpellTomeReadScript",
            "properties": [spell_learned("012FCD:Skyrim.esm")]
        }]));
        assert_eq!(found(&book).as_deref(), Some("Firebolt"));
    }

    #[test]
    fn test_last_match_wins() {
        let book = book(json!([
            { "name": "SpellTomeReadScript", "properties": [spell_learned("012FCD:Skyrim.esm")] },
            { "name": "SpellTomeReadScript", "properties": [
                spell_learned("012FD0:Skyrim.esm"),
                // Dangling and non-spell references don't undo an earlier match.
                spell_learned("00BEEF:Skyrim.esm"),
                spell_learned("012F03:Skyrim.esm")
            ] }
        ]));
        assert_eq!(found(&book).as_deref(), Some("Flames"));
    }

    #[test]
    fn test_ignores_other_scripts_and_property_kinds() {
        let book = book(json!([
            { "name": "SomeOtherScript", "properties": [spell_learned("012FCD:Skyrim.esm")] },
            { "name": "spelltomereadscript", "properties": [spell_learned("012FCD:Skyrim.esm")] },
            { "name": "SpellTomeReadScript", "properties": [
                { "name": "SpellLearned", "type": "object_list", "objects": ["012FCD:Skyrim.esm"] },
                { "name": "SpellLearned", "type": "string", "value": "012FCD:Skyrim.esm" },
                { "name": "LearnedSpell", "type": "object", "object": "012FCD:Skyrim.esm" }
            ] }
        ]));
        assert_eq!(found(&book), None);
    }

    #[test]
    fn test_no_scripts() {
        assert_eq!(found(&book(json!([]))), None);
    }
}
