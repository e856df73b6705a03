//! School and level of a spell.
//!
//! A spell's school and level are those of its dominant effect: the one with
//! the highest cost, estimated the same way the game prices spells.

use spelltome_loadorder::LinkCache;
use spelltome_records::models::{CastType, EffectData, MagicEffect, MagicSkill, Spell};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Display names for each [`Level`], lowest first.
pub const LEVEL_NAMES: [&str; 5] = ["Novice", "Apprentice", "Adept", "Expert", "Master"];

/// Minimum skill levels used by vanilla magic effects.
const EXPECTED_MINIMUM_SKILL_LEVELS: [u32; 5] = [0, 25, 50, 75, 100];

/// Non-concentration effects with no duration are priced as lasting this long.
const DEFAULT_DURATION: u32 = 10;

/// Skill difficulty tier, always in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);
impl Level {
    pub const NOVICE: Level = Level(0);
    pub const MASTER: Level = Level(4);

    /// Buckets a minimum skill level into 25-point tiers, saturating at
    /// [`MASTER`](Self::MASTER).
    pub fn from_minimum_skill_level(minimum_skill_level: u32) -> Self {
        let tier = (minimum_skill_level / 25).min(u32::from(Self::MASTER.0));
        // Infallible: clamped to 4 above.
        Self(u8::try_from(tier).unwrap_or(Self::MASTER.0))
    }

    pub fn tier(&self) -> u8 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        LEVEL_NAMES[usize::from(self.0)]
    }
}
impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Display name of a school of magic; `"None"` for any other skill.
pub fn school_name(skill: MagicSkill) -> &'static str {
    match skill {
        MagicSkill::Alteration => "Alteration",
        MagicSkill::Conjuration => "Conjuration",
        MagicSkill::Destruction => "Destruction",
        MagicSkill::Illusion => "Illusion",
        MagicSkill::Restoration => "Restoration",
        MagicSkill::None | MagicSkill::Other => "None",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellInfo {
    pub school: MagicSkill,
    pub level: Level,
}
impl SpellInfo {
    pub fn school_name(&self) -> &'static str {
        school_name(self.school)
    }

    pub fn level_name(&self) -> &'static str {
        self.level.name()
    }
}

/// Estimated cost of one effect entry.
///
/// `base_cost × magnitude^1.1 × duration^1.1`, where concentration effects
/// ignore duration and a zero duration counts as [`DEFAULT_DURATION`].
pub fn effect_cost(base: &MagicEffect, data: &EffectData) -> f64 {
    let duration_factor = match base.cast_type {
        CastType::Concentration => 1.0,
        _ => {
            let duration = if data.duration == 0 { DEFAULT_DURATION } else { data.duration };
            f64::from(duration).powf(1.1)
        },
    };
    f64::from(base.base_cost) * f64::from(data.magnitude).powf(1.1) * duration_factor
}

/// The base effect of the costliest effect entry on `spell`.
///
/// Entries without data or with a base effect that doesn't resolve are
/// skipped. On equal cost the earlier entry wins.
pub fn dominant_effect<'a, C: LinkCache + ?Sized>(spell: &Spell, cache: &'a C) -> Option<&'a MagicEffect> {
    let mut max_cost = -1.0;
    let mut dominant = None;
    for effect in &spell.effects {
        let Some(data) = &effect.data else {
            continue;
        };
        let Some(base) = effect.base_effect.as_ref().and_then(|key| cache.magic_effect(key)) else {
            continue;
        };
        let cost = effect_cost(base, data);
        if cost > max_cost {
            max_cost = cost;
            dominant = Some(base);
        }
    }
    dominant
}

/// School and level of `spell`, or `None` if none of its effects resolve.
pub fn resolve_spell_info<C: LinkCache + ?Sized>(spell: &Spell, cache: &C) -> Option<SpellInfo> {
    let base = dominant_effect(spell, cache)?;
    if !EXPECTED_MINIMUM_SKILL_LEVELS.contains(&base.minimum_skill_level) {
        tracing::warn!(
            magic_effect = %base.form_key,
            minimum_skill_level = base.minimum_skill_level,
            "Unexpected minimum skill level for magic effect"
        );
    }
    Some(SpellInfo {
        school: base.magic_skill,
        level: Level::from_minimum_skill_level(base.minimum_skill_level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};
    use spelltome_loadorder::MemoryLoadOrder;
    use spelltome_records::models::FormKey;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn cache() -> MemoryLoadOrder {
        MemoryLoadOrder::from_value(json!({
            "plugins": [{
                "mod_key": "Skyrim.esm",
                "magic_effects": [
                    { "form_key": "000001:Skyrim.esm", "base_cost": 5.0, "cast_type": "concentration",
                      "minimum_skill_level": 0, "magic_skill": "Destruction" },
                    { "form_key": "000002:Skyrim.esm", "base_cost": 5.0, "cast_type": "fire_and_forget",
                      "minimum_skill_level": 50, "magic_skill": "Alteration" },
                    { "form_key": "000003:Skyrim.esm", "base_cost": 5.0, "cast_type": "fire_and_forget",
                      "minimum_skill_level": 75, "magic_skill": "Illusion" },
                    { "form_key": "000004:Skyrim.esm", "base_cost": 1.0, "cast_type": "fire_and_forget",
                      "minimum_skill_level": 40, "magic_skill": "Restoration" },
                    { "form_key": "000005:Skyrim.esm", "base_cost": 1.0, "cast_type": "fire_and_forget",
                      "minimum_skill_level": 250, "magic_skill": "HeavyArmor" }
                ]
            }]
        }))
        .unwrap()
    }

    fn spell(effects: Value) -> Spell {
        serde_json::from_value(json!({ "form_key": "000100:Skyrim.esm", "name": "Test", "effects": effects })).unwrap()
    }

    fn effect(base: &str, magnitude: f32, duration: u32) -> Value {
        json!({ "base_effect": base, "data": { "magnitude": magnitude, "area": 0, "duration": duration } })
    }

    fn key(s: &str) -> FormKey {
        s.parse().unwrap()
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);
    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` and returns everything it logged at warning level or above.
    fn warnings(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[rstest]
    #[case(0, 0, "Novice")]
    #[case(24, 0, "Novice")]
    #[case(25, 1, "Apprentice")]
    #[case(50, 2, "Adept")]
    #[case(74, 2, "Adept")]
    #[case(75, 3, "Expert")]
    #[case(100, 4, "Master")]
    #[case(101, 4, "Master")]
    #[case(u32::MAX, 4, "Master")]
    fn test_level_is_clamped(#[case] minimum_skill_level: u32, #[case] tier: u8, #[case] name: &str) {
        let level = Level::from_minimum_skill_level(minimum_skill_level);
        assert_eq!(level.tier(), tier);
        assert_eq!(level.name(), name);
        assert_eq!(level.to_string(), name);
    }

    #[rstest]
    #[case(MagicSkill::Alteration, "Alteration")]
    #[case(MagicSkill::Conjuration, "Conjuration")]
    #[case(MagicSkill::Destruction, "Destruction")]
    #[case(MagicSkill::Illusion, "Illusion")]
    #[case(MagicSkill::Restoration, "Restoration")]
    #[case(MagicSkill::None, "None")]
    #[case(MagicSkill::Other, "None")]
    fn test_school_names(#[case] skill: MagicSkill, #[case] expected: &str) {
        assert_eq!(school_name(skill), expected);
    }

    #[test]
    fn test_duration_outweighs_concentration() {
        let cache = cache();
        let spell = spell(json!([
            effect("000001:Skyrim.esm", 10.0, 0),
            effect("000002:Skyrim.esm", 10.0, 10),
        ]));
        let concentration = cache.magic_effect(&key("000001:Skyrim.esm")).unwrap();
        let timed = cache.magic_effect(&key("000002:Skyrim.esm")).unwrap();
        let data = |duration| EffectData { magnitude: 10.0, area: 0, duration };
        assert!(effect_cost(timed, &data(10)) > effect_cost(concentration, &data(10)));
        assert!((effect_cost(concentration, &data(10)) - 5.0 * 10f64.powf(1.1)).abs() < 1e-9);

        let info = resolve_spell_info(&spell, &cache).unwrap();
        assert_eq!(info.school, MagicSkill::Alteration);
        assert_eq!(info.level_name(), "Adept");
    }

    #[test]
    fn test_zero_duration_costs_as_ten() {
        let cache = cache();
        let base = cache.magic_effect(&key("000002:Skyrim.esm")).unwrap();
        let zero = EffectData { magnitude: 3.0, area: 0, duration: 0 };
        let ten = EffectData { magnitude: 3.0, area: 0, duration: 10 };
        assert_eq!(effect_cost(base, &zero), effect_cost(base, &ten));
    }

    #[test]
    fn test_ties_keep_first_effect() {
        let cache = cache();
        // Same base cost, magnitude and (effective) duration.
        let spell = spell(json!([
            effect("000003:Skyrim.esm", 10.0, 0),
            effect("000002:Skyrim.esm", 10.0, 10),
        ]));
        let dominant = dominant_effect(&spell, &cache).unwrap();
        assert_eq!(dominant.form_key, key("000003:Skyrim.esm"));
        assert_eq!(resolve_spell_info(&spell, &cache).unwrap().school_name(), "Illusion");
    }

    #[test]
    fn test_skips_effects_without_data_or_base() {
        let cache = cache();
        let spell = spell(json!([
            { "base_effect": "000003:Skyrim.esm" },
            effect("00BEEF:Skyrim.esm", 100.0, 100),
            { "data": { "magnitude": 100.0, "duration": 100 } },
            effect("000004:Skyrim.esm", 1.0, 1),
        ]));
        let info = resolve_spell_info(&spell, &cache).unwrap();
        assert_eq!(info.school, MagicSkill::Restoration);
        // 40 isn't a vanilla threshold, but still buckets.
        assert_eq!(info.level, Level::from_minimum_skill_level(25));
    }

    #[test]
    fn test_no_resolvable_effect_means_no_info() {
        let cache = cache();
        assert_eq!(resolve_spell_info(&spell(json!([])), &cache), None);
        assert_eq!(resolve_spell_info(&spell(json!([effect("00BEEF:Skyrim.esm", 1.0, 1)])), &cache), None);
    }

    #[test]
    fn test_unknown_school_and_excessive_level() {
        let cache = cache();
        let info = resolve_spell_info(&spell(json!([effect("000005:Skyrim.esm", 1.0, 1)])), &cache).unwrap();
        assert_eq!(info.school_name(), "None");
        assert_eq!(info.level, Level::MASTER);
    }

    #[rstest]
    #[case("000004:Skyrim.esm", true)]
    #[case("000005:Skyrim.esm", true)]
    #[case("000002:Skyrim.esm", false)]
    #[case("000001:Skyrim.esm", false)]
    fn test_warns_on_unexpected_minimum_skill_level(#[case] base: &str, #[case] warned: bool) {
        let cache = cache();
        let spell = spell(json!([effect(base, 1.0, 1)]));
        let logs = warnings(|| {
            assert!(resolve_spell_info(&spell, &cache).is_some());
        });
        assert_eq!(logs.contains("Unexpected minimum skill level"), warned, "{logs}");
        assert_eq!(logs.contains(base), warned, "{logs}");
    }
}
