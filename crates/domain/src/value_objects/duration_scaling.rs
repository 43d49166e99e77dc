//! Per-category growth of effect durations and shield values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Duration growth for an effect type no category lists.
pub const FALLBACK_DURATION_PER_LEVEL: f64 = 0.1;

/// Shield value growth when the table has no usable `shield` category.
pub const DEFAULT_SHIELD_VALUE_PER_LEVEL: f64 = 8.0;

/// Name of the category whose `value_per_level` drives shield scaling.
pub const SHIELD_CATEGORY: &str = "shield";

/// A named bucket of effect types sharing one growth rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationCategory {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_per_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_per_level: Option<f64>,
}

impl DurationCategory {
    pub fn with_duration<I, S>(types: I, duration_per_level: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            duration_per_level: Some(duration_per_level),
            value_per_level: None,
        }
    }

    pub fn with_value<I, S>(types: I, value_per_level: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            duration_per_level: None,
            value_per_level: Some(value_per_level),
        }
    }
}

/// Category name to category definition, in authored order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationScalingTable {
    categories: IndexMap<String, DurationCategory>,
}

impl DurationScalingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six categories shipped with the editor.
    pub fn builtin() -> Self {
        Self::new()
            .with_category(
                "hard_cc",
                DurationCategory::with_duration(
                    ["stun", "freeze", "sleep", "petrify", "knockdown"],
                    0.1,
                ),
            )
            .with_category(
                "soft_cc",
                DurationCategory::with_duration(
                    ["slow", "root", "blind", "silence", "taunt"],
                    0.2,
                ),
            )
            .with_category(
                "dot",
                DurationCategory::with_duration(["burn", "poison", "bleed", "curse"], 0.3),
            )
            .with_category(
                "buff",
                DurationCategory::with_duration(
                    ["atk_up", "def_up", "mag_up", "spd_up", "regen", "haste"],
                    0.5,
                ),
            )
            .with_category(
                "debuff",
                DurationCategory::with_duration(
                    ["atk_down", "def_down", "mag_down", "spd_down", "vulnerable"],
                    0.3,
                ),
            )
            .with_category(
                SHIELD_CATEGORY,
                DurationCategory::with_value(["shield", "barrier"], DEFAULT_SHIELD_VALUE_PER_LEVEL),
            )
    }

    pub fn with_category(mut self, name: impl Into<String>, category: DurationCategory) -> Self {
        self.categories.insert(name.into(), category);
        self
    }

    pub fn get(&self, name: &str) -> Option<&DurationCategory> {
        self.categories.get(name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DurationCategory)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Categories listing `effect_type`, in table order.
    pub fn categories_for(&self, effect_type: &str) -> Vec<&str> {
        self.iter()
            .filter(|(_, c)| c.types.iter().any(|t| t == effect_type))
            .map(|(name, _)| name)
            .collect()
    }
}

/// Effect type to duration rate, precomputed from a [`DurationScalingTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct DurationRateIndex {
    rates: HashMap<String, f64>,
    shield_value_per_level: f64,
}

impl DurationRateIndex {
    /// Build the index. When a type is listed by several categories the first
    /// one in authored order wins.
    /// Categories without a `duration_per_level` contribute no rates.
    pub fn build(table: &DurationScalingTable) -> Self {
        let mut rates = HashMap::new();
        for (_, category) in table.iter() {
            let Some(rate) = category.duration_per_level else {
                continue;
            };
            for effect_type in &category.types {
                rates.entry(effect_type.clone()).or_insert(rate);
            }
        }

        let shield_value_per_level = table
            .get(SHIELD_CATEGORY)
            .and_then(|c| c.value_per_level)
            .unwrap_or(DEFAULT_SHIELD_VALUE_PER_LEVEL);

        Self {
            rates,
            shield_value_per_level,
        }
    }

    /// Duration growth for `effect_type`; unlisted or missing types use
    /// [`FALLBACK_DURATION_PER_LEVEL`].
    pub fn duration_rate(&self, effect_type: Option<&str>) -> f64 {
        effect_type
            .and_then(|t| self.rates.get(t))
            .copied()
            .unwrap_or(FALLBACK_DURATION_PER_LEVEL)
    }

    pub fn shield_value_per_level(&self) -> f64 {
        self.shield_value_per_level
    }
}

impl Default for DurationRateIndex {
    fn default() -> Self {
        Self::build(&DurationScalingTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_categories() {
        let table = DurationScalingTable::builtin();
        assert_eq!(table.len(), 6);
        assert!(table.get(SHIELD_CATEGORY).is_some());
    }

    #[test]
    fn builtin_lists_each_type_once() {
        let table = DurationScalingTable::builtin();
        for (_, category) in table.iter() {
            for effect_type in &category.types {
                assert_eq!(
                    table.categories_for(effect_type).len(),
                    1,
                    "{effect_type} listed in several categories"
                );
            }
        }
    }

    #[test]
    fn index_resolves_listed_types() {
        let index = DurationRateIndex::build(&DurationScalingTable::builtin());
        assert_eq!(index.duration_rate(Some("stun")), 0.1);
        assert_eq!(index.duration_rate(Some("slow")), 0.2);
        assert_eq!(index.duration_rate(Some("atk_up")), 0.5);
    }

    #[test]
    fn unlisted_or_missing_type_uses_fallback() {
        let index = DurationRateIndex::default();
        assert_eq!(index.duration_rate(Some("confuse")), FALLBACK_DURATION_PER_LEVEL);
        assert_eq!(index.duration_rate(None), FALLBACK_DURATION_PER_LEVEL);
    }

    #[test]
    fn shield_rate_comes_from_shield_category() {
        let table = DurationScalingTable::new()
            .with_category(SHIELD_CATEGORY, DurationCategory::with_value(["shield"], 12.0));
        let index = DurationRateIndex::build(&table);
        assert_eq!(index.shield_value_per_level(), 12.0);
        // Value-only categories never become duration rates.
        assert_eq!(index.duration_rate(Some("shield")), FALLBACK_DURATION_PER_LEVEL);
    }

    #[test]
    fn shield_rate_defaults_when_category_missing() {
        let index = DurationRateIndex::build(&DurationScalingTable::new());
        assert_eq!(index.shield_value_per_level(), DEFAULT_SHIELD_VALUE_PER_LEVEL);
    }

    #[test]
    fn first_category_wins_for_duplicate_type() {
        let table = DurationScalingTable::new()
            .with_category("a_first", DurationCategory::with_duration(["stun"], 0.4))
            .with_category("b_second", DurationCategory::with_duration(["stun"], 0.9));
        let index = DurationRateIndex::build(&table);
        assert_eq!(index.duration_rate(Some("stun")), 0.4);
    }

    #[test]
    fn duplicate_type_resolves_in_file_order() {
        let json = r#"{
            "zz_slow_cc": {"types": ["stun"], "duration_per_level": 0.7},
            "aa_fast_cc": {"types": ["stun"], "duration_per_level": 0.2}
        }"#;
        let table: DurationScalingTable = serde_json::from_str(json).expect("valid table");
        assert_eq!(table.categories_for("stun"), vec!["zz_slow_cc", "aa_fast_cc"]);
        let index = DurationRateIndex::build(&table);
        assert_eq!(index.duration_rate(Some("stun")), 0.7);
    }

    #[test]
    fn table_deserializes_from_plain_object() {
        let json = r#"{
            "hard_cc": {"types": ["stun"], "duration_per_level": 0.25},
            "shield": {"types": ["shield"], "value_per_level": 10}
        }"#;
        let table: DurationScalingTable = serde_json::from_str(json).expect("valid table");
        let index = DurationRateIndex::build(&table);
        assert_eq!(index.duration_rate(Some("stun")), 0.25);
        assert_eq!(index.shield_value_per_level(), 10.0);
    }
}
