//! Skill entity - Class abilities as authored in the design data
//!
//! Skills are read from `classes/<class>/skills.json`. The tier is kept as
//! the raw string from the file so that unknown tiers survive a round trip
//! and are resolved through the scaling fallbacks instead of failing to load.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A usable ability belonging to one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Power bracket name (see [`SkillTier`] for the recognised ones)
    #[serde(default, deserialize_with = "null_as_default")]
    pub tier: String,
    /// Flat damage/heal baseline; 0 means the skill has no flat component
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_power: f64,
    /// Percentage of a reference stat (ATK, MAG, ...) the skill scales with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_percent: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mana_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_level: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_duration: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buff_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buff_duration: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debuff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debuff_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debuff_duration: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shield_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shield_duration: Option<f64>,
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            tier: tier.into(),
            base_power: 0.0,
            scaling_percent: None,
            mana_cost: 0.0,
            cooldown: None,
            target: None,
            element: None,
            unlock_level: None,
            effect: None,
            effect_duration: None,
            buff: None,
            buff_value: None,
            buff_duration: None,
            debuff: None,
            debuff_value: None,
            debuff_duration: None,
            shield_value: None,
            shield_duration: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_base_power(mut self, base_power: f64) -> Self {
        self.base_power = base_power;
        self
    }

    pub fn with_scaling_percent(mut self, scaling_percent: f64) -> Self {
        self.scaling_percent = Some(scaling_percent);
        self
    }

    pub fn with_mana_cost(mut self, mana_cost: f64) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    pub fn with_cooldown(mut self, cooldown: f64) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>, duration: f64) -> Self {
        self.effect = Some(effect.into());
        self.effect_duration = Some(duration);
        self
    }

    pub fn with_buff(mut self, buff: impl Into<String>, value: f64, duration: f64) -> Self {
        self.buff = Some(buff.into());
        self.buff_value = Some(value);
        self.buff_duration = Some(duration);
        self
    }

    pub fn with_debuff(mut self, debuff: impl Into<String>, value: f64, duration: f64) -> Self {
        self.debuff = Some(debuff.into());
        self.debuff_value = Some(value);
        self.debuff_duration = Some(duration);
        self
    }

    pub fn with_shield(mut self, value: f64, duration: f64) -> Self {
        self.shield_value = Some(value);
        self.shield_duration = Some(duration);
        self
    }

    /// The tier as a recognised bracket, if it is one.
    pub fn known_tier(&self) -> Option<SkillTier> {
        self.tier.parse().ok()
    }
}

/// Accepts `null` as well as a missing key: numbers read as 0 and text as an
/// empty string, so an unset tier goes through the scaling fallbacks.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Skill power brackets, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    Filler,
    Basic,
    Standard,
    Strong,
    Signature,
    Ultimate,
}

impl SkillTier {
    pub const ALL: [SkillTier; 6] = [
        Self::Filler,
        Self::Basic,
        Self::Standard,
        Self::Strong,
        Self::Signature,
        Self::Ultimate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filler => "filler",
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Strong => "strong",
            Self::Signature => "signature",
            Self::Ultimate => "ultimate",
        }
    }

}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filler" => Ok(Self::Filler),
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "strong" => Ok(Self::Strong),
            "signature" => Ok(Self::Signature),
            "ultimate" => Ok(Self::Ultimate),
            _ => Err(DomainError::parse(format!("Unknown skill tier: {}", s))),
        }
    }
}

/// The parsed contents of a class skills file.
///
/// Only the `skills` array is interpreted; `_meta` and any other top-level
/// keys are ignored here and preserved by the verbatim read/write paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsDocument {
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Tier and free-text filter applied to a class's skill list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilter {
    pub tier: Option<String>,
    pub search: Option<String>,
}

impl SkillFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Whether `skill` passes the filter. Blank criteria match everything.
    pub fn matches(&self, skill: &Skill) -> bool {
        let tier_ok = match self.tier.as_deref().map(str::trim) {
            Some(tier) if !tier.is_empty() => skill.tier.eq_ignore_ascii_case(tier),
            _ => true,
        };
        if !tier_ok {
            return false;
        }

        let needle = match self.search.as_deref().map(str::trim) {
            Some(search) if !search.is_empty() => search.to_lowercase(),
            _ => return true,
        };

        skill.id.to_lowercase().contains(&needle)
            || skill.name.to_lowercase().contains(&needle)
            || skill
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, skills: &'a [Skill]) -> Vec<&'a Skill> {
        skills.iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_tier_parses_case_insensitively() {
        assert_eq!("Ultimate".parse::<SkillTier>(), Ok(SkillTier::Ultimate));
        assert_eq!(" basic ".parse::<SkillTier>(), Ok(SkillTier::Basic));
        assert!("mythic".parse::<SkillTier>().is_err());
    }

    #[test]
    fn skill_tier_round_trips_through_as_str() {
        for tier in SkillTier::ALL {
            assert_eq!(tier.as_str().parse::<SkillTier>(), Ok(tier));
        }
    }

    #[test]
    fn skill_deserializes_with_missing_and_null_fields() {
        let json = r#"{
            "id": "fireball",
            "name": "Fireball",
            "tier": "standard",
            "base_power": null,
            "scaling_percent": 120,
            "effect": "burn",
            "effect_duration": 3
        }"#;
        let skill: Skill = serde_json::from_str(json).expect("valid skill json");
        assert_eq!(skill.base_power, 0.0);
        assert_eq!(skill.mana_cost, 0.0);
        assert_eq!(skill.scaling_percent, Some(120.0));
        assert_eq!(skill.effect.as_deref(), Some("burn"));
        assert_eq!(skill.known_tier(), Some(SkillTier::Standard));
    }

    #[test]
    fn null_name_and_tier_read_as_empty() {
        let doc: SkillsDocument = serde_json::from_str(
            r#"{"skills": [{"id": "a", "name": null, "tier": null, "base_power": 10}]}"#,
        )
        .expect("null text fields are accepted");
        let skill = &doc.skills[0];
        assert_eq!(skill.name, "");
        assert_eq!(skill.tier, "");
        assert_eq!(skill.base_power, 10.0);
        assert_eq!(skill.known_tier(), None);
    }

    #[test]
    fn unknown_tier_is_kept_verbatim() {
        let skill: Skill =
            serde_json::from_str(r#"{"id": "x", "tier": "legendary"}"#).expect("valid json");
        assert_eq!(skill.tier, "legendary");
        assert_eq!(skill.known_tier(), None);
    }

    #[test]
    fn skills_document_ignores_meta_block() {
        let json = r#"{
            "_meta": {"class": "mage", "version": 3},
            "skills": [{"id": "a", "tier": "basic"}, {"id": "b", "tier": "strong"}]
        }"#;
        let doc: SkillsDocument = serde_json::from_str(json).expect("valid document");
        assert_eq!(doc.skills.len(), 2);
        assert_eq!(doc.skills[1].id, "b");
    }

    #[test]
    fn filter_by_tier_and_search() {
        let skills = vec![
            Skill::new("fireball", "Fireball", "standard").with_description("Hurls a ball of fire"),
            Skill::new("frost_nova", "Frost Nova", "strong"),
            Skill::new("ember", "Ember", "filler").with_description("A small fire spark"),
        ];

        let all = SkillFilter::new().apply(&skills);
        assert_eq!(all.len(), 3);

        let standard = SkillFilter::new().with_tier("Standard").apply(&skills);
        assert_eq!(standard.len(), 1);
        assert_eq!(standard[0].id, "fireball");

        let fire = SkillFilter::new().with_search("FIRE").apply(&skills);
        let ids: Vec<&str> = fire.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["fireball", "ember"]);

        let none = SkillFilter::new()
            .with_tier("strong")
            .with_search("fire")
            .apply(&skills);
        assert!(none.is_empty());
    }

    #[test]
    fn blank_filter_criteria_match_everything() {
        let skill = Skill::new("a", "A", "basic");
        let filter = SkillFilter::new().with_tier("  ").with_search("");
        assert!(filter.matches(&skill));
    }
}
