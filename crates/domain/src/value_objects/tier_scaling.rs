//! Per-tier growth rates for skill levels

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::SkillTier;

/// Percent growth used when a tier record leaves `percent_per_level` out.
pub const DEFAULT_PERCENT_PER_LEVEL: f64 = 4.0;

/// Growth rates applied once per skill level above 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierScaling {
    pub power_per_level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_per_level: Option<f64>,
    pub mana_per_level: f64,
}

impl TierScaling {
    pub const fn new(power_per_level: f64, percent_per_level: f64, mana_per_level: f64) -> Self {
        Self {
            power_per_level,
            percent_per_level: Some(percent_per_level),
            mana_per_level,
        }
    }

    /// Last-resort rates for a tier neither the supplied nor the built-in
    /// table knows.
    pub const FALLBACK: TierScaling = TierScaling::new(2.0, 4.0, 1.0);

    /// The percent rate, defaulting when the record omits it.
    pub fn percent_rate(&self) -> f64 {
        self.percent_per_level.unwrap_or(DEFAULT_PERCENT_PER_LEVEL)
    }
}

/// Tier name to growth rates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierScalingTable {
    tiers: BTreeMap<String, TierScaling>,
}

impl TierScalingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The balance table shipped with the editor, covering all six tiers.
    pub fn builtin() -> Self {
        SkillTier::ALL
            .iter()
            .map(|tier| (tier.as_str().to_string(), builtin_rates(*tier)))
            .collect()
    }

    pub fn with_tier(mut self, name: impl Into<String>, scaling: TierScaling) -> Self {
        self.tiers.insert(name.into(), scaling);
        self
    }

    pub fn get(&self, tier: &str) -> Option<&TierScaling> {
        self.tiers.get(tier)
    }

    pub fn contains(&self, tier: &str) -> bool {
        self.tiers.contains_key(tier)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TierScaling)> {
        self.tiers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, TierScaling)> for TierScalingTable {
    fn from_iter<I: IntoIterator<Item = (String, TierScaling)>>(iter: I) -> Self {
        Self {
            tiers: iter.into_iter().collect(),
        }
    }
}

fn builtin_rates(tier: SkillTier) -> TierScaling {
    match tier {
        SkillTier::Filler => TierScaling::new(1.0, 2.0, 0.0),
        SkillTier::Basic => TierScaling::new(2.0, 4.0, 1.0),
        SkillTier::Standard => TierScaling::new(4.0, 6.0, 2.0),
        SkillTier::Strong => TierScaling::new(6.0, 8.0, 3.0),
        SkillTier::Signature => TierScaling::new(8.0, 10.0, 4.0),
        SkillTier::Ultimate => TierScaling::new(12.0, 15.0, 6.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_tier() {
        let table = TierScalingTable::builtin();
        assert_eq!(table.len(), SkillTier::ALL.len());
        for tier in SkillTier::ALL {
            assert!(table.contains(tier.as_str()), "missing {tier}");
        }
    }

    #[test]
    fn builtin_standard_rates() {
        let table = TierScalingTable::builtin();
        let standard = table.get("standard").expect("standard tier");
        assert_eq!(standard.power_per_level, 4.0);
        assert_eq!(standard.percent_rate(), 6.0);
        assert_eq!(standard.mana_per_level, 2.0);
    }

    #[test]
    fn missing_percent_rate_defaults_to_four() {
        let scaling: TierScaling =
            serde_json::from_str(r#"{"power_per_level": 3, "mana_per_level": 1}"#)
                .expect("valid tier json");
        assert_eq!(scaling.percent_per_level, None);
        assert_eq!(scaling.percent_rate(), DEFAULT_PERCENT_PER_LEVEL);
    }

    #[test]
    fn table_deserializes_from_plain_object() {
        let json = r#"{
            "basic": {"power_per_level": 1, "percent_per_level": 2, "mana_per_level": 0},
            "epic": {"power_per_level": 9, "mana_per_level": 5}
        }"#;
        let table: TierScalingTable = serde_json::from_str(json).expect("valid table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("epic").map(|t| t.power_per_level), Some(9.0));
        assert!(table.get("standard").is_none());
    }
}
