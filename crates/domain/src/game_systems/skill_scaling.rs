//! Skill stat scaling by skill level.
//!
//! Every scalable field grows linearly: `value + (level - 1) * rate`. Rates
//! come from the tier table (power, percent, mana), the duration index
//! (effect/buff/debuff durations) and the shield category (shield value).
//!
//! Levels are not validated. The editor constrains them to 1..=10, but a
//! level of 0 or below simply extrapolates under the level-1 baseline.

use serde::Serialize;

use crate::entities::Skill;
use crate::value_objects::{
    DurationRateIndex, DurationScalingTable, ScalingTables, TierScaling, TierScalingTable,
};

/// The displayed values of a skill at one level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledSkillStats {
    pub level: i32,
    pub base_power: f64,
    pub scaling_percent: f64,
    pub mana_cost: f64,
    pub effect_duration: f64,
    pub buff_duration: f64,
    pub debuff_duration: f64,
    pub shield_value: f64,
    /// The tier record the rates were taken from
    pub tier_scaling: TierScaling,
    pub percent_per_level: f64,
}

/// Computes [`ScaledSkillStats`] against one fixed set of balance tables.
///
/// Construction precomputes the duration index, so reuse one calculator for
/// a whole skill list.
#[derive(Debug, Clone)]
pub struct SkillStatCalculator {
    tiers: TierScalingTable,
    builtin_tiers: TierScalingTable,
    durations: DurationRateIndex,
}

impl SkillStatCalculator {
    pub fn new(tables: ScalingTables) -> Self {
        let durations = DurationRateIndex::build(&tables.duration_scaling);
        Self {
            tiers: tables.tier_scaling,
            builtin_tiers: TierScalingTable::builtin(),
            durations,
        }
    }

    /// Rates for `tier`: the supplied table, then the built-in table, then
    /// [`TierScaling::FALLBACK`].
    pub fn tier_scaling(&self, tier: &str) -> TierScaling {
        self.tiers
            .get(tier)
            .or_else(|| self.builtin_tiers.get(tier))
            .copied()
            .unwrap_or(TierScaling::FALLBACK)
    }

    pub fn calculate(&self, skill: &Skill, level: i32) -> ScaledSkillStats {
        let steps = f64::from(level) - 1.0;
        let tier = self.tier_scaling(&skill.tier);
        let percent_per_level = tier.percent_rate();

        let base_power = if skill.base_power > 0.0 {
            skill.base_power + steps * tier.power_per_level
        } else {
            0.0
        };

        let scaling_percent = match skill.scaling_percent {
            Some(percent) if percent != 0.0 => percent + steps * percent_per_level,
            _ => 0.0,
        };

        let mana_cost = skill.mana_cost + steps * tier.mana_per_level;

        let effect_duration = self.scale_duration(skill.effect_duration, skill.effect.as_deref(), steps);
        let buff_duration = self.scale_duration(skill.buff_duration, skill.buff.as_deref(), steps);
        let debuff_duration =
            self.scale_duration(skill.debuff_duration, skill.debuff.as_deref(), steps);

        let shield_value = match skill.shield_value {
            Some(value) if value != 0.0 => value + steps * self.durations.shield_value_per_level(),
            _ => 0.0,
        };

        ScaledSkillStats {
            level,
            base_power,
            scaling_percent,
            mana_cost,
            effect_duration,
            buff_duration,
            debuff_duration,
            shield_value,
            tier_scaling: tier,
            percent_per_level,
        }
    }

    fn scale_duration(&self, duration: Option<f64>, effect_type: Option<&str>, steps: f64) -> f64 {
        match duration {
            Some(d) if d != 0.0 => d + steps * self.durations.duration_rate(effect_type),
            _ => 0.0,
        }
    }
}

impl Default for SkillStatCalculator {
    fn default() -> Self {
        Self::new(ScalingTables::builtin())
    }
}

/// One-shot form of [`SkillStatCalculator::calculate`].
pub fn calculate_skill_stats(
    skill: &Skill,
    level: i32,
    tier_table: &TierScalingTable,
    duration_table: &DurationScalingTable,
) -> ScaledSkillStats {
    SkillStatCalculator::new(ScalingTables::new(tier_table.clone(), duration_table.clone()))
        .calculate(skill, level)
}
