//! Balance calculators used by the editor pages.
//!
//! - `skill_scaling` - per-level skill stats
//! - `loot_chance` - drop-chance what-if preview

mod loot_chance;
mod skill_scaling;

pub use loot_chance::{
    LootChanceCalculator, LootChanceInput, LootChanceResult, LUCK_FACTOR, MAX_DROP_CHANCE,
};
pub use skill_scaling::{calculate_skill_stats, ScaledSkillStats, SkillStatCalculator};
