//! Value objects - Immutable balance configuration

mod duration_scaling;
mod loot_multipliers;
mod scaling_tables;
mod tier_scaling;

pub use duration_scaling::{
    DurationCategory, DurationRateIndex, DurationScalingTable, DEFAULT_SHIELD_VALUE_PER_LEVEL,
    FALLBACK_DURATION_PER_LEVEL, SHIELD_CATEGORY,
};
pub use loot_multipliers::{LootMultiplierTables, MultiplierTable};
pub use scaling_tables::ScalingTables;
pub use tier_scaling::{TierScaling, TierScalingTable, DEFAULT_PERCENT_PER_LEVEL};
