//! Game design database domain.
//!
//! Pure types and calculators for the design data editor. Nothing in this
//! crate performs I/O; the engine loads the JSON and hands it in.

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod value_objects;

pub use entities::{Skill, SkillFilter, SkillTier, SkillsDocument};
pub use error::DomainError;
pub use game_systems::{
    calculate_skill_stats, LootChanceCalculator, LootChanceInput, LootChanceResult,
    ScaledSkillStats, SkillStatCalculator, LUCK_FACTOR, MAX_DROP_CHANCE,
};
pub use value_objects::{
    DurationCategory, DurationRateIndex, DurationScalingTable, LootMultiplierTables,
    MultiplierTable, ScalingTables, TierScaling, TierScalingTable,
};
