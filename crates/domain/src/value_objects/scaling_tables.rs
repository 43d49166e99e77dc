//! Balance configuration consumed by the skill stat calculator
//!
//! Stored in `systems/skill_scaling.json`. Either half may be omitted from
//! the file, in which case the built-in table is used for it.

use serde::{Deserialize, Serialize};

use super::duration_scaling::DurationScalingTable;
use super::tier_scaling::TierScalingTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingTables {
    #[serde(default = "TierScalingTable::builtin")]
    pub tier_scaling: TierScalingTable,
    #[serde(default = "DurationScalingTable::builtin")]
    pub duration_scaling: DurationScalingTable,
}

impl ScalingTables {
    pub fn new(tier_scaling: TierScalingTable, duration_scaling: DurationScalingTable) -> Self {
        Self {
            tier_scaling,
            duration_scaling,
        }
    }

    pub fn builtin() -> Self {
        Self::new(TierScalingTable::builtin(), DurationScalingTable::builtin())
    }
}

impl Default for ScalingTables {
    fn default() -> Self {
        Self::builtin()
    }
}
