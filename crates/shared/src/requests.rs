//! Request bodies and query strings

use gamedb_domain::{LootChanceInput, SkillFilter};
use serde::{Deserialize, Serialize};

/// Level shown when the page has not picked one yet.
pub const DEFAULT_SKILL_LEVEL: i32 = 1;

/// Query string of `GET /api/classes/{class}/skills/scaled`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledSkillsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ScaledSkillsQuery {
    /// The requested level, passed through unclamped.
    pub fn level(&self) -> i32 {
        self.level.unwrap_or(DEFAULT_SKILL_LEVEL)
    }

    pub fn filter(&self) -> SkillFilter {
        SkillFilter {
            tier: self.tier.clone(),
            search: self.search.clone(),
        }
    }
}

/// Body of `POST /api/loot/preview`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LootPreviewRequest {
    pub base_chance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dungeon_difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default)]
    pub luck: f64,
}

impl From<LootPreviewRequest> for LootChanceInput {
    fn from(req: LootPreviewRequest) -> Self {
        LootChanceInput {
            base_chance: req.base_chance,
            monster_state: req.monster_state,
            dungeon_difficulty: req.dungeon_difficulty,
            group_size: req.group_size,
            event: req.event,
            luck: req.luck,
        }
    }
}
