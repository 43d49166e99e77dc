//! Response bodies

use gamedb_domain::{ScaledSkillStats, Skill};
use serde::Serialize;

/// One skill as authored, next to its values at the requested level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledSkillView {
    pub skill: Skill,
    pub stats: ScaledSkillStats,
}

/// Body of `GET /api/classes/{class}/skills/scaled`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledSkillsResponse {
    pub class: String,
    pub level: i32,
    /// Skills in the file before filtering
    pub total: usize,
    pub skills: Vec<ScaledSkillView>,
}
