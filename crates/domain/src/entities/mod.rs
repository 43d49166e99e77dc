//! Domain entities - Records read from the design data files

mod skill;

pub use skill::{Skill, SkillFilter, SkillTier, SkillsDocument};
