//! Game design database wire types
//!
//! Request and response bodies of the engine's HTTP API, shared with the
//! editor pages.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde and the domain crate
//! 2. **No business logic** - pure data types and conversions

pub mod requests;
pub mod responses;

pub use requests::{LootPreviewRequest, ScaledSkillsQuery, DEFAULT_SKILL_LEVEL};
pub use responses::{ScaledSkillView, ScaledSkillsResponse};
