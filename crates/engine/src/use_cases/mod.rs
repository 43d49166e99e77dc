//! Use cases over the design data.
//!
//! Each use case owns the repository port and returns [`DataError`].

mod catalog;
mod documents;
mod loot;
mod skills;

pub use catalog::Catalog;
pub use documents::DataError;
pub use loot::LootUseCases;
pub use skills::SkillUseCases;
