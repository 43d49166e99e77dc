//! Port traits for infrastructure boundaries.
//!
//! The data directory is the only external system; everything else is
//! concrete types.

mod error;
mod repos;
mod types;

pub use error::RepoError;
pub use repos::GameDataRepo;
#[cfg(test)]
pub use repos::MockGameDataRepo;
pub use types::{validate_segment, DataSection, DocumentPath};
