//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::GameDataRepo;
use crate::use_cases::{Catalog, LootUseCases, SkillUseCases};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: Catalog,
    pub skills: SkillUseCases,
    pub loot: LootUseCases,
}

impl App {
    /// Create a new App with every use case sharing one repository.
    pub fn new(repo: Arc<dyn GameDataRepo>) -> Self {
        Self {
            use_cases: UseCases {
                catalog: Catalog::new(repo.clone()),
                skills: SkillUseCases::new(repo.clone()),
                loot: LootUseCases::new(repo),
            },
        }
    }
}
