//! Loot drop-chance preview backed by `systems/loot_multipliers.json`.

use std::sync::Arc;

use gamedb_domain::{LootChanceCalculator, LootChanceInput, LootChanceResult, LootMultiplierTables};

use crate::infrastructure::ports::{DocumentPath, GameDataRepo};

use super::documents::{load_or_default, DataError};

pub struct LootUseCases {
    repo: Arc<dyn GameDataRepo>,
}

impl LootUseCases {
    pub fn new(repo: Arc<dyn GameDataRepo>) -> Self {
        Self { repo }
    }

    pub async fn multiplier_tables(&self) -> Result<LootMultiplierTables, DataError> {
        load_or_default(
            self.repo.as_ref(),
            &DocumentPath::loot_multipliers(),
            LootMultiplierTables::builtin,
        )
        .await
    }

    pub async fn preview(&self, input: &LootChanceInput) -> Result<LootChanceResult, DataError> {
        let calculator = LootChanceCalculator::new(self.multiplier_tables().await?);
        let result = calculator.calculate(input);
        tracing::debug!(
            base = input.base_chance,
            uncapped = result.uncapped_chance,
            final_chance = result.final_chance,
            "Loot preview"
        );
        Ok(result)
    }
}
