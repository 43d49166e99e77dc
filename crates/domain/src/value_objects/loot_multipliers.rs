//! Categorical multiplier tables for the loot drop-chance preview
//!
//! Stored in `systems/loot_multipliers.json`. A table missing from the file
//! keeps its built-in contents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option name to multiplier for one categorical input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiplierTable {
    entries: BTreeMap<String, f64>,
}

impl MultiplierTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, multiplier: f64) -> Self {
        self.entries.insert(key.into(), multiplier);
        self
    }

    /// Multiplier for `key`; an absent or unknown key is neutral (1.0).
    pub fn multiplier(&self, key: Option<&str>) -> f64 {
        key.and_then(|k| self.entries.get(k))
            .copied()
            .unwrap_or(1.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootMultiplierTables {
    #[serde(default = "builtin_monster_state")]
    pub monster_state: MultiplierTable,
    #[serde(default = "builtin_dungeon_difficulty")]
    pub dungeon_difficulty: MultiplierTable,
    #[serde(default = "builtin_group_size")]
    pub group_size: MultiplierTable,
    #[serde(default = "builtin_event")]
    pub event: MultiplierTable,
}

impl LootMultiplierTables {
    pub fn builtin() -> Self {
        Self {
            monster_state: builtin_monster_state(),
            dungeon_difficulty: builtin_dungeon_difficulty(),
            group_size: builtin_group_size(),
            event: builtin_event(),
        }
    }
}

impl Default for LootMultiplierTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_monster_state() -> MultiplierTable {
    MultiplierTable::new()
        .with_entry("normal", 1.0)
        .with_entry("elite", 1.5)
        .with_entry("champion", 2.0)
        .with_entry("boss", 3.0)
}

fn builtin_dungeon_difficulty() -> MultiplierTable {
    MultiplierTable::new()
        .with_entry("normal", 1.0)
        .with_entry("hard", 1.25)
        .with_entry("nightmare", 1.5)
        .with_entry("hell", 2.0)
}

fn builtin_group_size() -> MultiplierTable {
    MultiplierTable::new()
        .with_entry("1", 1.0)
        .with_entry("2", 1.1)
        .with_entry("3", 1.2)
        .with_entry("4", 1.3)
        .with_entry("5", 1.4)
}

fn builtin_event() -> MultiplierTable {
    MultiplierTable::new()
        .with_entry("none", 1.0)
        .with_entry("harvest_festival", 1.5)
        .with_entry("double_drop", 2.0)
}
