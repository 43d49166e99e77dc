//! Loot drop-chance preview.
//!
//! `final = min(0.95, base * state * dungeon * group * luck * event)` with
//! `luck = 1 + luck_stat * 0.002`. The 0.95 ceiling is a design cap.

use serde::{Deserialize, Serialize};

use crate::value_objects::LootMultiplierTables;

/// Highest drop chance any combination of bonuses can reach.
pub const MAX_DROP_CHANCE: f64 = 0.95;

/// Drop-chance bonus per point of luck.
pub const LUCK_FACTOR: f64 = 0.002;

/// The selections made in the preview widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LootChanceInput {
    /// Item base drop chance in 0..=1
    pub base_chance: f64,
    #[serde(default)]
    pub monster_state: Option<String>,
    #[serde(default)]
    pub dungeon_difficulty: Option<String>,
    #[serde(default)]
    pub group_size: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub luck: f64,
}

impl LootChanceInput {
    pub fn new(base_chance: f64) -> Self {
        Self {
            base_chance,
            ..Self::default()
        }
    }

    pub fn with_monster_state(mut self, state: impl Into<String>) -> Self {
        self.monster_state = Some(state.into());
        self
    }

    pub fn with_dungeon_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.dungeon_difficulty = Some(difficulty.into());
        self
    }

    pub fn with_group_size(mut self, size: impl Into<String>) -> Self {
        self.group_size = Some(size.into());
        self
    }

    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn with_luck(mut self, luck: f64) -> Self {
        self.luck = luck;
        self
    }
}

/// Each resolved factor plus the capped result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LootChanceResult {
    pub base_chance: f64,
    pub monster_state_multiplier: f64,
    pub dungeon_multiplier: f64,
    pub group_multiplier: f64,
    pub luck_multiplier: f64,
    pub event_multiplier: f64,
    /// Product of all factors before the cap
    pub uncapped_chance: f64,
    pub final_chance: f64,
    pub capped: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LootChanceCalculator {
    tables: LootMultiplierTables,
}

impl LootChanceCalculator {
    pub fn new(tables: LootMultiplierTables) -> Self {
        Self { tables }
    }

    pub fn calculate(&self, input: &LootChanceInput) -> LootChanceResult {
        let monster_state_multiplier = self
            .tables
            .monster_state
            .multiplier(input.monster_state.as_deref());
        let dungeon_multiplier = self
            .tables
            .dungeon_difficulty
            .multiplier(input.dungeon_difficulty.as_deref());
        let group_multiplier = self.tables.group_size.multiplier(input.group_size.as_deref());
        let event_multiplier = self.tables.event.multiplier(input.event.as_deref());
        let luck_multiplier = 1.0 + input.luck * LUCK_FACTOR;

        let uncapped_chance = input.base_chance
            * monster_state_multiplier
            * dungeon_multiplier
            * group_multiplier
            * luck_multiplier
            * event_multiplier;

        let capped = uncapped_chance > MAX_DROP_CHANCE;
        let final_chance = if uncapped_chance.is_nan() {
            0.0
        } else {
            uncapped_chance.clamp(0.0, MAX_DROP_CHANCE)
        };

        LootChanceResult {
            base_chance: input.base_chance,
            monster_state_multiplier,
            dungeon_multiplier,
            group_multiplier,
            luck_multiplier,
            event_multiplier,
            uncapped_chance,
            final_chance,
            capped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::MultiplierTable;

    fn flat_tables(multiplier: f64) -> LootMultiplierTables {
        let table = MultiplierTable::new().with_entry("x", multiplier);
        LootMultiplierTables {
            monster_state: table.clone(),
            dungeon_difficulty: table.clone(),
            group_size: table.clone(),
            event: table,
        }
    }

    #[test]
    fn neutral_inputs_return_base_chance() {
        let calculator = LootChanceCalculator::default();
        let result = calculator.calculate(&LootChanceInput::new(0.05));
        assert_eq!(result.final_chance, 0.05);
        assert!(!result.capped);

        let high = calculator.calculate(&LootChanceInput::new(0.99));
        assert_eq!(high.final_chance, MAX_DROP_CHANCE);
        assert!(high.capped);
    }

    #[test]
    fn three_multipliers_and_luck() {
        let calculator = LootChanceCalculator::new(flat_tables(1.5));
        let input = LootChanceInput::new(0.05)
            .with_monster_state("x")
            .with_dungeon_difficulty("x")
            .with_group_size("x")
            .with_luck(100.0);

        let result = calculator.calculate(&input);
        assert!((result.luck_multiplier - 1.2).abs() < 1e-12);
        assert_eq!(result.event_multiplier, 1.0);
        assert!((result.final_chance - 0.2025).abs() < 1e-12);
    }

    #[test]
    fn unknown_keys_are_neutral() {
        let calculator = LootChanceCalculator::default();
        let input = LootChanceInput::new(0.1)
            .with_monster_state("dormant")
            .with_event("unknown_event");
        let result = calculator.calculate(&input);
        assert_eq!(result.monster_state_multiplier, 1.0);
        assert_eq!(result.event_multiplier, 1.0);
        assert_eq!(result.final_chance, 0.1);
    }

    #[test]
    fn builtin_tables_apply() {
        let calculator = LootChanceCalculator::default();
        let input = LootChanceInput::new(0.1)
            .with_monster_state("boss")
            .with_dungeon_difficulty("hell");
        let result = calculator.calculate(&input);
        assert!((result.final_chance - 0.6).abs() < 1e-12);
    }

    #[test]
    fn result_always_within_bounds() {
        let calculator = LootChanceCalculator::new(flat_tables(10.0));
        let cases = [
            LootChanceInput::new(1.0).with_monster_state("x").with_luck(10_000.0),
            LootChanceInput::new(-0.5),
            LootChanceInput::new(0.2).with_luck(-1_000.0),
            LootChanceInput::new(f64::NAN),
            LootChanceInput::new(f64::INFINITY),
        ];
        for input in cases {
            let result = calculator.calculate(&input);
            assert!(
                (0.0..=MAX_DROP_CHANCE).contains(&result.final_chance),
                "{input:?} gave {}",
                result.final_chance
            );
        }
    }

    #[test]
    fn input_deserializes_with_optional_selections() {
        let input: LootChanceInput =
            serde_json::from_str(r#"{"base_chance": 0.2, "event": "double_drop"}"#)
                .expect("valid input");
        assert_eq!(input.luck, 0.0);
        assert_eq!(input.event.as_deref(), Some("double_drop"));
        assert_eq!(input.monster_state, None);
    }
}
