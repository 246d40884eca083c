//! Tunable battle rules

use crate::engine::RandomSource;
use crate::error::DataError;
use crate::types::{Catalog, Daemon};

/// Knobs the engine reads during a session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleRules {
    /// Player roster size limit applied to captures
    pub roster_capacity: usize,

    /// Chance that a Locked daemon loses its action
    pub lock_skip_chance: f64,

    /// HP ratio at or below which the enemy goes for its strongest program
    pub desperation_threshold: f64,

    /// Run chance at equal speed
    pub run_base_chance: f64,

    /// XP awarded per level of the defeated enemy
    pub xp_per_enemy_level: u32,

    /// Corrupted daemons lose `max_hp / corruption_divisor` (min 1) each turn
    pub corruption_divisor: u32,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            roster_capacity: 6,
            lock_skip_chance: 0.30,
            desperation_threshold: 0.30,
            run_base_chance: 0.9,
            xp_per_enemy_level: 15,
            corruption_divisor: 16,
        }
    }
}

/// Training opponent difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Inclusive opponent level range
    pub fn level_range(&self) -> (u32, u32) {
        match self {
            Difficulty::Easy => (1, 3),
            Difficulty::Medium => (4, 7),
            Difficulty::Hard => (8, 12),
        }
    }

    /// Draw an opponent level uniformly from the range
    pub fn roll_level<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u32 {
        let (min, max) = self.level_range();
        let span = (max - min + 1) as usize;
        min + rng.pick(span) as u32
    }
}

impl Daemon {
    /// Build a training opponent at a level drawn from `difficulty`
    pub fn training_opponent<R: RandomSource + ?Sized>(
        catalog: &Catalog,
        species_id: &str,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Daemon, DataError> {
        let level = difficulty.roll_level(rng);
        Daemon::new(catalog, species_id, level)
    }
}
