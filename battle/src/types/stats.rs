//! Base stats, level growth, and stat stages

use netrunner_protocol::{Stat, StatLine};

/// Lowest base stat that still grows by at least one point every level
pub const MIN_BASE_STAT: u32 = 10;

/// Species base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn new(hp: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            hp,
            attack,
            defense,
            speed,
        }
    }

    /// Smallest of the four base values
    pub fn min(&self) -> u32 {
        self.hp.min(self.attack).min(self.defense).min(self.speed)
    }

    /// Computed stats at `level`: `floor(base * (1 + (level-1) * 0.1))` for every stat
    pub fn at_level(&self, level: u32) -> StatLine {
        StatLine {
            max_hp: grow(self.hp, level),
            attack: grow(self.attack, level),
            defense: grow(self.defense, level),
            speed: grow(self.speed, level),
        }
    }
}

/// Integer form of `floor(base * (1 + (level-1)/10))`
fn grow(base: u32, level: u32) -> u32 {
    let level = level.max(1);
    (u64::from(base) * u64::from(9 + level) / 10) as u32
}

/// Stat stages (-6 to +6)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub speed: i8,
}

impl StatStages {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stage for a stat
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set stage for a stat (clamped to -6..+6)
    pub fn set(&mut self, stat: Stat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            Stat::Attack => self.attack = clamped,
            Stat::Defense => self.defense = clamped,
            Stat::Speed => self.speed = clamped,
        }
    }

    /// Apply a boost to a stat, returns actual change applied
    pub fn boost(&mut self, stat: Stat, amount: i8) -> i8 {
        let current = self.get(stat);
        let new_value = current.saturating_add(amount).clamp(-6, 6);
        self.set(stat, new_value);
        new_value - current
    }

    /// Reset all stages to 0
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if all stats are at 0
    pub fn is_clear(&self) -> bool {
        self.attack == 0 && self.defense == 0 && self.speed == 0
    }

    /// Get the multiplier for a stat stage
    /// +1 = 1.5x, +2 = 2x, ..., +6 = 4x
    /// -1 = 0.67x, -2 = 0.5x, ..., -6 = 0.25x
    pub fn multiplier(stage: i8) -> f64 {
        let stage = i32::from(stage.clamp(-6, 6));
        if stage >= 0 {
            f64::from(2 + stage) / 2.0
        } else {
            2.0 / f64::from(2 - stage)
        }
    }

    /// Apply the stage for `stat` to a raw stat value
    pub fn apply(&self, stat: Stat, value: u32) -> f64 {
        f64::from(value) * Self::multiplier(self.get(stat))
    }
}
