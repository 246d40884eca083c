//! Daemon instance state

use std::sync::Arc;

use netrunner_protocol::{Stat, StatLine, Status};

use super::catalog::{Catalog, Program, Species};
use super::daemon_type::DaemonType;
use super::stats::StatStages;
use crate::error::DataError;

/// Highest level a daemon can reach
pub const MAX_LEVEL: u32 = 100;

/// Most programs a daemon can know at once
pub const MAX_KNOWN_PROGRAMS: usize = 4;

/// XP needed to go from `level` to `level + 1`
pub fn xp_needed(level: u32) -> u32 {
    100 + level.saturating_sub(1) * 50
}

/// A mutable combatant built from a species template and a level
#[derive(Debug, Clone)]
pub struct Daemon {
    species: Arc<Species>,
    pub(crate) level: u32,
    pub(crate) xp: u32,
    pub(crate) xp_to_next: u32,
    pub(crate) hp: u32,
    pub(crate) stats: StatLine,
    pub(crate) programs: Vec<Arc<Program>>,
    pub(crate) status: Option<Status>,
    pub(crate) stages: StatStages,
}

impl Daemon {
    /// Build a daemon at full HP with every program unlocked at `level`
    ///
    /// Keeps the most recently unlocked programs when more than
    /// [`MAX_KNOWN_PROGRAMS`] are available.
    pub fn new(catalog: &Catalog, species_id: &str, level: u32) -> Result<Self, DataError> {
        if level == 0 || level > MAX_LEVEL {
            return Err(DataError::InvalidLevel {
                level,
                max: MAX_LEVEL,
            });
        }

        let species = Arc::clone(catalog.species(species_id)?);
        catalog.check_learnset(&species)?;

        let mut programs: Vec<Arc<Program>> = Vec::new();
        for id in species.unlocked_at(level) {
            if programs.iter().any(|p| p.id == id) {
                continue;
            }
            let program = catalog.program(id).ok_or_else(|| DataError::UnknownProgram {
                species: species.id.clone(),
                program: id.to_string(),
            })?;
            programs.push(Arc::clone(program));
        }
        let excess = programs.len().saturating_sub(MAX_KNOWN_PROGRAMS);
        let programs = programs.split_off(excess);

        let stats = species.base_stats.at_level(level);

        Ok(Self {
            species,
            level,
            xp: 0,
            xp_to_next: xp_needed(level),
            hp: stats.max_hp,
            stats,
            programs,
            status: None,
            stages: StatStages::new(),
        })
    }

    // === Identity ===

    /// Display name (the species id)
    pub fn name(&self) -> &str {
        &self.species.id
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    pub fn types(&self) -> &[DaemonType] {
        &self.species.types
    }

    /// Same-type bonus applies
    pub fn has_type(&self, t: DaemonType) -> bool {
        self.species.types.contains(&t)
    }

    pub fn capture_rate(&self) -> u8 {
        self.species.capture_rate
    }

    // === Progression ===

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn xp_to_next(&self) -> u32 {
        self.xp_to_next
    }

    // === HP ===

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    /// Current HP as a fraction of max HP (0.0 - 1.0)
    pub fn hp_ratio(&self) -> f64 {
        if self.stats.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.stats.max_hp)
    }

    /// Set current HP, clamped to 0..=max (restoring from a save, scripted scenarios)
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.stats.max_hp);
        if self.hp == 0 {
            self.on_faint();
        }
    }

    /// Lose up to `amount` HP, returns HP actually lost
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        if self.hp == 0 {
            self.on_faint();
        }
        lost
    }

    /// Restore HP to max
    pub fn heal_full(&mut self) {
        self.hp = self.stats.max_hp;
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_conscious(&self) -> bool {
        self.hp > 0
    }

    // === Stats ===

    pub fn stats(&self) -> &StatLine {
        &self.stats
    }

    pub fn stages(&self) -> &StatStages {
        &self.stages
    }

    /// Stat after stage modifiers
    pub fn effective(&self, stat: Stat) -> f64 {
        self.stages.apply(stat, self.stats.get(stat))
    }

    /// Raise or lower a stat stage, returns the change actually applied
    pub fn modify_stage(&mut self, stat: Stat, stages: i8) -> i8 {
        self.stages.boost(stat, stages)
    }

    // === Programs ===

    pub fn programs(&self) -> &[Arc<Program>] {
        &self.programs
    }

    pub fn program(&self, index: usize) -> Option<&Arc<Program>> {
        self.programs.get(index)
    }

    pub fn knows(&self, program_id: &str) -> bool {
        self.programs.iter().any(|p| p.id == program_id)
    }

    // === Status ===

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn has_status(&self, status: Status) -> bool {
        self.status == Some(status)
    }

    /// Inflict a status. Sticky: only lands when no status is present.
    pub fn inflict(&mut self, status: Status) -> bool {
        if self.status.is_some() || self.is_fainted() {
            return false;
        }
        self.status = Some(status);
        true
    }

    // === Lifecycle hooks ===

    /// Called when this daemon leaves the field
    pub fn on_switch_out(&mut self) {
        self.stages.clear();
        self.status = None;
    }

    fn on_faint(&mut self) {
        self.stages.clear();
        self.status = None;
    }

    /// Independent copy for the capturing roster, with combat state dropped
    pub fn captured_copy(&self) -> Self {
        let mut copy = self.clone();
        copy.on_switch_out();
        copy
    }
}
