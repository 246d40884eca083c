//! Static catalogs: species, programs, and the type chart
//!
//! Records arrive already parsed from whatever loads the game data. The catalog only
//! indexes them and checks the invariants the engine relies on.

use std::collections::HashMap;
use std::sync::Arc;

use netrunner_protocol::{Stat, Status};

use super::daemon_type::{DaemonType, TypeChart};
use super::stats::{BaseStats, MIN_BASE_STAT};
use crate::error::DataError;

/// Secondary effect of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ProgramEffect {
    /// Raise one of the user's stats
    RaiseStat { stat: Stat, stages: i8 },

    /// Lower one of the target's stats
    LowerStat { stat: Stat, stages: i8 },

    /// Inflict a status on the target (sticky: no-op if it already has one)
    InflictStatus { status: Status },
}

/// An attack or support action
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub id: String,
    pub name: String,

    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub program_type: DaemonType,

    /// 0 = non-damaging
    pub power: u32,

    /// Hit chance in percent (0-100)
    pub accuracy: u8,

    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<ProgramEffect>,
}

impl Program {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        program_type: DaemonType,
        power: u32,
        accuracy: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            program_type,
            power,
            accuracy,
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: ProgramEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Status-only programs skip the damage step
    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }

    fn validate(&self) -> Result<(), DataError> {
        if self.accuracy > 100 {
            return Err(DataError::InvalidAccuracy {
                program: self.id.clone(),
                accuracy: self.accuracy,
            });
        }
        Ok(())
    }
}

/// A program a species unlocks at a level
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearnsetEntry {
    pub level: u32,
    pub program: String,
}

/// Static template a daemon is built from
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species {
    pub id: String,

    /// One or two types
    pub types: Vec<DaemonType>,

    pub base_stats: BaseStats,

    /// Lower = harder to capture (out of 255)
    pub capture_rate: u8,

    /// Ordered by unlock level
    #[cfg_attr(feature = "serde", serde(default))]
    pub learnset: Vec<LearnsetEntry>,
}

impl Species {
    pub fn new(
        id: impl Into<String>,
        types: Vec<DaemonType>,
        base_stats: BaseStats,
        capture_rate: u8,
    ) -> Self {
        Self {
            id: id.into(),
            types,
            base_stats,
            capture_rate,
            learnset: Vec::new(),
        }
    }

    /// Builder-style learnset entry
    pub fn learns(mut self, level: u32, program: impl Into<String>) -> Self {
        self.learnset.push(LearnsetEntry {
            level,
            program: program.into(),
        });
        self
    }

    /// Program ids unlocked at or below `level`, in learnset order
    pub fn unlocked_at(&self, level: u32) -> impl Iterator<Item = &str> {
        self.learnset
            .iter()
            .filter(move |e| e.level <= level)
            .map(|e| e.program.as_str())
    }

    /// Program ids unlocked exactly at `level`
    pub fn learned_on(&self, level: u32) -> impl Iterator<Item = &str> {
        self.learnset
            .iter()
            .filter(move |e| e.level == level)
            .map(|e| e.program.as_str())
    }

    fn validate(&self) -> Result<(), DataError> {
        if self.types.is_empty() || self.types.len() > 2 {
            return Err(DataError::InvalidTypeCount {
                species: self.id.clone(),
                count: self.types.len(),
            });
        }

        let lowest = self.base_stats.min();
        if lowest < MIN_BASE_STAT {
            return Err(DataError::BaseStatTooLow {
                species: self.id.clone(),
                value: lowest,
                min: MIN_BASE_STAT,
            });
        }

        Ok(())
    }
}

/// Immutable reference data shared by every session
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: HashMap<String, Arc<Species>>,
    programs: HashMap<String, Arc<Program>>,
    chart: TypeChart,
}

impl Catalog {
    /// Create an empty catalog around a type chart
    pub fn new(chart: TypeChart) -> Self {
        Self {
            species: HashMap::new(),
            programs: HashMap::new(),
            chart,
        }
    }

    /// Add a species (checks its own shape, not its learnset references)
    pub fn add_species(&mut self, species: Species) -> Result<(), DataError> {
        species.validate()?;
        self.species.insert(species.id.clone(), Arc::new(species));
        Ok(())
    }

    /// Add a program
    pub fn add_program(&mut self, program: Program) -> Result<(), DataError> {
        program.validate()?;
        self.programs.insert(program.id.clone(), Arc::new(program));
        Ok(())
    }

    /// Check every learnset reference at once
    pub fn validate(&self) -> Result<(), DataError> {
        for species in self.species.values() {
            self.check_learnset(species)?;
        }
        Ok(())
    }

    pub(crate) fn check_learnset(&self, species: &Species) -> Result<(), DataError> {
        for entry in &species.learnset {
            if !self.programs.contains_key(&entry.program) {
                return Err(DataError::UnknownProgram {
                    species: species.id.clone(),
                    program: entry.program.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn species(&self, id: &str) -> Result<&Arc<Species>, DataError> {
        self.species
            .get(id)
            .ok_or_else(|| DataError::UnknownSpecies(id.to_string()))
    }

    pub fn program(&self, id: &str) -> Option<&Arc<Program>> {
        self.programs.get(id)
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }
}
