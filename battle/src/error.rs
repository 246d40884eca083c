use thiserror::Error;

use netrunner_protocol::{SessionKind, Side};

/// Static data that cannot produce a valid daemon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Species {species} learns unknown program {program}")]
    UnknownProgram { species: String, program: String },

    #[error("Species {species} must have one or two types, found {count}")]
    InvalidTypeCount { species: String, count: usize },

    #[error("Species {species} has a base stat of {value}, below the minimum of {min}")]
    BaseStatTooLow { species: String, value: u32, min: u32 },

    #[error("Program {program} has accuracy {accuracy}, above 100")]
    InvalidAccuracy { program: String, accuracy: u8 },

    #[error("Level {level} is outside 1..={max}")]
    InvalidLevel { level: u32, max: u32 },
}

/// A session could not be opened
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("The {} side has no conscious daemon", .0.as_str())]
    NoConsciousDaemon(Side),

    #[error("Player daemon {daemon} at roster index {index} knows no programs")]
    NoKnownPrograms { index: usize, daemon: String },
}

/// An intent was rejected; the session is unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("The session has already ended")]
    SessionOver,

    #[error("A switch is required before any other action")]
    SwitchRequired,

    #[error("{intent} is not allowed in a {} session", .kind.as_str())]
    NotAllowed {
        intent: &'static str,
        kind: SessionKind,
    },

    #[error("Program index {index} is out of range ({known} known)")]
    ProgramOutOfRange { index: usize, known: usize },

    #[error("Roster index {index} is out of range ({size} daemons)")]
    SwitchOutOfRange { index: usize, size: usize },

    #[error("Cannot switch to roster index {0}: it has fainted")]
    SwitchToFainted(usize),

    #[error("Cannot switch to roster index {0}: it is already active")]
    SwitchToActive(usize),
}
