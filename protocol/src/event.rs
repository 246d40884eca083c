//! Structured battle events and session results
//!
//! Events carry numbers and ids only. Rendering them into text or graphics is
//! left to whichever front end consumes the log.

use serde::{Deserialize, Serialize};

use super::battle::{Effectiveness, SessionKind, Side, Stat, StatLine, Status};

/// One entry in a session's ordered event log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    // === Session lifecycle ===
    /// Opening event: both actives are on the field
    BattleStarted {
        kind: SessionKind,
        player: String,
        player_level: u32,
        enemy: String,
        enemy_level: u32,
    },

    /// A new turn begins resolving
    TurnStarted { turn: u32 },

    /// The session reached a terminal outcome
    BattleEnded { outcome: Outcome },

    // === Actions ===
    ProgramUsed {
        side: Side,
        daemon: String,
        program: String,
    },

    /// Fallback attack of an enemy with no known programs
    StruggleUsed { side: Side, daemon: String },

    Missed { side: Side },

    /// Locked status cost the actor its action
    LockedOut { side: Side },

    /// The actor's target switched out before the action landed
    TargetSwitchedOut { side: Side },

    // === HP ===
    Damaged {
        side: Side,
        amount: u32,
        hp: u32,
        max_hp: u32,
        effectiveness: Effectiveness,
    },

    /// The target's types are immune to the program
    NoEffect { side: Side },

    /// End-of-turn loss from Corrupted status
    CorruptionDamage {
        side: Side,
        amount: u32,
        hp: u32,
        max_hp: u32,
    },

    Fainted { side: Side, daemon: String },

    // === Effects ===
    StatusInflicted { side: Side, status: Status },

    /// Status already present; the new one did not stick
    StatusBlocked {
        side: Side,
        attempted: Status,
        existing: Status,
    },

    /// Stage change actually applied (0 when already at the limit)
    StatChanged { side: Side, stat: Stat, stages: i8 },

    // === Roster ===
    Switched {
        side: Side,
        from: usize,
        to: usize,
        daemon: String,
    },

    /// Player active fainted with conscious daemons left on the bench
    SwitchRequired,

    // === Special actions ===
    EscapeFailed { chance: f64 },

    Escaped { chance: f64 },

    CaptureFailed { chance: f64 },

    /// The captured copy joined the player roster at `roster_index`
    Captured {
        daemon: String,
        chance: f64,
        roster_index: usize,
    },

    /// Capture succeeded but the roster had no room for the copy
    CaptureDiscarded { daemon: String, chance: f64 },

    // === Progression ===
    XpGained {
        daemon: String,
        amount: u32,
        xp: u32,
        xp_to_next: u32,
    },

    LevelUp {
        daemon: String,
        level: u32,
        stats: StatLine,
    },

    ProgramLearned {
        daemon: String,
        program: String,
        forgotten: Option<String>,
    },
}

/// Terminal result of a battle session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    Ran,
    Captured,
    /// Capture succeeded but the roster was full, so the copy was dropped
    CapturedDiscarded,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Ran => "ran",
            Outcome::Captured => "captured",
            Outcome::CapturedDiscarded => "captured_discarded",
        }
    }
}

/// Observable state of a battle session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateTag {
    Init,
    AwaitingActions,
    ResolvingTurn,
    CheckFaint,
    AwaitingSwitch,
    Terminal,
}

impl StateTag {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StateTag::Terminal)
    }
}

/// Result of one accepted intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Events produced by this call, in resolution order
    pub events: Vec<BattleEvent>,

    /// State the session is left in
    pub state: StateTag,

    /// Set once the session is terminal
    pub outcome: Option<Outcome>,
}
