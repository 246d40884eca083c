//! Turn-based combat engine for NetRunner daemons.
//!
//! A player roster fights a wild daemon, a trainer, or a training opponent. The
//! engine resolves one intent at a time and reports what happened as structured
//! events, leaving presentation to the caller.
//!
//! # Overview
//!
//! ```text
//! netrunner-protocol (intents, events, outcomes)
//!        │
//!        ▼
//! netrunner-battle (catalog, daemons, resolvers, session) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! ## Data
//! - [`Catalog`] - Species, programs, and the [`TypeChart`]
//! - [`Daemon`] - A combatant built from a species and a level
//! - [`Roster`] - Daemons owned by one party
//!
//! ## Resolution
//! - [`BattleSession`] - State machine driven by [`Intent`]s
//! - [`engine::damage`], [`engine::capture`], [`engine::policy`] - Pure resolvers
//! - [`BattleRules`] - Tunable constants
//!
//! # Example Usage
//!
//! ```ignore
//! use netrunner_battle::{create_session, Daemon, Intent, Roster, SessionKind};
//!
//! let mut player = Roster::from(vec![Daemon::new(&catalog, "virulet", 5)?]);
//! let mut wild = Roster::from(vec![Daemon::new(&catalog, "rat_bot", 3)?]);
//!
//! let mut session = create_session(SessionKind::Wild, &mut player, &mut wild, &catalog, seed)?;
//! while !session.is_terminal() {
//!     let report = session.submit_action(Intent::Fight { program: 0 })?;
//!     for event in &report.events {
//!         println!("{event:?}");
//!     }
//! }
//! ```

pub mod engine;
mod error;
mod rules;
pub mod types;

// Re-export main types at crate root for convenience
pub use engine::{create_session, create_session_with_rules, BattleSession, RandomSource, SeededRng};
pub use error::{ActionError, DataError, SessionError};
pub use rules::{BattleRules, Difficulty};
pub use types::{
    BaseStats, Catalog, Daemon, DaemonType, Program, ProgramEffect, Roster, SideState, Species,
    StatStages, TypeChart,
};

// Re-export commonly used protocol types
pub use netrunner_protocol::{
    BattleEvent, Intent, Outcome, SessionKind, Side, Stat, StateTag, Status, TurnReport,
};
