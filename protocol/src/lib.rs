//! Intents, events, and outcomes exchanged with the NetRunner battle engine.

mod battle;
mod event;
mod intent;

pub use battle::{Effectiveness, SessionKind, Side, Stat, StatLine, Status};
pub use event::{BattleEvent, Outcome, StateTag, TurnReport};
pub use intent::Intent;
