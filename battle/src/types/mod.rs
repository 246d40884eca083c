//! Domain types: static catalogs, daemons, and rosters

mod catalog;
mod daemon;
mod daemon_type;
mod side;
mod stats;

pub use catalog::{Catalog, LearnsetEntry, Program, ProgramEffect, Species};
pub use daemon::{xp_needed, Daemon, MAX_KNOWN_PROGRAMS, MAX_LEVEL};
pub use daemon_type::{DaemonType, TypeChart, TypeMatchup};
pub use side::{Roster, SideState};
pub use stats::{BaseStats, StatStages, MIN_BASE_STAT};
