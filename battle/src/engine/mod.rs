//! Combat resolution: damage, capture, enemy policy, progression, and the session
//! state machine that drives them

pub mod capture;
pub mod damage;
pub mod policy;
pub mod progression;
mod rng;
mod session;
mod turn;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
mod tests;

pub use capture::CaptureRoll;
pub use damage::{EffectOutcome, EffectTarget, HitResult};
pub use policy::EnemyAction;
pub use progression::{LearnedProgram, LevelUp, XpAward};
pub use rng::{RandomSource, SeededRng};
pub use session::{create_session, create_session_with_rules, BattleSession};
