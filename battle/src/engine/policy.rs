//! Enemy action selection

use super::rng::RandomSource;
use crate::types::Daemon;

/// What the enemy active will do this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    /// Index into the enemy's known programs
    Program(usize),
    /// No programs known
    Struggle,
}

/// Pick the enemy's action.
///
/// At or below `desperation_threshold` HP ratio the highest-power program is chosen
/// (first one wins ties, no draw). Otherwise a known program is picked uniformly.
pub fn select_action<R: RandomSource + ?Sized>(
    enemy: &Daemon,
    desperation_threshold: f64,
    rng: &mut R,
) -> EnemyAction {
    let programs = enemy.programs();
    if programs.is_empty() {
        return EnemyAction::Struggle;
    }

    if enemy.hp_ratio() <= desperation_threshold {
        let mut best = 0;
        for (idx, program) in programs.iter().enumerate() {
            if program.power > programs[best].power {
                best = idx;
            }
        }
        return EnemyAction::Program(best);
    }

    EnemyAction::Program(rng.pick(programs.len()))
}
