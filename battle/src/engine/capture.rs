//! Capture probability for wild daemons

use netrunner_protocol::Status;

use super::rng::RandomSource;
use crate::types::Daemon;

/// Result of a capture attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureRoll {
    pub chance: f64,
    pub success: bool,
}

/// Catch multiplier granted by the target's status
pub fn status_bonus(status: Option<Status>) -> f64 {
    match status {
        Some(Status::Locked) => 2.0,
        Some(Status::Corrupted) => 1.7,
        Some(Status::Lagging) => 1.5,
        None => 1.0,
    }
}

/// `min(1, (rate/255) * (3*max - 2*hp) / (3*max) * status_bonus)`
pub fn catch_chance(target: &Daemon) -> f64 {
    let max_hp = f64::from(target.max_hp());
    if max_hp <= 0.0 {
        return 0.0;
    }
    let hp_factor = (3.0 * max_hp - 2.0 * f64::from(target.hp())) / (3.0 * max_hp);
    let rate = f64::from(target.capture_rate()) / 255.0;

    (rate * hp_factor * status_bonus(target.status())).min(1.0)
}

/// Roll once against [`catch_chance`]
pub fn attempt<R: RandomSource + ?Sized>(target: &Daemon, rng: &mut R) -> CaptureRoll {
    let chance = catch_chance(target);
    CaptureRoll {
        chance,
        success: rng.chance() < chance,
    }
}
