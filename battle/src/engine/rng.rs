//! Injected randomness for battle resolution.
//!
//! Every random draw in a session goes through [`RandomSource`]. The session owns its
//! source, so the same seed and the same intents replay the same battle.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the draws the engine needs
pub trait RandomSource {
    /// Uniform integer in [0, 100), used for accuracy rolls
    fn percent(&mut self) -> u32;

    /// Uniform real in [0, 1)
    fn chance(&mut self) -> f64;

    /// Uniform real in [0.85, 1.0], the damage variance
    fn variance(&mut self) -> f64;

    /// Uniform index in [0, len). Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;

    /// Fair coin, used to break exact speed ties
    fn coin_flip(&mut self) -> bool {
        self.chance() < 0.5
    }
}

/// Portable seeded generator (ChaCha8)
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn percent(&mut self) -> u32 {
        self.inner.gen_range(0..100)
    }

    fn chance(&mut self) -> f64 {
        self.inner.gen_range(0.0..1.0)
    }

    fn variance(&mut self) -> f64 {
        self.inner.gen_range(0.85..=1.0)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }

    fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

/// Source that replays queued values, for pinning exact outcomes in tests.
///
/// Empty queues fall back to: percent 0 (always hits), chance 0.99 (Locked never
/// skips, captures fail), variance 1.0, pick 0, coin heads.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedRng {
    pub percents: std::collections::VecDeque<u32>,
    pub chances: std::collections::VecDeque<f64>,
    pub variances: std::collections::VecDeque<f64>,
    pub picks: std::collections::VecDeque<usize>,
    pub coins: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percents(mut self, values: &[u32]) -> Self {
        self.percents.extend(values);
        self
    }

    pub fn chances(mut self, values: &[f64]) -> Self {
        self.chances.extend(values);
        self
    }

    pub fn variances(mut self, values: &[f64]) -> Self {
        self.variances.extend(values);
        self
    }

    pub fn picks(mut self, values: &[usize]) -> Self {
        self.picks.extend(values);
        self
    }

    pub fn coins(mut self, values: &[bool]) -> Self {
        self.coins.extend(values);
        self
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn percent(&mut self) -> u32 {
        self.percents.pop_front().unwrap_or(0)
    }

    fn chance(&mut self) -> f64 {
        self.chances.pop_front().unwrap_or(0.99)
    }

    fn variance(&mut self) -> f64 {
        self.variances.pop_front().unwrap_or(1.0)
    }

    fn pick(&mut self, len: usize) -> usize {
        let value = self.picks.pop_front().unwrap_or(0);
        if len == 0 { 0 } else { value % len }
    }

    fn coin_flip(&mut self) -> bool {
        self.coins.pop_front().unwrap_or(true)
    }
}
