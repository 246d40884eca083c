//! XP, level-ups, and program learning

use std::sync::Arc;

use netrunner_protocol::StatLine;
use tracing::{debug, warn};

use crate::types::{xp_needed, Catalog, Daemon, MAX_KNOWN_PROGRAMS, MAX_LEVEL};

/// A program picked up on level-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnedProgram {
    pub program: String,
    /// Oldest known program dropped to make room
    pub forgotten: Option<String>,
}

/// One level gained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub stats: StatLine,
    pub learned: Vec<LearnedProgram>,
}

/// Everything an XP award changed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XpAward {
    pub amount: u32,
    pub level_ups: Vec<LevelUp>,
}

impl XpAward {
    pub fn leveled(&self) -> bool {
        !self.level_ups.is_empty()
    }
}

impl Daemon {
    /// Add XP and apply every level-up it pays for.
    ///
    /// Each level recomputes stats from the species base, restores HP to the new
    /// max, and learns programs unlocked at exactly that level.
    pub fn gain_xp(&mut self, amount: u32, catalog: &Catalog) -> XpAward {
        self.xp = self.xp.saturating_add(amount);
        let mut award = XpAward {
            amount,
            level_ups: Vec::new(),
        };

        while self.level < MAX_LEVEL && self.xp >= self.xp_to_next {
            self.xp -= self.xp_to_next;
            self.level += 1;
            self.xp_to_next = xp_needed(self.level);
            self.stats = self.species().base_stats.at_level(self.level);
            self.heal_full();

            let learned = self.learn_unlocked(catalog);
            debug!(
                daemon = self.name(),
                level = self.level,
                learned = learned.len(),
                "Level up"
            );

            award.level_ups.push(LevelUp {
                level: self.level,
                stats: self.stats,
                learned,
            });
        }

        award
    }

    fn learn_unlocked(&mut self, catalog: &Catalog) -> Vec<LearnedProgram> {
        let ids: Vec<String> = self
            .species()
            .learned_on(self.level)
            .map(str::to_string)
            .collect();

        let mut learned = Vec::new();
        for id in ids {
            if self.knows(&id) {
                continue;
            }
            let Some(program) = catalog.program(&id) else {
                warn!(daemon = self.name(), program = %id, "Learnset references unknown program");
                continue;
            };

            let forgotten = if self.programs.len() >= MAX_KNOWN_PROGRAMS {
                Some(self.programs.remove(0).id.clone())
            } else {
                None
            };
            self.programs.push(Arc::clone(program));

            learned.push(LearnedProgram {
                program: id,
                forgotten,
            });
        }
        learned
    }
}
