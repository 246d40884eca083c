//! Turn resolution for [`BattleSession`]

use std::cmp::Ordering;

use netrunner_protocol::{BattleEvent, Effectiveness, Outcome, Side, Stat, StateTag, Status};

use super::capture;
use super::damage::{self, EffectOutcome, EffectTarget, HitResult};
use super::policy::{self, EnemyAction};
use super::rng::RandomSource;
use super::session::BattleSession;
use crate::types::{Daemon, SideState};

/// An action queued for one side this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Program(usize),
    Struggle,
}

impl From<EnemyAction> for Action {
    fn from(action: EnemyAction) -> Self {
        match action {
            EnemyAction::Program(idx) => Action::Program(idx),
            EnemyAction::Struggle => Action::Struggle,
        }
    }
}

impl<'a, R: RandomSource> BattleSession<'a, R> {
    // === Intent handlers ===

    pub(super) fn resolve_fight(&mut self, program: usize) {
        self.begin_turn();
        let enemy_action = self.pick_enemy_action();

        let order = if self.player_moves_first() {
            [Side::Player, Side::Enemy]
        } else {
            [Side::Enemy, Side::Player]
        };

        for actor in order {
            let action = match actor {
                Side::Player => Action::Program(program),
                Side::Enemy => enemy_action,
            };
            self.act(actor, action);
        }

        self.end_turn();
    }

    /// Switch first. The enemy's committed action was aimed at the outgoing daemon
    /// and is lost, so a voluntary switch never costs HP.
    pub(super) fn resolve_switch(&mut self, roster: usize) {
        self.begin_turn();
        let enemy_action = self.pick_enemy_action();

        self.switch_player(roster);
        if let Some(used) = self.used_event(Side::Enemy, enemy_action) {
            tracing::debug!(side = Side::Enemy.as_str(), "Action lost to a switch");
            self.emit(used);
            self.emit(BattleEvent::TargetSwitchedOut { side: Side::Enemy });
        }

        self.end_turn();
    }

    pub(super) fn resolve_capture(&mut self) {
        self.begin_turn();

        let roll = capture::attempt(self.enemy.active(), &mut self.rng);
        tracing::debug!(chance = roll.chance, success = roll.success, "Capture attempt");
        if roll.success {
            self.store_capture(roll.chance);
            return;
        }

        self.emit(BattleEvent::CaptureFailed { chance: roll.chance });
        self.enemy_turn();
    }

    pub(super) fn resolve_run(&mut self) {
        self.begin_turn();

        let chance = self.run_chance();
        let escaped = self.rng.chance() < chance;
        tracing::debug!(chance, escaped, "Run attempt");
        if escaped {
            self.emit(BattleEvent::Escaped { chance });
            self.finish(Outcome::Ran);
            return;
        }

        self.emit(BattleEvent::EscapeFailed { chance });
        self.enemy_turn();
    }

    /// Forced replacement after the player active fainted. Not a turn: the enemy
    /// does not act.
    pub(super) fn replace_fainted(&mut self, roster: usize) {
        self.switch_player(roster);
        self.state = StateTag::AwaitingActions;
    }

    /// `min(1, base * player_speed / max(1, enemy_speed))` on effective speed
    pub fn run_chance(&self) -> f64 {
        let player = self.player.active().effective(Stat::Speed);
        let enemy = self.enemy.active().effective(Stat::Speed).max(1.0);
        (self.rules.run_base_chance * player / enemy).min(1.0)
    }

    // === Turn steps ===

    fn begin_turn(&mut self) {
        self.state = StateTag::ResolvingTurn;
        self.turn += 1;
        tracing::debug!(turn = self.turn, "Resolving turn");
        self.emit(BattleEvent::TurnStarted { turn: self.turn });
    }

    fn pick_enemy_action(&mut self) -> Action {
        policy::select_action(
            self.enemy.active(),
            self.rules.desperation_threshold,
            &mut self.rng,
        )
        .into()
    }

    /// The enemy acts alone after a failed capture or escape
    fn enemy_turn(&mut self) {
        let action = self.pick_enemy_action();
        self.act(Side::Enemy, action);
        self.end_turn();
    }

    /// Lagging always acts last, then faster first, exact ties on a coin flip
    fn player_moves_first(&mut self) -> bool {
        let player = self.player.active();
        let enemy = self.enemy.active();

        let player_lags = player.has_status(Status::Lagging);
        let enemy_lags = enemy.has_status(Status::Lagging);
        if player_lags != enemy_lags {
            return enemy_lags;
        }

        match player
            .effective(Stat::Speed)
            .partial_cmp(&enemy.effective(Stat::Speed))
        {
            Some(Ordering::Greater) => true,
            Some(Ordering::Less) => false,
            _ => self.rng.coin_flip(),
        }
    }

    /// Resolve one side's action against the opposing active daemon
    fn act(&mut self, actor: Side, action: Action) {
        if self.side(actor).active().is_fainted()
            || self.side(actor.opponent()).active().is_fainted()
        {
            return;
        }

        if self.side(actor).active().has_status(Status::Locked)
            && self.rng.chance() < self.rules.lock_skip_chance
        {
            tracing::debug!(side = actor.as_str(), "Action lost to Locked");
            self.emit(BattleEvent::LockedOut { side: actor });
            return;
        }

        let Some(used) = self.used_event(actor, action) else {
            return;
        };

        let catalog = self.catalog;
        let (attacker_side, defender_side) = match actor {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        };
        let attacker = attacker_side.active_mut();
        let defender = defender_side.active_mut();

        let result = match action {
            Action::Program(idx) => {
                let Some(program) = attacker.program(idx).cloned() else {
                    return;
                };
                damage::resolve(attacker, defender, &program, catalog.chart(), &mut self.rng)
            }
            Action::Struggle => damage::struggle(attacker, defender),
        };

        tracing::debug!(
            side = actor.as_str(),
            hit = result.hit,
            damage = result.damage,
            effectiveness = result.effectiveness,
            "Action resolved"
        );

        let mut events = vec![used];
        events.extend(hit_events(actor, &result, defender));
        for event in events {
            self.emit(event);
        }
    }

    fn end_turn(&mut self) {
        for side in [Side::Player, Side::Enemy] {
            self.apply_corruption(side);
        }
        self.check_faint();
    }

    fn apply_corruption(&mut self, side: Side) {
        let divisor = self.rules.corruption_divisor.max(1);
        let daemon = self.side_mut(side).active_mut();
        if daemon.is_fainted() || !daemon.has_status(Status::Corrupted) {
            return;
        }

        let tick = (daemon.max_hp() / divisor).max(1);
        let amount = daemon.take_damage(tick);
        let corrupted = BattleEvent::CorruptionDamage {
            side,
            amount,
            hp: daemon.hp(),
            max_hp: daemon.max_hp(),
        };
        let fainted = daemon.is_fainted().then(|| BattleEvent::Fainted {
            side,
            daemon: daemon.name().to_string(),
        });

        self.emit(corrupted);
        if let Some(event) = fainted {
            self.emit(event);
        }
    }

    fn check_faint(&mut self) {
        self.state = StateTag::CheckFaint;

        if self.enemy.active().is_fainted() {
            self.award_victory_xp();
            self.finish(Outcome::Win);
        } else if self.player.active().is_fainted() {
            if self.player.has_bench() {
                self.state = StateTag::AwaitingSwitch;
                self.emit(BattleEvent::SwitchRequired);
            } else {
                self.finish(Outcome::Loss);
            }
        } else {
            self.state = StateTag::AwaitingActions;
        }
    }

    // === Outcomes ===

    fn award_victory_xp(&mut self) {
        let catalog = self.catalog;
        let amount = self
            .enemy
            .active()
            .level()
            .saturating_mul(self.rules.xp_per_enemy_level);

        let daemon = self.player.active_mut();
        if daemon.is_fainted() {
            return;
        }
        let award = daemon.gain_xp(amount, catalog);
        let name = daemon.name().to_string();

        let mut events = vec![BattleEvent::XpGained {
            daemon: name.clone(),
            amount,
            xp: daemon.xp(),
            xp_to_next: daemon.xp_to_next(),
        }];
        for level_up in award.level_ups {
            events.push(BattleEvent::LevelUp {
                daemon: name.clone(),
                level: level_up.level,
                stats: level_up.stats,
            });
            for learned in level_up.learned {
                events.push(BattleEvent::ProgramLearned {
                    daemon: name.clone(),
                    program: learned.program,
                    forgotten: learned.forgotten,
                });
            }
        }

        for event in events {
            self.emit(event);
        }
    }

    fn store_capture(&mut self, chance: f64) {
        let copy = self.enemy.active().captured_copy();
        let daemon = copy.name().to_string();

        if self.player.roster().len() < self.rules.roster_capacity {
            self.player.roster_mut().push(copy);
            let roster_index = self.player.roster().len() - 1;
            self.emit(BattleEvent::Captured {
                daemon,
                chance,
                roster_index,
            });
            self.finish(Outcome::Captured);
        } else {
            self.emit(BattleEvent::CaptureDiscarded { daemon, chance });
            self.finish(Outcome::CapturedDiscarded);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = StateTag::Terminal;
        self.outcome = Some(outcome);
        tracing::info!(
            outcome = outcome.as_str(),
            turns = self.turn,
            "Battle session ended"
        );
        self.emit(BattleEvent::BattleEnded { outcome });
    }

    // === Helpers ===

    fn switch_player(&mut self, roster: usize) {
        let from = self.player.active_index();
        self.player.set_active(roster);
        let daemon = self.player.active().name().to_string();
        tracing::debug!(from, to = roster, daemon = %daemon, "Player switched");
        self.emit(BattleEvent::Switched {
            side: Side::Player,
            from,
            to: roster,
            daemon,
        });
    }

    /// Announcement for `action`, `None` if the program slot is empty
    fn used_event(&self, actor: Side, action: Action) -> Option<BattleEvent> {
        let daemon = self.side(actor).active();
        match action {
            Action::Program(idx) => Some(BattleEvent::ProgramUsed {
                side: actor,
                daemon: daemon.name().to_string(),
                program: daemon.program(idx)?.id.clone(),
            }),
            Action::Struggle => Some(BattleEvent::StruggleUsed {
                side: actor,
                daemon: daemon.name().to_string(),
            }),
        }
    }

    fn side(&self, side: Side) -> &SideState<'a> {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState<'a> {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }
}

/// Events describing a resolved hit on `defender`
fn hit_events(actor: Side, result: &HitResult, defender: &Daemon) -> Vec<BattleEvent> {
    let target = actor.opponent();
    let mut events = Vec::new();

    if !result.hit {
        events.push(BattleEvent::Missed { side: actor });
        return events;
    }

    if result.immune {
        events.push(BattleEvent::NoEffect { side: target });
    }

    if result.damage > 0 {
        events.push(BattleEvent::Damaged {
            side: target,
            amount: result.damage,
            hp: defender.hp(),
            max_hp: defender.max_hp(),
            effectiveness: Effectiveness::from_multiplier(result.effectiveness),
        });
    }

    match result.effect {
        Some(EffectOutcome::StatChanged {
            target: who,
            stat,
            stages,
        }) => {
            let side = match who {
                EffectTarget::User => actor,
                EffectTarget::Target => target,
            };
            events.push(BattleEvent::StatChanged { side, stat, stages });
        }
        Some(EffectOutcome::StatusInflicted(status)) => {
            events.push(BattleEvent::StatusInflicted {
                side: target,
                status,
            });
        }
        Some(EffectOutcome::StatusBlocked {
            attempted,
            existing,
        }) => {
            events.push(BattleEvent::StatusBlocked {
                side: target,
                attempted,
                existing,
            });
        }
        None => {}
    }

    if result.fainted {
        events.push(BattleEvent::Fainted {
            side: target,
            daemon: defender.name().to_string(),
        });
    }

    events
}
