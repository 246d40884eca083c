//! Battle session state and the intent entry point

use netrunner_protocol::{BattleEvent, Intent, Outcome, SessionKind, Side, StateTag, TurnReport};

use super::rng::{RandomSource, SeededRng};
use crate::error::{ActionError, SessionError};
use crate::rules::BattleRules;
use crate::types::{Catalog, Daemon, Roster, SideState};

/// One battle between the player's roster and an enemy roster.
///
/// The session borrows both rosters for its lifetime: HP, XP, and captures are
/// written straight back, so the caller sees the results once the session drops.
#[derive(Debug)]
pub struct BattleSession<'a, R: RandomSource = SeededRng> {
    pub(super) kind: SessionKind,
    pub(super) catalog: &'a Catalog,
    pub(super) rules: BattleRules,
    pub(super) player: SideState<'a>,
    pub(super) enemy: SideState<'a>,
    pub(super) turn: u32,
    pub(super) rng: R,
    pub(super) state: StateTag,
    pub(super) outcome: Option<Outcome>,
    pub(super) log: Vec<BattleEvent>,
}

/// Open a session with default rules and a seeded generator
pub fn create_session<'a>(
    kind: SessionKind,
    player: &'a mut Roster,
    enemy: &'a mut Roster,
    catalog: &'a Catalog,
    seed: u64,
) -> Result<BattleSession<'a>, SessionError> {
    create_session_with_rules(kind, player, enemy, catalog, BattleRules::default(), seed)
}

/// Open a session with custom rules
pub fn create_session_with_rules<'a>(
    kind: SessionKind,
    player: &'a mut Roster,
    enemy: &'a mut Roster,
    catalog: &'a Catalog,
    rules: BattleRules,
    seed: u64,
) -> Result<BattleSession<'a>, SessionError> {
    BattleSession::with_rng(kind, player, enemy, catalog, rules, SeededRng::new(seed))
}

impl<'a, R: RandomSource> BattleSession<'a, R> {
    /// Open a session around any random source. Each side starts on its first
    /// conscious daemon. Every conscious player daemon must know a program; only
    /// the enemy falls back to struggle.
    pub fn with_rng(
        kind: SessionKind,
        player: &'a mut Roster,
        enemy: &'a mut Roster,
        catalog: &'a Catalog,
        rules: BattleRules,
        rng: R,
    ) -> Result<Self, SessionError> {
        if let Some((index, d)) = player
            .iter()
            .enumerate()
            .find(|(_, d)| d.is_conscious() && d.programs().is_empty())
        {
            return Err(SessionError::NoKnownPrograms {
                index,
                daemon: d.name().to_string(),
            });
        }

        let player = SideState::open(Side::Player, player)
            .ok_or(SessionError::NoConsciousDaemon(Side::Player))?;
        let enemy = SideState::open(Side::Enemy, enemy)
            .ok_or(SessionError::NoConsciousDaemon(Side::Enemy))?;

        let mut session = Self {
            kind,
            catalog,
            rules,
            player,
            enemy,
            turn: 0,
            rng,
            state: StateTag::Init,
            outcome: None,
            log: Vec::new(),
        };

        let (p, e) = (session.player.active(), session.enemy.active());
        let started = BattleEvent::BattleStarted {
            kind,
            player: p.name().to_string(),
            player_level: p.level(),
            enemy: e.name().to_string(),
            enemy_level: e.level(),
        };
        tracing::info!(
            kind = kind.as_str(),
            player = p.name(),
            enemy = e.name(),
            "Battle session opened"
        );
        session.emit(started);
        session.state = StateTag::AwaitingActions;

        Ok(session)
    }

    /// Validate and resolve one player intent.
    ///
    /// A rejected intent leaves the session exactly as it was: no draw, no event,
    /// no turn advance.
    pub fn submit_action(&mut self, intent: Intent) -> Result<TurnReport, ActionError> {
        if let Err(err) = self.check_intent(intent) {
            tracing::warn!(intent = intent.name(), error = %err, "Rejected intent");
            return Err(err);
        }

        let start = self.log.len();
        match intent {
            Intent::Switch { roster } if self.state == StateTag::AwaitingSwitch => {
                self.replace_fainted(roster);
            }
            Intent::Fight { program } => self.resolve_fight(program),
            Intent::Switch { roster } => self.resolve_switch(roster),
            Intent::Capture => self.resolve_capture(),
            Intent::Run => self.resolve_run(),
        }

        Ok(TurnReport {
            events: self.log[start..].to_vec(),
            state: self.state,
            outcome: self.outcome,
        })
    }

    fn check_intent(&self, intent: Intent) -> Result<(), ActionError> {
        if self.state.is_terminal() {
            return Err(ActionError::SessionOver);
        }
        if self.state == StateTag::AwaitingSwitch && !matches!(intent, Intent::Switch { .. }) {
            return Err(ActionError::SwitchRequired);
        }

        match intent {
            Intent::Fight { program } => {
                let known = self.player.active().programs().len();
                if program >= known {
                    return Err(ActionError::ProgramOutOfRange {
                        index: program,
                        known,
                    });
                }
            }
            Intent::Switch { roster } => {
                let size = self.player.roster().len();
                match self.player.roster().get(roster) {
                    None => {
                        return Err(ActionError::SwitchOutOfRange {
                            index: roster,
                            size,
                        });
                    }
                    Some(d) if d.is_fainted() => return Err(ActionError::SwitchToFainted(roster)),
                    Some(_) if roster == self.player.active_index() => {
                        return Err(ActionError::SwitchToActive(roster));
                    }
                    Some(_) => {}
                }
            }
            Intent::Capture if !self.kind.allows_capture() => {
                return Err(ActionError::NotAllowed {
                    intent: intent.name(),
                    kind: self.kind,
                });
            }
            Intent::Run if !self.kind.allows_run() => {
                return Err(ActionError::NotAllowed {
                    intent: intent.name(),
                    kind: self.kind,
                });
            }
            Intent::Capture | Intent::Run => {}
        }

        Ok(())
    }

    pub(super) fn emit(&mut self, event: BattleEvent) {
        tracing::trace!(?event, "Battle event");
        self.log.push(event);
    }

    // === Accessors ===

    pub fn current_state(&self) -> StateTag {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Set once the session reaches Terminal
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Turns resolved so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn rules(&self) -> &BattleRules {
        &self.rules
    }

    /// Every event since the session opened
    pub fn log(&self) -> &[BattleEvent] {
        &self.log
    }

    pub fn player(&self) -> &SideState<'a> {
        &self.player
    }

    pub fn enemy(&self) -> &SideState<'a> {
        &self.enemy
    }

    pub fn player_active(&self) -> &Daemon {
        self.player.active()
    }

    pub fn enemy_active(&self) -> &Daemon {
        self.enemy.active()
    }
}
