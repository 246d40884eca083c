//! Hit, damage, and secondary effect resolution for a single program use

use netrunner_protocol::{Stat, Status};

use super::rng::RandomSource;
use crate::types::{Daemon, Program, ProgramEffect, TypeChart};

/// Same-type attack bonus
pub const STAB_MULTIPLIER: f64 = 1.5;

/// Who a secondary effect landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectTarget {
    User,
    Target,
}

/// What a program's secondary effect did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    /// Stage change actually applied
    StatChanged {
        target: EffectTarget,
        stat: Stat,
        stages: i8,
    },
    StatusInflicted(Status),
    /// The target already carried a status
    StatusBlocked { attempted: Status, existing: Status },
}

/// Result of one program use
#[derive(Debug, Clone, PartialEq)]
pub struct HitResult {
    pub hit: bool,
    /// Combined chart multiplier against the defender's types
    pub effectiveness: f64,
    /// The defender's types nullified the program
    pub immune: bool,
    pub damage: u32,
    /// The defender was knocked out by this use
    pub fainted: bool,
    pub effect: Option<EffectOutcome>,
}

/// Pre-modifier damage: `((2*level/5)+2) * power * (attack/defense) / 50 + 2`
pub fn base_damage(level: u32, power: u32, attack: f64, defense: f64) -> f64 {
    let level = f64::from(level);
    let defense = if defense > 0.0 { defense } else { 1.0 };
    ((2.0 * level / 5.0) + 2.0) * f64::from(power) * (attack / defense) / 50.0 + 2.0
}

/// Resolve `program` from `attacker` against `defender`, mutating both.
///
/// Draws one accuracy roll (skipped for power-0 programs), then one variance draw
/// when damage is actually dealt.
pub fn resolve<R: RandomSource + ?Sized>(
    attacker: &mut Daemon,
    defender: &mut Daemon,
    program: &Program,
    chart: &TypeChart,
    rng: &mut R,
) -> HitResult {
    let effectiveness = chart.effectiveness_multi(program.program_type, defender.types());
    let was_conscious = defender.is_conscious();

    let hit = !program.is_damaging() || rng.percent() < u32::from(program.accuracy);
    if !hit {
        return HitResult {
            hit,
            effectiveness,
            immune: false,
            damage: 0,
            fainted: false,
            effect: None,
        };
    }

    let immune = effectiveness <= 0.0;

    let mut damage = 0;
    if program.is_damaging() && effectiveness > 0.0 {
        let base = base_damage(
            attacker.level(),
            program.power,
            attacker.effective(Stat::Attack),
            defender.effective(Stat::Defense),
        );
        let stab = if attacker.has_type(program.program_type) {
            STAB_MULTIPLIER
        } else {
            1.0
        };
        let variance = rng.variance();
        let raw = (base * stab * effectiveness * variance).floor() as u32;
        damage = defender.take_damage(raw.max(1));
    }

    let effect = match program.effect {
        Some(_) if immune => None,
        Some(ProgramEffect::RaiseStat { stat, stages }) => Some(EffectOutcome::StatChanged {
            target: EffectTarget::User,
            stat,
            stages: attacker.modify_stage(stat, stages),
        }),
        Some(_) if defender.is_fainted() => None,
        Some(ProgramEffect::LowerStat { stat, stages }) => Some(EffectOutcome::StatChanged {
            target: EffectTarget::Target,
            stat,
            stages: defender.modify_stage(stat, stages.saturating_neg()),
        }),
        Some(ProgramEffect::InflictStatus { status }) => match defender.status() {
            Some(existing) => Some(EffectOutcome::StatusBlocked {
                attempted: status,
                existing,
            }),
            None => {
                defender.inflict(status);
                Some(EffectOutcome::StatusInflicted(status))
            }
        },
        None => None,
    };

    HitResult {
        hit,
        effectiveness,
        immune,
        damage,
        fainted: was_conscious && defender.is_fainted(),
        effect,
    }
}

/// Fallback attack for a daemon with no programs: `max(1, attack/4)`, never misses,
/// ignores the chart and same-type bonus
pub fn struggle(attacker: &Daemon, defender: &mut Daemon) -> HitResult {
    let was_conscious = defender.is_conscious();
    let damage = defender.take_damage((attacker.stats().attack / 4).max(1));

    HitResult {
        hit: true,
        effectiveness: 1.0,
        immune: false,
        damage,
        fainted: was_conscious && defender.is_fainted(),
        effect: None,
    }
}
