use netrunner_protocol::{BattleEvent, Intent, Outcome, SessionKind, Side, StateTag, Status};

use crate::engine::fixtures::{catalog, daemon, slot};
use crate::engine::rng::ScriptedRng;
use crate::engine::{create_session, BattleSession};
use crate::error::{ActionError, SessionError};
use crate::rules::BattleRules;
use crate::types::{xp_needed, Catalog, Roster};

fn roster(catalog: &Catalog, members: &[(&str, u32)]) -> Roster {
    members
        .iter()
        .map(|(species, level)| daemon(catalog, species, *level))
        .collect::<Vec<_>>()
        .into()
}

fn scripted<'a>(
    kind: SessionKind,
    player: &'a mut Roster,
    enemy: &'a mut Roster,
    catalog: &'a Catalog,
    rng: ScriptedRng,
) -> BattleSession<'a, ScriptedRng> {
    BattleSession::with_rng(kind, player, enemy, catalog, BattleRules::default(), rng).unwrap()
}

fn first_actor(events: &[BattleEvent]) -> Option<Side> {
    events.iter().find_map(|e| match e {
        BattleEvent::ProgramUsed { side, .. } | BattleEvent::StruggleUsed { side, .. } => {
            Some(*side)
        }
        _ => None,
    })
}

// === Opening ===

#[test]
fn test_session_opens_awaiting_actions() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    let mut enemy = roster(&catalog, &[("rat_bot", 3)]);

    let session = create_session(SessionKind::Wild, &mut player, &mut enemy, &catalog, 1).unwrap();
    assert_eq!(session.current_state(), StateTag::AwaitingActions);
    assert_eq!(session.turn(), 0);
    assert!(session.outcome().is_none());
    assert_eq!(
        session.log(),
        &[BattleEvent::BattleStarted {
            kind: SessionKind::Wild,
            player: "virulet".to_string(),
            player_level: 5,
            enemy: "rat_bot".to_string(),
            enemy_level: 3,
        }]
    );
}

#[test]
fn test_session_needs_conscious_daemons() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    player.get_mut(0).unwrap().set_hp(0);
    let mut enemy = roster(&catalog, &[("rat_bot", 3)]);

    let err = create_session(SessionKind::Wild, &mut player, &mut enemy, &catalog, 1).unwrap_err();
    assert_eq!(err, SessionError::NoConsciousDaemon(Side::Player));

    let mut player = roster(&catalog, &[("virulet", 5)]);
    let mut empty = Roster::new();
    let err = create_session(SessionKind::Trainer, &mut player, &mut empty, &catalog, 1).unwrap_err();
    assert_eq!(err, SessionError::NoConsciousDaemon(Side::Enemy));
}

#[test]
fn test_session_rejects_player_without_programs() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("null_shell", 5)]);
    let mut enemy = roster(&catalog, &[("rat_bot", 3)]);

    let err = create_session(SessionKind::Trainer, &mut player, &mut enemy, &catalog, 1).unwrap_err();
    assert_eq!(
        err,
        SessionError::NoKnownPrograms {
            index: 0,
            daemon: "null_shell".to_string(),
        }
    );

    // A benched daemon with no programs could be switched in later
    let mut player = roster(&catalog, &[("virulet", 5), ("null_shell", 5)]);
    let err = create_session(SessionKind::Trainer, &mut player, &mut enemy, &catalog, 1).unwrap_err();
    assert!(matches!(err, SessionError::NoKnownPrograms { index: 1, .. }));

    // Fainted members never come back into play
    let mut player = roster(&catalog, &[("virulet", 5), ("null_shell", 5)]);
    player.get_mut(1).unwrap().set_hp(0);
    assert!(create_session(SessionKind::Trainer, &mut player, &mut enemy, &catalog, 1).is_ok());
}

#[test]
fn test_session_opens_on_first_conscious() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5), ("pyrowall", 5)]);
    player.get_mut(0).unwrap().set_hp(0);
    let mut enemy = roster(&catalog, &[("rat_bot", 3)]);

    let session = create_session(SessionKind::Wild, &mut player, &mut enemy, &catalog, 1).unwrap();
    assert_eq!(session.player().active_index(), 1);
    assert_eq!(session.player_active().name(), "pyrowall");
}

// === Rejections ===

#[test]
fn test_rejected_intents_leave_session_untouched() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    let mut enemy = roster(&catalog, &[("pyrowall", 5)]);
    let mut session =
        create_session(SessionKind::Trainer, &mut player, &mut enemy, &catalog, 1).unwrap();

    assert_eq!(
        session.submit_action(Intent::Capture),
        Err(ActionError::NotAllowed {
            intent: "capture",
            kind: SessionKind::Trainer,
        })
    );
    assert_eq!(
        session.submit_action(Intent::Run),
        Err(ActionError::NotAllowed {
            intent: "run",
            kind: SessionKind::Trainer,
        })
    );
    assert_eq!(
        session.submit_action(Intent::Fight { program: 9 }),
        Err(ActionError::ProgramOutOfRange { index: 9, known: 3 })
    );
    assert_eq!(
        session.submit_action(Intent::Switch { roster: 5 }),
        Err(ActionError::SwitchOutOfRange { index: 5, size: 1 })
    );
    assert_eq!(
        session.submit_action(Intent::Switch { roster: 0 }),
        Err(ActionError::SwitchToActive(0))
    );

    assert_eq!(session.log().len(), 1);
    assert_eq!(session.turn(), 0);
    assert_eq!(session.current_state(), StateTag::AwaitingActions);
    assert_eq!(session.player_active().hp(), session.player_active().max_hp());
}

#[test]
fn test_rejection_consumes_no_randomness() {
    let catalog = catalog();
    let mut player_a = roster(&catalog, &[("virulet", 5)]);
    let mut enemy_a = roster(&catalog, &[("pyrowall", 5)]);
    let mut player_b = roster(&catalog, &[("virulet", 5)]);
    let mut enemy_b = roster(&catalog, &[("pyrowall", 5)]);

    let mut a = create_session(SessionKind::Training, &mut player_a, &mut enemy_a, &catalog, 5).unwrap();
    let mut b = create_session(SessionKind::Training, &mut player_b, &mut enemy_b, &catalog, 5).unwrap();

    assert!(a.submit_action(Intent::Capture).is_err());
    assert!(a.submit_action(Intent::Fight { program: 7 }).is_err());

    let left = a.submit_action(Intent::Fight { program: 0 }).unwrap();
    let right = b.submit_action(Intent::Fight { program: 0 }).unwrap();
    assert_eq!(left, right);
}

// === Fight ===

#[test]
fn test_win_awards_xp() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 30)]);
    let mut enemy = roster(&catalog, &[("rat_bot", 1)]);

    {
        let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
        let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();

        assert_eq!(report.state, StateTag::Terminal);
        assert_eq!(report.outcome, Some(Outcome::Win));
        assert!(report.events.contains(&BattleEvent::XpGained {
            daemon: "virulet".to_string(),
            amount: 15,
            xp: 15,
            xp_to_next: xp_needed(30),
        }));
        assert_eq!(report.events.last(), Some(&BattleEvent::BattleEnded { outcome: Outcome::Win }));
        // The enemy never got to act
        assert_eq!(first_actor(&report.events), Some(Side::Player));
        assert!(!report
            .events
            .iter()
            .any(|e| matches!(e, BattleEvent::ProgramUsed { side: Side::Enemy, .. })));

        assert_eq!(session.submit_action(Intent::Fight { program: 0 }), Err(ActionError::SessionOver));
    }

    // Progression persists on the caller's roster
    assert_eq!(player.get(0).unwrap().xp(), 15);
    assert!(enemy.get(0).unwrap().is_fainted());
}

#[test]
fn test_win_can_level_up() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 1)]);
    player.get_mut(0).unwrap().gain_xp(90, &catalog);
    let mut enemy = roster(&catalog, &[("rat_bot", 1)]);
    enemy.get_mut(0).unwrap().set_hp(1);

    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();

    assert_eq!(report.outcome, Some(Outcome::Win));
    assert!(report.events.contains(&BattleEvent::XpGained {
        daemon: "virulet".to_string(),
        amount: 15,
        xp: 5,
        xp_to_next: 150,
    }));
    assert!(report
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::LevelUp { level: 2, .. })));
    assert_eq!(session.player_active().level(), 2);
    assert_eq!(session.player_active().hp(), session.player_active().max_hp());
}

#[test]
fn test_loss_when_last_daemon_faints() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("rat_bot", 1)]);
    let mut enemy = roster(&catalog, &[("virulet", 30)]);

    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();

    assert_eq!(report.outcome, Some(Outcome::Loss));
    assert!(session.is_terminal());
    assert!(report.events.contains(&BattleEvent::Fainted {
        side: Side::Player,
        daemon: "rat_bot".to_string(),
    }));
    assert!(!report.events.iter().any(|e| matches!(e, BattleEvent::XpGained { .. })));
}

#[test]
fn test_fainted_active_requires_switch() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("rat_bot", 1), ("rat_bot", 5)]);
    let mut enemy = roster(&catalog, &[("virulet", 30)]);

    let mut session = scripted(SessionKind::Trainer, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();
    assert_eq!(report.state, StateTag::AwaitingSwitch);
    assert_eq!(report.events.last(), Some(&BattleEvent::SwitchRequired));
    assert!(report.outcome.is_none());

    assert_eq!(
        session.submit_action(Intent::Fight { program: 0 }),
        Err(ActionError::SwitchRequired)
    );
    assert_eq!(
        session.submit_action(Intent::Switch { roster: 0 }),
        Err(ActionError::SwitchToFainted(0))
    );

    let report = session.submit_action(Intent::Switch { roster: 1 }).unwrap();
    assert_eq!(
        report.events,
        vec![BattleEvent::Switched {
            side: Side::Player,
            from: 0,
            to: 1,
            daemon: "rat_bot".to_string(),
        }]
    );
    assert_eq!(report.state, StateTag::AwaitingActions);
    assert_eq!(session.turn(), 1);
    assert_eq!(session.player_active().level(), 5);
}

#[test]
fn test_double_knockout_is_win_without_xp() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("pyrowall", 1)]);
    player.get_mut(0).unwrap().set_hp(1);
    let mut enemy = roster(&catalog, &[("rat_bot", 1)]);
    enemy.get_mut(0).unwrap().set_hp(1);
    enemy.get_mut(0).unwrap().inflict(Status::Corrupted);

    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();

    assert_eq!(report.outcome, Some(Outcome::Win));
    assert!(session.player_active().is_fainted());
    assert!(report.events.contains(&BattleEvent::CorruptionDamage {
        side: Side::Enemy,
        amount: 1,
        hp: 0,
        max_hp: 30,
    }));
    assert!(!report.events.iter().any(|e| matches!(e, BattleEvent::XpGained { .. })));
}

#[test]
fn test_empty_program_list_struggles() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    let mut enemy = roster(&catalog, &[("null_shell", 5)]);

    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();

    assert!(report.events.contains(&BattleEvent::StruggleUsed {
        side: Side::Enemy,
        daemon: "null_shell".to_string(),
    }));
    assert_eq!(session.player_active().hp(), session.player_active().max_hp() - 15);
}

// === Turn order ===

#[test]
fn test_faster_daemon_acts_first() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    let mut enemy = roster(&catalog, &[("rat_bot", 5)]);

    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();
    assert_eq!(first_actor(&report.events), Some(Side::Player));
}

#[test]
fn test_lagging_acts_last() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    player.get_mut(0).unwrap().inflict(Status::Lagging);
    let mut enemy = roster(&catalog, &[("rat_bot", 5)]);

    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();
    assert_eq!(first_actor(&report.events), Some(Side::Enemy));
}

#[test]
fn test_both_lagging_falls_back_to_speed() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    player.get_mut(0).unwrap().inflict(Status::Lagging);
    let mut enemy = roster(&catalog, &[("rat_bot", 5)]);
    enemy.get_mut(0).unwrap().inflict(Status::Lagging);

    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();
    assert_eq!(first_actor(&report.events), Some(Side::Player));
}

#[test]
fn test_speed_tie_uses_coin_flip() {
    let catalog = catalog();
    for (heads, expected) in [(true, Side::Player), (false, Side::Enemy)] {
        let mut player = roster(&catalog, &[("virulet", 5)]);
        let mut enemy = roster(&catalog, &[("virulet", 5)]);
        let rng = ScriptedRng::new().coins(&[heads]);

        let mut session = scripted(SessionKind::Trainer, &mut player, &mut enemy, &catalog, rng);
        let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();
        assert_eq!(first_actor(&report.events), Some(expected));
    }
}

#[test]
fn test_locked_skips_about_thirty_percent() {
    let catalog = catalog();
    let trials = 10_000;
    let mut locked_out = 0;

    for seed in 0..trials {
        let mut player = roster(&catalog, &[("virulet", 50)]);
        player.get_mut(0).unwrap().inflict(Status::Locked);
        let mut enemy = roster(&catalog, &[("rat_bot", 1)]);

        let mut session =
            create_session(SessionKind::Training, &mut player, &mut enemy, &catalog, seed).unwrap();
        let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();
        if report
            .events
            .contains(&BattleEvent::LockedOut { side: Side::Player })
        {
            locked_out += 1;
        }
    }

    let rate = f64::from(locked_out) / trials as f64;
    assert!((0.28..=0.32).contains(&rate), "locked out {rate}");
}

#[test]
fn test_locked_out_actor_does_nothing() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    player.get_mut(0).unwrap().inflict(Status::Locked);
    let mut enemy = roster(&catalog, &[("rat_bot", 5)]);

    let rng = ScriptedRng::new().chances(&[0.1]);
    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, rng);
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();

    assert_eq!(report.events[1], BattleEvent::LockedOut { side: Side::Player });
    assert_eq!(first_actor(&report.events), Some(Side::Enemy));
    assert_eq!(session.enemy_active().hp(), session.enemy_active().max_hp());
}

// === Switch ===

#[test]
fn test_switch_shields_incoming_daemon() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5), ("pyrowall", 5)]);
    let mut enemy = roster(&catalog, &[("rat_bot", 5)]);

    let mut session = scripted(SessionKind::Trainer, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Switch { roster: 1 }).unwrap();

    assert_eq!(report.events[0], BattleEvent::TurnStarted { turn: 1 });
    assert_eq!(
        report.events[1],
        BattleEvent::Switched {
            side: Side::Player,
            from: 0,
            to: 1,
            daemon: "pyrowall".to_string(),
        }
    );
    assert_eq!(first_actor(&report.events), Some(Side::Enemy));
    assert!(report
        .events
        .contains(&BattleEvent::TargetSwitchedOut { side: Side::Enemy }));
    assert!(!report
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::Damaged { .. })));
    assert_eq!(report.state, StateTag::AwaitingActions);

    let incoming = session.player().roster().get(1).unwrap();
    assert_eq!(incoming.hp(), incoming.max_hp());
    let outgoing = session.player().roster().get(0).unwrap();
    assert_eq!(outgoing.hp(), outgoing.max_hp());
    assert_eq!(session.player().active_index(), 1);
}

#[test]
fn test_switch_never_faints_outgoing_daemon() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5), ("pyrowall", 5)]);
    player.get_mut(0).unwrap().set_hp(2);
    let mut enemy = roster(&catalog, &[("rat_bot", 5)]);

    let mut session = scripted(SessionKind::Trainer, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Switch { roster: 1 }).unwrap();

    assert!(!report
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::Fainted { .. })));
    assert_eq!(report.state, StateTag::AwaitingActions);
    let outgoing = session.player().roster().get(0).unwrap();
    assert_eq!(outgoing.hp(), 2);
    assert!(outgoing.is_conscious());
}

#[test]
fn test_switch_clears_outgoing_status() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5), ("pyrowall", 5)]);
    player.get_mut(0).unwrap().inflict(Status::Corrupted);
    let mut enemy = roster(&catalog, &[("rat_bot", 5)]);

    let mut session = scripted(SessionKind::Trainer, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Switch { roster: 1 }).unwrap();

    assert!(session.player().roster().get(0).unwrap().status().is_none());
    assert!(!report
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::CorruptionDamage { .. })));
}

// === Status ===

#[test]
fn test_corruption_ticks_at_end_of_turn() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("pyrowall", 5)]);
    player.get_mut(0).unwrap().inflict(Status::Corrupted);
    let mut enemy = roster(&catalog, &[("virulet", 5)]);

    let shield = slot(player.get(0).unwrap(), "encrypt_shield");
    let mut session = scripted(SessionKind::Trainer, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: shield }).unwrap();

    let hp = session.player_active().hp();
    assert_eq!(
        report.events[report.events.len() - 1],
        BattleEvent::CorruptionDamage {
            side: Side::Player,
            amount: 4,
            hp,
            max_hp: 70,
        }
    );
    assert!(report.events.contains(&BattleEvent::StatChanged {
        side: Side::Player,
        stat: netrunner_protocol::Stat::Defense,
        stages: 1,
    }));
}

#[test]
fn test_status_program_inflicts_on_enemy() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    let mut enemy = roster(&catalog, &[("rat_bot", 5)]);

    let corrupt = slot(player.get(0).unwrap(), "corrupt_code");
    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: corrupt }).unwrap();

    assert!(report.events.contains(&BattleEvent::StatusInflicted {
        side: Side::Enemy,
        status: Status::Corrupted,
    }));
    assert!(report.events.iter().any(|e| matches!(
        e,
        BattleEvent::CorruptionDamage { side: Side::Enemy, .. }
    )));
    assert_eq!(session.enemy_active().status(), Some(Status::Corrupted));
}

#[test]
fn test_immune_target_reports_no_effect() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("rat_bot", 5)]);
    let mut enemy = roster(&catalog, &[("glitch_sprite", 5)]);

    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, ScriptedRng::new());
    let report = session.submit_action(Intent::Fight { program: 0 }).unwrap();

    assert!(report.events.contains(&BattleEvent::NoEffect { side: Side::Enemy }));
    assert_eq!(session.enemy_active().hp(), session.enemy_active().max_hp());
}

// === Run ===

#[test]
fn test_faster_player_always_escapes() {
    let catalog = catalog();
    for seed in 0..50 {
        let mut player = roster(&catalog, &[("virulet", 1)]);
        let mut enemy = roster(&catalog, &[("pyrowall", 1)]);
        let mut session = create_session(SessionKind::Wild, &mut player, &mut enemy, &catalog, seed).unwrap();
        assert_eq!(session.run_chance(), 1.0);

        let report = session.submit_action(Intent::Run).unwrap();
        assert_eq!(report.outcome, Some(Outcome::Ran));
        assert!(report.events.contains(&BattleEvent::Escaped { chance: 1.0 }));
    }
}

#[test]
fn test_failed_escape_gives_enemy_a_turn() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("pyrowall", 1)]);
    let mut enemy = roster(&catalog, &[("virulet", 1)]);

    let rng = ScriptedRng::new().chances(&[0.7]);
    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, rng);
    assert!((session.run_chance() - 0.6).abs() < 1e-9);

    let report = session.submit_action(Intent::Run).unwrap();
    assert!(matches!(report.events[1], BattleEvent::EscapeFailed { .. }));
    assert_eq!(first_actor(&report.events), Some(Side::Enemy));
    assert_eq!(report.state, StateTag::AwaitingActions);
    assert_eq!(session.turn(), 1);
}

// === Capture ===

#[test]
fn test_capture_adds_copy_to_roster() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    let mut enemy = roster(&catalog, &[("rat_bot", 3)]);

    {
        let rng = ScriptedRng::new().chances(&[0.0]);
        let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, rng);
        let report = session.submit_action(Intent::Capture).unwrap();

        assert_eq!(report.outcome, Some(Outcome::Captured));
        assert!(report.events.iter().any(|e| matches!(
            e,
            BattleEvent::Captured { roster_index: 1, .. }
        )));
    }

    assert_eq!(player.len(), 2);
    let caught = player.get(1).unwrap();
    assert_eq!(caught.name(), "rat_bot");
    assert_eq!(caught.level(), 3);
}

#[test]
fn test_capture_with_full_roster_is_discarded() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    let mut enemy = roster(&catalog, &[("rat_bot", 3)]);
    let rules = BattleRules {
        roster_capacity: 1,
        ..BattleRules::default()
    };

    {
        let rng = ScriptedRng::new().chances(&[0.0]);
        let mut session =
            BattleSession::with_rng(SessionKind::Wild, &mut player, &mut enemy, &catalog, rules, rng).unwrap();
        let report = session.submit_action(Intent::Capture).unwrap();
        assert_eq!(report.outcome, Some(Outcome::CapturedDiscarded));
    }

    assert_eq!(player.len(), 1);
}

#[test]
fn test_failed_capture_gives_enemy_a_turn() {
    let catalog = catalog();
    let mut player = roster(&catalog, &[("virulet", 5)]);
    let mut enemy = roster(&catalog, &[("rat_bot", 3)]);

    let rng = ScriptedRng::new().chances(&[0.99]);
    let mut session = scripted(SessionKind::Wild, &mut player, &mut enemy, &catalog, rng);
    let report = session.submit_action(Intent::Capture).unwrap();

    assert!(matches!(report.events[1], BattleEvent::CaptureFailed { .. }));
    assert_eq!(first_actor(&report.events), Some(Side::Enemy));
    assert!(report.outcome.is_none());
}

// === Determinism ===

#[test]
fn test_same_seed_same_battle() {
    let catalog = catalog();
    let play = |seed| {
        let mut player = roster(&catalog, &[("virulet", 5)]);
        let mut enemy = roster(&catalog, &[("pyrowall", 5)]);
        let mut session =
            create_session(SessionKind::Trainer, &mut player, &mut enemy, &catalog, seed).unwrap();
        while !session.is_terminal() && session.turn() < 50 {
            session.submit_action(Intent::Fight { program: 0 }).unwrap();
        }
        session.log().to_vec()
    };

    assert_eq!(play(77), play(77));
}
