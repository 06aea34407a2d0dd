//! Full-game integration tests.
//!
//! These tests play complete games with the built-in controllers and check
//! the invariants that must hold at every turn boundary.

use camp_escape::{
    CautiousController, Controller, GameEvent, GameRng, HealthState, MapBuilder, PlayerId,
    RandomController, RulesConfig, SchedulingPolicy, Session, TurnEnding,
};

fn random_map(seed: u64, config: &RulesConfig) -> camp_escape::Map {
    let mut rng = GameRng::new(seed);
    let mut builder = MapBuilder::new(config);
    for _ in 0..config.min_authored_zones + (seed % 5) as usize {
        builder.append_random_zone(&mut rng).unwrap();
    }
    builder.close().unwrap()
}

fn play(seed: u64, config: RulesConfig, controller: &mut impl Controller) -> Session {
    let map = random_map(seed, &config);
    let mut session = Session::new(map, config, seed, None).unwrap();

    while let Some(report) = session.play_turn(controller).unwrap() {
        let world = session.world();
        // Only real actions are followed by an encounter check.
        let resolved = report.actions.iter().filter(|r| !r.outcome.is_wasted()).count();
        assert_eq!(report.encounters.len(), resolved);
        assert!(!report.actions.is_empty());

        for player in PlayerId::both() {
            let p = &world.players[player];
            if p.is_dead() {
                assert!(!p.is_active());
            }
        }
        assert!(report.turn <= 10_000, "game did not terminate");
    }
    session
}

// =============================================================================
// Complete Games
// =============================================================================

/// Test that cautious games always finish with both players departed.
#[test]
fn test_cautious_games_finish() {
    for seed in 0..40 {
        let session = play(seed, RulesConfig::default(), &mut CautiousController::default());
        assert!(session.is_finished());
        assert!(session.world().all_departed());
        assert!(session.events().any(|e| matches!(e, GameEvent::GameFinished)));
    }
}

/// Test that random games finish too, under both scheduling policies.
#[test]
fn test_random_games_finish() {
    for seed in 0..40 {
        for policy in [SchedulingPolicy::Alternate, SchedulingPolicy::ShuffledRounds] {
            let config = RulesConfig::default().with_scheduling(policy);
            let session = play(seed, config, &mut RandomController::new(seed + 1000));
            assert!(session.world().all_departed());
        }
    }
}

/// Test that the same seeds replay the same game.
#[test]
fn test_deterministic() {
    let a = play(17, RulesConfig::default(), &mut RandomController::new(3));
    let b = play(17, RulesConfig::default(), &mut RandomController::new(3));
    assert_eq!(a.world(), b.world());
    assert_eq!(a.history(), b.history());
    assert_eq!(a.events().events(), b.events().events());
}

/// Test that the summary matches how each player left.
#[test]
fn test_summary_matches_world() {
    for seed in 0..20 {
        let config = RulesConfig::default();
        let map = random_map(seed, &config);
        let mut session = Session::new(map, config, seed, None).unwrap();
        let summary = session.run(&mut CautiousController::default()).unwrap();

        for player in PlayerId::both() {
            let died = session.world().players[player].health == HealthState::Dead;
            assert_eq!(summary.results[player] == TurnEnding::Died, died);
            assert_eq!(summary.escaped(player), !died);
        }
        assert_eq!(summary.turns, session.turn());
    }
}

/// Test that both players act while both are on the map.
#[test]
fn test_players_alternate() {
    let config = RulesConfig::default();
    let map = random_map(4, &config);
    let mut session = Session::new(map, config, 4, None).unwrap();
    let mut controller = CautiousController::default();

    let mut previous: Option<PlayerId> = None;
    loop {
        let both_active = PlayerId::both().all(|p| session.world().is_active(p));
        let Some(report) = session.play_turn(&mut controller).unwrap() else {
            break;
        };
        if let (true, Some(prev)) = (both_active, previous) {
            assert_eq!(report.actor, prev.other());
        }
        previous = Some(report.actor);
    }
}
