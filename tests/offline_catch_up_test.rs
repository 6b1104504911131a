//! Offline catch-up through `Action::ProcessOfflineTime`.

use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use weaponshop::adventurer::AdventurerStatus;
use weaponshop::catalog::DungeonId;
use weaponshop::core::{Action, Engine, GameConfig, GameEvent, GameState, OfflineReport};
use weaponshop::persistence::{decode_state, encode_state};

const T0: i64 = 1_700_000_000_000;
const HOUR_MS: i64 = 3_600_000;

fn dispatched(runs: u32) -> (Engine, GameState, String) {
    let engine = Engine::default();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let state = GameState::new(T0, &mut rng);
    let id = state.adventurers[0].id.clone();
    let state = engine.apply(
        &state,
        Action::DispatchToDungeon {
            adventurer_id: id.clone(),
            dungeon: DungeonId::Forest,
            runs: Some(runs),
        },
        T0,
        &mut rng,
    );
    (engine, state, id)
}

fn report_of(events: &[GameEvent]) -> Option<&OfflineReport> {
    events.iter().find_map(|e| match e {
        GameEvent::OfflineProgress(report) => Some(report),
        _ => None,
    })
}

#[test]
fn test_five_runs_resolved_offline() {
    let (engine, state, id) = dispatched(5);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let step = engine.step(&state, Action::ProcessOfflineTime, T0 + HOUR_MS, &mut rng);

    let adv = step.state.adventurer(&id).unwrap();
    assert_eq!(adv.completed_runs, 5);
    assert_eq!(adv.status, AdventurerStatus::Returned);
    assert_eq!(step.state.last_updated, T0 + HOUR_MS);

    let report = report_of(&step.events).unwrap();
    assert_eq!(report.cycles_resolved, 5);
    assert_eq!(report.adventurers_returned, 1);
    assert!(!report.capped);
}

#[test]
fn test_thousand_hours_away_is_bounded() {
    let (engine, mut state, id) = dispatched(u32::MAX);
    // Forced successes cost 1 HP; give enough to outlast the horizon.
    state.adventurers[0].hp = 10_000;
    state.adventurers[0].max_hp = 10_000;
    let step = engine.step(
        &state,
        Action::ProcessOfflineTime,
        T0 + 1000 * HOUR_MS,
        &mut StepRng::new(0, 0),
    );

    let report = report_of(&step.events).unwrap();
    assert!(report.capped);
    assert_eq!(report.offline_seconds, 86_400.0);
    // The cycle that was already due plus at most 24h / 60s more.
    assert!(report.cycles_resolved <= 1 + 1440);
    assert!(report.cycles_resolved > 1);
    let adv = step.state.adventurer(&id).unwrap();
    assert_eq!(adv.completed_runs, report.cycles_resolved);
}

#[test]
fn test_shorter_cap_from_config() {
    let engine = Engine::new(GameConfig {
        max_offline_hours: 1,
        ..GameConfig::default()
    });
    let (_, mut state, _) = dispatched(u32::MAX);
    state.adventurers[0].hp = 10_000;
    state.adventurers[0].max_hp = 10_000;

    let step = engine.step(
        &state,
        Action::ProcessOfflineTime,
        T0 + 48 * HOUR_MS,
        &mut StepRng::new(0, 0),
    );
    let report = report_of(&step.events).unwrap();
    assert_eq!(report.offline_seconds, 3_600.0);
    assert!(report.cycles_resolved <= 1 + 60);
}

#[test]
fn test_returned_adventurers_wait_for_settlement() {
    let (engine, mut state, id) = dispatched(1);
    state.adventurers[0].status = AdventurerStatus::Returned;
    state.adventurers[0].departed_at = None;

    let step = engine.step(
        &state,
        Action::ProcessOfflineTime,
        T0 + 5 * HOUR_MS,
        &mut ChaCha8Rng::seed_from_u64(3),
    );
    let adv = step.state.adventurer(&id).unwrap();
    assert_eq!(adv.status, AdventurerStatus::Returned);
    assert_eq!(report_of(&step.events).unwrap().cycles_resolved, 0);
}

#[test]
fn test_short_absence_changes_nothing() {
    let (engine, state, _) = dispatched(3);
    let step = engine.step(
        &state,
        Action::ProcessOfflineTime,
        T0 + 500,
        &mut ChaCha8Rng::seed_from_u64(4),
    );
    assert_eq!(step.state, state);
    assert!(step.events.is_empty());
}

#[test]
fn test_zero_hour_horizon_turns_catch_up_off() {
    let engine = Engine::new(GameConfig {
        max_offline_hours: 0,
        ..GameConfig::default()
    });
    let (_, state, _) = dispatched(5);
    let step = engine.step(
        &state,
        Action::ProcessOfflineTime,
        T0 + 10 * HOUR_MS,
        &mut ChaCha8Rng::seed_from_u64(5),
    );
    assert_eq!(step.state, state);
    assert!(step.events.is_empty());
}

#[test]
fn test_extreme_saved_timestamps_do_not_overflow() {
    let (engine, mut state, id) = dispatched(3);
    state.last_updated = i64::MIN;
    state.adventurers[0].departed_at = Some(i64::MAX);
    let loaded = decode_state(&encode_state(&state).unwrap()).unwrap();
    assert_eq!(loaded, state);

    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let step = engine.step(&loaded, Action::ProcessOfflineTime, T0, &mut rng);
    let report = report_of(&step.events).unwrap();
    assert!(report.capped);
    assert_eq!(report.cycles_resolved, 0);
    assert_eq!(step.state.last_updated, T0);

    // A departure far in the future never finishes.
    let step = engine.step(&step.state, Action::Tick, T0 + HOUR_MS, &mut rng);
    let adv = step.state.adventurer(&id).unwrap();
    assert_eq!(adv.status, AdventurerStatus::Adventuring);
    assert_eq!(adv.completed_runs, 0);
}

#[test]
fn test_departure_at_start_of_time_is_capped() {
    let (engine, mut state, id) = dispatched(u32::MAX);
    state.adventurers[0].departed_at = Some(i64::MIN);
    state.adventurers[0].hp = 10_000;
    state.adventurers[0].max_hp = 10_000;

    let step = engine.step(
        &state,
        Action::ProcessOfflineTime,
        T0 + HOUR_MS,
        &mut StepRng::new(0, 0),
    );
    let adv = step.state.adventurer(&id).unwrap();
    // One due cycle plus at most a full horizon of Forest runs.
    assert!(adv.completed_runs >= 1);
    assert!(adv.completed_runs <= 1 + 1440);
}
