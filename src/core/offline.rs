//! Offline catch-up.
//!
//! Replays the dungeon cycles that finished while the game was closed. Each
//! replayed cycle goes through the same [`resolve_cycle`] as live play, with
//! its own success, loot, damage and experience rolls.

use super::constants::MIN_OFFLINE_SECONDS;
use super::events::RunOutcome;
use super::game_state::GameState;
use super::resolution::resolve_cycle;
use crate::adventurer::{Adventurer, AdventurerStatus};
use crate::catalog::{self, MaterialId};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::info;

/// Summary of what happened while the game was closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfflineReport {
    /// Offline time considered, after the catch-up cap.
    pub offline_seconds: f64,
    /// True when the real gap was longer than the cap.
    pub capped: bool,
    pub cycles_resolved: u32,
    pub adventurers_returned: u32,
    pub adventurer_level_ups: u32,
    pub loot_gathered: BTreeMap<MaterialId, u32>,
}

impl OfflineReport {
    fn record(&mut self, outcome: &RunOutcome) {
        self.cycles_resolved += 1;
        self.adventurer_level_ups += outcome.levels_gained;
        if outcome.returned {
            self.adventurers_returned += 1;
        }
        for (material, amount) in &outcome.loot {
            *self.loot_gathered.entry(*material).or_insert(0) += *amount;
        }
    }
}

/// Catches the whole roster up to `now`.
///
/// Returns `None` and leaves the state untouched when less than a second has
/// passed since `last_updated`. Otherwise every adventurer is caught up and
/// `last_updated` moves to `now`.
pub fn process_offline_time(
    state: &mut GameState,
    now: i64,
    max_offline_seconds: f64,
    rng: &mut impl Rng,
) -> Option<OfflineReport> {
    let real_gap = now.saturating_sub(state.last_updated) as f64 / 1000.0;
    let offline_seconds = real_gap.min(max_offline_seconds);
    if offline_seconds < MIN_OFFLINE_SECONDS {
        return None;
    }

    let mut report = OfflineReport {
        offline_seconds,
        capped: real_gap > max_offline_seconds,
        ..OfflineReport::default()
    };

    for adventurer in state.adventurers.iter_mut() {
        catch_up_adventurer(
            adventurer,
            now,
            offline_seconds,
            max_offline_seconds,
            rng,
            &mut report,
        );
    }

    state.touch(now);
    info!(
        offline_seconds = report.offline_seconds,
        cycles = report.cycles_resolved,
        returned = report.adventurers_returned,
        "offline progress applied"
    );
    Some(report)
}

/// Replays one adventurer's pending cycles. Returns the number resolved.
///
/// The first pending cycle is resolved only if it has fully elapsed. The
/// budget for further cycles is `offline_seconds` plus the time since
/// departure minus one duration, clamped to the catch-up horizon, and each
/// further cycle spends one duration of it.
pub fn catch_up_adventurer(
    adventurer: &mut Adventurer,
    now: i64,
    offline_seconds: f64,
    max_offline_seconds: f64,
    rng: &mut impl Rng,
    report: &mut OfflineReport,
) -> u32 {
    if adventurer.status != AdventurerStatus::Adventuring {
        return 0;
    }
    let (Some(dungeon_id), Some(departed_at)) = (adventurer.dungeon, adventurer.departed_at) else {
        return 0;
    };
    if !adventurer.cycle_elapsed(now) {
        return 0;
    }

    let duration = catalog::dungeon(dungeon_id).duration_seconds as f64;
    let since_departure = now.saturating_sub(departed_at) as f64 / 1000.0;
    let mut remaining = (offline_seconds + since_departure - duration).min(max_offline_seconds);

    let mut resolved = 0;
    if let Some(outcome) = resolve_cycle(adventurer, now, rng) {
        report.record(&outcome);
        resolved += 1;
    }

    while remaining >= duration
        && adventurer.status == AdventurerStatus::Adventuring
        && adventurer.is_alive()
        && adventurer.completed_runs < adventurer.target_runs
    {
        if let Some(outcome) = resolve_cycle(adventurer, now, rng) {
            report.record(&outcome);
            resolved += 1;
        }
        remaining -= duration;
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DungeonId;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const HOUR_MS: i64 = 3_600_000;

    fn state_with_run(departed_at: i64, runs: u32) -> GameState {
        let mut rng = StdRng::seed_from_u64(33);
        let mut state = GameState::new(departed_at, &mut rng);
        let adv = &mut state.adventurers[0];
        adv.status = AdventurerStatus::Adventuring;
        adv.dungeon = Some(DungeonId::Forest);
        adv.departed_at = Some(departed_at);
        adv.target_runs = runs;
        adv.completed_runs = 0;
        state
    }

    #[test]
    fn test_under_one_second_is_a_no_op() {
        let mut state = state_with_run(0, 1);
        let before = state.clone();
        let report = process_offline_time(&mut state, 999, 86_400.0, &mut StepRng::new(0, 0));
        assert!(report.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_unfinished_first_cycle_is_skipped() {
        let mut state = state_with_run(0, 3);
        let report =
            process_offline_time(&mut state, 30_000, 86_400.0, &mut StepRng::new(0, 0)).unwrap();

        assert_eq!(report.cycles_resolved, 0);
        assert_eq!(state.adventurers[0].completed_runs, 0);
        assert_eq!(state.last_updated, 30_000);
    }

    #[test]
    fn test_replays_all_requested_runs() {
        let mut state = state_with_run(0, 5);
        let report =
            process_offline_time(&mut state, HOUR_MS, 86_400.0, &mut StepRng::new(0, 0)).unwrap();

        let adv = &state.adventurers[0];
        assert_eq!(report.cycles_resolved, 5);
        assert_eq!(report.adventurers_returned, 1);
        assert_eq!(adv.completed_runs, 5);
        assert_eq!(adv.status, AdventurerStatus::Returned);
        assert_eq!(adv.loot.get(&MaterialId::Wood), Some(&5));
        assert_eq!(report.loot_gathered.get(&MaterialId::Wood), Some(&5));
    }

    #[test]
    fn test_hp_depletion_stops_replay() {
        let mut state = state_with_run(0, 5);
        state.adventurers[0].hp = 14;
        // Every run fails for 7 damage: two runs drain 14 HP.
        let report = process_offline_time(
            &mut state,
            HOUR_MS,
            86_400.0,
            &mut StepRng::new(u64::MAX, 0),
        )
        .unwrap();

        let adv = &state.adventurers[0];
        assert_eq!(report.cycles_resolved, 2);
        assert_eq!(adv.hp, 0);
        assert_eq!(adv.completed_runs, 2);
        assert_eq!(adv.status, AdventurerStatus::Returned);
    }

    #[test]
    fn test_catch_up_is_bounded_by_horizon() {
        let mut state = state_with_run(0, u32::MAX);
        // Forced successes cost 1 HP each; keep the adventurer alive throughout.
        state.adventurers[0].hp = 1_000_000;
        let now = 1000 * HOUR_MS;
        let report =
            process_offline_time(&mut state, now, 86_400.0, &mut StepRng::new(0, 0)).unwrap();

        assert!(report.capped);
        assert_eq!(report.offline_seconds, 86_400.0);
        // One first cycle plus 86_400 / 60 further cycles, never more.
        assert_eq!(report.cycles_resolved, 1 + 1440);
        assert_eq!(state.adventurers[0].status, AdventurerStatus::Adventuring);
        assert_eq!(state.last_updated, now);
    }

    #[test]
    fn test_idle_adventurers_are_ignored() {
        let mut state = state_with_run(0, 1);
        state.adventurers[0].status = AdventurerStatus::Idle;
        let report =
            process_offline_time(&mut state, HOUR_MS, 86_400.0, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(report.cycles_resolved, 0);
    }
}
