//! Single-cycle dungeon resolution.
//!
//! Both the periodic tick and the offline catch-up loop resolve cycles
//! through [`resolve_cycle`], so a run settled while the game was closed
//! rolls and rewards exactly like one settled live.

use super::events::RunOutcome;
use crate::adventurer::{Adventurer, AdventurerStatus};
use crate::catalog::{self, Dungeon, MaterialId};
use rand::Rng;
use std::collections::BTreeMap;

/// Rolls success for one cycle and returns `(success, damage)`.
pub fn roll_run(adventurer: &Adventurer, dungeon: &Dungeon, rng: &mut impl Rng) -> (bool, u32) {
    let rate = catalog::success_rate(adventurer.total_attack(), dungeon.difficulty);
    let success = rng.gen::<f64>() < rate;
    (success, catalog::run_damage(dungeon.difficulty, success))
}

/// Rolls every drop in the dungeon's table independently.
pub fn roll_loot(
    dungeon: &Dungeon,
    adventurer_level: u32,
    rng: &mut impl Rng,
) -> BTreeMap<MaterialId, u32> {
    let mut loot = BTreeMap::new();
    for drop in dungeon.possible_drops {
        let chance = catalog::adjusted_drop_chance(drop.chance, adventurer_level);
        if rng.gen::<f64>() < chance {
            let amount = rng.gen_range(drop.min_amount..=drop.max_amount);
            *loot.entry(drop.material).or_insert(0) += amount;
        }
    }
    loot
}

/// Resolves the adventurer's current cycle in place.
///
/// The caller decides whether the cycle has elapsed. Returns `None` when the
/// adventurer is not adventuring or has no dungeon.
pub fn resolve_cycle(
    adventurer: &mut Adventurer,
    now: i64,
    rng: &mut impl Rng,
) -> Option<RunOutcome> {
    if adventurer.status != AdventurerStatus::Adventuring {
        return None;
    }
    let dungeon_id = adventurer.dungeon?;
    let dungeon = catalog::dungeon(dungeon_id);

    let (success, damage) = roll_run(adventurer, dungeon, rng);
    let loot = if success {
        roll_loot(dungeon, adventurer.level, rng)
    } else {
        BTreeMap::new()
    };

    adventurer.hp = adventurer.hp.saturating_sub(damage);
    for (material, amount) in &loot {
        adventurer.add_loot(*material, *amount);
    }

    let exp_gained = catalog::run_exp(dungeon.difficulty, success);
    let levels_gained = adventurer.gain_exp(exp_gained);
    let gold_gained = catalog::run_gold(dungeon.difficulty, success);
    adventurer.gold = adventurer.gold.saturating_add(gold_gained);

    adventurer.completed_runs = adventurer.completed_runs.saturating_add(1);
    let more_runs = adventurer.completed_runs < adventurer.target_runs && adventurer.is_alive();
    if more_runs {
        adventurer.departed_at = Some(now);
    } else {
        adventurer.status = AdventurerStatus::Returned;
        adventurer.departed_at = None;
        adventurer.target_runs = 0;
    }

    Some(RunOutcome {
        dungeon: dungeon_id,
        success,
        damage,
        loot,
        exp_gained,
        gold_gained,
        levels_gained,
        run_number: adventurer.completed_runs,
        returned: !more_runs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventurer::create_adventurer;
    use crate::catalog::DungeonId;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Every float draw is 0.0: success and every drop land.
    fn always_low() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every float draw is just under 1.0: the run fails.
    fn always_high() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn adventuring(runs: u32) -> Adventurer {
        let mut rng = StdRng::seed_from_u64(9);
        let mut adv = create_adventurer::<&str>(&[], 0, &mut rng);
        adv.status = AdventurerStatus::Adventuring;
        adv.dungeon = Some(DungeonId::Forest);
        adv.departed_at = Some(0);
        adv.target_runs = runs;
        adv
    }

    #[test]
    fn test_forced_success_damage() {
        let mut adv = adventuring(1);
        adv.base_attack = 100;
        let outcome = resolve_cycle(&mut adv, 60_000, &mut always_low()).unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.damage, 1);
        assert_eq!(adv.hp, 49);
    }

    #[test]
    fn test_forced_failure_damage() {
        let mut adv = adventuring(1);
        adv.base_attack = 100;
        let outcome = resolve_cycle(&mut adv, 60_000, &mut always_high()).unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.damage, 7);
        assert_eq!(adv.hp, 43);
        assert!(outcome.loot.is_empty());
        assert_eq!(outcome.gold_gained, 0);
        assert_eq!(outcome.exp_gained, 5);
    }

    #[test]
    fn test_success_rolls_every_drop_at_minimum() {
        let mut adv = adventuring(1);
        let outcome = resolve_cycle(&mut adv, 60_000, &mut always_low()).unwrap();

        assert_eq!(outcome.loot.get(&MaterialId::Wood), Some(&1));
        assert_eq!(outcome.loot.get(&MaterialId::Herb), Some(&1));
        assert_eq!(outcome.loot.get(&MaterialId::Leather), Some(&1));
        assert_eq!(adv.loot, outcome.loot);
        assert_eq!(adv.gold, 35);
        assert_eq!(adv.exp, 20);
    }

    #[test]
    fn test_last_run_returns_and_clears_departure() {
        let mut adv = adventuring(1);
        let outcome = resolve_cycle(&mut adv, 60_000, &mut always_low()).unwrap();

        assert!(outcome.returned);
        assert_eq!(outcome.run_number, 1);
        assert_eq!(adv.status, AdventurerStatus::Returned);
        assert_eq!(adv.departed_at, None);
        assert_eq!(adv.target_runs, 0);
        assert_eq!(adv.dungeon, Some(DungeonId::Forest));
    }

    #[test]
    fn test_more_runs_restart_the_clock() {
        let mut adv = adventuring(3);
        let outcome = resolve_cycle(&mut adv, 60_000, &mut always_low()).unwrap();

        assert!(!outcome.returned);
        assert_eq!(adv.status, AdventurerStatus::Adventuring);
        assert_eq!(adv.departed_at, Some(60_000));
        assert_eq!(adv.completed_runs, 1);
        assert_eq!(adv.target_runs, 3);
    }

    #[test]
    fn test_zero_hp_ends_multi_run_early() {
        let mut adv = adventuring(5);
        adv.hp = 7;
        let outcome = resolve_cycle(&mut adv, 60_000, &mut always_high()).unwrap();

        assert_eq!(adv.hp, 0);
        assert!(outcome.returned);
        assert_eq!(adv.status, AdventurerStatus::Returned);
        assert_eq!(adv.completed_runs, 1);
    }

    #[test]
    fn test_idle_adventurer_is_not_resolved() {
        let mut adv = adventuring(1);
        adv.status = AdventurerStatus::Idle;
        assert!(resolve_cycle(&mut adv, 60_000, &mut always_low()).is_none());
    }

    #[test]
    fn test_loot_accumulates_across_cycles() {
        let mut adv = adventuring(2);
        resolve_cycle(&mut adv, 60_000, &mut always_low()).unwrap();
        resolve_cycle(&mut adv, 120_000, &mut always_low()).unwrap();

        assert_eq!(adv.loot.get(&MaterialId::Wood), Some(&2));
        assert_eq!(adv.completed_runs, 2);
        assert_eq!(adv.status, AdventurerStatus::Returned);
    }
}
