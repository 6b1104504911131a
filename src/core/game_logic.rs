//! Player-driven transitions.
//!
//! Each function validates every precondition before mutating anything and
//! reports a [`Rejection`] instead of partially applying. The engine returns
//! the untouched input state on rejection either way.

use super::constants::DEFAULT_RUNS;
use super::events::{GameEvent, Rejection};
use super::game_state::GameState;
use super::resolution::resolve_cycle;
use crate::adventurer::{create_adventurer, Adventurer, AdventurerStatus};
use crate::catalog::{self, DungeonId, WeaponId};
use rand::Rng;
use tracing::info;

type Outcome = Result<Vec<GameEvent>, Rejection>;

fn find_adventurer<'a>(state: &'a GameState, id: &str) -> Result<&'a Adventurer, Rejection> {
    state
        .adventurer(id)
        .ok_or_else(|| Rejection::UnknownAdventurer(id.to_string()))
}

fn find_adventurer_mut<'a>(
    state: &'a mut GameState,
    id: &str,
) -> Result<&'a mut Adventurer, Rejection> {
    state
        .adventurer_mut(id)
        .ok_or_else(|| Rejection::UnknownAdventurer(id.to_string()))
}

fn require_status(adventurer: &Adventurer, allowed: &[AdventurerStatus]) -> Result<(), Rejection> {
    if allowed.contains(&adventurer.status) {
        Ok(())
    } else {
        Err(Rejection::WrongStatus(adventurer.status.label()))
    }
}

/// Forges one weapon from inventory materials.
pub fn craft_weapon(state: &mut GameState, weapon_id: WeaponId, now: i64) -> Outcome {
    let weapon = catalog::weapon(weapon_id);
    if state.player.level < weapon.required_level {
        return Err(Rejection::ShopLevelTooLow {
            have: state.player.level,
            need: weapon.required_level,
        });
    }
    if !state.inventory.has_materials(weapon.required_materials) {
        return Err(Rejection::MissingMaterials);
    }

    state.inventory.consume_materials(weapon.required_materials);
    state.inventory.add_weapon(weapon_id);
    state.touch(now);

    Ok(vec![GameEvent::WeaponCrafted { weapon: weapon_id }])
}

/// Sells a weapon to an idle adventurer, who equips it on the spot. Any
/// previously equipped weapon is discarded.
pub fn sell_weapon(
    state: &mut GameState,
    weapon_id: WeaponId,
    adventurer_id: &str,
    now: i64,
) -> Outcome {
    let weapon = catalog::weapon(weapon_id);
    let adventurer = find_adventurer(state, adventurer_id)?;
    if state.inventory.weapon(weapon_id) < 1 {
        return Err(Rejection::OutOfStock(weapon_id));
    }
    require_status(adventurer, &[AdventurerStatus::Idle])?;
    if adventurer.gold < weapon.sell_price {
        return Err(Rejection::AdventurerCannotAfford {
            price: weapon.sell_price,
            has: adventurer.gold,
        });
    }

    let price = weapon.sell_price;
    let exp_gained = catalog::sale_exp(price);

    state.inventory.remove_weapon(weapon_id);
    let adventurer = find_adventurer_mut(state, adventurer_id)?;
    adventurer.gold -= price;
    adventurer.weapon = Some(weapon_id);

    state.player.gold = state.player.gold.saturating_add(price);
    let levels = state.player.gain_exp(exp_gained);
    state.total_weapons_sold += 1;
    state.touch(now);

    let mut events = vec![GameEvent::WeaponSold {
        weapon: weapon_id,
        adventurer_id: adventurer_id.to_string(),
        price,
        exp_gained,
    }];
    if levels > 0 {
        info!(level = state.player.level, "shop leveled up");
        events.push(GameEvent::ShopLeveledUp {
            new_level: state.player.level,
        });
    }
    Ok(events)
}

/// Dumps a weapon for half its price. No experience, not counted as a sale.
pub fn sell_weapon_direct(state: &mut GameState, weapon_id: WeaponId, now: i64) -> Outcome {
    if !state.inventory.remove_weapon(weapon_id) {
        return Err(Rejection::OutOfStock(weapon_id));
    }
    let price = catalog::direct_sale_price(catalog::weapon(weapon_id).sell_price);
    state.player.gold = state.player.gold.saturating_add(price);
    state.touch(now);

    Ok(vec![GameEvent::WeaponSoldDirect {
        weapon: weapon_id,
        price,
    }])
}

/// Sends an adventurer into a dungeon.
///
/// From `Idle` this starts a fresh expedition of `runs` cycles with empty
/// loot. From `Returned` it continues the previous expedition, keeping loot
/// and run counters.
pub fn dispatch_to_dungeon(
    state: &mut GameState,
    adventurer_id: &str,
    dungeon_id: DungeonId,
    runs: Option<u32>,
    now: i64,
) -> Outcome {
    let dungeon = catalog::dungeon(dungeon_id);
    let adventurer = find_adventurer_mut(state, adventurer_id)?;
    require_status(
        adventurer,
        &[AdventurerStatus::Idle, AdventurerStatus::Returned],
    )?;
    if adventurer.level < dungeon.required_level {
        return Err(Rejection::AdventurerLevelTooLow {
            have: adventurer.level,
            need: dungeon.required_level,
        });
    }
    if !adventurer.is_alive() {
        return Err(Rejection::Exhausted);
    }

    let runs = runs.unwrap_or(DEFAULT_RUNS).max(1);
    let fresh = adventurer.status == AdventurerStatus::Idle;
    if fresh {
        adventurer.loot.clear();
        adventurer.target_runs = runs;
        adventurer.completed_runs = 0;
    }
    adventurer.status = AdventurerStatus::Adventuring;
    adventurer.dungeon = Some(dungeon_id);
    adventurer.departed_at = Some(now);

    info!(
        adventurer = %adventurer.name,
        dungeon = %dungeon_id,
        runs = adventurer.target_runs,
        continuing = !fresh,
        "adventurer dispatched"
    );
    let event = GameEvent::Dispatched {
        adventurer_id: adventurer_id.to_string(),
        dungeon: dungeon_id,
        runs: adventurer.target_runs,
        continuing: !fresh,
    };
    state.touch(now);
    Ok(vec![event])
}

/// Resolves one adventurer's current cycle if it has run its full duration.
pub fn resolve_dungeon_run(
    state: &mut GameState,
    adventurer_id: &str,
    now: i64,
    rng: &mut impl Rng,
) -> Outcome {
    let adventurer = find_adventurer_mut(state, adventurer_id)?;
    require_status(adventurer, &[AdventurerStatus::Adventuring])?;
    if !adventurer.cycle_elapsed(now) {
        return Err(Rejection::RunNotFinished);
    }
    let outcome = resolve_cycle(adventurer, now, rng).ok_or(Rejection::RunNotFinished)?;

    let mut events = Vec::new();
    if outcome.levels_gained > 0 {
        events.push(GameEvent::AdventurerLeveledUp {
            adventurer_id: adventurer_id.to_string(),
            new_level: adventurer.level,
        });
    }
    events.push(GameEvent::RunResolved {
        adventurer_id: adventurer_id.to_string(),
        outcome,
    });
    state.touch(now);
    Ok(events)
}

/// The shop buys a returned adventurer's loot at catalog prices.
pub fn settle_loot(state: &mut GameState, adventurer_id: &str, now: i64) -> Outcome {
    let adventurer = find_adventurer(state, adventurer_id)?;
    require_status(adventurer, &[AdventurerStatus::Returned])?;

    let cost = catalog::loot_value(&adventurer.loot);
    let units = adventurer.loot_units();
    if adventurer.has_loot() && state.player.gold < cost {
        return Err(Rejection::ShopCannotAfford {
            cost,
            has: state.player.gold,
        });
    }

    let loot = std::mem::take(&mut find_adventurer_mut(state, adventurer_id)?.loot);
    for (material, amount) in &loot {
        state.inventory.add_material(*material, *amount);
    }
    state.player.gold -= cost;
    state.total_materials_bought = state.total_materials_bought.saturating_add(units);

    let adventurer = find_adventurer_mut(state, adventurer_id)?;
    adventurer.gold = adventurer.gold.saturating_add(cost);
    send_home(adventurer);
    info!(adventurer = %adventurer.name, cost, units, "loot settled");

    state.touch(now);
    Ok(vec![GameEvent::LootSettled {
        adventurer_id: adventurer_id.to_string(),
        cost,
        units,
    }])
}

/// Throws away a returned adventurer's loot without paying for it.
pub fn discard_loot(state: &mut GameState, adventurer_id: &str, now: i64) -> Outcome {
    let adventurer = find_adventurer_mut(state, adventurer_id)?;
    require_status(adventurer, &[AdventurerStatus::Returned])?;

    let units = adventurer.loot_units();
    adventurer.loot.clear();
    send_home(adventurer);

    state.touch(now);
    Ok(vec![GameEvent::LootDiscarded {
        adventurer_id: adventurer_id.to_string(),
        units,
    }])
}

fn send_home(adventurer: &mut Adventurer) {
    adventurer.status = AdventurerStatus::Idle;
    adventurer.dungeon = None;
    adventurer.departed_at = None;
}

/// Hires a new adventurer at a price that doubles with every hire.
pub fn hire_adventurer(
    state: &mut GameState,
    max_roster_size: usize,
    now: i64,
    rng: &mut impl Rng,
) -> Outcome {
    if state.adventurers.len() >= max_roster_size {
        return Err(Rejection::RosterFull);
    }
    let cost = catalog::hire_cost(state.adventurers.len());
    if state.player.gold < cost {
        return Err(Rejection::ShopCannotAfford {
            cost,
            has: state.player.gold,
        });
    }

    let recruit = create_adventurer(&state.adventurer_names(), now, rng);
    state.player.gold -= cost;
    info!(adventurer = %recruit.name, cost, "adventurer hired");
    let event = GameEvent::AdventurerHired {
        adventurer_id: recruit.id.clone(),
        name: recruit.name.clone(),
        cost,
    };
    state.adventurers.push(recruit);
    state.touch(now);
    Ok(vec![event])
}

/// Restores an adventurer to full HP for half a gold per missing point.
pub fn heal_adventurer(state: &mut GameState, adventurer_id: &str, now: i64) -> Outcome {
    let adventurer = find_adventurer(state, adventurer_id)?;
    if adventurer.is_full_hp() {
        return Err(Rejection::AlreadyHealthy);
    }
    let cost = catalog::heal_cost(adventurer.hp, adventurer.max_hp);
    if state.player.gold < cost {
        return Err(Rejection::ShopCannotAfford {
            cost,
            has: state.player.gold,
        });
    }

    state.player.gold -= cost;
    let adventurer = find_adventurer_mut(state, adventurer_id)?;
    adventurer.hp = adventurer.max_hp;

    state.touch(now);
    Ok(vec![GameEvent::AdventurerHealed {
        adventurer_id: adventurer_id.to_string(),
        cost,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MaterialId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn new_state() -> GameState {
        GameState::new(0, &mut StdRng::seed_from_u64(99))
    }

    fn first_id(state: &GameState) -> String {
        state.adventurers[0].id.clone()
    }

    #[test]
    fn test_craft_consumes_materials() {
        let mut state = new_state();
        let events = craft_weapon(&mut state, WeaponId::WoodenSword, 10).unwrap();

        assert_eq!(state.inventory.material(MaterialId::Wood), 7);
        assert_eq!(state.inventory.weapon(WeaponId::WoodenSword), 1);
        assert_eq!(state.player.gold, 100);
        assert_eq!(state.last_updated, 10);
        assert_eq!(
            events,
            vec![GameEvent::WeaponCrafted {
                weapon: WeaponId::WoodenSword
            }]
        );
    }

    #[test]
    fn test_craft_rejects_low_shop_level() {
        let mut state = new_state();
        state.inventory.add_material(MaterialId::Wood, 10);
        assert_eq!(
            craft_weapon(&mut state, WeaponId::WoodenBow, 0),
            Err(Rejection::ShopLevelTooLow { have: 1, need: 2 })
        );
    }

    #[test]
    fn test_sell_weapon_levels_shop() {
        let mut state = new_state();
        state.player.exp = 95;
        state.inventory.add_weapon(WeaponId::WoodenSword);
        let id = first_id(&state);

        let events = sell_weapon(&mut state, WeaponId::WoodenSword, &id, 5).unwrap();

        assert_eq!(state.player.gold, 110);
        assert_eq!(state.player.level, 2);
        assert_eq!(state.player.exp, 0);
        assert_eq!(state.total_weapons_sold, 1);
        let adv = state.adventurer(&id).unwrap();
        assert_eq!(adv.gold, 20);
        assert_eq!(adv.weapon, Some(WeaponId::WoodenSword));
        assert!(events.contains(&GameEvent::ShopLeveledUp { new_level: 2 }));
    }

    #[test]
    fn test_sell_weapon_requires_idle_buyer() {
        let mut state = new_state();
        state.inventory.add_weapon(WeaponId::WoodenSword);
        let id = first_id(&state);
        state.adventurers[0].status = AdventurerStatus::Returned;

        assert_eq!(
            sell_weapon(&mut state, WeaponId::WoodenSword, &id, 0),
            Err(Rejection::WrongStatus("Returned"))
        );
    }

    #[test]
    fn test_sell_direct_pays_half() {
        let mut state = new_state();
        state.inventory.add_weapon(WeaponId::WoodenStaff);
        sell_weapon_direct(&mut state, WeaponId::WoodenStaff, 0).unwrap();

        assert_eq!(state.player.gold, 107);
        assert_eq!(state.player.exp, 0);
        assert_eq!(state.total_weapons_sold, 0);
        assert_eq!(
            sell_weapon_direct(&mut state, WeaponId::WoodenStaff, 0),
            Err(Rejection::OutOfStock(WeaponId::WoodenStaff))
        );
    }

    #[test]
    fn test_dispatch_zero_runs_means_one() {
        let mut state = new_state();
        let id = first_id(&state);
        dispatch_to_dungeon(&mut state, &id, DungeonId::Forest, Some(0), 0).unwrap();
        assert_eq!(state.adventurers[0].target_runs, 1);
    }

    #[test]
    fn test_continuing_dispatch_keeps_loot() {
        let mut state = new_state();
        let id = first_id(&state);
        {
            let adv = &mut state.adventurers[0];
            adv.status = AdventurerStatus::Returned;
            adv.add_loot(MaterialId::Herb, 2);
            adv.completed_runs = 3;
        }

        let events = dispatch_to_dungeon(&mut state, &id, DungeonId::Forest, Some(5), 7).unwrap();

        let adv = &state.adventurers[0];
        assert_eq!(adv.status, AdventurerStatus::Adventuring);
        assert_eq!(adv.loot.get(&MaterialId::Herb), Some(&2));
        assert_eq!(adv.completed_runs, 3);
        assert_eq!(adv.departed_at, Some(7));
        assert!(matches!(
            events[0],
            GameEvent::Dispatched {
                continuing: true,
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_before_duration_is_rejected() {
        let mut state = new_state();
        let id = first_id(&state);
        dispatch_to_dungeon(&mut state, &id, DungeonId::Forest, None, 0).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            resolve_dungeon_run(&mut state, &id, 59_000, &mut rng),
            Err(Rejection::RunNotFinished)
        );
        assert!(resolve_dungeon_run(&mut state, &id, 60_000, &mut rng).is_ok());
        assert_eq!(state.adventurers[0].status, AdventurerStatus::Returned);
    }

    #[test]
    fn test_settle_empty_loot_goes_idle_for_free() {
        let mut state = new_state();
        let id = first_id(&state);
        state.adventurers[0].status = AdventurerStatus::Returned;
        state.adventurers[0].dungeon = Some(DungeonId::Forest);

        settle_loot(&mut state, &id, 0).unwrap();

        assert_eq!(state.adventurers[0].status, AdventurerStatus::Idle);
        assert_eq!(state.adventurers[0].dungeon, None);
        assert_eq!(state.player.gold, 100);
    }

    #[test]
    fn test_settle_moves_gold_and_materials() {
        let mut state = new_state();
        let id = first_id(&state);
        {
            let adv = &mut state.adventurers[0];
            adv.status = AdventurerStatus::Returned;
            adv.add_loot(MaterialId::Wood, 4);
            adv.add_loot(MaterialId::Leather, 1);
        }

        settle_loot(&mut state, &id, 0).unwrap();

        assert_eq!(state.player.gold, 84);
        assert_eq!(state.inventory.material(MaterialId::Wood), 14);
        assert_eq!(state.inventory.material(MaterialId::Leather), 1);
        assert_eq!(state.total_materials_bought, 5);
        let adv = &state.adventurers[0];
        assert_eq!(adv.gold, 46);
        assert!(adv.loot.is_empty());
        assert_eq!(adv.status, AdventurerStatus::Idle);
    }

    #[test]
    fn test_discard_clears_loot_without_payment() {
        let mut state = new_state();
        let id = first_id(&state);
        state.adventurers[0].status = AdventurerStatus::Returned;
        state.adventurers[0].add_loot(MaterialId::Gem, 3);

        discard_loot(&mut state, &id, 0).unwrap();

        assert_eq!(state.player.gold, 100);
        assert_eq!(state.adventurers[0].gold, 30);
        assert!(state.adventurers[0].loot.is_empty());
        assert_eq!(state.adventurers[0].status, AdventurerStatus::Idle);
    }

    #[test]
    fn test_hire_respects_cap() {
        let mut state = new_state();
        state.player.gold = u64::MAX / 2;
        let mut rng = StdRng::seed_from_u64(4);
        while state.adventurers.len() < 10 {
            hire_adventurer(&mut state, 10, 0, &mut rng).unwrap();
        }
        assert_eq!(
            hire_adventurer(&mut state, 10, 0, &mut rng),
            Err(Rejection::RosterFull)
        );
    }

    #[test]
    fn test_heal_charges_for_missing_hp() {
        let mut state = new_state();
        let id = first_id(&state);
        state.adventurers[0].hp = 10;

        heal_adventurer(&mut state, &id, 0).unwrap();

        assert_eq!(state.player.gold, 80);
        assert_eq!(state.adventurers[0].hp, 50);
        assert_eq!(
            heal_adventurer(&mut state, &id, 0),
            Err(Rejection::AlreadyHealthy)
        );
    }

    #[test]
    fn test_heal_rejected_when_shop_is_short() {
        let mut state = new_state();
        let id = first_id(&state);
        state.adventurers[0].hp = 10;
        state.player.gold = 5;
        let before = state.clone();

        assert_eq!(
            heal_adventurer(&mut state, &id, 3),
            Err(Rejection::ShopCannotAfford { cost: 20, has: 5 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_resale_replaces_equipped_weapon() {
        let mut state = new_state();
        let id = first_id(&state);
        state.adventurers[0].weapon = Some(WeaponId::WoodenSword);
        state.inventory.add_weapon(WeaponId::WoodenStaff);
        state.inventory.add_weapon(WeaponId::WoodenStaff);

        sell_weapon(&mut state, WeaponId::WoodenStaff, &id, 0).unwrap();

        assert_eq!(state.adventurers[0].weapon, Some(WeaponId::WoodenStaff));
        assert_eq!(state.inventory.weapon(WeaponId::WoodenStaff), 1);
        // The old sword is gone, not restocked.
        assert_eq!(state.inventory.weapon(WeaponId::WoodenSword), 0);
        assert_eq!(state.inventory.total_weapons(), 1);
        assert_eq!(state.adventurers[0].gold, 15);
    }

    #[test]
    fn test_unknown_adventurer() {
        let mut state = new_state();
        assert_eq!(
            heal_adventurer(&mut state, "nobody", 0),
            Err(Rejection::UnknownAdventurer("nobody".to_string()))
        );
    }
}
