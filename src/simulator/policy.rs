//! Scripted shopkeeper: picks the next actions from the current state.
//!
//! The policy is greedy and stateless. It only proposes actions; the engine
//! still decides whether each one is legal.

use crate::adventurer::{Adventurer, AdventurerStatus};
use crate::catalog::{self, DungeonId, WeaponId};
use crate::core::{Action, GameState};

/// Success chance the shopkeeper wants before sending someone somewhere.
const MIN_SUCCESS_RATE: f64 = 0.6;
/// Copies of each weapon kept in stock.
const STOCK_TARGET: u32 = 2;
/// Gold the shop keeps in reserve after hiring.
const HIRE_RESERVE_FACTOR: u64 = 2;

/// Settlement, healing, crafting, sales and hiring for this step.
pub fn plan(state: &GameState, max_roster: usize) -> Vec<Action> {
    let mut actions = Vec::new();
    let mut gold = state.player.gold;

    for adv in &state.adventurers {
        if adv.status != AdventurerStatus::Returned {
            continue;
        }
        let value = catalog::loot_value(&adv.loot);
        let adventurer_id = adv.id.clone();
        if value <= gold {
            gold -= value;
            actions.push(Action::SettleLoot { adventurer_id });
        } else {
            actions.push(Action::DiscardLoot { adventurer_id });
        }
    }

    for adv in &state.adventurers {
        if adv.is_full_hp() || adv.hp.saturating_mul(2) > adv.max_hp {
            continue;
        }
        let cost = catalog::heal_cost(adv.hp, adv.max_hp);
        if cost <= gold {
            gold -= cost;
            actions.push(Action::HealAdventurer {
                adventurer_id: adv.id.clone(),
            });
        }
    }

    actions.extend(craft_plan(state));

    for adv in &state.adventurers {
        if adv.status != AdventurerStatus::Idle {
            continue;
        }
        if let Some(weapon) = best_upgrade(state, adv) {
            actions.push(Action::SellWeapon {
                weapon,
                adventurer_id: adv.id.clone(),
            });
        }
    }

    let hire_cost = catalog::hire_cost(state.adventurers.len());
    if state.adventurers.len() < max_roster && gold >= hire_cost * HIRE_RESERVE_FACTOR {
        actions.push(Action::HireAdventurer);
    }

    actions
}

/// Dispatch orders for everyone idle, issued after sales so new weapons
/// count toward the dungeon choice.
pub fn dispatch_plan(state: &GameState, runs_per_dispatch: u32) -> Vec<Action> {
    state
        .adventurers
        .iter()
        .filter(|adv| {
            adv.status == AdventurerStatus::Idle && adv.hp.saturating_mul(2) > adv.max_hp
        })
        .map(|adv| Action::DispatchToDungeon {
            adventurer_id: adv.id.clone(),
            dungeon: pick_dungeon(adv),
            runs: Some(runs_per_dispatch),
        })
        .collect()
}

fn craft_plan(state: &GameState) -> Vec<Action> {
    let mut materials = state.inventory.clone();
    let mut actions = Vec::new();
    for id in WeaponId::ALL.iter().rev() {
        let weapon = catalog::weapon(*id);
        if weapon.required_level > state.player.level {
            continue;
        }
        while materials.weapon(*id) < STOCK_TARGET
            && materials.has_materials(weapon.required_materials)
        {
            materials.consume_materials(weapon.required_materials);
            materials.add_weapon(*id);
            actions.push(Action::CraftWeapon { weapon: *id });
        }
    }
    actions
}

/// Strongest stocked weapon the adventurer can pay for that beats what they
/// already carry.
fn best_upgrade(state: &GameState, adv: &Adventurer) -> Option<WeaponId> {
    let current = adv
        .weapon
        .map(|w| catalog::weapon(w).attack_bonus)
        .unwrap_or(0);
    WeaponId::ALL
        .iter()
        .copied()
        .filter(|id| state.inventory.weapon(*id) > 0)
        .map(catalog::weapon)
        .filter(|w| w.attack_bonus > current && w.sell_price <= adv.gold)
        .max_by_key(|w| w.attack_bonus)
        .map(|w| w.id)
}

fn pick_dungeon(adv: &Adventurer) -> DungeonId {
    DungeonId::ALL
        .iter()
        .copied()
        .rev()
        .find(|id| {
            let dungeon = catalog::dungeon(*id);
            let rate = catalog::success_rate(adv.total_attack(), dungeon.difficulty);
            adv.level >= dungeon.required_level && rate >= MIN_SUCCESS_RATE
        })
        .unwrap_or(DungeonId::Forest)
}
