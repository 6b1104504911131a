//! Builds freshly hired adventurers.

use super::types::{Adventurer, AdventurerStatus};
use crate::catalog;
use rand::Rng;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Personal gold a new hire arrives with.
pub const STARTING_ADVENTURER_GOLD: u64 = 30;

/// Names handed out to new hires.
pub const ADVENTURER_NAMES: [&str; 20] = [
    "Alex", "Ben", "Kyle", "Dana", "Emma", "Finn", "Glenn", "Hana", "Iris", "Jack", "Kate", "Rio",
    "Mia", "Noah", "Olivia", "Pete", "Quinn", "Ray", "Sarah", "Tom",
];

/// Creates a level 1 adventurer whose name is not in `existing_names`.
///
/// When every pooled name is taken the adventurer is called
/// "Adventurer N" with the smallest free N.
pub fn create_adventurer<S: AsRef<str>>(
    existing_names: &[S],
    now: i64,
    rng: &mut impl Rng,
) -> Adventurer {
    let taken = |candidate: &str| existing_names.iter().any(|n| n.as_ref() == candidate);

    let available: Vec<&str> = ADVENTURER_NAMES
        .iter()
        .copied()
        .filter(|n| !taken(n))
        .collect();

    let name = if available.is_empty() {
        (1u32..)
            .map(|n| format!("Adventurer {}", n))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| format!("Adventurer {}", now))
    } else {
        available[rng.gen_range(0..available.len())].to_string()
    };

    let max_hp = catalog::max_hp(1);
    Adventurer {
        id: new_adventurer_id(now),
        name,
        level: 1,
        exp: 0,
        hp: max_hp,
        max_hp,
        base_attack: catalog::base_attack(1),
        weapon: None,
        status: AdventurerStatus::Idle,
        dungeon: None,
        departed_at: None,
        loot: BTreeMap::new(),
        gold: STARTING_ADVENTURER_GOLD,
        target_runs: 0,
        completed_runs: 0,
    }
}

/// Time component for ordering plus a v4 UUID for uniqueness.
fn new_adventurer_id(now: i64) -> String {
    format!("adv_{}_{}", now, Uuid::new_v4().simple())
}
