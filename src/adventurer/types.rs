use crate::catalog::{self, DungeonId, MaterialId, WeaponId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where an adventurer is in the dispatch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdventurerStatus {
    /// In town, can buy weapons and be dispatched.
    #[default]
    Idle,
    /// Inside a dungeon, waiting for the current cycle to elapse.
    Adventuring,
    /// Back from the dungeon with loot waiting to be settled.
    Returned,
}

impl AdventurerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AdventurerStatus::Idle => "Idle",
            AdventurerStatus::Adventuring => "Adventuring",
            AdventurerStatus::Returned => "Returned",
        }
    }
}

/// A hired non-player character who buys weapons and runs dungeons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adventurer {
    pub id: String,
    pub name: String,
    pub level: u32,
    /// Experience toward the next level.
    pub exp: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub base_attack: u32,
    /// Equipped weapon. Not backed by inventory stock.
    #[serde(default)]
    pub weapon: Option<WeaponId>,
    #[serde(default)]
    pub status: AdventurerStatus,
    /// Set while adventuring; kept after return until loot is settled.
    #[serde(default)]
    pub dungeon: Option<DungeonId>,
    /// Start of the current cycle in epoch milliseconds. Only set while adventuring.
    #[serde(default)]
    pub departed_at: Option<i64>,
    #[serde(default)]
    pub loot: BTreeMap<MaterialId, u32>,
    /// Personal purse, spent on weapons and filled by runs and loot sales.
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub target_runs: u32,
    #[serde(default)]
    pub completed_runs: u32,
}

impl Adventurer {
    /// Base attack plus the equipped weapon's bonus.
    pub fn total_attack(&self) -> u32 {
        let bonus = self
            .weapon
            .map(|w| catalog::weapon(w).attack_bonus)
            .unwrap_or(0);
        self.base_attack.saturating_add(bonus)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_full_hp(&self) -> bool {
        self.hp >= self.max_hp
    }

    pub fn has_loot(&self) -> bool {
        self.loot.values().any(|n| *n > 0)
    }

    /// Number of material units currently carried.
    pub fn loot_units(&self) -> u64 {
        self.loot.values().map(|n| *n as u64).sum()
    }

    pub fn add_loot(&mut self, material: MaterialId, amount: u32) {
        let entry = self.loot.entry(material).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Milliseconds left in the current cycle, or `None` when not adventuring.
    pub fn remaining_ms(&self, now: i64) -> Option<i64> {
        if self.status != AdventurerStatus::Adventuring {
            return None;
        }
        let dungeon = catalog::dungeon(self.dungeon?);
        let departed_at = self.departed_at?;
        Some(
            departed_at
                .saturating_add(dungeon.duration_ms())
                .saturating_sub(now)
                .max(0),
        )
    }

    /// True when the adventurer is adventuring and the current cycle has run
    /// its full duration by `now`.
    pub fn cycle_elapsed(&self, now: i64) -> bool {
        self.remaining_ms(now) == Some(0)
    }

    /// Adds experience and applies every level gained. Each level resets
    /// max HP and base attack to the new level's values; current HP is left
    /// alone. Returns the number of levels gained.
    pub fn gain_exp(&mut self, amount: u64) -> u32 {
        self.exp = self.exp.saturating_add(amount);
        let mut levels = 0;
        loop {
            let needed = catalog::adventurer_exp_for_level(self.level);
            if self.exp < needed {
                break;
            }
            self.exp -= needed;
            self.level += 1;
            self.max_hp = catalog::max_hp(self.level);
            self.base_attack = catalog::base_attack(self.level);
            levels += 1;
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Adventurer {
        Adventurer {
            id: "adv_test".to_string(),
            name: "Tester".to_string(),
            level: 1,
            exp: 0,
            hp: 50,
            max_hp: 50,
            base_attack: 5,
            weapon: None,
            status: AdventurerStatus::Idle,
            dungeon: None,
            departed_at: None,
            loot: BTreeMap::new(),
            gold: 30,
            target_runs: 0,
            completed_runs: 0,
        }
    }

    #[test]
    fn test_total_attack_includes_weapon() {
        let mut adv = fresh();
        assert_eq!(adv.total_attack(), 5);
        adv.weapon = Some(WeaponId::IronAxe);
        assert_eq!(adv.total_attack(), 23);
    }

    #[test]
    fn test_gain_exp_below_threshold() {
        let mut adv = fresh();
        assert_eq!(adv.gain_exp(49), 0);
        assert_eq!(adv.level, 1);
        assert_eq!(adv.exp, 49);
    }

    #[test]
    fn test_gain_exp_multiple_levels_updates_stats_not_hp() {
        let mut adv = fresh();
        adv.hp = 20;
        // 50 (L1) + 65 (L2) = 115 reaches level 3 with 5 left over
        assert_eq!(adv.gain_exp(120), 2);
        assert_eq!(adv.level, 3);
        assert_eq!(adv.exp, 5);
        assert_eq!(adv.max_hp, 90);
        assert_eq!(adv.base_attack, 11);
        assert_eq!(adv.hp, 20, "level-ups do not heal");
    }

    #[test]
    fn test_cycle_elapsed_requires_full_duration() {
        let mut adv = fresh();
        assert!(!adv.cycle_elapsed(0));

        adv.status = AdventurerStatus::Adventuring;
        adv.dungeon = Some(DungeonId::Forest);
        adv.departed_at = Some(1_000);
        assert!(!adv.cycle_elapsed(60_999));
        assert!(adv.cycle_elapsed(61_000));
        assert_eq!(adv.remaining_ms(31_000), Some(30_000));
    }

    #[test]
    fn test_remaining_ms_saturates_on_extreme_departures() {
        let mut adv = fresh();
        adv.status = AdventurerStatus::Adventuring;
        adv.dungeon = Some(DungeonId::Forest);

        adv.departed_at = Some(i64::MAX);
        assert_eq!(adv.remaining_ms(0), Some(i64::MAX));
        assert!(!adv.cycle_elapsed(i64::MIN));

        adv.departed_at = Some(i64::MIN);
        assert!(adv.cycle_elapsed(i64::MAX));
    }

    #[test]
    fn test_add_loot_accumulates() {
        let mut adv = fresh();
        assert!(!adv.has_loot());
        adv.add_loot(MaterialId::Wood, 2);
        adv.add_loot(MaterialId::Wood, 1);
        adv.add_loot(MaterialId::Herb, 4);
        assert_eq!(adv.loot.get(&MaterialId::Wood), Some(&3));
        assert_eq!(adv.loot_units(), 7);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(fresh()).unwrap();
        assert_eq!(json["maxHp"], 50);
        assert_eq!(json["baseAttack"], 5);
        assert_eq!(json["status"], "idle");
        assert!(json["departedAt"].is_null());
        assert_eq!(json["targetRuns"], 0);
    }
}
