//! What a transition did, and why a rejected one did nothing.
//!
//! Events let the presentation layer build its message log without the
//! engine knowing about any UI types. Rejections are reported alongside the
//! unchanged state, never raised.

use super::offline::OfflineReport;
use crate::catalog::{DungeonId, MaterialId, WeaponId};
use std::collections::BTreeMap;

/// Result of resolving one dungeon cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub dungeon: DungeonId,
    pub success: bool,
    pub damage: u32,
    pub loot: BTreeMap<MaterialId, u32>,
    pub exp_gained: u64,
    pub gold_gained: u64,
    pub levels_gained: u32,
    /// `completed_runs` after this cycle.
    pub run_number: u32,
    /// True when the adventurer left the dungeon after this cycle.
    pub returned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    WeaponCrafted {
        weapon: WeaponId,
    },
    WeaponSold {
        weapon: WeaponId,
        adventurer_id: String,
        price: u64,
        exp_gained: u64,
    },
    WeaponSoldDirect {
        weapon: WeaponId,
        price: u64,
    },
    ShopLeveledUp {
        new_level: u32,
    },
    Dispatched {
        adventurer_id: String,
        dungeon: DungeonId,
        runs: u32,
        continuing: bool,
    },
    RunResolved {
        adventurer_id: String,
        outcome: RunOutcome,
    },
    AdventurerLeveledUp {
        adventurer_id: String,
        new_level: u32,
    },
    LootSettled {
        adventurer_id: String,
        cost: u64,
        units: u64,
    },
    LootDiscarded {
        adventurer_id: String,
        units: u64,
    },
    AdventurerHired {
        adventurer_id: String,
        name: String,
        cost: u64,
    },
    AdventurerHealed {
        adventurer_id: String,
        cost: u64,
    },
    OfflineProgress(OfflineReport),
    StateLoaded,
    GameReset,
}

/// Why an action left the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no adventurer with id {0}")]
    UnknownAdventurer(String),
    #[error("shop level {have} is below the required level {need}")]
    ShopLevelTooLow { have: u32, need: u32 },
    #[error("not enough materials")]
    MissingMaterials,
    #[error("no {0} in stock")]
    OutOfStock(WeaponId),
    #[error("adventurer cannot afford {price} gold (has {has})")]
    AdventurerCannotAfford { price: u64, has: u64 },
    #[error("shop cannot afford {cost} gold (has {has})")]
    ShopCannotAfford { cost: u64, has: u64 },
    #[error("adventurer is {0}")]
    WrongStatus(&'static str),
    #[error("adventurer level {have} is below the required level {need}")]
    AdventurerLevelTooLow { have: u32, need: u32 },
    #[error("adventurer has no HP left")]
    Exhausted,
    #[error("the current run has not finished yet")]
    RunNotFinished,
    #[error("adventurer is already at full HP")]
    AlreadyHealthy,
    #[error("roster is full")]
    RosterFull,
    #[error("action is not implemented")]
    Unsupported,
}
