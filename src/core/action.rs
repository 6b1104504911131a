//! The action contract: everything a caller can ask the engine to do.

use super::game_state::GameState;
use crate::catalog::{DungeonId, WeaponId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    CraftWeapon {
        weapon: WeaponId,
    },
    SellWeapon {
        weapon: WeaponId,
        adventurer_id: String,
    },
    SellWeaponDirect {
        weapon: WeaponId,
    },
    DispatchToDungeon {
        adventurer_id: String,
        dungeon: DungeonId,
        #[serde(default)]
        runs: Option<u32>,
    },
    ResolveDungeonRun {
        adventurer_id: String,
    },
    SettleLoot {
        adventurer_id: String,
    },
    DiscardLoot {
        adventurer_id: String,
    },
    HireAdventurer,
    HealAdventurer {
        adventurer_id: String,
    },
    ProcessOfflineTime,
    Tick,
    LoadState {
        state: Box<GameState>,
    },
    ResetGame,
    /// Reserved emergency-funds request. Accepted but has no effect.
    Bailout,
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::CraftWeapon { .. } => "craft_weapon",
            Action::SellWeapon { .. } => "sell_weapon",
            Action::SellWeaponDirect { .. } => "sell_weapon_direct",
            Action::DispatchToDungeon { .. } => "dispatch_to_dungeon",
            Action::ResolveDungeonRun { .. } => "resolve_dungeon_run",
            Action::SettleLoot { .. } => "settle_loot",
            Action::DiscardLoot { .. } => "discard_loot",
            Action::HireAdventurer => "hire_adventurer",
            Action::HealAdventurer { .. } => "heal_adventurer",
            Action::ProcessOfflineTime => "process_offline_time",
            Action::Tick => "tick",
            Action::LoadState { .. } => "load_state",
            Action::ResetGame => "reset_game",
            Action::Bailout => "bailout",
        }
    }

    /// Parses an action submitted as JSON. Anything that does not describe a
    /// known action yields `None`, which callers treat as a no-op.
    pub fn from_json(json: &str) -> Option<Action> {
        serde_json::from_str(json).ok()
    }
}
