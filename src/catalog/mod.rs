//! Read-only game content: materials, weapons, dungeons and the balance
//! formulas the engine queries by key.

pub mod constants;
pub mod data;
pub mod formulas;
pub mod types;

pub use data::{dungeon, material, weapon};
pub use formulas::*;
pub use types::{
    DropEntry, Dungeon, DungeonId, Material, MaterialId, UnknownKey, Weapon, WeaponId, WeaponRank,
};
