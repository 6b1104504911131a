//! Catalog identifiers and definition structs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Crafting materials gathered in dungeons and bought from adventurers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialId {
    Wood,
    Herb,
    IronOre,
    Stone,
    Steel,
    Leather,
    Gem,
    Mithril,
    AncientFragment,
}

impl MaterialId {
    pub const ALL: [MaterialId; 9] = [
        MaterialId::Wood,
        MaterialId::Herb,
        MaterialId::IronOre,
        MaterialId::Stone,
        MaterialId::Steel,
        MaterialId::Leather,
        MaterialId::Gem,
        MaterialId::Mithril,
        MaterialId::AncientFragment,
    ];

    /// Storage key used in saves and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            MaterialId::Wood => "wood",
            MaterialId::Herb => "herb",
            MaterialId::IronOre => "iron_ore",
            MaterialId::Stone => "stone",
            MaterialId::Steel => "steel",
            MaterialId::Leather => "leather",
            MaterialId::Gem => "gem",
            MaterialId::Mithril => "mithril",
            MaterialId::AncientFragment => "ancient_fragment",
        }
    }
}

/// Weapons the shop can forge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponId {
    WoodenSword,
    WoodenStaff,
    WoodenBow,
    IronSword,
    IronAxe,
    IronSpear,
    SteelSword,
    SteelHammer,
    MithrilSword,
    MithrilBow,
}

impl WeaponId {
    pub const ALL: [WeaponId; 10] = [
        WeaponId::WoodenSword,
        WeaponId::WoodenStaff,
        WeaponId::WoodenBow,
        WeaponId::IronSword,
        WeaponId::IronAxe,
        WeaponId::IronSpear,
        WeaponId::SteelSword,
        WeaponId::SteelHammer,
        WeaponId::MithrilSword,
        WeaponId::MithrilBow,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WeaponId::WoodenSword => "wooden_sword",
            WeaponId::WoodenStaff => "wooden_staff",
            WeaponId::WoodenBow => "wooden_bow",
            WeaponId::IronSword => "iron_sword",
            WeaponId::IronAxe => "iron_axe",
            WeaponId::IronSpear => "iron_spear",
            WeaponId::SteelSword => "steel_sword",
            WeaponId::SteelHammer => "steel_hammer",
            WeaponId::MithrilSword => "mithril_sword",
            WeaponId::MithrilBow => "mithril_bow",
        }
    }
}

/// Dungeons adventurers can be dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DungeonId {
    Forest,
    Cave,
    AbandonedMine,
    AncientRuins,
}

impl DungeonId {
    pub const ALL: [DungeonId; 4] = [
        DungeonId::Forest,
        DungeonId::Cave,
        DungeonId::AbandonedMine,
        DungeonId::AncientRuins,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DungeonId::Forest => "forest",
            DungeonId::Cave => "cave",
            DungeonId::AbandonedMine => "abandoned_mine",
            DungeonId::AncientRuins => "ancient_ruins",
        }
    }
}

/// Error returned when a string does not name a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown catalog key: {0}")]
pub struct UnknownKey(pub String);

macro_rules! impl_key_traits {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|id| id.key() == s)
                    .ok_or_else(|| UnknownKey(s.to_string()))
            }
        }
    };
}

impl_key_traits!(MaterialId);
impl_key_traits!(WeaponId);
impl_key_traits!(DungeonId);

/// Weapon quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponRank {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl WeaponRank {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponRank::Bronze => "Bronze",
            WeaponRank::Silver => "Silver",
            WeaponRank::Gold => "Gold",
            WeaponRank::Diamond => "Diamond",
        }
    }

    /// RGB display color for the rank badge.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            WeaponRank::Bronze => (0xCD, 0x7F, 0x32),
            WeaponRank::Silver => (0xC0, 0xC0, 0xC0),
            WeaponRank::Gold => (0xFF, 0xD7, 0x00),
            WeaponRank::Diamond => (0xB9, 0xF2, 0xFF),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: MaterialId,
    pub name: &'static str,
    pub icon: &'static str,
    /// Price the shop pays an adventurer per unit of loot.
    pub buy_price: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: &'static str,
    pub icon: &'static str,
    pub rank: WeaponRank,
    pub required_materials: &'static [(MaterialId, u32)],
    pub sell_price: u64,
    /// Minimum shop level needed to forge this weapon.
    pub required_level: u32,
    pub attack_bonus: u32,
}

/// One entry in a dungeon's drop table.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEntry {
    pub material: MaterialId,
    pub chance: f64,
    pub min_amount: u32,
    pub max_amount: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dungeon {
    pub id: DungeonId,
    pub name: &'static str,
    pub icon: &'static str,
    pub required_level: u32,
    pub duration_seconds: u64,
    pub possible_drops: &'static [DropEntry],
    pub difficulty: u32,
}

impl Dungeon {
    pub fn duration_ms(&self) -> i64 {
        self.duration_seconds as i64 * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for id in MaterialId::ALL {
            assert_eq!(id.key().parse::<MaterialId>(), Ok(id));
        }
        for id in WeaponId::ALL {
            assert_eq!(id.key().parse::<WeaponId>(), Ok(id));
        }
        for id in DungeonId::ALL {
            assert_eq!(id.key().parse::<DungeonId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert_eq!(
            "golden_spoon".parse::<WeaponId>(),
            Err(UnknownKey("golden_spoon".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_storage_keys() {
        let json = serde_json::to_string(&MaterialId::AncientFragment).unwrap();
        assert_eq!(json, "\"ancient_fragment\"");
        let id: DungeonId = serde_json::from_str("\"abandoned_mine\"").unwrap();
        assert_eq!(id, DungeonId::AbandonedMine);
    }
}
