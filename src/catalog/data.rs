//! Static content tables for materials, weapons and dungeons.

use super::types::{
    DropEntry, Dungeon, DungeonId, Material, MaterialId, Weapon, WeaponId, WeaponRank,
};

/// Returns the definition for a material.
pub fn material(id: MaterialId) -> &'static Material {
    match id {
        MaterialId::Wood => &WOOD,
        MaterialId::Herb => &HERB,
        MaterialId::IronOre => &IRON_ORE,
        MaterialId::Stone => &STONE,
        MaterialId::Steel => &STEEL,
        MaterialId::Leather => &LEATHER,
        MaterialId::Gem => &GEM,
        MaterialId::Mithril => &MITHRIL,
        MaterialId::AncientFragment => &ANCIENT_FRAGMENT,
    }
}

/// Returns the definition for a weapon.
pub fn weapon(id: WeaponId) -> &'static Weapon {
    match id {
        WeaponId::WoodenSword => &WOODEN_SWORD,
        WeaponId::WoodenStaff => &WOODEN_STAFF,
        WeaponId::WoodenBow => &WOODEN_BOW,
        WeaponId::IronSword => &IRON_SWORD,
        WeaponId::IronAxe => &IRON_AXE,
        WeaponId::IronSpear => &IRON_SPEAR,
        WeaponId::SteelSword => &STEEL_SWORD,
        WeaponId::SteelHammer => &STEEL_HAMMER,
        WeaponId::MithrilSword => &MITHRIL_SWORD,
        WeaponId::MithrilBow => &MITHRIL_BOW,
    }
}

/// Returns the definition for a dungeon.
pub fn dungeon(id: DungeonId) -> &'static Dungeon {
    match id {
        DungeonId::Forest => &FOREST,
        DungeonId::Cave => &CAVE,
        DungeonId::AbandonedMine => &ABANDONED_MINE,
        DungeonId::AncientRuins => &ANCIENT_RUINS,
    }
}

// ── Materials ───────────────────────────────────────────────────────

static WOOD: Material = Material {
    id: MaterialId::Wood,
    name: "Wood",
    icon: "🪵",
    buy_price: 2,
};
static HERB: Material = Material {
    id: MaterialId::Herb,
    name: "Herb",
    icon: "🌿",
    buy_price: 3,
};
static IRON_ORE: Material = Material {
    id: MaterialId::IronOre,
    name: "Iron Ore",
    icon: "🪨",
    buy_price: 5,
};
static STONE: Material = Material {
    id: MaterialId::Stone,
    name: "Stone",
    icon: "🧱",
    buy_price: 4,
};
static STEEL: Material = Material {
    id: MaterialId::Steel,
    name: "Steel",
    icon: "⚙",
    buy_price: 15,
};
static LEATHER: Material = Material {
    id: MaterialId::Leather,
    name: "Leather",
    icon: "🟤",
    buy_price: 8,
};
static GEM: Material = Material {
    id: MaterialId::Gem,
    name: "Gem",
    icon: "💎",
    buy_price: 50,
};
static MITHRIL: Material = Material {
    id: MaterialId::Mithril,
    name: "Mithril",
    icon: "✨",
    buy_price: 100,
};
static ANCIENT_FRAGMENT: Material = Material {
    id: MaterialId::AncientFragment,
    name: "Ancient Fragment",
    icon: "🔮",
    buy_price: 200,
};

// ── Weapons ─────────────────────────────────────────────────────────

static WOODEN_SWORD: Weapon = Weapon {
    id: WeaponId::WoodenSword,
    name: "Wooden Sword",
    icon: "🗡",
    rank: WeaponRank::Bronze,
    required_materials: &[(MaterialId::Wood, 3)],
    sell_price: 10,
    required_level: 1,
    attack_bonus: 5,
};
static WOODEN_STAFF: Weapon = Weapon {
    id: WeaponId::WoodenStaff,
    name: "Wooden Staff",
    icon: "🪄",
    rank: WeaponRank::Bronze,
    required_materials: &[(MaterialId::Wood, 4), (MaterialId::Herb, 2)],
    sell_price: 15,
    required_level: 1,
    attack_bonus: 4,
};
static WOODEN_BOW: Weapon = Weapon {
    id: WeaponId::WoodenBow,
    name: "Wooden Bow",
    icon: "🏹",
    rank: WeaponRank::Bronze,
    required_materials: &[(MaterialId::Wood, 5)],
    sell_price: 12,
    required_level: 2,
    attack_bonus: 6,
};
static IRON_SWORD: Weapon = Weapon {
    id: WeaponId::IronSword,
    name: "Iron Sword",
    icon: "⚔",
    rank: WeaponRank::Silver,
    required_materials: &[(MaterialId::IronOre, 5)],
    sell_price: 50,
    required_level: 3,
    attack_bonus: 15,
};
static IRON_AXE: Weapon = Weapon {
    id: WeaponId::IronAxe,
    name: "Iron Axe",
    icon: "🪓",
    rank: WeaponRank::Silver,
    required_materials: &[(MaterialId::IronOre, 4), (MaterialId::Wood, 2)],
    sell_price: 45,
    required_level: 3,
    attack_bonus: 18,
};
static IRON_SPEAR: Weapon = Weapon {
    id: WeaponId::IronSpear,
    name: "Iron Spear",
    icon: "🔱",
    rank: WeaponRank::Silver,
    required_materials: &[(MaterialId::IronOre, 3), (MaterialId::Wood, 3)],
    sell_price: 40,
    required_level: 4,
    attack_bonus: 14,
};
static STEEL_SWORD: Weapon = Weapon {
    id: WeaponId::SteelSword,
    name: "Steel Sword",
    icon: "🗡",
    rank: WeaponRank::Gold,
    required_materials: &[(MaterialId::Steel, 3), (MaterialId::Leather, 2)],
    sell_price: 200,
    required_level: 5,
    attack_bonus: 35,
};
static STEEL_HAMMER: Weapon = Weapon {
    id: WeaponId::SteelHammer,
    name: "Steel Hammer",
    icon: "🔨",
    rank: WeaponRank::Gold,
    required_materials: &[(MaterialId::Steel, 5), (MaterialId::Stone, 3)],
    sell_price: 250,
    required_level: 6,
    attack_bonus: 45,
};
static MITHRIL_SWORD: Weapon = Weapon {
    id: WeaponId::MithrilSword,
    name: "Mithril Sword",
    icon: "✨",
    rank: WeaponRank::Diamond,
    required_materials: &[(MaterialId::Mithril, 5), (MaterialId::Gem, 1)],
    sell_price: 1000,
    required_level: 10,
    attack_bonus: 80,
};
static MITHRIL_BOW: Weapon = Weapon {
    id: WeaponId::MithrilBow,
    name: "Mithril Bow",
    icon: "🌟",
    rank: WeaponRank::Diamond,
    required_materials: &[(MaterialId::Mithril, 4), (MaterialId::AncientFragment, 2)],
    sell_price: 1200,
    required_level: 12,
    attack_bonus: 90,
};

// ── Dungeons ────────────────────────────────────────────────────────

static FOREST: Dungeon = Dungeon {
    id: DungeonId::Forest,
    name: "Forest",
    icon: "🌲",
    required_level: 1,
    duration_seconds: 60,
    possible_drops: &[
        DropEntry {
            material: MaterialId::Wood,
            chance: 0.8,
            min_amount: 1,
            max_amount: 3,
        },
        DropEntry {
            material: MaterialId::Herb,
            chance: 0.5,
            min_amount: 1,
            max_amount: 2,
        },
        DropEntry {
            material: MaterialId::Leather,
            chance: 0.2,
            min_amount: 1,
            max_amount: 1,
        },
    ],
    difficulty: 10,
};
static CAVE: Dungeon = Dungeon {
    id: DungeonId::Cave,
    name: "Cave",
    icon: "🕳",
    required_level: 3,
    duration_seconds: 180,
    possible_drops: &[
        DropEntry {
            material: MaterialId::IronOre,
            chance: 0.7,
            min_amount: 1,
            max_amount: 3,
        },
        DropEntry {
            material: MaterialId::Stone,
            chance: 0.6,
            min_amount: 1,
            max_amount: 4,
        },
        DropEntry {
            material: MaterialId::Gem,
            chance: 0.1,
            min_amount: 1,
            max_amount: 1,
        },
    ],
    difficulty: 25,
};
static ABANDONED_MINE: Dungeon = Dungeon {
    id: DungeonId::AbandonedMine,
    name: "Abandoned Mine",
    icon: "⛏",
    required_level: 5,
    duration_seconds: 300,
    possible_drops: &[
        DropEntry {
            material: MaterialId::Steel,
            chance: 0.6,
            min_amount: 1,
            max_amount: 2,
        },
        DropEntry {
            material: MaterialId::Gem,
            chance: 0.3,
            min_amount: 1,
            max_amount: 2,
        },
        DropEntry {
            material: MaterialId::IronOre,
            chance: 0.5,
            min_amount: 2,
            max_amount: 4,
        },
    ],
    difficulty: 50,
};
static ANCIENT_RUINS: Dungeon = Dungeon {
    id: DungeonId::AncientRuins,
    name: "Ancient Ruins",
    icon: "🏛",
    required_level: 10,
    duration_seconds: 600,
    possible_drops: &[
        DropEntry {
            material: MaterialId::Mithril,
            chance: 0.5,
            min_amount: 1,
            max_amount: 2,
        },
        DropEntry {
            material: MaterialId::AncientFragment,
            chance: 0.3,
            min_amount: 1,
            max_amount: 1,
        },
        DropEntry {
            material: MaterialId::Gem,
            chance: 0.4,
            min_amount: 1,
            max_amount: 3,
        },
    ],
    difficulty: 100,
};
