// Shop leveling
pub const PLAYER_EXP_CURVE_BASE: f64 = 100.0;
pub const PLAYER_EXP_CURVE_GROWTH: f64 = 1.5;
pub const SALE_EXP_FACTOR: f64 = 0.5;

// Adventurer leveling and stats
pub const ADVENTURER_EXP_CURVE_BASE: f64 = 50.0;
pub const ADVENTURER_EXP_CURVE_GROWTH: f64 = 1.3;
pub const BASE_MAX_HP: u32 = 50;
pub const MAX_HP_PER_LEVEL: u32 = 20;
pub const BASE_ATTACK: u32 = 5;
pub const ATTACK_PER_LEVEL: u32 = 3;

// Economy
pub const HIRE_COST_BASE: f64 = 100.0;
pub const HEAL_COST_PER_HP: f64 = 0.5;
pub const DIRECT_SALE_FACTOR: f64 = 0.5;

// Dungeon runs
pub const BASE_SUCCESS_RATE: f64 = 0.5;
pub const SUCCESS_RATE_PER_ATTACK: f64 = 0.02;
pub const MAX_SUCCESS_RATE: f64 = 0.95;
pub const BASE_DAMAGE_FACTOR: f64 = 0.5;
pub const SUCCESS_DAMAGE_FACTOR: f64 = 0.3;
pub const FAILURE_DAMAGE_FACTOR: f64 = 1.5;
pub const SUCCESS_EXP_FACTOR: f64 = 2.0;
pub const FAILURE_EXP_FACTOR: f64 = 0.5;
pub const RUN_GOLD_FACTOR: f64 = 0.5;
pub const DROP_BONUS_PER_LEVEL: f64 = 0.05;
pub const MAX_DROP_CHANCE: f64 = 0.95;
