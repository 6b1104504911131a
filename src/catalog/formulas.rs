//! Leveling curves, cost curves and derived stats.
//!
//! Every function here is total over its inputs. Float results are floored and
//! saturate at the integer bounds.

use super::constants::*;
use super::data::material;
use super::types::MaterialId;
use std::collections::BTreeMap;

/// Experience the shop needs to advance past `level`.
pub fn exp_for_level(level: u32) -> u64 {
    (PLAYER_EXP_CURVE_BASE * f64::powf(PLAYER_EXP_CURVE_GROWTH, level_exponent(level))).floor()
        as u64
}

/// Experience an adventurer needs to advance past `level`.
pub fn adventurer_exp_for_level(level: u32) -> u64 {
    (ADVENTURER_EXP_CURVE_BASE * f64::powf(ADVENTURER_EXP_CURVE_GROWTH, level_exponent(level)))
        .floor() as u64
}

pub fn max_hp(level: u32) -> u32 {
    BASE_MAX_HP.saturating_add(level.saturating_sub(1).saturating_mul(MAX_HP_PER_LEVEL))
}

pub fn base_attack(level: u32) -> u32 {
    BASE_ATTACK.saturating_add(level.saturating_sub(1).saturating_mul(ATTACK_PER_LEVEL))
}

/// Price of the next hire given the current roster size.
pub fn hire_cost(roster_size: usize) -> u64 {
    (HIRE_COST_BASE * f64::powf(2.0, roster_size as f64)).floor() as u64
}

/// Proportional to missing HP; the heal itself always restores to full.
pub fn heal_cost(hp: u32, max_hp: u32) -> u64 {
    (max_hp.saturating_sub(hp) as f64 * HEAL_COST_PER_HP).floor() as u64
}

/// Chance that a run succeeds. Capped at 95%, can fall to zero or below
/// against dungeons far above the adventurer's attack.
pub fn success_rate(total_attack: u32, difficulty: u32) -> f64 {
    let edge = total_attack as f64 - difficulty as f64;
    (BASE_SUCCESS_RATE + edge * SUCCESS_RATE_PER_ATTACK).min(MAX_SUCCESS_RATE)
}

/// Drop chance after the adventurer's level bonus.
pub fn adjusted_drop_chance(chance: f64, adventurer_level: u32) -> f64 {
    (chance * (1.0 + adventurer_level as f64 * DROP_BONUS_PER_LEVEL)).min(MAX_DROP_CHANCE)
}

/// HP lost on a run, by outcome.
pub fn run_damage(difficulty: u32, success: bool) -> u32 {
    let base = (difficulty as f64 * BASE_DAMAGE_FACTOR).floor();
    let factor = if success {
        SUCCESS_DAMAGE_FACTOR
    } else {
        FAILURE_DAMAGE_FACTOR
    };
    (base * factor).floor() as u32
}

/// Adventurer experience for one run, by outcome.
pub fn run_exp(difficulty: u32, success: bool) -> u64 {
    let factor = if success {
        SUCCESS_EXP_FACTOR
    } else {
        FAILURE_EXP_FACTOR
    };
    (difficulty as f64 * factor).floor() as u64
}

/// Personal gold an adventurer earns from a run. Failures pay nothing.
pub fn run_gold(difficulty: u32, success: bool) -> u64 {
    if success {
        (difficulty as f64 * RUN_GOLD_FACTOR).floor() as u64
    } else {
        0
    }
}

/// Gold the shop receives when dumping a weapon without a buyer.
pub fn direct_sale_price(sell_price: u64) -> u64 {
    (sell_price as f64 * DIRECT_SALE_FACTOR).floor() as u64
}

/// Shop experience for selling a weapon to an adventurer.
pub fn sale_exp(sell_price: u64) -> u64 {
    (sell_price as f64 * SALE_EXP_FACTOR).floor() as u64
}

/// Total price the shop pays for a bundle of loot.
pub fn loot_value(loot: &BTreeMap<MaterialId, u32>) -> u64 {
    loot.iter()
        .map(|(id, count)| material(*id).buy_price.saturating_mul(*count as u64))
        .fold(0u64, u64::saturating_add)
}

fn level_exponent(level: u32) -> f64 {
    level.saturating_sub(1) as f64
}
