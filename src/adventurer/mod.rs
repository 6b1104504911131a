//! Adventurers: the hired characters who buy weapons and run dungeons.

pub mod factory;
pub mod types;

pub use factory::{create_adventurer, ADVENTURER_NAMES, STARTING_ADVENTURER_GOLD};
pub use types::{Adventurer, AdventurerStatus};
