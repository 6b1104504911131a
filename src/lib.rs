//! Weapon Shop - Terminal Idle Shopkeeping Library
//!
//! This module exposes the game logic for testing, the simulator and the
//! terminal binary.

pub mod adventurer;
pub mod build_info;
pub mod catalog;
pub mod core;
pub mod persistence;
pub mod simulator;
pub mod ui;
