//! Headless balance simulator.
//!
//! Plays many shops with a scripted shopkeeper through the same store and
//! engine as the terminal game, with a manual clock standing in for real
//! time, and reports how far each shop got.

mod config;
mod policy;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
