//! Runtime configuration.

use super::constants::*;
use std::path::PathBuf;

/// Tunables that are not part of the content catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Offline catch-up never replays more than this many hours. Zero turns
    /// catch-up off.
    pub max_offline_hours: u32,
    /// Hard cap on hired adventurers.
    pub max_roster_size: usize,
    /// How often the presentation layer sends a tick.
    pub tick_interval_ms: u64,
    /// Save file override. `None` uses the platform config directory.
    pub save_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_offline_hours: MAX_OFFLINE_HOURS,
            max_roster_size: MAX_ROSTER_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            save_path: None,
        }
    }
}

impl GameConfig {
    /// Catch-up horizon in seconds.
    pub fn max_offline_seconds(&self) -> f64 {
        self.max_offline_hours as f64 * 3600.0
    }
}
