//! Save format and save slots.
//!
//! A save is the whole [`GameState`] as pretty-printed JSON. Anything that
//! fails to decode is treated as no save at all and replaced by a fresh
//! bootstrap state, so a corrupt file never blocks starting the game.

pub mod slot;

pub use slot::{FileSaveSlot, MemorySaveSlot, SaveSlot};

use crate::core::game_state::GameState;
use rand::Rng;
use std::io;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("save I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save data is not valid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not determine config directory")]
    NoConfigDir,
}

pub fn encode_state(state: &GameState) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn decode_state(data: &str) -> Result<GameState, SaveError> {
    Ok(serde_json::from_str(data)?)
}

/// Reads the slot, falling back to a bootstrap state stamped `now` when the
/// slot is empty, unreadable or holds malformed data.
pub fn load_or_bootstrap(slot: &dyn SaveSlot, now: i64, rng: &mut impl Rng) -> GameState {
    match slot.load() {
        Ok(Some(data)) => match decode_state(&data) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "discarding unreadable save");
                GameState::new(now, rng)
            }
        },
        Ok(None) => GameState::new(now, rng),
        Err(e) => {
            warn!(error = %e, "could not read save slot");
            GameState::new(now, rng)
        }
    }
}
