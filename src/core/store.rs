//! Session owner: current state, clock, randomness and the save slot.

use super::action::Action;
use super::clock::Clock;
use super::engine::Engine;
use super::events::{GameEvent, Rejection};
use super::game_state::GameState;
use super::offline::OfflineReport;
use crate::persistence::{encode_state, load_or_bootstrap, SaveSlot};
use rand::Rng;
use tracing::{info, warn};

/// Holds the live [`GameState`] and is the only way to change it.
///
/// Every committed change is written to the save slot. Save failures are
/// logged and otherwise ignored so a broken disk never stops the game.
pub struct GameStore<C: Clock, R: Rng, S: SaveSlot> {
    engine: Engine,
    state: GameState,
    clock: C,
    rng: R,
    slot: S,
    welcome_back: Option<OfflineReport>,
}

impl<C: Clock, R: Rng, S: SaveSlot> GameStore<C, R, S> {
    /// Loads the saved game (or starts a new one) and applies the time that
    /// passed since it was last played.
    pub fn open(engine: Engine, clock: C, mut rng: R, slot: S) -> Self {
        let now = clock.now_ms();
        let state = load_or_bootstrap(&slot, now, &mut rng);
        info!(
            shop_level = state.player.level,
            gold = state.player.gold,
            adventurers = state.adventurers.len(),
            "game loaded"
        );

        let mut store = Self {
            engine,
            state,
            clock,
            rng,
            slot,
            welcome_back: None,
        };
        if let Ok(events) = store.dispatch(Action::ProcessOfflineTime) {
            store.welcome_back = events.into_iter().find_map(|event| match event {
                GameEvent::OfflineProgress(report) => Some(report),
                _ => None,
            });
        }
        store
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Offline summary computed when the store was opened, if any time was
    /// caught up.
    pub fn welcome_back(&self) -> Option<&OfflineReport> {
        self.welcome_back.as_ref()
    }

    pub fn dismiss_welcome_back(&mut self) {
        self.welcome_back = None;
    }

    /// Applies an action at the current clock time.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<GameEvent>, Rejection> {
        let now = self.clock.now_ms();
        let is_reset = matches!(action, Action::ResetGame);
        let step = self.engine.step(&self.state, action, now, &mut self.rng);
        if let Some(rejection) = step.rejection {
            return Err(rejection);
        }
        if step.state == self.state {
            return Ok(step.events);
        }

        self.state = step.state;
        if is_reset {
            info!("game reset");
            if let Err(e) = self.slot.clear() {
                warn!(error = %e, "could not clear save slot");
            }
        }
        self.save();
        Ok(step.events)
    }

    /// Parses and dispatches a JSON action. Input that is not a valid action
    /// is ignored.
    pub fn dispatch_json(&mut self, json: &str) -> Result<Vec<GameEvent>, Rejection> {
        match Action::from_json(json) {
            Some(action) => self.dispatch(action),
            None => {
                warn!("ignoring malformed action");
                Ok(Vec::new())
            }
        }
    }

    /// Writes the current state to the save slot.
    pub fn save(&self) {
        let result = encode_state(&self.state).and_then(|data| self.slot.save(&data));
        if let Err(e) = result {
            warn!(error = %e, "save failed");
        }
    }

    /// Final save, then hands back the slot.
    pub fn close(self) -> S {
        self.save();
        info!("game saved on exit");
        self.slot
    }
}
