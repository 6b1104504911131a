//! The state transition function.
//!
//! [`Engine::step`] is the single entry point for changing a [`GameState`]:
//! the interactive game, the headless simulator and the tests all drive the
//! game through it. The input state is never mutated. A rejected action
//! yields an equal copy of it plus the reason.

use super::action::Action;
use super::config::GameConfig;
use super::events::{GameEvent, Rejection};
use super::game_logic;
use super::game_state::GameState;
use super::offline::process_offline_time;
use super::tick::game_tick;
use rand::Rng;
use tracing::debug;

/// Everything that came out of one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: GameState,
    pub events: Vec<GameEvent>,
    /// Set when the action was rejected; `state` then equals the input.
    pub rejection: Option<Rejection>,
}

impl Step {
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: GameConfig,
}

impl Engine {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Applies `action` at time `now` and returns the successor state.
    pub fn step(
        &self,
        state: &GameState,
        action: Action,
        now: i64,
        rng: &mut impl Rng,
    ) -> Step {
        let name = action.name();
        let mut next = state.clone();
        match self.transition(&mut next, action, now, rng) {
            Ok(events) => Step {
                state: next,
                events,
                rejection: None,
            },
            Err(rejection) => {
                debug!(action = name, %rejection, "action rejected");
                Step {
                    state: state.clone(),
                    events: Vec::new(),
                    rejection: Some(rejection),
                }
            }
        }
    }

    /// Like [`Engine::step`], keeping only the successor state.
    pub fn apply(
        &self,
        state: &GameState,
        action: Action,
        now: i64,
        rng: &mut impl Rng,
    ) -> GameState {
        self.step(state, action, now, rng).state
    }

    fn transition(
        &self,
        state: &mut GameState,
        action: Action,
        now: i64,
        rng: &mut impl Rng,
    ) -> Result<Vec<GameEvent>, Rejection> {
        match action {
            Action::CraftWeapon { weapon } => game_logic::craft_weapon(state, weapon, now),
            Action::SellWeapon {
                weapon,
                adventurer_id,
            } => game_logic::sell_weapon(state, weapon, &adventurer_id, now),
            Action::SellWeaponDirect { weapon } => {
                game_logic::sell_weapon_direct(state, weapon, now)
            }
            Action::DispatchToDungeon {
                adventurer_id,
                dungeon,
                runs,
            } => game_logic::dispatch_to_dungeon(state, &adventurer_id, dungeon, runs, now),
            Action::ResolveDungeonRun { adventurer_id } => {
                game_logic::resolve_dungeon_run(state, &adventurer_id, now, rng)
            }
            Action::SettleLoot { adventurer_id } => {
                game_logic::settle_loot(state, &adventurer_id, now)
            }
            Action::DiscardLoot { adventurer_id } => {
                game_logic::discard_loot(state, &adventurer_id, now)
            }
            Action::HireAdventurer => {
                game_logic::hire_adventurer(state, self.config.max_roster_size, now, rng)
            }
            Action::HealAdventurer { adventurer_id } => {
                game_logic::heal_adventurer(state, &adventurer_id, now)
            }
            Action::ProcessOfflineTime => Ok(
                process_offline_time(state, now, self.config.max_offline_seconds(), rng)
                    .map(GameEvent::OfflineProgress)
                    .into_iter()
                    .collect(),
            ),
            Action::Tick => Ok(game_tick(state, now, rng)),
            Action::LoadState { state: loaded } => {
                *state = *loaded;
                Ok(vec![GameEvent::StateLoaded])
            }
            Action::ResetGame => {
                *state = GameState::new(now, rng);
                Ok(vec![GameEvent::GameReset])
            }
            Action::Bailout => Err(Rejection::Unsupported),
        }
    }
}
