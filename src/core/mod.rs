//! Game state and the rules that change it.

pub mod action;
pub mod clock;
pub mod config;
pub mod constants;
pub mod engine;
pub mod events;
pub mod game_logic;
pub mod game_state;
pub mod offline;
pub mod resolution;
pub mod store;
pub mod tick;

pub use action::Action;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GameConfig;
pub use engine::{Engine, Step};
pub use events::{GameEvent, Rejection, RunOutcome};
pub use game_state::{GameState, Inventory, Player};
pub use offline::OfflineReport;
pub use store::GameStore;
