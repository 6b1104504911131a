// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const UI_POLL_INTERVAL_MS: u64 = 50;

// Offline catch-up
pub const MAX_OFFLINE_HOURS: u32 = 24;
pub const MIN_OFFLINE_SECONDS: f64 = 1.0;

// Roster
pub const MAX_ROSTER_SIZE: usize = 10;
pub const STARTING_ROSTER_SIZE: usize = 2;

// New game
pub const STARTING_GOLD: u64 = 100;
pub const STARTING_WOOD: u32 = 10;

// Dispatch
pub const DEFAULT_RUNS: u32 = 1;
pub const RUN_OPTIONS: [u32; 5] = [1, 5, 10, 20, 50];

// Persistence
pub const SAVE_SLOT_NAME: &str = "weaponshop_save.json";
pub const LOG_FILE_NAME: &str = "weaponshop.log";
