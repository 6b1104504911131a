//! Simulation configuration.

/// Configuration for a batch of simulated shops.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent shops to simulate
    pub num_runs: u32,

    /// Seed of the first run; run `i` uses `seed + i`
    pub seed: u64,

    /// Simulated play time per run
    pub hours: u64,

    /// Simulated seconds between shopkeeper decisions
    pub step_seconds: u64,

    /// Runs requested per dispatch
    pub runs_per_dispatch: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 20,
            seed: 42,
            hours: 8,
            step_seconds: 10,
            runs_per_dispatch: 5,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small config for tests.
    pub fn quick(hours: u64) -> Self {
        Self {
            num_runs: 2,
            hours,
            verbosity: 0,
            ..Default::default()
        }
    }

    pub fn total_steps(&self) -> u64 {
        self.hours * 3600 / self.step_seconds.max(1)
    }
}
