//! Weapon Shop Headless Balance Simulator
//!
//! Plays scripted shops through the same engine and store as the terminal
//! game and prints where they ended up after the simulated time.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --hours N       Simulated hours per shop (default: 8)
//!   --seed N        RNG seed of the first shop (default: 42)
//!   --runs N        Number of shops with incrementing seeds (default: 20)
//!   --step N        Seconds between shopkeeper decisions (default: 10)
//!   --dispatch N    Runs requested per dispatch (default: 5)
//!   --verbose       Per-shop results and info logging
//!   --quiet         Only the final summary

use tracing_subscriber::EnvFilter;
use weaponshop::simulator::{run_simulation, SimConfig};

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--hours" => {
                i += 1;
                config.hours = args[i].parse().expect("--hours requires a number");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("--seed requires a number");
            }
            "--runs" => {
                i += 1;
                config.num_runs = args[i].parse().expect("--runs requires a number");
            }
            "--step" => {
                i += 1;
                config.step_seconds = args[i].parse().expect("--step requires a number");
            }
            "--dispatch" => {
                i += 1;
                config.runs_per_dispatch = args[i].parse().expect("--dispatch requires a number");
            }
            "--verbose" => config.verbosity = 2,
            "--quiet" => config.verbosity = 0,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "Weapon Shop Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --hours N       Simulated hours per shop (default: 8)\n\
         \x20 --seed N        RNG seed of the first shop (default: 42)\n\
         \x20 --runs N        Number of shops with incrementing seeds (default: 20)\n\
         \x20 --step N        Seconds between shopkeeper decisions (default: 10)\n\
         \x20 --dispatch N    Runs requested per dispatch (default: 5)\n\
         \x20 --verbose       Per-shop results and info logging\n\
         \x20 --quiet         Only the final summary\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() {
    let config = parse_args();

    let default_filter = if config.verbosity >= 2 {
        "weaponshop=info"
    } else {
        "weaponshop=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if config.verbosity >= 1 {
        println!(
            "Simulating {} shops for {} hours (seed {}, step {}s, {} runs per dispatch)",
            config.num_runs,
            config.hours,
            config.seed,
            config.step_seconds,
            config.runs_per_dispatch
        );
    }

    let report = run_simulation(&config);

    if config.verbosity >= 2 {
        report.print_runs();
    }
    report.print_summary();
}
