//! Simulation report generation.

/// Outcome of one simulated shop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub seed: u64,
    pub shop_level: u32,
    pub gold: u64,
    pub weapons_sold: u64,
    pub materials_bought: u64,
    pub roster_size: usize,
    pub avg_adventurer_level: f64,
    pub max_adventurer_level: u32,
    pub dungeon_runs: u64,
    pub failed_runs: u64,
    pub rejected_actions: u64,
}

impl RunStats {
    pub fn success_rate(&self) -> f64 {
        if self.dungeon_runs == 0 {
            return 0.0;
        }
        (self.dungeon_runs - self.failed_runs) as f64 / self.dungeon_runs as f64
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub hours: u64,
    pub avg_shop_level: f64,
    pub avg_gold: f64,
    pub avg_weapons_sold: f64,
    pub avg_materials_bought: f64,
    pub avg_roster_size: f64,
    pub avg_adventurer_level: f64,
    pub avg_success_rate: f64,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, hours: u64) -> Self {
        let num_runs = runs.len() as u32;
        let n = (runs.len().max(1)) as f64;
        let avg = |f: &dyn Fn(&RunStats) -> f64| runs.iter().map(f).sum::<f64>() / n;

        Self {
            num_runs,
            hours,
            avg_shop_level: avg(&|r| r.shop_level as f64),
            avg_gold: avg(&|r| r.gold as f64),
            avg_weapons_sold: avg(&|r| r.weapons_sold as f64),
            avg_materials_bought: avg(&|r| r.materials_bought as f64),
            avg_roster_size: avg(&|r| r.roster_size as f64),
            avg_adventurer_level: avg(&|r| r.avg_adventurer_level),
            avg_success_rate: avg(&|r| r.success_rate()),
            run_stats: runs,
        }
    }

    /// Print a summary of the report.
    pub fn print_summary(&self) {
        println!();
        println!("═══════════════════════════════════════════════════════════════");
        println!("                 WEAPON SHOP SIMULATION REPORT                 ");
        println!("═══════════════════════════════════════════════════════════════");
        println!();
        println!("Shops simulated: {} x {} hours", self.num_runs, self.hours);
        println!();
        println!("┌─────────────────────────────────────────────────────────────┐");
        println!("│ AVERAGES                                                    │");
        println!("├─────────────────────────────────────────────────────────────┤");
        println!("│ Shop level:           {:>8.1}                              │", self.avg_shop_level);
        println!("│ Gold:                 {:>8.0}                              │", self.avg_gold);
        println!("│ Weapons sold:         {:>8.1}                              │", self.avg_weapons_sold);
        println!("│ Materials bought:     {:>8.1}                              │", self.avg_materials_bought);
        println!("│ Roster size:          {:>8.1}                              │", self.avg_roster_size);
        println!("│ Adventurer level:     {:>8.1}                              │", self.avg_adventurer_level);
        println!("│ Run success rate:     {:>7.1}%                              │", self.avg_success_rate * 100.0);
        println!("└─────────────────────────────────────────────────────────────┘");
    }

    /// One line per run, for `--verbose`.
    pub fn print_runs(&self) {
        println!();
        println!(
            "{:>6} {:>5} {:>8} {:>6} {:>9} {:>6} {:>7} {:>6}",
            "seed", "lvl", "gold", "sold", "bought", "crew", "advLvl", "runs"
        );
        for run in &self.run_stats {
            println!(
                "{:>6} {:>5} {:>8} {:>6} {:>9} {:>6} {:>7.1} {:>6}",
                run.seed,
                run.shop_level,
                run.gold,
                run.weapons_sold,
                run.materials_bought,
                run.roster_size,
                run.avg_adventurer_level,
                run.dungeon_runs
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages() {
        let runs = vec![
            RunStats {
                shop_level: 2,
                gold: 100,
                dungeon_runs: 10,
                failed_runs: 5,
                ..Default::default()
            },
            RunStats {
                shop_level: 4,
                gold: 300,
                dungeon_runs: 4,
                failed_runs: 0,
                ..Default::default()
            },
        ];
        let report = SimReport::from_runs(runs, 1);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.avg_shop_level, 3.0);
        assert_eq!(report.avg_gold, 200.0);
        assert_eq!(report.avg_success_rate, 0.75);
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), 1);
        assert_eq!(report.avg_shop_level, 0.0);
    }
}
