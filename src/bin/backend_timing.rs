//! Backend Timing Binary
//!
//! Runs the same cross-section through every execution backend, reports
//! wall time, and checks that all backends agree on the result.
//!
//! ## Usage
//! ```bash
//! cargo run --bin backend_timing --release
//! ```

use anyhow::{bail, Result};
use clap::Parser;

use wealth_simulation::model::WealthDynamics;
use wealth_simulation::params::{AggregateParams, HouseholdParams};
use wealth_simulation::simulation::{simulate_cross_section, Backend, CrossSectionResult, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "backend_timing", about = "Compare execution backends on one cross-section")]
struct Cli {
    #[arg(long, default_value_t = 250_000)]
    households: usize,
    #[arg(long, default_value_t = 500)]
    shift_length: usize,
    #[arg(long, default_value_t = 1234)]
    seed: u64,
    #[arg(long, default_value_t = 3, help = "Timed repetitions per backend")]
    repeats: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let model = WealthDynamics::new(HouseholdParams::default(), AggregateParams::default())?;

    println!("=======================================================");
    println!("  Backend Timing");
    println!("  Same kernel, different execution strategies");
    println!("=======================================================");
    println!();
    println!("Parameters:");
    println!("  Households: {}, Shift length: {}", cli.households, cli.shift_length);
    println!("  Worker threads: {}", rayon::current_num_threads());
    println!();

    println!("| Backend                      | Best time | Mean time | Gini   |");
    println!("|------------------------------|-----------|-----------|--------|");

    let mut reference: Option<CrossSectionResult> = None;
    for backend in Backend::all() {
        let config = SimulationConfig {
            households: cli.households,
            shift_length: cli.shift_length,
            seed: cli.seed,
            backend,
        };

        let runs: Vec<CrossSectionResult> = (0..cli.repeats.max(1))
            .map(|_| simulate_cross_section(&model, &config))
            .collect();
        let times: Vec<f64> = runs.iter().map(|r| r.elapsed.as_secs_f64()).collect();
        let best = times.iter().cloned().fold(f64::INFINITY, f64::min);
        let mean = times.iter().sum::<f64>() / times.len() as f64;

        let Some(result) = runs.into_iter().next() else {
            continue;
        };
        println!(
            "| {:28} | {:8.3}s | {:8.3}s | {:.4} |",
            backend.name(),
            best,
            mean,
            result.summary.gini
        );

        if let Some(expected) = &reference {
            if expected.wealth != result.wealth {
                bail!("{} disagrees with {}", backend.name(), expected.backend.name());
            }
        } else {
            reference = Some(result);
        }
    }

    println!();
    println!("All backends produced identical cross-sections.");
    Ok(())
}
