//! Inequality Sweep Binary
//!
//! Shows how the return process drives wealth concentration: Gini
//! coefficient and top 10% share as the mean and the volatility of the
//! idiosyncratic return shock change.
//!
//! ## Usage
//! ```bash
//! cargo run --bin inequality_sweep --release
//! ```

use anyhow::Result;
use clap::Parser;

use wealth_simulation::params::{AggregateParams, HouseholdParams};
use wealth_simulation::simulation::{Backend, SimulationConfig};
use wealth_simulation::sweep::{gini_by_return_mean, gini_by_return_volatility, linspace, SweepPoint};

#[derive(Parser, Debug)]
#[command(name = "inequality_sweep", about = "Gini coefficient across return parameters")]
struct Cli {
    #[arg(long, default_value_t = 50_000)]
    households: usize,
    #[arg(long, default_value_t = 500)]
    shift_length: usize,
    #[arg(long, default_value_t = 1234)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = Backend::Parallel)]
    backend: Backend,
    #[arg(long, default_value_t = 5, help = "Points per sweep")]
    points: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let household = HouseholdParams::default();
    let aggregate = AggregateParams::default();
    let config = SimulationConfig {
        households: cli.households,
        shift_length: cli.shift_length,
        seed: cli.seed,
        backend: cli.backend,
    };

    println!("=======================================================");
    println!("  Inequality Sweep");
    println!("  Return parameters vs wealth concentration");
    println!("=======================================================");
    println!();
    println!("Parameters:");
    println!("  Households: {}, Shift length: {}", config.households, config.shift_length);
    println!("  Backend: {}", config.backend.name());
    println!();

    let mu_r_values = linspace(0.0, 0.075, cli.points);
    let points = gini_by_return_mean(&household, &aggregate, &mu_r_values, &config);
    print_table("mu_r", &points);

    let sigma_r_values = linspace(0.35, 0.53, cli.points);
    let points = gini_by_return_volatility(&household, &aggregate, &sigma_r_values, &config);
    print_table("sigma_r", &points);

    Ok(())
}

fn print_table(label: &str, points: &[SweepPoint]) {
    println!("Sweep over {label}");
    println!("| {:8} | Gini   | Top 10% | Mean wealth |", label);
    println!("|----------|--------|---------|-------------|");
    for p in points {
        println!(
            "| {:8.4} | {:.4} | {:6.2}% | {:11.3} |",
            p.value,
            p.gini,
            p.top_10_share * 100.0,
            p.mean_wealth
        );
    }
    println!();
}
