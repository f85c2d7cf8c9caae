//! Wealth Dynamics Binary
//!
//! Simulates one cross-section of households and reports its inequality.
//!
//! ## Usage
//! ```bash
//! cargo run --bin wealth_dynamics --release
//! cargo run --bin wealth_dynamics --release -- --households 250000 --backend batched
//! cargo run --bin wealth_dynamics --release -- --config run.json --output result.json
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wealth_simulation::config::RunConfig;
use wealth_simulation::inequality::lorenz_curve;
use wealth_simulation::simulation::{simulate_cross_section, wealth_time_series, Backend};

const LORENZ_ROWS: usize = 10;

#[derive(Parser, Debug)]
#[command(
    name = "wealth_dynamics",
    about = "Simulate a cross-section of household wealth and measure its inequality"
)]
struct Cli {
    #[arg(long, help = "JSON run configuration; flags below override it")]
    config: Option<PathBuf>,
    #[arg(long)]
    households: Option<usize>,
    #[arg(long, help = "Steps each household is advanced")]
    shift_length: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    backend: Option<Backend>,
    #[arg(
        long,
        default_value_t = 50,
        help = "Length of the single-household wealth path to print (0 to skip)"
    )]
    series_length: usize,
    #[arg(long, help = "Write the full result (cross-section included) as JSON")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(households) = cli.households {
        config.simulation.households = households;
    }
    if let Some(shift_length) = cli.shift_length {
        config.simulation.shift_length = shift_length;
    }
    if let Some(seed) = cli.seed {
        config.simulation.seed = seed;
    }
    if let Some(backend) = cli.backend {
        config.simulation.backend = backend;
    }

    let model = config.build_model()?;

    println!("=======================================================");
    println!("  Wealth Distribution Dynamics");
    println!("  Cross-sectional simulation with aggregate shocks");
    println!("=======================================================");
    println!();
    println!("Parameters:");
    println!("  Households:              {}", config.simulation.households);
    println!("  Expected income:         {:.4}", model.y_mean());
    println!("  Expected return:         {:.4}", model.r_mean());
    println!("  Stability (R_mean * s_0): {:.4}", model.alpha());
    println!();

    let result = simulate_cross_section(&model, &config.simulation);

    println!("Cross-section");
    println!("{}", "-".repeat(50));
    result.print();
    println!();

    print_lorenz_table(&result.wealth);

    if cli.series_length > 0 {
        let series = wealth_time_series(&model, model.y_mean(), cli.series_length, config.simulation.seed);
        print_time_series(&series);
    }

    if let Some(path) = &cli.output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result)?;
        println!("Result written to {}", path.display());
    }

    Ok(())
}

fn print_lorenz_table(wealth: &[f64]) {
    let curve = lorenz_curve(wealth);
    let n = curve.len() - 1;

    println!("Lorenz curve");
    println!("| Population share | Wealth share |");
    println!("|------------------|--------------|");
    for row in 0..=LORENZ_ROWS {
        let idx = row * n / LORENZ_ROWS;
        println!(
            "| {:15.1}% | {:11.2}% |",
            curve.population_share[idx] * 100.0,
            curve.wealth_share[idx] * 100.0
        );
    }
    println!();
}

fn print_time_series(series: &[f64]) {
    println!("Single household wealth path ({} periods)", series.len());
    println!("{}", "-".repeat(50));
    for chunk in series.chunks(10) {
        let line: Vec<String> = chunk.iter().map(|w| format!("{w:7.2}")).collect();
        println!("  {}", line.join(" "));
    }
    println!();
}
