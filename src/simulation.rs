//! Cross-Sectional Wealth Simulation
//!
//! Advances a population of households through a shared aggregate shock
//! path. Households are independent given the path, so the advance can be
//! executed in several interchangeable ways.
//!
//! ## Backends
//! - Sequential: one household at a time, each run through the full path
//! - Parallel: households split across the rayon thread pool
//! - Batched: time-major lock-step sweep over the whole population
//!
//! Every household draws from its own stream (see `rng`), and takes both
//! the income and return draw every step, so all backends return the same
//! cross-section bit for bit.

use std::time::{Duration, Instant};

use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aggregate::generate_aggregate_path;
use crate::inequality::InequalitySummary;
use crate::model::WealthDynamics;
use crate::rng::StreamRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Sequential, // Explicit household loop
    Parallel,   // Data-parallel over households
    Batched,    // Whole-population array sweep per step
}

impl Backend {
    pub fn all() -> Vec<Self> {
        vec![Self::Sequential, Self::Parallel, Self::Batched]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "Sequential (household loop)",
            Self::Parallel => "Parallel (rayon)",
            Self::Batched => "Batched (lock-step arrays)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub households: usize,
    pub shift_length: usize, // Steps each household is advanced
    pub seed: u64,
    pub backend: Backend,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            households: 100_000,
            shift_length: 500,
            seed: 1234,
            backend: Backend::Parallel,
        }
    }
}

/// Every household starts at expected income.
pub fn initial_cross_section(model: &WealthDynamics, households: usize) -> Vec<f64> {
    vec![model.y_mean(); households]
}

fn advance_household(model: &WealthDynamics, mut w: f64, path: &[f64], rng: &mut StreamRng) -> f64 {
    for &z in path {
        let (zeta, eta) = rng.shock_pair();
        w = model.update_wealth(w, z, zeta, eta);
    }
    w
}

/// Advance every household in `wealth` through `path`, in place.
///
/// Household `i` draws from agent stream `i` of `seed`. All households see
/// `path[t]` at step `t`.
pub fn update_cross_section(
    model: &WealthDynamics,
    wealth: &mut [f64],
    path: &[f64],
    seed: u64,
    backend: Backend,
) {
    match backend {
        Backend::Sequential => {
            for (i, w) in wealth.iter_mut().enumerate() {
                let mut rng = StreamRng::agent(seed, i);
                *w = advance_household(model, *w, path, &mut rng);
            }
        }

        Backend::Parallel => {
            wealth.par_iter_mut().enumerate().for_each(|(i, w)| {
                let mut rng = StreamRng::agent(seed, i);
                *w = advance_household(model, *w, path, &mut rng);
            });
        }

        Backend::Batched => {
            let n = wealth.len();
            let mut rngs: Vec<StreamRng> = (0..n).map(|i| StreamRng::agent(seed, i)).collect();
            let mut zeta = vec![0.0; n];
            let mut eta = vec![0.0; n];

            let h = model.household();
            for &z in path {
                for ((rng, zt), et) in rngs.iter_mut().zip(&mut zeta).zip(&mut eta) {
                    (*zt, *et) = rng.shock_pair();
                }

                let income_base = h.c_y * z.exp();
                let return_base = h.c_r * z.exp();
                for ((w, zt), et) in wealth.iter_mut().zip(&zeta).zip(&eta) {
                    let y = income_base + (h.mu_y + h.sigma_y * zt).exp();
                    *w = if *w >= h.w_hat {
                        y + (return_base + (h.mu_r + h.sigma_r * et).exp()) * h.s_0 * *w
                    } else {
                        y
                    };
                }
            }
        }
    }
}

/// Wealth path of a single household: `n` points starting from `w_0`.
///
/// Uses the aggregate path and agent stream 0 of `seed`, so the last point
/// matches a one-household cross-section advanced `n - 1` steps.
pub fn wealth_time_series(model: &WealthDynamics, w_0: f64, n: usize, seed: u64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    let path = generate_aggregate_path(model, n - 1, seed);
    let mut rng = StreamRng::agent(seed, 0);

    let mut series = Vec::with_capacity(n);
    series.push(w_0);
    let mut w = w_0;
    for &z in &path {
        let (zeta, eta) = rng.shock_pair();
        w = model.update_wealth(w, z, zeta, eta);
        series.push(w);
    }
    series
}

#[derive(Debug, Clone, Serialize)]
pub struct CrossSectionResult {
    pub backend: Backend,
    pub households: usize,
    pub shift_length: usize,
    pub seed: u64,
    pub elapsed: Duration,
    pub summary: InequalitySummary,
    pub aggregate_path: Vec<f64>,
    pub wealth: Vec<f64>,
}

impl CrossSectionResult {
    pub fn print(&self) {
        println!("  Backend:                 {}", self.backend.name());
        println!("  Shift length:            {}", self.shift_length);
        println!("  Seed:                    {}", self.seed);
        println!("  Elapsed:                 {:.3}s", self.elapsed.as_secs_f64());
        self.summary.print();
    }
}

/// Full pipeline: initial cross-section at expected income, aggregate path,
/// advance, summary statistics.
pub fn simulate_cross_section(model: &WealthDynamics, config: &SimulationConfig) -> CrossSectionResult {
    let start = Instant::now();

    let aggregate_path = generate_aggregate_path(model, config.shift_length, config.seed);
    let mut wealth = initial_cross_section(model, config.households);
    update_cross_section(model, &mut wealth, &aggregate_path, config.seed, config.backend);

    let elapsed = start.elapsed();
    let summary = InequalitySummary::from_cross_section(&wealth);

    log::info!(
        "cross-section: households={} shift_length={} backend={:?} elapsed={:.3}s gini={:.4}",
        config.households,
        config.shift_length,
        config.backend,
        elapsed.as_secs_f64(),
        summary.gini
    );

    CrossSectionResult {
        backend: config.backend,
        households: config.households,
        shift_length: config.shift_length,
        seed: config.seed,
        elapsed,
        summary,
        aggregate_path,
        wealth,
    }
}
