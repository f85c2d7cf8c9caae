//! Wealth Distribution Simulation Library
//!
//! Simulates household wealth driven by a shared aggregate shock and
//! idiosyncratic income and return shocks, then measures the inequality of
//! the resulting cross-section.
//!
//! ## Modules
//!
//! - `params`: household and aggregate parameter records
//! - `model`: validated wealth model and the single-household update rule
//! - `aggregate`: AR(1) aggregate shock path
//! - `simulation`: cross-sectional advance with interchangeable backends
//! - `inequality`: Lorenz curve, Gini coefficient, top shares
//! - `sweep`: inequality across return parameters
//! - `config`: JSON run configuration
//!
//! ## Usage
//!
//! ```bash
//! # Simulate one cross-section and report inequality
//! cargo run --bin wealth_dynamics --release
//!
//! # Gini coefficient across return parameters
//! cargo run --bin inequality_sweep --release
//!
//! # Compare execution backends on the same run
//! cargo run --bin backend_timing --release
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod inequality;
pub mod model;
pub mod params;
pub mod rng;
pub mod simulation;
pub mod sweep;

pub use error::{ModelError, ModelResult};
pub use model::WealthDynamics;
pub use params::{AggregateParams, HouseholdParams};
pub use simulation::{Backend, SimulationConfig};
