//! Deterministic random number generation.
//!
//! All randomness flows through `StreamRng` instances derived from a
//! single master seed. The aggregate path owns stream 0 and agent `i`
//! owns stream `i + 1`, so:
//!   - Every agent's idiosyncratic draws are independent of every other's.
//!   - An agent's draws do not depend on how many agents exist, or on
//!     which worker thread advances it.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG for one stream (the aggregate path or one agent).
#[derive(Clone, Debug)]
pub struct StreamRng {
    inner: Pcg64Mcg,
}

impl StreamRng {
    /// Create a stream RNG from the master seed and a stable stream index.
    pub fn new(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn aggregate(master_seed: u64) -> Self {
        Self::new(master_seed, Stream::Aggregate.index())
    }

    pub fn agent(master_seed: u64, agent: usize) -> Self {
        Self::new(master_seed, Stream::Agent(agent).index())
    }

    /// Draw from N(0, 1).
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        self.inner.sample(StandardNormal)
    }

    /// Draw the (income, return) shock pair for one household step.
    #[inline]
    pub fn shock_pair(&mut self) -> (f64, f64) {
        let zeta = self.standard_normal();
        let eta = self.standard_normal();
        (zeta, eta)
    }
}

/// Stable stream slot assignments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Aggregate,
    Agent(usize),
}

impl Stream {
    pub fn index(&self) -> u64 {
        match self {
            Self::Aggregate => 0,
            Self::Agent(i) => *i as u64 + 1,
        }
    }
}
