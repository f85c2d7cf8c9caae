//! Aggregate Shock Path
//!
//! The aggregate factor follows a Gaussian AR(1):
//!
//! ```text
//! z_0     = b / (1 - a)
//! z_{t+1} = a * z_t + b + sigma_z * eps_{t+1},   eps ~ N(0, 1)
//! ```
//!
//! `AggregatePath` yields the path lazily and can be replayed from its
//! first element with `restart()`.

use std::iter::FusedIterator;

use crate::model::WealthDynamics;
use crate::params::AggregateParams;
use crate::rng::StreamRng;

#[derive(Clone, Debug)]
pub struct AggregatePath {
    params: AggregateParams,
    z_0: f64,
    seed: u64,
    length: usize,
    rng: StreamRng,
    current: f64,
    emitted: usize,
}

impl AggregatePath {
    /// A path of `length` shocks starting at the model's stationary mean.
    pub fn new(model: &WealthDynamics, length: usize, seed: u64) -> Self {
        Self::from_params(*model.aggregate(), model.z_mean(), length, seed)
    }

    pub fn from_params(params: AggregateParams, z_0: f64, length: usize, seed: u64) -> Self {
        Self {
            params,
            z_0,
            seed,
            length,
            rng: StreamRng::aggregate(seed),
            current: z_0,
            emitted: 0,
        }
    }

    /// Rewind to the first element; the replay is identical.
    pub fn restart(&mut self) {
        self.rng = StreamRng::aggregate(self.seed);
        self.current = self.z_0;
        self.emitted = 0;
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Iterator for AggregatePath {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.emitted >= self.length {
            return None;
        }
        if self.emitted > 0 {
            let p = &self.params;
            self.current = p.a * self.current + p.b + p.sigma_z * self.rng.standard_normal();
        }
        self.emitted += 1;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.length - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AggregatePath {}

impl FusedIterator for AggregatePath {}

/// Materialize a full aggregate path for sharing across a cross-section.
pub fn generate_aggregate_path(model: &WealthDynamics, length: usize, seed: u64) -> Vec<f64> {
    AggregatePath::new(model, length, seed).collect()
}
