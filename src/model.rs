//! Household Wealth Model
//!
//! A household's wealth evolves as
//!
//! ```text
//! w' = y' + R' * s(w)
//! ```
//!
//! where income `y'` and the gross return `R'` both load on a shared
//! aggregate factor `z'` plus idiosyncratic lognormal noise, and savings
//! `s(w) = s_0 * w` only kick in once wealth reaches the threshold `w_hat`.
//!
//! ## Stability
//! The model refuses to build when `E[R] * s_0 >= 1`, since wealth would
//! then diverge in expectation.

use crate::error::{ModelError, ModelResult};
use crate::params::{AggregateParams, HouseholdParams};

/// A validated wealth-dynamics model with its stationary moments.
#[derive(Clone, Debug, PartialEq)]
pub struct WealthDynamics {
    household: HouseholdParams,
    aggregate: AggregateParams,
    z_mean: f64,
    z_var: f64,
    y_mean: f64,
    r_mean: f64,
}

impl WealthDynamics {
    pub fn new(household: HouseholdParams, aggregate: AggregateParams) -> ModelResult<Self> {
        if !(aggregate.a.abs() < 1.0) {
            return Err(ModelError::NonStationaryAggregate { a: aggregate.a.abs() });
        }

        let z_mean = aggregate.stationary_mean();
        let z_var = aggregate.stationary_variance();
        let exp_z_mean = (z_mean + z_var / 2.0).exp();

        let r_mean = household.c_r * exp_z_mean
            + (household.mu_r + household.sigma_r.powi(2) / 2.0).exp();
        let y_mean = household.c_y * exp_z_mean
            + (household.mu_y + household.sigma_y.powi(2) / 2.0).exp();

        // NaN must fail too, hence the negated comparison.
        let alpha = r_mean * household.s_0;
        if !(alpha < 1.0) {
            return Err(ModelError::StabilityViolation { alpha });
        }

        log::debug!(
            "model built: z_mean={z_mean:.4} z_var={z_var:.4} y_mean={y_mean:.4} R_mean={r_mean:.4} alpha={alpha:.4}"
        );

        Ok(Self {
            household,
            aggregate,
            z_mean,
            z_var,
            y_mean,
            r_mean,
        })
    }

    pub fn household(&self) -> &HouseholdParams {
        &self.household
    }

    pub fn aggregate(&self) -> &AggregateParams {
        &self.aggregate
    }

    /// Stationary mean of the aggregate factor.
    pub fn z_mean(&self) -> f64 {
        self.z_mean
    }

    /// Stationary variance of the aggregate factor.
    pub fn z_var(&self) -> f64 {
        self.z_var
    }

    /// Expected income under the stationary aggregate distribution.
    pub fn y_mean(&self) -> f64 {
        self.y_mean
    }

    /// Expected gross return under the stationary aggregate distribution.
    pub fn r_mean(&self) -> f64 {
        self.r_mean
    }

    /// `E[R] * s_0`, strictly below one for any constructed model.
    pub fn alpha(&self) -> f64 {
        self.r_mean * self.household.s_0
    }

    /// Next-period labor income given the aggregate state and an income draw.
    #[inline]
    pub fn income(&self, z: f64, zeta: f64) -> f64 {
        let h = &self.household;
        h.c_y * z.exp() + (h.mu_y + h.sigma_y * zeta).exp()
    }

    /// Next-period gross return given the aggregate state and a return draw.
    #[inline]
    pub fn gross_return(&self, z: f64, eta: f64) -> f64 {
        let h = &self.household;
        h.c_r * z.exp() + (h.mu_r + h.sigma_r * eta).exp()
    }

    /// One household step. `zeta` and `eta` are standard normal draws for
    /// income and return; `eta` is ignored below the savings threshold.
    #[inline]
    pub fn update_wealth(&self, w: f64, z: f64, zeta: f64, eta: f64) -> f64 {
        let y = self.income(z, zeta);
        if w >= self.household.w_hat {
            y + self.gross_return(z, eta) * self.household.s_0 * w
        } else {
            y
        }
    }
}
