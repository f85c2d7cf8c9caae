//! Parameter records for the household and aggregate processes.
//!
//! Both records deserialize with per-field defaults, so a config file only
//! needs to name the coefficients it changes.

use serde::{Deserialize, Serialize};

/// Household income and savings/return coefficients.
///
/// Income:  y = c_y * exp(z) + exp(mu_y + sigma_y * zeta)
/// Return:  R = c_r * exp(z) + exp(mu_r + sigma_r * eta)
/// Savings: s(w) = s_0 * w when w >= w_hat, zero otherwise
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseholdParams {
    pub w_hat: f64,   // Savings threshold
    pub s_0: f64,     // Savings rate
    pub c_y: f64,     // Income scale on the aggregate factor
    pub mu_y: f64,    // Income shock location
    pub sigma_y: f64, // Income shock scale
    pub c_r: f64,     // Return scale on the aggregate factor
    pub mu_r: f64,    // Return shock location
    pub sigma_r: f64, // Return shock scale
}

impl Default for HouseholdParams {
    fn default() -> Self {
        Self {
            w_hat: 1.0,
            s_0: 0.75,
            c_y: 1.0,
            mu_y: 1.0,
            sigma_y: 0.2,
            c_r: 0.05,
            mu_r: 0.1,
            sigma_r: 0.5,
        }
    }
}

/// AR(1) aggregate factor: z' = a * z + b + sigma_z * eps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateParams {
    pub a: f64,       // Persistence
    pub b: f64,       // Drift
    pub sigma_z: f64, // Shock scale
}

impl Default for AggregateParams {
    fn default() -> Self {
        Self {
            a: 0.5,
            b: 0.0,
            sigma_z: 0.1,
        }
    }
}

impl AggregateParams {
    pub fn stationary_mean(&self) -> f64 {
        self.b / (1.0 - self.a)
    }

    pub fn stationary_variance(&self) -> f64 {
        self.sigma_z.powi(2) / (1.0 - self.a.powi(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stationary_moments() {
        let params = AggregateParams { a: 0.5, b: 1.0, sigma_z: 0.3 };
        assert!((params.stationary_mean() - 2.0).abs() < 1e-12);
        assert!((params.stationary_variance() - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: HouseholdParams = serde_json::from_str(r#"{ "mu_r": 0.05 }"#).unwrap();
        assert_eq!(params.mu_r, 0.05);
        assert_eq!(params.s_0, HouseholdParams::default().s_0);
        assert_eq!(params.w_hat, 1.0);
    }
}
