use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::model::WealthDynamics;
use crate::params::{AggregateParams, HouseholdParams};
use crate::simulation::SimulationConfig;

/// Everything one run needs. Any section or field missing from a config
/// file falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub household: HouseholdParams,
    pub aggregate: AggregateParams,
    pub simulation: SimulationConfig,
}

impl RunConfig {
    /// Load a run configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RunConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::debug!("loaded run config from {}", path.display());
        Ok(config)
    }

    pub fn build_model(&self) -> ModelResult<WealthDynamics> {
        WealthDynamics::new(self.household, self.aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::simulation::Backend;

    #[test]
    fn test_partial_config() {
        let json = r#"{
            "household": { "sigma_r": 0.45 },
            "simulation": { "households": 10, "backend": "batched" }
        }"#;
        let config: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.household.sigma_r, 0.45);
        assert_eq!(config.household.mu_r, 0.1);
        assert_eq!(config.aggregate, AggregateParams::default());
        assert_eq!(config.simulation.households, 10);
        assert_eq!(config.simulation.backend, Backend::Batched);
        assert_eq!(config.simulation.shift_length, 500);
        assert!(config.build_model().is_ok());
    }

    #[test]
    fn test_unstable_config_fails_to_build() {
        let json = r#"{ "household": { "s_0": 0.99 } }"#;
        let config: RunConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(
            config.build_model(),
            Err(ModelError::StabilityViolation { .. })
        ));
    }

    #[test]
    fn test_load_round_trip_from_disk() {
        let path = std::env::temp_dir().join(format!("wealth-config-{}.json", std::process::id()));
        let mut config = RunConfig::default();
        config.simulation.seed = 99;
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = RunConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = RunConfig::load("/nonexistent/wealth.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/wealth.json"));
    }
}
