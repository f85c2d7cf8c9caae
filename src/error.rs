use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Stability condition failed: R_mean * s_0 = {alpha} (must be < 1)")]
    StabilityViolation { alpha: f64 },

    #[error("Aggregate process is not stationary: |a| = {a} (must be < 1)")]
    NonStationaryAggregate { a: f64 },
}

pub type ModelResult<T> = Result<T, ModelError>;
