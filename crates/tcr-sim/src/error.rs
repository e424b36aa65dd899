//! Error types for simulation runs.

use thiserror::Error;

/// Batch-level failures; nothing is computed when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("No forces defined")]
    NoForces,

    #[error("No interfaces configured")]
    NoInterfaces,

    #[error("Boundary temperature {which} is not a finite value: {value}")]
    NonFiniteTemperature { which: &'static str, value: f64 },

    #[error("Force #{index} is not a finite value: {value}")]
    NonFiniteForce { index: usize, value: f64 },
}

pub type SimResult<T> = Result<T, SimError>;
