//! Error types for system definition edits.

use crate::materials::MaterialIssue;
use thiserror::Error;

/// Errors raised while building or editing a system definition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SystemError {
    #[error("Geometry '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Invalid geometry '{name}': {reason}")]
    InvalidGeometry { name: String, reason: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("System has no geometries")]
    Empty,

    #[error("No contiguous interface {top} → {bottom}")]
    UnknownInterface { top: String, bottom: String },

    #[error("Invalid TIM '{name}': {reason}")]
    InvalidTim { name: String, reason: &'static str },

    #[error("TIM id space exhausted")]
    TimIdsExhausted,

    #[error("System has TCR interfaces but no TIM is defined")]
    NoTims,

    #[error("{} material field issue(s) on geometries touching TCR interfaces", issues.len())]
    IncompleteMaterials { issues: Vec<MaterialIssue> },

    #[error("Non-finite force value: {value}")]
    NonFiniteForce { value: f64 },

    #[error("No forces defined")]
    NoForces,

    #[error("No interfaces are flagged for TCR")]
    NoTcrInterfaces,
}

pub type SystemResult<T> = Result<T, SystemError>;
