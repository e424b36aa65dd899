//! Immutable snapshot a run is computed from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tcr_contact::ContactModel;
use tcr_system::{MaterialTable, SystemStack, TimLibrary};

/// Gap filler chosen for one interface, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAssignment {
    /// TIM name looked up in the library; `None` means bare contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tim: Option<String>,
    /// Bond-line or gap thickness [m] as text; a decimal comma is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
}

impl InterfaceAssignment {
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn with_tim(tim: impl Into<String>, thickness: impl Into<String>) -> Self {
        Self {
            tim: Some(tim.into()),
            thickness: Some(thickness.into()),
        }
    }
}

/// Hot and cold boundary temperatures [K].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryTemperatures {
    pub t_hot_k: f64,
    pub t_cold_k: f64,
}

/// Everything a run reads. Owned, so nothing changes underneath the runner.
#[derive(Debug, Clone)]
pub struct SimulationInput {
    pub stack: SystemStack,
    pub materials: MaterialTable,
    pub tims: TimLibrary,
    /// Keyed by interface index in stack order.
    pub assignments: BTreeMap<usize, InterfaceAssignment>,
    /// Force magnitudes [N]; each entry is its own case.
    pub forces: Vec<f64>,
    pub boundary: BoundaryTemperatures,
    pub model: ContactModel,
}
