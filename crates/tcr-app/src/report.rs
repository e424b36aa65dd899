//! Read-only reports computed from a case without running a model.

use tcr_project::Case;
use tcr_sim::{MicrosurfaceReport, microsurface_report};
use tcr_system::{ForceList, PressureRow};

use crate::error::AppResult;

/// Nominal pressure for every (force, TCR interface) pair.
pub fn pressures(case: &Case) -> AppResult<Vec<PressureRow>> {
    let (stack, _) = case.to_stack()?;
    let forces = ForceList::from_values(case.forces_n.clone())?;
    Ok(forces.pressure_report(&stack)?)
}

/// Effective surface parameters of every TCR interface.
pub fn microsurface(case: &Case) -> AppResult<MicrosurfaceReport> {
    let (stack, _) = case.to_stack()?;
    Ok(microsurface_report(&stack, &case.materials))
}
