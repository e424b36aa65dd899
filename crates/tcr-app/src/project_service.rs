//! Case loading, saving, checking and introspection.

use std::path::Path;

use tcr_project::Case;
use tcr_system::{MaterialIssue, SystemError};

use crate::error::AppResult;

/// Load and structurally validate a case (YAML, or JSON by extension).
pub fn load_case(path: &Path) -> AppResult<Case> {
    Ok(tcr_project::load_case(path)?)
}

pub fn save_case(path: &Path, case: &Case) -> AppResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => tcr_project::save_json(path, case)?,
        _ => tcr_project::save_yaml(path, case)?,
    }
    Ok(())
}

/// Readiness of a case beyond its structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseCheck {
    /// Flagged pairs that are not adjacent in the stack.
    pub dropped_tcr_pairs: Vec<(String, String)>,
    /// TCR interfaces exist but the TIM library is empty.
    pub missing_tims: bool,
    /// Fields missing or malformed on geometries touching TCR interfaces.
    pub material_issues: Vec<MaterialIssue>,
}

impl CaseCheck {
    pub fn is_ready(&self) -> bool {
        self.dropped_tcr_pairs.is_empty() && !self.missing_tims && self.material_issues.is_empty()
    }
}

/// Material and TIM completeness of a structurally valid case.
pub fn check_case(case: &Case) -> AppResult<CaseCheck> {
    let loaded = case.to_simulation_input(None)?;
    let input = &loaded.input;
    let mut check = CaseCheck {
        dropped_tcr_pairs: loaded.dropped_tcr_pairs,
        ..CaseCheck::default()
    };
    match input.materials.validate_for_tcr(&input.stack, &input.tims) {
        Ok(()) => {}
        Err(SystemError::NoTims) => check.missing_tims = true,
        Err(SystemError::IncompleteMaterials { issues }) => check.material_issues = issues,
        Err(e) => return Err(e.into()),
    }
    Ok(check)
}

/// One interface of the stack for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSummary {
    pub index: usize,
    pub label: String,
    pub has_tcr: bool,
    pub a_nominal: f64,
    /// `Some("")` when assigned without a TIM.
    pub tim: Option<String>,
    pub thickness: Option<String>,
}

pub fn list_interfaces(case: &Case) -> AppResult<Vec<InterfaceSummary>> {
    let loaded = case.to_simulation_input(None)?;
    let input = &loaded.input;
    Ok(input
        .stack
        .interfaces()
        .iter()
        .enumerate()
        .map(|(index, iface)| {
            let assignment = input.assignments.get(&index);
            InterfaceSummary {
                index,
                label: iface.label(),
                has_tcr: iface.has_tcr,
                a_nominal: iface.a_nominal,
                tim: assignment.map(|a| a.tim.clone().unwrap_or_default()),
                thickness: assignment.and_then(|a| a.thickness.clone()),
            }
        })
        .collect())
}
