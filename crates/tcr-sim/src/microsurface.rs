//! Effective surface parameters of every TCR interface, without running.

use tcr_contact::{EffectiveParams, resolve_interface};
use tcr_system::{MaterialTable, SystemStack};

use crate::diagnostics::Diagnostic;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MicrosurfaceReport {
    /// `(interface index, parameters)` in stack order.
    pub interfaces: Vec<(usize, EffectiveParams)>,
    /// Interfaces whose material data could not be read.
    pub diagnostics: Vec<Diagnostic>,
}

pub fn microsurface_report(stack: &SystemStack, materials: &MaterialTable) -> MicrosurfaceReport {
    let mut report = MicrosurfaceReport::default();
    for (index, iface) in stack.tcr_interfaces() {
        match resolve_interface(iface, materials) {
            Ok(params) => report.interfaces.push((index, params)),
            Err(error) => report.diagnostics.push(Diagnostic::UnresolvedInterface {
                interface_index: index,
                interface: iface.label(),
                error,
            }),
        }
    }
    report
}
