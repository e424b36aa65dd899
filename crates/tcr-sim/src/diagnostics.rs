//! Non-fatal conditions reported alongside a run's rows.

use std::fmt;

use tcr_contact::ParamError;

/// Something the runner skipped or ignored without failing the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Material data for the interface could not be read; no rows produced.
    UnresolvedInterface {
        interface_index: usize,
        interface: String,
        error: ParamError,
    },
    /// Nominal contact area is not positive; no rows produced.
    NoContactArea {
        interface_index: usize,
        interface: String,
    },
    /// Assignment points past the last interface.
    UnknownInterface { interface_index: usize },
    /// Assignment points at an interface without contact resistance.
    NotTcrInterface {
        interface_index: usize,
        interface: String,
    },
    /// Named TIM is not in the library; the interface runs without one.
    UnknownTim {
        interface_index: usize,
        interface: String,
        tim: String,
    },
    /// Interface has contact resistance but no assignment; it runs without a TIM.
    Unassigned {
        interface_index: usize,
        interface: String,
    },
    /// Thickness text is not a number; treated as absent.
    BadThickness {
        interface_index: usize,
        interface: String,
        text: String,
    },
}

impl Diagnostic {
    /// Index the diagnostic refers to.
    pub fn interface_index(&self) -> usize {
        match self {
            Diagnostic::UnresolvedInterface { interface_index, .. }
            | Diagnostic::NoContactArea { interface_index, .. }
            | Diagnostic::UnknownInterface { interface_index }
            | Diagnostic::NotTcrInterface { interface_index, .. }
            | Diagnostic::UnknownTim { interface_index, .. }
            | Diagnostic::Unassigned { interface_index, .. }
            | Diagnostic::BadThickness { interface_index, .. } => *interface_index,
        }
    }

    /// True when the interface produced no rows at all.
    pub fn skips_interface(&self) -> bool {
        !matches!(
            self,
            Diagnostic::UnknownTim { .. } | Diagnostic::Unassigned { .. } | Diagnostic::BadThickness { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedInterface {
                interface_index,
                interface,
                error,
            } => write!(f, "interface #{interface_index} ({interface}) skipped: {error}"),
            Diagnostic::NoContactArea {
                interface_index,
                interface,
            } => write!(
                f,
                "interface #{interface_index} ({interface}) skipped: nominal contact area is not positive"
            ),
            Diagnostic::UnknownInterface { interface_index } => {
                write!(f, "assignment for interface #{interface_index} ignored: no such interface")
            }
            Diagnostic::NotTcrInterface {
                interface_index,
                interface,
            } => write!(
                f,
                "assignment for interface #{interface_index} ({interface}) ignored: contact resistance not enabled"
            ),
            Diagnostic::UnknownTim {
                interface_index,
                interface,
                tim,
            } => write!(
                f,
                "interface #{interface_index} ({interface}): unknown TIM '{tim}', running without one"
            ),
            Diagnostic::Unassigned {
                interface_index,
                interface,
            } => write!(
                f,
                "interface #{interface_index} ({interface}): no assignment, running without a TIM"
            ),
            Diagnostic::BadThickness {
                interface_index,
                interface,
                text,
            } => write!(
                f,
                "interface #{interface_index} ({interface}): thickness '{text}' is not a number, treated as absent"
            ),
        }
    }
}
