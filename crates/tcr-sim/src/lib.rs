//! Batch runner for contact-resistance simulations.
//!
//! Provides:
//! - an immutable input snapshot (stack, materials, TIMs, assignments, forces, boundary)
//! - the runner producing per-(interface, force) detail rows and per-force summaries
//! - non-fatal diagnostics for skipped interfaces and ignored assignment data
//! - the microsurface report of resolved interface parameters

pub mod diagnostics;
pub mod error;
pub mod input;
pub mod microsurface;
pub mod runner;

pub use diagnostics::Diagnostic;
pub use error::{SimError, SimResult};
pub use input::{BoundaryTemperatures, InterfaceAssignment, SimulationInput};
pub use microsurface::{MicrosurfaceReport, microsurface_report};
pub use runner::{DetailRow, SimulationOutput, SummaryRow, run_simulation};
