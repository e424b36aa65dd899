//! Shared application service layer for contact-resistance studies.
//!
//! Frontends go through this crate to load and check case files, list
//! interfaces and pressures, run a contact model and export its tables.

pub mod error;
pub mod project_service;
pub mod report;
pub mod run_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use project_service::{CaseCheck, InterfaceSummary, check_case, list_interfaces, load_case, save_case};
pub use report::{microsurface, pressures};
pub use run_service::{ENGINE_VERSION, RunOptions, RunRequest, RunResponse, list_runs, run_case};
