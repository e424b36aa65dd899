//! tcr-results: flat result tables and the per-model run store.

pub mod hash;
pub mod store;
pub mod table;
pub mod types;

pub use hash::compute_run_id;
pub use store::{ResultStore, TableFiles};
pub use table::{DETAIL_HEADER, SUMMARY_HEADER, format_value, render_detail_csv, render_summary_csv};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {model}")]
    RunNotFound { model: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
