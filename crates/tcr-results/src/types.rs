//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

/// Written next to the tables of every exported run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub case_name: String,
    /// Short model tag, also the run directory name.
    pub model: String,
    pub timestamp: String,
    pub engine_version: String,
    pub detail_rows: usize,
    pub summary_rows: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}
