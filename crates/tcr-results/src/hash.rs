//! Content-based hashing for run IDs.

use sha2::{Digest, Sha256};
use tcr_contact::ContactModel;
use tcr_project::Case;

pub fn compute_run_id(case: &Case, model: ContactModel, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let case_json = serde_json::to_string(case).unwrap_or_default();
    hasher.update(case_json.as_bytes());

    hasher.update(model.tag().as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
