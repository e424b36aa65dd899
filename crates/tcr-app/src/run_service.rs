//! Run execution and export service.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tcr_contact::ContactModel;
use tcr_results::{ResultStore, RunManifest, TableFiles, compute_run_id};
use tcr_sim::{SimulationOutput, run_simulation};
use tracing::info;

use crate::error::AppResult;
use crate::project_service;

/// Version string folded into run ids.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for running a case.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Overrides the case's own model choice.
    pub model: Option<ContactModel>,
    /// Write TCR.csv / Q.csv / manifest.json.
    pub export: bool,
    /// Store root; defaults to `results/` next to the case file.
    pub out_dir: Option<PathBuf>,
    pub engine_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            model: None,
            export: true,
            out_dir: None,
            engine_version: ENGINE_VERSION.to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub case_path: &'a Path,
    pub options: RunOptions,
}

/// Response from a run.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub case_name: String,
    pub output: SimulationOutput,
    pub dropped_tcr_pairs: Vec<(String, String)>,
    /// Present when the run was exported.
    pub files: Option<TableFiles>,
    pub elapsed_s: f64,
}

/// Load a case, run the selected model and optionally export the tables.
pub fn run_case(request: &RunRequest) -> AppResult<RunResponse> {
    let start = Instant::now();
    let case = project_service::load_case(request.case_path)?;
    let loaded = case.to_simulation_input(request.options.model)?;
    let model = loaded.input.model;
    let run_id = compute_run_id(&case, model, &request.options.engine_version);

    let output = run_simulation(&loaded.input)?;

    let files = if request.options.export {
        let store = match &request.options.out_dir {
            Some(dir) => ResultStore::new(dir.clone())?,
            None => ResultStore::for_case(request.case_path)?,
        };
        let manifest = RunManifest {
            run_id: run_id.clone(),
            case_name: case.name.clone(),
            model: model.tag().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            engine_version: request.options.engine_version.clone(),
            detail_rows: output.details.len(),
            summary_rows: output.summaries.len(),
            diagnostics: output.diagnostics.iter().map(ToString::to_string).collect(),
        };
        let files = store.save_run(&manifest, &output.details, &output.summaries)?;
        info!(path = %files.detail.display(), "results exported");
        Some(files)
    } else {
        None
    };

    Ok(RunResponse {
        run_id,
        case_name: case.name,
        output,
        dropped_tcr_pairs: loaded.dropped_tcr_pairs,
        files,
        elapsed_s: start.elapsed().as_secs_f64(),
    })
}

/// Exported runs of the case at `case_path`, one per model.
pub fn list_runs(case_path: &Path, out_dir: Option<&Path>) -> AppResult<Vec<RunManifest>> {
    let case = project_service::load_case(case_path)?;
    let store = match out_dir {
        Some(dir) => ResultStore::new(dir.to_path_buf())?,
        None => ResultStore::for_case(case_path)?,
    };
    Ok(store.list_runs(&case.name)?)
}
