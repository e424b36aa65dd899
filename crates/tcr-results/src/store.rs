//! Run storage API.
//!
//! One directory per contact model under the store root; exporting a model
//! again replaces its previous tables.

use crate::table::{render_detail_csv, render_summary_csv};
use crate::types::RunManifest;
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};
use tcr_sim::{DetailRow, SummaryRow};

pub const DETAIL_FILE: &str = "TCR.csv";
pub const SUMMARY_FILE: &str = "Q.csv";
const MANIFEST_FILE: &str = "manifest.json";

/// Where an exported run was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFiles {
    pub detail: PathBuf,
    pub summary: PathBuf,
    pub manifest: PathBuf,
}

#[derive(Clone)]
pub struct ResultStore {
    root_dir: PathBuf,
}

impl ResultStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// `results/` next to the case file.
    pub fn for_case(case_path: &Path) -> ResultsResult<Self> {
        let case_dir = case_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "case path has no parent directory".to_string(),
            })?;
        Self::new(case_dir.join("results"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn run_dir(&self, model_tag: &str) -> PathBuf {
        self.root_dir.join(model_tag)
    }

    pub fn has_run(&self, model_tag: &str) -> bool {
        self.run_dir(model_tag).join(MANIFEST_FILE).exists()
    }

    pub fn save_run(
        &self,
        manifest: &RunManifest,
        details: &[DetailRow],
        summaries: &[SummaryRow],
    ) -> ResultsResult<TableFiles> {
        let run_dir = self.run_dir(&manifest.model);
        fs::create_dir_all(&run_dir)?;

        let files = TableFiles {
            detail: run_dir.join(DETAIL_FILE),
            summary: run_dir.join(SUMMARY_FILE),
            manifest: run_dir.join(MANIFEST_FILE),
        };
        fs::write(&files.detail, render_detail_csv(details))?;
        fs::write(&files.summary, render_summary_csv(summaries))?;
        fs::write(&files.manifest, serde_json::to_string_pretty(manifest)?)?;

        Ok(files)
    }

    pub fn load_manifest(&self, model_tag: &str) -> ResultsResult<RunManifest> {
        let manifest_path = self.run_dir(model_tag).join(MANIFEST_FILE);

        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                model: model_tag.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Manifests of every stored run for the named case.
    pub fn list_runs(&self, case_name: &str) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(runs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let model = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&model)
                    && manifest.case_name == case_name
                {
                    runs.push(manifest);
                }
            }
        }
        runs.sort_by(|a, b| a.model.cmp(&b.model));

        Ok(runs)
    }

    pub fn delete_run(&self, model_tag: &str) -> ResultsResult<()> {
        let run_dir = self.run_dir(model_tag);
        if run_dir.exists() {
            fs::remove_dir_all(run_dir)?;
        }
        Ok(())
    }
}
