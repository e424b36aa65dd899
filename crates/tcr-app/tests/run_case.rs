//! Integration test: case file to exported tables.

use std::path::PathBuf;

use tcr_app::{
    RunOptions, RunRequest, check_case, list_interfaces, list_runs, load_case, pressures, run_case,
};
use tcr_contact::ContactModel;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos").join(name)
}

#[test]
fn run_and_export_two_block_case() {
    let out_dir = std::env::temp_dir().join("tcr_app_run_export");
    let _ = std::fs::remove_dir_all(&out_dir);

    let path = demo("two_block.yaml");
    let request = RunRequest {
        case_path: &path,
        options: RunOptions {
            out_dir: Some(out_dir.clone()),
            ..RunOptions::default()
        },
    };
    let response = run_case(&request).unwrap();

    assert_eq!(response.output.model, ContactModel::MikicElastic);
    assert_eq!(response.output.summaries.len(), 3);
    assert_eq!(response.output.details.len(), 3);
    assert_eq!(response.run_id.len(), 64);

    let files = response.files.unwrap();
    assert_eq!(files.detail, out_dir.join("mikic_elastic").join("TCR.csv"));
    let q = std::fs::read_to_string(&files.summary).unwrap();
    // Zero force: no contact and no collapsing-gap thickness.
    assert_eq!(q.lines().nth(1), Some("0,0.0001,INF,INF,0.0000"));
    assert!(files.manifest.exists());

    let runs = list_runs(&path, Some(&out_dir)).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].run_id, response.run_id);
    assert_eq!(runs[0].case_name, "two-block stack");
}

#[test]
fn model_override_and_no_export() {
    let path = demo("heat_sink.yaml");
    let cmy = run_case(&RunRequest {
        case_path: &path,
        options: RunOptions {
            export: false,
            ..RunOptions::default()
        },
    })
    .unwrap();
    assert_eq!(cmy.output.model, ContactModel::Cmy);
    assert!(cmy.files.is_none());

    let plastic = run_case(&RunRequest {
        case_path: &path,
        options: RunOptions {
            model: Some(ContactModel::MikicPlastic),
            export: false,
            ..RunOptions::default()
        },
    })
    .unwrap();
    assert_eq!(plastic.output.model, ContactModel::MikicPlastic);
    assert_ne!(cmy.run_id, plastic.run_id);
    assert_eq!(cmy.output.summaries.len(), plastic.output.summaries.len());
}

#[test]
fn demo_cases_are_ready() {
    for name in ["two_block.yaml", "heat_sink.yaml"] {
        let case = load_case(&demo(name)).unwrap();
        let check = check_case(&case).unwrap();
        assert!(check.is_ready(), "{name}: {check:?}");
    }
}

#[test]
fn introspection_reports() {
    let case = load_case(&demo("heat_sink.yaml")).unwrap();

    let interfaces = list_interfaces(&case).unwrap();
    assert_eq!(interfaces.len(), 2);
    assert_eq!(interfaces[0].label, "Chip → Spreader");
    assert_eq!(interfaces[0].tim.as_deref(), Some("silicone grease"));
    assert!((interfaces[0].a_nominal - 4e-4).abs() < 1e-12);

    let rows = pressures(&case).unwrap();
    assert_eq!(rows.len(), case.forces_n.len() * 2);
    assert!((rows[0].pressure_pa - 10.0 / 4e-4).abs() < 1e-6);
}

#[test]
fn incomplete_materials_are_listed() {
    let mut case = load_case(&demo("two_block.yaml")).unwrap();
    case.materials = Default::default();
    let check = check_case(&case).unwrap();
    assert!(!check.is_ready());
    // Both geometries lack all seven fields.
    assert_eq!(check.material_issues.len(), 14);
}
