//! End-to-end: project file in, comparison and reports out

use pavecarbon_app::export::export_to_excel;
use pavecarbon_app::project::load_project;
use pavecarbon_app::Config;
use pavecarbon_infra::{write_report_json, ReportDocument};
use pavecarbon_types::{Error, InputError};
use tempfile::tempdir;

const PROJECT: &str = r#"
[[compositions]]
name = "Parking"
surface_area = 120.0
template = "Revêtement bitumineux"

[[compositions]]
name = "Allée"
surface_area = 0.0

[[compositions.layers]]
material = "Pavé en pierre"
thickness_cm = 10
joint_type = "cement"
origin = "overseas"

[[compositions.layers]]
material = "Grave"
thickness_cm = 20
"#;

#[test]
fn test_project_to_reports() {
    let dir = tempdir().unwrap();
    let project_path = dir.path().join("site.toml");
    std::fs::write(&project_path, PROJECT).unwrap();

    let session = load_project(&project_path, &Config::default()).unwrap();
    assert_eq!(session.compositions().len(), 2);

    let report = session.compute_comparison().unwrap();
    assert_eq!(report.rows[0].name, "Parking");
    assert!(report.rows[0].footprint_per_area.is_some());
    assert!(report.rows[1].footprint_per_area.is_none());
    assert_eq!(report.total.surface_area, 120.0);
    assert!(report.legend.iter().any(|entry| entry.material == "Pavé en pierre"));

    let json_path = dir.path().join("report.json");
    write_report_json(&report, &json_path).unwrap();
    let document: ReportDocument =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(document.report.rows.len(), 2);
    assert!((document.report.total.total_footprint - report.total.total_footprint).abs() < 1e-6);

    let xlsx_path = dir.path().join("report.xlsx");
    export_to_excel(&report, &xlsx_path).unwrap();
    assert!(xlsx_path.exists());
}

#[test]
fn test_project_with_unknown_template_fails() {
    let dir = tempdir().unwrap();
    let project_path = dir.path().join("bad.toml");
    std::fs::write(
        &project_path,
        "[[compositions]]\ntemplate = \"Revêtement inconnu\"\n",
    )
    .unwrap();

    let err = load_project(&project_path, &Config::default()).err().unwrap();
    assert!(matches!(err, Error::Input(InputError::UnknownTemplate(_))));
}

#[test]
fn test_missing_project_file() {
    let dir = tempdir().unwrap();
    let err = load_project(&dir.path().join("absent.toml"), &Config::default())
        .err()
        .unwrap();
    assert!(matches!(err, Error::FileNotFound(_)));
}
