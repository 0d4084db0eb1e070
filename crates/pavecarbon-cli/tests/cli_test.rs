//! Command-line regression tests
//!
//! Each test runs the `pavecarbon` binary with its config directory pointed at
//! a temporary folder, so the user's own configuration is never read or written.

use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn pavecarbon(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pavecarbon"))
        .args(args)
        .env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home)
        .output()
        .expect("failed to run pavecarbon")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_quick_comparison_as_json() {
    let home = tempdir().unwrap();
    let output = pavecarbon(
        home.path(),
        &["quick", "-t", "Revêtement gravier", "-t", "Revêtement béton", "-a", "10", "-f", "json"],
    );
    let document = stdout_json(&output);

    assert!(document["generated_at"].is_string());
    let rows = document["report"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Revêtement gravier");
    assert_eq!(document["report"]["total"]["surface_area"], 20.0);
}

#[test]
fn test_quick_unknown_template_fails() {
    let home = tempdir().unwrap();
    let output = pavecarbon(home.path(), &["quick", "-t", "Revêtement inconnu"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error:"), "{stderr}");
}

#[test]
fn test_compute_writes_report() {
    let home = tempdir().unwrap();
    let project = home.path().join("site.toml");
    std::fs::write(
        &project,
        "[[compositions]]\nname = \"Parking\"\nsurface_area = 120.0\ntemplate = \"Revêtement bitumineux\"\n",
    )
    .unwrap();
    let report = home.path().join("report.json");

    let output = pavecarbon(
        home.path(),
        &[
            "compute",
            project.to_str().unwrap(),
            "-o",
            report.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Parking"));

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(saved["report"]["rows"][0]["surface_area"], 120.0);
}

#[test]
fn test_compute_missing_project_fails() {
    let home = tempdir().unwrap();
    let missing = home.path().join("absent.toml");
    let output = pavecarbon(home.path(), &["compute", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
}

#[test]
fn test_config_area_applies_to_new_compositions() {
    let home = tempdir().unwrap();
    let set = pavecarbon(home.path(), &["config", "--set-area", "25"]);
    assert!(set.status.success(), "{}", String::from_utf8_lossy(&set.stderr));

    let document = stdout_json(&pavecarbon(
        home.path(),
        &["quick", "-t", "Revêtement gravier", "-f", "json"],
    ));
    assert_eq!(document["report"]["rows"][0]["surface_area"], 25.0);

    let rejected = pavecarbon(home.path(), &["config", "--set-area=-3"]);
    assert!(!rejected.status.success());
}

#[test]
fn test_negative_area_in_config_file_is_refused() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join("pavecarbon");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        r#"{ "default_surface_area": -5.0 }"#,
    )
    .unwrap();

    let output = pavecarbon(home.path(), &["quick", "-t", "Revêtement gravier"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid surface area"));
}
