//! Integration tests for the calhouse binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const MODEL: &str = r#"{
    "format_version": 1,
    "name": "ridge",
    "estimator": {
        "kind": "linear_pipeline",
        "numeric": [
            {"feature": "median_income", "mean": 3.8, "scale": 1.9, "coefficient": 76000.0},
            {"feature": "latitude", "mean": 35.6, "scale": 2.1, "coefficient": -80000.0}
        ],
        "categorical": [{"feature": "ocean_proximity", "levels": {"INLAND": -40000.0}}],
        "intercept": 206000.0
    }
}"#;

fn calhouse(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calhouse"))
        .current_dir(dir)
        .env_remove("CALHOUSE_HOUSING_DATA")
        .env_remove("CALHOUSE_GEO_DATA")
        .env_remove("CALHOUSE_MODEL")
        .env_remove("CALHOUSE_PAGE_TEXT")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn json_stdout(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

#[test]
fn test_inspect_model_lists_sorted_coefficients() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ridge.json"), MODEL).unwrap();

    let output = calhouse(dir.path(), &["inspect", "model", "--model", "ridge.json", "--json"]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["name"], "ridge");
    assert_eq!(parsed["data"]["kind"], "linear_pipeline");

    let terms: Vec<&str> = parsed["data"]["coefficients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["term"].as_str().unwrap())
        .collect();
    assert_eq!(terms, vec!["latitude", "ocean_proximity_INLAND", "median_income"]);
}

#[test]
fn test_inspect_config_reports_sources() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("calhouse.toml"), "geo_data = \"shapes/counties.parquet\"\n").unwrap();

    let output = calhouse(dir.path(), &["inspect", "config", "--model", "other.json", "--json"]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let entries = parsed["data"]["config"].as_array().unwrap();
    let find = |key: &str| entries.iter().find(|e| e["key"] == key).unwrap().clone();

    assert_eq!(find("geo_data")["value"], "shapes/counties.parquet");
    assert_eq!(find("geo_data")["source"], "File");
    assert_eq!(find("model")["value"], "other.json");
    assert_eq!(find("model")["source"], "Cli");
    assert_eq!(find("housing_data")["source"], "Default");
}

#[test]
fn test_missing_model_suggests_settings() {
    let dir = TempDir::new().unwrap();

    let output = calhouse(dir.path(), &["inspect", "model"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot load the model"));
    assert!(stderr.contains("--model"));
}

#[test]
fn test_predict_rejects_out_of_range_age_before_loading() {
    let dir = TempDir::new().unwrap();

    let output = calhouse(dir.path(), &["predict", "--county", "Fresno", "--age", "80"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--age is out of range"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();

    let output = calhouse(dir.path(), &["counties", "--config", "absent.toml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration file not found"));
}

#[test]
fn test_missing_county_file() {
    let dir = TempDir::new().unwrap();

    let output = calhouse(dir.path(), &["counties"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input file not found"));
    assert!(stderr.contains("CALHOUSE_GEO_DATA"));
}

#[test]
fn test_debug_log_goes_to_stderr() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_calhouse"))
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .args(["inspect", "config", "--json", "--geo-data", "shapes.parquet"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Resolved configuration"));
    assert!(stderr.contains("shapes.parquet"));

    let parsed = json_stdout(&output);
    assert_eq!(parsed["status"], "success");
}
