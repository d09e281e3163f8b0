//! Integration tests for the shop-catalog CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn shop_catalog() -> Command {
    let mut cmd = Command::cargo_bin("shop-catalog").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("SHOP_CATALOG_CONFIG");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    shop_catalog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("In-memory product catalog"))
        .stdout(predicate::str::contains("process"));
}

#[test]
fn test_cli_version() {
    shop_catalog()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shop-catalog"));
}

#[test]
fn test_invalid_subcommand() {
    shop_catalog()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// The demo sorts three ways and then runs both processors
#[test]
fn test_demo_output() {
    let assert = shop_catalog().arg("demo").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let by_price = stdout
        .split("After sorting by unit price:")
        .nth(1)
        .and_then(|rest| rest.split("After sorting by arrival date:").next())
        .expect("price section missing");
    let lines: Vec<&str> = by_price.lines().filter(|l| l.starts_with("Item ")).collect();
    assert_eq!(
        lines,
        [
            "Item ItemB - Unit Price: 1.75, Arrival Date: 2024-01-02",
            "Item ItemA - Unit Price: 2.5, Arrival Date: 2024-01-01",
            "Item ItemC - Unit Price: 4.0, Arrival Date: 2024-01-03",
        ]
    );

    assert!(stdout.contains("Before sorting:"));
    assert!(stdout.contains("Parallel processing time:"));
    assert!(stdout.contains("Sequential processing time:"));
    assert!(stdout.contains("outputs match"));
}

#[test]
fn test_demo_is_the_default_command() {
    shop_catalog()
        .assert()
        .success()
        .stdout(predicate::str::contains("After sorting by product name:"));
}

#[test]
fn test_sort_json() {
    let assert = shop_catalog()
        .args(["sort", "--by", "price", "--format", "json"])
        .assert()
        .success();

    let entries: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let names: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["ItemB", "ItemA", "ItemC"]);
}

#[test]
fn test_process_twelve_entries_json() {
    let assert = shop_catalog()
        .args([
            "process",
            "--count",
            "12",
            "--leaf-threshold",
            "5",
            "--workers",
            "4",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["outputs_match"], true);
    assert_eq!(summary["runs"].as_array().unwrap().len(), 2);
    assert_eq!(summary["runs"][0]["entries"], 12);
    assert_eq!(
        summary["runs"][0]["strategy"],
        "parallel (4 workers, leaf threshold 5)"
    );
}

#[test]
fn test_process_empty_catalog() {
    shop_catalog()
        .args(["process", "--count", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("outputs match"));
}

#[test]
fn test_process_rejects_zero_leaf_threshold() {
    shop_catalog()
        .args(["process", "--leaf-threshold", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--leaf-threshold must be at least 1"));
}

/// Description sizes are reported as log events, not on stdout
#[test]
fn test_sequential_description_size_events() {
    shop_catalog()
        .args(["-v", "process", "--mode", "sequential"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Item ItemA - Description Size: 1"))
        .stdout(predicate::str::contains("Description Size").not());
}

#[test]
fn test_quiet_suppresses_logs() {
    shop_catalog()
        .args(["-q", "process", "--mode", "sequential"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_config_show_with_custom_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("catalog.yaml");
    fs::write(&config_path, "parallel:\n  leaf_threshold: 3\n").unwrap();

    let assert = shop_catalog()
        .current_dir(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["config", "show", "--format", "json"])
        .assert()
        .success();

    let config: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(config["parallel"]["leaf_threshold"], 3);
    assert_eq!(config["parallel"]["thread_percentage"], 100);
}

#[test]
fn test_repository_config_and_env_override() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("shop-catalog.toml"),
        "[parallel]\nleaf_threshold = 4\nmax_threads = 2\n",
    )
    .unwrap();

    let assert = shop_catalog()
        .current_dir(temp_dir.path())
        .env("SHOP_CATALOG_PARALLEL__LEAF_THRESHOLD", "9")
        .args(["config", "show", "--format", "json"])
        .assert()
        .success();

    let config: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(config["parallel"]["leaf_threshold"], 9);
    assert_eq!(config["parallel"]["max_threads"], 2);
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    shop_catalog()
        .current_dir(temp_dir.path())
        .args(["--config", "missing.toml", "config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_config_value_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[parallel]\nthread_percentage = 0\n").unwrap();

    shop_catalog()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("thread_percentage"));
}
