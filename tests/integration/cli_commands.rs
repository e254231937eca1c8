//! CLI tests against the built binary

use super::test_utils::{host_facts, write_json};
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn factprune(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_factprune"))
        .env("XDG_CONFIG_HOME", workspace.join("xdg-config"))
        .env_remove("FACTPRUNE_LOG")
        .arg("--workspace")
        .arg(workspace)
        .arg("--quiet")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_clean_prints_cleaned_json() {
    let temp = TempDir::new().unwrap();
    write_json(temp.path(), "facts.json", &host_facts(10, "1600000000"));

    let output = factprune(temp.path(), &["clean", "facts.json"]);
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let cleaned: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(cleaned.get("uptime_seconds").is_none());
    assert_eq!(cleaned["hostname"], "web01");
}

#[test]
fn test_clean_failure_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    write_json(
        temp.path(),
        "facts.json",
        &serde_json::json!({"date_time": "not-a-dict", "mounts": []}),
    );

    let output = factprune(temp.path(), &["clean", "facts.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Incompatible structure in date_time"), "{}", stderr);
}

#[test]
fn test_compare_exit_codes() {
    let temp = TempDir::new().unwrap();
    write_json(temp.path(), "a.json", &host_facts(10, "1600000000"));
    write_json(temp.path(), "b.json", &host_facts(99999, "1600090000"));
    let mut other = host_facts(10, "1600000000");
    other["hostname"] = Value::from("web02");
    write_json(temp.path(), "c.json", &other);

    let same = factprune(temp.path(), &["compare", "a.json", "b.json"]);
    assert_eq!(same.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&same.stdout).starts_with("identical"));

    let differ = factprune(temp.path(), &["compare", "a.json", "c.json", "--format", "json"]);
    assert_eq!(differ.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&differ.stdout).unwrap();
    assert_eq!(report["identical"], false);
    assert_ne!(report["left"], report["right"]);
}

#[test]
fn test_fingerprint_is_stable_across_runs() {
    let temp = TempDir::new().unwrap();
    write_json(temp.path(), "early.json", &host_facts(1, "1600000000"));
    write_json(temp.path(), "late.json", &host_facts(7200, "1600007200"));

    let early = factprune(temp.path(), &["fingerprint", "early.json"]);
    let late = factprune(temp.path(), &["fingerprint", "late.json"]);
    assert!(early.status.success());
    assert_eq!(early.stdout, late.stdout);
    assert_eq!(String::from_utf8_lossy(&early.stdout).trim().len(), 64);
}

#[test]
fn test_batch_mirrors_directory_layout() {
    let temp = TempDir::new().unwrap();
    write_json(temp.path(), "dumps/web01.json", &host_facts(1, "1"));
    write_json(temp.path(), "dumps/db/db01.json", &host_facts(2, "2"));
    std::fs::write(temp.path().join("dumps/README.txt"), "not facts").unwrap();

    let output = factprune(temp.path(), &["batch", "dumps", "--out-dir", "clean"]);
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Cleaned 2 fact file(s)"));

    let cleaned: Value = serde_json::from_str(
        &std::fs::read_to_string(temp.path().join("clean/db/db01.json")).unwrap(),
    )
    .unwrap();
    assert!(cleaned.get("date_time").is_some());
    assert!(cleaned["date_time"].get("epoch").is_none());
    assert!(temp.path().join("clean/web01.json").exists());
    assert!(!temp.path().join("clean/README.txt").exists());
}

#[test]
fn test_filters_lists_clean_facts() {
    let temp = TempDir::new().unwrap();
    let output = factprune(temp.path(), &["filters"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "clean_facts");
}

#[test]
fn test_bad_config_exits_with_error_code() {
    let temp = TempDir::new().unwrap();
    write_json(temp.path(), "a.json", &host_facts(10, "1600000000"));
    let config_file = temp.path().join("bad.toml");
    std::fs::write(&config_file, "[logging]\nformat = \"xml\"\n").unwrap();
    let config_arg = config_file.to_string_lossy().to_string();

    // Logging enabled: fails while installing the subscriber
    let output = Command::new(env!("CARGO_BIN_EXE_factprune"))
        .env("XDG_CONFIG_HOME", temp.path().join("xdg-config"))
        .env_remove("FACTPRUNE_LOG_FORMAT")
        .arg("--workspace")
        .arg(temp.path())
        .args(["--config", &config_arg, "compare", "a.json", "a.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid log format: xml"));

    // Logging disabled: fails while validating the loaded config
    let quiet = factprune(
        temp.path(),
        &["--config", &config_arg, "compare", "a.json", "a.json"],
    );
    assert_eq!(quiet.status.code(), Some(2));
    assert!(quiet.stdout.is_empty());

    let missing = temp.path().join("missing.toml").to_string_lossy().to_string();
    let output = factprune(temp.path(), &["--config", &missing, "compare", "a.json", "a.json"]);
    assert_eq!(output.status.code(), Some(2));
}
