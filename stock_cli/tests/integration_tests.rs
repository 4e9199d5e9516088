//! Integration tests for the stockr binary.
//!
//! These tests verify end-to-end behavior including:
//! - Add/remove/get workflow against the inventory file
//! - Report and low-stock output
//! - Configuration overrides
//! - Import of untyped adjustments

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from the user's config directory
fn cli(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stockr"));
    cmd.env("XDG_CONFIG_HOME", dir.join("config"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn inventory_path(dir: &TempDir) -> PathBuf {
    dir.path().join("inventory.json")
}

fn read_inventory(path: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(path).expect("Failed to read inventory");
    serde_json::from_str(&contents).expect("Inventory is not valid JSON")
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Track item quantities in a JSON inventory file",
        ));
}

#[test]
fn test_add_creates_inventory_file() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);

    cli(temp_dir.path())
        .args(["add", "apple", "10", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("apple -> 10\n")
        .stderr(predicate::str::contains("not found"));

    assert_eq!(read_inventory(&path), serde_json::json!({ "apple": 10 }));
}

#[test]
fn test_add_negative_quantity() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);

    cli(temp_dir.path())
        .args(["add", "banana", "-2", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("banana -> -2\n");

    assert_eq!(read_inventory(&path), serde_json::json!({ "banana": -2 }));
}

#[test]
fn test_remove_and_prune() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);
    fs::write(&path, r#"{"apple": 10, "pear": 3}"#).unwrap();

    cli(temp_dir.path())
        .args(["remove", "apple", "3", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("apple -> 7\n");

    cli(temp_dir.path())
        .args(["remove", "pear", "5", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("pear -> 0\n");

    assert_eq!(read_inventory(&path), serde_json::json!({ "apple": 7 }));
}

#[test]
fn test_remove_missing_item_is_not_fatal() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);
    fs::write(&path, r#"{"apple": 1}"#).unwrap();

    cli(temp_dir.path())
        .args(["remove", "orange", "1", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains(
            "Item 'orange' not in inventory. Cannot remove.",
        ));

    assert_eq!(read_inventory(&path), serde_json::json!({ "apple": 1 }));
}

#[test]
fn test_get_quantity() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);
    fs::write(&path, r#"{"apple": 4}"#).unwrap();

    cli(temp_dir.path())
        .args(["get", "apple", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("4\n");

    cli(temp_dir.path())
        .args(["get", "kiwi", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_report_is_default_command() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);
    fs::write(&path, r#"{"pear": 3, "apple": 10}"#).unwrap();

    cli(temp_dir.path())
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout("Items Report\npear -> 3\napple -> 10\n");
}

#[test]
fn test_low_items_threshold() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);
    fs::write(&path, r#"{"apple": 2, "banana": 10, "fig": 7}"#).unwrap();

    cli(temp_dir.path())
        .args(["low", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("apple\n");

    cli(temp_dir.path())
        .args(["low", "--threshold", "8", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("apple\nfig\n");
}

#[test]
fn test_config_sets_file_and_threshold() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("data/stock.json");
    let config_path = temp_dir.path().join("stockr.toml");
    fs::write(
        &config_path,
        format!(
            "[storage]\ninventory_file = {:?}\n\n[alerts]\nlow_stock_threshold = 11\n",
            path.to_string_lossy()
        ),
    )
    .unwrap();

    cli(temp_dir.path())
        .args(["add", "banana", "10", "--config"])
        .arg(&config_path)
        .assert()
        .success();
    assert!(path.exists());

    cli(temp_dir.path())
        .args(["low", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout("banana\n");
}

#[test]
fn test_default_config_location_is_used() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);
    fs::write(&path, r#"{"apple": 6}"#).unwrap();

    let config_dir = temp_dir.path().join("config/stockr");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[alerts]\nlow_stock_threshold = 7\n",
    )
    .unwrap();

    cli(temp_dir.path())
        .args(["low", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("apple\n");
}

#[test]
fn test_import_adjustments() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);
    let import_path = temp_dir.path().join("import.json");
    fs::write(
        &import_path,
        r#"[
            {"item": "apple", "quantity": 10},
            {"item": 123, "quantity": "ten"},
            {"item": "", "quantity": 4},
            {"item": "apple", "quantity": -3}
        ]"#,
    )
    .unwrap();

    cli(temp_dir.path())
        .arg("import")
        .arg(&import_path)
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied 2 of 4 adjustments"))
        .stderr(predicate::str::contains("Invalid type for item or quantity"));

    assert_eq!(read_inventory(&path), serde_json::json!({ "apple": 7 }));
}

#[test]
fn test_show_log_lists_additions() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);

    cli(temp_dir.path())
        .args(["add", "apple", "10", "--show-log", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(": Added 10 of apple"));
}

#[test]
fn test_demo_session() {
    let temp_dir = setup_test_dir();
    let path = inventory_path(&temp_dir);

    cli(temp_dir.path())
        .args(["demo", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "Apple stock: 7\n\
             Low items: [\"banana\"]\n\
             Items Report\n\
             apple -> 7\n\
             banana -> -2\n",
        );

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{\n    \"apple\": 7,\n    \"banana\": -2\n}\n");
}
