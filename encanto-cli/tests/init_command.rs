//! Integration tests for `encanto init`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_init_creates_directory_and_database() {
    let env = TestEnv::new();

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created data directory"))
        .stdout(predicate::str::contains("Created database"));

    assert!(env.db_path().exists());
    assert!(!env.data_dir.join("config.yaml").exists());
}

#[test]
fn test_init_schema_is_usable() {
    let env = TestEnv::new();
    env.run(&["init"]);

    let conn = rusqlite::Connection::open(env.db_path()).unwrap();
    let version: String = conn
        .query_row(
            "SELECT value FROM metadata WHERE key = 'schema_version'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, "1");

    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
             AND name IN ('categories', 'brands', 'products', 'product_images')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 4);
}

#[test]
fn test_init_twice_requires_overwrite() {
    let env = TestEnv::new();
    env.run(&["init"]);
    env.add_category("toys");

    env.command()
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--overwrite"));

    env.command()
        .args(["init", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced database"));

    let categories = env.list_json(&["category", "list"]);
    assert!(categories.as_array().unwrap().is_empty());
}

#[test]
fn test_init_with_config() {
    let env = TestEnv::new();

    env.command()
        .args(["init", "--with-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(env.data_dir.join("config.yaml")).unwrap();
    assert!(content.contains("path_separator"));

    // The commented template parses as an empty configuration.
    env.command().args(["brand", "list"]).assert().success();
}

#[test]
fn test_init_dry_run_changes_nothing() {
    let env = TestEnv::new();

    env.command()
        .args(["init", "--dry-run", "--with-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry-run mode"))
        .stdout(predicate::str::contains("Create database"))
        .stdout(predicate::str::contains("Create configuration file"));

    assert!(!env.data_dir.exists());
}
