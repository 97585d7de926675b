//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("todos").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_serve_help_names_env_vars() {
    let mut cmd = Command::cargo_bin("todos").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AP_PORT"))
        .stdout(predicate::str::contains("DB_HOST"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_schema_prints_table() {
    let mut cmd = Command::cargo_bin("todos").unwrap();
    cmd.arg("schema");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE IF NOT EXISTS todos"));
}

#[test]
fn test_serve_fails_fast_on_bad_database_url() {
    let mut cmd = Command::cargo_bin("todos").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["serve", "--port", "0", "--database-url", "not a url"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"));
}
