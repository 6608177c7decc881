//! CLI integration tests
//!
//! Exercises the surfaces that work without a server: help output,
//! configuration display, and local backup file validation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendwell(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendwell").unwrap();
    cmd.env("SPENDWELL_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    spendwell(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("backup"))
        .stdout(predicate::str::contains("org"))
        .stdout(predicate::str::contains("admin"));
}

#[test]
fn no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    spendwell(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("spendwell --help"));
}

#[test]
fn config_shows_paths_and_signed_out_state() {
    let dir = TempDir::new().unwrap();
    spendwell(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spendwell Configuration"))
        .stdout(predicate::str::contains("Not signed in."));
}

#[test]
fn backup_check_rejects_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("backup.json");
    std::fs::write(&file, "{}").unwrap();

    spendwell(&dir)
        .args(["backup", "check"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".etbackup extension"));
}

#[test]
fn backup_check_rejects_foreign_platform() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("foreign.etbackup");
    std::fs::write(
        &file,
        r#"{"version": "1.0.0", "platform": "someone_elses_app"}"#,
    )
    .unwrap();

    spendwell(&dir)
        .args(["backup", "check"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not created by this platform"));
}

#[test]
fn backup_check_accepts_valid_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("backup.etbackup");
    std::fs::write(
        &file,
        r#"{
            "version": "1.0.0",
            "platform": "expense_tracker_e2ee",
            "created_at": "2026-01-15T10:00:00",
            "account": {"name": "Checking"},
            "transactions": [{"encrypted_data": "a"}]
        }"#,
    )
    .unwrap();

    spendwell(&dir)
        .args(["backup", "check"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("expense_tracker_e2ee (ok)"))
        .stdout(predicate::str::contains("Transactions: 1"));
}

#[test]
fn backup_list_empty_directory() {
    let dir = TempDir::new().unwrap();
    spendwell(&dir)
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No downloaded backups"));
}

#[test]
fn login_then_config_then_logout() {
    let dir = TempDir::new().unwrap();
    let user = "7f6f9d6a-1a2b-4c3d-8e9f-001122334455";

    spendwell(&dir)
        .args(["login", "--token", "test-token", "--user", user])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as usr-7f6f9d6a"));

    spendwell(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as: usr-7f6f9d6a"));

    spendwell(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));

    spendwell(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));
}

#[test]
fn org_list_requires_sign_in() {
    let dir = TempDir::new().unwrap();
    spendwell(&dir)
        .args(["org", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn restore_requires_valid_mode() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("backup.etbackup");
    std::fs::write(
        &file,
        r#"{"version": "1.0.0", "platform": "expense_tracker_e2ee"}"#,
    )
    .unwrap();

    spendwell(&dir)
        .args([
            "backup",
            "restore",
            "2dd9f3a7-6f2a-4e0e-b5d2-08a8a3c3f001",
        ])
        .arg(&file)
        .args(["--mode", "overwrite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown restore mode"));
}
