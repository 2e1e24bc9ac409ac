#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn roster_cmd(temp: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("roster"));
    cmd.env("NO_COLOR", "1")
        .env_remove("ROSTER_DATA_DIR")
        .env_remove("ROSTER_PAGE_SIZE")
        .env_remove("ROSTER_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(temp.join("data"))
        .arg("--config")
        .arg(temp.join("roster.toml"));
    cmd
}

/// Adds a record and returns its key, read from the success message.
fn add(temp: &Path, firstname: &str, extra: &[&str]) -> String {
    let output = roster_cmd(temp)
        .args([
            "add",
            "--title",
            "Ms.",
            "--firstname",
            firstname,
            "--lastname",
            "Tester",
            "--birthday",
            "1991-04-02",
            "--nationality",
            "Thai",
            "--gender",
            "female",
            "--mobile-phone",
            "0812345678",
            "--expected-salary",
            "42000",
        ])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find('(').unwrap() + 1;
    let end = stdout.find(')').unwrap();
    stdout[start..end].to_string()
}

#[test]
fn test_add_list_edit_delete_workflow() {
    let temp = TempDir::new().unwrap();

    let ada = add(temp.path(), "Ada", &["--citizen-id", "1-2345-67890-12-3"]);
    let _bea = add(temp.path(), "Bea", &[]);

    assert!(temp.path().join("data").join("roster-state.json").exists());

    roster_cmd(temp.path())
        .args(["list", "--sort", "firstname", "--desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ms. Bea Tester"))
        .stdout(predicate::str::contains("Ms. Ada Tester"))
        .stdout(predicate::str::contains("Page 1/1 of 2 records"));

    roster_cmd(temp.path())
        .args(["edit", &ada, "--lastname", "Lovelace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record updated"));

    roster_cmd(temp.path())
        .args(["show", &ada])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("1-2345-67890-12-3"));

    roster_cmd(temp.path())
        .args(["delete", &ada])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record deleted"));

    roster_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada").not())
        .stdout(predicate::str::contains("of 1 records"));
}

#[test]
fn test_snapshot_is_json_with_persons() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Ada", &[]);

    let raw = fs::read_to_string(temp.path().join("data").join("roster-state.json")).unwrap();
    assert!(raw.contains("\"persons\""));
    assert!(raw.contains("\"firstname\":\"Ada\""));
    assert!(raw.contains("\"expectedSalary\""));
}

#[test]
fn test_key_prefix_is_expanded() {
    let temp = TempDir::new().unwrap();
    let key = add(temp.path(), "Ada", &[]);

    roster_cmd(temp.path())
        .args(["show", &key[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Tester"));
}

#[test]
fn test_bulk_delete_all() {
    let temp = TempDir::new().unwrap();
    for name in ["Ada", "Bea", "Cat"] {
        add(temp.path(), name, &[]);
    }

    roster_cmd(temp.path())
        .args(["bulk-delete", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 records selected"))
        .stdout(predicate::str::contains("3 records deleted"));

    roster_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn test_bulk_delete_selected_keys() {
    let temp = TempDir::new().unwrap();
    let ada = add(temp.path(), "Ada", &[]);
    let bea = add(temp.path(), "Bea", &[]);
    add(temp.path(), "Cat", &[]);

    roster_cmd(temp.path())
        .args(["bulk-delete", &ada, &bea])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records deleted"));

    roster_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cat"))
        .stdout(predicate::str::contains("of 1 records"));
}

#[test]
fn test_pagination_past_end_shows_last_page() {
    let temp = TempDir::new().unwrap();
    for name in ["Ada", "Bea", "Cat"] {
        add(temp.path(), name, &[]);
    }

    roster_cmd(temp.path())
        .args(["list", "--sort", "firstname", "--page-size", "2", "--page", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cat"))
        .stdout(predicate::str::contains("Page 2/2 of 3 records"));
}

#[test]
fn test_unknown_key_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Ada", &[]);

    roster_cmd(temp.path())
        .args(["delete", "no-such-key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
}

#[test]
fn test_invalid_salary_fails() {
    let temp = TempDir::new().unwrap();

    roster_cmd(temp.path())
        .args([
            "add",
            "--title",
            "Mr.",
            "--firstname",
            "Neg",
            "--lastname",
            "Salary",
            "--birthday",
            "1990-01-01",
            "--nationality",
            "Thai",
            "--gender",
            "male",
            "--mobile-phone",
            "0800000000",
            "--expected-salary=-5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_edit_without_fields_fails() {
    let temp = TempDir::new().unwrap();
    let key = add(temp.path(), "Ada", &[]);

    roster_cmd(temp.path())
        .args(["edit", &key])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_corrupt_snapshot_starts_empty() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("roster-state.json"), "{ not json").unwrap();

    roster_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn test_platform_config_file_is_read_without_config_flag() {
    let temp = TempDir::new().unwrap();
    let config_home = temp.path().join("xdg-config");
    fs::create_dir_all(config_home.join("roster")).unwrap();
    fs::write(config_home.join("roster").join("roster.toml"), "page_size = 1\n").unwrap();

    let run = |args: &[&str]| {
        let mut cmd = Command::new(cargo_bin("roster"));
        cmd.env("NO_COLOR", "1")
            .env("HOME", temp.path())
            .env("XDG_CONFIG_HOME", &config_home)
            .env_remove("ROSTER_DATA_DIR")
            .env_remove("ROSTER_PAGE_SIZE")
            .env_remove("ROSTER_LOG_LEVEL")
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(temp.path().join("data"))
            .args(args);
        cmd
    };

    add(temp.path(), "Ada", &[]);
    add(temp.path(), "Bea", &[]);

    run(&["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1/2 of 2 records"));
}
