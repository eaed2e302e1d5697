use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phonebook REST API server and record tools"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("port"))
        .stdout(predicate::str::contains("in-memory"));
}

#[test]
fn test_cli_list_requires_database_url() {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env_remove("DATABASE_URL")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL environment variable must be set"));
}

#[test]
fn test_cli_add_validates_before_connecting() {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env_remove("DATABASE_URL")
        .args(["add", "", "040-1234556"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing name and/or number fields"));
}
