#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn todo_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("todo"));
    cmd.arg("--data-dir")
        .arg(data.path())
        .env_remove("TODO_DATA_DIR")
        .env_remove("TODO_UNDO_WINDOW_MS")
        .env_remove("TODO_LOG_LEVEL");
    cmd
}

#[test]
fn test_add_list_toggle_workflow() {
    let data = TempDir::new().unwrap();

    todo_cmd(&data)
        .args(["add", "Buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added: Buy milk"));

    todo_cmd(&data).args(["add", "Walk dog"]).assert().success();

    todo_cmd(&data)
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo completed: Buy milk"));

    todo_cmd(&data)
        .args(["list", "--filter", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. [ ] Walk dog"))
        .stdout(predicate::str::contains("Buy milk").not())
        .stdout(predicate::str::contains("1 task left"));

    let raw = fs::read_to_string(data.path().join("todos.json")).unwrap();
    assert!(raw.contains("\"list\""));
    assert!(raw.contains("Walk dog"));
}

#[test]
fn test_edit_moves_todo_to_end() {
    let data = TempDir::new().unwrap();
    todo_cmd(&data).args(["add", "first"]).assert().success();
    todo_cmd(&data).args(["add", "second"]).assert().success();

    todo_cmd(&data)
        .args(["edit", "1", "first", "again"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first -> first again"));

    todo_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)1\. \[ \] second.*2\. \[ \] first again").unwrap());
}

#[test]
fn test_delete_and_clear() {
    let data = TempDir::new().unwrap();
    for text in ["a", "b", "c"] {
        todo_cmd(&data).args(["add", text]).assert().success();
    }

    todo_cmd(&data)
        .args(["rm", "1-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo deleted: a"))
        .stdout(predicate::str::contains("Todo deleted: b"));

    todo_cmd(&data)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 todo"));

    todo_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos."));
}

#[test]
fn test_out_of_range_position_fails() {
    let data = TempDir::new().unwrap();
    todo_cmd(&data)
        .args(["toggle", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No todo at position 3"));
}

#[test]
fn test_corrupt_storage_starts_empty() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("todos.json"), "not json at all").unwrap();

    todo_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos."));
}

#[test]
fn test_shell_undo_restores_deleted_todo() {
    let data = TempDir::new().unwrap();

    todo_cmd(&data)
        .write_stdin("add X\ndelete 1\nundo\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored: X"));

    todo_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] X"));
}

#[test]
fn test_shell_undo_after_expiry_does_nothing() {
    let data = TempDir::new().unwrap();

    todo_cmd(&data)
        .env("TODO_UNDO_WINDOW_MS", "0")
        .arg("shell")
        .write_stdin("add X\ndelete 1\nundo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to undo"));

    todo_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos."));
}

#[test]
fn test_shell_filter_is_not_persisted() {
    let data = TempDir::new().unwrap();
    todo_cmd(&data)
        .write_stdin("add a\nadd b\ntoggle 1\nfilter completed\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[completed]"));

    todo_cmd(&data)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[all]"));
}

#[test]
fn test_writes_log_file() {
    let data = TempDir::new().unwrap();
    todo_cmd(&data)
        .args(["--log-level", "debug", "add", "logged"])
        .assert()
        .success();

    let logs = data.path().join("logs");
    assert!(logs.is_dir());
    assert!(fs::read_dir(&logs).unwrap().next().is_some());
}

#[test]
fn test_range_past_end_fails_fast() {
    let data = TempDir::new().unwrap();
    for text in ["a", "b", "c"] {
        todo_cmd(&data).args(["add", text]).assert().success();
    }

    todo_cmd(&data)
        .args(["delete", "1-300000000"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No todo at position 300000000 (3 total)"));

    todo_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3. [ ] c"));
}
