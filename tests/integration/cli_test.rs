use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn task_cli(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("task-cli").unwrap();
    cmd.current_dir(dir)
        .env_remove("TASK_CLI_FILE")
        .env_remove("TASK_CLI_LOG");
    cmd
}

fn list_json(dir: &Path, filter: Option<&str>) -> Vec<Value> {
    let mut cmd = task_cli(dir);
    cmd.args(["--json", "list"]);
    if let Some(filter) = filter {
        cmd.arg(filter);
    }
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    parsed.as_array().unwrap().clone()
}

fn ids(tasks: &[Value]) -> Vec<u64> {
    tasks.iter().map(|t| t["id"].as_u64().unwrap()).collect()
}

#[test]
fn add_creates_tasks_json_in_current_dir() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully (ID: 1)"));

    let content = fs::read_to_string(dir.path().join("tasks.json")).unwrap();
    let tasks: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["description"], "Buy milk");
    assert_eq!(tasks[0]["status"], "todo");
    assert_eq!(tasks[0]["createdAt"], tasks[0]["updatedAt"]);
    assert!(content.ends_with("]\n"));
}

#[test]
fn ids_increment_across_invocations() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path()).args(["add", "First"]).assert().success();
    task_cli(dir.path())
        .args(["add", "Second"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 2)"));
}

#[test]
fn add_rejects_short_description() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path())
        .args(["add", "  ab "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));

    assert!(!dir.path().join("tasks.json").exists());
}

#[test]
fn update_changes_description() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path()).args(["add", "Buy milk"]).assert().success();
    task_cli(dir.path())
        .args(["update", "1", "Buy oat milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 1 updated successfully"));

    let tasks = list_json(dir.path(), None);
    assert_eq!(tasks[0]["description"], "Buy oat milk");
}

#[test]
fn update_unknown_id_fails_and_leaves_file() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path()).args(["add", "Buy milk"]).assert().success();
    let before = fs::read_to_string(dir.path().join("tasks.json")).unwrap();

    task_cli(dir.path())
        .args(["update", "5", "Something"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    let after = fs::read_to_string(dir.path().join("tasks.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn malformed_id_is_an_error() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path())
        .args(["delete", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid task id"));
}

#[test]
fn delete_removes_task() {
    let dir = TempDir::new().unwrap();
    for name in ["One", "Two", "Three"] {
        task_cli(dir.path()).args(["add", name]).assert().success();
    }

    task_cli(dir.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 2 deleted successfully"));

    assert_eq!(ids(&list_json(dir.path(), None)), vec![1, 3]);

    task_cli(dir.path()).args(["delete", "2"]).assert().code(1);
}

#[test]
fn mark_commands_change_status() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path()).args(["add", "One"]).assert().success();
    task_cli(dir.path()).args(["add", "Two"]).assert().success();

    task_cli(dir.path())
        .args(["mark-in-progress", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 1 marked as in_progress"));
    task_cli(dir.path())
        .args(["mark-done", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 2 marked as done"));

    let tasks = list_json(dir.path(), None);
    assert_eq!(tasks[0]["status"], "in_progress");
    assert_eq!(tasks[1]["status"], "done");
}

#[test]
fn list_filters_by_status() {
    let dir = TempDir::new().unwrap();
    for name in ["One", "Two", "Three"] {
        task_cli(dir.path()).args(["add", name]).assert().success();
    }
    task_cli(dir.path()).args(["mark-done", "1"]).assert().success();
    task_cli(dir.path()).args(["mark-in-progress", "3"]).assert().success();

    assert_eq!(ids(&list_json(dir.path(), Some("done"))), vec![1]);
    assert_eq!(ids(&list_json(dir.path(), Some("todo"))), vec![2]);
    assert_eq!(ids(&list_json(dir.path(), Some("in-progress"))), vec![3]);
    assert_eq!(ids(&list_json(dir.path(), None)), vec![1, 2, 3]);
}

#[test]
fn list_human_output() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));

    task_cli(dir.path()).args(["add", "Buy milk"]).assert().success();
    task_cli(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Buy milk (todo)"));
}

#[test]
fn list_unknown_filter_fails() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path())
        .args(["list", "finished"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid status"));
}

#[test]
fn corrupt_file_is_reported_and_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    fs::write(&path, "{ not json").unwrap();

    task_cli(dir.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("corrupt"));
    task_cli(dir.path()).args(["add", "Buy milk"]).assert().code(1);

    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn file_flag_and_env_select_storage() {
    let dir = TempDir::new().unwrap();
    let flag_path = dir.path().join("data").join("flag.json");
    let env_path = dir.path().join("env.json");

    task_cli(dir.path())
        .args(["--file", flag_path.to_str().unwrap(), "add", "From flag"])
        .assert()
        .success();
    assert!(flag_path.exists());

    task_cli(dir.path())
        .env("TASK_CLI_FILE", &env_path)
        .args(["add", "From env"])
        .assert()
        .success();
    assert!(env_path.exists());
    assert!(!dir.path().join("tasks.json").exists());
}

#[test]
fn json_output_for_add() {
    let dir = TempDir::new().unwrap();
    let output = task_cli(dir.path())
        .args(["add", "Buy milk", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let task: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(task["id"], 1);
    assert_eq!(task["status"], "todo");
    let created = task["createdAt"].as_str().unwrap();
    assert!(created.ends_with("+00:00"), "{created}");
}

#[test]
fn buy_milk_walkthrough() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path()).args(["add", "Buy milk"]).assert().success();
    task_cli(dir.path()).args(["mark-done", "1"]).assert().success();

    assert!(list_json(dir.path(), Some("todo")).is_empty());
    assert_eq!(ids(&list_json(dir.path(), Some("done"))), vec![1]);
}
