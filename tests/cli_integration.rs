use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn todoz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.env("TODOZ_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_empty_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    todoz(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos yet"));
}

#[test]
fn test_add_toggle_filter_flow() {
    let temp_dir = tempfile::tempdir().unwrap();

    todoz(temp_dir.path())
        .args(["add", "Buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added (1): Buy milk"));
    todoz(temp_dir.path())
        .args(["add", "Walk dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added (2): Walk dog"));

    todoz(temp_dir.path())
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo completed (1)"));

    todoz(temp_dir.path())
        .args(["list", "--filter", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Walk dog"))
        .stdout(predicate::str::contains("Buy milk").not())
        .stdout(predicate::str::contains("1 item left"));

    todoz(temp_dir.path())
        .args(["ls", "-f", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]"))
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Walk dog").not());

    // Unknown filter names behave like `all`
    todoz(temp_dir.path())
        .args(["ls", "-f", "someday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Walk dog"));
}

#[test]
fn test_persisted_blob_format() {
    let temp_dir = tempfile::tempdir().unwrap();

    todoz(temp_dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success();

    let blob = fs::read_to_string(temp_dir.path().join("todos.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let first = &value[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["text"], "Buy milk");
    assert_eq!(first["completed"], false);
    assert!(first["createdAt"].is_string());
}

#[test]
fn test_corrupt_data_lists_as_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("todos.json"), "not json").unwrap();

    todoz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos yet"));

    // Adding after corruption starts a fresh list
    todoz(temp_dir.path())
        .args(["add", "fresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added (1): fresh"));
}

#[test]
fn test_browser_blob_loads() {
    let temp_dir = tempfile::tempdir().unwrap();
    let blob = r#"[{"id":1718000000000,"text":"From the browser","completed":false,"createdAt":"2024-06-10T06:13:20.000Z"}]"#;
    fs::write(temp_dir.path().join("todos.json"), blob).unwrap();

    todoz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("From the browser"));

    todoz(temp_dir.path())
        .args(["add", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added (1718000000001)"));
}

#[test]
fn test_edit_delete_and_clear() {
    let temp_dir = tempfile::tempdir().unwrap();

    for text in ["one", "two", "three"] {
        todoz(temp_dir.path()).args(["add", text]).assert().success();
    }

    todoz(temp_dir.path())
        .args(["edit", "2", "  second  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo updated (2): second"));

    todoz(temp_dir.path())
        .args(["rm", "1", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo deleted (1): one"))
        .stdout(predicate::str::contains("No todo with id 9"));

    todoz(temp_dir.path()).args(["done", "3"]).assert().success();
    todoz(temp_dir.path())
        .arg("clear-completed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 completed todo"));
    todoz(temp_dir.path())
        .arg("cc")
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed todos to clear"));

    todoz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("second"))
        .stdout(predicate::str::contains("three").not());

    todoz(temp_dir.path())
        .arg("clear-all")
        .assert()
        .success()
        .stdout(predicate::str::contains("All todos removed"));
    assert!(!temp_dir.path().join("todos.json").exists());
}

#[test]
fn test_blank_add_is_a_no_op() {
    let temp_dir = tempfile::tempdir().unwrap();

    todoz(temp_dir.path())
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to add"));
    assert!(!temp_dir.path().join("todos.json").exists());
}

#[test]
fn test_config_default_filter() {
    let temp_dir = tempfile::tempdir().unwrap();

    todoz(temp_dir.path()).args(["add", "open"]).assert().success();
    todoz(temp_dir.path()).args(["add", "finished"]).assert().success();
    todoz(temp_dir.path()).args(["toggle", "2"]).assert().success();

    todoz(temp_dir.path())
        .args(["config", "default-filter", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-filter set to completed"));

    todoz(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("finished"))
        .stdout(predicate::str::contains("open").not());

    todoz(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("add-delay-ms = 0"))
        .stdout(predicate::str::contains("default-filter = completed"));
}

#[test]
fn test_invalid_id_is_a_usage_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    todoz(temp_dir.path())
        .args(["toggle", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid todo id"));
}

#[test]
fn test_corrupt_config_can_be_repaired() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("config.json"), "{oops").unwrap();

    todoz(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is unreadable"))
        .stdout(predicate::str::contains("default-filter = all"));

    todoz(temp_dir.path())
        .args(["config", "default-filter", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-filter set to active"));

    let saved = fs::read_to_string(temp_dir.path().join("config.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value["default_filter"], "active");

    todoz(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("unreadable").not())
        .stdout(predicate::str::contains("default-filter = active"));
}

#[test]
fn test_add_with_delay() {
    let temp_dir = tempfile::tempdir().unwrap();

    todoz(temp_dir.path())
        .args(["config", "add-delay-ms", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add-delay-ms set to 20"));

    todoz(temp_dir.path())
        .args(["add", "slow", "one"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added (1): slow one"));

    todoz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("slow one"));
}
