// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn fields_text_lists_operators_and_options() {
    let project = Project::new();
    project
        .lq()
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name            text     Name\n    operators: contains, not_contains, equals",
        ))
        .stdout(predicate::str::contains(
            "options: new (New), qualified (Qualified), won (Won)",
        ))
        .stdout(predicate::str::contains("operators: is_true, is_false"));
}

#[test]
fn fields_json() {
    let project = Project::new();
    let output = project
        .lq()
        .args(["fields", "-o", "json"])
        .output()
        .unwrap();
    let fields: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(fields.as_array().unwrap().len(), 5);
    assert_eq!(fields[0]["type"], "text");
    assert_eq!(fields[0]["default_operator"], "contains");
    assert!(fields[0].get("options").is_none());
    assert_eq!(fields[3]["options"][2]["value"], "won");
    assert_eq!(fields[2]["operators"][5], "in_range");
}

#[test]
fn user_config_dir_is_searched() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("config").join("lq");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("lq.toml"), CONFIG).unwrap();
    let cwd = TempDir::new().unwrap();

    lq().current_dir(cwd.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .args(["fields", "-o", "ids"])
        .assert()
        .success()
        .stdout("name\nvalue\ncreated\nstatus\nhot\n");
}

#[test]
fn invalid_config_names_file() {
    let project = Project::new();
    std::fs::write(
        project.path("lq.toml"),
        "[[fields]]\nvalue = \"amount\"\ntype = \"currency\"\n",
    )
    .unwrap();
    project
        .lq()
        .arg("fields")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"))
        .stderr(predicate::str::contains("lq.toml"));
}

#[test]
fn select_without_option_set_fails() {
    let project = Project::new();
    std::fs::write(
        project.path("lq.toml"),
        "[[fields]]\nvalue = \"stage\"\ntype = \"select\"\noptions = \"stages\"\n",
    )
    .unwrap();
    project
        .lq()
        .arg("fields")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option set 'stages'"));
}

#[test]
fn options_text_lists_sets() {
    let project = Project::new();
    project
        .lq()
        .arg("options")
        .assert()
        .success()
        .stdout("status\n    new           New\n    qualified     Qualified\n    won           Won\n");
}

#[test]
fn options_choice_is_checked() {
    let project = Project::new();
    project
        .lq()
        .args(["options", "--choose", "status=won", "-o", "ids"])
        .assert()
        .success()
        .stdout("status=won\n");

    let output = project
        .lq()
        .args(["options", "--choose", "status=won", "-o", "json"])
        .output()
        .unwrap();
    let sets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sets[0]["name"], "status");
    assert_eq!(sets[0]["selected"], "won");
}

#[test]
fn options_unknown_choice_fails() {
    let project = Project::new();
    project
        .lq()
        .args(["options", "--choose", "status=lost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option 'lost' for 'status'"))
        .stderr(predicate::str::contains("valid options are: new, qualified, won"));
}

#[test]
fn completion_bash() {
    lq().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_lq"));
}
