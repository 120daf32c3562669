// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn no_rules_matches_everything() {
    let project = Project::new();
    assert_eq!(project.filter_ids(&[]), ["L-1", "L-2", "L-3", "L-4"]);
}

#[test]
fn text_contains_is_case_insensitive() {
    let project = Project::new();
    assert_eq!(project.filter_ids(&["name contains ACME"]), ["L-1", "L-4"]);
}

#[test]
fn number_rules() {
    let project = Project::new();
    assert_eq!(project.filter_ids(&["value greater_than 1000"]), ["L-1", "L-3"]);
    assert_eq!(project.filter_ids(&["value between 800..5000"]), ["L-1", "L-2"]);
}

#[test]
fn date_range_is_inclusive() {
    let project = Project::new();
    assert_eq!(
        project.filter_ids(&["created in_range 2024-03-01..2024-03-31"]),
        ["L-1", "L-2", "L-4"]
    );
    assert_eq!(project.filter_ids(&["created after 2024-03-31"]), ["L-3"]);
}

#[test]
fn select_and_boolean_rules() {
    let project = Project::new();
    assert_eq!(project.filter_ids(&["status in new,won"]), ["L-1", "L-3", "L-4"]);
    assert_eq!(project.filter_ids(&["hot is_true"]), ["L-1"]);
    // A missing boolean matches neither operator.
    assert_eq!(project.filter_ids(&["hot is_false"]), ["L-2", "L-3"]);
}

#[test]
fn connectors_fold_left() {
    let project = Project::new();
    // (acme AND value > 1000) OR won
    assert_eq!(
        project.filter_ids(&[
            "name contains acme",
            "and value greater_than 1000",
            "or status equals won",
        ]),
        ["L-1", "L-3"]
    );
}

#[test]
fn any_joins_rules_with_or() {
    let project = Project::new();
    project
        .lq()
        .args(["filter", "-r", "leads.json", "--any", "-o", "ids"])
        .args(["--rule", "hot is_true", "--rule", "status equals won"])
        .assert()
        .success()
        .stdout("L-1\nL-3\n");
}

#[test]
fn text_output_lists_fields() {
    let project = Project::new();
    project
        .lq()
        .args(["filter", "-r", "leads.json", "--rule", "name equals globex"])
        .assert()
        .success()
        .stdout(
            "[L-2] Name: Globex  Value: 800  Created: 2024-03-15  Status: qualified  Hot: false\n",
        );
}

#[test]
fn json_output_is_matching_records() {
    let project = Project::new();
    let output = project
        .lq()
        .args(["filter", "-r", "leads.json", "-o", "json", "--rule", "value less_than 500"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "L-4");
    assert_eq!(records[0]["name"], "Acme Labs");
}

#[test]
fn records_from_stdin_as_json_lines() {
    let project = Project::new();
    project
        .lq()
        .args(["filter", "-r", "-", "-o", "ids", "--rule", "value greater_equal 10"])
        .write_stdin("{\"value\": 5}\n{\"value\": 10}\n{\"value\": \"25\"}\n")
        .assert()
        .success()
        .stdout("2\n3\n");
}

#[test]
fn unknown_field_fails() {
    let project = Project::new();
    project
        .lq()
        .args(["filter", "-r", "leads.json", "--rule", "budget greater_than 5"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: unknown field: 'budget'"));
}

#[test]
fn operator_of_other_type_fails_with_hint() {
    let project = Project::new();
    project
        .lq()
        .args(["filter", "-r", "leads.json", "--rule", "hot contains yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used on boolean field 'hot'"))
        .stderr(predicate::str::contains("hint: valid operators are: is_true, is_false"));
}

#[test]
fn unknown_option_fails() {
    let project = Project::new();
    project
        .lq()
        .args(["filter", "-r", "leads.json", "--rule", "status equals lost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option 'lost'"));
}

#[test]
fn malformed_records_fail() {
    let project = Project::new();
    std::fs::write(project.path("bad.json"), "[1, 2]").unwrap();
    project
        .lq()
        .args(["filter", "-r", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid records in bad.json"));
}

#[test]
fn missing_config_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    lq().current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .args(["filter", "-r", "leads.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no config file found"));
}

#[test]
fn config_flag_and_env_are_honored() {
    let project = Project::new();
    let elsewhere = TempDir::new().unwrap();
    let config = project.path("lq.toml");
    let leads = project.path("leads.json");

    lq().current_dir(elsewhere.path())
        .arg("--config")
        .arg(&config)
        .args(["filter", "-o", "ids", "--rule", "hot is_true", "-r"])
        .arg(&leads)
        .assert()
        .success()
        .stdout("L-1\n");

    lq().current_dir(elsewhere.path())
        .env("LQ_CONFIG", &config)
        .args(["filter", "-o", "ids", "--rule", "status equals won", "-r"])
        .arg(&leads)
        .assert()
        .success()
        .stdout("L-3\n");
}
