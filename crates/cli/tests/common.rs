// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const CONFIG: &str = r#"
[[fields]]
value = "name"
label = "Name"
type = "text"

[[fields]]
value = "value"
label = "Value"
type = "number"

[[fields]]
value = "created"
label = "Created"
type = "date"

[[fields]]
value = "status"
label = "Status"
type = "select"
options = "status"

[[fields]]
value = "hot"
label = "Hot"
type = "boolean"

[options]
status = [
    { value = "new", label = "New" },
    { value = "qualified", label = "Qualified" },
    { value = "won", label = "Won" },
]
"#;

pub const LEADS: &str = r#"[
  {"id": "L-1", "name": "Acme Corp", "value": 5000, "created": "2024-03-01", "status": "new", "hot": true},
  {"id": "L-2", "name": "Globex", "value": 800, "created": "2024-03-15", "status": "qualified", "hot": false},
  {"id": "L-3", "name": "Initech", "value": 12000, "created": "2024-04-02", "status": "won", "hot": false},
  {"id": "L-4", "name": "Acme Labs", "value": 300, "created": "2024-03-31", "status": "new"}
]"#;

/// Command with NO_COLOR set and the config env var cleared.
pub fn lq() -> Command {
    let mut cmd = cargo_bin_cmd!("lq");
    cmd.env("NO_COLOR", "1").env_remove("LQ_CONFIG").env_remove("LQ_LOG");
    cmd
}

/// A temp project with `lq.toml` and `leads.json`.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("lq.toml"), CONFIG).unwrap();
        fs::write(dir.path().join("leads.json"), LEADS).unwrap();
        Project { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `lq` run inside the project directory.
    pub fn lq(&self) -> Command {
        let mut cmd = lq();
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Ids printed by `filter -o ids` with the given rules.
    pub fn filter_ids(&self, rules: &[&str]) -> Vec<String> {
        let mut cmd = self.lq();
        cmd.args(["filter", "--records", "leads.json", "-o", "ids"]);
        for rule in rules {
            cmd.args(["--rule", rule]);
        }
        let output = cmd.output().unwrap();
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(String::from)
            .collect()
    }
}
