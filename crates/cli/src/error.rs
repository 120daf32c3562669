// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the lq CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] lq_core::Error),

    #[error("no config file found\n  hint: pass --config, set LQ_CONFIG, or create lq.toml in the current directory")]
    ConfigNotFound,

    #[error("config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid rule '{rule}': {reason}\n  hint: rules look like: [and|or] FIELD OPERATOR [VALUE]")]
    InvalidRule { rule: String, reason: String },

    #[error("invalid choice: '{0}'\n  hint: use SET=VALUE, e.g. status=won")]
    InvalidChoice(String),

    #[error("saved filter not found: {0}")]
    SavedFilterNotFound(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("invalid records in {source_name}: {reason}\n  hint: expected a JSON array of objects or one JSON object per line")]
    InvalidRecords { source_name: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lq CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
