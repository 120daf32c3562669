// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lq-core operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::FieldType;

/// All possible errors that can occur in lq-core operations.
///
/// Most variants are configuration errors: a rule that names a field or
/// operator the catalog does not allow. They are reported rather than
/// silently ignored so that a bad saved filter fails loudly.
#[derive(Debug, Error)]
pub enum Error {
    #[error("field catalog is empty\n  hint: define at least one field before adding rules")]
    EmptyCatalog,

    #[error("unknown field: '{0}'")]
    UnknownField(String),

    #[error(
        "invalid field type: '{0}'\n  hint: valid types are: text, number, date, select, boolean"
    )]
    UnknownFieldType(String),

    #[error("unknown operator: '{operator}'\n  hint: valid operators are: {valid}")]
    UnknownOperator { operator: String, valid: String },

    #[error("operator '{operator}' cannot be used on {field_type} field '{field}'\n  hint: valid operators are: {valid}")]
    OperatorMismatch {
        field: String,
        operator: String,
        field_type: FieldType,
        valid: String,
    },

    #[error("{value_kind} value cannot be used on {field_type} field '{field}'")]
    ValueMismatch {
        field: String,
        field_type: FieldType,
        value_kind: &'static str,
    },

    #[error("date range for '{field}' ends before it starts: {start}..{end}\n  hint: the end date must not be earlier than the start date")]
    ReversedRange {
        field: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("invalid connector: '{0}'\n  hint: valid connectors are: and, or")]
    InvalidConnector(String),

    #[error("unknown option '{value}' for '{set}'\n  hint: valid options are: {valid}")]
    UnknownOption {
        set: String,
        value: String,
        valid: String,
    },

    #[error("unknown picker: '{0}'")]
    UnknownPicker(String),

    #[error("unknown preset: '{0}'\n  hint: valid presets are: {valid}", valid = crate::range::QuickPreset::valid_labels())]
    UnknownPreset(String),

    #[error("invalid time: '{0}'\n  hint: use 24-hour HH:MM, e.g. 09:30")]
    InvalidTime(String),

    #[error("invalid date: '{0}'\n  hint: use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid month: '{0}'\n  hint: use YYYY-MM")]
    InvalidMonth(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
