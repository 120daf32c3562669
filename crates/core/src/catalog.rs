// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field catalogs and option sets.
//!
//! A [`FieldCatalog`] names the record attributes a filter may test and
//! declares each attribute's [`FieldType`], which in turn decides the
//! operators a rule on that field may use. Option lists (statuses,
//! priorities, assignees, ...) are [`OptionSet`]s injected by the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Declared type of a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free-form text.
    Text,
    /// Numeric value (amounts, scores).
    Number,
    /// Calendar date.
    Date,
    /// One value out of an option set.
    Select,
    /// True/false flag.
    Boolean,
}

impl FieldType {
    /// Returns the string representation used in config and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "select" => Ok(FieldType::Select),
            "boolean" | "bool" => Ok(FieldType::Boolean),
            _ => Err(Error::UnknownFieldType(s.to_string())),
        }
    }
}

/// A selectable value with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

impl OptionItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        OptionItem {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A named list of options, e.g. the lead statuses or the assignee roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    pub name: String,
    pub options: Vec<OptionItem>,
}

impl OptionSet {
    pub fn new(name: impl Into<String>, options: Vec<OptionItem>) -> Self {
        OptionSet {
            name: name.into(),
            options,
        }
    }

    /// Returns the option with the given value.
    pub fn get(&self, value: &str) -> Option<&OptionItem> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// Comma-separated option values for error hints.
    pub fn valid_values(&self) -> String {
        self.options
            .iter()
            .map(|o| o.value.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check that `value` is one of this set's options.
    pub fn check(&self, value: &str) -> Result<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(Error::UnknownOption {
                set: self.name.clone(),
                value: value.to_string(),
                valid: self.valid_values(),
            })
        }
    }
}

/// One entry of a field catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Record attribute name.
    pub value: String,
    /// Human-readable name.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Allowed values; only meaningful for select fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionItem>,
}

impl FieldDef {
    pub fn new(value: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        FieldDef {
            value: value.into(),
            label: label.into(),
            field_type,
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Vec<OptionItem>) -> Self {
        self.options = options;
        self
    }

    /// Check a chosen select value against this field's options.
    ///
    /// Fields without declared options accept any value.
    pub fn check_option(&self, value: &str) -> Result<()> {
        if self.options.is_empty() {
            return Ok(());
        }
        OptionSet::new(self.value.clone(), self.options.clone()).check(value)
    }
}

/// Ordered set of filterable fields. The first entry is the default field
/// for newly added rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    fields: Vec<FieldDef>,
}

impl FieldCatalog {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        FieldCatalog { fields }
    }

    pub fn get(&self, value: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.value == value)
    }

    /// Like [`get`](Self::get), but an unknown field is an error.
    pub fn require(&self, value: &str) -> Result<&FieldDef> {
        self.get(value)
            .ok_or_else(|| Error::UnknownField(value.to_string()))
    }

    pub fn first(&self) -> Option<&FieldDef> {
        self.fields.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
