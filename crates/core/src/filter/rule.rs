// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter rules, connectors, patches and records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::condition::{Condition, RuleValue};
use super::operator::Operator;

/// Boolean connector joining a rule to the result of the rules before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "and",
            Connector::Or => "or",
        }
    }

    /// Combine the accumulated result with the next rule's result.
    ///
    /// Both operands are already evaluated; there is no short circuit.
    pub fn combine(&self, acc: bool, next: bool) -> bool {
        match self {
            Connector::And => acc & next,
            Connector::Or => acc | next,
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Connector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "and" | "&&" => Ok(Connector::And),
            "or" | "||" => Ok(Connector::Or),
            _ => Err(Error::InvalidConnector(s.to_string())),
        }
    }
}

/// A single field/operator/value test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRule {
    /// Opaque identifier, unique within its expression.
    pub id: String,
    /// Record attribute under test.
    pub field: String,
    pub condition: Condition,
    /// Ignored on the first rule of an expression.
    #[serde(default)]
    pub connector: Connector,
}

impl FilterRule {
    pub fn new(id: impl Into<String>, field: impl Into<String>, condition: Condition) -> Self {
        FilterRule {
            id: id.into(),
            field: field.into(),
            condition,
            connector: Connector::And,
        }
    }

    pub fn with_connector(mut self, connector: Connector) -> Self {
        self.connector = connector;
        self
    }
}

/// Partial update for a rule. Unset members leave the rule untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulePatch {
    pub field: Option<String>,
    pub operator: Option<Operator>,
    pub value: Option<RuleValue>,
    pub connector: Option<Connector>,
}

impl RulePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn connector(mut self, connector: Connector) -> Self {
        self.connector = Some(connector);
        self
    }
}

/// A record under test: attribute names mapped to JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON value; only objects qualify.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Record(map)),
            _ => None,
        }
    }

    /// The attribute value. JSON `null` counts as missing.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}
