// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed operator/value pairs.
//!
//! A [`Condition`] is tagged by field type, so a rule can never hold a
//! number operator with a text value. Patches arrive as untyped
//! [`RuleValue`]s and are checked against the condition's type.

use serde::{Deserialize, Serialize};

use crate::catalog::FieldType;
use crate::range::DateTimeRange;

use super::operator::{BooleanOp, DateOp, NumberOp, Operator, SelectOp, TextOp};

/// Numeric rule value. `to` is only read by `between`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
}

impl NumberValue {
    pub fn single(value: f64) -> Self {
        NumberValue {
            value: Some(value),
            to: None,
        }
    }

    pub fn between(from: f64, to: f64) -> Self {
        NumberValue {
            value: Some(from),
            to: Some(to),
        }
    }
}

/// Operator and value for one rule, tagged by field type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    Text {
        op: TextOp,
        #[serde(default)]
        value: String,
    },
    Number {
        op: NumberOp,
        #[serde(default)]
        value: NumberValue,
    },
    Date {
        op: DateOp,
        #[serde(default)]
        value: DateTimeRange,
    },
    Select {
        op: SelectOp,
        #[serde(default)]
        value: Vec<String>,
    },
    Boolean {
        op: BooleanOp,
    },
}

/// An untyped value as supplied by a rule patch.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleValue {
    Text(String),
    Number(NumberValue),
    Dates(DateTimeRange),
    Options(Vec<String>),
}

impl RuleValue {
    /// Short name of the value's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RuleValue::Text(_) => "text",
            RuleValue::Number(_) => "number",
            RuleValue::Dates(_) => "date range",
            RuleValue::Options(_) => "option list",
        }
    }
}

impl Condition {
    /// The default operator and empty value for a field type.
    pub fn empty(field_type: FieldType) -> Self {
        Self::with_empty_value(Operator::default_for(field_type))
    }

    fn with_empty_value(op: Operator) -> Self {
        match op {
            Operator::Text(op) => Condition::Text {
                op,
                value: String::new(),
            },
            Operator::Number(op) => Condition::Number {
                op,
                value: NumberValue::default(),
            },
            Operator::Date(op) => Condition::Date {
                op,
                value: DateTimeRange::default(),
            },
            Operator::Select(op) => Condition::Select {
                op,
                value: Vec::new(),
            },
            Operator::Boolean(op) => Condition::Boolean { op },
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.operator().field_type()
    }

    pub fn operator(&self) -> Operator {
        match self {
            Condition::Text { op, .. } => Operator::Text(*op),
            Condition::Number { op, .. } => Operator::Number(*op),
            Condition::Date { op, .. } => Operator::Date(*op),
            Condition::Select { op, .. } => Operator::Select(*op),
            Condition::Boolean { op } => Operator::Boolean(*op),
        }
    }

    /// True when the condition carries a usable comparison value.
    pub fn has_value(&self) -> bool {
        match self {
            Condition::Text { value, .. } => !value.is_empty(),
            Condition::Number { op, value } => match op {
                NumberOp::Between => value.value.is_some() && value.to.is_some(),
                _ => value.value.is_some(),
            },
            Condition::Date { value, .. } => value.start_date.is_some(),
            Condition::Select { value, .. } => !value.is_empty(),
            Condition::Boolean { .. } => true,
        }
    }

    /// A copy with a different operator of the same field type, keeping the value.
    ///
    /// Returns `None` when `op` belongs to another field type.
    pub fn with_operator(&self, op: Operator) -> Option<Condition> {
        let next = match (self, op) {
            (Condition::Text { value, .. }, Operator::Text(op)) => Condition::Text {
                op,
                value: value.clone(),
            },
            (Condition::Number { value, .. }, Operator::Number(op)) => Condition::Number {
                op,
                value: *value,
            },
            (Condition::Date { value, .. }, Operator::Date(op)) => Condition::Date {
                op,
                value: value.clone(),
            },
            (Condition::Select { value, .. }, Operator::Select(op)) => Condition::Select {
                op,
                value: value.clone(),
            },
            (Condition::Boolean { .. }, Operator::Boolean(op)) => Condition::Boolean { op },
            _ => return None,
        };
        Some(next)
    }

    /// A copy with a new value, keeping the operator.
    ///
    /// Returns `None` when the value's shape does not fit the field type.
    /// A date range given end first is stored start first.
    pub fn with_value(&self, value: RuleValue) -> Option<Condition> {
        let next = match (self, value) {
            (Condition::Text { op, .. }, RuleValue::Text(value)) => {
                Condition::Text { op: *op, value }
            }
            (Condition::Number { op, .. }, RuleValue::Number(value)) => {
                Condition::Number { op: *op, value }
            }
            (Condition::Date { op, .. }, RuleValue::Dates(value)) => {
                Condition::Date {
                    op: *op,
                    value: value.normalized(),
                }
            }
            (Condition::Select { op, .. }, RuleValue::Options(value)) => {
                Condition::Select { op: *op, value }
            }
            _ => return None,
        };
        Some(next)
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
