// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of conditions against record values.
//!
//! Record values are JSON and are coerced by the condition's field type:
//! numbers may arrive as numeric strings, dates as `YYYY-MM-DD` or RFC 3339
//! strings, booleans as `"true"`/`"false"`. A value that cannot be coerced
//! behaves like a missing one.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use super::condition::{Condition, NumberValue};
use super::operator::{BooleanOp, DateOp, NumberOp, SelectOp, TextOp};
use super::rule::{FilterRule, Record};
use crate::range::DateTimeRange;

impl FilterRule {
    /// Evaluate this rule against a record.
    pub fn matches(&self, record: &Record) -> bool {
        self.condition.matches(record.get(&self.field))
    }
}

impl Condition {
    /// Evaluate this condition against a single record value.
    ///
    /// Comparison operators never match a missing value or an unset rule
    /// value; `is_empty`/`is_not_empty` are the only text operators that
    /// look at missing values.
    pub fn matches(&self, actual: Option<&Value>) -> bool {
        match self {
            Condition::Text { op, value } => match_text(*op, value, actual),
            Condition::Number { op, value } => match_number(*op, value, actual),
            Condition::Date { op, value } => match_date(*op, value, actual),
            Condition::Select { op, value } => match_select(*op, value, actual),
            Condition::Boolean { op } => match_boolean(*op, actual),
        }
    }
}

fn match_text(op: TextOp, expected: &str, actual: Option<&Value>) -> bool {
    let actual = actual.and_then(as_text);
    match op {
        TextOp::IsEmpty => is_blank(actual.as_deref()),
        TextOp::IsNotEmpty => !is_blank(actual.as_deref()),
        TextOp::Contains => compare_text(actual, expected, |a, e| a.contains(e)),
        TextOp::NotContains => compare_text(actual, expected, |a, e| !a.contains(e)),
        TextOp::Equals => compare_text(actual, expected, |a, e| a == e),
        TextOp::NotEquals => compare_text(actual, expected, |a, e| a != e),
        TextOp::StartsWith => compare_text(actual, expected, |a, e| a.starts_with(e)),
        TextOp::EndsWith => compare_text(actual, expected, |a, e| a.ends_with(e)),
    }
}

fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |s| s.trim().is_empty())
}

fn compare_text<F>(actual: Option<String>, expected: &str, cmp: F) -> bool
where
    F: Fn(&str, &str) -> bool,
{
    if expected.is_empty() {
        return false;
    }
    actual.is_some_and(|a| cmp(&a.to_lowercase(), &expected.to_lowercase()))
}

fn match_number(op: NumberOp, expected: &NumberValue, actual: Option<&Value>) -> bool {
    let (Some(actual), Some(value)) = (actual.and_then(as_number), expected.value) else {
        return false;
    };
    match op {
        NumberOp::Equals => actual == value,
        NumberOp::NotEquals => actual != value,
        NumberOp::GreaterThan => actual > value,
        NumberOp::LessThan => actual < value,
        NumberOp::GreaterEqual => actual >= value,
        NumberOp::LessEqual => actual <= value,
        NumberOp::Between => match expected.to {
            Some(to) => value.min(to) <= actual && actual <= value.max(to),
            None => false,
        },
    }
}

fn match_date(op: DateOp, expected: &DateTimeRange, actual: Option<&Value>) -> bool {
    let (Some(actual), Some(start)) = (actual.and_then(as_date), expected.start_date) else {
        return false;
    };
    let end = expected.effective_end().unwrap_or(start);
    match op {
        DateOp::Is => actual == start,
        DateOp::IsNot => actual != start,
        DateOp::Before => actual < start,
        DateOp::After => actual > end,
        DateOp::Between | DateOp::InRange => expected.contains(actual),
    }
}

fn match_select(op: SelectOp, expected: &[String], actual: Option<&Value>) -> bool {
    let (Some(actual), Some(first)) = (actual.and_then(as_text), expected.first()) else {
        return false;
    };
    match op {
        SelectOp::Equals => &actual == first,
        SelectOp::NotEquals => &actual != first,
        SelectOp::In => expected.contains(&actual),
        SelectOp::NotIn => !expected.contains(&actual),
    }
}

fn match_boolean(op: BooleanOp, actual: Option<&Value>) -> bool {
    match (op, actual.and_then(as_bool)) {
        (BooleanOp::IsTrue, Some(b)) => b,
        (BooleanOp::IsFalse, Some(b)) => !b,
        (_, None) => false,
    }
}

fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn as_date(v: &Value) -> Option<NaiveDate> {
    let s = v.as_str()?.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

fn as_bool(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
