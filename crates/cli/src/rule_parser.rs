// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for rule strings given on the command line.
//!
//! ```text
//! [and|or] FIELD OPERATOR [VALUE]
//! ```
//!
//! The value syntax depends on the field type:
//!
//! - text: the rest of the line, optionally quoted (`name contains "acme corp"`)
//! - number: `1000`, or `1000..5000` for `between`
//! - date: `2024-01-01`, or `2024-01-01..2024-01-31` for a range
//! - select: comma-separated options (`status in new,qualified`)
//! - boolean: no value (`hot is_true`)

use lq_core::filter::{NumberOp, NumberValue, SelectOp, TextOp};
use lq_core::range::parse_date;
use lq_core::{Condition, Connector, DateTimeRange, FieldCatalog, FieldDef, FilterRule, Operator};

use crate::error::{Error, Result};

/// Parse a rule string against a catalog.
///
/// `default_connector` applies when the rule does not start with `and`/`or`.
///
/// # Errors
///
/// Returns an error for unknown fields, operators that do not fit the field
/// type, and values that do not parse.
pub fn parse_rule(
    input: &str,
    catalog: &FieldCatalog,
    default_connector: Connector,
) -> Result<FilterRule> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(input, "empty rule"));
    }

    let (first, after_first) = split_word(trimmed);
    let (connector, rest) = match first.parse::<Connector>() {
        Ok(connector) if catalog.get(first).is_none() => (connector, after_first),
        _ => (default_connector, trimmed),
    };

    let (field, rest) = split_word(rest);
    if field.is_empty() {
        return Err(invalid(input, "missing field"));
    }
    let def = catalog.require(field)?;

    let (op_name, value) = split_word(rest);
    if op_name.is_empty() {
        return Err(invalid(input, "missing operator"));
    }
    let op = Operator::parse_for(field, def.field_type, op_name)?;

    let condition = build_condition(input, def, op, unquote(value.trim()))?;
    Ok(FilterRule::new("", field, condition).with_connector(connector))
}

fn build_condition(input: &str, def: &FieldDef, op: Operator, value: &str) -> Result<Condition> {
    let condition = match op {
        Operator::Text(op) => {
            let needs_value = !matches!(op, TextOp::IsEmpty | TextOp::IsNotEmpty);
            if needs_value && value.is_empty() {
                return Err(invalid(input, "missing value"));
            }
            Condition::Text {
                op,
                value: value.to_string(),
            }
        }
        Operator::Number(op) => {
            let value = match op {
                NumberOp::Between => {
                    let (from, to) = value
                        .split_once("..")
                        .ok_or_else(|| invalid(input, "between takes a range like 10..20"))?;
                    NumberValue::between(parse_number(input, from)?, parse_number(input, to)?)
                }
                _ => NumberValue::single(parse_number(input, value)?),
            };
            Condition::Number { op, value }
        }
        Operator::Date(op) => {
            let value = match value.split_once("..") {
                Some((from, to)) => DateTimeRange::between(parse_date(from)?, parse_date(to)?),
                None if value.is_empty() => return Err(invalid(input, "missing date")),
                None => DateTimeRange::single(parse_date(value)?),
            };
            Condition::Date { op, value }
        }
        Operator::Select(op) => {
            let chosen: Vec<String> = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if chosen.is_empty() {
                return Err(invalid(input, "missing option"));
            }
            let single = matches!(op, SelectOp::Equals | SelectOp::NotEquals);
            if single && chosen.len() > 1 {
                return Err(invalid(input, "equals takes one option; use 'in' for several"));
            }
            for value in &chosen {
                def.check_option(value)?;
            }
            Condition::Select { op, value: chosen }
        }
        Operator::Boolean(op) => {
            if !value.is_empty() {
                return Err(invalid(input, "boolean operators take no value"));
            }
            Condition::Boolean { op }
        }
    };
    Ok(condition)
}

fn parse_number(input: &str, s: &str) -> Result<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Err(invalid(input, "missing number"));
    }
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        Ok(_) => Err(invalid(input, &format!("'{s}' is not a finite number"))),
        Err(_) => Err(invalid(input, &format!("'{s}' is not a number"))),
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

fn invalid(rule: &str, reason: &str) -> Error {
    Error::InvalidRule {
        rule: rule.trim().to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "rule_parser_tests.rs"]
mod tests;
