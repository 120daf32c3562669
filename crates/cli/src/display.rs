// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;

use lq_core::filter::{NumberValue, TextOp};
use lq_core::range::GridCell;
use lq_core::{
    Condition, DateTimeRange, FieldCatalog, FieldDef, FilterRule, MonthGrid, Record,
    SelectionState,
};

use crate::colors;

/// Width of one calendar cell, including its markers.
const CELL_WIDTH: usize = 4;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Format a rule in the same syntax the rule parser accepts.
///
/// The connector is only written for rules after the first, since the first
/// rule's connector never takes part in evaluation.
pub fn format_rule(rule: &FilterRule, first: bool) -> String {
    let mut out = String::new();
    if !first {
        out.push_str(rule.connector.as_str());
        out.push(' ');
    }
    out.push_str(&rule.field);
    out.push(' ');
    out.push_str(rule.condition.operator().as_str());
    if let Some(value) = format_condition_value(&rule.condition) {
        out.push(' ');
        out.push_str(&value);
    }
    out
}

/// Format a rule list, one rule per line.
pub fn format_rules(rules: &[FilterRule]) -> String {
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| format_rule(rule, i == 0))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_condition_value(condition: &Condition) -> Option<String> {
    match condition {
        Condition::Text { op, value } => match op {
            TextOp::IsEmpty | TextOp::IsNotEmpty => None,
            _ => Some(format!("\"{value}\"")),
        },
        Condition::Number { value, .. } => format_number_value(value),
        Condition::Date { value, .. } => format_date_value(value),
        Condition::Select { value, .. } if value.is_empty() => None,
        Condition::Select { value, .. } => Some(value.join(",")),
        Condition::Boolean { .. } => None,
    }
}

fn format_number_value(value: &NumberValue) -> Option<String> {
    let from = value.value?;
    Some(match value.to {
        Some(to) => format!("{from}..{to}"),
        None => from.to_string(),
    })
}

fn format_date_value(range: &DateTimeRange) -> Option<String> {
    let start = range.start_date?;
    Some(match range.effective_end() {
        Some(end) if end != start => format!("{start}..{end}"),
        _ => start.to_string(),
    })
}

/// Identifier for a record in `ids` output: its `id` attribute, or its
/// 1-based position in the input.
pub fn record_id(record: &Record, index: usize) -> String {
    match record.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => (index + 1).to_string(),
    }
}

/// Format a record as `label: value` pairs in catalog order.
///
/// Attributes that are missing or not in the catalog are skipped.
pub fn format_record(record: &Record, catalog: &FieldCatalog) -> String {
    let pairs: Vec<String> = catalog
        .iter()
        .filter_map(|def| {
            record
                .get(&def.value)
                .map(|v| format!("{}: {}", def.label, format_json_value(v)))
        })
        .collect();
    match record.get("id") {
        Some(id) => format!("[{}] {}", format_json_value(id), pairs.join("  ")),
        None => pairs.join("  "),
    }
}

fn format_json_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(format_json_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Format one catalog field with its type and, for select fields, options.
pub fn format_field(def: &FieldDef) -> String {
    let mut line = format!("{:<16}{:<9}{}", def.value, def.field_type.as_str(), def.label);
    if !def.options.is_empty() {
        let options: Vec<String> = def
            .options
            .iter()
            .map(|o| format!("{} ({})", o.value, o.label))
            .collect();
        line.push_str("\n    options: ");
        line.push_str(&options.join(", "));
    }
    line
}

pub fn state_label(state: SelectionState) -> &'static str {
    match state {
        SelectionState::NoSelection => "no_selection",
        SelectionState::SelectingEnd { .. } => "selecting_end",
        SelectionState::Complete => "complete",
    }
}

/// Format a calendar cell.
///
/// Start and end days are bracketed, days inside the range are parenthesized
/// and today carries a trailing `*`.
pub fn format_cell(cell: &GridCell, colorize: bool) -> String {
    let Some(day) = cell.day() else {
        return " ".repeat(CELL_WIDTH);
    };
    let n = day.date.format("%-d").to_string();
    if day.is_start || day.is_end {
        let text = format!("[{n:>2}]");
        if colorize {
            colors::endpoint(&text)
        } else {
            text
        }
    } else if day.is_in_range {
        format!("({n:>2})")
    } else if day.is_today {
        format!(" {n:>2}*")
    } else {
        format!(" {n:>2} ")
    }
}

/// Format a month grid as text: a centered title, weekday header and six
/// week rows.
pub fn format_calendar(grid: &MonthGrid, colorize: bool) -> String {
    let width = CELL_WIDTH * 7;
    let title = grid.month().to_string();
    let pad = width.saturating_sub(title.len()) / 2;
    let title = if colorize {
        colors::header(&title)
    } else {
        title
    };

    let mut lines = vec![format!("{}{}", " ".repeat(pad), title)];
    lines.push(
        WEEKDAYS
            .iter()
            .map(|d| format!(" {d} "))
            .collect::<String>()
            .trim_end()
            .to_string(),
    );
    for week in grid.weeks() {
        let row: String = week.iter().map(|c| format_cell(c, colorize)).collect();
        lines.push(row.trim_end().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
