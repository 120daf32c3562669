// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use lq_core::{FilterExpression, Record};

use crate::cli::{OutputFormat, RuleArgs};
use crate::display::{format_record, record_id};
use crate::error::{Error, Result};

use super::saved::load_saved;
use super::{parse_rules, print_json, Context};

pub fn run(
    config: Option<&Path>,
    records: &Path,
    rules: &RuleArgs,
    saved: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let ctx = Context::load(config)?;

    let mut expression = match saved {
        Some(name) => {
            let filters = load_saved(&ctx.saved_filters_path())?;
            filters
                .get(name)
                .ok_or_else(|| Error::SavedFilterNotFound(name.to_string()))?
                .expression()
        }
        None => FilterExpression::new(),
    };
    for rule in parse_rules(rules, &ctx.catalog)? {
        expression.push_rule(rule);
    }
    // Saved rules may name fields that were since removed from the config.
    expression.validate(&ctx.catalog)?;

    let records = read_records(records)?;
    let matched: Vec<(usize, &Record)> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| expression.evaluate(record))
        .collect();
    tracing::debug!(
        rules = expression.len(),
        total = records.len(),
        matched = matched.len(),
        "filtered records"
    );

    match output {
        OutputFormat::Text => {
            for (_, record) in &matched {
                println!("{}", format_record(record, &ctx.catalog));
            }
        }
        OutputFormat::Json => {
            let records: Vec<&Record> = matched.iter().map(|(_, r)| *r).collect();
            print_json(&records)?;
        }
        OutputFormat::Ids => {
            for (index, record) in &matched {
                println!("{}", record_id(record, *index));
            }
        }
    }
    Ok(())
}

/// Read records from a file, or stdin for `-`.
fn read_records(path: &Path) -> Result<Vec<Record>> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        parse_records(&content, "stdin")
    } else {
        let content = fs::read_to_string(path)?;
        parse_records(&content, &path.display().to_string())
    }
}

/// Parse a JSON array of objects, or one JSON object per line.
pub(crate) fn parse_records(content: &str, source_name: &str) -> Result<Vec<Record>> {
    let invalid = |reason: String| Error::InvalidRecords {
        source_name: source_name.to_string(),
        reason,
    };

    if content.trim_start().starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
        return values
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                Record::from_value(value)
                    .ok_or_else(|| invalid(format!("element {} is not an object", i + 1)))
            })
            .collect();
    }

    let mut records = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value =
            serde_json::from_str(line).map_err(|e| invalid(format!("line {}: {}", i + 1, e)))?;
        let record = Record::from_value(value)
            .ok_or_else(|| invalid(format!("line {} is not an object", i + 1)))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
