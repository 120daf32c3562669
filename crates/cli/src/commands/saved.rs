// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use lq_core::{FilterExpression, SavedFilter, SavedFilters};

use crate::cli::{OutputFormat, RuleArgs};
use crate::display::format_rules;
use crate::error::{Error, Result};

use super::{parse_rules, print_json, Context};

/// Summary row for `saved list -o json`.
#[derive(Serialize)]
struct SavedSummaryJson<'a> {
    id: &'a str,
    name: &'a str,
    rules: usize,
    updated_at: String,
}

/// Load saved filters. A missing file is an empty collection.
pub fn load_saved(path: &Path) -> Result<SavedFilters> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no saved filter file");
        return Ok(SavedFilters::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(SavedFilters::from_json(&content)?)
}

pub fn store_saved(path: &Path, filters: &SavedFilters) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut json = filters.to_json()?;
    json.push('\n');
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), count = filters.len(), "stored saved filters");
    Ok(())
}

fn find<'a>(filters: &'a SavedFilters, name: &str) -> Result<&'a SavedFilter> {
    filters
        .get(name)
        .ok_or_else(|| Error::SavedFilterNotFound(name.to_string()))
}

pub fn list(config: Option<&Path>, output: OutputFormat) -> Result<()> {
    let ctx = Context::load(config)?;
    let filters = load_saved(&ctx.saved_filters_path())?;

    match output {
        OutputFormat::Text => {
            if filters.is_empty() {
                println!("No saved filters");
            }
            for filter in filters.list() {
                let count = filter.rules.len();
                let noun = if count == 1 { "rule" } else { "rules" };
                println!("{:<12} {} ({} {})", filter.id, filter.name, count, noun);
            }
        }
        OutputFormat::Json => {
            let rows: Vec<SavedSummaryJson> = filters
                .list()
                .iter()
                .map(|f| SavedSummaryJson {
                    id: &f.id,
                    name: &f.name,
                    rules: f.rules.len(),
                    updated_at: f.updated_at.to_rfc3339(),
                })
                .collect();
            print_json(&rows)?;
        }
        OutputFormat::Ids => {
            for filter in filters.list() {
                println!("{}", filter.id);
            }
        }
    }
    Ok(())
}

pub fn show(config: Option<&Path>, name: &str, output: OutputFormat) -> Result<()> {
    let ctx = Context::load(config)?;
    let filters = load_saved(&ctx.saved_filters_path())?;
    let filter = find(&filters, name)?;

    match output {
        OutputFormat::Json => print_json(filter)?,
        OutputFormat::Ids => println!("{}", filter.id),
        OutputFormat::Text => {
            println!("{} ({})", filter.name, filter.id);
            if filter.rules.is_empty() {
                println!("  (no rules: matches everything)");
            }
            for line in format_rules(&filter.rules).lines() {
                println!("  {line}");
            }
        }
    }
    Ok(())
}

pub fn save(config: Option<&Path>, name: &str, rules: &RuleArgs) -> Result<()> {
    let ctx = Context::load(config)?;
    if name.trim().is_empty() {
        return Err(Error::FieldRequired { field: "NAME" });
    }
    if rules.rule.is_empty() {
        return Err(Error::FieldRequired { field: "--rule" });
    }

    let mut expression = FilterExpression::new();
    for rule in parse_rules(rules, &ctx.catalog)? {
        expression.push_rule(rule);
    }

    let path = ctx.saved_filters_path();
    let mut filters = load_saved(&path)?;
    let id = filters
        .save(name, expression.into_rules(), Utc::now())
        .id
        .clone();
    store_saved(&path, &filters)?;
    println!("Saved {name} ({id})");
    Ok(())
}

pub fn delete(config: Option<&Path>, name: &str) -> Result<()> {
    let ctx = Context::load(config)?;
    let path = ctx.saved_filters_path();
    let mut filters = load_saved(&path)?;
    let removed = filters
        .remove(name)
        .ok_or_else(|| Error::SavedFilterNotFound(name.to_string()))?;
    store_saved(&path, &filters)?;
    println!("Deleted {} ({})", removed.name, removed.id);
    Ok(())
}

#[cfg(test)]
#[path = "saved_tests.rs"]
mod tests;
