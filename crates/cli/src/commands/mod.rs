// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod calendar;
pub mod fields;
pub mod filter;
pub mod options;
pub mod presets;
pub mod range;
pub mod saved;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use lq_core::range::parse_date;
use lq_core::{Clock, Connector, FieldCatalog, FilterRule, FixedClock, SystemClock};

use crate::cli::{DateArgs, RuleArgs};
use crate::config::{load_config, Config};
use crate::error::Result;
use crate::rule_parser::parse_rule;

/// Loaded configuration with its resolved catalog.
pub struct Context {
    pub config: Config,
    pub path: PathBuf,
    pub catalog: FieldCatalog,
}

impl Context {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (config, path) = load_config(explicit)?;
        let catalog = config.catalog();
        Ok(Context {
            config,
            path,
            catalog,
        })
    }

    pub fn saved_filters_path(&self) -> PathBuf {
        self.config.saved_filters_path(&self.path)
    }
}

/// Parse `--rule` arguments. `--any` makes OR the default connector.
pub fn parse_rules(args: &RuleArgs, catalog: &FieldCatalog) -> Result<Vec<FilterRule>> {
    let default_connector = if args.any {
        Connector::Or
    } else {
        Connector::And
    };
    args.rule
        .iter()
        .map(|rule| parse_rule(rule, catalog, default_connector))
        .collect()
}

/// The clock for date commands: `--today` when given, else the system date.
pub fn clock(args: &DateArgs) -> Result<FixedClock> {
    let today = match &args.today {
        Some(date) => parse_date(date)?,
        None => SystemClock.today(),
    };
    Ok(FixedClock(today))
}

pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    Ok(value.map(parse_date).transpose()?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
