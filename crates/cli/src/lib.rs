// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lqrs - the library behind the `lq` command.
//!
//! `lq` filters lead records with typed rules and builds date ranges from
//! quick presets and picked dates. The engine lives in [`lq_core`]; this
//! crate adds the config file, the rule-string parser and the commands.
//!
//! # Main Components
//!
//! - [`Config`] - `lq.toml`: fields, option sets and the saved filter file
//! - [`parse_rule`] - `[and|or] FIELD OPERATOR [VALUE]` to a [`lq_core::FilterRule`]
//! - [`run`] - dispatch a parsed [`Cli`]
//!
//! ```rust,ignore
//! use lqrs::{parse_rule, Config};
//! use lq_core::Connector;
//!
//! let config = Config::load(Path::new("lq.toml"))?;
//! let rule = parse_rule("value greater_than 1000", &config.catalog(), Connector::And)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;

pub mod config;
pub mod error;
pub mod rule_parser;

pub use cli::{Cli, Command, DateArgs, OutputFormat, RuleArgs, SavedCommand};
pub use config::{find_config, load_config, Config, FieldConfig};
pub use error::{Error, Result};
pub use rule_parser::parse_rule;

use clap::CommandFactory;
use clap_complete::generate;

use commands::range::RangeRequest;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Filter {
            records,
            rules,
            saved,
            output,
        } => commands::filter::run(config, &records, &rules, saved.as_deref(), output),
        Command::Saved(cmd) => match cmd {
            SavedCommand::List { output } => commands::saved::list(config, output),
            SavedCommand::Show { name, output } => commands::saved::show(config, &name, output),
            SavedCommand::Save { name, rules } => commands::saved::save(config, &name, &rules),
            SavedCommand::Delete { name } => commands::saved::delete(config, &name),
        },
        Command::Fields { output } => commands::fields::run(config, output),
        Command::Options { choose, output } => commands::options::run(config, &choose, output),
        Command::Presets { date, output } => commands::presets::run(&date, output),
        Command::Range {
            preset,
            select,
            start_time,
            end_time,
            strict_time,
            date,
            output,
        } => {
            let request = RangeRequest {
                preset: preset.as_deref(),
                select: &select,
                start_time: start_time.as_deref(),
                end_time: end_time.as_deref(),
                strict_time,
            };
            commands::range::run(&request, &date, output)
        }
        Command::Calendar {
            month,
            start,
            end,
            date,
            output,
        } => commands::calendar::run(
            month.as_deref(),
            start.as_deref(),
            end.as_deref(),
            &date,
            output,
        ),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "lq", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
