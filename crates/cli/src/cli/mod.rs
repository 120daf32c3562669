// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{DateArgs, RuleArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    /// One record id per line
    #[value(alias = "id")]
    Ids,
}

#[derive(Parser)]
#[command(name = "lq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Filter lead records and pick date ranges from the command line")]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Config file (default: ./lq.toml, then the user config directory)
    #[arg(long, global = true, env = "LQ_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Filter records with rules
    #[command(after_help = help::rule_syntax())]
    Filter {
        /// Records file: a JSON array of objects or JSON lines ("-" for stdin)
        #[arg(long, short = 'r', value_name = "FILE")]
        records: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Start from a saved filter; --rule entries are appended to it
        #[arg(long, value_name = "NAME")]
        saved: Option<String>,

        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Manage saved filters
    #[command(subcommand)]
    Saved(SavedCommand),

    /// List the filterable fields and their operators
    Fields {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List option sets and check option choices against them
    #[command(after_help = colors::examples(
        "\
Examples:
  lq options                                           All option sets
  lq options --choose status=won -o ids                Check a choice"
    ))]
    Options {
        /// Choose an option: SET=VALUE (repeatable)
        #[arg(long, value_name = "SET=VALUE")]
        choose: Vec<String>,

        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Date ranges
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the quick date presets
    Presets {
        #[command(flatten)]
        date: DateArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Build a date range from a preset, picked dates and times
    #[command(after_help = colors::examples(
        "\
Examples:
  lq range --preset \"2 weeks\"                         Two weeks from today
  lq range --select 2024-07-20 --select 2024-07-03     Picks in any order
  lq range --preset today --start-time 09:00           Today from 9:00 AM"
    ))]
    Range {
        /// Quick preset label (e.g. today, "this weekend", "2 weeks")
        #[arg(long, short = 'p')]
        preset: Option<String>,

        /// Pick a date (YYYY-MM-DD); two picks make a range
        #[arg(long, short = 's', value_name = "DATE")]
        select: Vec<String>,

        /// Start time (HH:MM)
        #[arg(long, value_name = "TIME")]
        start_time: Option<String>,

        /// End time (HH:MM)
        #[arg(long, value_name = "TIME")]
        end_time: Option<String>,

        /// Reject times that are not 24-hour HH:MM
        #[arg(long)]
        strict_time: bool,

        #[command(flatten)]
        date: DateArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a month grid with an optional range highlighted
    Calendar {
        /// Month to show (YYYY-MM, default: the start date's or today's month)
        #[arg(long, short = 'm', value_name = "YYYY-MM")]
        month: Option<String>,

        /// Range start (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        start: Option<String>,

        /// Range end (YYYY-MM-DD, default: start)
        #[arg(long, value_name = "DATE", requires = "start")]
        end: Option<String>,

        #[command(flatten)]
        date: DateArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum SavedCommand {
    /// List saved filters
    List {
        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the rules of a saved filter
    Show {
        name: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Save rules under a name, replacing any filter with that name
    #[command(after_help = help::rule_syntax())]
    Save {
        name: String,

        #[command(flatten)]
        rules: RuleArgs,
    },

    /// Delete a saved filter
    Delete { name: String },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
