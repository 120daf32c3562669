// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Args;

/// Rule arguments shared by `filter` and `saved save`.
#[derive(Args, Clone, Debug, Default)]
pub struct RuleArgs {
    /// Rule: [and|or] FIELD OPERATOR [VALUE] (repeatable)
    #[arg(long = "rule", short = 'q', value_name = "RULE")]
    pub rule: Vec<String>,

    /// Join rules with OR unless a rule names its connector
    #[arg(long)]
    pub any: bool,
}

/// Override for "today", used by date commands.
#[derive(Args, Clone, Debug, Default)]
pub struct DateArgs {
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
}
