// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles matching the colors module.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Rule syntax shown after `filter` and `saved save` help.
pub fn rule_syntax() -> String {
    colors::examples(
        "\
Rules:
  Syntax: [and|or] FIELD OPERATOR [VALUE]
  Text: contains, not_contains, equals, not_equals, starts_with, ends_with, is_empty, is_not_empty
  Number: equals, not_equals, greater_than, less_than, greater_equal, less_equal, between (N..M)
  Date: is, is_not, before, after, between, in_range (YYYY-MM-DD or D..D)
  Select: equals, not_equals, in, not_in (comma-separated options)
  Boolean: is_true, is_false

Examples:
  lq filter -r leads.json                              Show all leads
  lq filter -r leads.json --rule \"name contains acme\"  Leads whose name contains acme
  lq filter -r leads.json --rule \"value between 1000..5000\" --rule \"or hot is_true\"
  lq filter -r leads.json --rule \"status in new,qualified\" -o ids",
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  lq fields                        List filterable fields
  lq filter -r leads.json          Filter lead records
  lq presets                       Show quick date presets
  lq calendar --month 2024-07      Show a month grid",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
