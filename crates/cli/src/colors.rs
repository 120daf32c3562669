// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and calendar output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers and month titles: steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Hints and descriptions: medium grey
    pub const CONTEXT: u8 = 245;
    /// Range endpoints in the calendar: amber
    pub const ENDPOINT: u8 = 214;

    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const ENDPOINT_START: &str = "\x1b[38;5;214m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, codes::RESET)
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn endpoint(text: &str) -> String {
    paint(codes::ENDPOINT, text)
}

/// Colorize an examples help block.
///
/// ```text
/// Examples:
///   lq filter --records leads.json    Show all leads
/// ```
///
/// Lines ending with `:` become headers. In example lines the command (up to
/// the first run of two spaces) is literal and the description is context.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 128);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
        } else if let Some(split) = trimmed.find("  ") {
            let (cmd, desc) = trimmed.split_at(split);
            let desc_start = desc.len() - desc.trim_start().len();
            result.push_str(indent);
            result.push_str(&literal(cmd));
            result.push_str(&desc[..desc_start]);
            result.push_str(&context(&desc[desc_start..]));
        } else {
            result.push_str(line);
        }
    }
    result
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
