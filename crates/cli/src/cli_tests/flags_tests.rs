// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::collections::{HashMap, HashSet};

/// Only allowed long flags have short forms, each short form maps to one
/// long flag everywhere, and every allowed short form is used.
#[test]
fn test_flag_consistency() {
    use clap::CommandFactory;

    let allowed: HashMap<char, &str> = [
        ('r', "records"),
        ('q', "rule"),
        ('o', "output"),
        ('p', "preset"),
        ('s', "select"),
        ('m', "month"),
    ]
    .into_iter()
    .collect();

    let cmd = Cli::command();
    let mut errors = Vec::new();
    let mut used_shorts = HashSet::new();
    check_command_flags(&cmd, &allowed, &mut errors, &mut used_shorts);

    for (short_char, long_name) in &allowed {
        if !used_shorts.contains(short_char) {
            errors.push(format!(
                "-{short_char} (--{long_name}) is in allowed set but never used"
            ));
        }
    }

    assert!(
        errors.is_empty(),
        "Flag consistency violations:\n{}",
        errors.join("\n")
    );
}

fn check_command_flags(
    cmd: &clap::Command,
    allowed: &HashMap<char, &str>,
    errors: &mut Vec<String>,
    used_shorts: &mut HashSet<char>,
) {
    let cmd_name = cmd.get_name();

    for arg in cmd.get_arguments() {
        let long = arg.get_long();
        let Some(short_char) = arg.get_short() else {
            continue;
        };
        if short_char == 'h' && long == Some("help") {
            continue;
        }
        used_shorts.insert(short_char);

        match (allowed.get(&short_char), long) {
            (Some(expected), Some(actual)) if actual != *expected => errors.push(format!(
                "{cmd_name}: -{short_char} maps to --{actual} but should map to --{expected}"
            )),
            (Some(expected), None) => errors.push(format!(
                "{cmd_name}: -{short_char} has no long form, expected --{expected}"
            )),
            (None, _) => errors.push(format!(
                "{cmd_name}: -{short_char} (--{}) is not an allowed short flag",
                long.unwrap_or("(none)")
            )),
            _ => {}
        }
    }

    for subcmd in cmd.get_subcommands() {
        check_command_flags(subcmd, allowed, errors, used_shorts);
    }
}

#[test]
fn test_cli_debug_asserts() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
