// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use serde::Serialize;

use lq_core::{OptionItem, OptionSet, Picker, PickerGroup};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::{print_json, Context};

#[derive(Serialize)]
struct OptionSetJson<'a> {
    name: &'a str,
    options: &'a [OptionItem],
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<&'a str>,
}

impl<'a> From<&'a Picker> for OptionSetJson<'a> {
    fn from(picker: &'a Picker) -> Self {
        OptionSetJson {
            name: picker.name(),
            options: picker.options(),
            selected: picker.selected().map(|o| o.value.as_str()),
        }
    }
}

/// Build one picker per option set and apply `SET=VALUE` choices in order.
/// A later choice for the same set replaces an earlier one.
pub fn pick(sets: Vec<OptionSet>, choices: &[String]) -> Result<PickerGroup> {
    let mut group = PickerGroup::new(sets);
    for choice in choices {
        let (name, value) = choice
            .split_once('=')
            .map(|(n, v)| (n.trim(), v.trim()))
            .filter(|(n, v)| !n.is_empty() && !v.is_empty())
            .ok_or_else(|| Error::InvalidChoice(choice.clone()))?;
        group.toggle(name)?;
        group.choose(name, value)?;
    }
    Ok(group)
}

fn format_picker(picker: &Picker) -> String {
    let selected = picker.selected().map(|o| o.value.as_str());
    let mut lines = vec![picker.name().to_string()];
    for option in picker.options() {
        let marker = if selected == Some(option.value.as_str()) {
            '*'
        } else {
            ' '
        };
        lines.push(format!("  {marker} {:<14}{}", option.value, option.label));
    }
    lines.join("\n")
}

pub fn run(config: Option<&Path>, choices: &[String], output: OutputFormat) -> Result<()> {
    let ctx = Context::load(config)?;
    let group = pick(ctx.config.option_sets(), choices)?;

    match output {
        OutputFormat::Json => {
            let sets: Vec<OptionSetJson> =
                group.pickers().iter().map(OptionSetJson::from).collect();
            print_json(&sets)?;
        }
        OutputFormat::Ids => {
            for picker in group.pickers() {
                match picker.selected() {
                    Some(option) => println!("{}={}", picker.name(), option.value),
                    None if choices.is_empty() => println!("{}", picker.name()),
                    None => {}
                }
            }
        }
        OutputFormat::Text => {
            if group.pickers().is_empty() {
                println!("No option sets configured");
            }
            for picker in group.pickers() {
                println!("{}", format_picker(picker));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
