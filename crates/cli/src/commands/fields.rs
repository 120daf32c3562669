// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use serde::Serialize;

use lq_core::{FieldDef, FieldType, OptionItem, Operator};

use crate::cli::OutputFormat;
use crate::display::format_field;
use crate::error::Result;

use super::{print_json, Context};

#[derive(Serialize)]
struct FieldJson<'a> {
    value: &'a str,
    label: &'a str,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    options: &'a [OptionItem],
    operators: Vec<&'static str>,
    default_operator: &'static str,
}

impl<'a> From<&'a FieldDef> for FieldJson<'a> {
    fn from(def: &'a FieldDef) -> Self {
        FieldJson {
            value: &def.value,
            label: &def.label,
            field_type: def.field_type,
            options: &def.options,
            operators: Operator::names_for(def.field_type),
            default_operator: Operator::default_for(def.field_type).as_str(),
        }
    }
}

pub fn run(config: Option<&Path>, output: OutputFormat) -> Result<()> {
    let ctx = Context::load(config)?;

    match output {
        OutputFormat::Json => {
            let fields: Vec<FieldJson> = ctx.catalog.iter().map(FieldJson::from).collect();
            print_json(&fields)?;
        }
        OutputFormat::Ids => {
            for def in ctx.catalog.iter() {
                println!("{}", def.value);
            }
        }
        OutputFormat::Text => {
            if ctx.catalog.is_empty() {
                println!("No fields configured");
            }
            for def in ctx.catalog.iter() {
                println!("{}", format_field(def));
                println!(
                    "    operators: {}",
                    Operator::valid_names(def.field_type)
                );
            }
        }
    }
    Ok(())
}
