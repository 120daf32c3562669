// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use serde::Serialize;

use lq_core::{Clock, QuickPreset};

use crate::cli::{DateArgs, OutputFormat};
use crate::error::Result;

use super::{clock, print_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetJson {
    label: &'static str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

pub fn run(date: &DateArgs, output: OutputFormat) -> Result<()> {
    let clock = clock(date)?;
    let today = clock.today();

    match output {
        OutputFormat::Json => {
            let presets: Vec<PresetJson> = QuickPreset::ALL
                .iter()
                .map(|preset| {
                    let range = preset.compute(today);
                    PresetJson {
                        label: preset.label(),
                        start_date: range.start_date,
                        end_date: range.end_date,
                    }
                })
                .collect();
            print_json(&presets)?;
        }
        OutputFormat::Text | OutputFormat::Ids => {
            for preset in QuickPreset::ALL {
                println!("{:<14}{}", preset.label(), preset.compute_with(&clock));
            }
        }
    }
    Ok(())
}
