// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use lq_core::range::{parse_date, TimeOfDay};
use lq_core::{Clock, DateTimeRange, QuickPreset, RangeSelector};

use crate::cli::{DateArgs, OutputFormat};
use crate::display::state_label;
use crate::error::Result;

use super::{clock, print_json};

/// Inputs for `lq range`, in the order they are applied.
pub struct RangeRequest<'a> {
    pub preset: Option<&'a str>,
    pub select: &'a [String],
    pub start_time: Option<&'a str>,
    pub end_time: Option<&'a str>,
    pub strict_time: bool,
}

#[derive(Serialize)]
struct RangeJson<'a> {
    range: &'a DateTimeRange,
    state: &'static str,
}

pub fn run(request: &RangeRequest, date: &DateArgs, output: OutputFormat) -> Result<()> {
    let clock = clock(date)?;
    let selector = build(request, &clock)?;

    match output {
        OutputFormat::Json => print_json(&RangeJson {
            range: selector.range(),
            state: state_label(selector.state()),
        })?,
        OutputFormat::Text | OutputFormat::Ids => {
            println!("{}", selector.range());
            if selector.is_selecting_end() {
                println!("(pick an end date to complete the range)");
            }
        }
    }
    Ok(())
}

/// Apply the preset, then each picked date, then the times.
pub(crate) fn build(request: &RangeRequest, clock: &impl Clock) -> Result<RangeSelector> {
    let mut selector = RangeSelector::new();

    if let Some(label) = request.preset {
        let preset: QuickPreset = label.parse()?;
        selector.apply_preset(preset, clock);
    }
    for date in request.select {
        selector.select_date(parse_date(date)?);
    }
    if let Some(time) = request.start_time {
        selector.set_start_time(check_time(time, request.strict_time)?);
    }
    if let Some(time) = request.end_time {
        selector.set_end_time(check_time(time, request.strict_time)?);
    }

    tracing::debug!(range = %selector.range(), state = state_label(selector.state()), "built range");
    Ok(selector)
}

/// Times are stored as given unless strict parsing is requested.
fn check_time(raw: &str, strict: bool) -> Result<String> {
    if strict {
        Ok(TimeOfDay::parse(raw)?.to_string())
    } else {
        Ok(raw.to_string())
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
