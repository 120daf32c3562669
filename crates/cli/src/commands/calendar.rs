// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use serde::Serialize;

use lq_core::range::GridCell;
use lq_core::{CalendarMonth, Clock, DateTimeRange, MonthGrid};

use crate::cli::{DateArgs, OutputFormat};
use crate::colors;
use crate::display::format_calendar;
use crate::error::Result;

use super::{clock, parse_optional_date, print_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayJson {
    date: NaiveDate,
    is_start: bool,
    is_end: bool,
    is_in_range: bool,
    is_today: bool,
}

#[derive(Serialize)]
struct CalendarJson {
    month: String,
    title: String,
    /// All 42 cells; `null` for padding.
    cells: Vec<Option<DayJson>>,
}

pub fn run(
    month: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    date: &DateArgs,
    output: OutputFormat,
) -> Result<()> {
    let today = clock(date)?.today();
    let grid = render(month, start, end, today)?;

    match output {
        OutputFormat::Json => print_json(&to_json(&grid))?,
        OutputFormat::Text | OutputFormat::Ids => {
            println!("{}", format_calendar(&grid, colors::should_colorize()));
        }
    }
    Ok(())
}

/// Lay out the requested month. Without `--month` the grid shows the range
/// start's month, or today's.
pub(crate) fn render(
    month: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
) -> Result<MonthGrid> {
    let start = parse_optional_date(start)?;
    let end = parse_optional_date(end)?;
    let range = match (start, end) {
        (Some(start), Some(end)) => DateTimeRange::between(start, end),
        (Some(start), None) => DateTimeRange::single(start),
        _ => DateTimeRange::default(),
    };

    let month = match month {
        Some(m) => m.parse::<CalendarMonth>()?,
        None => CalendarMonth::containing(range.start_date.unwrap_or(today)),
    };
    Ok(MonthGrid::render(month, &range, today))
}

fn to_json(grid: &MonthGrid) -> CalendarJson {
    let month = grid.month();
    CalendarJson {
        month: format!("{:04}-{:02}", month.year(), month.month()),
        title: month.to_string(),
        cells: grid
            .cells()
            .iter()
            .map(|cell| match cell {
                GridCell::Blank => None,
                GridCell::Day(day) => Some(DayJson {
                    date: day.date,
                    is_start: day.is_start,
                    is_end: day.is_end,
                    is_in_range: day.is_in_range,
                    is_today: day.is_today,
                }),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
