// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Month grids for calendar rendering.

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::value::DateTimeRange;

/// Cells in a month grid: six Sunday-first weeks.
pub const GRID_CELLS: usize = 42;

/// A calendar month, held as its first day.
///
/// Navigation stops at the first and last months chrono can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| CalendarMonth { first })
            .ok_or_else(|| Error::InvalidMonth(format!("{year}-{month:02}")))
    }

    /// The month a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        CalendarMonth {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Number of days in the month.
    pub fn days(&self) -> u32 {
        let month = self.first.month();
        let days = self
            .first
            .iter_days()
            .take_while(|d| d.month() == month)
            .count();
        u32::try_from(days).unwrap_or(0)
    }

    /// The following month, or this one at the end of the calendar.
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(*self, |first| CalendarMonth { first })
    }

    /// The preceding month, or this one at the start of the calendar.
    pub fn prev(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(*self, |first| CalendarMonth { first })
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day().format("%B %Y"))
    }
}

impl FromStr for CalendarMonth {
    type Err = Error;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        CalendarMonth::new(year, month).map_err(|_| invalid())
    }
}

/// One in-month day with its selection flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_start: bool,
    pub is_end: bool,
    /// Strictly between start and end; never set for a one-day range.
    pub is_in_range: bool,
    pub is_today: bool,
}

/// A grid slot: padding or a day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        }
    }
}

/// A rendered month: exactly [`GRID_CELLS`] cells, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: CalendarMonth,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Lay out `month`, tagging days against `range` and `today`.
    pub fn render(month: CalendarMonth, range: &DateTimeRange, today: NaiveDate) -> Self {
        let first = month.first_day();
        let lead = first.weekday().num_days_from_sunday() as usize;
        let start = range.start_date;
        let end = range.effective_end();

        let mut cells = vec![GridCell::Blank; lead];
        for date in first.iter_days().take(month.days() as usize) {
            let is_in_range = match (start, end) {
                (Some(s), Some(e)) if s != e => s < date && date < e,
                _ => false,
            };
            cells.push(GridCell::Day(DayCell {
                date,
                is_start: start == Some(date),
                is_end: end == Some(date),
                is_in_range,
                is_today: date == today,
            }));
        }
        cells.resize(GRID_CELLS, GridCell::Blank);

        MonthGrid { month, cells }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The grid as six rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    /// The cell for a date, if it falls in this month.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells
            .iter()
            .filter_map(GridCell::day)
            .find(|d| d.date == date)
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
