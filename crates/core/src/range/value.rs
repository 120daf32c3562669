// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The date/time range value and time-of-day helpers.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A calendar range with optional times of day.
///
/// When both dates are set `end_date >= start_date`. A range with only one
/// picked day stores that day in both fields. Times are opaque `HH:MM` text
/// and are not checked against the dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl DateTimeRange {
    /// A one-day range.
    pub fn single(date: NaiveDate) -> Self {
        Self::between(date, date)
    }

    /// A range over two dates given in either order.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        DateTimeRange {
            start_date: Some(a.min(b)),
            end_date: Some(a.max(b)),
            start_time: None,
            end_time: None,
        }
    }

    /// The same range with its endpoints swapped if the end falls before the
    /// start. Each time stays with its date.
    pub fn normalized(mut self) -> Self {
        if !self.is_ordered() {
            std::mem::swap(&mut self.start_date, &mut self.end_date);
            std::mem::swap(&mut self.start_time, &mut self.end_time);
        }
        self
    }

    /// False when both dates are set and the end falls before the start.
    pub fn is_ordered(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }

    /// True when no date and no time is set.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }

    /// The effective end date: `end_date`, or `start_date` for a one-day range.
    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.end_date.or(self.start_date)
    }

    pub fn is_single_day(&self) -> bool {
        self.start_date.is_some() && self.start_date == self.effective_end()
    }

    /// Inclusive containment. A range without a start date contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.effective_end()) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

impl fmt::Display for DateTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(start) = self.start_date else {
            return write!(f, "(no dates)");
        };
        write!(f, "{start}")?;
        if let Some(time) = &self.start_time {
            write!(f, " {}", display_time(time))?;
        }
        let end = self.effective_end().unwrap_or(start);
        if end != start || self.end_time.is_some() {
            write!(f, " - {end}")?;
            if let Some(time) = &self.end_time {
                write!(f, " {}", display_time(time))?;
            }
        }
        Ok(())
    }
}

/// A validated 24-hour time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parse a strict `HH:MM` string.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.len() != 5 {
            return Err(Error::InvalidTime(s.to_string()));
        }
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map(TimeOfDay)
            .map_err(|_| Error::InvalidTime(s.to_string()))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// 12-hour clock rendering, e.g. `2:30 PM`.
    pub fn to_12h(&self) -> String {
        self.0.format("%-I:%M %p").to_string()
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Display form of a stored time string. Unparsable text is shown as-is.
pub fn display_time(raw: &str) -> String {
    TimeOfDay::parse(raw)
        .map(|t| t.to_12h())
        .unwrap_or_else(|_| raw.to_string())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
