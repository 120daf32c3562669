// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named quick-range presets.
//!
//! Weeks start on Sunday. All presets are pure functions of "today".

use chrono::{Datelike, NaiveDate, TimeDelta};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::clock::Clock;
use super::value::DateTimeRange;

/// A one-click shortcut range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickPreset {
    Today,
    Tomorrow,
    ThisWeekend,
    NextWeek,
    NextWeekend,
    TwoWeeks,
    FourWeeks,
    /// Currently the same range as [`QuickPreset::Today`].
    Later,
}

impl QuickPreset {
    /// All presets in display order.
    pub const ALL: &'static [QuickPreset] = &[
        QuickPreset::Today,
        QuickPreset::Tomorrow,
        QuickPreset::ThisWeekend,
        QuickPreset::NextWeek,
        QuickPreset::NextWeekend,
        QuickPreset::TwoWeeks,
        QuickPreset::FourWeeks,
        QuickPreset::Later,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickPreset::Today => "Today",
            QuickPreset::Tomorrow => "Tomorrow",
            QuickPreset::ThisWeekend => "This weekend",
            QuickPreset::NextWeek => "Next week",
            QuickPreset::NextWeekend => "Next weekend",
            QuickPreset::TwoWeeks => "2 weeks",
            QuickPreset::FourWeeks => "4 weeks",
            QuickPreset::Later => "Later",
        }
    }

    /// Comma-separated labels for error hints.
    pub fn valid_labels() -> String {
        Self::ALL
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The range this preset denotes when today is `today`.
    pub fn compute(&self, today: NaiveDate) -> DateTimeRange {
        let week_start = offset(
            today,
            -i64::from(today.weekday().num_days_from_sunday()),
        );
        let (start, end) = match self {
            QuickPreset::Today | QuickPreset::Later => (today, today),
            QuickPreset::Tomorrow => {
                let d = offset(today, 1);
                (d, d)
            }
            QuickPreset::ThisWeekend => (offset(week_start, 6), offset(week_start, 7)),
            QuickPreset::NextWeek => (offset(week_start, 7), offset(week_start, 13)),
            QuickPreset::NextWeekend => (offset(week_start, 13), offset(week_start, 14)),
            QuickPreset::TwoWeeks => (today, offset(today, 14)),
            QuickPreset::FourWeeks => (today, offset(today, 28)),
        };
        DateTimeRange::between(start, end)
    }

    pub fn compute_with(&self, clock: &impl Clock) -> DateTimeRange {
        self.compute(clock.today())
    }
}

impl fmt::Display for QuickPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for QuickPreset {
    type Err = Error;

    /// Case-insensitive label lookup; dashes and underscores count as spaces.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.label().to_lowercase() == wanted)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

fn offset(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(TimeDelta::days(days))
        .unwrap_or(date)
}

#[cfg(test)]
#[path = "preset_tests.rs"]
mod tests;
