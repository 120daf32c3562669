// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-click range selection.

use chrono::NaiveDate;

use super::clock::Clock;
use super::preset::QuickPreset;
use super::value::DateTimeRange;

/// Where the selector is in the two-click cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    NoSelection,
    /// One date picked; the next pick resolves the range.
    SelectingEnd { anchor: NaiveDate },
    Complete,
}

/// Interactive range picker state.
///
/// The first pick sets a one-day range anchored at that date; the second
/// pick resolves the range, swapping dates so that start <= end. A pick
/// after completion starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSelector {
    range: DateTimeRange,
    state: SelectionState,
}

impl RangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing value. A range with a start date is complete.
    pub fn from_range(range: DateTimeRange) -> Self {
        let state = if range.start_date.is_some() {
            SelectionState::Complete
        } else {
            SelectionState::NoSelection
        };
        RangeSelector { range, state }
    }

    pub fn range(&self) -> &DateTimeRange {
        &self.range
    }

    pub fn into_range(self) -> DateTimeRange {
        self.range
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_selecting_end(&self) -> bool {
        matches!(self.state, SelectionState::SelectingEnd { .. })
    }

    /// Apply one date pick.
    pub fn select_date(&mut self, date: NaiveDate) -> &DateTimeRange {
        match self.state {
            SelectionState::NoSelection | SelectionState::Complete => {
                self.range.start_date = Some(date);
                self.range.end_date = Some(date);
                self.state = SelectionState::SelectingEnd { anchor: date };
            }
            SelectionState::SelectingEnd { anchor } => {
                self.range.start_date = Some(anchor.min(date));
                self.range.end_date = Some(anchor.max(date));
                self.state = SelectionState::Complete;
            }
        }
        tracing::debug!(state = ?self.state, range = %self.range, "select date");
        &self.range
    }

    /// Replace the dates with a preset's range, keeping times.
    pub fn apply_preset(&mut self, preset: QuickPreset, clock: &impl Clock) -> &DateTimeRange {
        let computed = preset.compute_with(clock);
        self.range.start_date = computed.start_date;
        self.range.end_date = computed.end_date;
        self.state = SelectionState::Complete;
        &self.range
    }

    /// Empty both dates and both times.
    pub fn clear(&mut self) {
        self.range = DateTimeRange::default();
        self.state = SelectionState::NoSelection;
    }

    /// Store a start time. The text is not validated.
    pub fn set_start_time(&mut self, time: impl Into<String>) {
        self.range.start_time = Some(time.into());
    }

    /// Store an end time. The text is not validated.
    pub fn set_end_time(&mut self, time: impl Into<String>) {
        self.range.end_time = Some(time.into());
    }

    pub fn clear_start_time(&mut self) {
        self.range.start_time = None;
    }

    pub fn clear_end_time(&mut self) {
        self.range.end_time = None;
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
