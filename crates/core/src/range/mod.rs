// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date-range selection.
//!
//! - [`DateTimeRange`] - the `(start, end, start time, end time)` value
//! - [`RangeSelector`] - the two-click selection state machine
//! - [`QuickPreset`] - named shortcut ranges computed from today
//! - [`MonthGrid`] - a 42-cell month layout flagged against a range

mod clock;
mod grid;
mod preset;
mod selector;
mod value;

pub use clock::{Clock, FixedClock, SystemClock};
pub use grid::{CalendarMonth, DayCell, GridCell, MonthGrid, GRID_CELLS};
pub use preset::QuickPreset;
pub use selector::{RangeSelector, SelectionState};
pub use value::{display_time, parse_date, DateTimeRange, TimeOfDay};
