// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sources of "today" for presets and calendar rendering.

use chrono::{Local, NaiveDate};

/// Trait for obtaining the current local date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The system's local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock> Clock for &C {
    fn today(&self) -> NaiveDate {
        (*self).today()
    }
}
