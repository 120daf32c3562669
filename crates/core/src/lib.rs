// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lq-core: Filter expressions and date-range selection for lead records.
//!
//! This crate provides the rule model used to search leads (typed
//! field/operator/value rules joined by AND/OR) and the date-range model used
//! by calendar pickers (presets, two-click selection, month grids).

pub mod catalog;
pub mod error;
pub mod filter;
pub mod picker;
pub mod range;

pub use catalog::{FieldCatalog, FieldDef, FieldType, OptionItem, OptionSet};
pub use error::{Error, Result};
pub use filter::{
    Condition, Connector, FilterExpression, FilterRule, Operator, Record, RulePatch, RuleValue,
    SavedFilter, SavedFilters,
};
pub use picker::{Picker, PickerGroup};
pub use range::{
    CalendarMonth, Clock, DateTimeRange, FixedClock, MonthGrid, QuickPreset, RangeSelector,
    SelectionState, SystemClock,
};
