// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expressions over lead records.
//!
//! An expression is an ordered list of rules. Each rule tests one field of a
//! record with an operator drawn from the field type's closed set:
//!
//! | type    | operators |
//! |---------|-----------|
//! | text    | contains, not_contains, equals, not_equals, starts_with, ends_with, is_empty, is_not_empty |
//! | number  | equals, not_equals, greater_than, less_than, greater_equal, less_equal, between |
//! | date    | is, is_not, before, after, between, in_range |
//! | select  | equals, not_equals, in, not_in |
//! | boolean | is_true, is_false |
//!
//! Rules are joined by `and`/`or` connectors and folded strictly left to
//! right, so `a and b or c` means `(a and b) or c`.

mod condition;
mod eval;
mod expression;
mod operator;
mod rule;
mod saved;

pub use condition::{Condition, NumberValue, RuleValue};
pub use expression::FilterExpression;
pub use operator::{BooleanOp, DateOp, NumberOp, Operator, SelectOp, TextOp};
pub use rule::{Connector, FilterRule, Record, RulePatch};
pub use saved::{generate_id, SavedFilter, SavedFilters};
