// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator sets, one closed enum per field type.
//!
//! The first variant of each enum is that type's default operator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::FieldType;
use crate::error::{Error, Result};

macro_rules! operator_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All operators of this set, default first.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the snake_case name used in rules and config.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            fn from_name(s: &str) -> Option<Self> {
                match s {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

operator_set! {
    /// Operators for text fields.
    TextOp {
        Contains => "contains",
        NotContains => "not_contains",
        Equals => "equals",
        NotEquals => "not_equals",
        StartsWith => "starts_with",
        EndsWith => "ends_with",
        IsEmpty => "is_empty",
        IsNotEmpty => "is_not_empty",
    }
}

operator_set! {
    /// Operators for number fields.
    NumberOp {
        Equals => "equals",
        NotEquals => "not_equals",
        GreaterThan => "greater_than",
        LessThan => "less_than",
        GreaterEqual => "greater_equal",
        LessEqual => "less_equal",
        Between => "between",
    }
}

operator_set! {
    /// Operators for date fields.
    DateOp {
        Is => "is",
        IsNot => "is_not",
        Before => "before",
        After => "after",
        Between => "between",
        InRange => "in_range",
    }
}

operator_set! {
    /// Operators for select fields.
    SelectOp {
        Equals => "equals",
        NotEquals => "not_equals",
        In => "in",
        NotIn => "not_in",
    }
}

operator_set! {
    /// Operators for boolean fields.
    BooleanOp {
        IsTrue => "is_true",
        IsFalse => "is_false",
    }
}

/// An operator tagged with the field type it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Text(TextOp),
    Number(NumberOp),
    Date(DateOp),
    Select(SelectOp),
    Boolean(BooleanOp),
}

impl Operator {
    /// The field type this operator applies to.
    pub fn field_type(&self) -> FieldType {
        match self {
            Operator::Text(_) => FieldType::Text,
            Operator::Number(_) => FieldType::Number,
            Operator::Date(_) => FieldType::Date,
            Operator::Select(_) => FieldType::Select,
            Operator::Boolean(_) => FieldType::Boolean,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Text(op) => op.as_str(),
            Operator::Number(op) => op.as_str(),
            Operator::Date(op) => op.as_str(),
            Operator::Select(op) => op.as_str(),
            Operator::Boolean(op) => op.as_str(),
        }
    }

    /// The default (first) operator for a field type.
    pub fn default_for(field_type: FieldType) -> Operator {
        match field_type {
            FieldType::Text => Operator::Text(TextOp::Contains),
            FieldType::Number => Operator::Number(NumberOp::Equals),
            FieldType::Date => Operator::Date(DateOp::Is),
            FieldType::Select => Operator::Select(SelectOp::Equals),
            FieldType::Boolean => Operator::Boolean(BooleanOp::IsTrue),
        }
    }

    /// All operator names valid for a field type, default first.
    pub fn names_for(field_type: FieldType) -> Vec<&'static str> {
        match field_type {
            FieldType::Text => TextOp::ALL.iter().map(|op| op.as_str()).collect(),
            FieldType::Number => NumberOp::ALL.iter().map(|op| op.as_str()).collect(),
            FieldType::Date => DateOp::ALL.iter().map(|op| op.as_str()).collect(),
            FieldType::Select => SelectOp::ALL.iter().map(|op| op.as_str()).collect(),
            FieldType::Boolean => BooleanOp::ALL.iter().map(|op| op.as_str()).collect(),
        }
    }

    /// Comma-separated operator names for error hints.
    pub fn valid_names(field_type: FieldType) -> String {
        Self::names_for(field_type).join(", ")
    }

    /// Look up an operator name within one field type's set.
    pub fn for_type(field_type: FieldType, name: &str) -> Option<Operator> {
        let name = name.to_lowercase();
        match field_type {
            FieldType::Text => TextOp::from_name(&name).map(Operator::Text),
            FieldType::Number => NumberOp::from_name(&name).map(Operator::Number),
            FieldType::Date => DateOp::from_name(&name).map(Operator::Date),
            FieldType::Select => SelectOp::from_name(&name).map(Operator::Select),
            FieldType::Boolean => BooleanOp::from_name(&name).map(Operator::Boolean),
        }
    }

    /// Resolve an operator name for a specific field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperatorMismatch`] when the name is a real operator of
    /// another field type, and [`Error::UnknownOperator`] otherwise.
    pub fn parse_for(field: &str, field_type: FieldType, name: &str) -> Result<Operator> {
        if let Some(op) = Self::for_type(field_type, name) {
            return Ok(op);
        }
        if Self::is_known(name) {
            Err(Error::OperatorMismatch {
                field: field.to_string(),
                operator: name.to_string(),
                field_type,
                valid: Self::valid_names(field_type),
            })
        } else {
            Err(Error::UnknownOperator {
                operator: name.to_string(),
                valid: Self::valid_names(field_type),
            })
        }
    }

    fn is_known(name: &str) -> bool {
        [
            FieldType::Text,
            FieldType::Number,
            FieldType::Date,
            FieldType::Select,
            FieldType::Boolean,
        ]
        .into_iter()
        .any(|t| Self::for_type(t, name).is_some())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "operator_tests.rs"]
mod tests;
