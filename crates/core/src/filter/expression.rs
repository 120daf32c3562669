// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered rule lists and their left-to-right evaluation.

use crate::catalog::{FieldCatalog, FieldDef};
use crate::error::{Error, Result};
use crate::range::DateTimeRange;

use super::condition::{Condition, RuleValue};
use super::operator::Operator;
use super::rule::{FilterRule, Record, RulePatch};

/// An ordered list of rules owned by one hosting screen.
///
/// Rules are combined strictly left to right: `r1 AND r2 OR r3` evaluates
/// as `(r1 AND r2) OR r3`. An empty expression matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterExpression {
    rules: Vec<FilterRule>,
    next_id: u64,
}

impl FilterExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing rule list, e.g. one loaded from a saved filter.
    pub fn from_rules(rules: Vec<FilterRule>) -> Self {
        let next_id = rules.len() as u64;
        FilterExpression { rules, next_id }
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<FilterRule> {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Append a rule on the catalog's first field with that field type's
    /// default operator and an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] if the catalog has no fields.
    pub fn add_rule(&mut self, catalog: &FieldCatalog) -> Result<&FilterRule> {
        let field = catalog.first().ok_or(Error::EmptyCatalog)?;
        let rule = FilterRule::new(
            self.fresh_id(),
            field.value.clone(),
            Condition::empty(field.field_type),
        );
        tracing::debug!(id = %rule.id, field = %rule.field, "add rule");
        self.rules.push(rule);
        let index = self.rules.len() - 1;
        Ok(&self.rules[index])
    }

    /// Append a fully built rule, assigning it a fresh id.
    pub fn push_rule(&mut self, mut rule: FilterRule) -> &FilterRule {
        rule.id = self.fresh_id();
        self.rules.push(rule);
        let index = self.rules.len() - 1;
        &self.rules[index]
    }

    /// Merge `patch` into the rule at `index`.
    ///
    /// Changing the field resets the operator and value to the new field
    /// type's defaults before the rest of the patch applies. An index past
    /// the end is ignored.
    ///
    /// # Errors
    ///
    /// Fails without touching the rule when the patch names an unknown
    /// field, an operator or value of the wrong type, or a select option the
    /// field does not offer.
    pub fn update_rule(
        &mut self,
        catalog: &FieldCatalog,
        index: usize,
        patch: RulePatch,
    ) -> Result<()> {
        let Some(current) = self.rules.get(index) else {
            tracing::warn!(index, len = self.rules.len(), "update_rule: index out of bounds");
            return Ok(());
        };
        let mut next = current.clone();

        if let Some(field) = patch.field {
            if field != next.field {
                let def = catalog.require(&field)?;
                next.condition = Condition::empty(def.field_type);
                next.field = field;
            }
        }

        if let Some(op) = patch.operator {
            next.condition = next.condition.with_operator(op).ok_or_else(|| {
                let field_type = next.condition.field_type();
                Error::OperatorMismatch {
                    field: next.field.clone(),
                    operator: op.as_str().to_string(),
                    field_type,
                    valid: Operator::valid_names(field_type),
                }
            })?;
        }

        if let Some(value) = patch.value {
            if let (RuleValue::Options(chosen), Some(def)) = (&value, catalog.get(&next.field)) {
                check_options(def, chosen)?;
            }
            let kind = value.kind();
            next.condition =
                next.condition
                    .with_value(value)
                    .ok_or_else(|| Error::ValueMismatch {
                        field: next.field.clone(),
                        field_type: next.condition.field_type(),
                        value_kind: kind,
                    })?;
        }

        if let Some(connector) = patch.connector {
            next.connector = connector;
        }

        tracing::debug!(index, id = %next.id, field = %next.field, op = %next.condition.operator(), "update rule");
        if let Some(slot) = self.rules.get_mut(index) {
            *slot = next;
        }
        Ok(())
    }

    /// Remove the rule at `index`, shifting later rules down. An index past
    /// the end is ignored.
    pub fn remove_rule(&mut self, index: usize) -> Option<FilterRule> {
        if index >= self.rules.len() {
            tracing::warn!(index, len = self.rules.len(), "remove_rule: index out of bounds");
            return None;
        }
        let rule = self.rules.remove(index);
        tracing::debug!(index, id = %rule.id, "remove rule");
        Some(rule)
    }

    /// Fold the rules left to right over a record.
    pub fn evaluate(&self, record: &Record) -> bool {
        let mut rules = self.rules.iter();
        let Some(first) = rules.next() else {
            return true;
        };
        rules.fold(first.matches(record), |acc, rule| {
            rule.connector.combine(acc, rule.matches(record))
        })
    }

    /// Check every rule against the catalog: the field must exist, the
    /// condition must have the field's type, chosen select options must be
    /// offered by the field and date ranges must not end before they start.
    pub fn validate(&self, catalog: &FieldCatalog) -> Result<()> {
        for rule in &self.rules {
            let def = catalog.require(&rule.field)?;
            let op = rule.condition.operator();
            if op.field_type() != def.field_type {
                return Err(Error::OperatorMismatch {
                    field: rule.field.clone(),
                    operator: op.as_str().to_string(),
                    field_type: def.field_type,
                    valid: Operator::valid_names(def.field_type),
                });
            }
            match &rule.condition {
                Condition::Select { value, .. } => check_options(def, value)?,
                Condition::Date { value, .. } => check_range(&rule.field, value)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn fresh_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("r{}", self.next_id);
            if !self.rules.iter().any(|r| r.id == id) {
                return id;
            }
        }
    }
}

fn check_options(def: &FieldDef, chosen: &[String]) -> Result<()> {
    chosen.iter().try_for_each(|value| def.check_option(value))
}

fn check_range(field: &str, range: &DateTimeRange) -> Result<()> {
    match (range.start_date, range.end_date) {
        (Some(start), Some(end)) if end < start => Err(Error::ReversedRange {
            field: field.to_string(),
            start,
            end,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;
