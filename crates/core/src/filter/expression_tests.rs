// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::catalog::{FieldType, OptionItem};
use crate::filter::condition::NumberValue;
use crate::filter::operator::{DateOp, NumberOp, SelectOp, TextOp};
use crate::filter::rule::Connector;
use crate::range::DateTimeRange;
use chrono::NaiveDate;
use serde_json::json;

fn catalog() -> FieldCatalog {
    FieldCatalog::new(vec![
        FieldDef::new("name", "Name", FieldType::Text),
        FieldDef::new("value", "Deal value", FieldType::Number),
        FieldDef::new("created", "Created", FieldType::Date),
        FieldDef::new("status", "Status", FieldType::Select).with_options(vec![
            OptionItem::new("new", "New"),
            OptionItem::new("won", "Won"),
        ]),
        FieldDef::new("hot", "Hot lead", FieldType::Boolean),
    ])
}

fn record(value: serde_json::Value) -> Record {
    Record::from_value(value).unwrap()
}

fn rule(field: &str, condition: Condition, connector: Connector) -> FilterRule {
    FilterRule::new("", field, condition).with_connector(connector)
}

fn text_rule(value: &str, connector: Connector) -> FilterRule {
    rule(
        "name",
        Condition::Text {
            op: TextOp::Contains,
            value: value.into(),
        },
        connector,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Evaluation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_expression_matches_everything() {
    let expr = FilterExpression::new();
    assert!(expr.evaluate(&record(json!({}))));
    assert!(expr.evaluate(&record(json!({"name": "anything"}))));
}

#[test]
fn evaluation_is_left_associative() {
    // false AND false OR true
    // left fold: (false AND false) OR true = true
    // right grouping would give: false AND (false OR true) = false
    let expr = FilterExpression::from_rules(vec![
        text_rule("globex", Connector::And),
        text_rule("initech", Connector::And),
        text_rule("acme", Connector::Or),
    ]);
    assert!(expr.evaluate(&record(json!({"name": "ACME"}))));
}

#[test]
fn and_after_or_applies_to_everything_before() {
    // true OR true AND false = (true OR true) AND false = false
    let expr = FilterExpression::from_rules(vec![
        text_rule("ac", Connector::And),
        text_rule("me", Connector::Or),
        text_rule("zzz", Connector::And),
    ]);
    assert!(!expr.evaluate(&record(json!({"name": "ACME"}))));
}

#[test]
fn first_connector_is_ignored() {
    let expr = FilterExpression::from_rules(vec![text_rule("acme", Connector::Or)]);
    assert!(!expr.evaluate(&record(json!({"name": "Globex"}))));
    assert!(expr.evaluate(&record(json!({"name": "Acme"}))));
}

#[test]
fn mixed_types_combine() {
    let expr = FilterExpression::from_rules(vec![
        rule(
            "value",
            Condition::Number {
                op: NumberOp::GreaterEqual,
                value: NumberValue::single(1000.0),
            },
            Connector::And,
        ),
        rule(
            "status",
            Condition::Select {
                op: SelectOp::In,
                value: vec!["new".into(), "won".into()],
            },
            Connector::And,
        ),
    ]);
    assert!(expr.evaluate(&record(json!({"value": 2500, "status": "won"}))));
    assert!(!expr.evaluate(&record(json!({"value": 500, "status": "won"}))));
    assert!(!expr.evaluate(&record(json!({"value": 2500}))));
}

// ─────────────────────────────────────────────────────────────────────────────
// Mutation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn add_rule_defaults_to_first_field() {
    let mut expr = FilterExpression::new();
    let rule = expr.add_rule(&catalog()).unwrap().clone();
    assert_eq!(rule.field, "name");
    assert_eq!(rule.connector, Connector::And);
    assert_eq!(
        rule.condition,
        Condition::Text {
            op: TextOp::Contains,
            value: String::new()
        }
    );
    assert_eq!(expr.len(), 1);
}

#[test]
fn add_rule_with_empty_catalog_fails() {
    let mut expr = FilterExpression::new();
    let err = expr.add_rule(&FieldCatalog::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog));
    assert!(expr.is_empty());
}

#[test]
fn remove_then_add_appends_with_fresh_id() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    for _ in 0..3 {
        expr.add_rule(&catalog).unwrap();
    }
    let removed = expr.remove_rule(1).unwrap();
    assert_eq!(removed.id, "r2");
    assert_eq!(expr.len(), 2);

    let added = expr.add_rule(&catalog).unwrap().id.clone();
    assert_eq!(expr.len(), 3);
    assert_eq!(expr.rules().last().unwrap().id, added);
    assert_ne!(added, "r2");
    let ids: Vec<_> = expr.rules().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r1", "r3", "r4"]);
}

#[test]
fn remove_out_of_bounds_is_noop() {
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog()).unwrap();
    assert!(expr.remove_rule(5).is_none());
    assert_eq!(expr.len(), 1);
}

#[test]
fn from_rules_does_not_reuse_loaded_ids() {
    let mut loaded = text_rule("acme", Connector::And);
    loaded.id = "r2".into();
    let mut expr = FilterExpression::from_rules(vec![loaded]);
    let id = expr.add_rule(&catalog()).unwrap().id.clone();
    assert_eq!(id, "r3");
}

#[test]
fn changing_field_from_date_to_text_resets_value_and_operator() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog).unwrap();
    expr.update_rule(&catalog, 0, RulePatch::new().field("created"))
        .unwrap();
    let range = DateTimeRange::single(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    expr.update_rule(
        &catalog,
        0,
        RulePatch::new()
            .operator(Operator::Date(DateOp::InRange))
            .value(RuleValue::Dates(range)),
    )
    .unwrap();

    expr.update_rule(&catalog, 0, RulePatch::new().field("name"))
        .unwrap();

    assert_eq!(
        expr.rules()[0].condition,
        Condition::Text {
            op: TextOp::Contains,
            value: String::new()
        }
    );
}

#[test]
fn patching_same_field_keeps_condition() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog).unwrap();
    expr.update_rule(
        &catalog,
        0,
        RulePatch::new().value(RuleValue::Text("acme".into())),
    )
    .unwrap();
    expr.update_rule(&catalog, 0, RulePatch::new().field("name"))
        .unwrap();
    assert!(matches!(
        &expr.rules()[0].condition,
        Condition::Text { value, .. } if value == "acme"
    ));
}

#[test]
fn field_and_operator_in_one_patch() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog).unwrap();
    expr.update_rule(
        &catalog,
        0,
        RulePatch::new()
            .field("value")
            .operator(Operator::Number(NumberOp::Between))
            .value(RuleValue::Number(NumberValue::between(10.0, 20.0)))
            .connector(Connector::Or),
    )
    .unwrap();
    let rule = &expr.rules()[0];
    assert_eq!(rule.field, "value");
    assert_eq!(rule.connector, Connector::Or);
    assert_eq!(rule.condition.operator(), Operator::Number(NumberOp::Between));
}

#[test]
fn reversed_date_range_is_stored_start_first() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog).unwrap();
    let reversed = DateTimeRange {
        start_date: NaiveDate::from_ymd_opt(2024, 3, 10),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 2),
        start_time: Some("17:00".into()),
        end_time: None,
    };
    expr.update_rule(
        &catalog,
        0,
        RulePatch::new()
            .field("created")
            .operator(Operator::Date(DateOp::Between))
            .value(RuleValue::Dates(reversed)),
    )
    .unwrap();

    let Condition::Date { value, .. } = &expr.rules()[0].condition else {
        panic!("expected a date condition");
    };
    assert_eq!(value.start_date, NaiveDate::from_ymd_opt(2024, 3, 2));
    assert_eq!(value.end_date, NaiveDate::from_ymd_opt(2024, 3, 10));
    assert_eq!(value.start_time, None);
    assert_eq!(value.end_time.as_deref(), Some("17:00"));
    assert!(expr.evaluate(&record(json!({"created": "2024-03-05"}))));
    assert!(expr.validate(&catalog).is_ok());
}

#[test]
fn mismatched_operator_is_rejected_and_rule_unchanged() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog).unwrap();
    let before = expr.clone();

    let err = expr
        .update_rule(
            &catalog,
            0,
            RulePatch::new()
                .connector(Connector::Or)
                .operator(Operator::Number(NumberOp::GreaterThan)),
        )
        .unwrap_err();

    assert!(matches!(err, Error::OperatorMismatch { .. }));
    assert_eq!(expr, before);
}

#[test]
fn mismatched_value_is_rejected() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog).unwrap();
    let err = expr
        .update_rule(
            &catalog,
            0,
            RulePatch::new().value(RuleValue::Number(NumberValue::single(3.0))),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ValueMismatch { value_kind: "number", field_type: FieldType::Text, .. }
    ));
}

#[test]
fn unknown_field_is_rejected() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog).unwrap();
    let err = expr
        .update_rule(&catalog, 0, RulePatch::new().field("budget"))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownField(f) if f == "budget"));
}

#[test]
fn unknown_select_option_is_rejected() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog).unwrap();
    expr.update_rule(&catalog, 0, RulePatch::new().field("status"))
        .unwrap();
    let err = expr
        .update_rule(
            &catalog,
            0,
            RulePatch::new().value(RuleValue::Options(vec!["lost".into()])),
        )
        .unwrap_err();
    assert!(matches!(err, Error::UnknownOption { value, .. } if value == "lost"));
}

#[test]
fn update_out_of_bounds_is_noop() {
    let catalog = catalog();
    let mut expr = FilterExpression::new();
    expr.add_rule(&catalog).unwrap();
    let before = expr.clone();
    expr.update_rule(&catalog, 3, RulePatch::new().field("value"))
        .unwrap();
    assert_eq!(expr, before);
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_matching_types() {
    let expr = FilterExpression::from_rules(vec![
        text_rule("acme", Connector::And),
        rule(
            "hot",
            Condition::Boolean {
                op: crate::filter::operator::BooleanOp::IsTrue,
            },
            Connector::Or,
        ),
    ]);
    assert!(expr.validate(&catalog()).is_ok());
}

#[test]
fn validate_rejects_condition_of_wrong_type() {
    let expr = FilterExpression::from_rules(vec![rule(
        "value",
        Condition::Text {
            op: TextOp::Contains,
            value: "1".into(),
        },
        Connector::And,
    )]);
    let err = expr.validate(&catalog()).unwrap_err();
    assert!(matches!(
        err,
        Error::OperatorMismatch { field_type: FieldType::Number, .. }
    ));
}

#[test]
fn validate_rejects_unknown_field() {
    let expr = FilterExpression::from_rules(vec![rule(
        "budget",
        Condition::empty(FieldType::Number),
        Connector::And,
    )]);
    assert!(matches!(
        expr.validate(&catalog()),
        Err(Error::UnknownField(_))
    ));
}

#[test]
fn validate_rejects_reversed_date_range() {
    let reversed = DateTimeRange {
        start_date: NaiveDate::from_ymd_opt(2024, 3, 10),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 2),
        ..DateTimeRange::default()
    };
    let expr = FilterExpression::from_rules(vec![rule(
        "created",
        Condition::Date {
            op: DateOp::InRange,
            value: reversed,
        },
        Connector::And,
    )]);
    let err = expr.validate(&catalog()).unwrap_err();
    assert!(matches!(err, Error::ReversedRange { ref field, .. } if field == "created"));
    assert!(err.to_string().contains("2024-03-10..2024-03-02"));
}
