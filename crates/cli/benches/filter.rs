// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for rule parsing and expression evaluation.

#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lq_core::{
    Connector, FieldCatalog, FieldDef, FieldType, FilterExpression, OptionItem, Record,
};
use lqrs::parse_rule;
use serde_json::json;

fn catalog() -> FieldCatalog {
    FieldCatalog::new(vec![
        FieldDef::new("name", "Name", FieldType::Text),
        FieldDef::new("value", "Value", FieldType::Number),
        FieldDef::new("created", "Created", FieldType::Date),
        FieldDef::new("status", "Status", FieldType::Select).with_options(vec![
            OptionItem::new("new", "New"),
            OptionItem::new("qualified", "Qualified"),
            OptionItem::new("won", "Won"),
        ]),
        FieldDef::new("hot", "Hot", FieldType::Boolean),
    ])
}

fn rule_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_parsing");
    let catalog = catalog();

    let inputs = [
        ("text", "name contains \"acme corp\""),
        ("number_between", "or value between 1000..5000"),
        ("date_range", "created in_range 2024-01-01..2024-03-31"),
        ("select_in", "status in new,qualified"),
        ("boolean", "hot is_true"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("parse_rule", name), input, |b, i| {
            b.iter(|| parse_rule(i, &catalog, Connector::And))
        });
    }
    group.finish();
}

fn expression_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("expression_evaluation");
    let catalog = catalog();

    let records: Vec<Record> = (0..1000)
        .map(|i| {
            Record::from_value(json!({
                "name": format!("Lead {i}"),
                "value": i * 10,
                "created": format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                "status": ["new", "qualified", "won"][i % 3],
                "hot": i % 2 == 0,
            }))
            .expect("object")
        })
        .collect();

    let rule_sets: [(&str, &[&str]); 3] = [
        ("single", &["value greater_than 5000"]),
        (
            "mixed_and",
            &[
                "name contains 9",
                "and status in new,won",
                "and created in_range 2024-03-01..2024-09-30",
            ],
        ),
        (
            "mixed_or",
            &["hot is_true", "or value between 100..200", "and name starts_with lead"],
        ),
    ];

    for (name, rules) in rule_sets {
        let mut expression = FilterExpression::new();
        for rule in rules {
            expression.push_rule(parse_rule(rule, &catalog, Connector::And).expect("valid rule"));
        }
        group.bench_function(BenchmarkId::new("evaluate_1000", name), |b| {
            b.iter(|| records.iter().filter(|r| expression.evaluate(r)).count())
        });
    }
    group.finish();
}

criterion_group!(benches, rule_parsing, expression_evaluation);
criterion_main!(benches);
