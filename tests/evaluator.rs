//! Condition evaluator semantics: first-match branch selection, per-type
//! operators, the absent-value policy, and totality.
mod common;
use common::*;
use shinsa::prelude::*;

#[test]
fn test_single_numeric_branch_first_match() {
    let registry = sample_registry();
    let config = condition_config(vec![branch(
        "b0",
        Relation::And,
        vec![expr("amount", Operator::Gt, FieldValue::from(10000.0))],
    )]);

    let selection = select_branch(&config, &registry, &context(&[("amount", FieldValue::from(15000.0))]));
    assert_eq!(selection.id(), "b0");
    assert!(!selection.is_default());

    let selection = select_branch(&config, &registry, &context(&[("amount", FieldValue::from(5000.0))]));
    assert!(selection.is_default());
    assert_eq!(selection.id(), "default");
}

#[test]
fn test_or_relation_matches_on_second_condition() {
    let registry = sample_registry();
    let config = condition_config(vec![branch(
        "fast-track",
        Relation::Or,
        vec![
            expr("level", Operator::Eq, FieldValue::from("p1")),
            expr("department", Operator::Eq, FieldValue::from("tech")),
        ],
    )]);

    let selection = select_branch(
        &config,
        &registry,
        &context(&[
            ("level", FieldValue::from("p2")),
            ("department", FieldValue::from("tech")),
        ]),
    );
    assert_eq!(selection.id(), "fast-track");

    let selection = select_branch(
        &config,
        &registry,
        &context(&[
            ("level", FieldValue::from("p2")),
            ("department", FieldValue::from("sales")),
        ]),
    );
    assert!(selection.is_default());
}

#[test]
fn test_first_match_wins_in_branch_order() {
    let registry = sample_registry();
    let config = condition_config(vec![
        branch(
            "first",
            Relation::And,
            vec![expr("amount", Operator::Gte, FieldValue::from(100.0))],
        ),
        branch(
            "second",
            Relation::And,
            vec![expr("amount", Operator::Gte, FieldValue::from(100.0))],
        ),
    ]);

    let selection = select_branch(&config, &registry, &context(&[("amount", FieldValue::from(200.0))]));
    assert_eq!(selection.id(), "first");
}

#[test]
fn test_empty_and_branch_is_vacuously_true() {
    let registry = sample_registry();
    let config = condition_config(vec![branch("unconditioned", Relation::And, vec![])]);
    let selection = select_branch(&config, &registry, &context(&[]));
    assert_eq!(selection.id(), "unconditioned");
}

#[test]
fn test_empty_or_branch_never_matches() {
    let registry = sample_registry();
    let config = condition_config(vec![branch("unreachable", Relation::Or, vec![])]);
    let selection = select_branch(&config, &registry, &context(&[]));
    assert!(selection.is_default());
}

#[test]
fn test_missing_value_fails_negated_operators_too() {
    let registry = sample_registry();
    // An absent context value is "unknown": it satisfies nothing, negated
    // operators included.
    let config = condition_config(vec![
        branch(
            "neq",
            Relation::And,
            vec![expr("level", Operator::Neq, FieldValue::from("p1"))],
        ),
        branch(
            "not-contains",
            Relation::And,
            vec![expr("level", Operator::NotContains, FieldValue::from("x"))],
        ),
        branch(
            "not-in",
            Relation::And,
            vec![expr(
                "category",
                Operator::NotIn,
                FieldValue::from(vec![FieldValue::from("it")]),
            )],
        ),
    ]);

    let selection = select_branch(&config, &registry, &context(&[]));
    assert!(selection.is_default());
}

#[test]
fn test_null_value_is_treated_as_missing() {
    let registry = sample_registry();
    let config = condition_config(vec![branch(
        "neq",
        Relation::And,
        vec![expr("level", Operator::Neq, FieldValue::from("p1"))],
    )]);
    let selection = select_branch(&config, &registry, &context(&[("level", FieldValue::Null)]));
    assert!(selection.is_default());
}

#[test]
fn test_between_is_inclusive_on_both_ends() {
    let registry = sample_registry();
    let config = condition_config(vec![branch(
        "band",
        Relation::And,
        vec![between("amount", FieldValue::from(10.0), FieldValue::from(20.0))],
    )]);

    for (value, expected) in [(9.99, false), (10.0, true), (15.0, true), (20.0, true), (20.01, false)] {
        let selection = select_branch(&config, &registry, &context(&[("amount", FieldValue::from(value))]));
        assert_eq!(selection.id() == "band", expected, "between with amount {}", value);
    }
}

#[test]
fn test_between_without_upper_bound_never_matches() {
    let registry = sample_registry();
    let config = condition_config(vec![branch(
        "band",
        Relation::And,
        vec![expr("amount", Operator::Between, FieldValue::from(10.0))],
    )]);
    let selection = select_branch(&config, &registry, &context(&[("amount", FieldValue::from(15.0))]));
    assert!(selection.is_default());
}

#[test]
fn test_string_operators_are_case_sensitive() {
    let registry = sample_registry();
    let ctx = context(&[("department", FieldValue::from("Engineering"))]);

    let matches = |operator, value: &str| {
        let config = condition_config(vec![branch(
            "b",
            Relation::And,
            vec![expr("department", operator, FieldValue::from(value))],
        )]);
        !select_branch(&config, &registry, &ctx).is_default()
    };

    assert!(matches(Operator::Contains, "gineer"));
    assert!(!matches(Operator::Contains, "GINEER"));
    assert!(matches(Operator::StartsWith, "Eng"));
    assert!(!matches(Operator::StartsWith, "eng"));
    assert!(matches(Operator::EndsWith, "ring"));
    assert!(matches(Operator::NotContains, "sales"));
}

#[test]
fn test_enum_membership() {
    let registry = sample_registry();
    let options = FieldValue::from(vec![FieldValue::from("it"), FieldValue::from("hr")]);

    let config = condition_config(vec![branch(
        "internal",
        Relation::And,
        vec![expr("category", Operator::In, options.clone())],
    )]);
    assert!(!select_branch(&config, &registry, &context(&[("category", FieldValue::from("it"))])).is_default());
    assert!(select_branch(&config, &registry, &context(&[("category", FieldValue::from("finance"))])).is_default());

    let config = condition_config(vec![branch(
        "external",
        Relation::And,
        vec![expr("category", Operator::NotIn, options)],
    )]);
    assert!(!select_branch(&config, &registry, &context(&[("category", FieldValue::from("finance"))])).is_default());
    assert!(select_branch(&config, &registry, &context(&[("category", FieldValue::from("hr"))])).is_default());
}

#[test]
fn test_boolean_operators() {
    let registry = sample_registry();
    let config = condition_config(vec![branch(
        "urgent",
        Relation::And,
        vec![expr("urgent", Operator::Eq, FieldValue::from(true))],
    )]);
    assert!(!select_branch(&config, &registry, &context(&[("urgent", FieldValue::from(true))])).is_default());
    assert!(select_branch(&config, &registry, &context(&[("urgent", FieldValue::from(false))])).is_default());
}

#[test]
fn test_date_comparison_with_default_format() {
    let registry = sample_registry();
    let config = condition_config(vec![branch(
        "after-cutoff",
        Relation::And,
        vec![expr("applyDate", Operator::Gt, FieldValue::from("2026-01-01"))],
    )]);

    assert!(!select_branch(&config, &registry, &context(&[("applyDate", FieldValue::from("2026-08-24"))])).is_default());
    assert!(select_branch(&config, &registry, &context(&[("applyDate", FieldValue::from("2025-12-31"))])).is_default());
    // Unparseable dates evaluate false instead of erroring.
    assert!(select_branch(&config, &registry, &context(&[("applyDate", FieldValue::from("24/08/2026"))])).is_default());
}

#[test]
fn test_date_comparison_with_custom_format() {
    let mut spec = FieldSpec::new("applyDate", "Apply Date", FieldType::Date);
    spec.format = Some("%d/%m/%Y".to_string());
    let registry = FieldRegistry::from_specs([spec]);

    let config = condition_config(vec![branch(
        "after-cutoff",
        Relation::And,
        vec![expr("applyDate", Operator::Gte, FieldValue::from("01/01/2026"))],
    )]);
    assert!(!select_branch(&config, &registry, &context(&[("applyDate", FieldValue::from("24/08/2026"))])).is_default());
    assert!(select_branch(&config, &registry, &context(&[("applyDate", FieldValue::from("31/12/2025"))])).is_default());
}

#[test]
fn test_operator_illegal_for_field_type_evaluates_false() {
    let registry = sample_registry();
    let config = condition_config(vec![branch(
        "b",
        Relation::And,
        vec![expr("amount", Operator::Contains, FieldValue::from("0"))],
    )]);
    let selection = select_branch(&config, &registry, &context(&[("amount", FieldValue::from(100.0))]));
    assert!(selection.is_default());
}

#[test]
fn test_unregistered_field_evaluates_false() {
    let registry = sample_registry();
    let config = condition_config(vec![branch(
        "b",
        Relation::And,
        vec![expr("unknown", Operator::Eq, FieldValue::from(1.0))],
    )]);
    let selection = select_branch(&config, &registry, &context(&[("unknown", FieldValue::from(1.0))]));
    assert!(selection.is_default());
}

#[test]
fn test_evaluation_is_deterministic_and_total() {
    let registry = sample_registry();
    // Deliberately messy config: wrong value types, missing bounds, unknown
    // fields. Evaluation must still produce exactly one branch, the same one
    // every time.
    let config = condition_config(vec![
        branch(
            "messy",
            Relation::Or,
            vec![
                expr("amount", Operator::Gt, FieldValue::from("not a number")),
                expr("urgent", Operator::Eq, FieldValue::from(12.0)),
                expr("ghost", Operator::Between, FieldValue::Null),
            ],
        ),
        branch(
            "sane",
            Relation::And,
            vec![expr("level", Operator::Eq, FieldValue::from("p3"))],
        ),
    ]);
    let ctx = context(&[
        ("amount", FieldValue::from(50.0)),
        ("urgent", FieldValue::from(true)),
        ("level", FieldValue::from("p3")),
    ]);

    let first = select_branch(&config, &registry, &ctx);
    assert_eq!(first.id(), "sane");
    for _ in 0..100 {
        assert_eq!(select_branch(&config, &registry, &ctx).id(), first.id());
    }
}

#[test]
fn test_explain_reports_all_branches() {
    let registry = sample_registry();
    let config = condition_config(vec![
        branch(
            "small",
            Relation::And,
            vec![expr("amount", Operator::Lt, FieldValue::from(100.0))],
        ),
        branch(
            "large",
            Relation::And,
            vec![expr("amount", Operator::Gte, FieldValue::from(100.0))],
        ),
    ]);
    let ctx = context(&[("amount", FieldValue::from(500.0))]);

    let trace = explain(&config, &registry, &ctx);
    assert_eq!(trace.branches.len(), 2);
    assert!(!trace.branches[0].matched);
    assert!(trace.branches[1].matched);
    assert_eq!(trace.chosen_id, "large");
    assert!(!trace.is_default);
    assert_eq!(trace.chosen_id, select_branch(&config, &registry, &ctx).id());

    let rendered = trace.to_string();
    assert!(rendered.contains("large"));
    assert!(rendered.contains("->"));

    let fallback = explain(&config, &registry, &context(&[]));
    assert!(fallback.is_default);
    assert_eq!(fallback.chosen_id, "default");
}
