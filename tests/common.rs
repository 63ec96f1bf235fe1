//! Shared builders for graph and condition tests.
use shinsa::prelude::*;

/// Registry with one field of every type, roughly what an approval-form
/// deployment would configure.
#[allow(dead_code)]
pub fn sample_registry() -> FieldRegistry {
    let mut amount = FieldSpec::new("amount", "Amount", FieldType::Number);
    amount.min = Some(0.0);
    amount.precision = Some(2);

    let mut category = FieldSpec::new("category", "Category", FieldType::Choice);
    category.options = vec![
        EnumOption {
            value: "it".to_string(),
            label: "IT".to_string(),
        },
        EnumOption {
            value: "hr".to_string(),
            label: "HR".to_string(),
        },
        EnumOption {
            value: "finance".to_string(),
            label: "Finance".to_string(),
        },
    ];

    FieldRegistry::from_specs([
        amount,
        FieldSpec::new("level", "Level", FieldType::Text),
        FieldSpec::new("department", "Department", FieldType::Text),
        FieldSpec::new("urgent", "Urgent", FieldType::Boolean),
        category,
        FieldSpec::new("applyDate", "Apply Date", FieldType::Date),
    ])
}

#[allow(dead_code)]
pub fn expr(field: &str, operator: Operator, value: FieldValue) -> ConditionExpr {
    ConditionExpr {
        id: format!("{}-{}", field, operator),
        field: field.to_string(),
        operator,
        value,
        value_end: None,
    }
}

#[allow(dead_code)]
pub fn between(field: &str, low: FieldValue, high: FieldValue) -> ConditionExpr {
    ConditionExpr {
        id: format!("{}-between", field),
        field: field.to_string(),
        operator: Operator::Between,
        value: low,
        value_end: Some(high),
    }
}

#[allow(dead_code)]
pub fn branch(id: &str, relation: Relation, conditions: Vec<ConditionExpr>) -> Branch {
    Branch {
        id: id.to_string(),
        label: id.to_string(),
        description: None,
        relation,
        conditions,
    }
}

#[allow(dead_code)]
pub fn condition_config(branches: Vec<Branch>) -> ConditionConfig {
    ConditionConfig {
        branches,
        default_branch: DefaultBranch::default(),
    }
}

#[allow(dead_code)]
pub fn context(pairs: &[(&str, FieldValue)]) -> DataContext {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// start -> approval pipeline; returns the store and the approval node id.
#[allow(dead_code)]
pub fn approval_pipeline() -> (GraphStore, String) {
    let mut store = GraphStore::new();
    let approval = store.add_node(NodeKind::Approval, Position::new(0.0, 120.0));
    assert!(store.connect(Link::new(START_NODE_ID, approval.id.clone())));
    (store, approval.id)
}
