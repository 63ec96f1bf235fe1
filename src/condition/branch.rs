use super::{FieldValue, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration of a condition node: explicit branches in evaluation
/// priority order (first match wins) plus exactly one default branch taken
/// when nothing matches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionConfig {
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub default_branch: DefaultBranch,
}

/// How a branch combines its condition expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Relation {
    #[default]
    And,
    Or,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::And => write!(f, "AND"),
            Relation::Or => write!(f, "OR"),
        }
    }
}

/// A named, conditionally-selected outgoing path from a condition node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub relation: Relation,
    #[serde(default)]
    pub conditions: Vec<ConditionExpr>,
}

/// A single `{field, operator, value}` test against the data context.
/// `value_end` is the inclusive upper bound for `between`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionExpr {
    #[serde(default)]
    pub id: String,
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: FieldValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_end: Option<FieldValue>,
}

/// The fallback branch taken when no explicit branch matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultBranch {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for DefaultBranch {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            label: "Default".to_string(),
            description: None,
        }
    }
}
