use super::eval::eval_expr;
use super::{ConditionConfig, DataContext, FieldRegistry, Relation};
use itertools::Itertools;
use std::fmt;

/// A full evaluation report: the outcome of every branch (not just up to the
/// first match) plus the branch that would be taken.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTrace {
    pub branches: Vec<BranchOutcome>,
    pub chosen_id: String,
    pub chosen_label: String,
    pub is_default: bool,
}

/// Per-branch evaluation detail: one hit flag per condition expression, in
/// expression order, and the combined result under the branch's relation.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchOutcome {
    pub branch_id: String,
    pub label: String,
    pub relation: Relation,
    pub hits: Vec<bool>,
    pub matched: bool,
}

/// Evaluates every branch against the context and reports the decision.
/// The chosen branch is identical to what [`super::select_branch`] returns.
pub fn explain(
    config: &ConditionConfig,
    registry: &FieldRegistry,
    context: &DataContext,
) -> DecisionTrace {
    let mut branches = Vec::with_capacity(config.branches.len());
    let mut chosen: Option<&super::Branch> = None;

    for branch in &config.branches {
        let hits: Vec<bool> = branch
            .conditions
            .iter()
            .map(|expr| eval_expr(expr, registry, context))
            .collect();
        let matched = match branch.relation {
            Relation::And => hits.iter().all(|hit| *hit),
            Relation::Or => hits.iter().any(|hit| *hit),
        };
        if matched && chosen.is_none() {
            chosen = Some(branch);
        }
        branches.push(BranchOutcome {
            branch_id: branch.id.clone(),
            label: branch.label.clone(),
            relation: branch.relation,
            hits,
            matched,
        });
    }

    match chosen {
        Some(branch) => DecisionTrace {
            branches,
            chosen_id: branch.id.clone(),
            chosen_label: branch.label.clone(),
            is_default: false,
        },
        None => DecisionTrace {
            branches,
            chosen_id: config.default_branch.id.clone(),
            chosen_label: config.default_branch.label.clone(),
            is_default: true,
        },
    }
}

impl fmt::Display for DecisionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.branches {
            let hits = if outcome.hits.is_empty() {
                "no conditions".to_string()
            } else {
                outcome.hits.iter().map(bool::to_string).join(", ")
            };
            writeln!(
                f,
                "[{}] {} ({}: {})",
                if outcome.matched { "match" } else { "  -  " },
                outcome.label,
                outcome.relation,
                hits
            )?;
        }
        write!(
            f,
            "-> {} [{}]{}",
            self.chosen_label,
            self.chosen_id,
            if self.is_default { " (default)" } else { "" }
        )
    }
}
