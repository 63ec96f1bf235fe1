use super::{
    Branch, ConditionConfig, ConditionExpr, DataContext, DefaultBranch, FieldRegistry, FieldSpec,
    FieldType, FieldValue, Operator, Relation,
};
use chrono::{NaiveDate, NaiveDateTime};

/// The branch chosen for a data context: either an explicit branch or the
/// condition node's default branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    Branch(&'a Branch),
    Fallback(&'a DefaultBranch),
}

impl<'a> Selection<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Selection::Branch(branch) => &branch.id,
            Selection::Fallback(default) => &default.id,
        }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            Selection::Branch(branch) => &branch.label,
            Selection::Fallback(default) => &default.label,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Selection::Fallback(_))
    }
}

/// Determines which single branch a data context satisfies. First match in
/// branch list order wins; the default branch makes the result total — this
/// function never fails and is deterministic for identical inputs.
pub fn select_branch<'a>(
    config: &'a ConditionConfig,
    registry: &FieldRegistry,
    context: &DataContext,
) -> Selection<'a> {
    for branch in &config.branches {
        if branch_matches(branch, registry, context) {
            return Selection::Branch(branch);
        }
    }
    Selection::Fallback(&config.default_branch)
}

/// `AND` over zero conditions is vacuously true (an unconditioned branch
/// matches when reached); `OR` over zero conditions is false.
pub(crate) fn branch_matches(
    branch: &Branch,
    registry: &FieldRegistry,
    context: &DataContext,
) -> bool {
    match branch.relation {
        Relation::And => branch
            .conditions
            .iter()
            .all(|expr| eval_expr(expr, registry, context)),
        Relation::Or => branch
            .conditions
            .iter()
            .any(|expr| eval_expr(expr, registry, context)),
    }
}

/// Evaluates a single condition expression against the data context.
///
/// An absent or null context value is treated as "unknown" and satisfies no
/// operator, the negated ones (`neq`, `not_contains`, `not_in`) included.
/// Unknown field keys, operators illegal for the field's type, and
/// unparseable date values likewise evaluate to false rather than erroring.
pub fn eval_expr(expr: &ConditionExpr, registry: &FieldRegistry, context: &DataContext) -> bool {
    let Some(spec) = registry.get(&expr.field) else {
        return false;
    };
    if !spec.field_type.supports(expr.operator) {
        return false;
    }
    let Some(actual) = context.get(&expr.field) else {
        return false;
    };
    if actual.is_null() {
        return false;
    }

    match spec.field_type {
        FieldType::Number => match actual.as_number() {
            Some(actual) => eval_ordered(
                expr.operator,
                actual,
                expr.value.as_number(),
                expr.value_end.as_ref().and_then(FieldValue::as_number),
            ),
            None => false,
        },
        FieldType::Date | FieldType::DateTime => match date_ordinal(actual, spec) {
            Some(actual) => eval_ordered(
                expr.operator,
                actual,
                date_ordinal(&expr.value, spec),
                expr.value_end.as_ref().and_then(|v| date_ordinal(v, spec)),
            ),
            None => false,
        },
        FieldType::Text => match actual.as_text() {
            Some(actual) => eval_text(expr.operator, actual, expr.value.as_text()),
            None => false,
        },
        FieldType::Boolean => match (actual.as_bool(), expr.value.as_bool()) {
            (Some(actual), Some(expected)) => match expr.operator {
                Operator::Eq => actual == expected,
                Operator::Neq => actual != expected,
                _ => false,
            },
            _ => false,
        },
        FieldType::Choice => match &expr.value {
            FieldValue::List(options) => match expr.operator {
                Operator::In => options.contains(actual),
                Operator::NotIn => !options.contains(actual),
                _ => false,
            },
            _ => false,
        },
    }
}

/// Natural-ordering comparison for numbers and date ordinals. `between` is
/// inclusive on both ends and requires the upper bound.
fn eval_ordered(operator: Operator, actual: f64, bound: Option<f64>, upper: Option<f64>) -> bool {
    let Some(bound) = bound else {
        return false;
    };
    match operator {
        Operator::Eq => actual == bound,
        Operator::Neq => actual != bound,
        Operator::Gt => actual > bound,
        Operator::Lt => actual < bound,
        Operator::Gte => actual >= bound,
        Operator::Lte => actual <= bound,
        Operator::Between => upper.is_some_and(|upper| bound <= actual && actual <= upper),
        _ => false,
    }
}

/// Case-sensitive string tests.
fn eval_text(operator: Operator, actual: &str, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return false;
    };
    match operator {
        Operator::Eq => actual == expected,
        Operator::Neq => actual != expected,
        Operator::Contains => actual.contains(expected),
        Operator::NotContains => !actual.contains(expected),
        Operator::StartsWith => actual.starts_with(expected),
        Operator::EndsWith => actual.ends_with(expected),
        _ => false,
    }
}

/// Maps a date/datetime value onto a comparable unix-seconds ordinal. Numbers
/// pass through as-is; text is parsed with the field's chrono format.
fn date_ordinal(value: &FieldValue, spec: &FieldSpec) -> Option<f64> {
    match value {
        FieldValue::Number(n) => Some(*n),
        FieldValue::Text(s) => parse_date_text(s, spec),
        _ => None,
    }
}

fn parse_date_text(text: &str, spec: &FieldSpec) -> Option<f64> {
    match spec.field_type {
        FieldType::Date => {
            let format = spec.format.as_deref().unwrap_or("%Y-%m-%d");
            let date = NaiveDate::parse_from_str(text, format).ok()?;
            let midnight = date.and_hms_opt(0, 0, 0)?;
            Some(midnight.and_utc().timestamp() as f64)
        }
        FieldType::DateTime => {
            let datetime = match spec.format.as_deref() {
                Some(format) => NaiveDateTime::parse_from_str(text, format).ok()?,
                None => NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
                    .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
                    .ok()?,
            };
            Some(datetime.and_utc().timestamp() as f64)
        }
        _ => None,
    }
}
