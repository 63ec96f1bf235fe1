use super::Operator;
use crate::error::RegistryError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The type of an evaluable field, restricting which operators are legal and
/// how context values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "enum")]
    Choice,
}

impl FieldType {
    /// The operator legality table. The property editors enforce this in the
    /// UI; the evaluator re-checks it defensively.
    pub fn supports(&self, operator: Operator) -> bool {
        use Operator::*;
        match self {
            FieldType::Number | FieldType::Date | FieldType::DateTime => {
                matches!(operator, Eq | Neq | Gt | Lt | Gte | Lte | Between)
            }
            FieldType::Text => {
                matches!(operator, Eq | Neq | Contains | NotContains | StartsWith | EndsWith)
            }
            FieldType::Boolean => matches!(operator, Eq | Neq),
            FieldType::Choice => matches!(operator, In | NotIn),
        }
    }
}

/// One selectable option of an enum field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumOption {
    pub value: String,
    #[serde(default)]
    pub label: String,
}

/// A typed field descriptor consulted when evaluating condition expressions.
/// `key` is the lookup key into the runtime data context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<EnumOption>,
    /// chrono format string for `date`/`datetime` fields; sensible per-type
    /// defaults apply when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            min: None,
            max: None,
            precision: None,
            unit: None,
            options: Vec::new(),
            format: None,
            max_length: None,
        }
    }
}

/// The fixed catalog of evaluable fields, supplied by deployment-time
/// configuration rather than carried in the graph document.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: AHashMap<String, FieldSpec>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs(specs: impl IntoIterator<Item = FieldSpec>) -> Self {
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec);
        }
        registry
    }

    /// Parses a registry from a JSON array of field specs.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let specs: Vec<FieldSpec> =
            serde_json::from_str(json).map_err(|e| RegistryError::JsonParse(e.to_string()))?;
        Ok(Self::from_specs(specs))
    }

    /// Registers a spec, replacing any previous spec with the same key.
    pub fn register(&mut self, spec: FieldSpec) {
        self.fields.insert(spec.key.clone(), spec);
    }

    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.get(key)
    }

    /// Whether the operator is legal for the field's declared type. Unknown
    /// keys allow nothing.
    pub fn allows(&self, key: &str, operator: Operator) -> bool {
        self.get(key)
            .is_some_and(|spec| spec.field_type.supports(operator))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }
}
