use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed connection between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: Self::fresh_id(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub(crate) fn fresh_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// A proposed, not-yet-validated connection between two node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub source: String,
    pub target: String,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
