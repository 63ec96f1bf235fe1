//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so callers can get
//! at the graph store, the condition evaluator, and the document layer with a
//! single import.
//!
//! # Example
//!
//! ```rust
//! use shinsa::prelude::*;
//!
//! let mut store = GraphStore::new();
//! let approval = store.add_node(NodeKind::Approval, Position::default());
//! assert!(store.connect(Link::new(START_NODE_ID, approval.id.clone())));
//! ```

// Graph store and node/edge model
pub use crate::graph::{
    ApprovalConfig, ApprovalMode, ApprovalPatch, ApproverType, ConfigPatch, ConditionPatch, Edge,
    GraphStore, Link, MergeRule, Node, NodeConfig, NodeKind, NodePatch, ParallelConfig,
    ParallelPatch, ParallelStrategy, Position, START_NODE_ID, TimeoutAction, TimeoutConfig,
    validate_connection,
};

// Condition sub-model and evaluator
pub use crate::condition::{
    Branch, BranchOutcome, ConditionConfig, ConditionExpr, DataContext, DecisionTrace,
    DefaultBranch, EnumOption, FieldRegistry, FieldSpec, FieldType, FieldValue, Operator, Relation,
    Selection, eval_expr, explain, select_branch,
};

// Document layer
pub use crate::document::GraphDocument;

// Error types
pub use crate::error::{ConnectionRejection, DocumentError, RegistryError};

// Hash map used for data contexts throughout this crate
pub use ahash::AHashMap;
