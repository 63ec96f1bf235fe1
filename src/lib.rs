//! # Shinsa - Workflow Graph Model and Condition-Branch Evaluation
//!
//! **Shinsa** is the in-memory core of a workflow (BPM) designer: a directed
//! graph of typed nodes (start, approval, condition, parallel, subprocess,
//! cc, end) whose mutations all flow through a single [`graph::GraphStore`],
//! a connection validator enforcing the pipeline's shape rules, a total
//! condition-branch evaluator, and a portable `{nodes, edges}` JSON document.
//!
//! ## Core Workflow
//!
//! 1.  **Edit the graph**: a designer surface (out of scope here) calls the
//!     store's mutation operations; every proposed edge is checked by the
//!     connection validator before it is committed.
//! 2.  **Export**: [`graph::GraphStore::export`] produces a
//!     [`document::GraphDocument`] snapshot, serialized to JSON for
//!     persistence or transfer to an execution engine.
//! 3.  **Evaluate**: when a workflow instance reaches a condition node, the
//!     engine calls [`condition::select_branch`] with the node's branch
//!     configuration, the deployment-time [`condition::FieldRegistry`], and
//!     the instance's data context. The result is always exactly one branch;
//!     the default branch makes evaluation total.
//!
//! ## Quick Start
//!
//! ```rust
//! use shinsa::prelude::*;
//!
//! // Build a small pipeline: start -> condition -> approval.
//! let mut store = GraphStore::new();
//! let condition = store.add_node(NodeKind::Condition, Position::new(0.0, 120.0));
//! let approval = store.add_node(NodeKind::Approval, Position::new(0.0, 240.0));
//! assert!(store.connect(Link::new(START_NODE_ID, condition.id.clone())));
//! assert!(store.connect(Link::new(condition.id.clone(), approval.id.clone())));
//!
//! // Configure the condition node: amounts above 10000 take the "large" branch.
//! let branch = Branch {
//!     id: "large".to_string(),
//!     label: "Large".to_string(),
//!     description: None,
//!     relation: Relation::And,
//!     conditions: vec![ConditionExpr {
//!         id: "c1".to_string(),
//!         field: "amount".to_string(),
//!         operator: Operator::Gt,
//!         value: FieldValue::from(10000.0),
//!         value_end: None,
//!     }],
//! };
//! store.update_node(
//!     &condition.id,
//!     NodePatch {
//!         config: Some(ConfigPatch::Condition(ConditionPatch {
//!             branches: Some(vec![branch]),
//!             default_branch: None,
//!         })),
//!         ..NodePatch::default()
//!     },
//! );
//!
//! // Evaluate against a runtime data context.
//! let registry = FieldRegistry::from_specs([FieldSpec::new("amount", "Amount", FieldType::Number)]);
//! let mut context = DataContext::default();
//! context.insert("amount".to_string(), FieldValue::from(15000.0));
//!
//! let node = store.node(&condition.id).unwrap();
//! if let NodeConfig::Condition(config) = &node.config {
//!     let selection = select_branch(config, &registry, &context);
//!     assert_eq!(selection.id(), "large");
//!     assert!(!selection.is_default());
//! }
//!
//! // The exported document round-trips through JSON.
//! let json = store.export().to_json().unwrap();
//! assert!(GraphDocument::from_json(&json).is_ok());
//! ```

pub mod condition;
pub mod document;
pub mod error;
pub mod graph;
pub mod prelude;
