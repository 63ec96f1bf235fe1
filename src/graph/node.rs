use crate::condition::{Branch, ConditionConfig, DefaultBranch};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed id of the start node every fresh graph begins with.
pub const START_NODE_ID: &str = "start";

/// The node type taxonomy. A node's kind is fixed at creation and determines
/// which configuration shape is valid for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Approval,
    Condition,
    Parallel,
    Subprocess,
    Cc,
    End,
}

impl NodeKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            NodeKind::Start => "Start",
            NodeKind::Approval => "Approval",
            NodeKind::Condition => "Condition",
            NodeKind::Parallel => "Parallel",
            NodeKind::Subprocess => "Subprocess",
            NodeKind::Cc => "CC",
            NodeKind::End => "End",
        }
    }

    /// The default configuration a freshly added node of this kind carries.
    pub fn default_config(&self) -> NodeConfig {
        match self {
            NodeKind::Approval => NodeConfig::Approval(ApprovalConfig::default()),
            NodeKind::Condition => NodeConfig::Condition(ConditionConfig::default()),
            NodeKind::Parallel => NodeConfig::Parallel(ParallelConfig::default()),
            _ => NodeConfig::Empty,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Canvas coordinate, stored with the node so layouts survive export/import.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A vertex in the workflow graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub description: Option<String>,
    pub position: Position,
    pub config: NodeConfig,
}

impl Node {
    /// The canonical start node present in every fresh graph.
    pub fn start() -> Self {
        Self {
            id: START_NODE_ID.to_string(),
            kind: NodeKind::Start,
            label: NodeKind::Start.display_name().to_string(),
            description: None,
            position: Position::default(),
            config: NodeConfig::Empty,
        }
    }

    /// Creates a node with a fresh unique id and the kind's default config.
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            label: kind.display_name().to_string(),
            description: None,
            position,
            config: kind.default_config(),
        }
    }

    /// Whether this node may receive more than one incoming edge: `parallel`
    /// and `end` nodes always, approval nodes only when flagged as a merge
    /// point (`is_default`).
    pub fn is_merge_capable(&self) -> bool {
        match (&self.kind, &self.config) {
            (NodeKind::Parallel, _) | (NodeKind::End, _) => true,
            (NodeKind::Approval, NodeConfig::Approval(config)) => config.is_default,
            _ => false,
        }
    }

    /// Merges a patch into the node. The config is merged field-by-field,
    /// never replaced; a config patch whose shape does not match the node's
    /// kind is ignored.
    pub fn apply(&mut self, patch: NodePatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(config) = patch.config {
            self.config.merge(config);
        }
    }
}

/// Type-discriminated node configuration, one case per configurable kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodeConfig {
    #[default]
    Empty,
    Approval(ApprovalConfig),
    Condition(ConditionConfig),
    Parallel(ParallelConfig),
}

impl NodeConfig {
    fn merge(&mut self, patch: ConfigPatch) {
        match (self, patch) {
            (NodeConfig::Approval(config), ConfigPatch::Approval(patch)) => config.merge(patch),
            (NodeConfig::Condition(config), ConfigPatch::Condition(patch)) => {
                if let Some(branches) = patch.branches {
                    config.branches = branches;
                }
                if let Some(default_branch) = patch.default_branch {
                    config.default_branch = default_branch;
                }
            }
            (NodeConfig::Parallel(config), ConfigPatch::Parallel(patch)) => config.merge(patch),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApprovalMode {
    /// Every approver must agree.
    And,
    /// Any single approver suffices.
    #[default]
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApproverType {
    #[default]
    All,
    Department,
    Role,
    User,
}

/// How a merge-point approval node recombines inbound branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeRule {
    Any,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeoutAction {
    Pass,
    Reject,
    #[default]
    Notify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub action: TimeoutAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalConfig {
    #[serde(default)]
    pub approval_mode: ApprovalMode,
    #[serde(default)]
    pub approver_type: ApproverType,
    /// Ids whose meaning depends on `approver_type`.
    #[serde(default)]
    pub approvers: Vec<String>,
    #[serde(default = "default_time_limit")]
    pub time_limit: u32,
    #[serde(default)]
    pub auto_pass: bool,
    /// Marks this node as a merge point that may join multiple branches.
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_rule: Option<MergeRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<TimeoutConfig>,
}

fn default_time_limit() -> u32 {
    24
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            approval_mode: ApprovalMode::Or,
            approver_type: ApproverType::All,
            approvers: Vec::new(),
            time_limit: default_time_limit(),
            auto_pass: false,
            is_default: false,
            merge_rule: None,
            timeout: None,
        }
    }
}

impl ApprovalConfig {
    fn merge(&mut self, patch: ApprovalPatch) {
        if let Some(approval_mode) = patch.approval_mode {
            self.approval_mode = approval_mode;
        }
        if let Some(approver_type) = patch.approver_type {
            self.approver_type = approver_type;
        }
        if let Some(approvers) = patch.approvers {
            self.approvers = approvers;
        }
        if let Some(time_limit) = patch.time_limit {
            self.time_limit = time_limit;
        }
        if let Some(auto_pass) = patch.auto_pass {
            self.auto_pass = auto_pass;
        }
        if let Some(is_default) = patch.is_default {
            self.is_default = is_default;
        }
        if let Some(merge_rule) = patch.merge_rule {
            self.merge_rule = Some(merge_rule);
        }
        if let Some(timeout) = patch.timeout {
            self.timeout = Some(timeout);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParallelStrategy {
    #[default]
    All,
    Any,
    Vote,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelConfig {
    #[serde(default)]
    pub strategy: ParallelStrategy,
    /// Vote threshold, required when `strategy` is `VOTE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_pass: Option<u32>,
    #[serde(default)]
    pub branches: Vec<String>,
}

impl ParallelConfig {
    fn merge(&mut self, patch: ParallelPatch) {
        if let Some(strategy) = patch.strategy {
            self.strategy = strategy;
        }
        if let Some(vote_pass) = patch.vote_pass {
            self.vote_pass = Some(vote_pass);
        }
        if let Some(branches) = patch.branches {
            self.branches = branches;
        }
    }
}

/// A partial node update. Absent fields leave the current values untouched.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub position: Option<Position>,
    pub config: Option<ConfigPatch>,
}

/// A partial config update, shape-checked against the node's kind on apply.
#[derive(Debug, Clone)]
pub enum ConfigPatch {
    Approval(ApprovalPatch),
    Condition(ConditionPatch),
    Parallel(ParallelPatch),
}

#[derive(Debug, Clone, Default)]
pub struct ApprovalPatch {
    pub approval_mode: Option<ApprovalMode>,
    pub approver_type: Option<ApproverType>,
    pub approvers: Option<Vec<String>>,
    pub time_limit: Option<u32>,
    pub auto_pass: Option<bool>,
    pub is_default: Option<bool>,
    pub merge_rule: Option<MergeRule>,
    pub timeout: Option<TimeoutConfig>,
}

#[derive(Debug, Clone, Default)]
pub struct ConditionPatch {
    pub branches: Option<Vec<Branch>>,
    pub default_branch: Option<DefaultBranch>,
}

#[derive(Debug, Clone, Default)]
pub struct ParallelPatch {
    pub strategy: Option<ParallelStrategy>,
    pub vote_pass: Option<u32>,
    pub branches: Option<Vec<String>>,
}
