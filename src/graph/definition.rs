use itertools::Itertools;

/// The complete, canonical definition of a workflow graph, ready for
/// compilation. This is the target structure for any custom editor format
/// conversion.
#[derive(Debug, Clone, Default)]
pub struct GraphDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

impl GraphDefinition {
    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All edges leaving the given node, in input order.
    pub fn outgoing(&self, node_id: &str) -> impl Iterator<Item = &EdgeDefinition> {
        self.edges.iter().filter(move |e| e.source == node_id)
    }

    /// All edges arriving at the given node, in input order.
    pub fn incoming(&self, node_id: &str) -> impl Iterator<Item = &EdgeDefinition> {
        self.edges.iter().filter(move |e| e.target == node_id)
    }
}

/// Defines a single vertex in the workflow graph.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDefinition {
    pub id: String,
    pub kind: NodeKind,
}

impl NodeDefinition {
    /// The engine service name this node compiles to, if it compiles to a
    /// service step at all.
    pub fn service_token(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Service { service } | NodeKind::Branch { service, .. } => Some(service),
            _ => None,
        }
    }
}

/// Classification of a graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The single workflow entry point.
    Entry,
    /// A terminal node; compiles to an `end` step.
    Terminal,
    /// A single-purpose processing step. `service` is the lowercase token the
    /// engine dispatches on.
    Service { service: String },
    /// A conditional-logic step. Compiled through the plain service path;
    /// `mode` governs the editor's default edge semantics.
    Branch { mode: BranchMode, service: String },
    /// A multi-way condition step with named `match`/`notMatch` output ports.
    Condition { clauses: Vec<ConditionClause> },
    /// Descriptive text; never appears in compiled output.
    Annotation,
}

impl NodeKind {
    /// Only plain service nodes qualify as targets of a parallel fan-out.
    pub fn is_fanout_target(&self) -> bool {
        matches!(self, NodeKind::Service { .. })
    }
}

/// Governs which condition tag and label the editor assigns to a freshly
/// drawn edge leaving a branch node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchMode {
    Success,
    Failed,
    Conditional,
    Indecisive,
    Custom,
}

impl BranchMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Success" => Some(Self::Success),
            "Failed" => Some(Self::Failed),
            "Conditional" => Some(Self::Conditional),
            "Indecisive" => Some(Self::Indecisive),
            "Custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// The condition tag the editor stamps on new outgoing connections.
    pub fn default_condition_type(&self) -> ConditionType {
        match self {
            Self::Success => ConditionType::Success,
            Self::Failed => ConditionType::Failure,
            Self::Conditional => ConditionType::Condition,
            Self::Indecisive => ConditionType::Review,
            Self::Custom => ConditionType::Custom,
        }
    }

    /// The label the editor shows on new outgoing connections.
    pub fn default_edge_label(&self) -> &'static str {
        match self {
            Self::Success => "On Success",
            Self::Failed => "On Failure",
            Self::Conditional => "If Condition Met",
            Self::Indecisive => "On Review",
            Self::Custom => "Custom Path",
        }
    }
}

/// One row of a multi-way condition node: `service component comparator value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionClause {
    pub service: String,
    pub component: String,
    pub comparator: String,
    pub value: String,
}

impl ConditionClause {
    /// Human-readable fragment, as rendered on the node face.
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.service, self.comparator, self.value)
    }
}

/// Joins clause summaries into the node's display label.
pub fn clause_label(clauses: &[ConditionClause]) -> String {
    clauses.iter().map(ConditionClause::summary).join(", ")
}

/// Defines a directed connection between two node ids.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDefinition {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Sub-port discriminator, only meaningful on condition nodes
    /// (`match` / `notMatch`).
    pub source_handle: Option<String>,
    pub condition_type: Option<ConditionType>,
    /// Free-form expression text, used when `condition_type` is `Custom`.
    pub custom_logic: Option<String>,
    /// Pre-rendered engine expression; overrides derivation when present.
    pub engine_condition: Option<String>,
}

impl EdgeDefinition {
    /// An edge with no tag (or an explicit `always`) is the step's default
    /// continuation rather than a conditional branch.
    pub fn is_default(&self) -> bool {
        matches!(self.condition_type, None | Some(ConditionType::Always))
    }
}

/// Coarse tag describing when a connection is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionType {
    Match,
    NoMatch,
    Always,
    Custom,
    Success,
    Failure,
    Condition,
    Review,
}

impl ConditionType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "match" => Some(Self::Match),
            "nomatch" => Some(Self::NoMatch),
            "always" => Some(Self::Always),
            "custom" => Some(Self::Custom),
            "success" => Some(Self::Success),
            "failure" => Some(Self::Failure),
            "condition" => Some(Self::Condition),
            "review" => Some(Self::Review),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::NoMatch => "nomatch",
            Self::Always => "always",
            Self::Custom => "custom",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Condition => "condition",
            Self::Review => "review",
        }
    }
}
