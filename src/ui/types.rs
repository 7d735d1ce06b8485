use serde::Deserialize;

use crate::error::GraphConversionError;
use crate::graph::{
    BranchMode, ConditionClause, ConditionType, EdgeDefinition, GraphDefinition, IntoGraph,
    NodeDefinition, NodeKind,
};

/// UI node data containing the service type and configuration
#[derive(Debug, Deserialize, Clone)]
pub struct UiNodeData {
    #[serde(alias = "type")]
    pub node_type: String,
    pub label: Option<String>,
    #[serde(alias = "logicType")]
    pub logic_type: Option<String>,
    pub conditions: Option<Vec<UiCondition>>,
    #[serde(alias = "isEntry")]
    pub is_entry: Option<bool>,
    /// Free-form per-node configuration; carried by the editor, opaque here.
    pub config: Option<serde_json::Value>,
}

/// One condition row of a multi-way condition node
#[derive(Debug, Deserialize, Clone)]
pub struct UiCondition {
    pub service: String,
    pub component: String,
    #[serde(alias = "function")]
    pub comparator: String,
    pub value: String,
}

/// UI node with ID and data
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    pub data: UiNodeData,
}

/// Per-edge data attached by the connection config panel
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiEdgeData {
    #[serde(alias = "conditionType")]
    pub condition_type: Option<String>,
    #[serde(alias = "customLogic")]
    pub custom_logic: Option<String>,
    #[serde(alias = "camundaCondition")]
    pub engine_condition: Option<String>,
    pub label: Option<String>,
}

/// UI edge connecting nodes
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(alias = "sourceHandle")]
    pub source_handle: Option<String>,
    pub data: Option<UiEdgeData>,
}

/// Complete UI workflow structure, as saved or exported by the editor
#[derive(Debug, Deserialize)]
pub struct UiWorkflow {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}

impl IntoGraph for UiWorkflow {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for ui_node in self.nodes {
            let UiNode { id, data } = ui_node;
            let kind = match data.node_type.as_str() {
                "StartNode" => NodeKind::Entry,
                "EndNode" => NodeKind::Terminal,
                "TextNode" | "DescriptionBox" => NodeKind::Annotation,
                "ConditionalLogic" => {
                    // The editor defaults freshly added branch nodes to Success.
                    let name = data.logic_type.as_deref().unwrap_or("Success");
                    let mode = BranchMode::parse(name).ok_or_else(|| {
                        GraphConversionError::UnknownLogicType {
                            node_id: id.clone(),
                            logic_type: name.to_string(),
                        }
                    })?;
                    NodeKind::Branch {
                        mode,
                        service: data.node_type.to_lowercase(),
                    }
                }
                "Condition" => NodeKind::Condition {
                    clauses: data
                        .conditions
                        .unwrap_or_default()
                        .into_iter()
                        .map(|c| ConditionClause {
                            service: c.service,
                            component: c.component,
                            comparator: c.comparator,
                            value: c.value,
                        })
                        .collect(),
                },
                // Any other type is a service step; the palette grows without
                // this crate needing a release.
                other => NodeKind::Service {
                    service: other.to_lowercase(),
                },
            };
            nodes.push(NodeDefinition { id, kind });
        }

        let mut edges = Vec::with_capacity(self.edges.len());
        for ui_edge in self.edges {
            let data = ui_edge.data.unwrap_or_default();
            let condition_type = match data.condition_type.as_deref() {
                None => None,
                Some(tag) => Some(ConditionType::parse(tag).ok_or_else(|| {
                    GraphConversionError::UnknownConditionType {
                        edge_id: ui_edge.id.clone(),
                        condition_type: tag.to_string(),
                    }
                })?),
            };
            edges.push(EdgeDefinition {
                id: ui_edge.id,
                source: ui_edge.source,
                target: ui_edge.target,
                source_handle: ui_edge.source_handle,
                condition_type,
                custom_logic: data.custom_logic,
                engine_condition: data.engine_condition,
            });
        }

        Ok(GraphDefinition { nodes, edges })
    }
}
