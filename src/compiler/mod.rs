use ahash::AHashMap;

use crate::error::CompileError;
use crate::graph::{EdgeDefinition, GraphDefinition, NodeDefinition, NodeKind};
use crate::workflow::{Step, StepCondition, WorkflowDocument};

mod conditions;
mod convergence;

pub use conditions::{ALWAYS_TRUE, RESULT_FAILURE, RESULT_SUCCESS, wrap_expression};

use conditions::render_condition;
use convergence::find_convergence;

/// Reserved engine service token emitted for multi-way condition steps.
pub const CONDITION_SERVICE: &str = "condition";

/// Transforms a workflow graph into an engine-ready `WorkflowDocument`.
///
/// The compiler is a pure function of its input graph: the same node and
/// edge order always yields the same document. It performs no repair;
/// dangling references and under-specified steps are emitted as derived and
/// left to the validator to flag.
pub struct Compiler {
    graph: GraphDefinition,
    condition_service: String,
}

pub struct CompilerBuilder {
    graph: GraphDefinition,
    condition_service: String,
}

impl CompilerBuilder {
    pub fn new(graph: GraphDefinition) -> Self {
        Self {
            graph,
            condition_service: CONDITION_SERVICE.to_string(),
        }
    }

    /// Overrides the reserved service token emitted for condition steps.
    pub fn with_condition_service(mut self, service: &str) -> Self {
        self.condition_service = service.to_string();
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            graph: self.graph,
            condition_service: self.condition_service,
        }
    }
}

impl Compiler {
    pub fn builder(graph: GraphDefinition) -> CompilerBuilder {
        CompilerBuilder::new(graph)
    }

    /// Compiles the graph into a workflow document.
    ///
    /// Fails only when the graph has no entry node; every other defect is
    /// reported by `validator::validate` on the resulting document.
    pub fn compile(self) -> Result<WorkflowDocument, CompileError> {
        let start_step = self
            .graph
            .nodes
            .iter()
            .find(|n| n.kind == NodeKind::Entry)
            .ok_or(CompileError::MissingEntryNode)?
            .id
            .clone();

        // Terminal nodes come first in the step list, in input order.
        let mut steps: Vec<Step> = self
            .graph
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Terminal)
            .map(|n| Step::End { id: n.id.clone() })
            .collect();

        let node_index: AHashMap<&str, &NodeDefinition> = self
            .graph
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), n))
            .collect();

        for node in &self.graph.nodes {
            match node.kind {
                NodeKind::Entry | NodeKind::Terminal | NodeKind::Annotation => continue,
                _ => {}
            }

            let outgoing: Vec<&EdgeDefinition> = self.graph.outgoing(&node.id).collect();

            // Edges into plain service nodes; more than one of them makes
            // this node a fan-out point. Dangling targets never qualify.
            let parallel: Vec<&EdgeDefinition> = outgoing
                .iter()
                .copied()
                .filter(|e| {
                    node_index
                        .get(e.target.as_str())
                        .is_some_and(|t| t.kind.is_fanout_target())
                })
                .collect();

            let is_condition = matches!(node.kind, NodeKind::Condition { .. });

            let step = if parallel.len() > 1 && !is_condition {
                let sub_steps: Vec<String> = parallel.iter().map(|e| e.target.clone()).collect();
                let go_to_step = find_convergence(&self.graph, &sub_steps);
                Step::MultiServices {
                    id: node.id.clone(),
                    sub_steps,
                    go_to_step,
                }
            } else if is_condition {
                self.compile_condition_node(node, &outgoing)
            } else {
                compile_service_node(node, &outgoing)
            };
            steps.push(step);
        }

        Ok(WorkflowDocument { start_step, steps })
    }

    /// Multi-way condition nodes route through named output ports: the
    /// `match` edge becomes the single conditional continuation, the
    /// `notMatch` edge the default fallthrough.
    fn compile_condition_node(&self, node: &NodeDefinition, outgoing: &[&EdgeDefinition]) -> Step {
        let match_edge = outgoing
            .iter()
            .find(|e| e.source_handle.as_deref() == Some("match"));
        let not_match_edge = outgoing
            .iter()
            .find(|e| e.source_handle.as_deref() == Some("notMatch"));

        let mut step_conditions = Vec::new();
        if let Some(edge) = match_edge {
            let condition = edge
                .engine_condition
                .clone()
                .unwrap_or_else(|| ALWAYS_TRUE.to_string());
            step_conditions.push(StepCondition {
                condition,
                go_to_step: edge.target.clone(),
            });
        }

        Step::Service {
            id: node.id.clone(),
            service: self.condition_service.clone(),
            conditions: Some(step_conditions),
            go_to_step: not_match_edge.map(|e| e.target.clone()),
        }
    }
}

/// Plain service nodes (and branch nodes falling through to this path)
/// partition their outgoing edges into conditional continuations and a
/// single default.
fn compile_service_node(node: &NodeDefinition, outgoing: &[&EdgeDefinition]) -> Step {
    let service = node.service_token().unwrap_or_default().to_string();

    let step_conditions: Vec<StepCondition> = outgoing
        .iter()
        .filter(|e| !e.is_default())
        .map(|e| StepCondition {
            condition: render_condition(e),
            go_to_step: e.target.clone(),
        })
        .collect();

    // First unset-or-always edge wins; conditional edges alone never supply
    // a fallback, which the validator flags downstream.
    let go_to_step = outgoing
        .iter()
        .find(|e| e.is_default())
        .map(|e| e.target.clone());

    Step::Service {
        id: node.id.clone(),
        service,
        conditions: if step_conditions.is_empty() {
            None
        } else {
            Some(step_conditions)
        },
        go_to_step,
    }
}
