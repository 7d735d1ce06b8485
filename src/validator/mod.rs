use ahash::AHashSet;

use crate::graph::{GraphDefinition, NodeKind};
use crate::workflow::{Step, WorkflowDocument};

/// Checks a compiled workflow document for structural integrity.
///
/// Returns an ordered list of human-readable errors; an empty list means the
/// document is safe to hand to the engine. Never fails. The check order is
/// fixed so consumers relying on message ordering stay stable: aggregate
/// counts first, then the start step, then per-step reference checks in step
/// order.
pub fn validate(document: &WorkflowDocument) -> Vec<String> {
    let mut errors = Vec::new();

    let steps_without_ids = document.steps.iter().filter(|s| s.id().is_empty()).count();
    if steps_without_ids > 0 {
        errors.push(format!("Found {} steps without IDs", steps_without_ids));
    }

    let service_steps_without_service = document
        .steps
        .iter()
        .filter(|s| matches!(s, Step::Service { service, .. } if service.is_empty()))
        .count();
    if service_steps_without_service > 0 {
        errors.push(format!(
            "Found {} service steps without a service type",
            service_steps_without_service
        ));
    }

    let conditions_without_default = document
        .steps
        .iter()
        .filter(|s| {
            matches!(
                s,
                Step::Service {
                    conditions: Some(conditions),
                    go_to_step: None,
                    ..
                } if !conditions.is_empty()
            )
        })
        .count();
    if conditions_without_default > 0 {
        errors.push(format!(
            "Found {} steps with conditions but no default goToStep",
            conditions_without_default
        ));
    }

    let step_ids: AHashSet<&str> = document.steps.iter().map(Step::id).collect();

    if !step_ids.contains(document.start_step.as_str()) {
        errors.push(format!(
            "Start step {} does not exist in the workflow",
            document.start_step
        ));
    }

    for step in &document.steps {
        match step {
            Step::End { .. } => {}
            Step::Service {
                id,
                conditions,
                go_to_step,
                ..
            } => {
                if let Some(target) = go_to_step {
                    if !step_ids.contains(target.as_str()) {
                        errors.push(format!(
                            "Step {} references non-existent goToStep {}",
                            id, target
                        ));
                    }
                }
                if let Some(conditions) = conditions {
                    for condition in conditions {
                        if !step_ids.contains(condition.go_to_step.as_str()) {
                            errors.push(format!(
                                "Step {} has a condition referencing non-existent goToStep {}",
                                id, condition.go_to_step
                            ));
                        }
                    }
                }
            }
            Step::MultiServices {
                id,
                sub_steps,
                go_to_step,
            } => {
                if let Some(target) = go_to_step {
                    if !step_ids.contains(target.as_str()) {
                        errors.push(format!(
                            "Step {} references non-existent goToStep {}",
                            id, target
                        ));
                    }
                }
                for sub_step in sub_steps {
                    if !step_ids.contains(sub_step.as_str()) {
                        errors.push(format!(
                            "Multi-service step {} references non-existent subStep {}",
                            id, sub_step
                        ));
                    }
                }
            }
        }
    }

    errors
}

/// Editor-level pre-check on the raw graph, before compilation.
///
/// Flags graphs that cannot compile cleanly: the entry node must be unique,
/// and every executable node needs at least one incoming connection.
/// Annotation nodes are exempt.
pub fn validate_graph(graph: &GraphDefinition) -> Vec<String> {
    let mut errors = Vec::new();

    let entry_count = graph
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Entry)
        .count();
    if entry_count != 1 {
        errors.push(format!(
            "Workflow must contain exactly one entry node, found {}",
            entry_count
        ));
    }

    for node in &graph.nodes {
        if matches!(node.kind, NodeKind::Entry | NodeKind::Annotation) {
            continue;
        }
        if graph.incoming(&node.id).next().is_none() {
            errors.push(format!("Node {} has no incoming connection", node.id));
        }
    }

    errors
}
