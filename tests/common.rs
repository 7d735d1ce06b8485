//! Common test utilities for building workflow graphs.
use veriflow::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        kind,
    }
}

#[allow(dead_code)]
pub fn service_node(id: &str, service: &str) -> NodeDefinition {
    node(
        id,
        NodeKind::Service {
            service: service.to_string(),
        },
    )
}

/// A plain, untagged connection (the step's default continuation).
#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> EdgeDefinition {
    EdgeDefinition {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
        condition_type: None,
        custom_logic: None,
        engine_condition: None,
    }
}

/// A connection carrying a condition tag.
#[allow(dead_code)]
pub fn tagged_edge(
    id: &str,
    source: &str,
    target: &str,
    condition_type: ConditionType,
) -> EdgeDefinition {
    EdgeDefinition {
        condition_type: Some(condition_type),
        ..edge(id, source, target)
    }
}

/// A connection leaving a named output port of a condition node.
#[allow(dead_code)]
pub fn port_edge(id: &str, source: &str, target: &str, handle: &str) -> EdgeDefinition {
    EdgeDefinition {
        source_handle: Some(handle.to_string()),
        ..edge(id, source, target)
    }
}

/// Minimal linear flow: entry -> one service -> one end node.
#[allow(dead_code)]
pub fn create_linear_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("e1", NodeKind::Entry),
            service_node("s1", "idv"),
            node("t1", NodeKind::Terminal),
        ],
        edges: vec![edge("c1", "e1", "s1"), edge("c2", "s1", "t1")],
    }
}

/// A flow with a parallel region: the gateway fans out to two services
/// which both continue to the same join service.
///
/// entry -> gw -> {a, b}; a -> x; b -> x; b -> y; x -> t1; y -> t1
#[allow(dead_code)]
pub fn create_fanout_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("e1", NodeKind::Entry),
            service_node("gw", "webapp"),
            service_node("a", "media"),
            service_node("b", "pii"),
            service_node("x", "aml"),
            service_node("y", "kyb"),
            node("t1", NodeKind::Terminal),
        ],
        edges: vec![
            edge("c1", "e1", "gw"),
            edge("c2", "gw", "a"),
            edge("c3", "gw", "b"),
            edge("c4", "a", "x"),
            edge("c5", "b", "x"),
            edge("c6", "b", "y"),
            edge("c7", "x", "t1"),
            edge("c8", "y", "t1"),
        ],
    }
}

/// A flow exercising a multi-way condition node with named ports.
///
/// entry -> cond; cond[match] -> m1; cond[notMatch] -> n1; m1, n1 -> t1
#[allow(dead_code)]
pub fn create_condition_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("e1", NodeKind::Entry),
            node(
                "cond",
                NodeKind::Condition {
                    clauses: vec![ConditionClause {
                        service: "idv".to_string(),
                        component: "status".to_string(),
                        comparator: "equals".to_string(),
                        value: "approved".to_string(),
                    }],
                },
            ),
            service_node("m1", "media"),
            service_node("n1", "pii"),
            node("t1", NodeKind::Terminal),
        ],
        edges: vec![
            edge("c1", "e1", "cond"),
            port_edge("c2", "cond", "m1", "match"),
            port_edge("c3", "cond", "n1", "notMatch"),
            edge("c4", "m1", "t1"),
            edge("c5", "n1", "t1"),
        ],
    }
}
