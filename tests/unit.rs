//! Unit tests for the graph model vocabulary and document serialization.
mod common;
use common::*;
use veriflow::compiler::wrap_expression;
use veriflow::graph::clause_label;
use veriflow::prelude::*;

#[test]
fn test_branch_mode_default_edge_semantics() {
    let table = [
        (BranchMode::Success, ConditionType::Success, "On Success"),
        (BranchMode::Failed, ConditionType::Failure, "On Failure"),
        (
            BranchMode::Conditional,
            ConditionType::Condition,
            "If Condition Met",
        ),
        (BranchMode::Indecisive, ConditionType::Review, "On Review"),
        (BranchMode::Custom, ConditionType::Custom, "Custom Path"),
    ];

    for (mode, tag, label) in table {
        assert_eq!(mode.default_condition_type(), tag);
        assert_eq!(mode.default_edge_label(), label);
    }
}

#[test]
fn test_branch_mode_parse_round_trip() {
    for name in ["Success", "Failed", "Conditional", "Indecisive", "Custom"] {
        assert!(BranchMode::parse(name).is_some());
    }
    assert_eq!(BranchMode::parse("Timeout"), None);
}

#[test]
fn test_condition_type_parse_round_trip() {
    let tags = [
        "match",
        "nomatch",
        "always",
        "custom",
        "success",
        "failure",
        "condition",
        "review",
    ];
    for tag in tags {
        let parsed = ConditionType::parse(tag).expect("tag should parse");
        assert_eq!(parsed.as_str(), tag);
    }
    assert_eq!(ConditionType::parse("sometimes"), None);
}

#[test]
fn test_untagged_and_always_edges_are_defaults() {
    assert!(edge("c1", "a", "b").is_default());
    assert!(tagged_edge("c2", "a", "b", ConditionType::Always).is_default());
    assert!(!tagged_edge("c3", "a", "b", ConditionType::Match).is_default());
}

#[test]
fn test_clause_label_joins_summaries() {
    let clauses = vec![
        ConditionClause {
            service: "idv".to_string(),
            component: "status".to_string(),
            comparator: "equals".to_string(),
            value: "approved".to_string(),
        },
        ConditionClause {
            service: "aml".to_string(),
            component: "score".to_string(),
            comparator: "lessThan".to_string(),
            value: "0.3".to_string(),
        },
    ];

    assert_eq!(
        clause_label(&clauses),
        "idv equals approved, aml lessThan 0.3"
    );
}

#[test]
fn test_wrap_expression_uses_engine_interpolation() {
    assert_eq!(
        wrap_expression("result.score > 0.8"),
        "${result.score > 0.8}"
    );
}

#[test]
fn test_step_id_accessor() {
    let end = Step::End {
        id: "t1".to_string(),
    };
    let multi = Step::MultiServices {
        id: "gw".to_string(),
        sub_steps: vec![],
        go_to_step: None,
    };
    assert_eq!(end.id(), "t1");
    assert_eq!(multi.id(), "gw");
}

#[test]
fn test_service_step_serialization_shape() {
    let step = Step::Service {
        id: "s1".to_string(),
        service: "idv".to_string(),
        conditions: None,
        go_to_step: Some("t1".to_string()),
    };

    let json = serde_json::to_value(&step).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "service",
            "id": "s1",
            "service": "idv",
            "goToStep": "t1"
        })
    );
}

#[test]
fn test_empty_conditions_serialize_when_present() {
    // A condition step keeps its (possibly empty) conditions array, while
    // plain service steps omit the field entirely.
    let step = Step::Service {
        id: "cond".to_string(),
        service: "condition".to_string(),
        conditions: Some(vec![]),
        go_to_step: None,
    };

    let json = serde_json::to_value(&step).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "service",
            "id": "cond",
            "service": "condition",
            "conditions": []
        })
    );
}

#[test]
fn test_multi_services_serialization_shape() {
    let step = Step::MultiServices {
        id: "gw".to_string(),
        sub_steps: vec!["a".to_string(), "b".to_string()],
        go_to_step: Some("x".to_string()),
    };

    let json = serde_json::to_value(&step).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "multi_services",
            "id": "gw",
            "subSteps": ["a", "b"],
            "goToStep": "x"
        })
    );
}

#[test]
fn test_document_json_round_trip() {
    let document = WorkflowDocument {
        start_step: "s1".to_string(),
        steps: vec![
            Step::End {
                id: "t1".to_string(),
            },
            Step::Service {
                id: "s1".to_string(),
                service: "idv".to_string(),
                conditions: None,
                go_to_step: Some("t1".to_string()),
            },
        ],
    };

    let json = document.to_json_pretty().unwrap();
    let parsed = WorkflowDocument::from_json(&json).unwrap();
    assert_eq!(parsed, document);
}

#[test]
fn test_service_token_exposed_for_service_and_branch_kinds() {
    assert_eq!(service_node("s1", "idv").service_token(), Some("idv"));

    let branch = node(
        "r1",
        NodeKind::Branch {
            mode: BranchMode::Success,
            service: "conditionallogic".to_string(),
        },
    );
    assert_eq!(branch.service_token(), Some("conditionallogic"));

    assert_eq!(node("e1", NodeKind::Entry).service_token(), None);
}
