use thiserror::Error;

/// Errors that can occur during the graph compilation phase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("No start node found in the workflow")]
    MissingEntryNode,
}

/// Errors that can occur when converting a custom editor format into a
/// canonical `GraphDefinition`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphConversionError {
    #[error("Invalid workflow data: {0}")]
    ValidationError(String),

    #[error("Node '{node_id}' has an unknown logic type: '{logic_type}'")]
    UnknownLogicType { node_id: String, logic_type: String },

    #[error("Edge '{edge_id}' has an unknown condition type: '{condition_type}'")]
    UnknownConditionType {
        edge_id: String,
        condition_type: String,
    },
}

/// Errors that can occur when serializing or persisting a compiled workflow
/// document.
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    #[error("{0}")]
    Generic(String),
}
