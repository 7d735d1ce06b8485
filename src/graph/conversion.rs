use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom editor formats that can be converted into a canonical
/// `GraphDefinition`.
///
/// This is the primary extension point for keeping the compiler
/// format-agnostic. By implementing this trait on your own structs, you
/// provide a translation layer that lets the compiler process whatever shape
/// your graph editor produces. The crate ships an implementation for the
/// stock editor JSON (`UiWorkflow`).
///
/// # Example
///
/// ```rust,no_run
/// use veriflow::prelude::*;
/// use veriflow::error::GraphConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyNode { id: String, step_type: String }
/// struct MyWorkflow { nodes: Vec<MyNode> }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyWorkflow {
///     fn into_graph(self) -> std::result::Result<GraphDefinition, GraphConversionError> {
///         let mut nodes = Vec::new();
///         for node in self.nodes {
///             nodes.push(NodeDefinition {
///                 id: node.id,
///                 kind: NodeKind::Service {
///                     service: node.step_type.to_lowercase(),
///                 },
///             });
///         }
///
///         Ok(GraphDefinition {
///             nodes,
///             edges: vec![], // Convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a compilable workflow graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}
