//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions of the crate.
//! Import this module to get access to the core functionality without
//! having to import each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use veriflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("workflow.json")?;
//! let ui: UiWorkflow = serde_json::from_str(&json)?;
//!
//! let document = Compiler::builder(ui.into_graph()?).build().compile()?;
//! let errors = validate(&document);
//! assert!(errors.is_empty());
//! # Ok(())
//! # }
//! ```

// Core compilation and validation
pub use crate::compiler::{CONDITION_SERVICE, Compiler, CompilerBuilder};
pub use crate::validator::{validate, validate_graph};

// Canonical graph model and conversion seam
pub use crate::graph::{
    BranchMode, ConditionClause, ConditionType, EdgeDefinition, GraphDefinition, IntoGraph,
    NodeDefinition, NodeKind,
};

// Editor wire format
pub use crate::ui::{UiEdge, UiNode, UiWorkflow};

// Compiled output
pub use crate::workflow::{Step, StepCondition, WorkflowDocument};

// Error types
pub use crate::error::{CompileError, ExportError, GraphConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
