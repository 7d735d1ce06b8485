//! # Veriflow - Graph-to-Workflow Compiler
//!
//! **Veriflow** compiles node-based identity verification flows, as drawn in
//! a visual graph editor, into the step-list documents an external business
//! process engine executes. The editor owns rendering, layout, and
//! persistence; this crate owns the hard part: deterministically walking an
//! arbitrary node/edge graph and producing a validated, engine-ready
//! workflow description, including parallel fan-out/fan-in detection and the
//! translation of UI-level conditions into engine expression syntax.
//!
//! ## Core Workflow
//!
//! The crate is format-agnostic. It operates on a canonical
//! `GraphDefinition`; the stock editor JSON (`UiWorkflow`) ships with a
//! ready-made conversion. The primary workflow is:
//!
//! 1.  **Load Your Graph**: Parse the editor's export (or your own format)
//!     into Rust structs.
//! 2.  **Convert**: Implement the `IntoGraph` trait (or use the provided
//!     `UiWorkflow` impl) to translate into a `GraphDefinition`.
//! 3.  **Compile**: `Compiler::builder(graph).build().compile()` produces a
//!     `WorkflowDocument`, a start step plus an ordered step list.
//! 4.  **Validate**: `validator::validate` returns the list of structural
//!     problems; an empty list means the document is safe to hand to the
//!     engine.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use veriflow::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     // Editor JSON, e.g. read from the editor's "export" action.
//!     let json = std::fs::read_to_string("workflow.json")?;
//!     let ui: UiWorkflow = serde_json::from_str(&json)?;
//!
//!     // Convert the editor format into the canonical graph.
//!     let graph = ui.into_graph()?;
//!
//!     // Compile the graph into an engine-ready document.
//!     let compiler = Compiler::builder(graph).build();
//!     let document = compiler.compile()?;
//!
//!     // Validate before handing the document downstream.
//!     let errors = validate(&document);
//!     if errors.is_empty() {
//!         println!("{}", document.to_json_pretty()?);
//!     } else {
//!         for error in &errors {
//!             eprintln!("- {}", error);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod ui;
pub mod validator;
pub mod workflow;
