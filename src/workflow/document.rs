use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::fs;

/// A compiled, engine-ready workflow: a designated start step plus an
/// ordered list of steps. Produced fresh on every compile; serializes to the
/// exact JSON shape the process engine ingests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkflowDocument {
    #[serde(rename = "startStep")]
    pub start_step: String,
    pub steps: Vec<Step>,
}

/// One executable step of a workflow document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Terminal step; carries no continuation.
    End { id: String },
    /// A single service invocation. `conditions` are evaluated in order by
    /// the engine; `go_to_step` is the fallback when none matches.
    Service {
        id: String,
        service: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        conditions: Option<Vec<StepCondition>>,
        #[serde(rename = "goToStep", skip_serializing_if = "Option::is_none")]
        go_to_step: Option<String>,
    },
    /// A parallel fan-out: all `sub_steps` execute, control resumes at
    /// `go_to_step` once they converge.
    MultiServices {
        id: String,
        #[serde(rename = "subSteps")]
        sub_steps: Vec<String>,
        #[serde(rename = "goToStep", skip_serializing_if = "Option::is_none")]
        go_to_step: Option<String>,
    },
}

impl Step {
    pub fn id(&self) -> &str {
        match self {
            Step::End { id } | Step::Service { id, .. } | Step::MultiServices { id, .. } => id,
        }
    }
}

/// A conditional continuation: when `condition` evaluates true the engine
/// jumps to `go_to_step`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StepCondition {
    pub condition: String,
    #[serde(rename = "goToStep")]
    pub go_to_step: String,
}

impl WorkflowDocument {
    /// Renders the document as pretty-printed JSON for the engine.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Saves the document as JSON to the given path.
    pub fn save(&self, path: &str) -> Result<(), ExportError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json)
            .map_err(|e| ExportError::Generic(format!("Could not write file '{}': {}", path, e)))
    }

    /// Parses a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        serde_json::from_str(json)
            .map_err(|e| ExportError::Generic(format!("Deserialization failed: {}", e)))
    }

    /// Loads a document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ExportError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ExportError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        Self::from_json(&json)
    }
}
