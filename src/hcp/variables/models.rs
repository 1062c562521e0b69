//! Variable data models

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TfeError};

/// Variable category
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    /// Terraform input variable
    Terraform,
    /// Environment variable in the run environment
    Env,
}

/// Variable to create on a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablePayload {
    pub key: String,
    pub value: String,
    pub category: VariableCategory,
    pub sensitive: bool,
    /// Owning workspace ID (ws-xxx)
    pub workspace_id: String,
}

impl VariablePayload {
    /// JSON:API document for `POST /vars`. Values are never HCL.
    pub fn to_document(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "vars",
                "attributes": {
                    "key": self.key,
                    "value": self.value,
                    "category": self.category,
                    "hcl": false,
                    "sensitive": self.sensitive
                },
                "relationships": {
                    "workspace": {
                        "data": {
                            "id": self.workspace_id,
                            "type": "workspaces"
                        }
                    }
                }
            }
        })
    }
}

/// Variable returned by the API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API (value is null for sensitive variables)
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,
    pub value: Option<String>,
    pub category: VariableCategory,
    #[serde(default)]
    pub sensitive: bool,
}

/// Read a variable value from a file, dropping trailing line breaks
pub fn read_value_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        TfeError::Io(format!("cannot read variable value from '{}': {}", path.display(), e))
    })?;
    Ok(content.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string())
}
