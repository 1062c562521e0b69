//! Declarative workspaces file
//!
//! A YAML list of workspace definitions, each with an `attributes` map:
//!
//! ```yaml
//! - attributes:
//!     name: shared-network
//!     working-directory: shared/network
//!     execution-mode: agent
//!     vcs-repo:
//!       identifier: acme/platform
//!       oauth-token-id: ot-abc123
//!     allow-destroy-plan: false
//! ```
//!
//! The whole file is validated before any request is made. Attributes
//! without a dedicated field are passed to the API unchanged.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cli::ExecutionMode;
use crate::error::{Result, TfeError};

use super::models::VcsRepo;

/// One entry of the workspaces file
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceDefinition {
    pub attributes: DefinitionAttributes,
}

/// Workspace attributes as declared in the file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DefinitionAttributes {
    pub name: String,

    #[serde(rename = "working-directory", skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    #[serde(rename = "execution-mode", skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<ExecutionMode>,

    #[serde(rename = "terraform-version", skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,

    #[serde(rename = "auto-apply", skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "vcs-repo", skip_serializing_if = "Option::is_none")]
    pub vcs_repo: Option<VcsRepo>,

    /// Any other workspace attribute, sent as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl WorkspaceDefinition {
    /// Workspace name
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    /// Attribute object for the API request body
    pub fn to_attributes(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.attributes)?)
    }
}

/// Load and validate a workspaces file
pub fn load_workspace_definitions(path: &Path) -> Result<Vec<WorkspaceDefinition>> {
    let content = fs::read_to_string(path).map_err(|e| {
        TfeError::WorkspacesFile(format!("cannot read '{}': {}", path.display(), e))
    })?;
    let definitions = parse_workspace_definitions(&content)
        .map_err(|e| TfeError::WorkspacesFile(format!("'{}': {}", path.display(), e)))?;

    debug!(
        "Loaded {} workspace definitions from {}",
        definitions.len(),
        path.display()
    );
    Ok(definitions)
}

/// Parse and validate workspaces file content
fn parse_workspace_definitions(content: &str) -> std::result::Result<Vec<WorkspaceDefinition>, String> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let definitions: Vec<WorkspaceDefinition> =
        serde_yml::from_str(content).map_err(|e| e.to_string())?;

    let mut seen = HashSet::new();
    for (index, def) in definitions.iter().enumerate() {
        let entry = index + 1;
        let name = def.name();
        if name.trim().is_empty() {
            return Err(format!("entry {}: name must not be empty", entry));
        }
        if !seen.insert(name) {
            return Err(format!("entry {}: duplicate workspace name '{}'", entry, name));
        }
        if let Some(repo) = &def.attributes.vcs_repo {
            if repo.identifier.trim().is_empty() || repo.oauth_token_id.trim().is_empty() {
                return Err(format!(
                    "entry {} ('{}'): vcs-repo needs identifier and oauth-token-id",
                    entry, name
                ));
            }
        }
    }

    Ok(definitions)
}
