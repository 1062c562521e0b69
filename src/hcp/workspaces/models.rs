//! Workspace data models

use serde::{Deserialize, Serialize};

use crate::cli::ExecutionMode;
use crate::hcp::traits::TfeResource;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,

    #[serde(rename = "execution-mode")]
    pub execution_mode: Option<String>,

    #[serde(rename = "working-directory")]
    pub working_directory: Option<String>,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// VCS repository linkage of a workspace
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VcsRepo {
    /// `org/repo` identifier
    pub identifier: String,

    #[serde(rename = "oauth-token-id")]
    pub oauth_token_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Attribute changes for a workspace update.
///
/// Only the fields that are set end up in the PATCH body.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkspaceUpdate {
    #[serde(rename = "vcs-repo", skip_serializing_if = "Option::is_none")]
    pub vcs_repo: Option<VcsRepo>,

    #[serde(rename = "execution-mode", skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<ExecutionMode>,
}

/// Result of an idempotent create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The workspace did not exist and was created
    Created,
    /// A workspace with that name was already present; nothing was sent
    AlreadyExists,
}

/// Wrap workspace attributes in a JSON:API document
pub(crate) fn workspace_document(attributes: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "type": "workspaces",
            "attributes": attributes
        }
    })
}
