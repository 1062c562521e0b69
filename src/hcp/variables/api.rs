//! Variable API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiResponse;
use crate::hcp::TfeClient;

use super::models::{Variable, VariableCategory, VariablePayload};

impl TfeClient {
    /// Create a variable on the workspace referenced by the payload
    pub async fn create_variable(&self, payload: &VariablePayload) -> Result<Variable> {
        let url = format!("{}/{}", self.base_url(), api::VARS);
        let response = self.post(&url).json(&payload.to_document()).send().await?;
        let resp: ApiResponse<Variable> = self
            .parse_api_response(
                response,
                &format!(
                    "Failed to push variable '{}' to workspace '{}'",
                    payload.key, payload.workspace_id
                ),
            )
            .await?;
        Ok(resp.data)
    }

    /// Resolve the workspace by name, then create the variable on it
    pub async fn push_variable(
        &self,
        workspace: &str,
        key: &str,
        value: &str,
        category: VariableCategory,
        sensitive: bool,
    ) -> Result<Variable> {
        let ws = self.require_workspace(workspace).await?;
        debug!("Workspace '{}' resolved to {}", workspace, ws.id);

        let payload = VariablePayload {
            key: key.to_string(),
            value: value.to_string(),
            category,
            sensitive,
            workspace_id: ws.id,
        };
        self.create_variable(&payload).await
    }
}
