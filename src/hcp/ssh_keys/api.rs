//! SSH key API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, TfeResource};
use crate::hcp::TfeClient;

use super::models::{ssh_key_assignment, SshKey};

impl TfeClient {
    /// List the organization's SSH keys (first page returned by the API)
    pub async fn get_ssh_keys(&self) -> Result<Vec<SshKey>> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(self.org()),
            api::SSH_KEYS
        );
        let response = self.get(&url).send().await?;
        let resp: ApiListResponse<SshKey> = self
            .parse_api_response(
                response,
                &format!("Failed to list SSH keys for organization '{}'", self.org()),
            )
            .await?;
        Ok(resp.data)
    }

    /// Look up an SSH key ID by its name
    pub async fn find_ssh_key_id(&self, name: &str) -> Result<String> {
        self.get_ssh_keys()
            .await?
            .into_iter()
            .find(|key| key.name() == name)
            .map(|key| key.id)
            .ok_or_else(|| TfeError::SshKeyNotFound {
                name: name.to_string(),
                org: self.org().to_string(),
            })
    }

    /// Assign an SSH key to a workspace (both addressed by ID)
    pub async fn assign_ssh_key(&self, workspace_id: &str, ssh_key_id: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}/relationships/ssh-key",
            self.base_url(),
            api::WORKSPACES,
            workspace_id
        );
        let response = self
            .patch(&url)
            .json(&ssh_key_assignment(ssh_key_id))
            .send()
            .await?;
        self.check_response(
            response,
            &format!(
                "Failed to assign SSH key '{}' to workspace '{}'",
                ssh_key_id, workspace_id
            ),
        )
        .await?;
        Ok(())
    }

    /// Assign the SSH key named `ssh_key` to the workspace named `workspace`
    pub async fn update_workspace_ssh_key(&self, workspace: &str, ssh_key: &str) -> Result<()> {
        let ws = self.require_workspace(workspace).await?;
        let key_id = self.find_ssh_key_id(ssh_key).await?;

        debug!(
            "Assigning SSH key '{}' ({}) to workspace '{}' ({})",
            ssh_key, key_id, workspace, ws.id
        );
        self.assign_ssh_key(&ws.id, &key_id).await
    }
}
