//! Workspace API operations

use std::path::Path;

use log::debug;

use crate::discovery::{working_directory, workspace_name};
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, ApiResponse};
use crate::hcp::TfeClient;

use super::models::{workspace_document, CreateOutcome, VcsRepo, Workspace, WorkspaceUpdate};

impl TfeClient {
    /// Get a single workspace by name.
    ///
    /// Returns `None` only for 404; any other non-success status is an error.
    pub async fn get_workspace_by_name(&self, name: &str) -> Result<Option<Workspace>> {
        let url = self.workspace_url(name);
        let response = self.get(&url).send().await?;

        if response.status().as_u16() == 404 {
            debug!("Workspace '{}' not found in '{}'", name, self.org());
            return Ok(None);
        }

        let resp: ApiResponse<Workspace> = self
            .parse_api_response(response, &format!("Failed to fetch workspace '{}'", name))
            .await?;
        Ok(Some(resp.data))
    }

    /// Get a workspace by name, treating absence as an error
    pub async fn require_workspace(&self, name: &str) -> Result<Workspace> {
        self.get_workspace_by_name(name)
            .await?
            .ok_or_else(|| TfeError::Api {
                status: 404,
                message: format!(
                    "Workspace '{}' not found in organization '{}'",
                    name,
                    self.org()
                ),
            })
    }

    /// List the organization's workspaces (first page returned by the API)
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        let response = self.get(&self.workspaces_url()).send().await?;
        let resp: ApiListResponse<Workspace> = self
            .parse_api_response(
                response,
                &format!("Failed to list workspaces for organization '{}'", self.org()),
            )
            .await?;
        Ok(resp.data)
    }

    /// Build the VCS linkage for `oauth_token_id` using the repository
    /// identifier the client was constructed with
    pub fn vcs_repo(&self, oauth_token_id: Option<&str>) -> Result<Option<VcsRepo>> {
        let Some(token_id) = oauth_token_id else {
            return Ok(None);
        };
        let identifier = self.vcs_identifier().ok_or_else(|| {
            TfeError::Vcs("no repository identifier available for VCS linkage".to_string())
        })?;
        Ok(Some(VcsRepo {
            identifier: identifier.to_string(),
            oauth_token_id: token_id.to_string(),
            branch: None,
        }))
    }

    /// Create a workspace unless one with the same name already exists.
    ///
    /// When `ssh_key` is given it is assigned afterwards in both cases.
    pub async fn create_workspace(
        &self,
        name: &str,
        attributes: serde_json::Value,
        ssh_key: Option<&str>,
    ) -> Result<CreateOutcome> {
        let outcome = if self.get_workspace_by_name(name).await?.is_some() {
            debug!("Workspace '{}' already exists, skipping create", name);
            CreateOutcome::AlreadyExists
        } else {
            let body = workspace_document(attributes);
            debug!("Create workspace body: {}", body);
            let response = self
                .post(&self.workspaces_url())
                .json(&body)
                .send()
                .await?;
            self.check_response(response, &format!("Failed to create workspace '{}'", name))
                .await?;
            CreateOutcome::Created
        };

        if let Some(key) = ssh_key {
            self.update_workspace_ssh_key(name, key).await?;
        }

        Ok(outcome)
    }

    /// Create the workspace for a directory: name derived from the path,
    /// working directory set to the path
    pub async fn create_workspace_for_directory(
        &self,
        dir: &Path,
        oauth_token_id: Option<&str>,
        ssh_key: Option<&str>,
    ) -> Result<CreateOutcome> {
        let name = workspace_name(dir);
        let mut attributes = serde_json::json!({
            "name": name,
            "working-directory": working_directory(dir),
        });
        if let Some(vcs_repo) = self.vcs_repo(oauth_token_id)? {
            attributes["vcs-repo"] = serde_json::to_value(vcs_repo)?;
        }

        self.create_workspace(&name, attributes, ssh_key).await
    }

    /// PATCH a workspace with an arbitrary attribute object
    pub async fn patch_workspace(&self, name: &str, attributes: serde_json::Value) -> Result<()> {
        let body = workspace_document(attributes);
        debug!("Update workspace body: {}", body);
        let response = self
            .patch(&self.workspace_url(name))
            .json(&body)
            .send()
            .await?;
        self.check_response(response, &format!("Failed to update workspace '{}'", name))
            .await?;
        Ok(())
    }

    /// Update a workspace. The SSH key, when given, is assigned before the
    /// attributes are patched.
    pub async fn update_workspace(
        &self,
        name: &str,
        update: &WorkspaceUpdate,
        ssh_key: Option<&str>,
    ) -> Result<()> {
        if let Some(key) = ssh_key {
            self.update_workspace_ssh_key(name, key).await?;
        }
        self.patch_workspace(name, serde_json::to_value(update)?)
            .await
    }

    /// Delete a workspace by name
    pub async fn delete_workspace(&self, name: &str) -> Result<()> {
        let response = self.delete(&self.workspace_url(name)).send().await?;
        self.check_response(response, &format!("Failed to delete workspace '{}'", name))
            .await?;
        Ok(())
    }
}
