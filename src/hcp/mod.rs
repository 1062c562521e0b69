//! TFE API client module
//!
//! This module provides functionality to interact with the Terraform
//! Cloud/Enterprise API: workspaces, variables and SSH keys.

mod client;
mod credentials;
pub mod ssh_keys;
pub mod traits;
pub mod variables;
pub mod workspaces;

pub use client::TfeClient;
pub use credentials::TokenResolver;
pub use ssh_keys::SshKey;
pub use traits::{ApiListResponse, ApiResponse, TfeResource};
pub use variables::{run_push_var_command, Variable, VariableCategory, VariablePayload};
pub use workspaces::{
    load_workspace_definitions, resolve_targets, run_create_command, run_delete_command,
    run_list_command, run_update_command, CreateOutcome, VcsRepo, Workspace, WorkspaceDefinition,
    WorkspaceTarget, WorkspaceUpdate,
};
