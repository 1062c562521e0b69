//! tfws - Manage Terraform Cloud/Enterprise workspaces from a repository
//!
//! Maps directories containing Terraform configuration to workspace names
//! and creates, updates, deletes or lists those workspaces through the
//! TFE API v2.
//!
//! # Example
//!
//! ```bash
//! # Create one workspace per Terraform directory under infra/
//! tfws --org my-org create infra
//!
//! # Link them to this repository and an SSH key
//! tfws --org my-org create infra --oauth-token-id ot-xxx --ssh-key deploy
//!
//! # Switch workspaces found under infra/ to agent execution
//! tfws --org my-org update -d infra --exec-mode agent
//!
//! # Push a sensitive environment variable read from a file
//! tfws --org my-org push_var infra-prod -n API_KEY -v ./api_key -f -e -s
//!
//! # List workspace names
//! tfws --org my-org list
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod hcp;
pub mod vcs;

pub use cli::{Cli, Command, CreateArgs, DeleteArgs, ExecutionMode, PushVarArgs, UpdateArgs};
pub use discovery::{scan_directories, workspace_name};
pub use error::{Result, TfeError};
pub use hcp::{
    run_create_command, run_delete_command, run_list_command, run_push_var_command,
    run_update_command, TfeClient, TokenResolver, Workspace, WorkspaceTarget,
};
