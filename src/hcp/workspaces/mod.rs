//! Workspace module

mod api;
mod commands;
mod definitions;
mod models;
pub mod resolver;

pub use commands::{run_create_command, run_delete_command, run_list_command, run_update_command};
pub use definitions::{load_workspace_definitions, DefinitionAttributes, WorkspaceDefinition};
pub use models::{CreateOutcome, VcsRepo, Workspace, WorkspaceAttributes, WorkspaceUpdate};
pub use resolver::{resolve_targets, WorkspaceTarget};
