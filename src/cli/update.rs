//! Update command arguments

use std::path::PathBuf;

use clap::Parser;

use super::enums::ExecutionMode;

/// Arguments for 'update'
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Workspace names, or directories when -d is passed. With -d the
    /// workspace names are based on the directory structure
    pub workspaces: Vec<String>,

    /// Update workspaces based on directories
    #[arg(short = 'd', default_value_t = false)]
    pub dirs: bool,

    /// YAML file with workspace definitions
    #[arg(long)]
    pub workspaces_file: Option<PathBuf>,

    /// SSH key to use in the workspaces
    #[arg(long)]
    pub ssh_key: Option<String>,

    /// Terraform VCS OAuth token ID. Set this if the workspaces should be
    /// linked to this repository
    #[arg(long)]
    pub oauth_token_id: Option<String>,

    /// Set execution mode
    #[arg(long, value_enum)]
    pub exec_mode: Option<ExecutionMode>,
}
