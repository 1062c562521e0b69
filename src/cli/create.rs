//! Create command arguments

use std::path::PathBuf;

use clap::Parser;

/// Arguments for 'create'
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Directories for which workspaces will be created. Workspace names
    /// are based on the directory structure
    pub directories: Vec<String>,

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
}
