//! Delete command arguments

use std::path::PathBuf;

use clap::Parser;

/// Arguments for 'delete'
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Workspace names, or directories when -d is passed. With -d the
    /// workspace names are based on the directory structure
    pub workspaces: Vec<String>,

    /// Delete workspaces based on directories
    #[arg(short = 'd', default_value_t = false)]
    pub dirs: bool,

    /// YAML file with workspace definitions
    #[arg(long)]
    pub workspaces_file: Option<PathBuf>,
}
