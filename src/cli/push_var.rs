//! Push variable command arguments

use clap::Parser;

/// Arguments for 'push_var'
#[derive(Parser, Debug)]
pub struct PushVarArgs {
    /// Workspace names, or directories when -d is passed. With -d the
    /// workspace names are based on the directory structure
    pub workspaces: Vec<String>,

    /// Push to workspaces based on directories
    #[arg(short = 'd', default_value_t = false)]
    pub dirs: bool,

    /// Variable name
    #[arg(short = 'n', long)]
    pub name: String,

    /// Variable value (a file path with --file)
    #[arg(short = 'v', long)]
    pub value: String,

    /// Read the value from the file given in --value
    #[arg(short = 'f', long, default_value_t = false)]
    pub file: bool,

    /// Set an environment variable instead of a Terraform variable
    #[arg(short = 'e', long, default_value_t = false)]
    pub env: bool,

    /// Mark the variable as sensitive
    #[arg(short = 's', long, default_value_t = false)]
    pub sensitive: bool,
}
