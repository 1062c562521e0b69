//! CLI argument parsing

mod create;
mod delete;
mod enums;
mod push_var;
mod update;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use create::CreateArgs;
pub use delete::DeleteArgs;
pub use enums::ExecutionMode;
pub use push_var::PushVarArgs;
pub use update::UpdateArgs;

/// Terraform Cloud/Enterprise workspace manager
#[derive(Parser, Debug)]
#[command(name = "tfws")]
#[command(version)]
#[command(
    about = "Manage Terraform Cloud/Enterprise workspaces based on your directory structure",
    long_about = None
)]
pub struct Cli {
    /// Terraform Enterprise/Cloud organization
    #[arg(long, env = "TFE_ORG")]
    pub org: String,

    /// Terraform Enterprise/Cloud address
    #[arg(long, env = "TFE_HOSTNAME", default_value = defaults::HOST)]
    pub tfe: String,

    /// File ending marking a directory for workspace creation when traversing
    /// directory structures
    #[arg(long, default_value = defaults::SEARCH_SUFFIX)]
    pub search_suffix: String,

    /// API token (overrides env vars and credentials files)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create workspaces
    Create(CreateArgs),

    /// Update workspaces
    Update(UpdateArgs),

    /// Delete workspaces
    Delete(DeleteArgs),

    /// Push variables to workspaces
    #[command(name = "push_var", visible_alias = "push-var")]
    PushVar(PushVarArgs),

    /// List workspaces
    List,
}

impl Command {
    /// OAuth token ID requested for VCS linkage, if any
    pub fn oauth_token_id(&self) -> Option<&str> {
        match self {
            Command::Create(args) => args.oauth_token_id.as_deref(),
            Command::Update(args) => args.oauth_token_id.as_deref(),
            _ => None,
        }
    }
}
