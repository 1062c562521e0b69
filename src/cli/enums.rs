//! Value enums for CLI arguments

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Where Terraform runs for a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Runs execute on the local machine
    Local,
    /// Runs execute on Terraform Cloud/Enterprise workers
    Remote,
    /// Runs execute on self-hosted agents
    Agent,
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionMode::Local => write!(f, "local"),
            ExecutionMode::Remote => write!(f, "remote"),
            ExecutionMode::Agent => write!(f, "agent"),
        }
    }
}
