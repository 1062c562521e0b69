//! Workspace discovery from a repository's directory layout
//!
//! Scans directory trees for Terraform configuration and maps the
//! resulting directories to workspace names.

mod naming;
mod scanner;

pub use naming::{working_directory, workspace_name};
pub use scanner::{is_excluded, scan_directories};
