//! Workspace target resolution
//!
//! Commands address workspaces either by name or by the directory they were
//! created from.

use std::path::PathBuf;

use crate::discovery::{scan_directories, workspace_name};
use crate::error::Result;

/// Target type for workspace resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceTarget {
    /// Workspace name, used verbatim
    Name(String),
    /// Directory, mapped to a name by replacing separators
    Directory(PathBuf),
}

impl WorkspaceTarget {
    /// Resolved workspace name
    pub fn name(&self) -> String {
        match self {
            WorkspaceTarget::Name(name) => name.clone(),
            WorkspaceTarget::Directory(dir) => workspace_name(dir),
        }
    }
}

/// Turn positional arguments into workspace targets.
///
/// With `from_directories` the arguments are scan roots and every discovered
/// directory becomes a target; otherwise each argument is a workspace name.
pub fn resolve_targets(
    args: &[String],
    from_directories: bool,
    search_suffix: &str,
) -> Result<Vec<WorkspaceTarget>> {
    if from_directories {
        Ok(scan_directories(args, search_suffix)?
            .into_iter()
            .map(WorkspaceTarget::Directory)
            .collect())
    } else {
        Ok(args.iter().cloned().map(WorkspaceTarget::Name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_target_names() {
        assert_eq!(
            WorkspaceTarget::Name("infra/prod".to_string()).name(),
            "infra/prod"
        );
        assert_eq!(
            WorkspaceTarget::Directory(PathBuf::from("infra/prod")).name(),
            "infra-prod"
        );
    }

    #[test]
    fn test_resolve_names() {
        let args = vec!["a".to_string(), "b-c".to_string()];
        let targets = resolve_targets(&args, false, ".tf").unwrap();
        assert_eq!(
            targets,
            vec![
                WorkspaceTarget::Name("a".to_string()),
                WorkspaceTarget::Name("b-c".to_string())
            ]
        );
    }

    #[test]
    fn test_resolve_directories() {
        let tmp = TempDir::new().unwrap();
        let prod = tmp.path().join("infra/prod");
        fs::create_dir_all(&prod).unwrap();
        fs::write(prod.join("main.tf"), "").unwrap();

        let root = tmp.path().join("infra").to_string_lossy().to_string();
        let targets = resolve_targets(&[root], true, ".tf").unwrap();

        assert_eq!(targets, vec![WorkspaceTarget::Directory(prod)]);
    }

    #[test]
    fn test_resolve_names_skips_filesystem() {
        let args = vec!["/definitely/not/here".to_string()];
        assert!(resolve_targets(&args, false, ".tf").is_ok());
    }
}
