//! VCS repository identifier discovery
//!
//! Workspaces linked to a VCS repository need its `org/repo` identifier,
//! derived from the first remote of the enclosing git working copy.

use std::path::Path;

use git2::Repository;
use log::debug;

use crate::error::{Result, TfeError};

/// Derive the `org/repo` identifier from a git remote URL.
///
/// Handles scp-like (`git@github.com:org/repo.git`) and URL
/// (`https://github.com/org/repo.git`, `ssh://git@host:22/org/repo`) forms.
pub fn identifier_from_remote_url(url: &str) -> Option<String> {
    let url = url.trim();

    let path = if let Some((_, rest)) = url.split_once("://") {
        // scheme://[user@]host[:port]/path
        rest.split_once('/').map(|(_, path)| path)?
    } else {
        // [user@]host:path
        url.split_once(':').map(|(_, path)| path)?
    };

    let identifier = path
        .trim_matches('/')
        .trim_end_matches(".git")
        .trim_end_matches('/');

    if identifier.is_empty() {
        None
    } else {
        Some(identifier.to_string())
    }
}

/// Find the enclosing repository of `start` and derive the identifier from
/// its first remote.
pub fn discover_identifier(start: &Path) -> Result<String> {
    let repo = Repository::discover(start).map_err(|e| {
        TfeError::Vcs(format!(
            "'{}' is not inside a git repository: {}",
            start.display(),
            e.message()
        ))
    })?;

    let remotes = repo
        .remotes()
        .map_err(|e| TfeError::Vcs(format!("cannot list git remotes: {}", e.message())))?;

    let remote_name = remotes
        .iter()
        .flatten()
        .next()
        .ok_or_else(|| TfeError::Vcs("repository has no remotes".to_string()))?;

    let remote = repo
        .find_remote(remote_name)
        .map_err(|e| TfeError::Vcs(format!("cannot read remote '{}': {}", remote_name, e.message())))?;

    let url = remote
        .url()
        .ok_or_else(|| TfeError::Vcs(format!("remote '{}' has no URL", remote_name)))?;

    debug!("Using git remote '{}' ({})", remote_name, url);

    identifier_from_remote_url(url).ok_or_else(|| {
        TfeError::Vcs(format!(
            "cannot derive repository identifier from remote URL '{}'",
            url
        ))
    })
}
