//! Directory scanning for Terraform configuration

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::config::scan;
use crate::error::{Result, TfeError};

/// Check whether a path lies inside a Terraform or Terragrunt cache directory
pub fn is_excluded(path: &Path) -> bool {
    path.components().any(|c| {
        let segment = c.as_os_str().to_string_lossy();
        scan::EXCLUDED_SEGMENTS.contains(&segment.as_ref())
    })
}

/// Return true if `dir` directly contains a file ending in `suffix`.
/// Symlinks count when they point at a regular file.
fn contains_matching_file(dir: &Path, suffix: &str) -> Result<bool> {
    let entries = fs::read_dir(dir)
        .map_err(|e| TfeError::Scan(format!("cannot read '{}': {}", dir.display(), e)))?;

    for entry in entries {
        let entry =
            entry.map_err(|e| TfeError::Scan(format!("cannot read '{}': {}", dir.display(), e)))?;
        if !entry.file_name().to_string_lossy().ends_with(suffix) {
            continue;
        }
        let is_file = fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
        if is_file {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Find every directory under `roots` that directly contains a file ending
/// in `suffix`.
///
/// Roots are walked in the given order, depth-first with entries sorted by
/// name. Cache directories are neither reported nor descended into. A
/// directory reachable from several roots is reported once, at its first
/// occurrence. A root that does not exist is an error.
pub fn scan_directories<P: AsRef<Path>>(roots: &[P], suffix: &str) -> Result<Vec<PathBuf>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut found = Vec::new();

    for root in roots {
        let root = root.as_ref();
        debug!("Scanning '{}' for *{} files", root.display(), suffix);

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_excluded(e.path()));

        for entry in walker {
            let entry = entry.map_err(|e| TfeError::Scan(e.to_string()))?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = entry.path();
            if contains_matching_file(dir, suffix)? && seen.insert(dir.to_path_buf()) {
                debug!("Found workspace directory: {}", dir.display());
                found.push(dir.to_path_buf());
            }
        }
    }

    Ok(found)
}
