//! Directory path to workspace name mapping

use std::path::{is_separator, Path};

use crate::config::scan::NAME_DELIMITER;

/// Workspace name for a directory: every path separator becomes `-`.
///
/// No validation is applied; the API rejects names it does not accept.
pub fn workspace_name(dir: &Path) -> String {
    dir.to_string_lossy()
        .chars()
        .map(|c| if is_separator(c) { NAME_DELIMITER } else { c })
        .collect()
}

/// Working directory attribute sent to the API, always `/`-separated
pub fn working_directory(dir: &Path) -> String {
    dir.to_string_lossy()
        .chars()
        .map(|c| if is_separator(c) { '/' } else { c })
        .collect()
}
