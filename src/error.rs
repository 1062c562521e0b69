use std::fmt;

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// SSH key name not present in the organization
    SshKeyNotFound { name: String, org: String },
    /// Workspaces file missing or malformed
    WorkspacesFile(String),
    /// Directory scan failed
    Scan(String),
    /// VCS identifier could not be derived
    Vcs(String),
    /// Local file could not be read
    Io(String),
    /// JSON parsing error
    Json(String),
}

impl TfeError {
    /// Whether retrying the same request could succeed.
    ///
    /// Network failures, rate limiting (429) and server errors (5xx) are
    /// transient; everything else needs a change on the caller's side.
    pub fn is_retryable(&self) -> bool {
        match self {
            TfeError::Http(e) => !e.is_decode() && !e.is_builder(),
            TfeError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfeError::Credentials(msg) => write!(f, "{}", msg),
            TfeError::SshKeyNotFound { name, org } => write!(
                f,
                "SSH key not found: '{}' does not exist in organization '{}'",
                name, org
            ),
            TfeError::WorkspacesFile(msg) => write!(f, "Invalid workspaces file: {}", msg),
            TfeError::Scan(msg) => write!(f, "Failed to scan directories: {}", msg),
            TfeError::Vcs(msg) => write!(f, "VCS error: {}", msg),
            TfeError::Io(msg) => write!(f, "I/O error: {}", msg),
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TfeError {
    fn from(err: std::io::Error) -> Self {
        TfeError::Io(err.to_string())
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;
