/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Variables endpoint
    pub const VARS: &str = "vars";

    /// Organization SSH keys endpoint
    pub const SSH_KEYS: &str = "ssh-keys";

    /// JSON:API media type used for request bodies
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Terraform CLI config file (HCL), relative to HOME
    pub const TERRAFORMRC: &str = ".terraformrc";

    /// Credentials file written by `terraform login` (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Credentials file name on Windows (relative to %APPDATA%)
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TF_TOKEN", "TFE_TOKEN", "TFC_TOKEN"];
}

/// Directory scanning
pub mod scan {
    /// Path segments never treated as workspace directories
    pub const EXCLUDED_SEGMENTS: &[&str] = &[".terraform", ".terragrunt-cache"];

    /// Workspace name delimiter replacing path separators
    pub const NAME_DELIMITER: char = '-';
}

/// Default values for CLI
pub mod defaults {
    /// Default TFE host
    pub const HOST: &str = "app.terraform.io";

    /// Default suffix marking a Terraform configuration directory
    pub const SEARCH_SUFFIX: &str = ".tf";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
