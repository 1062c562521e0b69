//! TFE token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// `credentials.tfrc.json` structure
#[derive(Deserialize, Debug)]
struct TfeCredentials {
    credentials: HashMap<String, TfeCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
struct TfeCredential {
    token: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
    terraformrc_path: Option<PathBuf>,
    credentials_json_path: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a new token resolver for the given host, using the platform's
    /// default credential file locations
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            terraformrc_path: dirs::home_dir().map(|p| p.join(credentials::TERRAFORMRC)),
            credentials_json_path: Self::get_credentials_path(),
        }
    }

    /// Override the credential file locations
    pub fn with_files(
        mut self,
        terraformrc: Option<PathBuf>,
        credentials_json: Option<PathBuf>,
    ) -> Self {
        self.terraformrc_path = terraformrc;
        self.credentials_json_path = credentials_json;
        self
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (TF_TOKEN, TFE_TOKEN, TFC_TOKEN - in order)
    /// 3. ~/.terraformrc `credentials "<host>" { token = ... }`
    /// 4. ~/.terraform.d/credentials.tfrc.json
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No token found in environment variables {:?}, trying credentials files",
            credentials::TOKEN_ENV_VARS
        );
        self.resolve_from_files()
    }

    /// Look the host up in the credential files, in precedence order
    pub fn resolve_from_files(&self) -> Result<String> {
        if let Some(path) = &self.terraformrc_path {
            if let Some(token) = self.read_from_terraformrc(path)? {
                return Ok(token);
            }
        }

        if let Some(path) = &self.credentials_json_path {
            if let Some(token) = self.read_from_credentials_file(path)? {
                return Ok(token);
            }
        }

        Err(TfeError::TokenNotFound(self.token_not_found_message()))
    }

    /// Read token from the HCL CLI config file
    fn read_from_terraformrc(&self, path: &Path) -> Result<Option<String>> {
        let Ok(content) = fs::read_to_string(path) else {
            debug!("No CLI config file at {}", path.display());
            return Ok(None);
        };

        let body: hcl::Body = hcl::parse(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse CLI config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let token = body
            .blocks()
            .filter(|block| block.identifier() == "credentials")
            .filter(|block| {
                block
                    .labels()
                    .first()
                    .is_some_and(|label| label.as_str() == self.host)
            })
            .flat_map(|block| block.body().attributes())
            .find(|attr| attr.key() == "token")
            .and_then(|attr| match attr.expr() {
                hcl::Expression::String(token) => Some(token.clone()),
                _ => None,
            });

        if token.is_some() {
            debug!(
                "Using token from {} for host: {}",
                path.display(),
                self.host
            );
        }
        Ok(token)
    }

    /// Read token from the JSON credentials file written by `terraform login`
    fn read_from_credentials_file(&self, path: &Path) -> Result<Option<String>> {
        debug!("Looking for credentials file at: {}", path.display());

        let Ok(content) = fs::read_to_string(path) else {
            return Ok(None);
        };

        let creds: TfeCredentials = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(creds.credentials.get(&self.host).map(|cred| {
            debug!(
                "Using token from credentials file {} for host: {}",
                path.display(),
                self.host
            );
            cred.token.clone()
        }))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let files: Vec<String> = [&self.terraformrc_path, &self.credentials_json_path]
            .into_iter()
            .flatten()
            .map(|p| p.display().to_string())
            .collect();

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      tfws --token <TOKEN>\n\
             2. Environment var:   export TF_TOKEN=<TOKEN>  (also: TFE_TOKEN, TFC_TOKEN)\n\
             3. CLI config file:   credentials \"{}\" {{ token = \"<TOKEN>\" }} in ~/.terraformrc\n\
             4. Terraform login:   terraform login {}\n\
             \n\
             See: https://developer.hashicorp.com/terraform/cli/config/config-file#credentials\n\
             Checked: env vars [{}], files [{}]",
            self.host,
            self.host,
            self.host,
            env_vars,
            files.join(", ")
        )
    }

    /// Get the path to Terraform credentials file (platform-specific)
    /// - Windows: %APPDATA%\terraform.d\credentials.tfrc.json
    /// - Linux/macOS: ~/.terraform.d/credentials.tfrc.json
    fn get_credentials_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn resolver_with(
        tmp: &TempDir,
        rc: Option<&str>,
        json: Option<&str>,
    ) -> TokenResolver {
        let rc_path = tmp.path().join(".terraformrc");
        let json_path = tmp.path().join("credentials.tfrc.json");
        if let Some(content) = rc {
            fs::write(&rc_path, content).unwrap();
        }
        if let Some(content) = json {
            fs::write(&json_path, content).unwrap();
        }
        TokenResolver::new("app.terraform.io").with_files(Some(rc_path), Some(json_path))
    }

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let resolver = TokenResolver::new("test.example.com");
        let result = resolver.resolve(Some("cli-token-123"));
        assert_eq!(result.unwrap(), "cli-token-123");
    }

    #[test]
    fn test_token_from_terraformrc() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver_with(
            &tmp,
            Some(
                r#"
                plugin_cache_dir = "/tmp/plugins"

                credentials "tfe.internal.example" {
                  token = "other-token"
                }

                credentials "app.terraform.io" {
                  token = "rc-token-abc"
                }
                "#,
            ),
            None,
        );

        assert_eq!(resolver.resolve_from_files().unwrap(), "rc-token-abc");
    }

    #[test]
    fn test_terraformrc_wins_over_credentials_json() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver_with(
            &tmp,
            Some(r#"credentials "app.terraform.io" { token = "from-rc" }"#),
            Some(r#"{"credentials": {"app.terraform.io": {"token": "from-json"}}}"#),
        );

        assert_eq!(resolver.resolve_from_files().unwrap(), "from-rc");
    }

    #[test]
    fn test_falls_back_to_credentials_json_when_host_missing_in_rc() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver_with(
            &tmp,
            Some(r#"credentials "other.host" { token = "x" }"#),
            Some(r#"{"credentials": {"app.terraform.io": {"token": "from-json"}}}"#),
        );

        assert_eq!(resolver.resolve_from_files().unwrap(), "from-json");
    }

    #[test]
    fn test_no_files_is_token_not_found() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver_with(&tmp, None, None);

        match resolver.resolve_from_files() {
            Err(TfeError::TokenNotFound(msg)) => {
                assert!(msg.contains("app.terraform.io"));
                assert!(msg.contains("TF_TOKEN"));
                assert!(msg.contains(".terraformrc"));
            }
            other => panic!("Expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_terraformrc_is_credentials_error() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver_with(&tmp, Some("credentials \"x\" {"), None);

        assert!(matches!(
            resolver.resolve_from_files(),
            Err(TfeError::Credentials(_))
        ));
    }

    #[test]
    fn test_invalid_credentials_json_is_credentials_error() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver_with(&tmp, None, Some("{not json"));

        assert!(matches!(
            resolver.resolve_from_files(),
            Err(TfeError::Credentials(_))
        ));
    }

    #[test]
    fn test_credentials_file_parsing() {
        let json = r#"{
            "credentials": {
                "app.terraform.io": {
                    "token": "test-token-123"
                },
                "custom.host.com": {
                    "token": "custom-token-456"
                }
            }
        }"#;

        let creds: TfeCredentials = serde_json::from_str(json).unwrap();
        assert_eq!(creds.credentials.len(), 2);
        assert_eq!(
            creds.credentials.get("custom.host.com").unwrap().token,
            "custom-token-456"
        );
    }
}
