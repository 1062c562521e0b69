//! TFE HTTP client for API interactions

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};

/// TFE API client scoped to one organization
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    org: String,
    /// `org/repo` identifier of the enclosing git repository, if resolved
    vcs_identifier: Option<String>,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl TfeClient {
    /// Create a new TFE client
    pub fn new(token: String, host: String, org: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            org,
            vcs_identifier: None,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, org: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host: "mock.terraform.io".to_string(),
            org,
            vcs_identifier: None,
            base_url_override: Some(base_url),
        }
    }

    /// Attach the repository identifier used for VCS-linked workspaces
    pub fn with_vcs_identifier(mut self, identifier: Option<String>) -> Self {
        self.vcs_identifier = identifier;
        self
    }

    /// Organization all workspace operations are scoped to
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Repository identifier used for VCS linkage
    pub fn vcs_identifier(&self) -> Option<&str> {
        self.vcs_identifier.as_deref()
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// URL of the organization's workspace collection
    pub(crate) fn workspaces_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(&self.org),
            api::WORKSPACES
        )
    }

    /// URL of a single workspace addressed by name
    pub(crate) fn workspace_url(&self, name: &str) -> String {
        format!("{}/{}", self.workspaces_url(), urlencoding::encode(name))
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("GET {}", url);
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("POST {}", url);
        self.with_headers(self.client.post(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("PATCH {}", url);
        self.with_headers(self.client.patch(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("DELETE {}", url);
        self.with_headers(self.client.delete(url))
    }

    /// Turn a non-success response into `TfeError::Api`, carrying the body
    pub(crate) async fn check_response(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(TfeError::Api {
            status,
            message: format!("{}: {}", error_context, body),
        })
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.check_response(response, error_context).await?;
        let raw: serde_json::Value = response.json().await?;
        serde_json::from_value(raw).map_err(|e| TfeError::Api {
            status: 200,
            message: format!("Failed to parse {}: {}", error_context, e),
        })
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "acme".to_string(),
            base_url.to_string(),
        )
    }
}
