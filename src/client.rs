//! PortfolioClient - handles communication with the portfolio backend.
//!
//! The backend exposes three kinds of resources:
//! - `GET /api/structure` - the virtual tree as JSON
//! - `GET /api/file?path=<abs path>` - raw file content
//! - `GET /data/...` - static assets (about text, face image)

use std::time::Duration;

use crate::fs::FsNode;

/// Environment variable that overrides the server URL.
pub const PORTFOLIO_URL_ENV: &str = "PORTFOLIO_URL";

/// Default server URL.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Default timeout for HTTP requests (10 seconds).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout (5 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur when talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Server URL is empty")]
    MissingServerUrl,

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Server returned {status} for {resource}")]
    Status { status: u16, resource: String },

    #[error("Invalid tree structure: {0}")]
    InvalidStructure(#[from] serde_json::Error),
}

/// Client for the portfolio backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl PortfolioClient {
    /// Create a client for `base_url` with the default request timeout.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ClientError::MissingServerUrl);
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            http_client,
        })
    }

    /// Get the base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the tree snapshot.
    pub async fn fetch_structure(&self) -> Result<FsNode, ClientError> {
        let url = format!("{}/api/structure", self.base_url);
        log::info!("Fetching tree from {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                resource: "/api/structure".to_string(),
            });
        }

        let body = response.text().await?;
        let root = FsNode::from_json(&body)?;
        log::info!("Tree loaded: {} top-level entries", root.children.len());
        Ok(root)
    }

    /// Fetch a file from the virtual tree by absolute path.
    pub async fn fetch_file(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        let request = self
            .http_client
            .get(format!("{}/api/file", self.base_url))
            .query(&[("path", path)]);
        self.send_bytes(request, path).await
    }

    /// Fetch a file and decode it as text (lossy UTF-8).
    pub async fn fetch_text(&self, path: &str) -> Result<String, ClientError> {
        let bytes = self.fetch_resource(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Fetch a resource identifier.
    ///
    /// Identifiers starting with `/api/` or `/data/` are requested as-is;
    /// anything else is treated as a path in the virtual tree.
    pub async fn fetch_resource(&self, resource: &str) -> Result<Vec<u8>, ClientError> {
        if is_direct_resource(resource) {
            let request = self
                .http_client
                .get(format!("{}{}", self.base_url, resource));
            self.send_bytes(request, resource).await
        } else {
            self.fetch_file(resource).await
        }
    }

    async fn send_bytes(
        &self,
        request: reqwest::RequestBuilder,
        resource: &str,
    ) -> Result<Vec<u8>, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} returned {}", resource, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                resource: resource.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Whether a resource identifier addresses the server directly.
pub fn is_direct_resource(resource: &str) -> bool {
    resource.starts_with("/api/") || resource.starts_with("/data/")
}
