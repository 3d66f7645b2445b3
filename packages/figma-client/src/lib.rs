//! Pure Figma REST API client.
//!
//! Fetches a file's document tree. Authentication uses a personal access
//! token sent as `X-Figma-Token`.
//!
//! # Example
//!
//! ```rust,ignore
//! use figma_client::FigmaClient;
//!
//! let client = FigmaClient::new("figd_...".into());
//! let file = client.fetch_file("aBcD1234").await?;
//! println!("{:?}", file.name);
//! ```

pub mod error;
pub mod types;

pub use error::{FigmaError, Result};
pub use types::{BoundingBox, FigmaFile, Node};

use std::time::Duration;

const BASE_URL: &str = "https://api.figma.com/v1";

#[derive(Clone)]
pub struct FigmaClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl FigmaClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at another API root (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FigmaError::Config(e.to_string()))?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a whole file, including its document tree.
    pub async fn fetch_file(&self, file_key: &str) -> Result<FigmaFile> {
        let url = self.file_url(file_key)?;
        tracing::debug!(file_key, "Fetching Figma file");

        let resp = self
            .client
            .get(url)
            .header("X-Figma-Token", &self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(file_key, status = %status, "Figma API error");
            return Err(FigmaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let file: FigmaFile = resp
            .json()
            .await
            .map_err(|e| FigmaError::Parse(e.to_string()))?;
        tracing::debug!(file_key, name = ?file.name, "Fetched Figma file");

        Ok(file)
    }

    /// `{base}/files/{key}`, with the key as one path segment.
    fn file_url(&self, file_key: &str) -> Result<reqwest::Url> {
        if !is_valid_file_key(file_key) {
            return Err(FigmaError::Config(format!("invalid file key: {:?}", file_key)));
        }

        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| FigmaError::Config(format!("invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| FigmaError::Config("base URL cannot take a path".into()))?
            .pop_if_empty()
            .push("files")
            .push(file_key);
        Ok(url)
    }
}

/// File keys are opaque alphanumeric ids, optionally with `-` or `_`.
pub fn is_valid_file_key(file_key: &str) -> bool {
    !file_key.is_empty()
        && file_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
