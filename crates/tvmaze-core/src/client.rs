//! HTTP client for the TVMaze API
//!
//! Thin wrapper around `reqwest::Client` that resolves endpoints against a
//! configurable base URL, sends a single GET per call and decodes the JSON body
//! into a boundary type. There is no retry and no caching: a failed request is
//! reported to the caller as-is.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{RemoteFetchError, Result};

/// Base URL of the public TVMaze API
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Poster used for shows the catalog has no artwork for
pub const DEFAULT_IMAGE_URL: &str =
    "https://cdn.pixabay.com/photo/2022/11/19/09/35/forest-7601671_960_720.jpg";

/// Default User-Agent identifying this library
const DEFAULT_USER_AGENT: &str = concat!("tvmaze-lookup/", env!("CARGO_PKG_VERSION"));

/// Configuration for the TVMaze HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root all endpoints are resolved against (default: `TVMAZE_BASE_URL`)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Poster substituted for shows without a medium image (default: `DEFAULT_IMAGE_URL`)
    pub default_image_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Point the client at a different API root, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Override the poster used for shows without artwork.
    pub fn with_default_image_url(mut self, url: impl Into<String>) -> Self {
        self.default_image_url = url.into();
        self
    }
}

/// HTTP client for the TVMaze API
///
/// Cheap to share: all methods take `&self` and the client holds no mutable state,
/// so concurrent lookups never wait on each other.
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Parsed API root
    base_url: Url,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `RemoteFetchError::InvalidUrl` - `config.base_url` is not an absolute URL
    /// - `RemoteFetchError::Http` - the HTTP client cannot be built
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// The API root requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments.
    ///
    /// Each segment is appended as a single path component and percent-encoded,
    /// so a segment can never escape into another route.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteFetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` with optional query pairs and decode the JSON body as `T`.
    ///
    /// # Errors
    /// - `RemoteFetchError::Http` - network failure or timeout
    /// - `RemoteFetchError::NotFound` - catalog returned 404
    /// - `RemoteFetchError::Status` - catalog returned any other non-2xx status
    /// - `RemoteFetchError::Decode` - body is not valid JSON of the expected shape
    pub async fn get_json<T>(&self, url: Url, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self.client.get(url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }

        debug!(url = %url, "Requesting catalog");
        let response = request.send().await?;
        let status = response.status();
        let final_url = response.url().to_string();

        if status == reqwest::StatusCode::NOT_FOUND {
            warn!(url = %final_url, "Catalog returned 404");
            return Err(RemoteFetchError::NotFound(final_url));
        }

        if !status.is_success() {
            warn!(url = %final_url, status = status.as_u16(), "Catalog returned error status");
            return Err(RemoteFetchError::Status {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(url = %final_url, error = %e, "Catalog response did not match schema");
            RemoteFetchError::Decode {
                url: final_url,
                message: e.to_string(),
            }
        })
    }
}

/// Parse and validate the configured API root.
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| RemoteFetchError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(RemoteFetchError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}
