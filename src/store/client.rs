// Explorer API Client
// HTTP access to the explorer's mixnode endpoints

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;

use super::record::{MixnodeId, MixnodeRecord};

/// Errors raised while fetching mixnode data
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("explorer API returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid explorer API URL: {0}")]
    InvalidBaseUrl(String),
}

/// Something that can produce mixnode records
///
/// The store only talks to this trait, so it can be driven by an
/// in-memory source as easily as by the HTTP client.
#[async_trait]
pub trait MixnodeSource: Send + Sync {
    /// Fetch every bonded mixnode
    async fn fetch_mixnodes(&self) -> Result<Vec<MixnodeRecord>, FetchError>;

    /// Fetch a single mixnode, `Ok(None)` when the explorer does not know it
    async fn fetch_mixnode(&self, id: &MixnodeId) -> Result<Option<MixnodeRecord>, FetchError>;
}

/// Client for the explorer REST API
#[derive(Debug, Clone)]
pub struct ExplorerApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ExplorerApiClient {
    /// Create a client for the given base URL (e.g. `https://host/api/v1`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(FetchError::InvalidBaseUrl(trimmed.to_string()));
        }
        let base_url = Url::parse(trimmed).map_err(|_| FetchError::InvalidBaseUrl(trimmed.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(trimmed.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mixnode-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn mixnodes_url(&self) -> String {
        self.endpoint(&["mix-nodes"])
    }

    fn mixnode_url(&self, id: &MixnodeId) -> String {
        self.endpoint(&["mix-node", id.as_str()])
    }

    /// Base URL with `segments` appended, each percent-encoded as one path segment
    fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL can always take path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }
}

#[async_trait]
impl MixnodeSource for ExplorerApiClient {
    async fn fetch_mixnodes(&self) -> Result<Vec<MixnodeRecord>, FetchError> {
        let url = self.mixnodes_url();
        debug!(%url, "fetching mixnodes");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }

    async fn fetch_mixnode(&self, id: &MixnodeId) -> Result<Option<MixnodeRecord>, FetchError> {
        let url = self.mixnode_url(id);
        debug!(%url, "fetching mixnode");

        let response = self.http.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(FetchError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }
}
