//! HTTP client for the YouTube Data API
//!
//! Wraps `reqwest` and issues single `playlistItems.list` page requests.
//! Pagination lives in [`crate::playlist`].

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, YtMergeError};
use crate::playlist::PageSource;
use crate::types::PlaylistItemPage;

/// Default base URL of the YouTube Data API v3
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Resource parts requested for every playlist item
pub const ITEM_PARTS: &str = "snippet,id,contentDetails";

const USER_AGENT: &str = concat!("ytmerge/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL without trailing slash (default: [`DEFAULT_API_BASE`])
    pub api_base: String,
    /// Request timeout in seconds (default: none, reqwest's own behaviour)
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

/// YouTube Data API client authenticated with an API key
pub struct YoutubeClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl YoutubeClient {
    /// Create a new client with default configuration
    ///
    /// The key is sent exactly as given.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(YtMergeError::Http)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of a playlist's items
    ///
    /// `page_token` is omitted from the request when `None`.
    ///
    /// # Errors
    /// - `Http` - network failure
    /// - `Api` - non-success status (bad key, quota exhausted, playlist not found)
    /// - `InvalidResponse` - body is not a playlist item page
    pub async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemPage> {
        let url = format!("{}/playlistItems", self.api_base);

        let mut request = self.client.get(&url).query(&[
            ("part", ITEM_PARTS),
            ("playlistId", playlist_id),
            ("key", self.api_key.as_str()),
        ]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await.map_err(YtMergeError::Http)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(YtMergeError::Http)?;

        if !status.is_success() {
            return Err(YtMergeError::Api {
                status: status.as_u16(),
                message: api_error_message(&bytes).unwrap_or_else(|| status.to_string()),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| YtMergeError::InvalidResponse(e.to_string()))
    }

    /// Get the API base URL this client talks to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl PageSource for YoutubeClient {
    async fn fetch_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemPage> {
        self.list_playlist_items(playlist_id, page_token).await
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Pulls `error.message` out of a Google API error body
fn api_error_message(body: &[u8]) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_slice(body).ok()?;
    Some(parsed.error.message).filter(|message| !message.is_empty())
}
