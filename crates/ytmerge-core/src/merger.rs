//! Main merge API
//!
//! Combines the API client, the paginator and the chronological merge.

use crate::client::{ClientConfig, YoutubeClient};
use crate::error::Result;
use crate::merge::merge_playlists;
use crate::playlist::{PageSource, fetch_playlist};
use crate::types::Entry;

/// Fetches playlists one after another and merges them by publish time
///
/// Generic over the page source so the pipeline can run against scripted
/// pages; [`PlaylistMerger::new`] builds the YouTube-backed variant.
pub struct PlaylistMerger<S = YoutubeClient> {
    source: S,
}

impl PlaylistMerger<YoutubeClient> {
    /// Create a merger talking to the YouTube Data API with the given key
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a merger with custom client configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = YoutubeClient::with_config(api_key, config)?;
        Ok(Self::from_source(client))
    }
}

impl<S: PageSource> PlaylistMerger<S> {
    /// Create a merger over any page source
    pub fn from_source(source: S) -> Self {
        Self { source }
    }

    /// Fetch every playlist in order, one list per playlist
    ///
    /// Requests are issued sequentially. The first failure aborts the run
    /// and nothing fetched so far is returned.
    pub async fn fetch_all<T: AsRef<str>>(&self, playlist_ids: &[T]) -> Result<Vec<Vec<Entry>>> {
        let mut playlists = Vec::with_capacity(playlist_ids.len());
        for id in playlist_ids {
            playlists.push(fetch_playlist(&self.source, id.as_ref()).await?);
        }
        Ok(playlists)
    }

    /// Fetch every playlist and return all entries sorted by publish time
    ///
    /// # Errors
    /// - `Http`, `Api`, `InvalidResponse` if any page request fails
    /// - `TimestampParse` if any entry has an unparsable publish time
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytmerge_core::Result<()> {
    /// use ytmerge_core::PlaylistMerger;
    /// let merger = PlaylistMerger::new("my-api-key")?;
    /// let entries = merger.merge(&["PLabc", "PLdef"]).await?;
    /// for entry in entries {
    ///     println!("{} {}", entry.published_at, entry.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn merge<T: AsRef<str>>(&self, playlist_ids: &[T]) -> Result<Vec<Entry>> {
        let playlists = self.fetch_all(playlist_ids).await?;
        let merged = merge_playlists(playlists)?;
        tracing::info!(
            playlists = playlist_ids.len(),
            entries = merged.len(),
            "playlists merged"
        );
        Ok(merged)
    }

    /// Get a reference to the page source
    pub fn source(&self) -> &S {
        &self.source
    }
}
