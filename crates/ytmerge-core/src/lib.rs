//! YouTube Playlist Merger Core Library
//!
//! Merges several YouTube playlists into one list ordered by video publish
//! time.
//!
//! # Overview
//!
//! The pipeline is strictly linear:
//! - [`input`] reads the API key and the playlist URL file
//! - [`url`] extracts the `list` id from every URL before any request is made
//! - [`PlaylistMerger`] pages through `playlistItems.list` for each playlist,
//!   one request at a time, and merges the results by publish time
//! - [`report`] prints one quoted line per entry
//!
//! # Example
//!
//! ```no_run
//! use ytmerge_core::{PlaylistMerger, Result, extract_playlist_ids, write_report};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let ids = extract_playlist_ids(&[
//!         "https://youtube.com/playlist?list=PLabc",
//!         "https://youtube.com/playlist?list=PLdef",
//!     ])?;
//!
//!     let merger = PlaylistMerger::new("my-api-key")?;
//!     let entries = merger.merge(&ids).await?;
//!
//!     write_report(&mut std::io::stdout().lock(), &entries)?;
//!     Ok(())
//! }
//! ```
//!
//! Any failure aborts the whole merge; there are no retries and no partial
//! results.

mod client;
mod error;
pub mod input;
mod merge;
mod merger;
mod playlist;
pub mod report;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, DEFAULT_API_BASE, ITEM_PARTS, YoutubeClient};

// Re-export error types
pub use error::{Result, YtMergeError};

// Re-export input loaders
pub use input::{load_api_key, load_playlist_refs};

// Re-export pagination and merge building blocks
pub use merge::{merge_playlists, parse_published_at};
pub use playlist::{PageSource, fetch_playlist};

// Re-export main merge API
pub use merger::PlaylistMerger;

// Re-export report writer
pub use report::write_report;

// Re-export data types
pub use types::{Entry, ItemContentDetails, ItemSnippet, PlaylistItem, PlaylistItemPage};

// Re-export URL helper functions for convenience
pub use self::url::{PLAYLIST_HOST, extract_playlist_id, extract_playlist_ids};
