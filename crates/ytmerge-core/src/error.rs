//! Error types for the playlist merger
//!
//! Every stage of the pipeline reports through one enum; all variants are
//! terminal for a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all ytmerge operations
#[derive(Error, Debug)]
pub enum YtMergeError {
    /// Credential or playlist file is missing or unreadable
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Playlist reference is not a well-formed URL
    #[error("Invalid URL {url:?}: {source}")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// URL points somewhere other than the playlist host
    #[error("Unexpected host {host:?} in {url:?}, expected {expected:?}", expected = crate::url::PLAYLIST_HOST)]
    InvalidHost { url: String, host: String },

    /// URL has no `list` query parameter
    #[error("Query parameter 'list' does not exist in URL {url:?}")]
    MissingParameter { url: String },

    /// URL has more than one `list` query parameter
    #[error("Query parameter 'list' should have a single value, found {count} in URL {url:?}")]
    AmbiguousParameter { url: String, count: usize },

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// API answered with a body that could not be decoded
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Entry publish timestamp is not RFC 3339
    #[error("Invalid publish timestamp {value:?} for video {video_id:?}: {reason}")]
    TimestampParse {
        video_id: String,
        value: String,
        reason: String,
    },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl YtMergeError {
    /// Whether the error came from talking to the remote API
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            YtMergeError::Http(_) | YtMergeError::Api { .. } | YtMergeError::InvalidResponse(_)
        )
    }
}

/// Result type alias for ytmerge operations
pub type Result<T> = std::result::Result<T, YtMergeError>;
