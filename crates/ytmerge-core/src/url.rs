//! Playlist URL helpers
//!
//! Extracts playlist identifiers from user-supplied YouTube URLs.

use url::Url;

use crate::error::{Result, YtMergeError};

/// The only host accepted in playlist URLs (compared exactly, case-sensitive)
pub const PLAYLIST_HOST: &str = "youtube.com";

/// Query parameter carrying the playlist id
const LIST_PARAM: &str = "list";

/// Extracts the playlist id from a playlist URL
///
/// The URL must be absolute, its authority must be exactly [`PLAYLIST_HOST`]
/// and it must carry exactly one `list` query parameter. The parameter value
/// is returned after query decoding and nothing else.
///
/// # Errors
/// - `UrlParse` if the string is not a URL
/// - `InvalidHost` if the host is not [`PLAYLIST_HOST`]
/// - `MissingParameter` if there is no `list` parameter
/// - `AmbiguousParameter` if `list` appears more than once
///
/// # Example
/// ```
/// use ytmerge_core::url::extract_playlist_id;
/// let id = extract_playlist_id("https://youtube.com/playlist?list=PL590L5WQmH8fJ54F369BLDSqIwcs-TCfs").unwrap();
/// assert_eq!(id, "PL590L5WQmH8fJ54F369BLDSqIwcs-TCfs");
/// ```
pub fn extract_playlist_id(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|source| YtMergeError::UrlParse {
        url: raw.to_string(),
        source,
    })?;

    let host = raw_authority(raw);
    if host != PLAYLIST_HOST {
        return Err(YtMergeError::InvalidHost {
            url: raw.to_string(),
            host: host.to_string(),
        });
    }

    let mut values: Vec<String> = parsed
        .query_pairs()
        .filter(|(key, _)| key == LIST_PARAM)
        .map(|(_, value)| value.into_owned())
        .collect();

    match values.len() {
        0 => Err(YtMergeError::MissingParameter {
            url: raw.to_string(),
        }),
        1 => Ok(values.remove(0)),
        count => Err(YtMergeError::AmbiguousParameter {
            url: raw.to_string(),
            count,
        }),
    }
}

/// Extracts playlist ids from every reference, in order
///
/// Fails on the first reference that does not resolve.
pub fn extract_playlist_ids<S: AsRef<str>>(refs: &[S]) -> Result<Vec<String>> {
    refs.iter()
        .map(|raw| extract_playlist_id(raw.as_ref()))
        .collect()
}

// Host and port exactly as typed. `Url` lowercases the host and drops
// default ports, so it cannot be used for the comparison.
fn raw_authority(raw: &str) -> &str {
    let rest = raw.split_once("://").map_or("", |(_, rest)| rest);
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    authority.rsplit_once('@').map_or(authority, |(_, host)| host)
}
