//! Chronological merge of playlist entries

use chrono::{DateTime, FixedOffset};

use crate::error::{Result, YtMergeError};
use crate::types::Entry;

/// Parses an entry's publish timestamp as strict RFC 3339
///
/// chrono also takes a space between date and time and a `:60` leap
/// second; both are refused here.
pub fn parse_published_at(entry: &Entry) -> Result<DateTime<FixedOffset>> {
    let value = entry.published_at.as_str();
    let checked = strict_rfc3339(value).and_then(|()| {
        DateTime::parse_from_rfc3339(value).map_err(|err| err.to_string())
    });
    checked.map_err(|reason| YtMergeError::TimestampParse {
        video_id: entry.video_id.clone(),
        value: entry.published_at.clone(),
        reason,
    })
}

// Layout is "YYYY-MM-DDTHH:MM:SS..." so byte 10 is the separator and
// bytes 17..19 the seconds.
fn strict_rfc3339(value: &str) -> std::result::Result<(), String> {
    if !matches!(value.as_bytes().get(10), Some(b'T' | b't')) {
        return Err("date and time must be separated by 'T'".to_string());
    }
    if value.get(17..19) == Some("60") {
        return Err("leap seconds are not accepted".to_string());
    }
    Ok(())
}

/// Concatenates playlists in order and sorts the result by publish time
///
/// Every timestamp is parsed before anything is sorted, so a single bad
/// value fails the merge. The sort is stable: entries with the same
/// instant keep their concatenation order.
pub fn merge_playlists<I>(playlists: I) -> Result<Vec<Entry>>
where
    I: IntoIterator<Item = Vec<Entry>>,
{
    let mut timed = playlists
        .into_iter()
        .flatten()
        .map(|entry| parse_published_at(&entry).map(|published| (published, entry)))
        .collect::<Result<Vec<_>>>()?;

    // DateTime<FixedOffset> orders by instant regardless of offset.
    timed.sort_by_key(|(published, _)| *published);

    Ok(timed.into_iter().map(|(_, entry)| entry).collect())
}
