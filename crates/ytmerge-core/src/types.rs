//! Core data types for the playlist merger
//!
//! Wire types mirror the `playlistItems.list` response of the YouTube Data
//! API v3; [`Entry`] is the flattened form the rest of the crate works with.

use serde::Deserialize;

/// One video as it appears within a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Playlist item id (unique per playlist membership)
    pub item_id: String,

    /// Playlist the item was fetched from
    pub playlist_id: String,

    /// Video title
    pub title: String,

    /// Video publish time exactly as the API returned it (RFC 3339)
    pub published_at: String,

    /// Video id (e.g., "dQw4w9WgXcQ")
    pub video_id: String,
}

/// One page of a `playlistItems.list` response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemPage {
    /// Continuation token; empty or absent on the last page
    #[serde(default)]
    pub next_page_token: Option<String>,

    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

impl PlaylistItemPage {
    /// Returns the continuation token if another page follows
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub snippet: ItemSnippet,

    #[serde(default)]
    pub content_details: ItemContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnippet {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub playlist_id: String,

    /// Time the item was added to the playlist
    #[serde(default)]
    pub published_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemContentDetails {
    #[serde(default)]
    pub video_id: String,

    /// Missing for private and deleted videos
    #[serde(default)]
    pub video_published_at: String,
}

impl From<PlaylistItem> for Entry {
    fn from(item: PlaylistItem) -> Self {
        Self {
            item_id: item.id,
            playlist_id: item.snippet.playlist_id,
            title: item.snippet.title,
            published_at: item.content_details.video_published_at,
            video_id: item.content_details.video_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "kind": "youtube#playlistItemListResponse",
        "etag": "abc",
        "nextPageToken": "EAAaBlBUOkNBVQ",
        "items": [
            {
                "kind": "youtube#playlistItem",
                "id": "UExhYmMuNTY",
                "snippet": {
                    "publishedAt": "2024-05-01T10:00:00Z",
                    "title": "First video",
                    "playlistId": "PLabc"
                },
                "contentDetails": {
                    "videoId": "vid001",
                    "videoPublishedAt": "2019-01-02T03:04:05Z"
                }
            }
        ],
        "pageInfo": {"totalResults": 7, "resultsPerPage": 5}
    }"#;

    #[test]
    fn test_page_deserialization() {
        let page: PlaylistItemPage =
            serde_json::from_str(PAGE_JSON).expect("Deserialization should succeed");

        assert_eq!(page.next_token(), Some("EAAaBlBUOkNBVQ"));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].content_details.video_id, "vid001");
    }

    #[test]
    fn test_entry_uses_video_publish_time() {
        let page: PlaylistItemPage = serde_json::from_str(PAGE_JSON).unwrap();
        let entry = Entry::from(page.items.into_iter().next().unwrap());

        assert_eq!(
            entry,
            Entry {
                item_id: "UExhYmMuNTY".to_string(),
                playlist_id: "PLabc".to_string(),
                title: "First video".to_string(),
                published_at: "2019-01-02T03:04:05Z".to_string(),
                video_id: "vid001".to_string(),
            }
        );
    }

    #[test]
    fn test_last_page_has_no_token() {
        let page: PlaylistItemPage = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(page.next_token(), None);

        let page: PlaylistItemPage =
            serde_json::from_str(r#"{"nextPageToken": "", "items": []}"#).unwrap();
        assert_eq!(page.next_token(), None);
    }

    #[test]
    fn test_private_video_has_empty_publish_time() {
        let json = r#"{"items": [{
            "id": "x",
            "snippet": {"title": "Private video", "playlistId": "PLabc"},
            "contentDetails": {"videoId": "gone01"}
        }]}"#;
        let page: PlaylistItemPage = serde_json::from_str(json).unwrap();
        let entry = Entry::from(page.items[0].clone());

        assert_eq!(entry.title, "Private video");
        assert!(entry.published_at.is_empty());
    }
}
