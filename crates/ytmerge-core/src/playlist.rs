//! Playlist pagination
//!
//! Walks `nextPageToken` until the API reports the last page.

use crate::error::Result;
use crate::types::{Entry, PlaylistItemPage};

/// Source of playlist item pages
///
/// [`crate::YoutubeClient`] is the HTTP implementation; tests plug in
/// scripted sources.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetch one page; `page_token` is `None` for the first page
    async fn fetch_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemPage>;
}

/// Fetch every entry of a playlist, in API order
///
/// Requests pages until one comes back with an empty or missing
/// continuation token. The first failing page aborts the whole playlist.
pub async fn fetch_playlist<S: PageSource>(source: &S, playlist_id: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = source.fetch_page(playlist_id, page_token.as_deref()).await?;
        pages += 1;
        tracing::debug!(
            playlist_id,
            page = pages,
            items = page.items.len(),
            "fetched playlist page"
        );

        page_token = page.next_token().map(str::to_string);
        entries.extend(page.items.into_iter().map(Entry::from));

        if page_token.is_none() {
            break;
        }
    }

    tracing::info!(playlist_id, pages, entries = entries.len(), "playlist fetched");
    Ok(entries)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::YtMergeError;
    use crate::types::{ItemContentDetails, ItemSnippet, PlaylistItem};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    pub(crate) fn item(playlist_id: &str, video_id: &str, published_at: &str) -> PlaylistItem {
        PlaylistItem {
            id: format!("{}-{}", playlist_id, video_id),
            snippet: ItemSnippet {
                title: format!("Video {}", video_id),
                playlist_id: playlist_id.to_string(),
                published_at: String::new(),
            },
            content_details: ItemContentDetails {
                video_id: video_id.to_string(),
                video_published_at: published_at.to_string(),
            },
        }
    }

    pub(crate) fn page(items: Vec<PlaylistItem>, token: &str) -> PlaylistItemPage {
        PlaylistItemPage {
            next_page_token: Some(token.to_string()),
            items,
        }
    }

    /// Replays canned responses and records the tokens it was asked for
    #[derive(Default)]
    pub(crate) struct ScriptedSource {
        responses: RefCell<VecDeque<Result<PlaylistItemPage>>>,
        pub(crate) calls: RefCell<Vec<(String, Option<String>)>>,
    }

    impl ScriptedSource {
        pub(crate) fn new(responses: Vec<Result<PlaylistItemPage>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageSource for ScriptedSource {
        async fn fetch_page(
            &self,
            playlist_id: &str,
            page_token: Option<&str>,
        ) -> Result<PlaylistItemPage> {
            self.calls
                .borrow_mut()
                .push((playlist_id.to_string(), page_token.map(str::to_string)));
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("source asked for more pages than scripted")
        }
    }

    fn video_ids(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.video_id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_fetch_playlist_follows_tokens() {
        let source = ScriptedSource::new(vec![
            Ok(page(vec![item("PL", "a", "2020-01-01T00:00:00Z"), item("PL", "b", "2020-01-02T00:00:00Z")], "t1")),
            Ok(page(vec![item("PL", "c", "2020-01-03T00:00:00Z")], "t2")),
            Ok(page(vec![item("PL", "d", "2020-01-04T00:00:00Z")], "")),
        ]);

        let entries = fetch_playlist(&source, "PL").await.unwrap();

        assert_eq!(video_ids(&entries), vec!["a", "b", "c", "d"]);
        assert_eq!(
            *source.calls.borrow(),
            vec![
                ("PL".to_string(), None),
                ("PL".to_string(), Some("t1".to_string())),
                ("PL".to_string(), Some("t2".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_playlist_absent_token_ends() {
        let source = ScriptedSource::new(vec![Ok(PlaylistItemPage {
            next_page_token: None,
            items: vec![item("PL", "a", "2020-01-01T00:00:00Z")],
        })]);

        let entries = fetch_playlist(&source, "PL").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(source.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_playlist_empty_playlist() {
        let source = ScriptedSource::new(vec![Ok(page(Vec::new(), ""))]);
        let entries = fetch_playlist(&source, "PL").await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_playlist_empty_page_with_token_continues() {
        let source = ScriptedSource::new(vec![
            Ok(page(Vec::new(), "t1")),
            Ok(page(vec![item("PL", "a", "2020-01-01T00:00:00Z")], "")),
        ]);
        let entries = fetch_playlist(&source, "PL").await.unwrap();
        assert_eq!(video_ids(&entries), vec!["a"]);
    }

    #[tokio::test]
    async fn test_fetch_playlist_error_mid_way_aborts() {
        let source = ScriptedSource::new(vec![
            Ok(page(vec![item("PL", "a", "2020-01-01T00:00:00Z")], "t1")),
            Err(YtMergeError::Api {
                status: 403,
                message: "quotaExceeded".to_string(),
            }),
        ]);

        let result = fetch_playlist(&source, "PL").await;
        assert!(matches!(result, Err(YtMergeError::Api { status: 403, .. })));
        assert_eq!(source.calls.borrow().len(), 2);
    }
}
