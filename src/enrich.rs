use futures::future::join_all;

use crate::extract::extract_video_id;
use crate::model::{EnrichedVideo, VideoEntry, UNKNOWN_TITLE};
use crate::oembed::{OembedClient, VideoMetadata};

/// Deterministic thumbnail location for an extracted video id. URLs without
/// an extractable id get an empty id segment; the asset fetch simply fails
/// and the grid shows a placeholder tile.
pub fn thumbnail_url(video_id: Option<&str>) -> String {
    format!(
        "https://img.youtube.com/vi/{}/0.jpg",
        video_id.unwrap_or("")
    )
}

/// Build the display form of one catalog entry from an optional resolver
/// result. The thumbnail never depends on the resolver outcome; the title
/// degrades to the sentinel.
fn enrich_entry(entry: &VideoEntry, meta: Option<VideoMetadata>) -> EnrichedVideo {
    let video_id = extract_video_id(&entry.url).map(str::to_owned);
    let (title, author) = match meta {
        Some(meta) => (meta.title, meta.author_name),
        None => (UNKNOWN_TITLE.to_owned(), None),
    };
    EnrichedVideo {
        id: entry.id,
        url: entry.url.clone(),
        thumbnail: thumbnail_url(video_id.as_deref()),
        video_id,
        title,
        author,
    }
}

/// Resolve metadata for every catalog entry concurrently and return the full
/// enriched list once all lookups have settled, in catalog order.
pub async fn enrich_catalog(client: &OembedClient, entries: &[VideoEntry]) -> Vec<EnrichedVideo> {
    let lookups = entries.iter().map(|entry| async move {
        let meta = client.resolve(&entry.url).await;
        enrich_entry(entry, meta)
    });
    join_all(lookups).await
}

/// Re-resolve a single video before it is marked as playing. A fresh title
/// and author replace the enriched ones on success; the video is returned
/// unchanged when the lookup fails.
pub async fn refresh_selection(client: &OembedClient, video: EnrichedVideo) -> EnrichedVideo {
    match client.resolve(&video.url).await {
        Some(meta) => EnrichedVideo {
            title: meta.title,
            author: meta.author_name,
            ..video
        },
        None => video,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    fn entry(id: u32, url: &str) -> VideoEntry {
        VideoEntry {
            id,
            url: url.to_owned(),
        }
    }

    fn client_for(server: &ServerGuard) -> OembedClient {
        OembedClient::with_endpoint(format!("{}/oembed", server.url()))
    }

    async fn mock_title(server: &mut ServerGuard, video_url: &str, title: &str) -> mockito::Mock {
        server
            .mock("GET", "/oembed")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("url".into(), video_url.into()),
                Matcher::UrlEncoded("format".into(), "json".into()),
            ]))
            .with_status(200)
            .with_body(serde_json::json!({ "title": title }).to_string())
            .create_async()
            .await
    }

    async fn mock_failure(server: &mut ServerGuard, video_url: &str) -> mockito::Mock {
        server
            .mock("GET", "/oembed")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("url".into(), video_url.into()),
                Matcher::UrlEncoded("format".into(), "json".into()),
            ]))
            .with_status(500)
            .with_body("upstream error")
            .create_async()
            .await
    }

    #[test]
    fn thumbnail_url_from_id() {
        assert_eq!(
            thumbnail_url(Some("EfK0SURQ8X0")),
            "https://img.youtube.com/vi/EfK0SURQ8X0/0.jpg"
        );
        assert_eq!(thumbnail_url(None), "https://img.youtube.com/vi//0.jpg");
    }

    #[tokio::test]
    async fn failed_lookup_falls_back_to_sentinel() {
        let mut server = Server::new_async().await;
        let first = "https://www.youtube.com/watch?v=EfK0SURQ8X0";
        let second = "https://www.youtube.com/watch?v=fZCe_JY8oUI";
        let third = "https://www.youtube.com/watch?v=TUXh42V_ng4";
        let _ok_first = mock_title(&mut server, first, "First").await;
        let _err_second = mock_failure(&mut server, second).await;
        let _ok_third = mock_title(&mut server, third, "Third").await;

        let catalog = vec![entry(1, first), entry(2, second), entry(3, third)];
        let enriched = enrich_catalog(&client_for(&server), &catalog).await;

        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched[0].title, "First");
        assert_eq!(enriched[1].title, UNKNOWN_TITLE);
        assert_eq!(enriched[2].title, "Third");
        // The failing entry keeps its deterministic thumbnail and stays playable
        assert_eq!(
            enriched[1].thumbnail,
            "https://img.youtube.com/vi/fZCe_JY8oUI/0.jpg"
        );
        assert_eq!(enriched[1].video_id.as_deref(), Some("fZCe_JY8oUI"));
    }

    #[tokio::test]
    async fn enrichment_preserves_catalog_order_and_ids() {
        let mut server = Server::new_async().await;
        let first = "https://www.youtube.com/watch?v=QH44R1oOvOQ";
        let second = "https://www.youtube.com/watch?v=bDfOdFg5G1U";
        let _ok_first = mock_title(&mut server, first, "A").await;
        let _ok_second = mock_title(&mut server, second, "B").await;

        // Duplicate catalog ids are allowed and must survive enrichment
        let catalog = vec![entry(5, first), entry(5, second)];
        let enriched = enrich_catalog(&client_for(&server), &catalog).await;

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].id, 5);
        assert_eq!(enriched[1].id, 5);
        assert_eq!(enriched[0].title, "A");
        assert_eq!(enriched[1].title, "B");
    }

    #[tokio::test]
    async fn unextractable_url_is_enriched_without_id() {
        let mut server = Server::new_async().await;
        let odd = "https://example.com/not-a-video";
        let _ok = mock_title(&mut server, odd, "Oddball").await;

        let enriched = enrich_catalog(&client_for(&server), &[entry(9, odd)]).await;

        assert_eq!(enriched[0].video_id, None);
        assert_eq!(enriched[0].title, "Oddball");
        assert_eq!(enriched[0].thumbnail, "https://img.youtube.com/vi//0.jpg");
    }

    #[tokio::test]
    async fn refresh_replaces_title_on_success() {
        let mut server = Server::new_async().await;
        let url = "https://www.youtube.com/watch?v=EfK0SURQ8X0";
        let _ok = mock_title(&mut server, url, "Fresh Title").await;

        let stale = enrich_entry(&entry(1, url), None);
        assert_eq!(stale.title, UNKNOWN_TITLE);

        let refreshed = refresh_selection(&client_for(&server), stale).await;
        assert_eq!(refreshed.title, "Fresh Title");
        assert_eq!(refreshed.id, 1);
    }

    #[tokio::test]
    async fn refresh_keeps_video_unchanged_on_failure() {
        let mut server = Server::new_async().await;
        let url = "https://www.youtube.com/watch?v=EfK0SURQ8X0";
        let _err = mock_failure(&mut server, url).await;

        let enriched = enrich_entry(
            &entry(1, url),
            Some(VideoMetadata {
                title: "Batch Title".to_owned(),
                author_name: None,
            }),
        );
        let refreshed = refresh_selection(&client_for(&server), enriched).await;
        assert_eq!(refreshed.title, "Batch Title");
        assert_eq!(refreshed.video_id.as_deref(), Some("EfK0SURQ8X0"));
    }
}
