use std::time::Duration;

use serde::Deserialize;

/// Public oEmbed endpoint for YouTube videos
const OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// Give up on the metadata service after this long
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Metadata returned by the oEmbed endpoint for a single video
#[derive(Debug, Clone, Deserialize)]
pub struct VideoMetadata {
    /// Video title as published on YouTube
    pub title: String,
    /// Channel name, when the endpoint provides one
    #[serde(default)]
    pub author_name: Option<String>,
}

/// Client for looking up video metadata over oEmbed.
///
/// Lookups are best-effort: every failure (connect error, timeout, error
/// status, unparseable body) is logged and reported as `None`. Callers never
/// see an error value.
pub struct OembedClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OembedClient {
    pub fn new() -> Self {
        Self::with_endpoint(OEMBED_ENDPOINT)
    }

    /// Point the client at an alternative endpoint (used by tests)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch title/author metadata for a video URL; `None` on any failure
    pub async fn resolve(&self, video_url: &str) -> Option<VideoMetadata> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("url", video_url), ("format", "json")])
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("oEmbed request for {} failed: {}", video_url, err);
                return None;
            }
        };

        if !response.status().is_success() {
            log::warn!(
                "oEmbed request for {} returned {}",
                video_url,
                response.status()
            );
            return None;
        }

        match response.json::<VideoMetadata>().await {
            Ok(meta) => {
                log::debug!("resolved {} as {:?}", video_url, meta.title);
                Some(meta)
            }
            Err(err) => {
                log::warn!("oEmbed response for {} not understood: {}", video_url, err);
                None
            }
        }
    }
}
