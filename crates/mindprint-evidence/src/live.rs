//! Live primary source client.

use std::time::Duration;

use async_trait::async_trait;
use mindprint_types::{EvidenceSourceTag, SourceProfile};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::error::{SourceError, SourceResult};
use crate::source::{EvidenceSource, SourceFetch};

#[derive(Deserialize)]
struct UserEnvelope {
    data: UserData,
}

#[derive(Deserialize)]
struct UserData {
    id: String,
    name: String,
    username: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    verified: bool,
    #[serde(default)]
    public_metrics: PublicMetrics,
}

#[derive(Default, Deserialize)]
struct PublicMetrics {
    #[serde(default)]
    followers_count: u64,
}

#[derive(Deserialize)]
struct PostsEnvelope {
    #[serde(default)]
    data: Vec<Post>,
}

#[derive(Deserialize)]
struct Post {
    text: String,
    /// Absent when the source could not detect a language.
    lang: Option<String>,
}

/// HTTP client for the live post stream.
///
/// Resolves the handle to a user id, then pages that user's recent posts.
/// Reposts and non-English posts are dropped; posts with no detected
/// language are kept.
pub struct LiveStreamClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl LiveStreamClient {
    pub fn new(
        base_url: impl Into<String>,
        bearer_token: Option<String>,
        timeout: Duration,
    ) -> SourceResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            bearer_token,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        handle: &str,
    ) -> SourceResult<T> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(SourceError::UserNotFound {
                    handle: handle.to_string(),
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(SourceError::Auth),
            StatusCode::TOO_MANY_REQUESTS => return Err(SourceError::RateLimited),
            _ => {}
        }

        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl EvidenceSource for LiveStreamClient {
    fn tag(&self) -> EvidenceSourceTag {
        EvidenceSourceTag::Primary
    }

    async fn fetch(&self, handle: &str, max_units: usize) -> SourceResult<SourceFetch> {
        let user: UserEnvelope = self
            .get_json(
                &format!("{}/users/by/username/{}", self.base_url, handle),
                handle,
            )
            .await?;
        debug!(handle, user_id = %user.data.id, "resolved handle at live source");

        let posts: PostsEnvelope = self
            .get_json(
                &format!(
                    "{}/users/{}/posts?max_results={}",
                    self.base_url, user.data.id, max_units
                ),
                handle,
            )
            .await?;

        let units: Vec<String> = posts
            .data
            .into_iter()
            .filter(|p| !p.text.starts_with("RT @"))
            .filter(|p| p.lang.as_deref().map_or(true, |l| l == "en"))
            .map(|p| p.text)
            .take(max_units)
            .collect();
        debug!(handle, units = units.len(), "live source fetch complete");

        Ok(SourceFetch {
            units,
            profile: Some(SourceProfile {
                handle: user.data.username,
                display_name: user.data.name,
                bio: user.data.description,
                verified: user.data.verified,
                followers: user.data.public_metrics.followers_count,
            }),
        })
    }
}
