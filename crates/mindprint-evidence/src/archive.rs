//! Deterministic archive fallback source.

use std::collections::HashMap;

use async_trait::async_trait;
use mindprint_types::{EvidenceSourceTag, SourceProfile};
use serde::Deserialize;
use tracing::debug;

use crate::error::{SourceError, SourceResult};
use crate::source::{EvidenceSource, SourceFetch};

#[derive(Deserialize)]
struct ArchiveFile {
    profiles: Vec<ArchiveProfile>,
}

#[derive(Clone, Deserialize)]
struct ArchiveProfile {
    handle: String,
    display_name: String,
    #[serde(default)]
    bio: String,
    #[serde(default)]
    verified: bool,
    #[serde(default)]
    followers: u64,
    posts: Vec<String>,
}

/// Local archive of curated profiles, compiled into the binary.
///
/// Fully deterministic: the same handle always yields the same units in
/// the same order, which keeps fallback results reproducible.
pub struct ArchiveSource {
    profiles: HashMap<String, ArchiveProfile>,
}

impl ArchiveSource {
    /// The compiled-in archive.
    pub fn bundled() -> SourceResult<Self> {
        Self::from_json(include_str!("../data/archive_profiles.json"))
    }

    fn from_json(json: &str) -> SourceResult<Self> {
        let file: ArchiveFile =
            serde_json::from_str(json).map_err(|e| SourceError::Malformed(e.to_string()))?;
        let profiles = file
            .profiles
            .into_iter()
            .map(|p| (p.handle.clone(), p))
            .collect();
        Ok(Self { profiles })
    }

    /// Handles present in the archive, for diagnostics.
    pub fn handles(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }
}

#[async_trait]
impl EvidenceSource for ArchiveSource {
    fn tag(&self) -> EvidenceSourceTag {
        EvidenceSourceTag::Secondary
    }

    async fn fetch(&self, handle: &str, max_units: usize) -> SourceResult<SourceFetch> {
        let Some(profile) = self.profiles.get(handle) else {
            return Err(SourceError::UserNotFound {
                handle: handle.to_string(),
            });
        };

        let units: Vec<String> = profile.posts.iter().take(max_units).cloned().collect();
        debug!(handle, units = units.len(), "archive fetch complete");

        Ok(SourceFetch {
            units,
            profile: Some(SourceProfile {
                handle: profile.handle.clone(),
                display_name: profile.display_name.clone(),
                bio: profile.bio.clone(),
                verified: profile.verified,
                followers: profile.followers,
            }),
        })
    }
}
