//! The evidence source seam.

use async_trait::async_trait;
use mindprint_types::{EvidenceSourceTag, SourceProfile};

use crate::error::SourceResult;

/// What one source returns for a handle: text units in fetch order plus
/// profile metadata when the source has it.
#[derive(Clone, Debug, Default)]
pub struct SourceFetch {
    pub units: Vec<String>,
    pub profile: Option<SourceProfile>,
}

/// One tier of the acquisition chain.
///
/// Implementations take an already-normalized handle (no `@`, lowercase)
/// and return at most `max_units` units. Whether a fetch is *sufficient*
/// is the chain's judgment, not the source's.
#[async_trait]
pub trait EvidenceSource: Send + Sync {
    /// Which provenance tag bundles from this source carry.
    fn tag(&self) -> EvidenceSourceTag;

    /// Fetch up to `max_units` text units for the handle.
    async fn fetch(&self, handle: &str, max_units: usize) -> SourceResult<SourceFetch>;
}
