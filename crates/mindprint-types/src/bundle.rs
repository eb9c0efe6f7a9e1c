//! Evidence bundles produced by the social acquisition chain.

use serde::{Deserialize, Serialize};

/// Unique identifier for an evidence bundle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BundleId(pub String);

impl BundleId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for BundleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BundleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bundle:{}", self.0)
    }
}

/// Which tier of the acquisition chain produced the evidence.
///
/// Provenance only — the tag never influences scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSourceTag {
    /// Live primary source.
    Primary,
    /// Deterministic local archive.
    Secondary,
}

impl std::fmt::Display for EvidenceSourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvidenceSourceTag::Primary => write!(f, "primary"),
            EvidenceSourceTag::Secondary => write!(f, "secondary"),
        }
    }
}

/// Public profile metadata for the analyzed handle, carried as provenance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceProfile {
    pub handle: String,
    pub display_name: String,
    pub bio: String,
    pub verified: bool,
    pub followers: u64,
}

/// Evidence gathered for one social-analysis request.
///
/// Created per request and discarded after producing a classification;
/// the core never persists bundles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvidenceBundle {
    /// Bundle identifier.
    pub id: BundleId,
    /// Normalized handle the evidence belongs to.
    pub handle: String,
    /// Which source tier supplied the units.
    pub source_tag: EvidenceSourceTag,
    /// Raw text snippets in original fetch order.
    pub raw_units: Vec<String>,
    /// Units joined with a single space, in fetch order.
    pub aggregated_text: String,
    /// Profile metadata from the supplying source, when available.
    pub profile: Option<SourceProfile>,
}

impl EvidenceBundle {
    /// Aggregate raw units into a bundle. Join order is fetch order; the
    /// single-space separator is part of the classification contract.
    pub fn aggregate(
        handle: impl Into<String>,
        source_tag: EvidenceSourceTag,
        raw_units: Vec<String>,
        profile: Option<SourceProfile>,
    ) -> Self {
        let aggregated_text = raw_units.join(" ");
        Self {
            id: BundleId::new(),
            handle: handle.into(),
            source_tag,
            raw_units,
            aggregated_text,
            profile,
        }
    }

    /// Number of evidence units in the bundle.
    pub fn unit_count(&self) -> usize {
        self.raw_units.len()
    }

    /// Character length of the aggregate text.
    pub fn aggregate_chars(&self) -> usize {
        self.aggregated_text.chars().count()
    }
}
