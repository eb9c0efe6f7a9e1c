//! # mindprint-evidence
//!
//! Evidence acquisition for social-handle analysis: a tiered chain that
//! tries a live primary source under a hard timeout and falls back to a
//! deterministic local archive. The chain yields an [`EvidenceBundle`]
//! (re-exported from `mindprint-types`) tagged with its provenance tier;
//! the tag is informational and never influences scoring.

#![deny(unsafe_code)]

pub mod archive;
pub mod chain;
pub mod error;
pub mod live;
pub mod source;

pub use archive::ArchiveSource;
pub use chain::{normalize_handle, AcquisitionChain, AcquisitionConfig};
pub use error::{SourceError, SourceResult};
pub use live::LiveStreamClient;
pub use mindprint_types::{EvidenceBundle, EvidenceSourceTag, SourceProfile};
pub use source::{EvidenceSource, SourceFetch};
