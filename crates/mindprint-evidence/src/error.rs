//! Errors internal to evidence sources.
//!
//! These never escape the acquisition chain: every primary-source error is
//! a fallback trigger, and only `UserNotFound` from the last tier surfaces
//! to callers, mapped to the pipeline error taxonomy.

use thiserror::Error;

/// Failure modes of a single evidence source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network or protocol failure talking to the source.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Credentials rejected by the source.
    #[error("source rejected credentials")]
    Auth,

    /// The source throttled the request.
    #[error("source rate limit hit")]
    RateLimited,

    /// The handle does not exist at this source.
    #[error("handle @{handle} unknown to source")]
    UserNotFound { handle: String },

    /// The source answered with a payload the client cannot use.
    #[error("malformed source payload: {0}")]
    Malformed(String),
}

/// Result alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;
