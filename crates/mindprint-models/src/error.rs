//! Error types for artifact loading and training.

use thiserror::Error;

/// Errors raised by the artifact layer.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Artifact file could not be read or written.
    #[error("artifact io failed for {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact content is not valid JSON for its schema.
    #[error("artifact {name} is malformed: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required artifact is missing from the store.
    #[error("artifact {name} not found in store")]
    NotFound { name: String },

    /// Enhancer training received an unusable dataset.
    #[error("training failed: {0}")]
    Training(String),
}

/// Result type for artifact operations.
pub type ModelResult<T> = Result<T, ModelError>;
