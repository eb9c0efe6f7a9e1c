//! Error taxonomy shared across the inference pipeline.

use thiserror::Error;

/// Errors an analysis operation can surface to its caller.
///
/// The variants are deliberately coarse: callers branch on kind, not on
/// message text. Enhancement failures and primary-source transport failures
/// are absorbed inside the pipeline and never appear here.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input the caller can correct (text too short, malformed submission).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Required trained artifacts are not loaded. Fatal to the request and
    /// not user-correctable.
    #[error("{component} artifacts are not loaded")]
    Unavailable { component: String },

    /// Neither evidence source produced enough units for the handle.
    #[error("no evidence found for handle @{handle}")]
    NotFound { handle: String },

    /// Evidence was found but the aggregate is too short to classify.
    #[error("insufficient evidence: {chars} characters aggregated, {min} required")]
    InsufficientEvidence { chars: usize, min: usize },

    /// Unexpected failure, reported with the operation name for diagnosis
    /// without leaking internal state.
    #[error("{operation} failed: {message}")]
    Internal { operation: String, message: String },
}

impl AnalysisError {
    /// Shorthand for an [`AnalysisError::Unavailable`] on a named component.
    pub fn unavailable(component: impl Into<String>) -> Self {
        Self::Unavailable {
            component: component.into(),
        }
    }

    /// Shorthand for an [`AnalysisError::Internal`] with operation context.
    pub fn internal(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Internal {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether the caller can fix the request and retry.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotFound { .. } | Self::InsufficientEvidence { .. }
        )
    }
}

/// Result alias used throughout the pipeline.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
