//! # mindprint-models
//!
//! Trained-artifact layer for the Mindprint inference engine.
//!
//! Everything here is read-only after a one-time, process-wide load:
//!
//! - [`WordEmbeddingModel`] — dense semantic vectors for text
//! - [`LexicalVectorizer`] — sparse vocabulary-count vectors, one per dimension
//! - [`DimensionClassifier`] — binary classifiers over the concatenated
//!   feature space, with a [`SupportsProbability`] capability interface
//! - [`EnhancerModel`] — multi-class classifier over the sixteen types used
//!   to adjust questionnaire confidence, trainable from a labeled dataset
//! - [`ArtifactStore`] — JSON load/save of all of the above
//! - [`ModelContext`] — the explicit, once-initialized context object the
//!   rest of the pipeline borrows models from
//!
//! The text-channel artifacts (embedding, vectorizers, classifiers) have no
//! training fallback; if they cannot be loaded the text channel is
//! unavailable. The enhancer is the only model with a training path.

#![deny(unsafe_code)]

pub mod classifier;
pub mod context;
pub mod embedding;
pub mod enhancer;
pub mod error;
pub mod store;
pub mod token;
pub mod vectorizer;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use classifier::{
    ClassifierArtifact, DimensionClassifier, LogisticClassifier, MarginClassifier,
    SupportsProbability, FALLBACK_CONFIDENCE,
};
pub use context::ModelContext;
pub use embedding::WordEmbeddingModel;
pub use enhancer::{EnhancerModel, LabelEncoder, TrainingConfig, TrainingSample};
pub use error::{ModelError, ModelResult};
pub use store::ArtifactStore;
pub use token::lexical_tokens;
pub use vectorizer::LexicalVectorizer;
