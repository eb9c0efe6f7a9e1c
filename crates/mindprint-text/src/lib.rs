//! # mindprint-text
//!
//! The free-text channel: a fixed linguistic feature extractor and the
//! four-dimension ensemble classifier over concatenated
//! embedding ⊕ lexical-count ⊕ linguistic feature vectors.
//!
//! Everything here is pure computation over the read-only model context;
//! there is no per-request mutable state.

#![deny(unsafe_code)]

pub mod ensemble;
pub mod linguistic;

pub use ensemble::{TextClassification, TextEnsembleClassifier, MIN_TEXT_CHARS};
pub use linguistic::{LinguisticFeatureExtractor, FEATURE_COUNT};
