//! # mindprint-questionnaire
//!
//! The questionnaire channel: a fixed 20-question bank, deterministic
//! weighted-sum scoring over it, and an optional machine-learned
//! confidence enhancement step.
//!
//! Scoring is rule-based and always succeeds; enhancement is best-effort
//! and degrades to the unmodified rule-based confidence whenever the
//! enhancement model is unavailable or fails. Enhancement adjusts
//! confidence only, never the predicted type.

#![deny(unsafe_code)]

pub mod bank;
pub mod enhancer;
pub mod scorer;

pub use bank::{Question, QuestionBank};
pub use enhancer::{ensure_enhancer_artifact, ConfidenceEnhancer, EnhancedConfidence};
pub use scorer::{QuestionnaireScorer, ScoredProfile};
