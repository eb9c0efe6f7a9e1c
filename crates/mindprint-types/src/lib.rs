//! # mindprint-types
//!
//! Shared data model for the Mindprint personality inference engine.
//!
//! Mindprint classifies a subject into one of sixteen personality types —
//! four independent binary dimensions (IE, NS, TF, JP) — from three kinds
//! of evidence: a fixed-choice questionnaire, free-form text, and an
//! aggregate of short social posts. This crate holds the vocabulary every
//! other crate speaks:
//!
//! - [`Dimension`] and [`PersonalityType`] — the classification space
//! - [`DimensionConfidence`] — per-dimension probability-like scores
//! - [`QuestionnaireAnswer`] — one fixed-choice answer
//! - [`EvidenceBundle`] — aggregated social evidence with provenance
//! - [`ClassificationResult`] — the immutable outcome of any channel
//! - [`PersonalityInsight`] — static narrative material per type
//! - [`AnalysisError`] — the error taxonomy shared across the pipeline

#![deny(unsafe_code)]

pub mod answer;
pub mod bundle;
pub mod confidence;
pub mod dimension;
pub mod error;
pub mod insight;
pub mod personality;
pub mod result;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use answer::{AnswerChoice, QuestionnaireAnswer};
pub use bundle::{BundleId, EvidenceBundle, EvidenceSourceTag, SourceProfile};
pub use confidence::{round2, DimensionConfidence};
pub use dimension::Dimension;
pub use error::{AnalysisError, AnalysisResult};
pub use insight::{insight_for, PersonalityInsight};
pub use personality::PersonalityType;
pub use result::{AnalysisId, ClassificationResult, EvidenceSummary};
