//! # mindprint-engine
//!
//! The outward facade of the Mindprint pipeline. [`AnalysisEngine::start`]
//! runs the full startup sequence (artifact store, enhancer training
//! fallback, guarded model-context load, acquisition chain) and the
//! resulting engine exposes the analysis operations:
//!
//! - [`AnalysisEngine::score_questionnaire`] — validated rule-based scoring
//! - [`AnalysisEngine::enhance_confidence`] — best-effort ML adjustment
//! - [`AnalysisEngine::analyze_questionnaire`] — score + enhance, wrapped
//!   into a [`ClassificationResult`]
//! - [`AnalysisEngine::classify_text`] — free-text ensemble classification
//! - [`AnalysisEngine::analyze_handle`] — evidence acquisition + text
//!   classification for a social handle

#![deny(unsafe_code)]

pub mod engine;
pub mod telemetry;

pub use engine::{AnalysisEngine, EngineConfig};
pub use mindprint_types::{
    AnalysisError, AnalysisResult, ClassificationResult, DimensionConfidence, EvidenceSummary,
    PersonalityType, QuestionnaireAnswer,
};
