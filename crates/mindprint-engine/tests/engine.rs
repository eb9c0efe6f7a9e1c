//! End-to-end engine behavior over the bundled artifacts and archive.

use std::sync::Arc;

use mindprint_engine::{AnalysisEngine, AnalysisError, EngineConfig, EvidenceSummary};
use mindprint_models::{ArtifactStore, ModelContext};
use mindprint_questionnaire::ensure_enhancer_artifact;
use mindprint_types::{AnswerChoice, EvidenceSourceTag, PersonalityType, QuestionnaireAnswer};

fn temp_config(name: &str) -> EngineConfig {
    EngineConfig {
        artifact_dir: std::env::temp_dir().join(name),
        ..EngineConfig::default()
    }
}

/// Engine over an isolated, enhancer-trained context.
fn engine(name: &str) -> AnalysisEngine {
    let config = temp_config(name);
    let store = ArtifactStore::new(&config.artifact_dir);
    ensure_enhancer_artifact(&store).expect("enhancer trains from bundled dataset");
    let context = Arc::new(ModelContext::load(&store).expect("bundled artifacts load"));
    AnalysisEngine::with_context(context, &config).expect("engine assembles")
}

fn full_submission(choice: AnswerChoice) -> Vec<QuestionnaireAnswer> {
    (1..=20).map(|id| QuestionnaireAnswer::new(id, choice)).collect()
}

#[test]
fn startup_sequence_produces_a_working_engine() {
    mindprint_engine::telemetry::init_tracing();
    let engine = AnalysisEngine::start(temp_config("mindprint-engine-start")).unwrap();
    let profile = engine.score_questionnaire(&full_submission(AnswerChoice::A)).unwrap();
    assert_eq!(profile.personality.to_string(), "ISTJ");
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-start")).ok();
}

#[test]
fn questionnaire_analysis_is_scored_and_enhanced() {
    let engine = engine("mindprint-engine-q");
    let result = engine.analyze_questionnaire(&full_submission(AnswerChoice::A)).unwrap();
    assert_eq!(result.personality.to_string(), "ISTJ");
    assert!(result.confidence.all_within(0.50, 0.99));
    assert!(result.keywords.is_empty());
    match result.evidence {
        EvidenceSummary::Questionnaire {
            answer_count,
            ml_enhanced,
        } => {
            assert_eq!(answer_count, 20);
            assert!(ml_enhanced, "trained enhancer should have run");
        }
        other => panic!("unexpected evidence summary: {:?}", other),
    }
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-q")).ok();
}

#[test]
fn wrong_answer_count_is_rejected() {
    let engine = engine("mindprint-engine-count");
    let short: Vec<_> = full_submission(AnswerChoice::A).into_iter().take(19).collect();
    let err = engine.score_questionnaire(&short).unwrap_err();
    assert!(matches!(err, AnalysisError::Validation(_)));
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-count")).ok();
}

#[test]
fn incomplete_coverage_is_rejected_even_at_full_count() {
    let engine = engine("mindprint-engine-cover");
    let mut answers = full_submission(AnswerChoice::A);
    // 20 answers, but question 20 is replaced by a duplicate of question 1.
    answers[19] = QuestionnaireAnswer::new(1, AnswerChoice::B);
    let err = engine.score_questionnaire(&answers).unwrap_err();
    assert!(matches!(err, AnalysisError::Validation(_)));
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-cover")).ok();
}

#[test]
fn free_text_classification_carries_keywords_and_summary() {
    let engine = engine("mindprint-engine-text");
    let text = "I spent the evening alone with a quiet book, enjoying solitude and calm \
                reflection. Deep theory and abstract ideas keep me company better than any \
                crowd ever could. Tomorrow I will plan and organize my reading schedule.";
    let result = engine.classify_text(text).unwrap();
    assert!(matches!(result.evidence, EvidenceSummary::FreeText { chars } if chars > 100));
    assert!(result.keywords.len() <= 10);
    assert!(result.keywords.iter().any(|k| k == "quiet" || k == "alone" || k == "theory"));
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-text")).ok();
}

#[test]
fn short_text_is_a_validation_error() {
    let engine = engine("mindprint-engine-short");
    let err = engine.classify_text("not enough").unwrap_err();
    assert!(matches!(err, AnalysisError::Validation(_)));
    assert!(err.is_user_correctable());
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-short")).ok();
}

#[tokio::test]
async fn handle_analysis_uses_the_archive_when_primary_is_disabled() {
    let engine = engine("mindprint-engine-handle");
    let result = engine.analyze_handle("@QuietCartographer").await.unwrap();
    match &result.evidence {
        EvidenceSummary::Social {
            handle,
            unit_count,
            aggregate_chars,
            source,
            profile,
        } => {
            assert_eq!(handle, "quietcartographer");
            assert!(*unit_count >= 5);
            assert!(*aggregate_chars >= 100);
            assert_eq!(*source, EvidenceSourceTag::Secondary);
            assert_eq!(profile.as_ref().unwrap().handle, "quietcartographer");
        }
        other => panic!("unexpected evidence summary: {:?}", other),
    }
    assert_eq!(result.confidence.len(), 4);
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-handle")).ok();
}

#[tokio::test]
async fn unknown_handle_is_not_found() {
    let engine = engine("mindprint-engine-unknown");
    let err = engine.analyze_handle("@nobody_anywhere").await.unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound { .. }));
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-unknown")).ok();
}

#[tokio::test]
async fn thin_evidence_is_insufficient_not_misclassified() {
    let engine = engine("mindprint-engine-thin");
    // The archived "terse" profile has enough units but almost no text.
    let err = engine.analyze_handle("terse").await.unwrap_err();
    assert!(matches!(err, AnalysisError::InsufficientEvidence { .. }));
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-thin")).ok();
}

#[tokio::test]
async fn sparse_profile_with_too_few_units_is_not_found() {
    let engine = engine("mindprint-engine-sparse");
    // "fewwords" exists in the archive but holds fewer than 5 posts.
    let err = engine.analyze_handle("fewwords").await.unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound { .. }));
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-sparse")).ok();
}

#[test]
fn type_insight_describes_the_classified_type() {
    let engine = engine("mindprint-engine-insight");
    let profile = engine.score_questionnaire(&full_submission(AnswerChoice::A)).unwrap();
    let insight = engine.type_insight(profile.personality).unwrap();
    assert_eq!(insight.name, "The Inspector");
    assert!(!insight.careers.is_empty());
    assert!(!insight.compatibility.contains(&profile.personality));
    assert!(insight
        .compatibility
        .contains(&PersonalityType::parse("ESFP").unwrap()));
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-insight")).ok();
}

#[test]
fn results_serialize_for_the_outward_api() {
    let engine = engine("mindprint-engine-serde");
    let result = engine.analyze_questionnaire(&full_submission(AnswerChoice::B)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["personality"], "ENFP");
    assert_eq!(json["evidence"]["channel"], "questionnaire");
    assert!(json["confidence"]["IE"].is_number());
    std::fs::remove_dir_all(std::env::temp_dir().join("mindprint-engine-serde")).ok();
}
