//! ML confidence enhancement.
//!
//! A multi-class model over the sixteen types re-reads the raw answers and
//! scales the rule-based confidence by how strongly it agrees with the
//! rule-based type. Enhancement never changes the predicted type and never
//! fails a request: any problem degrades to the unmodified confidence.

use std::sync::Arc;

use mindprint_models::{
    store, ArtifactStore, EnhancerModel, ModelContext, ModelResult, TrainingConfig, TrainingSample,
};
use mindprint_types::{round2, DimensionConfidence, PersonalityType, QuestionnaireAnswer};
use tracing::{debug, info, warn};

use crate::bank::QuestionBank;

/// Scaling applied when the model disagrees with the rule-based type.
const DISAGREEMENT_FACTOR: f64 = 0.85;

/// Enhanced confidence stays inside this band.
const CONFIDENCE_FLOOR: f64 = 0.50;
const CONFIDENCE_CEIL: f64 = 0.99;

/// Outcome of an enhancement attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct EnhancedConfidence {
    pub confidence: DimensionConfidence,
    /// Whether the model actually ran; false means passthrough.
    pub ml_enhanced: bool,
}

/// Best-effort confidence enhancer over the shared model context.
#[derive(Clone)]
pub struct ConfidenceEnhancer {
    bank: Arc<QuestionBank>,
    context: Arc<ModelContext>,
}

impl ConfidenceEnhancer {
    pub fn new(bank: Arc<QuestionBank>, context: Arc<ModelContext>) -> Self {
        Self { bank, context }
    }

    /// Adjust the rule-based confidence using the enhancement model.
    ///
    /// The answers are ordinal-encoded in bank order and classified over
    /// the sixteen types. Agreement with the rule-based type scales
    /// confidence by `0.7 * p + 0.3`; disagreement scales it by
    /// [`DISAGREEMENT_FACTOR`]. Results are clamped to [0.50, 0.99]. Any
    /// failure returns the input confidence untouched.
    pub fn enhance(
        &self,
        answers: &[QuestionnaireAnswer],
        personality: PersonalityType,
        confidence: &DimensionConfidence,
    ) -> EnhancedConfidence {
        let Some(model) = self.context.enhancer() else {
            debug!("enhancement model not loaded, keeping rule-based confidence");
            return EnhancedConfidence {
                confidence: confidence.clone(),
                ml_enhanced: false,
            };
        };

        let Some(features) = self.encode(answers) else {
            warn!("submission does not cover the bank, keeping rule-based confidence");
            return EnhancedConfidence {
                confidence: confidence.clone(),
                ml_enhanced: false,
            };
        };

        let Some((predicted, probability)) = model.predict(&features) else {
            warn!("enhancement model produced no prediction, keeping rule-based confidence");
            return EnhancedConfidence {
                confidence: confidence.clone(),
                ml_enhanced: false,
            };
        };

        let agrees = predicted == personality.to_string();
        let factor = if agrees {
            0.7 * probability + 0.3
        } else {
            DISAGREEMENT_FACTOR
        };
        debug!(
            predicted,
            probability, agrees, factor, "enhancement factor computed"
        );

        let enhanced = confidence
            .iter()
            .map(|(dim, value)| {
                (
                    dim,
                    round2((value * factor).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEIL)),
                )
            })
            .collect();

        EnhancedConfidence {
            confidence: enhanced,
            ml_enhanced: true,
        }
    }

    /// Ordinal-encode one answer per bank question, in bank order.
    fn encode(&self, answers: &[QuestionnaireAnswer]) -> Option<Vec<f64>> {
        self.bank
            .questions()
            .iter()
            .map(|q| {
                answers
                    .iter()
                    .find(|a| a.question_id == q.id)
                    .map(|a| a.choice.ordinal())
            })
            .collect()
    }
}

/// Train and persist the enhancement model from the bundled labeled
/// dataset when no saved artifact exists yet. Returns whether training
/// ran. Called once at startup, before the model context is built.
pub fn ensure_enhancer_artifact(artifacts: &ArtifactStore) -> ModelResult<bool> {
    if artifacts.exists_on_disk(store::ENHANCER) {
        debug!("enhancement model artifact already present");
        return Ok(false);
    }

    let samples: Vec<TrainingSample> =
        serde_json::from_str(include_str!("../data/enhancer_training.json")).map_err(|source| {
            mindprint_models::ModelError::Malformed {
                name: store::ENHANCER.to_string(),
                source,
            }
        })?;

    info!(samples = samples.len(), "training enhancement model from bundled dataset");
    let model = EnhancerModel::train(&samples, &TrainingConfig::default())?;
    artifacts.save(store::ENHANCER, &model)?;
    Ok(true)
}
