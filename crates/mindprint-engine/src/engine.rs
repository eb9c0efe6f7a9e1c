//! The analysis engine facade.

use std::path::PathBuf;
use std::sync::Arc;

use mindprint_evidence::{AcquisitionChain, AcquisitionConfig};
use mindprint_models::{ArtifactStore, ModelContext};
use mindprint_questionnaire::{
    ensure_enhancer_artifact, ConfidenceEnhancer, EnhancedConfidence, QuestionBank,
    QuestionnaireScorer, ScoredProfile,
};
use mindprint_text::{TextEnsembleClassifier, MIN_TEXT_CHARS};
use mindprint_types::{
    AnalysisError, AnalysisResult, ClassificationResult, DimensionConfidence, EvidenceSummary,
    PersonalityInsight, PersonalityType, QuestionnaireAnswer,
};
use tracing::{error, info, instrument, warn};

/// Engine startup configuration.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Directory trained artifacts are loaded from and saved to. Bundled
    /// defaults back any artifact missing on disk.
    pub artifact_dir: PathBuf,
    /// Evidence acquisition settings for handle analysis.
    pub acquisition: AcquisitionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("artifacts"),
            acquisition: AcquisitionConfig::default(),
        }
    }
}

/// The assembled pipeline. One instance serves all channels; every
/// operation borrows read-only models, so the engine is `Send + Sync` and
/// safe to share behind an `Arc`.
pub struct AnalysisEngine {
    scorer: QuestionnaireScorer,
    enhancer: ConfidenceEnhancer,
    text: TextEnsembleClassifier,
    chain: AcquisitionChain,
}

impl AnalysisEngine {
    /// Full startup sequence: train-and-persist the enhancer when no saved
    /// artifact exists, then perform the guarded one-time model-context
    /// load shared across the process.
    ///
    /// A failed enhancer training is absorbed (the questionnaire channel
    /// runs without enhancement); missing text-channel artifacts are fatal.
    pub fn start(config: EngineConfig) -> AnalysisResult<Self> {
        let store = ArtifactStore::new(&config.artifact_dir);

        if let Err(err) = ensure_enhancer_artifact(&store) {
            warn!(error = %err, "enhancer training unavailable, continuing without enhancement");
        }

        let context = ModelContext::initialize_shared(&store).map_err(|err| {
            error!(error = %err, "model context failed to load");
            AnalysisError::unavailable("model artifacts")
        })?;

        Self::with_context(context, &config)
    }

    /// Assemble an engine over an already-loaded context. Used by `start`
    /// and by callers that manage context lifetime themselves.
    pub fn with_context(
        context: Arc<ModelContext>,
        config: &EngineConfig,
    ) -> AnalysisResult<Self> {
        let bank = Arc::new(QuestionBank::bundled()?);
        let engine = Self {
            scorer: QuestionnaireScorer::new(Arc::clone(&bank)),
            enhancer: ConfidenceEnhancer::new(bank, Arc::clone(&context)),
            text: TextEnsembleClassifier::new(context),
            chain: AcquisitionChain::from_config(&config.acquisition)?,
        };
        info!("analysis engine ready");
        Ok(engine)
    }

    /// Rule-based scoring of a validated submission.
    ///
    /// The facade requires exactly 20 answers covering every bank
    /// question; the scoring rule underneath treats unknown ids as
    /// abstentions, so completeness is enforced here.
    #[instrument(skip(self, answers), fields(answer_count = answers.len()))]
    pub fn score_questionnaire(
        &self,
        answers: &[QuestionnaireAnswer],
    ) -> AnalysisResult<ScoredProfile> {
        if answers.len() != QuestionnaireAnswer::REQUIRED_COUNT {
            return Err(AnalysisError::Validation(format!(
                "submission must contain exactly {} answers, got {}",
                QuestionnaireAnswer::REQUIRED_COUNT,
                answers.len()
            )));
        }
        if !self.scorer.bank().covers(answers.iter().map(|a| a.question_id)) {
            return Err(AnalysisError::Validation(
                "submission does not answer every bank question".into(),
            ));
        }
        self.scorer.score(answers)
    }

    /// Best-effort ML confidence adjustment. Never fails and never
    /// changes the type; degrades to the input confidence.
    pub fn enhance_confidence(
        &self,
        answers: &[QuestionnaireAnswer],
        personality: PersonalityType,
        confidence: &DimensionConfidence,
    ) -> EnhancedConfidence {
        self.enhancer.enhance(answers, personality, confidence)
    }

    /// Score, enhance, and wrap a questionnaire submission into a result.
    pub fn analyze_questionnaire(
        &self,
        answers: &[QuestionnaireAnswer],
    ) -> AnalysisResult<ClassificationResult> {
        let profile = self.score_questionnaire(answers)?;
        let enhanced = self.enhance_confidence(answers, profile.personality, &profile.confidence);
        Ok(ClassificationResult::new(
            profile.personality,
            enhanced.confidence,
            EvidenceSummary::Questionnaire {
                answer_count: answers.len(),
                ml_enhanced: enhanced.ml_enhanced,
            },
            Vec::new(),
        ))
    }

    /// Static narrative material for a type: epithet, description,
    /// careers, growth tips, and compatible types.
    pub fn type_insight(
        &self,
        personality: PersonalityType,
    ) -> AnalysisResult<&'static PersonalityInsight> {
        mindprint_types::insight_for(personality)
    }

    /// Classify caller-supplied free text.
    pub fn classify_text(&self, text: &str) -> AnalysisResult<ClassificationResult> {
        let outcome = self.text.classify(text)?;
        Ok(ClassificationResult::new(
            outcome.personality,
            outcome.confidence,
            EvidenceSummary::FreeText {
                chars: text.chars().count(),
            },
            outcome.keywords,
        ))
    }

    /// Acquire evidence for a social handle and classify the aggregate.
    #[instrument(skip(self))]
    pub async fn analyze_handle(&self, handle: &str) -> AnalysisResult<ClassificationResult> {
        let bundle = self.chain.acquire(handle).await?;

        let chars = bundle.aggregate_chars();
        if chars < MIN_TEXT_CHARS {
            return Err(AnalysisError::InsufficientEvidence {
                chars,
                min: MIN_TEXT_CHARS,
            });
        }

        let outcome = self.text.classify(&bundle.aggregated_text)?;
        info!(
            handle = %bundle.handle,
            source = %bundle.source_tag,
            units = bundle.unit_count(),
            personality = %outcome.personality,
            "handle analysis complete"
        );

        Ok(ClassificationResult::new(
            outcome.personality,
            outcome.confidence,
            EvidenceSummary::Social {
                handle: bundle.handle.clone(),
                unit_count: bundle.unit_count(),
                aggregate_chars: chars,
                source: bundle.source_tag,
                profile: bundle.profile.clone(),
            },
            outcome.keywords,
        ))
    }
}
