//! Per-dimension ensemble classification.

use std::sync::Arc;

use mindprint_models::{ModelContext, FALLBACK_CONFIDENCE};
use mindprint_types::{
    round2, AnalysisError, AnalysisResult, Dimension, DimensionConfidence, PersonalityType,
};
use tracing::{debug, instrument};

/// Minimum text length, in characters, required for classification.
pub const MIN_TEXT_CHARS: usize = 100;

/// Keywords surfaced per dimension before the global cap.
const KEYWORDS_PER_DIMENSION: usize = 5;

/// Global keyword cap after deduplication.
const KEYWORD_CAP: usize = 10;

/// Full classification outcome for one text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextClassification {
    pub personality: PersonalityType,
    pub confidence: DimensionConfidence,
    /// Vocabulary terms that influenced the prediction, deduplicated in
    /// first-seen order.
    pub keywords: Vec<String>,
}

/// The four-dimension text classifier over the shared model context.
///
/// The dense embedding and the linguistic block are computed once per
/// request; only the sparse lexical block differs per dimension. Each
/// dimension's feature vector is the concatenation
/// embedding ⊕ lexical ⊕ linguistic, in that order.
#[derive(Clone)]
pub struct TextEnsembleClassifier {
    context: Arc<ModelContext>,
    extractor: crate::linguistic::LinguisticFeatureExtractor,
}

impl TextEnsembleClassifier {
    pub fn new(context: Arc<ModelContext>) -> Self {
        Self {
            context,
            extractor: crate::linguistic::LinguisticFeatureExtractor::new(),
        }
    }

    /// Classify a text into a type, per-dimension confidence, and keywords.
    ///
    /// Texts shorter than [`MIN_TEXT_CHARS`] characters are rejected as a
    /// validation error. Dimensions whose model exposes no probability
    /// report [`FALLBACK_CONFIDENCE`].
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub fn classify(&self, text: &str) -> AnalysisResult<TextClassification> {
        let chars = text.chars().count();
        if chars < MIN_TEXT_CHARS {
            return Err(AnalysisError::Validation(format!(
                "text too short: {} characters, minimum {}",
                chars, MIN_TEXT_CHARS
            )));
        }

        let embedding = self.context.embedding().encode(text);
        let linguistic = self.extractor.extract(text);

        let mut letters = ['\0'; 4];
        let mut confidence = DimensionConfidence::new();

        for (slot, dim) in Dimension::ALL.into_iter().enumerate() {
            let lexical = self.context.vectorizer(dim).transform(text);
            let features: Vec<f64> = embedding
                .iter()
                .chain(lexical.iter())
                .chain(linguistic.iter())
                .copied()
                .collect();

            let model = self.context.classifier(dim);
            let class = model.predict(&features);
            let (zero, one) = dim.class_letters();
            let letter = if class == 1 { one } else { zero };

            let value = match model.as_probabilistic() {
                Some(p) => round2(p.predicted_probability(&features)),
                None => FALLBACK_CONFIDENCE,
            };

            debug!(dimension = %dim, class, letter = %letter, confidence = value, "dimension classified");
            letters[slot] = letter;
            confidence.set(dim, value);
        }

        Ok(TextClassification {
            personality: PersonalityType::from_letters(letters)?,
            confidence,
            keywords: self.keywords(text),
        })
    }

    /// Top vocabulary terms found in the text, up to
    /// [`KEYWORDS_PER_DIMENSION`] per dimension ranked by count, then
    /// deduplicated in first-seen order and capped at [`KEYWORD_CAP`].
    fn keywords(&self, text: &str) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for dim in Dimension::ALL {
            let vectorizer = self.context.vectorizer(dim);
            let counts = vectorizer.transform(text);
            for col in vectorizer
                .ranked_nonzero(&counts)
                .into_iter()
                .take(KEYWORDS_PER_DIMENSION)
            {
                if let Some(term) = vectorizer.term(col) {
                    if !keywords.iter().any(|k| k == term) {
                        keywords.push(term.to_string());
                    }
                }
            }
        }
        keywords.truncate(KEYWORD_CAP);
        keywords
    }
}
