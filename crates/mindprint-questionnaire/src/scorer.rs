//! Rule-based weighted-sum scoring.

use std::sync::Arc;

use mindprint_types::{
    round2, AnalysisResult, Dimension, DimensionConfidence, PersonalityType, QuestionnaireAnswer,
};
use tracing::trace;

use crate::bank::QuestionBank;

/// The rule-based scoring outcome: a type and per-dimension confidence.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredProfile {
    pub personality: PersonalityType,
    pub confidence: DimensionConfidence,
}

/// Deterministic weighted-sum scorer over the question bank.
///
/// Answers referencing unknown question ids are skipped without error;
/// submission completeness is a concern of the calling facade, not of the
/// scoring rule itself.
#[derive(Clone, Debug)]
pub struct QuestionnaireScorer {
    bank: Arc<QuestionBank>,
}

impl QuestionnaireScorer {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Score a submission into a type and confidence map.
    ///
    /// Per dimension: each answer adds its choice weight to that choice's
    /// letter, the letter with the larger sum wins (the first-listed letter
    /// on a tie), and confidence is the winning share of the dimension
    /// total. A dimension with no weight defaults to its first-listed
    /// letter at 0.50.
    pub fn score(&self, answers: &[QuestionnaireAnswer]) -> AnalysisResult<ScoredProfile> {
        let mut letters = ['\0'; 4];
        let mut confidence = DimensionConfidence::new();

        for (slot, dim) in Dimension::ALL.into_iter().enumerate() {
            let (first, second) = dim.scoring_letters();
            let mut first_total = 0.0;
            let mut second_total = 0.0;

            for answer in answers {
                let Some(question) = self.bank.question(answer.question_id) else {
                    continue;
                };
                if question.dimension != dim {
                    continue;
                }
                let choice = question.choice(answer.choice);
                if choice.letter == first {
                    first_total += choice.weight;
                } else {
                    second_total += choice.weight;
                }
            }

            let total = first_total + second_total;
            let (letter, share) = if total == 0.0 {
                (first, 0.5)
            } else if first_total >= second_total {
                (first, first_total / total)
            } else {
                (second, second_total / total)
            };

            trace!(dimension = %dim, letter = %letter, first_total, second_total, "dimension scored");
            letters[slot] = letter;
            confidence.set(dim, round2(share));
        }

        Ok(ScoredProfile {
            personality: PersonalityType::from_letters(letters)?,
            confidence,
        })
    }
}
