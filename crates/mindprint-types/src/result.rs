//! The immutable outcome of a classification request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bundle::{EvidenceSourceTag, SourceProfile};
use crate::confidence::DimensionConfidence;
use crate::personality::PersonalityType;

/// Unique identifier for a classification result.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub String);

impl AnalysisId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "analysis:{}", self.0)
    }
}

/// What evidence fed the classification. Carried for auditability; never
/// read back into scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum EvidenceSummary {
    /// Fixed-choice questionnaire submission.
    Questionnaire {
        answer_count: usize,
        ml_enhanced: bool,
    },
    /// Free-form text supplied directly by the caller.
    FreeText { chars: usize },
    /// Aggregated social posts from the acquisition chain.
    Social {
        handle: String,
        unit_count: usize,
        aggregate_chars: usize,
        source: EvidenceSourceTag,
        profile: Option<SourceProfile>,
    },
}

/// The outcome of one classification request. Immutable once produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Result identifier.
    pub id: AnalysisId,
    /// The inferred four-letter type.
    pub personality: PersonalityType,
    /// Per-dimension confidence.
    pub confidence: DimensionConfidence,
    /// What evidence produced this result.
    pub evidence: EvidenceSummary,
    /// Most influential vocabulary terms, when the channel extracts them.
    /// At most 10, deduplicated, insertion order preserved.
    pub keywords: Vec<String>,
    /// When the result was produced.
    pub produced_at: DateTime<Utc>,
}

impl ClassificationResult {
    /// Assemble a result, stamping id and timestamp.
    pub fn new(
        personality: PersonalityType,
        confidence: DimensionConfidence,
        evidence: EvidenceSummary,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            id: AnalysisId::new(),
            personality,
            confidence,
            evidence,
            keywords,
            produced_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClassificationResult {
        ClassificationResult::new(
            PersonalityType::parse("INTJ").unwrap(),
            DimensionConfidence::from_fn(|_| 0.8),
            EvidenceSummary::FreeText { chars: 250 },
            vec!["theory".into(), "plan".into()],
        )
    }

    #[test]
    fn result_ids_are_unique() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn evidence_summary_tagged_serialization() {
        let json = serde_json::to_value(EvidenceSummary::Social {
            handle: "sample".into(),
            unit_count: 12,
            aggregate_chars: 900,
            source: EvidenceSourceTag::Secondary,
            profile: None,
        })
        .unwrap();
        assert_eq!(json["channel"], "social");
        assert_eq!(json["source"], "secondary");
    }

    #[test]
    fn result_serde_round_trip() {
        let r = sample();
        let json = serde_json::to_string(&r).unwrap();
        let back: ClassificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.personality, r.personality);
        assert_eq!(back.keywords, r.keywords);
    }
}
