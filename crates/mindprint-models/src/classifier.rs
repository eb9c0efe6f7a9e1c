//! Binary dimension classifiers.
//!
//! Each of the four personality dimensions has one binary classifier
//! consuming the concatenated embedding ⊕ lexical-count ⊕ linguistic
//! feature vector. Whether a model can report a class probability is a
//! capability, expressed through [`SupportsProbability`]; consumers fall
//! back to [`FALLBACK_CONFIDENCE`] when the capability is absent.

use serde::{Deserialize, Serialize};

/// Confidence reported for a prediction when the model exposes no
/// probability interface.
pub const FALLBACK_CONFIDENCE: f64 = 0.75;

/// A binary classifier over the concatenated feature space.
///
/// Implementations are read-only after load and safe to share across
/// concurrent requests. Features beyond the trained width are ignored and
/// missing trailing features are treated as zero.
pub trait DimensionClassifier: Send + Sync {
    /// Predicted class, 0 or 1.
    fn predict(&self, features: &[f64]) -> u8;

    /// The probability capability, when the model has one.
    fn as_probabilistic(&self) -> Option<&dyn SupportsProbability> {
        None
    }
}

/// Capability interface for models that can report the probability of
/// their predicted class.
pub trait SupportsProbability {
    /// Probability of the predicted class, in [0.5, 1.0].
    fn predicted_probability(&self, features: &[f64]) -> f64;
}

fn dot(weights: &[f64], features: &[f64]) -> f64 {
    weights.iter().zip(features.iter()).map(|(w, x)| w * x).sum()
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

// ── Logistic classifier ─────────────────────────────────────────────────

/// Linear classifier with a calibrated sigmoid probability output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LogisticClassifier {
    /// Probability of class 1.
    fn class_one_probability(&self, features: &[f64]) -> f64 {
        sigmoid(dot(&self.weights, features) + self.bias)
    }
}

impl DimensionClassifier for LogisticClassifier {
    fn predict(&self, features: &[f64]) -> u8 {
        u8::from(self.class_one_probability(features) >= 0.5)
    }

    fn as_probabilistic(&self) -> Option<&dyn SupportsProbability> {
        Some(self)
    }
}

impl SupportsProbability for LogisticClassifier {
    fn predicted_probability(&self, features: &[f64]) -> f64 {
        let p1 = self.class_one_probability(features);
        p1.max(1.0 - p1)
    }
}

// ── Margin classifier ───────────────────────────────────────────────────

/// Linear classifier trained on a hinge objective. Produces only a signed
/// margin, so it carries no probability capability.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarginClassifier {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl DimensionClassifier for MarginClassifier {
    fn predict(&self, features: &[f64]) -> u8 {
        u8::from(dot(&self.weights, features) + self.bias >= 0.0)
    }
}

// ── Artifact shape ──────────────────────────────────────────────────────

/// On-disk classifier artifact, tagged by model kind.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    Logistic(LogisticClassifier),
    Margin(MarginClassifier),
}

impl ClassifierArtifact {
    /// Erase the concrete kind behind the classifier trait.
    pub fn into_boxed(self) -> Box<dyn DimensionClassifier> {
        match self {
            ClassifierArtifact::Logistic(m) => Box::new(m),
            ClassifierArtifact::Margin(m) => Box::new(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logistic() -> LogisticClassifier {
        LogisticClassifier {
            weights: vec![2.0, -1.0],
            bias: 0.0,
        }
    }

    #[test]
    fn logistic_predicts_by_sign_of_score() {
        let m = logistic();
        assert_eq!(m.predict(&[1.0, 0.0]), 1);
        assert_eq!(m.predict(&[0.0, 1.0]), 0);
    }

    #[test]
    fn logistic_probability_is_of_the_predicted_class() {
        let m = logistic();
        let p = m
            .as_probabilistic()
            .expect("logistic models expose probability")
            .predicted_probability(&[0.0, 1.0]);
        assert!(p >= 0.5, "predicted-class probability is at least 0.5");
        assert!((p - sigmoid(1.0)).abs() < 1e-9);
    }

    #[test]
    fn margin_classifier_has_no_probability_capability() {
        let m = MarginClassifier {
            weights: vec![1.0],
            bias: -0.5,
        };
        assert!(m.as_probabilistic().is_none());
        assert_eq!(m.predict(&[1.0]), 1);
        assert_eq!(m.predict(&[0.0]), 0);
    }

    #[test]
    fn extra_features_are_ignored() {
        let m = logistic();
        assert_eq!(m.predict(&[1.0, 0.0, 99.0, -99.0]), 1);
    }

    #[test]
    fn artifact_round_trip_preserves_kind() {
        let artifact = ClassifierArtifact::Margin(MarginClassifier {
            weights: vec![0.1],
            bias: 0.0,
        });
        let json = serde_json::to_string(&artifact).unwrap();
        assert!(json.contains("\"kind\":\"margin\""));
        let back: ClassifierArtifact = serde_json::from_str(&json).unwrap();
        assert!(back.into_boxed().as_probabilistic().is_none());
    }

    #[test]
    fn fallback_confidence_constant() {
        assert_eq!(FALLBACK_CONFIDENCE, 0.75);
    }
}
