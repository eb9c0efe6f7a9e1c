//! Multi-class enhancement classifier.
//!
//! The questionnaire confidence enhancer runs an ordinal-encoded answer
//! vector through this model to get a probability distribution over the
//! sixteen types. Unlike the text-channel artifacts it has a training
//! fallback: when no saved artifact exists it is fitted to the bundled
//! labeled dataset (softmax regression, seeded and deterministic) and the
//! result is persisted for reuse.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, ModelResult};

// ── Label encoder ───────────────────────────────────────────────────────

/// Bidirectional mapping between type labels and class indices.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    labels: Vec<String>,
}

impl LabelEncoder {
    /// Fit the encoder to the distinct labels of a dataset, sorted for a
    /// stable index assignment.
    pub fn fit(labels: impl IntoIterator<Item = String>) -> Self {
        let mut labels: Vec<String> = labels.into_iter().collect();
        labels.sort();
        labels.dedup();
        Self { labels }
    }

    /// Class index of a label.
    pub fn transform(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Label of a class index.
    pub fn inverse(&self, class: usize) -> Option<&str> {
        self.labels.get(class).map(String::as_str)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the encoder holds no classes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ── Training data ───────────────────────────────────────────────────────

/// One labeled submission: the ordinal answer vector and its known type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingSample {
    pub answers: Vec<f64>,
    pub label: String,
}

/// Training hyperparameters. Defaults fit the bundled dataset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 400,
            learning_rate: 0.05,
            seed: 42,
        }
    }
}

// ── Enhancer model ──────────────────────────────────────────────────────

/// Softmax-regression classifier over the sixteen personality types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnhancerModel {
    /// Per-class weight rows.
    weights: Vec<Vec<f64>>,
    /// Per-class bias terms.
    bias: Vec<f64>,
    /// Class index to label mapping.
    pub labels: LabelEncoder,
}

impl EnhancerModel {
    /// Assemble a model from explicit parameters, validating that the
    /// weight rows, biases, and labels agree on the class count and that
    /// every weight row has the same width.
    pub fn from_parts(
        weights: Vec<Vec<f64>>,
        bias: Vec<f64>,
        labels: LabelEncoder,
    ) -> ModelResult<Self> {
        if weights.len() != labels.len() || bias.len() != labels.len() {
            return Err(ModelError::Training(
                "weights, bias, and labels disagree on class count".into(),
            ));
        }
        let width = weights.first().map(Vec::len).unwrap_or(0);
        if weights.iter().any(|row| row.len() != width) {
            return Err(ModelError::Training("weight rows have uneven widths".into()));
        }
        Ok(Self {
            weights,
            bias,
            labels,
        })
    }

    /// Fit a model to labeled samples with seeded stochastic gradient
    /// descent. Deterministic for a fixed config.
    pub fn train(samples: &[TrainingSample], config: &TrainingConfig) -> ModelResult<Self> {
        if samples.is_empty() {
            return Err(ModelError::Training("empty dataset".into()));
        }
        let n_features = samples[0].answers.len();
        if n_features == 0 || samples.iter().any(|s| s.answers.len() != n_features) {
            return Err(ModelError::Training(
                "samples must share one nonzero feature width".into(),
            ));
        }

        let labels = LabelEncoder::fit(samples.iter().map(|s| s.label.clone()));
        let n_classes = labels.len();
        if n_classes < 2 {
            return Err(ModelError::Training(
                "dataset must cover at least two classes".into(),
            ));
        }

        let targets: Vec<usize> = samples
            .iter()
            .map(|s| {
                labels
                    .transform(&s.label)
                    .ok_or_else(|| ModelError::Training(format!("unknown label {}", s.label)))
            })
            .collect::<ModelResult<_>>()?;

        let mut model = Self {
            weights: vec![vec![0.0; n_features]; n_classes],
            bias: vec![0.0; n_classes],
            labels,
        };

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut order: Vec<usize> = (0..samples.len()).collect();

        for epoch in 0..config.epochs {
            order.shuffle(&mut rng);
            for &i in &order {
                let x = &samples[i].answers;
                let probs = model.predict_proba(x);
                for class in 0..n_classes {
                    let indicator = if class == targets[i] { 1.0 } else { 0.0 };
                    let grad = probs[class] - indicator;
                    for (w, xi) in model.weights[class].iter_mut().zip(x.iter()) {
                        *w -= config.learning_rate * grad * xi;
                    }
                    model.bias[class] -= config.learning_rate * grad;
                }
            }
            if epoch % 100 == 0 {
                debug!(epoch, "enhancer training epoch complete");
            }
        }

        Ok(model)
    }

    /// Probability distribution over the classes for one feature vector.
    pub fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        let scores: Vec<f64> = self
            .weights
            .iter()
            .zip(self.bias.iter())
            .map(|(row, b)| {
                row.iter().zip(features.iter()).map(|(w, x)| w * x).sum::<f64>() + b
            })
            .collect();

        // Shift by the max score for numerical stability.
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / total).collect()
    }

    /// Most probable label and its probability.
    pub fn predict(&self, features: &[f64]) -> Option<(&str, f64)> {
        let probs = self.predict_proba(features);
        let (class, p) = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))?;
        Some((self.labels.inverse(class)?, *p))
    }
}
