//! Dense semantic text embeddings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::token::lexical_tokens;

/// Pre-trained word-embedding model producing a fixed-width dense vector
/// for a text. Loaded once at startup; read-only afterwards.
///
/// A text is encoded as the L2-normalized mean of the vectors of its known
/// tokens. Texts with no known token map to the zero vector, which the
/// downstream classifiers treat as an uninformative semantic signal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordEmbeddingModel {
    /// Width of every vector in the model.
    dim: usize,
    /// Token to vector table.
    vectors: HashMap<String, Vec<f64>>,
}

impl WordEmbeddingModel {
    /// Build a model from a token table. Vectors of the wrong width are
    /// dropped rather than poisoning the table.
    pub fn new(dim: usize, vectors: HashMap<String, Vec<f64>>) -> Self {
        let vectors = vectors
            .into_iter()
            .filter(|(_, v)| v.len() == dim)
            .collect();
        Self { dim, vectors }
    }

    /// Embedding width.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tokens in the table.
    pub fn vocab_len(&self) -> usize {
        self.vectors.len()
    }

    /// Encode a text into a dense vector of width [`Self::dim`].
    pub fn encode(&self, text: &str) -> Vec<f64> {
        let mut sum = vec![0.0; self.dim];
        let mut hits = 0usize;

        for token in lexical_tokens(text) {
            if let Some(vec) = self.vectors.get(&token) {
                for (s, v) in sum.iter_mut().zip(vec.iter()) {
                    *s += v;
                }
                hits += 1;
            }
        }

        if hits == 0 {
            return sum;
        }

        for s in sum.iter_mut() {
            *s /= hits as f64;
        }

        let norm = sum.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for s in sum.iter_mut() {
                *s /= norm;
            }
        }

        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_model() -> WordEmbeddingModel {
        let mut vectors = HashMap::new();
        vectors.insert("ideas".to_string(), vec![1.0, 0.0]);
        vectors.insert("people".to_string(), vec![0.0, 1.0]);
        WordEmbeddingModel::new(2, vectors)
    }

    #[test]
    fn encode_is_normalized_mean_of_known_tokens() {
        let model = tiny_model();
        let vec = model.encode("ideas and people");
        let norm: f64 = vec.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9, "encoding should be unit length");
        assert!((vec[0] - vec[1]).abs() < 1e-9, "both tokens weigh equally");
    }

    #[test]
    fn unknown_text_encodes_to_zero_vector() {
        let model = tiny_model();
        assert_eq!(model.encode("zzz unfamiliar"), vec![0.0, 0.0]);
    }

    #[test]
    fn encode_width_matches_dim() {
        let model = tiny_model();
        assert_eq!(model.encode("ideas").len(), model.dim());
    }

    #[test]
    fn wrong_width_vectors_are_dropped() {
        let mut vectors = HashMap::new();
        vectors.insert("good".to_string(), vec![1.0, 2.0, 3.0]);
        let model = WordEmbeddingModel::new(2, vectors);
        assert_eq!(model.vocab_len(), 0);
    }

    #[test]
    fn repeated_tokens_shift_the_mean() {
        let model = tiny_model();
        let vec = model.encode("ideas ideas ideas people");
        assert!(vec[0] > vec[1], "majority token should dominate");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_text_encodes_to_a_finite_vector_of_model_width(
                text in ".{0,200}"
            ) {
                let model = tiny_model();
                let vec = model.encode(&text);
                prop_assert_eq!(vec.len(), model.dim());
                prop_assert!(vec.iter().all(|x| x.is_finite()));
                let norm: f64 = vec.iter().map(|x| x * x).sum::<f64>().sqrt();
                prop_assert!(norm <= 1.0 + 1e-9, "encoding is at most unit length");
            }
        }
    }
}
