//! Sparse vocabulary-count vectors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::token::lexical_tokens;

/// Vocabulary-count vectorizer with a vocabulary fixed by a previously
/// trained artifact. One instance exists per dimension; each produces the
/// sparse lexical block of that dimension's feature vector.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "VectorizerArtifact", into = "VectorizerArtifact")]
pub struct LexicalVectorizer {
    /// Vocabulary terms in column order.
    terms: Vec<String>,
    /// Term to column lookup, rebuilt from `terms` on load.
    index: HashMap<String, usize>,
}

/// On-disk shape: the ordered term list only.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct VectorizerArtifact {
    terms: Vec<String>,
}

impl From<VectorizerArtifact> for LexicalVectorizer {
    fn from(artifact: VectorizerArtifact) -> Self {
        Self::new(artifact.terms)
    }
}

impl From<LexicalVectorizer> for VectorizerArtifact {
    fn from(v: LexicalVectorizer) -> Self {
        Self { terms: v.terms }
    }
}

impl LexicalVectorizer {
    /// Build a vectorizer over an ordered vocabulary. Later duplicates of a
    /// term keep the first column.
    pub fn new(terms: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(terms.len());
        for (col, term) in terms.iter().enumerate() {
            index.entry(term.clone()).or_insert(col);
        }
        Self { terms, index }
    }

    /// Number of vocabulary columns.
    pub fn vocab_len(&self) -> usize {
        self.terms.len()
    }

    /// The term owning a column.
    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    /// Count occurrences of each vocabulary term in the text.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut counts = vec![0.0; self.terms.len()];
        for token in lexical_tokens(text) {
            if let Some(&col) = self.index.get(&token) {
                counts[col] += 1.0;
            }
        }
        counts
    }

    /// Columns with nonzero counts, ranked by count descending; ties keep
    /// the lower column. Used for keyword extraction.
    pub fn ranked_nonzero(&self, counts: &[f64]) -> Vec<usize> {
        let mut cols: Vec<usize> = counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0.0)
            .map(|(i, _)| i)
            .collect();
        cols.sort_by(|a, b| {
            counts[*b]
                .partial_cmp(&counts[*a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(b))
        });
        cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> LexicalVectorizer {
        LexicalVectorizer::new(vec![
            "party".into(),
            "quiet".into(),
            "theory".into(),
            "plan".into(),
        ])
    }

    #[test]
    fn counts_occurrences_per_column() {
        let v = vectorizer();
        let counts = v.transform("Theory before party; theory after party. Theory!");
        assert_eq!(counts, vec![2.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn out_of_vocabulary_tokens_are_ignored() {
        let v = vectorizer();
        assert_eq!(v.transform("nothing relevant here"), vec![0.0; 4]);
    }

    #[test]
    fn ranked_nonzero_orders_by_count_then_column() {
        let v = vectorizer();
        let ranked = v.ranked_nonzero(&[2.0, 0.0, 3.0, 2.0]);
        assert_eq!(ranked, vec![2, 0, 3]);
    }

    #[test]
    fn serde_round_trip_rebuilds_index() {
        let v = vectorizer();
        let json = serde_json::to_string(&v).unwrap();
        let back: LexicalVectorizer = serde_json::from_str(&json).unwrap();
        assert_eq!(back.transform("plan the party"), vec![1.0, 0.0, 0.0, 1.0]);
        assert_eq!(back.term(2), Some("theory"));
    }
}
