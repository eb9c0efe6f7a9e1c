//! Per-dimension confidence maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Round a score to two decimals, the precision every confidence value in
/// the pipeline is reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mapping from dimension to a probability-like confidence in [0.0, 1.0].
///
/// Rule-based scoring produces values in the full range; enhanced output is
/// clamped to the tighter [0.50, 0.99] band by the confidence enhancer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionConfidence(BTreeMap<Dimension, f64>);

impl DimensionConfidence {
    /// Empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build a map by evaluating `f` for each dimension in fixed order.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> f64) -> Self {
        let mut map = BTreeMap::new();
        for dim in Dimension::ALL {
            map.insert(dim, f(dim));
        }
        Self(map)
    }

    /// Set a dimension's confidence.
    pub fn set(&mut self, dim: Dimension, value: f64) {
        self.0.insert(dim, value);
    }

    /// Confidence for one dimension, if present.
    pub fn get(&self, dim: Dimension) -> Option<f64> {
        self.0.get(&dim).copied()
    }

    /// Iterate entries in fixed dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.0.iter().map(|(d, v)| (*d, *v))
    }

    /// Number of dimensions present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no dimension has been scored yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every value lies in [lo, hi].
    pub fn all_within(&self, lo: f64, hi: f64) -> bool {
        self.0.values().all(|v| (lo..=hi).contains(v))
    }
}

impl FromIterator<(Dimension, f64)> for DimensionConfidence {
    fn from_iter<I: IntoIterator<Item = (Dimension, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
