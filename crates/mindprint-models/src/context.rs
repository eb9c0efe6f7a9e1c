//! Process-wide model context.
//!
//! All trained artifacts are loaded exactly once, up front, into an
//! immutable [`ModelContext`]. Inference paths borrow from it and never
//! load from disk themselves, so per-request latency is bounded by pure
//! computation.

use std::sync::{Arc, Mutex, OnceLock};

use mindprint_types::Dimension;
use tracing::info;

use crate::classifier::{ClassifierArtifact, DimensionClassifier};
use crate::embedding::WordEmbeddingModel;
use crate::enhancer::EnhancerModel;
use crate::error::ModelResult;
use crate::store::{self, ArtifactStore};
use crate::vectorizer::LexicalVectorizer;

static SHARED: OnceLock<Arc<ModelContext>> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Immutable bundle of every loaded model.
///
/// One vectorizer and one classifier per dimension, indexed in the fixed
/// dimension order. The enhancer is optional: when absent the
/// questionnaire channel simply skips confidence enhancement.
pub struct ModelContext {
    embedding: WordEmbeddingModel,
    vectorizers: [LexicalVectorizer; 4],
    classifiers: [Box<dyn DimensionClassifier>; 4],
    enhancer: Option<EnhancerModel>,
}

impl ModelContext {
    /// Load every artifact from the store. The text-channel artifacts are
    /// required; the enhancer is loaded only when present.
    pub fn load(store: &ArtifactStore) -> ModelResult<Self> {
        let embedding: WordEmbeddingModel = store.load(store::EMBEDDING)?;

        let mut vectorizers = Vec::with_capacity(4);
        let mut classifiers: Vec<Box<dyn DimensionClassifier>> = Vec::with_capacity(4);
        for dim in Dimension::ALL {
            vectorizers.push(store.load::<LexicalVectorizer>(&store::vectorizer_name(dim))?);
            let artifact: ClassifierArtifact = store.load(&store::classifier_name(dim))?;
            classifiers.push(artifact.into_boxed());
        }

        let enhancer = if store.exists(store::ENHANCER) {
            Some(store.load::<EnhancerModel>(store::ENHANCER)?)
        } else {
            None
        };

        info!(
            embedding_dim = embedding.dim(),
            embedding_vocab = embedding.vocab_len(),
            enhancer_loaded = enhancer.is_some(),
            "model context loaded"
        );

        // Lengths are exactly 4 by construction.
        let vectorizers = match <[LexicalVectorizer; 4]>::try_from(vectorizers) {
            Ok(v) => v,
            Err(_) => unreachable!("one vectorizer per dimension"),
        };
        let classifiers = match <[Box<dyn DimensionClassifier>; 4]>::try_from(classifiers) {
            Ok(c) => c,
            Err(_) => unreachable!("one classifier per dimension"),
        };

        Ok(Self {
            embedding,
            vectorizers,
            classifiers,
            enhancer,
        })
    }

    /// The shared context, initializing it from the store on first call.
    /// Concurrent callers during initialization block until the one load
    /// finishes; later calls are lock-free reads.
    pub fn initialize_shared(store: &ArtifactStore) -> ModelResult<Arc<ModelContext>> {
        if let Some(ctx) = SHARED.get() {
            return Ok(Arc::clone(ctx));
        }
        let _guard = INIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(ctx) = SHARED.get() {
            return Ok(Arc::clone(ctx));
        }
        let ctx = Arc::new(Self::load(store)?);
        let _ = SHARED.set(Arc::clone(&ctx));
        Ok(ctx)
    }

    /// The shared context, if it has been initialized.
    pub fn shared() -> Option<Arc<ModelContext>> {
        SHARED.get().cloned()
    }

    pub fn embedding(&self) -> &WordEmbeddingModel {
        &self.embedding
    }

    pub fn vectorizer(&self, dim: Dimension) -> &LexicalVectorizer {
        &self.vectorizers[dim as usize]
    }

    pub fn classifier(&self, dim: Dimension) -> &dyn DimensionClassifier {
        self.classifiers[dim as usize].as_ref()
    }

    pub fn enhancer(&self) -> Option<&EnhancerModel> {
        self.enhancer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_context() -> ModelContext {
        let store = ArtifactStore::new(std::env::temp_dir().join("mindprint-ctx-none"));
        ModelContext::load(&store).expect("bundled artifacts load")
    }

    #[test]
    fn loads_every_dimension_from_bundled_artifacts() {
        let ctx = bundled_context();
        for dim in Dimension::ALL {
            assert!(ctx.vectorizer(dim).vocab_len() > 0);
            let class = ctx.classifier(dim).predict(&vec![0.0; 60]);
            assert!(class <= 1);
        }
    }

    #[test]
    fn enhancer_is_absent_without_a_saved_artifact() {
        let ctx = bundled_context();
        assert!(ctx.enhancer().is_none());
    }

    #[test]
    fn shared_context_is_initialized_once() {
        let store = ArtifactStore::new(std::env::temp_dir().join("mindprint-ctx-shared"));
        let a = ModelContext::initialize_shared(&store).unwrap();
        let b = ModelContext::initialize_shared(&store).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(ModelContext::shared().is_some());
    }
}
