//! JSON artifact persistence.
//!
//! Every trained model lives in the store as one JSON file named after the
//! artifact. A compiled-in set of defaults backs the store so the engine
//! can start on a fresh install with no artifact directory at all.

use std::fs;
use std::path::{Path, PathBuf};

use mindprint_types::Dimension;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ModelError, ModelResult};

/// Artifact name of the shared word-embedding model.
pub const EMBEDDING: &str = "embedding";

/// Artifact name of the enhancement classifier.
pub const ENHANCER: &str = "enhancer";

/// Artifact name of one dimension's lexical vectorizer.
pub fn vectorizer_name(dim: Dimension) -> String {
    format!("{}_vectorizer", dim.key().to_lowercase())
}

/// Artifact name of one dimension's binary classifier.
pub fn classifier_name(dim: Dimension) -> String {
    format!("{}_classifier", dim.key().to_lowercase())
}

// ── Bundled defaults ────────────────────────────────────────────────────

/// JSON text of the compiled-in default for an artifact name, if one ships.
pub fn bundled_json(name: &str) -> Option<&'static str> {
    match name {
        "embedding" => Some(include_str!("../artifacts/embedding.json")),
        "ie_vectorizer" => Some(include_str!("../artifacts/ie_vectorizer.json")),
        "ns_vectorizer" => Some(include_str!("../artifacts/ns_vectorizer.json")),
        "tf_vectorizer" => Some(include_str!("../artifacts/tf_vectorizer.json")),
        "jp_vectorizer" => Some(include_str!("../artifacts/jp_vectorizer.json")),
        "ie_classifier" => Some(include_str!("../artifacts/ie_classifier.json")),
        "ns_classifier" => Some(include_str!("../artifacts/ns_classifier.json")),
        "tf_classifier" => Some(include_str!("../artifacts/tf_classifier.json")),
        "jp_classifier" => Some(include_str!("../artifacts/jp_classifier.json")),
        _ => None,
    }
}

// ── Store ───────────────────────────────────────────────────────────────

/// Directory-backed artifact store.
///
/// Lookups go to the directory first and fall back to the bundled
/// defaults; saves always go to the directory.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the store persists into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Whether the artifact resolves, on disk or bundled.
    pub fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_file() || bundled_json(name).is_some()
    }

    /// Whether the artifact has an on-disk file, ignoring bundled defaults.
    pub fn exists_on_disk(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    /// Load an artifact, preferring the on-disk file over the bundled
    /// default.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> ModelResult<T> {
        let path = self.path_of(name);
        let json = if path.is_file() {
            debug!(artifact = name, path = %path.display(), "loading artifact from disk");
            fs::read_to_string(&path).map_err(|source| ModelError::Io {
                name: name.to_string(),
                source,
            })?
        } else if let Some(bundled) = bundled_json(name) {
            debug!(artifact = name, "loading bundled artifact");
            bundled.to_string()
        } else {
            return Err(ModelError::NotFound {
                name: name.to_string(),
            });
        };

        serde_json::from_str(&json).map_err(|source| ModelError::Malformed {
            name: name.to_string(),
            source,
        })
    }

    /// Persist an artifact into the store directory, creating it if needed.
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> ModelResult<()> {
        fs::create_dir_all(&self.root).map_err(|source| ModelError::Io {
            name: name.to_string(),
            source,
        })?;
        let json = serde_json::to_string_pretty(value).map_err(|source| ModelError::Malformed {
            name: name.to_string(),
            source,
        })?;
        let path = self.path_of(name);
        fs::write(&path, json).map_err(|source| ModelError::Io {
            name: name.to_string(),
            source,
        })?;
        debug!(artifact = name, path = %path.display(), "artifact saved");
        Ok(())
    }
}
