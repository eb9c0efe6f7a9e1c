//! The tiered acquisition chain.

use std::time::Duration;

use mindprint_types::{AnalysisError, AnalysisResult, EvidenceBundle};
use tracing::{info, instrument, warn};

use crate::archive::ArchiveSource;
use crate::error::SourceError;
use crate::live::LiveStreamClient;
use crate::source::{EvidenceSource, SourceFetch};

/// Strip a leading `@` and lowercase. All sources receive this form.
pub fn normalize_handle(handle: &str) -> String {
    handle.trim().trim_start_matches('@').to_lowercase()
}

/// Configuration of the acquisition chain.
#[derive(Clone, Debug)]
pub struct AcquisitionConfig {
    /// Whether the live primary source is consulted at all.
    pub primary_enabled: bool,
    /// Base URL of the live source API.
    pub base_url: String,
    /// Bearer token for the live source, if any.
    pub bearer_token: Option<String>,
    /// Hard deadline for the whole primary fetch.
    pub timeout: Duration,
    /// Upper bound on units fetched per request.
    pub max_units: usize,
    /// A fetch below this many units does not count as a result.
    pub min_units: usize,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            primary_enabled: false,
            base_url: "https://stream.example.com/v2".to_string(),
            bearer_token: None,
            timeout: Duration::from_secs(10),
            max_units: 20,
            min_units: 5,
        }
    }
}

/// Primary-then-secondary evidence acquisition.
///
/// The primary tier is best-effort: any error, timeout, or insufficient
/// fetch falls through to the secondary tier without surfacing to the
/// caller. Only the secondary tier's verdict is final.
pub struct AcquisitionChain {
    primary: Option<Box<dyn EvidenceSource>>,
    secondary: Box<dyn EvidenceSource>,
    timeout: Duration,
    max_units: usize,
    min_units: usize,
}

impl AcquisitionChain {
    /// Build the chain from configuration: a live primary when enabled,
    /// always backed by the bundled archive.
    pub fn from_config(config: &AcquisitionConfig) -> AnalysisResult<Self> {
        let primary: Option<Box<dyn EvidenceSource>> = if config.primary_enabled {
            let client = LiveStreamClient::new(
                config.base_url.clone(),
                config.bearer_token.clone(),
                config.timeout,
            )
            .map_err(|e| AnalysisError::internal("primary source setup", e.to_string()))?;
            Some(Box::new(client))
        } else {
            None
        };
        let secondary = ArchiveSource::bundled()
            .map_err(|e| AnalysisError::internal("archive load", e.to_string()))?;
        Ok(Self::with_sources(primary, Box::new(secondary), config))
    }

    /// Assemble a chain over arbitrary sources.
    pub fn with_sources(
        primary: Option<Box<dyn EvidenceSource>>,
        secondary: Box<dyn EvidenceSource>,
        config: &AcquisitionConfig,
    ) -> Self {
        Self {
            primary,
            secondary,
            timeout: config.timeout,
            max_units: config.max_units,
            min_units: config.min_units,
        }
    }

    /// Acquire an evidence bundle for a handle.
    ///
    /// Returns [`AnalysisError::NotFound`] when neither tier produces at
    /// least the configured minimum number of units.
    #[instrument(skip(self))]
    pub async fn acquire(&self, handle: &str) -> AnalysisResult<EvidenceBundle> {
        let normalized = normalize_handle(handle);
        if normalized.is_empty() {
            return Err(AnalysisError::Validation("handle is empty".into()));
        }

        if let Some(primary) = &self.primary {
            match tokio::time::timeout(self.timeout, primary.fetch(&normalized, self.max_units))
                .await
            {
                Ok(Ok(fetch)) if fetch.units.len() >= self.min_units => {
                    info!(
                        handle = %normalized,
                        units = fetch.units.len(),
                        "primary source supplied evidence"
                    );
                    return Ok(self.bundle(&normalized, primary.tag(), fetch));
                }
                Ok(Ok(fetch)) => {
                    warn!(
                        handle = %normalized,
                        units = fetch.units.len(),
                        min = self.min_units,
                        "primary source insufficient, falling back"
                    );
                }
                Ok(Err(error)) => {
                    warn!(handle = %normalized, %error, "primary source failed, falling back");
                }
                Err(_) => {
                    warn!(
                        handle = %normalized,
                        timeout_secs = self.timeout.as_secs(),
                        "primary source timed out, falling back"
                    );
                }
            }
        }

        match self.secondary.fetch(&normalized, self.max_units).await {
            Ok(fetch) if fetch.units.len() >= self.min_units => {
                info!(
                    handle = %normalized,
                    units = fetch.units.len(),
                    "secondary source supplied evidence"
                );
                Ok(self.bundle(&normalized, self.secondary.tag(), fetch))
            }
            Ok(fetch) => {
                warn!(
                    handle = %normalized,
                    units = fetch.units.len(),
                    min = self.min_units,
                    "secondary source insufficient"
                );
                Err(AnalysisError::NotFound { handle: normalized })
            }
            Err(SourceError::UserNotFound { .. }) => {
                Err(AnalysisError::NotFound { handle: normalized })
            }
            Err(error) => Err(AnalysisError::internal("secondary fetch", error.to_string())),
        }
    }

    fn bundle(
        &self,
        handle: &str,
        tag: mindprint_types::EvidenceSourceTag,
        fetch: SourceFetch,
    ) -> EvidenceBundle {
        EvidenceBundle::aggregate(handle, tag, fetch.units, fetch.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mindprint_types::EvidenceSourceTag;

    struct StubSource {
        tag: EvidenceSourceTag,
        outcome: StubOutcome,
    }

    enum StubOutcome {
        Units(Vec<String>),
        Fail(fn() -> SourceError),
        Hang,
    }

    #[async_trait]
    impl EvidenceSource for StubSource {
        fn tag(&self) -> EvidenceSourceTag {
            self.tag
        }

        async fn fetch(&self, handle: &str, max_units: usize) -> crate::SourceResult<SourceFetch> {
            match &self.outcome {
                StubOutcome::Units(units) => Ok(SourceFetch {
                    units: units.iter().take(max_units).cloned().collect(),
                    profile: None,
                }),
                StubOutcome::Fail(make) => Err(make()),
                StubOutcome::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Err(SourceError::UserNotFound {
                        handle: handle.to_string(),
                    })
                }
            }
        }
    }

    fn primary(outcome: StubOutcome) -> Option<Box<dyn EvidenceSource>> {
        Some(Box::new(StubSource {
            tag: EvidenceSourceTag::Primary,
            outcome,
        }))
    }

    fn secondary(outcome: StubOutcome) -> Box<dyn EvidenceSource> {
        Box::new(StubSource {
            tag: EvidenceSourceTag::Secondary,
            outcome,
        })
    }

    fn units(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("post number {i} with some content")).collect()
    }

    fn config() -> AcquisitionConfig {
        AcquisitionConfig {
            timeout: Duration::from_millis(200),
            ..AcquisitionConfig::default()
        }
    }

    #[test]
    fn handle_normalization() {
        assert_eq!(normalize_handle("@SomeBody"), "somebody");
        assert_eq!(normalize_handle("  plain "), "plain");
        assert_eq!(normalize_handle("@"), "");
    }

    #[tokio::test]
    async fn primary_success_is_tagged_primary() {
        let chain = AcquisitionChain::with_sources(
            primary(StubOutcome::Units(units(8))),
            secondary(StubOutcome::Units(units(8))),
            &config(),
        );
        let bundle = chain.acquire("@Someone").await.unwrap();
        assert_eq!(bundle.source_tag, EvidenceSourceTag::Primary);
        assert_eq!(bundle.handle, "someone");
        assert_eq!(bundle.unit_count(), 8);
    }

    #[tokio::test]
    async fn primary_error_falls_back_to_secondary() {
        for make in [
            (|| SourceError::Auth) as fn() -> SourceError,
            || SourceError::RateLimited,
            || SourceError::UserNotFound {
                handle: "someone".into(),
            },
        ] {
            let chain = AcquisitionChain::with_sources(
                primary(StubOutcome::Fail(make)),
                secondary(StubOutcome::Units(units(6))),
                &config(),
            );
            let bundle = chain.acquire("someone").await.unwrap();
            assert_eq!(bundle.source_tag, EvidenceSourceTag::Secondary);
        }
    }

    #[tokio::test]
    async fn insufficient_primary_falls_back() {
        let chain = AcquisitionChain::with_sources(
            primary(StubOutcome::Units(units(4))),
            secondary(StubOutcome::Units(units(6))),
            &config(),
        );
        let bundle = chain.acquire("someone").await.unwrap();
        assert_eq!(bundle.source_tag, EvidenceSourceTag::Secondary);
    }

    #[tokio::test]
    async fn primary_timeout_falls_back() {
        let chain = AcquisitionChain::with_sources(
            primary(StubOutcome::Hang),
            secondary(StubOutcome::Units(units(6))),
            &config(),
        );
        let bundle = chain.acquire("someone").await.unwrap();
        assert_eq!(bundle.source_tag, EvidenceSourceTag::Secondary);
    }

    #[tokio::test]
    async fn both_tiers_empty_is_not_found() {
        let chain = AcquisitionChain::with_sources(
            primary(StubOutcome::Units(vec![])),
            secondary(StubOutcome::Fail(|| SourceError::UserNotFound {
                handle: "someone".into(),
            })),
            &config(),
        );
        let err = chain.acquire("someone").await.unwrap_err();
        assert!(matches!(err, AnalysisError::NotFound { .. }));
    }

    #[tokio::test]
    async fn insufficient_secondary_is_not_found() {
        let chain = AcquisitionChain::with_sources(
            None,
            secondary(StubOutcome::Units(units(3))),
            &config(),
        );
        let err = chain.acquire("someone").await.unwrap_err();
        assert!(matches!(err, AnalysisError::NotFound { .. }));
    }

    #[tokio::test]
    async fn empty_handle_is_a_validation_error() {
        let chain = AcquisitionChain::with_sources(
            None,
            secondary(StubOutcome::Units(units(6))),
            &config(),
        );
        let err = chain.acquire("@").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[tokio::test]
    async fn max_units_caps_primary_fetch() {
        let chain = AcquisitionChain::with_sources(
            primary(StubOutcome::Units(units(50))),
            secondary(StubOutcome::Units(units(6))),
            &config(),
        );
        let bundle = chain.acquire("someone").await.unwrap();
        assert_eq!(bundle.unit_count(), 20);
    }
}
