use std::sync::Arc;

use futures_util::future::join_all;
use pokedex_config::resolver::ResolverConfig;
use pokedex_core::catalog::{NameResolver, SpeciesSource};
use pokedex_core::error::ResolveError;
use pokedex_core::index::SpeciesIndex;
use pokedex_core::name_map::NameMapCache;
use pokedex_core::normalize::normalize;
use pokedex_types::{SpeciesDescriptor, SpeciesDetail};

/// Language tag of French names in species records
pub const FRENCH: &str = "fr";

/// Resolves French common names ("Évoli") to catalog keys ("eevee").
///
/// Known names are answered from the shared [`NameMapCache`]. Unknown names
/// trigger a scan of the species index: details are fetched `batch_size` at a
/// time, every French name seen on the way is recorded, and the scan stops at
/// the first match.
pub struct FrenchResolver {
    source: Arc<dyn SpeciesSource>,
    index: Arc<SpeciesIndex>,
    cache: Arc<NameMapCache>,
    batch_size: usize,
}

#[derive(Debug, Default)]
struct ScanReport {
    batches: usize,
    visited: usize,
    discovered: usize,
    failed: usize,
}

impl std::fmt::Display for ScanReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} batches, {} species visited, {} French names, {} failed fetches",
            self.batches, self.visited, self.discovered, self.failed
        )
    }
}

impl FrenchResolver {
    pub fn new(
        source: Arc<dyn SpeciesSource>,
        index: Arc<SpeciesIndex>,
        cache: Arc<NameMapCache>,
        batch_size: usize,
    ) -> Self {
        Self {
            source,
            index,
            cache,
            // chunks(0) would panic
            batch_size: batch_size.max(1),
        }
    }

    /// Resolver with its own species index built from `config`
    pub fn with_config(
        source: Arc<dyn SpeciesSource>,
        cache: Arc<NameMapCache>,
        config: &ResolverConfig,
    ) -> Self {
        let index = Arc::new(SpeciesIndex::new(Arc::clone(&source), config.index_limit));
        Self::new(source, index, cache, config.batch_size)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn cache(&self) -> &Arc<NameMapCache> {
        &self.cache
    }

    pub fn index(&self) -> &Arc<SpeciesIndex> {
        &self.index
    }

    /// Canonical key for a French name, `Ok(None)` when no species carries it.
    ///
    /// Fails only when the species index cannot be fetched; detail and
    /// storage failures are absorbed.
    pub async fn resolve_english_key(
        &self,
        query: Option<&str>,
    ) -> Result<Option<String>, ResolveError> {
        let key = normalize(query.unwrap_or_default());
        if key.is_empty() {
            return Ok(None);
        }

        if let Some(hit) = self.cache.get(&key).await {
            tracing::debug!("French name '{}' found in cache: {}", key, hit);
            return Ok(Some(hit));
        }

        self.scan(&key).await
    }

    async fn scan(&self, key: &str) -> Result<Option<String>, ResolveError> {
        let index = self
            .index
            .load()
            .await
            .map_err(ResolveError::IndexUnavailable)?;

        tracing::info!(
            "Scanning {} species for French name '{}' ({} per batch)",
            index.len(),
            key,
            self.batch_size
        );

        let mut report = ScanReport::default();

        for batch in index.chunks(self.batch_size) {
            let details = join_all(batch.iter().map(|d| self.fetch_detail(d))).await;
            report.batches += 1;

            for detail in details {
                let Some(detail) = detail else {
                    report.failed += 1;
                    continue;
                };
                report.visited += 1;

                let Some(french) = detail.localized_name(FRENCH) else {
                    continue;
                };

                let normalized = normalize(french);
                if normalized.is_empty() {
                    continue;
                }
                self.cache
                    .insert(normalized.clone(), detail.name.clone())
                    .await;
                report.discovered += 1;

                if normalized == key {
                    tracing::info!("Resolved '{}' -> '{}' ({})", key, detail.name, report);
                    self.cache.save().await;
                    return Ok(Some(detail.name));
                }
            }

            tracing::debug!(
                "Batch {} done, {} names discovered so far",
                report.batches,
                report.discovered
            );
        }

        tracing::info!("No species named '{}' ({})", key, report);
        self.cache.save().await;
        Ok(None)
    }

    async fn fetch_detail(&self, descriptor: &SpeciesDescriptor) -> Option<SpeciesDetail> {
        match self.source.species_detail(&descriptor.url).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                tracing::debug!("Skipping species '{}': {}", descriptor.name, e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl NameResolver for FrenchResolver {
    fn language_code(&self) -> &str {
        FRENCH
    }

    async fn resolve(&self, query: &str) -> Result<Option<String>, ResolveError> {
        self.resolve_english_key(Some(query)).await
    }
}
