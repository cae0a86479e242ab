use std::sync::Arc;

use pokedex_types::SpeciesDescriptor;
use tokio::sync::Mutex;

use crate::catalog::SpeciesSource;
use crate::error::CatalogError;

/// Memoized species listing.
///
/// The first successful [`SpeciesIndex::load`] fetches the whole listing in
/// one request; later calls reuse it. A failed fetch leaves nothing behind,
/// so the next call tries again.
pub struct SpeciesIndex {
    source: Arc<dyn SpeciesSource>,
    limit: u32,
    // Held across the fetch so concurrent first calls issue a single request
    entries: Mutex<Option<Arc<[SpeciesDescriptor]>>>,
}

impl SpeciesIndex {
    pub fn new(source: Arc<dyn SpeciesSource>, limit: u32) -> Self {
        Self {
            source,
            limit,
            entries: Mutex::new(None),
        }
    }

    pub async fn load(&self) -> Result<Arc<[SpeciesDescriptor]>, CatalogError> {
        let mut entries = self.entries.lock().await;
        if let Some(loaded) = entries.as_ref() {
            return Ok(Arc::clone(loaded));
        }

        tracing::info!("Loading species index (limit {})", self.limit);
        let fetched: Arc<[SpeciesDescriptor]> = self.source.species_index(self.limit).await?.into();
        tracing::info!("Species index loaded: {} entries", fetched.len());

        *entries = Some(Arc::clone(&fetched));
        Ok(fetched)
    }

    pub async fn is_loaded(&self) -> bool {
        self.entries.lock().await.is_some()
    }

    /// Forget the memoized listing
    pub async fn reset(&self) {
        *self.entries.lock().await = None;
    }
}
