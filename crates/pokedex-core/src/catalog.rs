use pokedex_types::{PokemonEntry, SpeciesDescriptor, SpeciesDetail};

use crate::error::{CatalogError, ResolveError};

/// Species listing and detail records
#[async_trait::async_trait]
pub trait SpeciesSource: Send + Sync {
    /// Fetch the species listing in one page of at most `limit` rows
    async fn species_index(&self, limit: u32) -> Result<Vec<SpeciesDescriptor>, CatalogError>;

    /// Fetch one species detail record by its URL
    async fn species_detail(&self, url: &str) -> Result<SpeciesDetail, CatalogError>;
}

/// Resolves a canonical key (or id, or raw query) to a full entry
#[async_trait::async_trait]
pub trait EntryFetcher: Send + Sync {
    async fn fetch_entry(&self, query: &str) -> Result<PokemonEntry, CatalogError>;
}

/// Maps a localized name to the catalog's canonical key
#[async_trait::async_trait]
pub trait NameResolver: Send + Sync {
    /// Language tag handled by this resolver ("fr", ...)
    fn language_code(&self) -> &str;

    /// `Ok(None)` means the name is not known to the catalog
    async fn resolve(&self, query: &str) -> Result<Option<String>, ResolveError>;
}
