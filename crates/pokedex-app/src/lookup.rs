use std::fmt;
use std::sync::Arc;

use pokedex_core::catalog::{EntryFetcher, NameResolver, SpeciesSource};
use pokedex_core::error::CatalogError;
use pokedex_types::PokemonEntry;

/// User-facing lookup failures, rendered in French
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Veuillez entrer un nom ou un ID.")]
    MissingQuery,

    #[error("Veuillez entrer deux noms ou IDs.")]
    MissingPair,

    #[error("Pokémon non trouvé : {query}")]
    NotFound { query: String },

    #[error("Liste des espèces indisponible : {0}")]
    IndexUnavailable(CatalogError),

    #[error("Erreur lors de la recherche : {0}")]
    Catalog(CatalogError),
}

/// Name shown on a card: French when the species has one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName {
    pub name: String,
    pub id: u32,
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.name, self.id)
    }
}

/// Entry lookup with localized-name fallback
pub struct Lookup {
    fetcher: Arc<dyn EntryFetcher>,
    species: Arc<dyn SpeciesSource>,
    resolver: Arc<dyn NameResolver>,
}

impl Lookup {
    pub fn new(
        fetcher: Arc<dyn EntryFetcher>,
        species: Arc<dyn SpeciesSource>,
        resolver: Arc<dyn NameResolver>,
    ) -> Self {
        Self {
            fetcher,
            species,
            resolver,
        }
    }

    /// Fetch by name or id; when that fails, treat the query as a localized
    /// name and retry with the resolved catalog key.
    pub async fn find(&self, query: &str) -> Result<PokemonEntry, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::MissingQuery);
        }

        let direct_error = match self.fetcher.fetch_entry(query).await {
            Ok(entry) => return Ok(entry),
            Err(e) => e,
        };
        tracing::debug!("Direct lookup of '{}' failed: {}", query, direct_error);

        let resolved = match self.resolver.resolve(query).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(
                    "Name resolution ({}) failed for '{}': {}",
                    self.resolver.language_code(),
                    query,
                    e
                );
                None
            }
        };

        match resolved {
            Some(key) => {
                tracing::info!("'{}' resolved to '{}'", query, key);
                self.fetcher
                    .fetch_entry(&key)
                    .await
                    .map_err(|e| lookup_failure(query, e))
            }
            None => Err(lookup_failure(query, direct_error)),
        }
    }

    /// Look up two entries concurrently
    pub async fn find_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(PokemonEntry, PokemonEntry), LookupError> {
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(LookupError::MissingPair);
        }

        tokio::try_join!(self.find(first), self.find(second))
    }

    /// Localized species name, falling back to the entry's own name
    pub async fn display_name(&self, entry: &PokemonEntry) -> DisplayName {
        let language = self.resolver.language_code();

        let localized = match self.species.species_detail(&entry.species.url).await {
            Ok(detail) => detail.localized_name(language).map(str::to_string),
            Err(e) => {
                tracing::debug!("No species record for '{}': {}", entry.name, e);
                None
            }
        };

        DisplayName {
            name: localized.unwrap_or_else(|| entry.name.clone()),
            id: entry.id,
        }
    }
}

fn lookup_failure(query: &str, error: CatalogError) -> LookupError {
    match error {
        CatalogError::MissingQuery => LookupError::MissingQuery,
        CatalogError::NotFound { .. } => LookupError::NotFound {
            query: query.to_string(),
        },
        other => LookupError::Catalog(other),
    }
}
