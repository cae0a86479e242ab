use std::sync::Arc;

use pokedex_api::PokeApiClient;
use pokedex_config::Config;
use pokedex_core::name_map::NameMapCache;
use pokedex_core::storage::{FileStore, MemoryStore, NameStore};
use pokedex_lang_french::FrenchResolver;

use crate::lookup::Lookup;

pub struct AppState {
    pub config: Config,
    pub lookup: Lookup,
    pub resolver: Arc<FrenchResolver>,
    pub cache: Arc<NameMapCache>,
}

impl AppState {
    /// Wire the client, name cache and resolver. `ephemeral` keeps the name
    /// map in memory only.
    pub fn new(config: Config, ephemeral: bool) -> anyhow::Result<Self> {
        let client = Arc::new(PokeApiClient::new(&config.api)?);

        let store: Arc<dyn NameStore> = if ephemeral {
            tracing::info!("Ephemeral run, French names will not be persisted");
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(FileStore::new(&config.cache.dir))
        };
        let cache = Arc::new(NameMapCache::new(store, config.cache.storage_key.clone()));

        let resolver = Arc::new(FrenchResolver::with_config(
            client.clone(),
            cache.clone(),
            &config.resolver,
        ));
        let lookup = Lookup::new(client.clone(), client, resolver.clone());

        Ok(Self {
            config,
            lookup,
            resolver,
            cache,
        })
    }
}
