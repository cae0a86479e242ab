//! Flow tests against an in-memory catalog

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pokedex_config::Config;
use pokedex_core::catalog::{EntryFetcher, SpeciesSource};
use pokedex_core::error::CatalogError;
use pokedex_core::name_map::NameMapCache;
use pokedex_core::storage::MemoryStore;
use pokedex_lang_french::FrenchResolver;
use pokedex_types::{PokemonEntry, SpeciesDescriptor, SpeciesDetail};
use serde_json::json;

use crate::lookup::Lookup;
use crate::state::AppState;

mod lookup_tests;

const SPECIES_URL: &str = "https://pokeapi.co/api/v2/pokemon-species/";

pub fn species_url(id: u32) -> String {
    format!("{SPECIES_URL}{id}/")
}

pub fn entry(id: u32, name: &str, types: &[&str], stats: &[(&str, u32)]) -> PokemonEntry {
    let types: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": ""}}))
        .collect();
    let stats: Vec<_> = stats
        .iter()
        .map(|(s, v)| json!({"base_stat": v, "effort": 0, "stat": {"name": s, "url": ""}}))
        .collect();

    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "sprites": {
            "front_default": format!("https://sprites.example/{id}.png"),
            "other": {"official-artwork": {"front_default": format!("https://artwork.example/{id}.png")}}
        },
        "types": types,
        "stats": stats,
        "species": {"name": name, "url": species_url(id)}
    }))
    .unwrap()
}

fn species(name: &str, french: Option<&str>) -> SpeciesDetail {
    let mut names = vec![json!({"name": name, "language": {"name": "en", "url": ""}})];
    if let Some(french) = french {
        names.push(json!({"name": french, "language": {"name": "fr", "url": ""}}));
    }
    serde_json::from_value(json!({"name": name, "names": names})).unwrap()
}

/// Entries and species records for a handful of Pokémon
#[derive(Default)]
pub struct FakeCatalog {
    entries: HashMap<String, PokemonEntry>,
    index: Vec<SpeciesDescriptor>,
    details: HashMap<String, SpeciesDetail>,
    pub entry_error: Option<CatalogError>,
    pub index_error: Option<CatalogError>,
    pub entry_calls: AtomicUsize,
    pub index_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        let mut catalog = Self::default();
        let stats = |hp: u32, attack: u32, speed: u32| [("hp", hp), ("attack", attack), ("speed", speed)];

        catalog.add(entry(1, "bulbasaur", &["grass", "poison"], &stats(45, 49, 45)), Some("Bulbizarre"));
        catalog.add(entry(4, "charmander", &["fire"], &stats(39, 52, 65)), Some("Salamèche"));
        catalog.add(entry(25, "pikachu", &["electric"], &stats(35, 55, 90)), Some("Pikachu"));
        catalog.add(entry(132, "ditto", &["normal"], &stats(48, 48, 48)), None);
        catalog.add(entry(133, "eevee", &["normal"], &stats(55, 55, 55)), Some("Évoli"));
        catalog
    }

    fn add(&mut self, entry: PokemonEntry, french: Option<&str>) {
        let url = species_url(entry.id);
        self.index.push(SpeciesDescriptor {
            name: entry.name.clone(),
            url: url.clone(),
        });
        self.details.insert(url, species(&entry.name, french));
        self.entries.insert(entry.id.to_string(), entry.clone());
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn calls(&self) -> (usize, usize, usize) {
        (
            self.entry_calls.load(Ordering::SeqCst),
            self.index_calls.load(Ordering::SeqCst),
            self.detail_calls.load(Ordering::SeqCst),
        )
    }
}

#[async_trait::async_trait]
impl EntryFetcher for FakeCatalog {
    async fn fetch_entry(&self, query: &str) -> Result<PokemonEntry, CatalogError> {
        let key = query.trim().to_lowercase();
        if key.is_empty() {
            return Err(CatalogError::MissingQuery);
        }
        self.entry_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(e) = &self.entry_error {
            return Err(e.clone());
        }
        self.entries
            .get(&key)
            .cloned()
            .ok_or(CatalogError::NotFound { status: 404 })
    }
}

#[async_trait::async_trait]
impl SpeciesSource for FakeCatalog {
    async fn species_index(&self, _limit: u32) -> Result<Vec<SpeciesDescriptor>, CatalogError> {
        self.index_calls.fetch_add(1, Ordering::SeqCst);
        match &self.index_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.index.clone()),
        }
    }

    async fn species_detail(&self, url: &str) -> Result<SpeciesDetail, CatalogError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .get(url)
            .cloned()
            .ok_or(CatalogError::NotFound { status: 404 })
    }
}

/// App state wired to `catalog`, with an in-memory name store
pub fn test_state(catalog: Arc<FakeCatalog>) -> (AppState, Arc<MemoryStore>) {
    let config = Config::default();
    let store = Arc::new(MemoryStore::new());
    let cache = Arc::new(NameMapCache::new(store.clone(), config.cache.storage_key.clone()));
    let resolver = Arc::new(FrenchResolver::with_config(
        catalog.clone(),
        cache.clone(),
        &config.resolver,
    ));
    let lookup = Lookup::new(catalog.clone(), catalog, resolver.clone());

    let state = AppState {
        config,
        lookup,
        resolver,
        cache,
    };
    (state, store)
}
