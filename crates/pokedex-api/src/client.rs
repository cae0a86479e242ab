use std::time::Duration;

use pokedex_config::api::ApiConfig;
use pokedex_core::catalog::{EntryFetcher, SpeciesSource};
use pokedex_core::error::CatalogError;
use pokedex_types::{PokemonEntry, SpeciesDescriptor, SpeciesDetail, SpeciesPage};
use reqwest::Url;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// PokeAPI REST client
#[derive(Clone)]
pub struct PokeApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut raw = config.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let base_url = Url::parse(&raw).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "not a hierarchical URL".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { base_url, client })
    }

    /// `{base}pokemon/{key}`, key trimmed, lowercased and percent-encoded
    pub fn entry_url(&self, query: &str) -> Result<Url, CatalogError> {
        let key = query.trim().to_lowercase();
        if key.is_empty() {
            return Err(CatalogError::MissingQuery);
        }

        let mut url = self.endpoint("pokemon/")?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::Transport(format!("Cannot extend URL {}", self.base_url)))?
            .pop_if_empty()
            .push(&key);
        Ok(url)
    }

    /// `{base}pokemon-species?limit={limit}`
    pub fn species_index_url(&self, limit: u32) -> Result<Url, CatalogError> {
        let mut url = self.endpoint("pokemon-species")?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::Transport(format!("Invalid endpoint '{}': {}", path, e)))
    }

    async fn get_json<T>(&self, url: Url) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("HTTP {} from {}", status, response.url());
            return Err(CatalogError::NotFound {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                CatalogError::Decode(e.to_string())
            } else {
                CatalogError::Transport(e.to_string())
            }
        })
    }
}

#[async_trait::async_trait]
impl EntryFetcher for PokeApiClient {
    async fn fetch_entry(&self, query: &str) -> Result<PokemonEntry, CatalogError> {
        let url = self.entry_url(query)?;
        self.get_json(url).await
    }
}

#[async_trait::async_trait]
impl SpeciesSource for PokeApiClient {
    async fn species_index(&self, limit: u32) -> Result<Vec<SpeciesDescriptor>, CatalogError> {
        let url = self.species_index_url(limit)?;
        let page: SpeciesPage = self.get_json(url).await?;

        if let Some(count) = page.count
            && count as usize > page.results.len()
        {
            tracing::warn!(
                "Species index truncated: {} of {} entries (raise the index limit)",
                page.results.len(),
                count
            );
        }

        Ok(page.results)
    }

    async fn species_detail(&self, url: &str) -> Result<SpeciesDetail, CatalogError> {
        let url = Url::parse(url)
            .map_err(|e| CatalogError::Transport(format!("Invalid species URL '{}': {}", url, e)))?;
        self.get_json(url).await
    }
}
