use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2/".to_string()
}

fn default_timeout_seconds() -> u64 {
    15
}

fn default_user_agent() -> String {
    concat!("pokedex/", env!("CARGO_PKG_VERSION")).to_string()
}

/// PokeAPI endpoint settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, must end with a slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("POKEAPI_BASE_URL").unwrap_or_else(|_| default_base_url());

        let timeout_seconds = env::var("POKEAPI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            base_url,
            timeout_seconds,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
