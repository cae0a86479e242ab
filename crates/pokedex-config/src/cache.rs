use std::env;

use serde::{Deserialize, Serialize};

/// Per-user cache folder, `.pokedex` in the working directory when the
/// platform has none
fn default_dir() -> String {
    dirs::cache_dir()
        .map(|p| p.join("pokedex").to_string_lossy().into_owned())
        .unwrap_or_else(|| ".pokedex".to_string())
}

fn default_storage_key() -> String {
    "poke_fr_name_map_v1".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding the persisted name map
    #[serde(default = "default_dir")]
    pub dir: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl CacheConfig {
    pub fn new() -> Self {
        let dir = env::var("POKEDEX_CACHE_DIR").unwrap_or_else(|_| default_dir());

        Self {
            dir,
            storage_key: default_storage_key(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            storage_key: default_storage_key(),
        }
    }
}
