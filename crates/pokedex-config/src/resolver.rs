use std::env;

use serde::{Deserialize, Serialize};

fn default_batch_size() -> usize {
    20
}

fn default_index_limit() -> u32 {
    2000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ResolverConfig {
    /// Species details fetched concurrently per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// `limit` sent to the species listing, large enough for the whole catalog
    #[serde(default = "default_index_limit")]
    pub index_limit: u32,
}

impl ResolverConfig {
    pub fn new() -> Self {
        let batch_size = env::var("RESOLVER_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_batch_size);

        let index_limit = env::var("RESOLVER_INDEX_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_index_limit);

        Self {
            batch_size,
            index_limit,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            index_limit: default_index_limit(),
        }
    }
}
