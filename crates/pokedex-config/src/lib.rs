use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::cache::CacheConfig;
use self::resolver::ResolverConfig;

pub mod api;
pub mod cache;
pub mod resolver;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub resolver: ResolverConfig,
    pub cache: CacheConfig,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            resolver: ResolverConfig::new(),
            cache: CacheConfig::new(),
        }
    }
}
