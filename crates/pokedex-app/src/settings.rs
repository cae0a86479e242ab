use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use pokedex_config::Config;

/// Picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "pokedex.json";

/// Load a JSON config file; missing fields take their defaults
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

/// Explicit file, else `pokedex.json` if present, else defaults + env
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return load_config_file(path);
    }

    let default_file = Path::new(DEFAULT_CONFIG_FILE);
    if default_file.exists() {
        return load_config_file(default_file);
    }

    tracing::debug!("No config file, using defaults and environment");
    Ok(Config::new())
}
