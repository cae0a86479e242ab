use std::io::Write;

use crate::state::AppState;

pub async fn handle_cache_stats(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    let map = state.cache.load().await;

    writeln!(out, "Cache : {}/{}", state.config.cache.dir, state.cache.storage_key())?;
    writeln!(out, "Noms français connus : {}", map.len())?;

    let mut names: Vec<(&String, &String)> = map.iter().collect();
    names.sort();
    for (french, key) in names {
        writeln!(out, "  {french} -> {key}")?;
    }
    Ok(())
}

pub async fn handle_cache_clear(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    let before = state.cache.len().await;
    state.cache.clear().await;
    state.resolver.index().reset().await;

    tracing::info!("Cleared {} cached names", before);
    writeln!(out, "Cache vidé ({before} noms supprimés)")?;
    Ok(())
}
