use std::io::Write;

use pokedex_core::error::ResolveError;

use crate::lookup::LookupError;
use crate::state::AppState;

pub async fn handle_resolve(state: &AppState, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LookupError::MissingQuery.into());
    }

    let resolved = state
        .resolver
        .resolve_english_key(Some(name))
        .await
        .map_err(|e| match e {
            ResolveError::IndexUnavailable(inner) => LookupError::IndexUnavailable(inner),
        })?;

    match resolved {
        Some(key) => {
            writeln!(out, "{name} -> {key}")?;
            Ok(())
        }
        None => Err(LookupError::NotFound {
            query: name.to_string(),
        }
        .into()),
    }
}
