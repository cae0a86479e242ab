use std::io::Write;

use crate::render::render_entry;
use crate::state::AppState;

pub async fn handle_search(state: &AppState, query: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let entry = state.lookup.find(query).await?;
    tracing::debug!("Found '{}' (#{})", entry.name, entry.id);

    let title = state.lookup.display_name(&entry).await;
    write!(out, "{}", render_entry(&entry, &title))?;
    Ok(())
}
