use std::io::Write;

use crate::render::render_comparison;
use crate::state::AppState;

pub async fn handle_compare(
    state: &AppState,
    first: &str,
    second: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let (a, b) = state.lookup.find_pair(first, second).await?;

    let (a_name, b_name) = tokio::join!(state.lookup.display_name(&a), state.lookup.display_name(&b));
    write!(out, "{}", render_comparison(&a, &a_name, &b, &b_name))?;
    Ok(())
}
