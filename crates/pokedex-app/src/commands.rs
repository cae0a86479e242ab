use std::io::Write;

use clap::Subcommand;

use crate::state::AppState;

pub mod cache;
pub mod compare;
pub mod resolve;
pub mod search;

use cache::{handle_cache_clear, handle_cache_stats};
use compare::handle_compare;
use resolve::handle_resolve;
use search::handle_search;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show one Pokémon by name (English or French) or id
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Compare two Pokémon side by side
    Compare { first: String, second: String },
    /// Print the catalog key for a French name
    Resolve {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Inspect or clear the French name cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CacheAction {
    /// List cached French names
    Stats,
    /// Forget every cached name
    Clear,
}

pub async fn dispatch(state: &AppState, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!("Dispatching {:?}", command);
    match command {
        // Multi-word names ("M. Mime") arrive as several arguments
        Command::Search { query } => handle_search(state, &query.join(" "), out).await,
        Command::Compare { first, second } => handle_compare(state, &first, &second, out).await,
        Command::Resolve { name } => handle_resolve(state, &name.join(" "), out).await,
        Command::Cache { action: CacheAction::Stats } => handle_cache_stats(state, out).await,
        Command::Cache { action: CacheAction::Clear } => handle_cache_clear(state, out).await,
    }
}
