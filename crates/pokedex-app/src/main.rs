use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod lookup;
pub mod render;
pub mod settings;
pub mod state;

#[cfg(test)]
mod tests;

use self::commands::{Command, dispatch};
use self::state::AppState;

/// Pokédex lookup with French name support
#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about)]
struct Cli {
    /// JSON config file (defaults to ./pokedex.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep the French name cache in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let state = match settings::load_config(cli.config.as_deref())
        .and_then(|config| AppState::new(config, cli.ephemeral))
    {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup failed: {:#}", e);
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();

    let outcome = tokio::select! {
        result = dispatch(&state, cli.command, &mut stdout) => Some(result),
        _ = signal::ctrl_c() => None,
    };
    let _ = stdout.flush();

    match outcome {
        Some(Ok(())) => ExitCode::SUCCESS,
        Some(Err(e)) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        None => {
            tracing::info!("Interrupted");
            ExitCode::from(130)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pokedex=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .init();
}
