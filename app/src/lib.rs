//! Tablebook - command shell
//!
//! Every view talks to the core through a command returning a
//! `CommandResult` envelope; the CLI just picks a command and prints the
//! envelope as JSON.

mod cli;
mod commands;
mod state;

use clap::Parser;

use cli::Cli;
use state::AppState;

/// Parse arguments, run one command, print its envelope.
/// Returns whether the command succeeded.
pub fn run() -> anyhow::Result<bool> {
    dotenvy::dotenv().ok();
    tablebook_core::init_logging();

    let cli = Cli::parse();
    let state = AppState::new(cli.config())?;
    state.initialize()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let output = runtime.block_on(cli::dispatch(&state, cli.command));
    println!("{}", serde_json::to_string_pretty(&output)?);

    tracing::debug!(success = output.success, "Command finished");
    Ok(output.success)
}
