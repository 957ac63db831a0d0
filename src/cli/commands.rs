//! Command dispatch for the phonebook CLI

use std::sync::Arc;

use crate::http::{HttpServer, ServerConfig};
use crate::store::MemoryStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { port } => serve(port),
    }
}

/// Boot the HTTP server and serve until shutdown.
///
/// Configuration comes from the environment (`PORT`, default 3001); an
/// explicit `--port` wins over both.
pub fn serve(port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = ServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }

    let store = Arc::new(MemoryStore::new());
    let server = HttpServer::new(store, config);

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("phonebook=info,tower_http=info")),
        )
        .init();
}
