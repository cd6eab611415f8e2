//! CLI command implementations
//!
//! `serve` opens the storage handle once, before the listener binds, and
//! passes it into the catalog. `seed` writes the demo dataset.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::observability::Logger;
use crate::rest_api::CatalogServer;
use crate::storage::{seed, SqliteStorage};

use super::args::Command;
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, db, port } => {
            let config = ServiceConfig::resolve(config.as_deref(), db, port)?;
            serve(config)
        }
        Command::Seed { db } => seed_database(&db),
    }
}

/// Open the catalog and serve it until the process exits
pub fn serve(config: ServiceConfig) -> CliResult<()> {
    Logger::set_min_severity(config.severity()?);

    let storage = SqliteStorage::open_read_only(&config.database_path).map_err(|e| {
        CliError::storage_error(format!(
            "Failed to open {}: {}",
            config.database_path.display(),
            e
        ))
    })?;
    Logger::info(
        "STORAGE_OPEN",
        &[("path", &config.database_path.display().to_string())],
    );

    let catalog = Catalog::new(Arc::new(storage));
    let server = CatalogServer::new(config.server, catalog);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Create or refresh a database holding the demo catalog
pub fn seed_database(db: &Path) -> CliResult<()> {
    let storage = SqliteStorage::open(db)?;
    seed::load_demo(&storage)?;

    Logger::info("SEED_COMPLETE", &[("path", &db.display().to_string())]);
    Ok(())
}
