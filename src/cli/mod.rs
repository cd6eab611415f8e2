//! CLI module for dinedb
//!
//! Provides command-line interface for:
//! - serve: open the catalog database and serve it over HTTP
//! - seed: write a demo catalog to a database file

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, seed_database, serve};
pub use config::ServiceConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
