//! CLI argument definitions using clap
//!
//! Commands:
//! - dinedb serve [--config <path>] [--db <path>] [--port <port>]
//! - dinedb seed [--db <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dinedb - a read-only HTTP catalog of restaurants and dishes
#[derive(Parser, Debug)]
#[command(name = "dinedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the catalog over HTTP
    Serve {
        /// Path to configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// SQLite database file, overrides the config
        #[arg(long)]
        db: Option<PathBuf>,

        /// Port to listen on, overrides the config
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create a database holding a small demo catalog
    Seed {
        /// SQLite database file to create or update
        #[arg(long, default_value = "./database.sqlite")]
        db: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
