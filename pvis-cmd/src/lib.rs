//! Command implementations for the storage visualizer CLI.
//!
//! Provides a grouped summary of the live storage dump and helpers for
//! encoding and decoding viewer URL fragments.

use clap::Subcommand;
use pvis_core::grouping::Property;
use std::path::PathBuf;

pub mod fragment;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the storage dump and summarize current entries by property
    Summary {
        /// Property to group by (key, ip, size, timestamp, headers)
        #[arg(short, long, default_value = "ip")]
        property: Property,

        /// JSON config file; keys it omits keep their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Storage service base URL, overrides the config
        #[arg(short, long)]
        server: Option<String>,
    },

    /// Encode or decode viewer URL fragments
    Fragment {
        #[command(subcommand)]
        command: fragment::FragmentCommand,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary {
            property,
            config,
            server,
        } => summary::run_summary(property, config.as_deref(), server.as_deref()).await,
        Command::Fragment { command } => fragment::run_fragment(command),
    }
}
