//! PVIS CLI - inspect the privacy service storage and viewer URL fragments.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pvis-cli",
    version,
    about = "Privacy service storage visualizer toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: pvis_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting pvis-cli");
    pvis_cmd::run(cli.command).await
}
