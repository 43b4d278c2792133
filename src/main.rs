use anyhow::Context;
use clap::Parser;
use clips_lib::bootstrap::{self, run_app};
use clips_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    bootstrap::tracing::init_tracing_subscriber().context("Failed to initialize tracing")?;

    let config = bootstrap::resolve_config(&cli)?;
    run_app(config).await
}
