use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod fetcher;
mod report;


use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads FARMHELP_* variables
    dotenvy::dotenv().ok();

    // Logs go to stderr, reports to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farmhelp=info,analytics=info,common=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("FarmHelp starting up");

    let cli = Cli::parse();
    cli.run().await
}
