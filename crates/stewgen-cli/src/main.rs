//! stewgen - risk steward proposal generator
//!
//! Collects parameter updates for Aave V3 pools and renders them into
//! payload contracts plus a replayable config document.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;
mod progress;
mod prompt;

use commands::Cli;

/// Initialize tracing on stderr so generated text on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "stewgen=debug,stewgen_codegen=debug,stewgen_core=debug"
    } else {
        "stewgen=info,stewgen_codegen=info,stewgen_core=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
