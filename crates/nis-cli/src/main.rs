use std::io::IsTerminal;

use anyhow::Context;
use clap::Parser;
use nis_api::{LaunchDetail, SpaceClient};
use nis_config::NisConfig;

mod cli;
mod fetch;
mod output;
mod progress;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("nextinspace error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = NisConfig::load_with_dotenv().context("failed to load configuration")?;
    let count = usize::try_from(cli.count.unwrap_or(config.general.default_count))
        .context("item count does not fit in memory")?;

    let verbosity = cli.verbosity();
    let detail = if verbosity == cli::Verbosity::Verbose {
        LaunchDetail::WithVehicle
    } else {
        LaunchDetail::Summary
    };

    let client = SpaceClient::new(&config.api).context("failed to build HTTP client")?;
    tracing::debug!(base_url = client.base_url(), "client ready");

    let format = cli.output_format();
    let show_spinner = format == cli::OutputFormat::Text
        && verbosity != cli::Verbosity::Quiet
        && std::io::stderr().is_terminal();
    let progress = progress::Progress::spinner("Fetching upcoming items...", show_spinner);
    let result = fetch::fetch_items(&client, cli.selection(), count, detail).await;
    progress.finish();

    let items = result.context("failed to fetch upcoming items")?;
    output::output(&items, format, verbosity)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("NEXTINSPACE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
