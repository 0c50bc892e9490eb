use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::client::AlchemyClient;
use crate::client::alchemy::MAX_PAGE_SIZE;
use crate::domain::Network;
use crate::state::{App, AppConfig, StartupOptions};

/// Browse the NFTs held by a wallet or minted in a collection.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Alchemy API key
    #[arg(long, env = "ALCHEMY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Network to query (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    network: Option<Network>,

    /// Results per page, 1-100 (overrides the config file)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64))]
    page_size: Option<u32>,

    /// Wallet address to fetch on startup
    #[arg(short, long)]
    wallet: Option<String>,

    /// Collection contract address; without --wallet the whole collection is listed
    #[arg(short, long)]
    collection: Option<String>,

    /// Start with "Fetch for collection" enabled
    #[arg(long)]
    collection_mode: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the configuration; with --network/--page-size, save them
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut config = AppConfig::load();

    if let Some(Commands::Config) = cli.command {
        return run_config_command(&cli, &mut config);
    }

    let log_path = logging::init()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting nftgallery");

    let network = cli.network.unwrap_or(config.network);
    let page_size = cli.page_size.unwrap_or(config.page_size);
    let api_key = config
        .resolve_api_key(cli.api_key.as_deref())
        .wrap_err("Set --api-key, ALCHEMY_API_KEY or api_key in the config file")?;
    let client = AlchemyClient::new(network, api_key, page_size)?;
    tracing::info!(
        %network,
        page_size = client.page_size(),
        log = %log_path.display(),
        "Client ready"
    );

    let startup_options = StartupOptions {
        wallet: cli.wallet,
        collection: cli.collection,
        collection_mode: cli.collection_mode,
    };

    let mut terminal = tui::init()?;
    let mut app = App::new(client, startup_options);
    let result = app.run(&mut terminal).await;

    tui::restore()?;
    tracing::info!("Exiting");
    result
}

/// Prints the effective configuration, persisting any overrides given.
fn run_config_command(cli: &Cli, config: &mut AppConfig) -> Result<()> {
    let path = AppConfig::config_path()?;

    if cli.network.is_some() || cli.page_size.is_some() {
        if let Some(network) = cli.network {
            config.network = network;
        }
        if let Some(page_size) = cli.page_size {
            config.page_size = page_size;
        }
        config.save()?;
        println!("Saved {}", path.display());
    }

    let api_key = if config.api_key.is_some() {
        "set"
    } else {
        "not set"
    };
    println!("Config file: {}", path.display());
    println!("Network:     {}", config.network);
    println!("Page size:   {}", config.page_size);
    println!("API key:     {api_key}");
    Ok(())
}
